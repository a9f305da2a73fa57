// iostrat - I/O strategy benchmark summariser
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for CSV ingestion.

use thiserror::Error;

/// CSV ingestion error types.
///
/// Every variant is fatal: a results file either loads completely or not at
/// all. Row-level variants carry the 1-based line number of the offending
/// record so a malformed file can be fixed by hand.
///
/// # Examples
///
/// ```
/// use iostrat_csv::CsvError;
///
/// let err = CsvError::TypeMismatch {
///     line: 7,
///     column: "duration".to_string(),
///     expected: "non-negative float".to_string(),
///     value: "fast".to_string(),
/// };
///
/// assert_eq!(
///     err.to_string(),
///     "Type mismatch at line 7 in column 'duration': expected non-negative float, got 'fast'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// Malformed CSV at a specific line (bad quoting, uneven row width, ...).
    ///
    /// # Examples
    ///
    /// ```
    /// use iostrat_csv::CsvError;
    ///
    /// let err = CsvError::ParseError {
    ///     line: 42,
    ///     message: "found record with 5 fields, but the previous record has 6 fields".to_string(),
    /// };
    /// assert!(err.to_string().contains("line 42"));
    /// ```
    #[error("CSV parse error at line {line}: {message}")]
    ParseError {
        /// Line number where the error occurred (1-based).
        line: u64,
        /// Detailed error message.
        message: String,
    },

    /// A field value cannot be converted to its column's type.
    #[error("Type mismatch at line {line} in column '{column}': expected {expected}, got '{value}'")]
    TypeMismatch {
        /// Line number of the record (1-based).
        line: u64,
        /// Column name where the mismatch occurred.
        column: String,
        /// Expected type description.
        expected: String,
        /// Actual value that failed to convert.
        value: String,
    },

    /// Missing required column in the header row.
    ///
    /// # Examples
    ///
    /// ```
    /// use iostrat_csv::CsvError;
    ///
    /// let err = CsvError::MissingColumn("duration".to_string());
    /// assert_eq!(err.to_string(), "Missing required column: duration");
    /// ```
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Invalid header row.
    #[error("Invalid header at position {position}: {reason}")]
    InvalidHeader {
        /// Position of the invalid header (0-based).
        position: usize,
        /// Reason the header is invalid.
        reason: String,
    },

    /// Row count exceeded the configured limit.
    ///
    /// # Examples
    ///
    /// ```
    /// use iostrat_csv::CsvError;
    ///
    /// let err = CsvError::RowLimit {
    ///     limit: 1_000_000,
    ///     actual: 1_000_001,
    /// };
    /// assert!(err.to_string().contains("Row limit"));
    /// ```
    #[error("Row limit exceeded: row count {actual} exceeds maximum {limit}")]
    RowLimit {
        /// Maximum allowed rows.
        limit: usize,
        /// Row count encountered.
        actual: usize,
    },

    /// I/O error while reading the input or writing the output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for `Result` with `CsvError`.
pub type Result<T> = std::result::Result<T, CsvError>;

impl CsvError {
    /// Line number the error refers to, if it is tied to a record.
    pub fn line(&self) -> Option<u64> {
        match self {
            CsvError::ParseError { line, .. } | CsvError::TypeMismatch { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Convert an error of the CSV library. I/O failures keep their source;
    /// everything else is a parse error at `line`.
    pub(crate) fn from_csv(err: csv::Error, line: u64) -> Self {
        let line = err.position().map_or(line, |p| p.line());
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => CsvError::Io(source),
            _ => CsvError::ParseError { line, message },
        }
    }

    /// Build a [`CsvError::TypeMismatch`].
    pub(crate) fn type_mismatch(line: u64, column: &str, expected: &str, value: &str) -> Self {
        CsvError::TypeMismatch {
            line,
            column: column.to_string(),
            expected: expected.to_string(),
            value: value.to_string(),
        }
    }
}
