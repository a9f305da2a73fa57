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

//! Structured error types for the iostrat CLI.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type of every CLI command.
///
/// Messages are captured as strings so the error is `Clone` and can be
/// collected from parallel workers.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// A file or directory could not be read or written.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// A results file could not be analysed.
    #[error("{path}: {message}")]
    Analysis {
        /// The results file
        path: PathBuf,
        /// The pipeline error message, including line and column
        message: String,
    },

    /// JSON serialization error.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },

    /// Some charts of a results file could not be encoded.
    #[error("{path}: {message}")]
    Embed {
        /// The results file
        path: PathBuf,
        /// One line per failed chart
        message: String,
    },

    /// A benchmark run failed.
    #[error("Benchmark failed: {message}")]
    Benchmark {
        /// The harness error message
        message: String,
    },
}

impl CliError {
    /// Create an I/O error with path context.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use iostrat_cli::error::CliError;
    /// use std::fs;
    ///
    /// let result = fs::read_to_string("results.csv")
    ///     .map_err(|e| CliError::io_error("results.csv", e));
    /// ```
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an analysis error with path context.
    pub fn analysis(path: impl Into<PathBuf>, source: iostrat::Error) -> Self {
        Self::Analysis {
            path: path.into(),
            message: source.to_string(),
        }
    }

}

impl From<iostrat_harness::HarnessError> for CliError {
    fn from(source: iostrat_harness::HarnessError) -> Self {
        Self::Benchmark {
            message: source.to_string(),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: source.to_string(),
        }
    }
}
