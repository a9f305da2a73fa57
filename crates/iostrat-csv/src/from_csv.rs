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

//! Read benchmark result files into typed records.

use crate::error::{CsvError, Result};
use iostrat_core::{BenchmarkRecord, COLUMNS};
use std::io::Read;

/// Default maximum number of rows to prevent memory exhaustion.
///
/// # Examples
///
/// ```
/// # use iostrat_csv::ReadConfig;
/// let config = ReadConfig::default();
/// assert_eq!(config.max_rows, 1_000_000);
/// ```
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Configuration for CSV ingestion.
///
/// # Examples
///
/// ## Default Configuration
///
/// ```
/// # use iostrat_csv::ReadConfig;
/// let config = ReadConfig::default();
/// assert_eq!(config.delimiter, b',');
/// assert!(config.trim);
/// ```
///
/// ## Tab-Separated Results
///
/// ```
/// # use iostrat_csv::ReadConfig;
/// let config = ReadConfig {
///     delimiter: b'\t',
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ReadConfig {
    /// Field delimiter character (default: `,`).
    pub delimiter: u8,

    /// Whether to trim leading/trailing whitespace from fields and header
    /// names (default: `true`).
    pub trim: bool,

    /// Maximum number of data rows to read (default: 1,000,000).
    ///
    /// Ingestion stops with [`CsvError::RowLimit`] when more rows are
    /// encountered.
    pub max_rows: usize,
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

/// Parse a CSV string into benchmark records using the default
/// configuration.
///
/// The header row must name all of `use_async, use_mmap, use_parallel,
/// cold_cache, repeat, duration`. Their order is free and extra columns are
/// ignored.
///
/// # Examples
///
/// ```
/// use iostrat_csv::from_csv;
///
/// let csv_data = "use_async,use_mmap,use_parallel,cold_cache,repeat,duration\n\
///                 true,true,true,true,0,1.595\n\
///                 TRUE,True,true,false,0,0.069\n";
///
/// let records = from_csv(csv_data).unwrap();
/// assert_eq!(records.len(), 2);
/// assert!(records[0].cold_cache);
/// assert_eq!(records[1].duration, 0.069);
/// ```
///
/// # Errors
///
/// Returns an error if a required column is missing, a value cannot be
/// parsed as its column's type, or the CSV itself is malformed.
pub fn from_csv(csv: &str) -> Result<Vec<BenchmarkRecord>> {
    from_csv_with_config(csv, ReadConfig::default())
}

/// Parse a CSV string into benchmark records with a custom configuration.
pub fn from_csv_with_config(csv: &str, config: ReadConfig) -> Result<Vec<BenchmarkRecord>> {
    from_csv_reader_with_config(csv.as_bytes(), config)
}

/// Read benchmark records from any reader using the default configuration.
///
/// # Examples
///
/// ```no_run
/// use iostrat_csv::from_csv_reader;
/// use std::fs::File;
///
/// let file = File::open("results.csv").unwrap();
/// let records = from_csv_reader(file).unwrap();
/// ```
pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<BenchmarkRecord>> {
    from_csv_reader_with_config(reader, ReadConfig::default())
}

/// Read benchmark records from any reader with a custom configuration.
///
/// Any error aborts ingestion; no partial table is returned.
pub fn from_csv_reader_with_config<R: Read>(
    reader: R,
    config: ReadConfig,
) -> Result<Vec<BenchmarkRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| CsvError::from_csv(e, 1))?
        .clone();
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut records = Vec::new();
    for (record_idx, result) in csv_reader.records().enumerate() {
        if record_idx >= config.max_rows {
            return Err(CsvError::RowLimit {
                limit: config.max_rows,
                actual: record_idx + 1,
            });
        }

        // Header occupies line 1.
        let fallback_line = record_idx as u64 + 2;

        let row = result.map_err(|e| CsvError::from_csv(e, fallback_line))?;
        let line = row.position().map_or(fallback_line, |p| p.line());

        records.push(columns.parse_row(&row, line)?);
    }

    tracing::debug!(rows = records.len(), "ingested benchmark records");

    Ok(records)
}

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    use_async: usize,
    use_mmap: usize,
    use_parallel: usize,
    cold_cache: usize,
    repeat: usize,
    duration: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let mut positions: [Option<usize>; 6] = [None; 6];

        for (position, name) in headers.iter().enumerate() {
            let name = name.trim();
            if let Some(slot) = COLUMNS.iter().position(|c| *c == name) {
                if positions[slot].is_some() {
                    return Err(CsvError::InvalidHeader {
                        position,
                        reason: format!("duplicate column '{}'", name),
                    });
                }
                positions[slot] = Some(position);
            }
        }

        let find = |slot: usize| -> Result<usize> {
            positions[slot].ok_or_else(|| CsvError::MissingColumn(COLUMNS[slot].to_string()))
        };

        Ok(Self {
            use_async: find(0)?,
            use_mmap: find(1)?,
            use_parallel: find(2)?,
            cold_cache: find(3)?,
            repeat: find(4)?,
            duration: find(5)?,
        })
    }

    fn parse_row(&self, row: &csv::StringRecord, line: u64) -> Result<BenchmarkRecord> {
        Ok(BenchmarkRecord {
            use_async: parse_bool(row, self.use_async, "use_async", line)?,
            use_mmap: parse_bool(row, self.use_mmap, "use_mmap", line)?,
            use_parallel: parse_bool(row, self.use_parallel, "use_parallel", line)?,
            cold_cache: parse_bool(row, self.cold_cache, "cold_cache", line)?,
            repeat: parse_repeat(field(row, self.repeat, "repeat", line)?, line)?,
            duration: parse_duration(field(row, self.duration, "duration", line)?, line)?,
        })
    }
}

fn field<'r>(row: &'r csv::StringRecord, index: usize, column: &str, line: u64) -> Result<&'r str> {
    row.get(index).ok_or_else(|| CsvError::ParseError {
        line,
        message: format!("missing value for column '{}'", column),
    })
}

/// Case-insensitive `true` / `false`.
fn parse_bool(row: &csv::StringRecord, index: usize, column: &str, line: u64) -> Result<bool> {
    let value = field(row, index, column, line)?;
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(CsvError::type_mismatch(line, column, "boolean", value))
    }
}

fn parse_repeat(field: &str, line: u64) -> Result<u32> {
    field
        .trim()
        .parse::<u32>()
        .map_err(|_| CsvError::type_mismatch(line, "repeat", "non-negative integer", field))
}

/// Durations are seconds; negative, NaN and infinite values are rejected.
fn parse_duration(field: &str, line: u64) -> Result<f64> {
    match field.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(CsvError::type_mismatch(
            line,
            "duration",
            "non-negative float",
            field,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "use_async,use_mmap,use_parallel,cold_cache,repeat,duration\n";

    #[test]
    fn test_read_config_default() {
        let config = ReadConfig::default();
        assert_eq!(config.delimiter, b',');
        assert!(config.trim);
        assert_eq!(config.max_rows, DEFAULT_MAX_ROWS);
    }

    #[test]
    fn test_from_csv_basic() {
        let csv_data = format!("{}true,false,true,false,3,0.25\n", HEADER);
        let records = from_csv(&csv_data).unwrap();
        assert_eq!(
            records,
            vec![BenchmarkRecord::new(true, false, true, false, 3, 0.25)]
        );
    }

    #[test]
    fn test_from_csv_header_only() {
        let records = from_csv(HEADER).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_from_csv_reordered_columns() {
        let csv_data = "duration,repeat,cold_cache,use_parallel,use_mmap,use_async\n1.5,2,true,false,true,false\n";
        let records = from_csv(csv_data).unwrap();
        assert_eq!(
            records[0],
            BenchmarkRecord::new(false, true, false, true, 2, 1.5)
        );
    }

    #[test]
    fn test_from_csv_extra_columns_ignored() {
        let csv_data = "host,use_async,use_mmap,use_parallel,cold_cache,repeat,duration\nbox1,false,false,false,false,0,2.0\n";
        let records = from_csv(csv_data).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].duration, 2.0);
    }

    #[test]
    fn test_from_csv_case_insensitive_bools() {
        let csv_data = format!("{}TRUE,False,tRuE,FALSE,0,1\n", HEADER);
        let records = from_csv(&csv_data).unwrap();
        assert_eq!(
            records[0],
            BenchmarkRecord::new(true, false, true, false, 0, 1.0)
        );
    }

    #[test]
    fn test_from_csv_whitespace_trimmed() {
        let csv_data = " use_async , use_mmap ,use_parallel,cold_cache,repeat,duration\n true , false ,true,true,1, 0.5 \n";
        let records = from_csv(csv_data).unwrap();
        assert_eq!(records[0].duration, 0.5);
        assert!(records[0].use_async);
    }

    #[test]
    fn test_from_csv_tab_delimiter() {
        let csv_data = "use_async\tuse_mmap\tuse_parallel\tcold_cache\trepeat\tduration\nfalse\ttrue\tfalse\ttrue\t4\t0.1\n";
        let config = ReadConfig {
            delimiter: b'\t',
            ..Default::default()
        };
        let records = from_csv_with_config(csv_data, config).unwrap();
        assert_eq!(records[0].repeat, 4);
    }

    #[test]
    fn test_missing_column() {
        let csv_data = "use_async,use_mmap,use_parallel,cold_cache,repeat\ntrue,true,true,true,0\n";
        let err = from_csv(csv_data).unwrap_err();
        assert!(matches!(err, CsvError::MissingColumn(ref c) if c == "duration"));
    }

    #[test]
    fn test_empty_input_reports_first_column() {
        let err = from_csv("").unwrap_err();
        assert!(matches!(err, CsvError::MissingColumn(ref c) if c == "use_async"));
    }

    #[test]
    fn test_duplicate_column() {
        let csv_data = "use_async,use_mmap,use_parallel,cold_cache,repeat,duration,duration\n";
        let err = from_csv(csv_data).unwrap_err();
        assert!(matches!(err, CsvError::InvalidHeader { position: 6, .. }));
    }

    #[test]
    fn test_invalid_bool_reports_line_and_column() {
        let csv_data = format!(
            "{}true,true,true,true,0,1.0\ntrue,yes,true,true,1,1.0\n",
            HEADER
        );
        let err = from_csv(&csv_data).unwrap_err();
        match err {
            CsvError::TypeMismatch {
                line,
                column,
                value,
                ..
            } => {
                assert_eq!(line, 3);
                assert_eq!(column, "use_mmap");
                assert_eq!(value, "yes");
            }
            other => panic!("Expected TypeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_duration() {
        let csv_data = format!("{}true,true,true,true,0,fast\n", HEADER);
        let err = from_csv(&csv_data).unwrap_err();
        assert!(matches!(err, CsvError::TypeMismatch { ref column, .. } if column == "duration"));
    }

    #[test]
    fn test_empty_duration() {
        let csv_data = format!("{}true,true,true,true,0,\n", HEADER);
        assert!(from_csv(&csv_data).is_err());
    }

    #[test]
    fn test_negative_duration_rejected() {
        let csv_data = format!("{}true,true,true,true,0,-0.5\n", HEADER);
        assert!(from_csv(&csv_data).is_err());
    }

    #[test]
    fn test_nan_duration_rejected() {
        let csv_data = format!("{}true,true,true,true,0,NaN\n", HEADER);
        assert!(from_csv(&csv_data).is_err());
    }

    #[test]
    fn test_negative_repeat_rejected() {
        let csv_data = format!("{}true,true,true,true,-1,0.5\n", HEADER);
        let err = from_csv(&csv_data).unwrap_err();
        assert!(matches!(err, CsvError::TypeMismatch { ref column, .. } if column == "repeat"));
    }

    #[test]
    fn test_uneven_row_is_parse_error() {
        let csv_data = format!("{}true,true,true,true,0\n", HEADER);
        let err = from_csv(&csv_data).unwrap_err();
        assert!(matches!(err, CsvError::ParseError { .. }));
    }

    #[test]
    fn test_row_limit_enforced() {
        let mut csv_data = String::from(HEADER);
        for i in 0..=10 {
            csv_data.push_str(&format!("true,true,true,true,{},0.5\n", i));
        }
        let config = ReadConfig {
            max_rows: 10,
            ..Default::default()
        };
        let err = from_csv_with_config(&csv_data, config).unwrap_err();
        assert!(matches!(err, CsvError::RowLimit { limit: 10, actual: 11 }));
    }

    #[test]
    fn test_row_limit_not_exceeded() {
        let mut csv_data = String::from(HEADER);
        for i in 0..10 {
            csv_data.push_str(&format!("true,true,true,true,{},0.5\n", i));
        }
        let config = ReadConfig {
            max_rows: 10,
            ..Default::default()
        };
        assert_eq!(from_csv_with_config(&csv_data, config).unwrap().len(), 10);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "device went away",
            ))
        }
    }

    #[test]
    fn test_reader_failure_is_io_error() {
        let err = from_csv_reader(FailingReader).unwrap_err();
        match err {
            CsvError::Io(source) => assert_eq!(source.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("Expected Io, got {:?}", other),
        }
    }
}
