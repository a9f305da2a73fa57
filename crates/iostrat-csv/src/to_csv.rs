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

//! Write benchmark records as a results file.

use crate::error::{CsvError, Result};
use iostrat_core::{BenchmarkRecord, COLUMNS};
use std::io::{self, Write};

/// Configuration for CSV output.
///
/// # Examples
///
/// ```
/// # use iostrat_csv::ToCsvConfig;
/// let config = ToCsvConfig {
///     precision: Some(3),
///     ..Default::default()
/// };
/// assert_eq!(config.delimiter, b',');
/// ```
#[derive(Debug, Clone)]
pub struct ToCsvConfig {
    /// Field delimiter (default: `,`).
    pub delimiter: u8,

    /// Digits after the decimal point of `duration`. `None` (the default)
    /// writes the shortest text that reads back as the same number.
    pub precision: Option<usize>,
}

impl Default for ToCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            precision: None,
        }
    }
}

/// Streaming writer of a results file.
///
/// The header is written on creation. Rows are flushed one by one, so a
/// long benchmark run leaves a readable file behind even if it is cut
/// short.
///
/// # Examples
///
/// ```
/// use iostrat_core::BenchmarkRecord;
/// use iostrat_csv::{RecordWriter, ToCsvConfig};
///
/// let mut writer = RecordWriter::new(Vec::new(), ToCsvConfig::default()).unwrap();
/// writer
///     .write(&BenchmarkRecord::new(true, false, true, true, 0, 1.25))
///     .unwrap();
/// let bytes = writer.into_inner().unwrap();
///
/// assert_eq!(
///     String::from_utf8(bytes).unwrap(),
///     "use_async,use_mmap,use_parallel,cold_cache,repeat,duration\n\
///      true,false,true,true,0,1.25\n"
/// );
/// ```
pub struct RecordWriter<W: Write> {
    inner: csv::Writer<W>,
    precision: Option<usize>,
    rows: u64,
}

impl<W: Write> RecordWriter<W> {
    /// Start a results file on `writer`.
    pub fn new(writer: W, config: ToCsvConfig) -> Result<Self> {
        let mut inner = csv::WriterBuilder::new()
            .delimiter(config.delimiter)
            .from_writer(writer);
        inner
            .write_record(COLUMNS)
            .map_err(|e| CsvError::from_csv(e, 1))?;
        inner.flush()?;

        Ok(Self {
            inner,
            precision: config.precision,
            rows: 0,
        })
    }

    /// Append one record and flush it.
    pub fn write(&mut self, record: &BenchmarkRecord) -> Result<()> {
        let duration = match self.precision {
            Some(digits) => format!("{:.*}", digits, record.duration),
            None => record.duration.to_string(),
        };
        let repeat = record.repeat.to_string();
        let fields: [&str; 6] = [
            bool_field(record.use_async),
            bool_field(record.use_mmap),
            bool_field(record.use_parallel),
            bool_field(record.cold_cache),
            &repeat,
            &duration,
        ];

        // Header occupies line 1.
        let line = self.rows + 2;
        self.inner
            .write_record(fields)
            .map_err(|e| CsvError::from_csv(e, line))?;
        self.inner.flush()?;
        self.rows += 1;
        Ok(())
    }

    /// Number of records written so far.
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.inner
            .into_inner()
            .map_err(|e| CsvError::Io(e.into_error()))
    }
}

fn bool_field(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Render records as CSV text with the default configuration.
pub fn to_csv(records: &[BenchmarkRecord]) -> Result<String> {
    to_csv_with_config(records, ToCsvConfig::default())
}

/// Render records as CSV text with a custom configuration.
pub fn to_csv_with_config(records: &[BenchmarkRecord], config: ToCsvConfig) -> Result<String> {
    let mut buffer = Vec::with_capacity(64 + records.len() * 40);
    to_csv_writer_with_config(records, &mut buffer, config)?;
    String::from_utf8(buffer)
        .map_err(|e| CsvError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Write records to any writer with a custom configuration.
pub fn to_csv_writer_with_config<W: Write>(
    records: &[BenchmarkRecord],
    writer: W,
    config: ToCsvConfig,
) -> Result<()> {
    let mut writer = RecordWriter::new(writer, config)?;
    for record in records {
        writer.write(record)?;
    }
    writer.into_inner()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_csv;

    #[test]
    fn test_header_only() {
        let csv = to_csv(&[]).unwrap();
        assert_eq!(
            csv,
            "use_async,use_mmap,use_parallel,cold_cache,repeat,duration\n"
        );
    }

    #[test]
    fn test_fixed_precision() {
        let records = [BenchmarkRecord::new(false, true, false, false, 7, 0.0694)];
        let config = ToCsvConfig {
            precision: Some(3),
            ..Default::default()
        };
        let csv = to_csv_with_config(&records, config).unwrap();
        assert_eq!(csv.lines().nth(1), Some("false,true,false,false,7,0.069"));
    }

    #[test]
    fn test_tab_delimiter() {
        let records = [BenchmarkRecord::new(true, true, true, false, 0, 2.0)];
        let config = ToCsvConfig {
            delimiter: b'\t',
            ..Default::default()
        };
        let csv = to_csv_with_config(&records, config).unwrap();
        assert_eq!(csv.lines().nth(1), Some("true\ttrue\ttrue\tfalse\t0\t2"));
    }

    #[test]
    fn test_written_file_reads_back() {
        let records = vec![
            BenchmarkRecord::new(true, true, true, true, 0, 1.595),
            BenchmarkRecord::new(false, false, false, false, 3, 0.0001),
        ];
        assert_eq!(from_csv(&to_csv(&records).unwrap()).unwrap(), records);
    }

    #[test]
    fn test_rows_counted() {
        let mut writer = RecordWriter::new(Vec::new(), ToCsvConfig::default()).unwrap();
        assert_eq!(writer.rows(), 0);
        writer
            .write(&BenchmarkRecord::new(false, false, true, true, 1, 0.5))
            .unwrap();
        assert_eq!(writer.rows(), 1);
    }

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "no space left"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let result = RecordWriter::new(FullDisk, ToCsvConfig::default());
        assert!(matches!(result, Err(CsvError::Io(_))));
    }
}
