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

//! CLI command implementations

mod bench;
mod plot;
mod summarise;

pub use bench::{bench, BenchOptions};
pub use plot::{plot, PlotOptions};
pub use summarise::{summarise, SummaryFormat};

use crate::error::CliError;
use iostrat::csv::from_csv_reader_with_config;
use iostrat::{BenchmarkRecord, ReadConfig};
use rayon::prelude::*;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load the records of one results file.
pub fn load_records(path: &Path, config: &ReadConfig) -> Result<Vec<BenchmarkRecord>, CliError> {
    let file = File::open(path).map_err(|e| CliError::io_error(path, e))?;
    let records = from_csv_reader_with_config(BufReader::new(file), config.clone())
        .map_err(|e| CliError::analysis(path, e.into()))?;
    tracing::info!(path = %path.display(), records = records.len(), "loaded results");
    Ok(records)
}

/// Run `job` over every file, on the rayon pool when `parallel` is set.
///
/// Results keep the order of `files`.
pub fn for_each_file<T, F>(files: &[String], parallel: bool, job: F) -> Vec<Result<T, CliError>>
where
    T: Send,
    F: Fn(&Path) -> Result<T, CliError> + Sync,
{
    if parallel && files.len() > 1 {
        files.par_iter().map(|f| job(Path::new(f))).collect()
    } else {
        files.iter().map(|f| job(Path::new(f))).collect()
    }
}

/// Parse a delimiter argument: one ASCII character, or `tab`.
pub fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() => Ok(c as u8),
                _ => Err(format!(
                    "delimiter must be a single ASCII character or 'tab', got '{}'",
                    s
                )),
            }
        }
    }
}
