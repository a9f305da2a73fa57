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

//! Summarise command - per-configuration statistics.

use super::{for_each_file, load_records};
use crate::error::CliError;
use clap::ValueEnum;
use iostrat::{aggregate, summary_json, ReadConfig, Summary};
use serde_json::{Map, Value};

/// Output format of the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    /// Aligned table, one line per group
    Text,
    /// JSON array of group rows; NaN becomes null
    Json,
}

/// Print the summary of each results file.
///
/// Every file is aggregated on its own. With more than one file, text
/// output separates the tables with a `==> path <==` line and JSON output
/// is an object keyed by path. Any failing file fails the command before
/// anything is printed.
pub fn summarise(
    files: &[String],
    format: SummaryFormat,
    parallel: bool,
    config: &ReadConfig,
) -> Result<(), CliError> {
    let summaries = for_each_file(files, parallel, |path| {
        let records = load_records(path, config)?;
        Ok(aggregate(&records))
    })
    .into_iter()
    .collect::<Result<Vec<Summary>, CliError>>()?;

    let named: Vec<(&String, Summary)> = files.iter().zip(summaries).collect();
    print!("{}", render(&named, format)?);
    Ok(())
}

fn render(summaries: &[(&String, Summary)], format: SummaryFormat) -> Result<String, CliError> {
    match format {
        SummaryFormat::Text => {
            let single = summaries.len() == 1;
            let mut out = String::new();
            for (i, (path, summary)) in summaries.iter().enumerate() {
                if !single {
                    if i > 0 {
                        out.push('\n');
                    }
                    out.push_str(&format!("==> {} <==\n", path));
                }
                out.push_str(&summary.to_string());
            }
            Ok(out)
        }
        SummaryFormat::Json => {
            if let [(_, summary)] = summaries {
                let json = summary_json(summary).map_err(|e| CliError::JsonFormat {
                    message: e.to_string(),
                })?;
                return Ok(format!("{}\n", json));
            }
            let mut object = Map::new();
            for (path, summary) in summaries {
                object.insert(path.to_string(), serde_json::to_value(summary.rows())?);
            }
            Ok(format!("{}\n", serde_json::to_string_pretty(&Value::Object(object))?))
        }
    }
}
