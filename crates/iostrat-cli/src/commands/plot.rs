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

//! Plot command - cache-state charts, HTML pages and embed tags.

use super::load_records;
use crate::error::CliError;
use iostrat::plot::write_html;
use iostrat::{analyse, CacheChart, PipelineConfig, Report};
use std::fs;
use std::path::{Path, PathBuf};

/// Everything the plot command needs besides the input file.
#[derive(Debug, Clone, Default)]
pub struct PlotOptions {
    pub pipeline: PipelineConfig,
    /// Write one HTML page per chart into this directory.
    pub html_dir: Option<PathBuf>,
    /// Print the summary table before any tags.
    pub show_summary: bool,
}

/// Build both charts of a results file and emit them.
///
/// Output order on stdout: summary table (if enabled), then one embed tag
/// per chart, cold first. A chart that fails to encode does not hold back
/// the others; its error is returned once everything else is out.
pub fn plot(file: &str, options: &PlotOptions) -> Result<(), CliError> {
    let path = Path::new(file);
    let records = load_records(path, &options.pipeline.read)?;
    let report = analyse(&records, &options.pipeline);

    if options.show_summary {
        print!("{}", report.summary);
    }

    if let Some(dir) = &options.html_dir {
        fs::create_dir_all(dir).map_err(|e| CliError::io_error(dir, e))?;
        for chart in &report.charts {
            let target = dir.join(page_name(path, chart));
            write_html(&chart.figure, &chart.caption, &target)
                .map_err(|e| CliError::io_error(&target, e))?;
            tracing::info!(path = %target.display(), cache = %chart.state, "wrote chart page");
        }
    }

    for tag in report.tags() {
        println!("{}", tag);
    }

    check_embedded(path, &report)
}

fn check_embedded(path: &Path, report: &Report) -> Result<(), CliError> {
    let failures: Vec<String> = report
        .embed_failures()
        .map(|(state, e)| format!("{} chart not embedded: {}", state, e))
        .collect();
    if failures.is_empty() {
        return Ok(());
    }
    Err(CliError::Embed {
        path: path.to_path_buf(),
        message: failures.join("; "),
    })
}

/// `<input stem>-<cache state>.html`
fn page_name(input: &Path, chart: &CacheChart) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "results".to_string());
    format!("{}-{}.html", stem, chart.state)
}
