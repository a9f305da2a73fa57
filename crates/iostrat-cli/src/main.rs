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

//! iostrat command line interface

use clap::Parser;
use iostrat_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// iostrat - I/O strategy benchmark summariser
///
/// Reads benchmark result files (one CSV row per trial) and reports how
/// each I/O and concurrency strategy performed.
///
/// # Examples
///
/// ```bash
/// # Statistics of two machines, processed in parallel
/// iostrat summarise m1.csv m2.csv --parallel
///
/// # Charts as pages and as embed tags for a static site
/// iostrat plot m1.csv --html-dir charts --embed --compression gzip
///
/// # Produce a results file from eight generated 64 MiB inputs
/// sudo iostrat bench --dir data --prepare 67108864 -o m1.csv
/// ```
#[derive(Parser)]
#[command(name = "iostrat")]
#[command(author, version, about = "iostrat - I/O strategy benchmark summariser", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iostrat=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
