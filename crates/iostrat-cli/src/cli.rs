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

//! Command-line definitions and dispatch.

use crate::commands::{self, parse_delimiter, BenchOptions, PlotOptions, SummaryFormat};
use crate::error::CliError;
use clap::{Args, Subcommand};
use iostrat::{
    Compression, EmbedConfig, PipelineConfig, PlotConfig, ReadConfig, Theme,
};
use iostrat_harness::{CacheFlush, HarnessConfig, DEFAULT_PRECISION, DEFAULT_REPEATS};
use std::path::PathBuf;

/// Options shared by every command that reads result files.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Field delimiter: one ASCII character, or `tab`
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Maximum number of data rows per file
    #[arg(long, default_value_t = iostrat::csv::DEFAULT_MAX_ROWS)]
    pub max_rows: usize,
}

impl InputArgs {
    pub fn read_config(&self) -> ReadConfig {
        ReadConfig {
            delimiter: self.delimiter,
            max_rows: self.max_rows,
            ..ReadConfig::default()
        }
    }
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print per-configuration duration statistics
    ///
    /// Groups trials by (cold_cache, use_async, use_parallel, use_mmap) and
    /// prints count, min, median, max, mean and sample standard deviation of
    /// the duration. Singleton groups have a NaN standard deviation.
    Summarise {
        /// Result files
        #[arg(value_name = "FILE", required = true)]
        files: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = SummaryFormat::Text)]
        format: SummaryFormat,

        /// Process files in parallel
        #[arg(short, long)]
        parallel: bool,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Build the cold- and warm-cache strip charts
    ///
    /// Prints the summary table, then writes the charts as HTML pages
    /// (`--html-dir`) and/or prints one embed tag per chart (`--embed`).
    Plot {
        /// Result file
        #[arg(value_name = "FILE")]
        file: String,

        /// Print one embed tag per chart
        #[arg(short, long)]
        embed: bool,

        /// Write one HTML page per chart into this directory
        #[arg(long, value_name = "DIR")]
        html_dir: Option<PathBuf>,

        /// Embedded chart height in pixels
        #[arg(long, default_value_t = iostrat::embed::DEFAULT_HEIGHT)]
        height: u32,

        /// Payload compression (raw, zlib, gzip)
        #[arg(short, long, default_value = "zlib")]
        compression: Compression,

        /// Keep the theme template in embedded payloads
        #[arg(long)]
        no_optimise: bool,

        /// Chart theme (plotly_white, simple_white, none)
        #[arg(short, long, default_value = "plotly_white")]
        theme: Theme,

        /// Caption of the cold-cache chart
        #[arg(long, default_value = "Cold cache")]
        cold_caption: String,

        /// Caption of the warm-cache chart
        #[arg(long, default_value = "Warm cache")]
        warm_caption: String,

        /// Do not print the summary table
        #[arg(short, long)]
        quiet: bool,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Run the I/O strategy benchmark and write a results file
    ///
    /// Reads the input files with every implemented strategy (sync/async,
    /// mmap/read, sequential/parallel), once after emptying the page cache
    /// and once warm, and writes one CSV row per timed run.
    Bench {
        /// Input files (default: file.1 to file.8 in --dir)
        #[arg(value_name = "INPUT")]
        inputs: Vec<PathBuf>,

        /// Directory of the default input files
        #[arg(long, value_name = "DIR", default_value = ".")]
        dir: PathBuf,

        /// Create missing default input files of this many bytes
        #[arg(long, value_name = "BYTES", conflicts_with = "inputs")]
        prepare: Option<u64>,

        /// Passes over all strategies
        #[arg(short = 'n', long, default_value_t = DEFAULT_REPEATS)]
        repeats: u32,

        /// Page cache flush before cold runs (native, drop-caches, purge, skip)
        #[arg(long, default_value = "native")]
        flush: CacheFlush,

        /// Write results to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Digits after the decimal point of durations
        #[arg(long, default_value_t = DEFAULT_PRECISION)]
        precision: usize,
    },
}

impl Commands {
    /// Execute the command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Summarise {
                files,
                format,
                parallel,
                input,
            } => commands::summarise(&files, format, parallel, &input.read_config()),
            Commands::Plot {
                file,
                embed,
                html_dir,
                height,
                compression,
                no_optimise,
                theme,
                cold_caption,
                warm_caption,
                quiet,
                input,
            } => {
                let embed = embed.then(|| EmbedConfig {
                    height,
                    optimise: !no_optimise,
                    compression,
                    ..EmbedConfig::default()
                });
                let options = PlotOptions {
                    pipeline: PipelineConfig {
                        read: input.read_config(),
                        plot: PlotConfig {
                            theme,
                            ..PlotConfig::default()
                        },
                        embed,
                        cold_caption,
                        warm_caption,
                    },
                    html_dir,
                    show_summary: !quiet,
                };
                commands::plot(&file, &options)
            }
            Commands::Bench {
                inputs,
                dir,
                prepare,
                repeats,
                flush,
                output,
                precision,
            } => commands::bench(&BenchOptions {
                inputs,
                dir,
                prepare,
                harness: HarnessConfig {
                    repeats,
                    flush,
                    ..HarnessConfig::default()
                },
                output,
                precision,
            }),
        }
    }
}
