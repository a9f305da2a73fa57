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

//! iostrat CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **summarise**: per-configuration statistics of one or more result
//!   files, as a table or JSON
//! - **plot**: cold- and warm-cache strip charts as HTML pages and/or
//!   embed tags
//! - **bench**: run the I/O strategy benchmark that produces result files
//!
//! # Examples
//!
//! ```no_run
//! use iostrat_cli::commands::{summarise, SummaryFormat};
//! use iostrat::ReadConfig;
//!
//! # fn main() -> Result<(), iostrat_cli::error::CliError> {
//! let files = vec!["m1.csv".to_string(), "m2.csv".to_string()];
//! summarise(&files, SummaryFormat::Json, true, &ReadConfig::default())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! Diagnostics go to stderr through `tracing`; `RUST_LOG` selects the
//! level (default `iostrat=info`). Stdout carries only summaries and tags.

pub mod cli;
pub mod commands;
pub mod error;
