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

//! # iostrat
//!
//! Summarise and chart the results of an I/O strategy benchmark: sync vs
//! async, one thread vs eight, memory-mapped vs conventional reads, cold vs
//! warm page cache.
//!
//! ## Quick Start
//!
//! ```rust
//! use iostrat::{analyse_csv, EmbedConfig, PipelineConfig};
//!
//! let csv = "use_async,use_mmap,use_parallel,cold_cache,repeat,duration
//! true,true,true,false,0,1.595
//! true,true,true,false,1,0.069
//! ";
//!
//! let config = PipelineConfig {
//!     embed: Some(EmbedConfig::default()),
//!     ..Default::default()
//! };
//! let report = analyse_csv(csv, &config).unwrap();
//!
//! // Per-configuration statistics
//! println!("{}", report.summary);
//!
//! // One embed tag per cache state
//! for tag in report.tags() {
//!     println!("{}", tag);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`model`]: records, aggregation and labels
//! - [`csv`]: result file ingestion
//! - [`plot`]: strip-chart construction and HTML pages
//! - [`embed`]: embed tag encoding

mod error;
mod pipeline;

pub use error::{Error, Result};
pub use pipeline::{
    analyse, analyse_csv, analyse_file, read_file, summary_json, CacheChart, PipelineConfig,
    Report,
};

pub use iostrat_core::{aggregate, BenchmarkRecord, LabelTable, Statistics, Summary};
pub use iostrat_csv::{CsvError, ReadConfig};
pub use iostrat_embed::{Compression, EmbedConfig, EmbedError, EmbedTag};
pub use iostrat_plot::{CacheState, Figure, PlotConfig, Theme};

pub mod model {
    //! Records, aggregation and labels
    pub use iostrat_core::*;
}

pub mod csv {
    //! Result file ingestion
    pub use iostrat_csv::*;
}

pub mod plot {
    //! Strip-chart construction and HTML pages
    pub use iostrat_plot::*;
}

pub mod embed {
    //! Embed tag encoding
    pub use iostrat_embed::*;
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
