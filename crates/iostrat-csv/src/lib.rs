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

//! CSV ingestion of benchmark result files.
//!
//! The benchmark harness writes one row per trial:
//!
//! ```text
//! use_async,use_mmap,use_parallel,cold_cache,repeat,duration
//! true,true,true,true,0,1.595
//! true,true,true,false,0,0.069
//! ```
//!
//! This crate turns such a file into a `Vec<BenchmarkRecord>`, and writes
//! records back out in the same layout.
//!
//! # Rules
//!
//! - All six columns must be present; order is free, extra columns are ignored
//! - Booleans accept `true` / `false` in any letter case
//! - `repeat` is a non-negative integer
//! - `duration` is a non-negative, finite number of seconds
//!
//! Any violation is fatal and reported with the line and column that caused
//! it.
//!
//! # Examples
//!
//! ```no_run
//! use iostrat_csv::{from_csv_reader_with_config, ReadConfig};
//! use std::fs::File;
//!
//! let file = File::open("results.tsv").unwrap();
//! let config = ReadConfig {
//!     delimiter: b'\t',
//!     ..Default::default()
//! };
//! let records = from_csv_reader_with_config(file, config).unwrap();
//! ```

mod error;
mod from_csv;
mod to_csv;

// Re-export public API
pub use error::{CsvError, Result};
pub use from_csv::{
    from_csv, from_csv_reader, from_csv_reader_with_config, from_csv_with_config, ReadConfig,
    DEFAULT_MAX_ROWS,
};
pub use to_csv::{
    to_csv, to_csv_with_config, to_csv_writer_with_config, RecordWriter, ToCsvConfig,
};
