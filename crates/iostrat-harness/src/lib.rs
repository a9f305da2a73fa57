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

//! I/O strategy benchmark harness.
//!
//! Reads a fixed set of input files in eight ways (sync or async,
//! memory-mapped or `read(2)`, sequential or parallel), each against a cold
//! and a warm page cache, and writes one result row per timed run:
//!
//! ```text
//! use_async,use_mmap,use_parallel,cold_cache,repeat,duration
//! true,true,true,true,0,1.595
//! ```
//!
//! Async + memory-mapped + sequential has no runner and never appears in
//! the output.
//!
//! # Example
//!
//! ```no_run
//! use iostrat_csv::ToCsvConfig;
//! use iostrat_harness::{prepare_inputs, CacheFlush, Harness, HarnessConfig};
//! use std::path::Path;
//!
//! let inputs = prepare_inputs(Path::new("bench-data"), 8, 64 << 20, 42).unwrap();
//! let harness = Harness::new(HarnessConfig {
//!     inputs,
//!     repeats: 3,
//!     flush: CacheFlush::Skip,
//! })
//! .unwrap();
//!
//! let config = ToCsvConfig {
//!     precision: Some(3),
//!     ..Default::default()
//! };
//! harness.run_to_writer(std::io::stdout(), config).unwrap();
//! ```

mod cache;
mod error;
mod prepare;
mod runner;
mod strategy;
pub mod workload;

pub use cache::CacheFlush;
pub use error::{HarnessError, Result};
pub use prepare::{input_paths, prepare_inputs, DEFAULT_FILE_COUNT, DEFAULT_SEED};
pub use runner::{Harness, HarnessConfig, DEFAULT_PRECISION, DEFAULT_REPEATS};
pub use strategy::Strategy;
