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

//! Core data model for iostrat.
//!
//! This crate holds everything that operates on an already-ingested table of
//! benchmark trials:
//!
//! - [`record`]: the [`BenchmarkRecord`] row type and its grouping keys
//! - [`aggregate`]: per-configuration summary statistics over `duration`
//! - [`labels`]: the fixed label taxonomies and the inner join that attaches
//!   human-readable names to records
//!
//! # Example
//!
//! ```
//! use iostrat_core::{aggregate, BenchmarkRecord, LabelTable};
//!
//! let records = vec![
//!     BenchmarkRecord::new(true, true, true, false, 0, 1.595),
//!     BenchmarkRecord::new(true, true, true, false, 1, 0.069),
//! ];
//!
//! let summary = aggregate(&records);
//! assert_eq!(summary.len(), 1);
//!
//! let labeled = LabelTable::standard().join(&records);
//! assert_eq!(labeled[0].async_name(), "Async, concurrent");
//! assert_eq!(labeled[0].io_name(), "Memory-mapped IO");
//! ```

pub mod aggregate;
pub mod labels;
pub mod record;

pub use aggregate::{aggregate, compute_statistics, AggregateRow, Statistics, Summary};
pub use labels::{AsyncCategory, IoCategory, LabelKey, LabelRow, LabelTable, LabeledRecord};
pub use record::{BenchmarkRecord, GroupKey, COLUMNS};
