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

//! Shared test fixtures and utilities for iostrat crates.
//!
//! # Quick Start
//!
//! ```rust
//! use iostrat_test::fixtures;
//!
//! // Hand-written result files
//! let csv = fixtures::SCENARIO_A;
//! let csv = fixtures::UNLABELED_CONFIGURATION;
//!
//! // Invalid inputs for error-path tests
//! for (name, invalid) in fixtures::errors::invalid_csv_samples() {
//!     // feed `invalid` to the reader
//! }
//!
//! // Seeded synthetic data shaped like the benchmark harness output
//! let records = fixtures::generate::harness_records(3, 42);
//! let csv = fixtures::generate::to_csv(&records);
//! ```

pub mod fixtures;

pub use fixtures::generate::{harness_records, to_csv};
