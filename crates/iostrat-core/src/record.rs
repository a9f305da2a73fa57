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

//! Benchmark record model.

use crate::labels::LabelKey;

/// Column names every results file must provide, in the order the benchmark
/// harness writes them.
pub const COLUMNS: [&str; 6] = [
    "use_async",
    "use_mmap",
    "use_parallel",
    "cold_cache",
    "repeat",
    "duration",
];

/// One observed benchmark trial.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchmarkRecord {
    /// Whether the trial used the async runtime.
    pub use_async: bool,
    /// Whether files were memory-mapped instead of read.
    pub use_mmap: bool,
    /// Whether files were processed concurrently.
    pub use_parallel: bool,
    /// Whether the page cache was dropped before the trial.
    pub cold_cache: bool,
    /// Trial index within its configuration.
    pub repeat: u32,
    /// Wall-clock duration in seconds.
    pub duration: f64,
}

impl BenchmarkRecord {
    /// Create a new record.
    pub fn new(
        use_async: bool,
        use_mmap: bool,
        use_parallel: bool,
        cold_cache: bool,
        repeat: u32,
        duration: f64,
    ) -> Self {
        Self {
            use_async,
            use_mmap,
            use_parallel,
            cold_cache,
            repeat,
            duration,
        }
    }

    /// The aggregation key of this record.
    pub fn group_key(&self) -> GroupKey {
        GroupKey {
            cold_cache: self.cold_cache,
            use_async: self.use_async,
            use_parallel: self.use_parallel,
            use_mmap: self.use_mmap,
        }
    }

    /// The label lookup key of this record.
    pub fn label_key(&self) -> LabelKey {
        LabelKey {
            use_async: self.use_async,
            use_parallel: self.use_parallel,
            use_mmap: self.use_mmap,
        }
    }
}

/// Aggregation key: the four configuration dimensions.
///
/// Field order matters: the derived `Ord` sorts by cache state first, which
/// keeps the printed summary stable within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupKey {
    pub cold_cache: bool,
    pub use_async: bool,
    pub use_parallel: bool,
    pub use_mmap: bool,
}
