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

//! The eight I/O strategies.

use iostrat_core::BenchmarkRecord;
use std::fmt;

/// One way of reading the input files: sync or async, memory-mapped or
/// `read(2)`, one file at a time or all at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Strategy {
    pub use_async: bool,
    pub use_mmap: bool,
    pub use_parallel: bool,
}

impl Strategy {
    pub const fn new(use_async: bool, use_mmap: bool, use_parallel: bool) -> Self {
        Self {
            use_async,
            use_mmap,
            use_parallel,
        }
    }

    /// All eight strategies in run order: async before sync, mmap before
    /// read, parallel before sequential.
    pub fn all() -> impl Iterator<Item = Strategy> {
        [true, false].into_iter().flat_map(|use_async| {
            [true, false].into_iter().flat_map(move |use_mmap| {
                [true, false]
                    .into_iter()
                    .map(move |use_parallel| Strategy::new(use_async, use_mmap, use_parallel))
            })
        })
    }

    /// Every strategy except async + mmap + sequential, which has no runner.
    pub fn implemented() -> impl Iterator<Item = Strategy> {
        Self::all().filter(|s| s.is_implemented())
    }

    pub const fn is_implemented(self) -> bool {
        !(self.use_async && self.use_mmap && !self.use_parallel)
    }

    /// A result row for one timed run of this strategy.
    pub fn record(self, cold_cache: bool, repeat: u32, duration: f64) -> BenchmarkRecord {
        BenchmarkRecord::new(
            self.use_async,
            self.use_mmap,
            self.use_parallel,
            cold_cache,
            repeat,
            duration,
        )
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            if self.use_async { "async" } else { "sync" },
            if self.use_mmap { "mmap" } else { "read" },
            if self.use_parallel {
                "parallel"
            } else {
                "sequential"
            }
        )
    }
}
