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

//! Configuration labels.
//!
//! Two fixed taxonomies name the benchmark configurations for display:
//!
//! | `use_async` | `use_parallel` | category            |
//! |-------------|----------------|---------------------|
//! | true        | true           | `Async, concurrent` |
//! | false       | true           | `Sync, 8 threads`   |
//! | false       | false          | `Sync, 1 thread`    |
//!
//! | `use_mmap` | category           |
//! |------------|--------------------|
//! | true       | `Memory-mapped IO` |
//! | false      | `Conventional IO`  |
//!
//! The [`LabelTable`] is the cross product of both tables (6 rows). Joining
//! records against it is an inner join: a record whose key has no row (for
//! example `use_async = true, use_parallel = false`) resolves to `None`.

use crate::record::BenchmarkRecord;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Concurrency strategy category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AsyncCategory {
    AsyncConcurrent,
    SyncEightThreads,
    SyncOneThread,
}

impl AsyncCategory {
    /// Order of the categories along a chart's category axis.
    ///
    /// This is not the declaration order of the lookup table.
    pub const DISPLAY_ORDER: [AsyncCategory; 3] = [
        AsyncCategory::AsyncConcurrent,
        AsyncCategory::SyncOneThread,
        AsyncCategory::SyncEightThreads,
    ];

    /// Human-readable category name.
    pub const fn name(self) -> &'static str {
        match self {
            AsyncCategory::AsyncConcurrent => "Async, concurrent",
            AsyncCategory::SyncEightThreads => "Sync, 8 threads",
            AsyncCategory::SyncOneThread => "Sync, 1 thread",
        }
    }
}

/// I/O strategy category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IoCategory {
    MemoryMapped,
    Conventional,
}

impl IoCategory {
    /// All categories, in legend order.
    pub const ALL: [IoCategory; 2] = [IoCategory::MemoryMapped, IoCategory::Conventional];

    /// Human-readable category name.
    pub const fn name(self) -> &'static str {
        match self {
            IoCategory::MemoryMapped => "Memory-mapped IO",
            IoCategory::Conventional => "Conventional IO",
        }
    }
}

/// `(use_async, use_parallel)` → concurrency category.
const ASYNC_LABELS: [((bool, bool), AsyncCategory); 3] = [
    ((true, true), AsyncCategory::AsyncConcurrent),
    ((false, true), AsyncCategory::SyncEightThreads),
    ((false, false), AsyncCategory::SyncOneThread),
];

/// `use_mmap` → I/O category.
const IO_LABELS: [(bool, IoCategory); 2] = [
    (true, IoCategory::MemoryMapped),
    (false, IoCategory::Conventional),
];

static STANDARD: Lazy<LabelTable> = Lazy::new(LabelTable::cross_product);

/// Lookup key of the label table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LabelKey {
    pub use_async: bool,
    pub use_parallel: bool,
    pub use_mmap: bool,
}

/// One row of the label table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelRow {
    pub key: LabelKey,
    pub async_category: AsyncCategory,
    pub io_category: IoCategory,
}

/// A record extended with its display labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledRecord {
    pub record: BenchmarkRecord,
    pub async_category: AsyncCategory,
    pub io_category: IoCategory,
}

impl LabeledRecord {
    /// Concurrency category name.
    pub fn async_name(&self) -> &'static str {
        self.async_category.name()
    }

    /// I/O category name.
    pub fn io_name(&self) -> &'static str {
        self.io_category.name()
    }
}

/// Lookup table from configuration to display labels.
#[derive(Debug, Clone)]
pub struct LabelTable {
    rows: Vec<LabelRow>,
    index: HashMap<LabelKey, usize>,
}

impl LabelTable {
    /// Build the table as the cross product of the concurrency and I/O
    /// taxonomies.
    pub fn cross_product() -> Self {
        let rows: Vec<LabelRow> = ASYNC_LABELS
            .iter()
            .flat_map(|&((use_async, use_parallel), async_category)| {
                IO_LABELS.iter().map(move |&(use_mmap, io_category)| LabelRow {
                    key: LabelKey {
                        use_async,
                        use_parallel,
                        use_mmap,
                    },
                    async_category,
                    io_category,
                })
            })
            .collect();

        let index = rows
            .iter()
            .enumerate()
            .map(|(i, row)| (row.key, i))
            .collect();

        Self { rows, index }
    }

    /// The process-wide table, built on first use.
    pub fn standard() -> &'static LabelTable {
        &STANDARD
    }

    /// All rows, in declaration order.
    pub fn rows(&self) -> &[LabelRow] {
        &self.rows
    }

    /// Look up the row for a key.
    pub fn lookup(&self, key: &LabelKey) -> Option<&LabelRow> {
        self.index.get(key).map(|&i| &self.rows[i])
    }

    /// Attach labels to one record, or `None` if its configuration has no
    /// display label.
    pub fn resolve(&self, record: &BenchmarkRecord) -> Option<LabeledRecord> {
        self.lookup(&record.label_key()).map(|row| LabeledRecord {
            record: *record,
            async_category: row.async_category,
            io_category: row.io_category,
        })
    }

    /// Inner join of records against the table.
    ///
    /// The output may be shorter than the input.
    pub fn join(&self, records: &[BenchmarkRecord]) -> Vec<LabeledRecord> {
        let labeled: Vec<LabeledRecord> =
            records.iter().filter_map(|r| self.resolve(r)).collect();

        let dropped = records.len() - labeled.len();
        if dropped > 0 {
            tracing::debug!(dropped, "records without a display label excluded");
        }

        labeled
    }
}
