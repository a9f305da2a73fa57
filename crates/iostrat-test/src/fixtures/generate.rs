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

//! Seeded synthetic benchmark results.
//!
//! Mirrors the loop structure of the I/O benchmark harness: every repeat
//! runs every configuration once per cache state, except async +
//! memory-mapped + sequential, which the harness never implemented.

use crate::fixtures::HEADER;
use iostrat_core::BenchmarkRecord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate records for `repeats` passes over all configurations.
///
/// The same seed always produces the same records.
pub fn harness_records(repeats: u32, seed: u64) -> Vec<BenchmarkRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut records = Vec::new();

    for repeat in 0..repeats {
        for use_async in [true, false] {
            for use_mmap in [true, false] {
                for use_parallel in [true, false] {
                    if use_async && use_mmap && !use_parallel {
                        continue;
                    }
                    for cold_cache in [true, false] {
                        let duration = expected_duration(use_mmap, use_parallel, cold_cache)
                            * rng.gen_range(0.85..1.15);
                        records.push(BenchmarkRecord::new(
                            use_async,
                            use_mmap,
                            use_parallel,
                            cold_cache,
                            repeat,
                            duration,
                        ));
                    }
                }
            }
        }
    }

    records
}

fn expected_duration(use_mmap: bool, use_parallel: bool, cold_cache: bool) -> f64 {
    let base = if cold_cache { 1.2 } else { 0.09 };
    let io = if use_mmap { 0.8 } else { 1.0 };
    let concurrency = if use_parallel { 0.35 } else { 1.0 };
    base * io * concurrency
}

/// Render records as a results file.
pub fn to_csv(records: &[BenchmarkRecord]) -> String {
    let mut out = String::with_capacity(HEADER.len() + 1 + records.len() * 40);
    out.push_str(HEADER);
    out.push('\n');
    for r in records {
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            r.use_async, r.use_mmap, r.use_parallel, r.cold_cache, r.repeat, r.duration
        ));
    }
    out
}
