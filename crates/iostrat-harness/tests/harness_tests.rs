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

//! Harness runs against small generated inputs.

use iostrat_core::BenchmarkRecord;
use iostrat_csv::{from_csv, ToCsvConfig};
use iostrat_harness::workload::{self, touch_bytes};
use iostrat_harness::{
    prepare_inputs, CacheFlush, Harness, HarnessConfig, HarnessError, Strategy,
};
use memmap2::Mmap;
use proptest::prelude::*;
use std::fs::{self, File};
use std::path::PathBuf;
use tempfile::TempDir;

fn harness(dir: &TempDir, repeats: u32) -> Harness {
    let inputs = prepare_inputs(dir.path(), 3, 200_000, 7).unwrap();
    Harness::new(HarnessConfig {
        inputs,
        repeats,
        flush: CacheFlush::Skip,
    })
    .unwrap()
}

fn open(paths: &[PathBuf]) -> Vec<File> {
    paths.iter().map(|p| File::open(p).unwrap()).collect()
}

#[test]
fn test_one_pass_covers_implemented_strategies() {
    let dir = TempDir::new().unwrap();
    let harness = harness(&dir, 1);

    let mut records: Vec<BenchmarkRecord> = Vec::new();
    let count = harness
        .run(|record| {
            records.push(record);
            Ok(())
        })
        .unwrap();

    assert_eq!(count, 14);
    assert_eq!(harness.planned_runs(), 14);
    assert!(!records
        .iter()
        .any(|r| r.use_async && r.use_mmap && !r.use_parallel));
    assert!(records.iter().all(|r| r.repeat == 0 && r.duration >= 0.0));

    // Cold run first, then warm, for every strategy.
    assert!(records[0].cold_cache);
    assert!(!records[1].cold_cache);
    assert_eq!(records.iter().filter(|r| r.cold_cache).count(), 7);
}

#[test]
fn test_results_file_reads_back() {
    let dir = TempDir::new().unwrap();
    let harness = harness(&dir, 2);

    let config = ToCsvConfig {
        precision: Some(3),
        ..Default::default()
    };
    let mut out = Vec::new();
    let count = harness.run_to_writer(&mut out, config).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("use_async,use_mmap,use_parallel,cold_cache,repeat,duration\n"));

    let records = from_csv(&text).unwrap();
    assert_eq!(records.len(), count);
    assert_eq!(count, 28);
    assert_eq!(records.last().unwrap().repeat, 1);
}

#[test]
fn test_unimplemented_strategy_rejected() {
    let dir = TempDir::new().unwrap();
    let harness = harness(&dir, 1);
    let result = harness.measure(Strategy::new(true, true, false), false);
    assert!(matches!(result, Err(HarnessError::Unimplemented(_))));
}

#[test]
fn test_missing_input_names_path() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("file.9");
    let harness = Harness::new(HarnessConfig {
        inputs: vec![missing.clone()],
        repeats: 1,
        flush: CacheFlush::Skip,
    })
    .unwrap();

    match harness.measure(Strategy::new(false, false, false), false) {
        Err(HarnessError::Input { path, .. }) => assert_eq!(path, missing),
        other => panic!("Expected Input error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_no_inputs_rejected() {
    let result = Harness::new(HarnessConfig {
        inputs: Vec::new(),
        repeats: 1,
        flush: CacheFlush::Skip,
    });
    assert!(matches!(result, Err(HarnessError::NoInputs)));
}

#[test]
fn test_all_runners_see_the_same_bytes() {
    let dir = TempDir::new().unwrap();
    let paths = prepare_inputs(dir.path(), 4, 150_001, 3).unwrap();
    let expected = paths
        .iter()
        .map(|p| touch_bytes(&fs::read(p).unwrap()))
        .fold(0u8, u8::wrapping_add);

    let maps: Vec<Mmap> = open(&paths)
        .iter()
        .map(|f| unsafe { Mmap::map(f) }.unwrap())
        .collect();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();

    assert_eq!(workload::sequential_read(open(&paths)).unwrap(), expected);
    assert_eq!(workload::parallel_read(open(&paths)).unwrap(), expected);
    assert_eq!(workload::sequential_mmap(&maps), expected);
    assert_eq!(workload::parallel_mmap(&maps).unwrap(), expected);
    assert_eq!(
        runtime
            .block_on(workload::sequential_async_read(open(&paths)))
            .unwrap(),
        expected
    );
    assert_eq!(
        runtime
            .block_on(workload::concurrent_async_read(open(&paths)))
            .unwrap(),
        expected
    );
    assert_eq!(
        runtime.block_on(workload::concurrent_async_mmap(&maps)),
        expected
    );
}

proptest! {
    #[test]
    fn prop_chunked_scan_matches_whole(bytes in prop::collection::vec(any::<u8>(), 0..4096), chunk in 1usize..1500) {
        let mut stride = workload::Stride::default();
        for part in bytes.chunks(chunk) {
            stride.touch(part);
        }
        prop_assert_eq!(stride.sum(), touch_bytes(&bytes));
    }
}
