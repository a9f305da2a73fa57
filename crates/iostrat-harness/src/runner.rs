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

//! The benchmark loop.

use crate::cache::CacheFlush;
use crate::error::{HarnessError, Result};
use crate::prepare::{input_paths, DEFAULT_FILE_COUNT};
use crate::strategy::Strategy;
use crate::workload;
use iostrat_core::BenchmarkRecord;
use iostrat_csv::{RecordWriter, ToCsvConfig};
use memmap2::Mmap;
use std::fs::File;
use std::hint::black_box;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::runtime::{Builder, Runtime};

/// Passes over all strategies in a default run.
pub const DEFAULT_REPEATS: u32 = 10;

/// Digits after the decimal point of durations in result files.
pub const DEFAULT_PRECISION: usize = 3;

/// Harness settings.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Files read by every strategy.
    pub inputs: Vec<PathBuf>,
    pub repeats: u32,
    pub flush: CacheFlush,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            inputs: input_paths(Path::new("."), DEFAULT_FILE_COUNT),
            repeats: DEFAULT_REPEATS,
            flush: CacheFlush::default(),
        }
    }
}

/// Times every implemented strategy against a cold and a warm page cache.
///
/// Async strategies run on a single-threaded runtime, so their concurrency
/// comes from interleaving, not from extra threads.
pub struct Harness {
    config: HarnessConfig,
    runtime: Runtime,
}

impl Harness {
    pub fn new(config: HarnessConfig) -> Result<Self> {
        if config.inputs.is_empty() {
            return Err(HarnessError::NoInputs);
        }
        let runtime = Builder::new_current_thread()
            .build()
            .map_err(HarnessError::Runtime)?;
        Ok(Self { config, runtime })
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Number of rows a full run produces.
    pub fn planned_runs(&self) -> usize {
        self.config.repeats as usize * Strategy::implemented().count() * 2
    }

    /// Run every pass, handing each row to `sink` as soon as it is timed.
    ///
    /// Returns the number of rows produced.
    pub fn run<F>(&self, mut sink: F) -> Result<usize>
    where
        F: FnMut(BenchmarkRecord) -> Result<()>,
    {
        tracing::info!(
            inputs = self.config.inputs.len(),
            repeats = self.config.repeats,
            flush = %self.config.flush,
            runs = self.planned_runs(),
            "starting benchmark"
        );

        let mut count = 0;
        for repeat in 0..self.config.repeats {
            for strategy in Strategy::implemented() {
                for cold_cache in [true, false] {
                    let elapsed = self.measure(strategy, cold_cache)?;
                    tracing::debug!(
                        %strategy,
                        cold_cache,
                        repeat,
                        seconds = elapsed.as_secs_f64(),
                        "timed run"
                    );
                    sink(strategy.record(cold_cache, repeat, elapsed.as_secs_f64()))?;
                    count += 1;
                }
            }
            tracing::info!(repeat, "finished pass");
        }

        Ok(count)
    }

    /// Run every pass and stream the rows to `writer` as a results file.
    pub fn run_to_writer<W: Write>(&self, writer: W, config: ToCsvConfig) -> Result<usize> {
        let mut writer = RecordWriter::new(writer, config)?;
        let count = self.run(|record| Ok(writer.write(&record)?))?;
        writer.into_inner()?;
        Ok(count)
    }

    /// Time one run of a strategy.
    ///
    /// Opening and mapping the inputs happens before the clock starts.
    pub fn measure(&self, strategy: Strategy, cold_cache: bool) -> Result<Duration> {
        if !strategy.is_implemented() {
            return Err(HarnessError::Unimplemented(strategy));
        }
        if cold_cache {
            self.config.flush.flush()?;
        }

        let files = self.open_inputs()?;
        let maps = if strategy.use_mmap {
            self.map_inputs(&files)?
        } else {
            Vec::new()
        };

        let run_failed = |source| HarnessError::Run { strategy, source };
        let start = Instant::now();
        let checksum = match (strategy.use_async, strategy.use_mmap, strategy.use_parallel) {
            (false, false, false) => workload::sequential_read(files).map_err(run_failed)?,
            (false, false, true) => workload::parallel_read(files).map_err(run_failed)?,
            (false, true, false) => workload::sequential_mmap(&maps),
            (false, true, true) => workload::parallel_mmap(&maps).map_err(run_failed)?,
            (true, false, false) => self
                .runtime
                .block_on(workload::sequential_async_read(files))
                .map_err(run_failed)?,
            (true, false, true) => self
                .runtime
                .block_on(workload::concurrent_async_read(files))
                .map_err(run_failed)?,
            (true, true, true) => self.runtime.block_on(workload::concurrent_async_mmap(&maps)),
            (true, true, false) => return Err(HarnessError::Unimplemented(strategy)),
        };
        let elapsed = start.elapsed();

        black_box(checksum);
        Ok(elapsed)
    }

    fn open_inputs(&self) -> Result<Vec<File>> {
        self.config
            .inputs
            .iter()
            .map(|path| File::open(path).map_err(|e| HarnessError::input(path, e)))
            .collect()
    }

    fn map_inputs(&self, files: &[File]) -> Result<Vec<Mmap>> {
        files
            .iter()
            .zip(&self.config.inputs)
            .map(|(file, path)| {
                // SAFETY: the file is opened read-only and only read while
                // mapped. Truncating it from another process during a run
                // is not supported.
                unsafe { Mmap::map(file) }.map_err(|e| HarnessError::input(path, e))
            })
            .collect()
    }
}
