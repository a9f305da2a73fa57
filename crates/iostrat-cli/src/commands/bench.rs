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

//! Bench command - run the I/O strategy benchmark and write a results file.

use crate::error::CliError;
use iostrat::csv::ToCsvConfig;
use iostrat_harness::{
    input_paths, prepare_inputs, Harness, HarnessConfig, DEFAULT_FILE_COUNT, DEFAULT_SEED,
};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// Everything the bench command needs.
#[derive(Debug, Clone)]
pub struct BenchOptions {
    /// Explicit input files; empty means `file.1` to `file.8` in `dir`.
    pub inputs: Vec<PathBuf>,
    pub dir: PathBuf,
    /// Create missing default inputs of this many bytes first.
    pub prepare: Option<u64>,
    pub harness: HarnessConfig,
    /// Results file; stdout when absent.
    pub output: Option<PathBuf>,
    pub precision: usize,
}

pub fn bench(options: &BenchOptions) -> Result<(), CliError> {
    let inputs = resolve_inputs(options)?;
    let harness = Harness::new(HarnessConfig {
        inputs,
        ..options.harness.clone()
    })?;

    let config = ToCsvConfig {
        precision: Some(options.precision),
        ..ToCsvConfig::default()
    };

    let rows = match &options.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| CliError::io_error(path, e))?;
            harness.run_to_writer(BufWriter::new(file), config)?
        }
        None => harness.run_to_writer(io::stdout().lock(), config)?,
    };

    tracing::info!(rows, "benchmark complete");
    Ok(())
}

fn resolve_inputs(options: &BenchOptions) -> Result<Vec<PathBuf>, CliError> {
    if !options.inputs.is_empty() {
        return Ok(options.inputs.clone());
    }
    match options.prepare {
        Some(size) => Ok(prepare_inputs(
            &options.dir,
            DEFAULT_FILE_COUNT,
            size,
            DEFAULT_SEED,
        )?),
        None => Ok(input_paths(&options.dir, DEFAULT_FILE_COUNT)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iostrat_harness::CacheFlush;
    use tempfile::TempDir;

    fn options(dir: &TempDir) -> BenchOptions {
        BenchOptions {
            inputs: Vec::new(),
            dir: dir.path().to_path_buf(),
            prepare: None,
            harness: HarnessConfig {
                repeats: 1,
                flush: CacheFlush::Skip,
                ..HarnessConfig::default()
            },
            output: None,
            precision: 3,
        }
    }

    #[test]
    fn test_default_inputs_in_dir() {
        let dir = TempDir::new().unwrap();
        let inputs = resolve_inputs(&options(&dir)).unwrap();
        assert_eq!(inputs.len(), DEFAULT_FILE_COUNT);
        assert_eq!(inputs[7], dir.path().join("file.8"));
    }

    #[test]
    fn test_explicit_inputs_win() {
        let dir = TempDir::new().unwrap();
        let opts = BenchOptions {
            inputs: vec![PathBuf::from("a.bin")],
            prepare: Some(10),
            ..options(&dir)
        };
        assert_eq!(resolve_inputs(&opts).unwrap(), vec![PathBuf::from("a.bin")]);
        assert!(!dir.path().join("file.1").exists());
    }

    #[test]
    fn test_prepare_creates_inputs() {
        let dir = TempDir::new().unwrap();
        let opts = BenchOptions {
            prepare: Some(1024),
            ..options(&dir)
        };
        let inputs = resolve_inputs(&opts).unwrap();
        assert!(inputs.iter().all(|p| p.exists()));
    }
}
