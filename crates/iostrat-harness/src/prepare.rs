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

//! Input files of a benchmark run.

use crate::error::{HarnessError, Result};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Number of input files read by every strategy.
pub const DEFAULT_FILE_COUNT: usize = 8;

/// Seed of the generated file contents.
pub const DEFAULT_SEED: u64 = 0x5eed;

const CHUNK: usize = 1 << 20;

/// Input paths `dir/file.1` to `dir/file.<count>`.
pub fn input_paths(dir: &Path, count: usize) -> Vec<PathBuf> {
    (1..=count)
        .map(|i| dir.join(format!("file.{}", i)))
        .collect()
}

/// Create the input files that are missing or have the wrong size, filled
/// with seeded random bytes. Files of the right size are left alone.
pub fn prepare_inputs(dir: &Path, count: usize, size: u64, seed: u64) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|e| HarnessError::input(dir, e))?;

    let paths = input_paths(dir, count);
    for (i, path) in paths.iter().enumerate() {
        let existing = fs::metadata(path).map(|m| m.len()).ok();
        if existing == Some(size) {
            tracing::debug!(path = %path.display(), "input file present");
            continue;
        }
        write_random(path, size, seed.wrapping_add(i as u64))
            .map_err(|e| HarnessError::input(path, e))?;
        tracing::info!(path = %path.display(), bytes = size, "created input file");
    }

    Ok(paths)
}

fn write_random(path: &Path, size: u64, seed: u64) -> std::io::Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut writer = BufWriter::new(File::create(path)?);
    let mut chunk = vec![0u8; CHUNK];

    let mut remaining = size;
    while remaining > 0 {
        let n = remaining.min(CHUNK as u64) as usize;
        rng.fill_bytes(&mut chunk[..n]);
        writer.write_all(&chunk[..n])?;
        remaining -= n as u64;
    }

    writer.flush()
}
