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

//! Emptying the page cache before cold runs.

use crate::error::{HarnessError, Result};
use std::fmt;
use std::fs;
use std::process::Command;
use std::str::FromStr;

const DROP_CACHES: &str = "/proc/sys/vm/drop_caches";

/// How the page cache is emptied before a cold-cache run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheFlush {
    /// `sync`, then write `3` to `/proc/sys/vm/drop_caches`. Linux, needs
    /// root.
    DropCaches,
    /// `sync`, then `sudo purge`. macOS.
    Purge,
    /// Do nothing. Cold rows then measure whatever the cache holds.
    Skip,
}

impl CacheFlush {
    /// The method of the current platform; `Skip` where none is known.
    pub const fn native() -> Self {
        if cfg!(target_os = "linux") {
            CacheFlush::DropCaches
        } else if cfg!(target_os = "macos") {
            CacheFlush::Purge
        } else {
            CacheFlush::Skip
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            CacheFlush::DropCaches => "drop-caches",
            CacheFlush::Purge => "purge",
            CacheFlush::Skip => "skip",
        }
    }

    /// Empty the page cache.
    pub fn flush(self) -> Result<()> {
        match self {
            CacheFlush::Skip => return Ok(()),
            CacheFlush::DropCaches => {
                run(self, Command::new("sync"))?;
                fs::write(DROP_CACHES, "3\n")
                    .map_err(|e| self.failed(format!("{}: {}", DROP_CACHES, e)))?;
            }
            CacheFlush::Purge => {
                run(self, Command::new("sync"))?;
                let mut purge = Command::new("sudo");
                purge.arg("purge");
                run(self, purge)?;
            }
        }
        tracing::trace!(method = self.name(), "flushed page cache");
        Ok(())
    }

    fn failed(self, message: String) -> HarnessError {
        HarnessError::CacheFlush {
            method: self.name(),
            message,
        }
    }
}

impl Default for CacheFlush {
    fn default() -> Self {
        Self::native()
    }
}

fn run(flush: CacheFlush, mut command: Command) -> Result<()> {
    let program = command.get_program().to_string_lossy().into_owned();
    let status = command
        .status()
        .map_err(|e| flush.failed(format!("{}: {}", program, e)))?;
    if !status.success() {
        return Err(flush.failed(format!("{} exited with {}", program, status)));
    }
    Ok(())
}

impl fmt::Display for CacheFlush {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CacheFlush {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "native" => Ok(CacheFlush::native()),
            "drop-caches" | "drop_caches" => Ok(CacheFlush::DropCaches),
            "purge" => Ok(CacheFlush::Purge),
            "skip" | "none" => Ok(CacheFlush::Skip),
            _ => Err(format!(
                "unknown cache flush '{}' (expected native, drop-caches, purge or skip)",
                s
            )),
        }
    }
}
