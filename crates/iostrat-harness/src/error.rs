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

//! Harness error type.

use crate::strategy::Strategy;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Any failure of a benchmark run.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// An input file could not be opened, mapped, read or created.
    #[error("I/O error for '{path}': {source}")]
    Input {
        /// The input file
        path: PathBuf,
        /// The underlying error
        #[source]
        source: io::Error,
    },

    /// A read failed while a strategy was being timed.
    #[error("{strategy} run failed: {source}")]
    Run {
        strategy: Strategy,
        #[source]
        source: io::Error,
    },

    /// The page cache could not be emptied before a cold run.
    #[error("cache flush '{method}' failed: {message}")]
    CacheFlush {
        /// Flush method name
        method: &'static str,
        /// What went wrong
        message: String,
    },

    /// The strategy has no runner.
    #[error("{0} is not implemented")]
    Unimplemented(Strategy),

    /// No input files were given.
    #[error("no input files")]
    NoInputs,

    /// The async runtime could not be started.
    #[error("async runtime: {0}")]
    Runtime(#[source] io::Error),

    /// A result row could not be written.
    #[error(transparent)]
    Output(#[from] iostrat_csv::CsvError),
}

impl HarnessError {
    pub(crate) fn input(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Input {
            path: path.into(),
            source,
        }
    }
}

/// Result type of harness operations.
pub type Result<T> = std::result::Result<T, HarnessError>;
