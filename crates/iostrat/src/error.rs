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

//! Pipeline error type.

use iostrat_csv::CsvError;
use thiserror::Error;

/// Any failure of the analysis pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// The results file could not be ingested.
    #[error(transparent)]
    Csv(#[from] CsvError),

    /// The results file could not be opened.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The summary could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type of pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;
