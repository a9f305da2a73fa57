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

//! Error types for chart encoding.

use thiserror::Error;

/// Encoding and decoding errors.
///
/// An error aborts the tag of the chart being encoded; no partial tag is
/// ever produced.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// The chart's top-level keys are not exactly `data` and `layout`.
    ///
    /// # Examples
    ///
    /// ```
    /// use iostrat_embed::EmbedError;
    ///
    /// let err = EmbedError::UnexpectedKeys {
    ///     found: vec!["data".to_string(), "frames".to_string(), "layout".to_string()],
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Chart must have exactly the keys 'data' and 'layout', found: data, frames, layout"
    /// );
    /// ```
    #[error("Chart must have exactly the keys 'data' and 'layout', found: {}", .found.join(", "))]
    UnexpectedKeys {
        /// Top-level keys present, in sorted order.
        found: Vec<String>,
    },

    /// The chart's serialized form is not a JSON object.
    #[error("Chart must serialize to a JSON object")]
    NotAnObject,

    /// Serialization or parsing of the chart JSON failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Compression or decompression failed.
    #[error("Compression error: {0}")]
    Io(#[from] std::io::Error),

    /// The payload is not valid base64.
    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decompressed payload is not UTF-8.
    #[error("Payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Text that does not have the embed tag syntax.
    #[error("Malformed embed tag: {0}")]
    MalformedTag(String),
}

/// Result type for encoding operations.
pub type Result<T> = std::result::Result<T, EmbedError>;
