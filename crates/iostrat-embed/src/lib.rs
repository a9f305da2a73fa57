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

//! Embed tags for static documents.
//!
//! A chart is shipped to a static site as a single template directive that
//! carries the chart JSON, compressed and base64 encoded:
//!
//! 1. The chart must have exactly the top-level keys `data` and `layout`.
//! 2. With `optimise`, `layout.template` is dropped.
//! 3. The JSON is written compactly with sorted keys; NaN and infinities
//!    become `null`.
//! 4. The bytes are compressed ([`Compression`]) and base64 encoded.
//!
//! # Example
//!
//! ```
//! use iostrat_embed::{decode_payload, encode_value, Compression, EmbedConfig};
//! use serde_json::json;
//!
//! let chart = json!({ "data": [], "layout": { "template": {}, "boxmode": "overlay" } });
//! let config = EmbedConfig {
//!     caption: "Warm cache".to_string(),
//!     compression: Compression::Gzip,
//!     ..Default::default()
//! };
//!
//! let tag = encode_value(&chart, &config).unwrap();
//! assert!(tag.to_string().starts_with(r#"{% include plotly.html height="300px" caption="Warm cache""#));
//!
//! let json = decode_payload(&tag.payload, Compression::Gzip).unwrap();
//! assert_eq!(json, r#"{"data":[],"layout":{"boxmode":"overlay"}}"#);
//! ```

mod compression;
mod encode;
mod error;
mod tag;

pub use compression::Compression;
pub use encode::{canonical_json, encode_figure, encode_value, EmbedConfig, DEFAULT_HEIGHT};
pub use error::{EmbedError, Result};
pub use tag::{decode_payload, EmbedTag};
