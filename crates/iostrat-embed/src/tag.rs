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

//! The embed tag and its inverse.
//!
//! A tag is a template directive understood by the static site that hosts
//! the charts:
//!
//! ```text
//! {% include plotly.html height="300px" caption="Cold cache" data="eJy..." %}
//! ```
//!
//! A `"` in the caption is written as `&quot;`; every other character,
//! `&` included, is written as is.

use crate::compression::Compression;
use crate::error::{EmbedError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

const PREFIX: &str = "{% include plotly.html ";
const SUFFIX: &str = " %}";

/// One encoded chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedTag {
    pub height: u32,
    pub caption: String,
    /// Base64 of the compressed chart JSON.
    pub payload: String,
}

impl EmbedTag {
    /// Parse tag text back into its attributes.
    ///
    /// # Examples
    ///
    /// ```
    /// use iostrat_embed::EmbedTag;
    ///
    /// let tag = EmbedTag::parse(
    ///     r#"{% include plotly.html height="300px" caption="Warm cache" data="e30=" %}"#,
    /// )
    /// .unwrap();
    /// assert_eq!(tag.height, 300);
    /// assert_eq!(tag.caption, "Warm cache");
    /// assert_eq!(tag.payload, "e30=");
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let body = text
            .trim()
            .strip_prefix(PREFIX)
            .and_then(|rest| rest.strip_suffix(SUFFIX))
            .ok_or_else(|| malformed("not a plotly.html include directive"))?;

        let mut height = None;
        let mut caption = None;
        let mut payload = None;

        let mut rest = body.trim_start();
        while !rest.is_empty() {
            let (name, after) = rest
                .split_once("=\"")
                .ok_or_else(|| malformed("expected name=\"value\" attribute"))?;
            let (value, after) = after
                .split_once('"')
                .ok_or_else(|| malformed("unterminated attribute value"))?;

            let slot = match name {
                "height" => &mut height,
                "caption" => &mut caption,
                "data" => &mut payload,
                other => return Err(malformed(&format!("unknown attribute '{}'", other))),
            };
            if slot.replace(value).is_some() {
                return Err(malformed(&format!("duplicate attribute '{}'", name)));
            }

            rest = after.trim_start();
        }

        let height = height.ok_or_else(|| malformed("missing height"))?;
        let height = height
            .strip_suffix("px")
            .and_then(|h| h.parse::<u32>().ok())
            .ok_or_else(|| malformed(&format!("invalid height '{}'", height)))?;

        Ok(Self {
            height,
            caption: unescape(caption.ok_or_else(|| malformed("missing caption"))?),
            payload: payload
                .ok_or_else(|| malformed("missing data"))?
                .to_string(),
        })
    }

    /// Decode the payload into the chart JSON.
    pub fn decode(&self, compression: Compression) -> Result<Value> {
        let json = decode_payload(&self.payload, compression)?;
        Ok(serde_json::from_str(&json)?)
    }
}

impl fmt::Display for EmbedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}height=\"{}px\" caption=\"{}\" data=\"{}\"{}",
            PREFIX,
            self.height,
            escape(&self.caption),
            self.payload,
            SUFFIX
        )
    }
}

impl FromStr for EmbedTag {
    type Err = EmbedError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Base64-decode and decompress a payload into JSON text.
pub fn decode_payload(payload: &str, compression: Compression) -> Result<String> {
    let compressed = STANDARD.decode(payload.trim())?;
    let bytes = compression.decompress(&compressed)?;
    Ok(String::from_utf8(bytes)?)
}

fn malformed(reason: &str) -> EmbedError {
    EmbedError::MalformedTag(reason.to_string())
}

fn escape(caption: &str) -> String {
    caption.replace('"', "&quot;")
}

fn unescape(caption: &str) -> String {
    caption.replace("&quot;", "\"")
}
