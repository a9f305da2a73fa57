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

//! Chart to embed tag encoding.

use crate::compression::Compression;
use crate::error::{EmbedError, Result};
use crate::tag::EmbedTag;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use iostrat_plot::Figure;
use serde_json::Value;

/// Default tag height in pixels.
pub const DEFAULT_HEIGHT: u32 = 300;

/// The only top-level keys a chart may have, sorted.
const CHART_KEYS: [&str; 2] = ["data", "layout"];

/// Presentation parameters of an embed tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedConfig {
    /// Height of the embedded chart in pixels.
    pub height: u32,
    pub caption: String,
    /// Drop `layout.template`; the embedding page applies its own theme.
    pub optimise: bool,
    pub compression: Compression,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            caption: String::new(),
            optimise: true,
            compression: Compression::default(),
        }
    }
}

/// Encode a typed chart.
pub fn encode_figure(figure: &Figure, config: &EmbedConfig) -> Result<EmbedTag> {
    let value = figure.to_value()?;
    encode_value(&value, config)
}

/// Encode a chart in its generic JSON form.
///
/// # Errors
///
/// [`EmbedError::NotAnObject`] or [`EmbedError::UnexpectedKeys`] when the
/// value is not an object with exactly the keys `data` and `layout`.
pub fn encode_value(chart: &Value, config: &EmbedConfig) -> Result<EmbedTag> {
    let json = canonical_json(chart, config.optimise)?;
    let compressed = config.compression.compress(json.as_bytes())?;
    let payload = STANDARD.encode(&compressed);

    tracing::debug!(
        compression = %config.compression,
        json_bytes = json.len(),
        compressed_bytes = compressed.len(),
        payload_bytes = payload.len(),
        "encoded chart"
    );

    Ok(EmbedTag {
        height: config.height,
        caption: config.caption.clone(),
        payload,
    })
}

/// Compact JSON of a chart with sorted keys, optionally without its theme.
///
/// Non-finite numbers are written as `null`.
pub fn canonical_json(chart: &Value, optimise: bool) -> Result<String> {
    let object = chart.as_object().ok_or(EmbedError::NotAnObject)?;

    let keys: Vec<&str> = object.keys().map(String::as_str).collect();
    if keys != CHART_KEYS {
        return Err(EmbedError::UnexpectedKeys {
            found: object.keys().cloned().collect(),
        });
    }

    if !optimise {
        return Ok(serde_json::to_string(chart)?);
    }

    let mut chart = chart.clone();
    if let Some(layout) = chart.get_mut("layout").and_then(Value::as_object_mut) {
        layout.remove("template");
    }
    Ok(serde_json::to_string(&chart)?)
}
