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

//! Payload compression codecs.

use flate2::read::{GzDecoder, ZlibDecoder};
use flate2::write::{GzEncoder, ZlibEncoder};
use flate2::Compression as Level;
use std::fmt;
use std::io::{self, Read, Write};
use std::str::FromStr;

/// Codec applied to the JSON bytes before base64 encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    /// No compression.
    Raw,
    /// DEFLATE with a zlib header and checksum.
    #[default]
    Zlib,
    /// DEFLATE in a gzip frame. The header carries no timestamp, so equal
    /// inputs give equal output.
    Gzip,
}

impl Compression {
    pub const ALL: [Compression; 3] = [Compression::Raw, Compression::Zlib, Compression::Gzip];

    pub fn name(self) -> &'static str {
        match self {
            Compression::Raw => "raw",
            Compression::Zlib => "zlib",
            Compression::Gzip => "gzip",
        }
    }

    /// Compress `bytes` at the best compression level.
    pub fn compress(self, bytes: &[u8]) -> io::Result<Vec<u8>> {
        match self {
            Compression::Raw => Ok(bytes.to_vec()),
            Compression::Zlib => {
                let mut encoder = ZlibEncoder::new(Vec::new(), Level::best());
                encoder.write_all(bytes)?;
                encoder.finish()
            }
            Compression::Gzip => {
                let mut encoder = GzEncoder::new(Vec::new(), Level::best());
                encoder.write_all(bytes)?;
                encoder.finish()
            }
        }
    }

    /// Reverse [`Compression::compress`].
    pub fn decompress(self, bytes: &[u8]) -> io::Result<Vec<u8>> {
        let mut out = Vec::new();
        match self {
            Compression::Raw => out.extend_from_slice(bytes),
            Compression::Zlib => {
                ZlibDecoder::new(bytes).read_to_end(&mut out)?;
            }
            Compression::Gzip => {
                GzDecoder::new(bytes).read_to_end(&mut out)?;
            }
        }
        Ok(out)
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Compression {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" | "none" => Ok(Compression::Raw),
            "zlib" | "deflate" => Ok(Compression::Zlib),
            "gzip" | "gz" => Ok(Compression::Gzip),
            other => Err(format!(
                "unknown compression '{}' (expected raw, zlib or gzip)",
                other
            )),
        }
    }
}
