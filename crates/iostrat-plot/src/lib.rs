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

//! Annotated strip charts of benchmark durations.
//!
//! A chart is a plain [`Figure`] value in the plotly.js figure schema. It
//! can be serialized with `serde_json`, written as a standalone page with
//! [`write_html`], or handed to the embed encoder.
//!
//! One chart is built per cache state. Each shows durations along the x
//! axis against the concurrency category, one colored series per I/O
//! category, and a callout at the fastest trial of every configuration.
//!
//! # Example
//!
//! ```
//! use iostrat_core::{BenchmarkRecord, LabelTable};
//! use iostrat_plot::{build_cache_chart, CacheState, PlotConfig};
//!
//! let records = vec![
//!     BenchmarkRecord::new(true, true, true, false, 0, 1.595),
//!     BenchmarkRecord::new(true, true, true, false, 1, 0.069),
//! ];
//! let labeled = LabelTable::standard().join(&records);
//!
//! let warm = build_cache_chart(&labeled, CacheState::Warm, &PlotConfig::default());
//! assert_eq!(warm.layout.annotations[0].text, "69.0ms");
//!
//! let cold = build_cache_chart(&labeled, CacheState::Cold, &PlotConfig::default());
//! assert!(cold.data.is_empty());
//! ```

pub mod builder;
pub mod callout;
pub mod figure;
pub mod html;
pub mod theme;

pub use builder::{build_cache_chart, build_strip_chart, io_color, CacheState, PlotConfig};
pub use callout::{format_duration, format_significant, SECONDS_THRESHOLD, SIGNIFICANT_FIGURES};
pub use figure::{Annotation, Axis, Figure, Layout, Legend, Margin, Trace};
pub use html::{to_html, write_html, PLOTLY_CDN};
pub use theme::Theme;
