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

//! Strip-chart construction.

use crate::callout::format_duration;
use crate::figure::{
    Annotation, AnnotationFont, Axis, Figure, Font, Layout, Legend, Line, Margin, Marker, Title,
    Trace,
};
use crate::theme::Theme;
use iostrat_core::{AsyncCategory, IoCategory, LabeledRecord};
use serde_json::{json, Value};
use std::fmt;

const TRANSPARENT: &str = "rgba(0,0,0,0)";

/// Chart styling parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub theme: Theme,
    pub marker_size: f64,
    pub marker_opacity: f64,
    /// Vertical spread of points within a category, 0.0 to 1.0.
    pub jitter: f64,
    /// Fraction added above the largest duration on the x axis.
    pub x_margin: f64,
    pub font_family: String,
    pub font_size: f64,
    pub margin: Margin,
    /// Vertical distance between a minimum and its label, in pixels.
    pub annotation_offset: i32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            theme: Theme::PlotlyWhite,
            marker_size: 8.0,
            marker_opacity: 0.6,
            jitter: 1.0,
            x_margin: 0.01,
            font_family: "Helvetica Neue, Helvetica, Arial, sans-serif".to_string(),
            font_size: 14.0,
            margin: Margin::default(),
            annotation_offset: 30,
        }
    }
}

/// Series color of an I/O category. The same in every chart.
pub const fn io_color(io: IoCategory) -> &'static str {
    match io {
        IoCategory::MemoryMapped => "#636EFA",
        IoCategory::Conventional => "#EF553B",
    }
}

/// Label offset direction of an I/O category: memory-mapped labels sit
/// above their point, conventional labels below.
const fn offset_sign(io: IoCategory) -> i32 {
    match io {
        IoCategory::MemoryMapped => -1,
        IoCategory::Conventional => 1,
    }
}

/// Cache state partition of the records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheState {
    Cold,
    Warm,
}

impl CacheState {
    /// Both partitions, cold first.
    pub const ALL: [CacheState; 2] = [CacheState::Cold, CacheState::Warm];

    pub const fn is_cold(self) -> bool {
        matches!(self, CacheState::Cold)
    }

    /// Whether a record belongs to this partition.
    pub fn matches(self, record: &LabeledRecord) -> bool {
        record.record.cold_cache == self.is_cold()
    }

    /// Short name, used for file names.
    pub const fn name(self) -> &'static str {
        match self {
            CacheState::Cold => "cold",
            CacheState::Warm => "warm",
        }
    }

    /// Caption used when the caller supplies none.
    pub const fn default_caption(self) -> &'static str {
        match self {
            CacheState::Cold => "Cold cache",
            CacheState::Warm => "Warm cache",
        }
    }
}

impl fmt::Display for CacheState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Build the chart of one cache partition.
///
/// Records of the other partition are ignored. An empty partition yields a
/// chart without series or annotations.
pub fn build_cache_chart(
    labeled: &[LabeledRecord],
    state: CacheState,
    config: &PlotConfig,
) -> Figure {
    let partition: Vec<LabeledRecord> = labeled
        .iter()
        .filter(|r| state.matches(r))
        .copied()
        .collect();

    if partition.is_empty() {
        tracing::warn!(cache = %state, "no labeled records in partition");
    }

    build_strip_chart(&partition, config)
}

/// Build a categorical strip chart of durations.
///
/// One series per I/O category, the concurrency category on the y axis,
/// and a callout at the minimum of every (concurrency, I/O) pair.
pub fn build_strip_chart(records: &[LabeledRecord], config: &PlotConfig) -> Figure {
    let data: Vec<Trace> = IoCategory::ALL
        .iter()
        .filter_map(|&io| series(records, io, config))
        .collect();

    let annotations: Vec<Annotation> = AsyncCategory::DISPLAY_ORDER
        .iter()
        .flat_map(|&category| {
            IoCategory::ALL
                .iter()
                .filter_map(move |&io| minimum_callout(records, category, io, config))
        })
        .collect();

    let max_duration = records
        .iter()
        .map(|r| r.record.duration)
        .fold(None, |acc: Option<f64>, d| Some(acc.map_or(d, |m| m.max(d))));

    let xaxis = match max_duration {
        Some(max) if max > 0.0 => Axis {
            range: Some([0.0, max * (1.0 + config.x_margin)]),
            ..Axis::default()
        },
        _ => Axis {
            rangemode: Some("tozero".to_string()),
            ..Axis::default()
        },
    };

    let yaxis = Axis {
        title: Title::default(),
        categoryorder: Some("array".to_string()),
        categoryarray: Some(
            AsyncCategory::DISPLAY_ORDER
                .iter()
                .map(|c| c.name().to_string())
                .collect(),
        ),
        ..Axis::default()
    };

    tracing::debug!(
        series = data.len(),
        annotations = annotations.len(),
        points = records.len(),
        "built strip chart"
    );

    Figure {
        data,
        layout: Layout {
            template: config
                .theme
                .template()
                .map(|template| with_overrides(template, config)),
            boxmode: "overlay".to_string(),
            xaxis,
            yaxis,
            legend: Legend::default(),
            font: Font {
                family: config.font_family.clone(),
                size: config.font_size,
            },
            margin: config.margin,
            annotations,
        },
    }
}

fn series(records: &[LabeledRecord], io: IoCategory, config: &PlotConfig) -> Option<Trace> {
    let (x, y): (Vec<f64>, Vec<String>) = records
        .iter()
        .filter(|r| r.io_category == io)
        .map(|r| (r.record.duration, r.async_name().to_string()))
        .unzip();

    if x.is_empty() {
        return None;
    }

    let color = io_color(io).to_string();
    Some(Trace {
        kind: "box".to_string(),
        name: io.name().to_string(),
        legendgroup: io.name().to_string(),
        orientation: "h".to_string(),
        x,
        y,
        boxpoints: "all".to_string(),
        jitter: config.jitter,
        pointpos: 0.0,
        fillcolor: TRANSPARENT.to_string(),
        line: Line {
            color: TRANSPARENT.to_string(),
            width: 0.0,
        },
        marker: Marker {
            color,
            size: config.marker_size,
            opacity: config.marker_opacity,
        },
        hoveron: "points".to_string(),
        showlegend: true,
    })
}

fn minimum_callout(
    records: &[LabeledRecord],
    category: AsyncCategory,
    io: IoCategory,
    config: &PlotConfig,
) -> Option<Annotation> {
    let min = records
        .iter()
        .filter(|r| r.async_category == category && r.io_category == io)
        .map(|r| r.record.duration)
        .min_by(f64::total_cmp)?;

    let color = io_color(io).to_string();
    Some(Annotation {
        x: min,
        y: category.name().to_string(),
        xref: "x".to_string(),
        yref: "y".to_string(),
        text: format_duration(min),
        showarrow: true,
        arrowhead: 2,
        arrowcolor: color.clone(),
        ax: 0,
        ay: offset_sign(io) * config.annotation_offset,
        font: AnnotationFont { color },
    })
}

/// Override the theme's margins and font family/size, keeping its colors.
fn with_overrides(mut template: Value, config: &PlotConfig) -> Value {
    if let Some(layout) = template.get_mut("layout").and_then(Value::as_object_mut) {
        let margin = config.margin;
        layout.insert(
            "margin".to_string(),
            json!({ "l": margin.l, "r": margin.r, "t": margin.t, "b": margin.b }),
        );

        let font = layout
            .entry("font")
            .or_insert_with(|| Value::Object(Default::default()));
        if let Some(font) = font.as_object_mut() {
            font.insert("family".to_string(), json!(config.font_family));
            font.insert("size".to_string(), json!(config.font_size));
        }
    }
    template
}

#[cfg(test)]
mod tests {
    use super::*;
    use iostrat_core::{BenchmarkRecord, LabelTable};

    fn labeled(records: &[BenchmarkRecord]) -> Vec<LabeledRecord> {
        LabelTable::standard().join(records)
    }

    #[test]
    fn test_palette_is_fixed() {
        assert_eq!(io_color(IoCategory::MemoryMapped), "#636EFA");
        assert_eq!(io_color(IoCategory::Conventional), "#EF553B");
    }

    #[test]
    fn test_cache_state_partition() {
        let records = labeled(&[
            BenchmarkRecord::new(true, true, true, true, 0, 1.0),
            BenchmarkRecord::new(true, true, true, false, 0, 0.1),
        ]);
        assert!(CacheState::Cold.matches(&records[0]));
        assert!(!CacheState::Cold.matches(&records[1]));
        assert!(CacheState::Warm.matches(&records[1]));
    }

    #[test]
    fn test_single_series_chart() {
        let records = labeled(&[
            BenchmarkRecord::new(true, true, true, false, 0, 1.595),
            BenchmarkRecord::new(true, true, true, false, 1, 0.069),
        ]);
        let figure = build_strip_chart(&records, &PlotConfig::default());

        assert_eq!(figure.data.len(), 1);
        let trace = &figure.data[0];
        assert_eq!(trace.name, "Memory-mapped IO");
        assert_eq!(trace.x, vec![1.595, 0.069]);
        assert_eq!(trace.y, vec!["Async, concurrent", "Async, concurrent"]);

        assert_eq!(figure.layout.annotations.len(), 1);
        let callout = &figure.layout.annotations[0];
        assert_eq!(callout.text, "69.0ms");
        assert_eq!(callout.x, 0.069);
        assert!(callout.ay < 0);
    }

    #[test]
    fn test_x_range_has_margin() {
        let records = labeled(&[BenchmarkRecord::new(false, false, false, true, 0, 2.0)]);
        let figure = build_strip_chart(&records, &PlotConfig::default());
        let [low, high] = figure.layout.xaxis.range.unwrap();
        assert_eq!(low, 0.0);
        assert!((high - 2.02).abs() < 1e-12);
        assert!(figure.layout.xaxis.rangemode.is_none());
    }

    #[test]
    fn test_conventional_label_points_down() {
        let records = labeled(&[BenchmarkRecord::new(false, false, true, true, 0, 0.5)]);
        let figure = build_strip_chart(&records, &PlotConfig::default());
        assert_eq!(figure.layout.annotations[0].ay, 30);
        assert_eq!(figure.layout.annotations[0].arrowcolor, "#EF553B");
    }

    #[test]
    fn test_empty_chart() {
        let figure = build_strip_chart(&[], &PlotConfig::default());
        assert!(figure.data.is_empty());
        assert!(figure.layout.annotations.is_empty());
        assert!(figure.layout.xaxis.range.is_none());
        assert_eq!(figure.layout.xaxis.rangemode.as_deref(), Some("tozero"));
    }

    #[test]
    fn test_theme_none_has_no_template() {
        let config = PlotConfig {
            theme: Theme::None,
            ..PlotConfig::default()
        };
        let figure = build_strip_chart(&[], &config);
        assert!(figure.layout.template.is_none());
    }

    #[test]
    fn test_template_margin_override() {
        let figure = build_strip_chart(&[], &PlotConfig::default());
        let template = figure.layout.template.unwrap();
        assert_eq!(template["layout"]["margin"]["t"], 30);
        assert_eq!(template["layout"]["font"]["size"], 14.0);
        assert_eq!(template["layout"]["font"]["color"], "#2a3f5f");
    }
}
