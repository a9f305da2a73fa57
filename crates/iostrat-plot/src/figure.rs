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

//! Declarative chart structure.
//!
//! The types serialize to the figure schema of the plotly.js renderer:
//! a `data` array of traces and a `layout` object. Only the attributes the
//! strip charts use are modelled.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A complete chart: series plus layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    /// Generic JSON form of the figure.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    /// Number of points across all series.
    pub fn point_count(&self) -> usize {
        self.data.iter().map(|t| t.x.len()).sum()
    }

    /// Find a series by name.
    pub fn trace(&self, name: &str) -> Option<&Trace> {
        self.data.iter().find(|t| t.name == name)
    }
}

/// One series, drawn as a horizontal box trace that shows every point and
/// hides the box itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub legendgroup: String,
    pub orientation: String,
    pub x: Vec<f64>,
    pub y: Vec<String>,
    pub boxpoints: String,
    pub jitter: f64,
    pub pointpos: f64,
    pub fillcolor: String,
    pub line: Line,
    pub marker: Marker,
    pub hoveron: String,
    pub showlegend: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub color: String,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub color: String,
    pub size: f64,
    pub opacity: f64,
}

/// Figure layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Theme template; removed by the embed encoder when optimising.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<Value>,
    pub boxmode: String,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub legend: Legend,
    pub font: Font,
    pub margin: Margin,
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: Title,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rangemode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categoryorder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categoryarray: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub orientation: String,
    pub x: f64,
    pub xanchor: String,
    pub y: f64,
    pub yanchor: String,
    pub title: Title,
}

impl Default for Legend {
    /// Horizontal, above the plot area, left aligned, untitled.
    fn default() -> Self {
        Self {
            orientation: "h".to_string(),
            x: 0.0,
            xanchor: "left".to_string(),
            y: 1.02,
            yanchor: "bottom".to_string(),
            title: Title::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    pub size: f64,
}

/// Plot margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            l: 10,
            r: 10,
            t: 30,
            b: 10,
        }
    }
}

/// An arrow-and-label callout anchored at a data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub x: f64,
    pub y: String,
    pub xref: String,
    pub yref: String,
    pub text: String,
    pub showarrow: bool,
    pub arrowhead: u8,
    pub arrowcolor: String,
    pub ax: i32,
    /// Vertical label offset in pixels; negative places the label above.
    pub ay: i32,
    pub font: AnnotationFont,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationFont {
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_figure() -> Figure {
        Figure {
            data: Vec::new(),
            layout: Layout {
                template: None,
                boxmode: "overlay".to_string(),
                xaxis: Axis::default(),
                yaxis: Axis::default(),
                legend: Legend::default(),
                font: Font {
                    family: "Arial".to_string(),
                    size: 14.0,
                },
                margin: Margin::default(),
                annotations: Vec::new(),
            },
        }
    }

    #[test]
    fn test_top_level_keys() {
        let value = empty_figure().to_value().unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["data", "layout"]);
    }

    #[test]
    fn test_absent_template_is_not_serialized() {
        let value = empty_figure().to_value().unwrap();
        assert!(value["layout"].get("template").is_none());
        assert!(value["layout"]["xaxis"].get("range").is_none());
    }

    #[test]
    fn test_trace_type_field_name() {
        let trace = Trace {
            kind: "box".to_string(),
            name: "a".to_string(),
            legendgroup: "a".to_string(),
            orientation: "h".to_string(),
            x: vec![1.0],
            y: vec!["cat".to_string()],
            boxpoints: "all".to_string(),
            jitter: 1.0,
            pointpos: 0.0,
            fillcolor: "rgba(0,0,0,0)".to_string(),
            line: Line {
                color: "rgba(0,0,0,0)".to_string(),
                width: 0.0,
            },
            marker: Marker {
                color: "#000000".to_string(),
                size: 8.0,
                opacity: 0.6,
            },
            hoveron: "points".to_string(),
            showlegend: true,
        };
        let value = serde_json::to_value(&trace).unwrap();
        assert_eq!(value["type"], "box");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_legend_default_placement() {
        let legend = Legend::default();
        assert_eq!(legend.orientation, "h");
        assert_eq!(legend.xanchor, "left");
        assert!(legend.y > 1.0);
        assert!(legend.title.text.is_empty());
    }
}
