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

//! Named visual themes.
//!
//! A theme is shipped inside `layout.template` and gives every chart the
//! same typography and coloring baseline. The chart builder overrides
//! margins and fonts on top of it.

use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

/// A pre-defined chart theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// White background with light grid lines.
    #[default]
    PlotlyWhite,
    /// White background, axis lines, no grid.
    SimpleWhite,
    /// No template; the renderer's defaults apply.
    None,
}

impl Theme {
    /// Theme name as accepted by [`Theme::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            Theme::PlotlyWhite => "plotly_white",
            Theme::SimpleWhite => "simple_white",
            Theme::None => "none",
        }
    }

    /// The `layout.template` object of this theme, if any.
    pub fn template(self) -> Option<Value> {
        match self {
            Theme::PlotlyWhite => Some(plotly_white()),
            Theme::SimpleWhite => Some(simple_white()),
            Theme::None => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plotly_white" => Ok(Theme::PlotlyWhite),
            "simple_white" => Ok(Theme::SimpleWhite),
            "none" => Ok(Theme::None),
            other => Err(format!(
                "unknown theme '{}' (expected plotly_white, simple_white or none)",
                other
            )),
        }
    }
}

fn plotly_white() -> Value {
    let axis = json!({
        "automargin": true,
        "gridcolor": "#EBF0F8",
        "linecolor": "#EBF0F8",
        "ticks": "",
        "title": { "standoff": 15 },
        "zerolinecolor": "#EBF0F8",
        "zerolinewidth": 2
    });

    json!({
        "layout": {
            "colorway": [
                "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A",
                "#19d3f3", "#FF6692", "#B6E880", "#FF97FF", "#FECB52"
            ],
            "font": { "color": "#2a3f5f" },
            "hoverlabel": { "align": "left" },
            "hovermode": "closest",
            "paper_bgcolor": "white",
            "plot_bgcolor": "white",
            "xaxis": axis.clone(),
            "yaxis": axis
        }
    })
}

fn simple_white() -> Value {
    let axis = json!({
        "automargin": true,
        "linecolor": "rgb(36,36,36)",
        "showgrid": false,
        "showline": true,
        "ticks": "outside",
        "title": { "standoff": 15 },
        "zeroline": false
    });

    json!({
        "layout": {
            "colorway": [
                "#1F77B4", "#FF7F0E", "#2CA02C", "#D62728", "#9467BD",
                "#8C564B", "#E377C2", "#7F7F7F", "#BCBD22", "#17BECF"
            ],
            "font": { "color": "rgb(36,36,36)" },
            "hovermode": "closest",
            "paper_bgcolor": "white",
            "plot_bgcolor": "white",
            "xaxis": axis.clone(),
            "yaxis": axis
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_plotly_white() {
        assert_eq!(Theme::default(), Theme::PlotlyWhite);
    }

    #[test]
    fn test_parse_round_trip() {
        for theme in [Theme::PlotlyWhite, Theme::SimpleWhite, Theme::None] {
            assert_eq!(theme.name().parse::<Theme>().unwrap(), theme);
        }
        assert_eq!("Plotly_White".parse::<Theme>().unwrap(), Theme::PlotlyWhite);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "seaborn".parse::<Theme>().unwrap_err();
        assert!(err.contains("seaborn"));
    }

    #[test]
    fn test_templates() {
        let template = Theme::PlotlyWhite.template().unwrap();
        assert_eq!(template["layout"]["plot_bgcolor"], "white");
        assert!(Theme::SimpleWhite.template().is_some());
        assert!(Theme::None.template().is_none());
    }
}
