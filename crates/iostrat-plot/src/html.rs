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

//! Standalone HTML pages for interactive viewing.

use crate::figure::Figure;
use std::fs;
use std::io;
use std::path::Path;

/// Renderer script loaded by every page.
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Render a figure as a self-contained HTML page.
pub fn to_html(figure: &Figure, title: &str) -> serde_json::Result<String> {
    // "</" inside a JSON string would close the script element early.
    let payload = serde_json::to_string(figure)?.replace("</", "<\\/");
    let title = escape(title);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", title));
    html.push_str(&format!("<script src=\"{}\"></script>\n", PLOTLY_CDN));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", title));
    html.push_str("<div id=\"chart\"></div>\n<script>\n");
    html.push_str(&format!("const figure = {};\n", payload));
    html.push_str(
        "Plotly.newPlot(\"chart\", figure.data, figure.layout, {responsive: true});\n",
    );
    html.push_str("</script>\n</body>\n</html>\n");

    Ok(html)
}

/// Write a figure page to `path`.
pub fn write_html(figure: &Figure, title: &str, path: &Path) -> io::Result<()> {
    let html = to_html(figure, title)?;
    fs::write(path, html)?;
    tracing::debug!(path = %path.display(), "wrote chart page");
    Ok(())
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
