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

//! The end-to-end analysis of one results file.
//!
//! Ingestion feeds two independent consumers: the aggregator, which sees
//! every record, and the chart path, which only sees records with a display
//! label. Encoding is an optional last step of the chart path. It runs once
//! per chart, and a chart that fails to encode leaves the summary and the
//! other chart untouched.

use crate::error::Result;
use iostrat_core::{aggregate, BenchmarkRecord, LabelTable, Summary};
use iostrat_csv::{from_csv_reader_with_config, from_csv_with_config, ReadConfig};
use iostrat_embed::{encode_figure, EmbedConfig, EmbedError, EmbedTag};
use iostrat_plot::{build_cache_chart, CacheState, Figure, PlotConfig};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Settings of every pipeline stage.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub read: ReadConfig,
    pub plot: PlotConfig,
    /// Encode each chart as an embed tag. The caption is replaced by the
    /// chart's own caption.
    pub embed: Option<EmbedConfig>,
    pub cold_caption: String,
    pub warm_caption: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            read: ReadConfig::default(),
            plot: PlotConfig::default(),
            embed: None,
            cold_caption: CacheState::Cold.default_caption().to_string(),
            warm_caption: CacheState::Warm.default_caption().to_string(),
        }
    }
}

impl PipelineConfig {
    /// Caption of a cache partition's chart.
    pub fn caption(&self, state: CacheState) -> &str {
        match state {
            CacheState::Cold => &self.cold_caption,
            CacheState::Warm => &self.warm_caption,
        }
    }
}

/// The chart of one cache partition.
#[derive(Debug)]
pub struct CacheChart {
    pub state: CacheState,
    pub caption: String,
    pub figure: Figure,
    /// Outcome of encoding; `None` when the pipeline was not configured to
    /// encode.
    pub tag: Option<iostrat_embed::Result<EmbedTag>>,
}

impl CacheChart {
    /// Encode the chart with its own caption.
    pub fn embed(&self, config: &EmbedConfig) -> iostrat_embed::Result<EmbedTag> {
        let config = EmbedConfig {
            caption: self.caption.clone(),
            ..config.clone()
        };
        encode_figure(&self.figure, &config)
    }

    /// The embed tag, if encoding ran and succeeded.
    pub fn embed_tag(&self) -> Option<&EmbedTag> {
        self.tag.as_ref().and_then(|t| t.as_ref().ok())
    }

    /// The encoding error, if encoding ran and failed.
    pub fn embed_error(&self) -> Option<&EmbedError> {
        self.tag.as_ref().and_then(|t| t.as_ref().err())
    }
}

/// Output of one pipeline run.
#[derive(Debug)]
pub struct Report {
    pub summary: Summary,
    /// One chart per cache state, cold first.
    pub charts: Vec<CacheChart>,
    /// Records that made it onto a chart.
    pub labeled_count: usize,
}

impl Report {
    pub fn chart(&self, state: CacheState) -> Option<&CacheChart> {
        self.charts.iter().find(|c| c.state == state)
    }

    /// Embed tags of the charts that encoded successfully, cold first.
    pub fn tags(&self) -> impl Iterator<Item = &EmbedTag> {
        self.charts.iter().filter_map(CacheChart::embed_tag)
    }

    /// Charts whose encoding failed, with the reason.
    pub fn embed_failures(&self) -> impl Iterator<Item = (CacheState, &EmbedError)> {
        self.charts
            .iter()
            .filter_map(|c| c.embed_error().map(|e| (c.state, e)))
    }

    /// Summary rows as pretty JSON; NaN statistics become `null`.
    pub fn summary_json(&self) -> Result<String> {
        summary_json(&self.summary)
    }
}

/// Serialize a summary as a JSON array of rows, sorted by group key.
pub fn summary_json(summary: &Summary) -> Result<String> {
    Ok(serde_json::to_string_pretty(&summary.rows())?)
}

/// Run the pipeline over ingested records.
///
/// Always yields a report. Encoding failures are kept per chart, see
/// [`Report::embed_failures`].
pub fn analyse(records: &[BenchmarkRecord], config: &PipelineConfig) -> Report {
    let summary = aggregate(records);
    let labeled = LabelTable::standard().join(records);

    tracing::info!(
        records = records.len(),
        groups = summary.len(),
        labeled = labeled.len(),
        "aggregated results"
    );

    let mut charts = Vec::with_capacity(CacheState::ALL.len());
    for state in CacheState::ALL {
        let mut chart = CacheChart {
            state,
            caption: config.caption(state).to_string(),
            figure: build_cache_chart(&labeled, state, &config.plot),
            tag: None,
        };
        if let Some(embed) = &config.embed {
            let tag = chart.embed(embed);
            if let Err(e) = &tag {
                tracing::warn!(cache = %state, error = %e, "chart not embedded");
            }
            chart.tag = Some(tag);
        }
        charts.push(chart);
    }

    Report {
        summary,
        charts,
        labeled_count: labeled.len(),
    }
}

/// Run the pipeline over CSV text.
pub fn analyse_csv(csv: &str, config: &PipelineConfig) -> Result<Report> {
    let records = from_csv_with_config(csv, config.read.clone())?;
    Ok(analyse(&records, config))
}

/// Read a results file into records.
pub fn read_file(path: &Path, config: &ReadConfig) -> Result<Vec<BenchmarkRecord>> {
    let file = File::open(path)?;
    let records = from_csv_reader_with_config(BufReader::new(file), config.clone())?;
    tracing::info!(path = %path.display(), records = records.len(), "loaded results");
    Ok(records)
}

/// Run the pipeline over a results file.
pub fn analyse_file(path: &Path, config: &PipelineConfig) -> Result<Report> {
    let records = read_file(path, &config.read)?;
    Ok(analyse(&records, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_captions() {
        let config = PipelineConfig::default();
        assert_eq!(config.caption(CacheState::Cold), "Cold cache");
        assert_eq!(config.caption(CacheState::Warm), "Warm cache");
        assert!(config.embed.is_none());
    }

    #[test]
    fn test_charts_cold_first() {
        let records = vec![BenchmarkRecord::new(false, false, false, true, 0, 1.0)];
        let report = analyse(&records, &PipelineConfig::default());
        let states: Vec<CacheState> = report.charts.iter().map(|c| c.state).collect();
        assert_eq!(states, vec![CacheState::Cold, CacheState::Warm]);
        assert_eq!(report.tags().count(), 0);
    }

    #[test]
    fn test_embed_uses_chart_caption() {
        let records = vec![BenchmarkRecord::new(false, false, false, false, 0, 0.5)];
        let config = PipelineConfig {
            embed: Some(EmbedConfig {
                caption: "ignored".to_string(),
                ..Default::default()
            }),
            warm_caption: "Warm, 8 files".to_string(),
            ..Default::default()
        };
        let report = analyse(&records, &config);
        let warm = report.chart(CacheState::Warm).unwrap();
        assert_eq!(warm.embed_tag().unwrap().caption, "Warm, 8 files");
        assert_eq!(report.embed_failures().count(), 0);
    }

    #[test]
    fn test_failed_chart_keeps_the_rest() {
        let records = vec![
            BenchmarkRecord::new(true, true, true, true, 0, 1.2),
            BenchmarkRecord::new(true, true, true, false, 0, 0.07),
        ];
        let config = PipelineConfig {
            embed: Some(EmbedConfig::default()),
            ..Default::default()
        };
        let mut report = analyse(&records, &config);
        report.charts[0].tag = Some(Err(EmbedError::UnexpectedKeys {
            found: vec!["data".to_string(), "frames".to_string(), "layout".to_string()],
        }));

        let tags: Vec<&EmbedTag> = report.tags().collect();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].caption, "Warm cache");

        let failures: Vec<CacheState> = report.embed_failures().map(|(s, _)| s).collect();
        assert_eq!(failures, vec![CacheState::Cold]);
        assert_eq!(report.summary.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let report = analyse(&[], &PipelineConfig::default());
        assert!(report.summary.is_empty());
        assert_eq!(report.charts.len(), 2);
        assert!(report.charts.iter().all(|c| c.figure.data.is_empty()));
    }
}
