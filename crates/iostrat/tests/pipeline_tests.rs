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

//! End-to-end pipeline tests.

use iostrat::model::GroupKey;
use iostrat::{
    analyse_csv, analyse_file, CacheState, Compression, EmbedConfig, EmbedTag, Error,
    PipelineConfig,
};
use iostrat_test::fixtures;
use serde_json::Value;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn key(cold_cache: bool, use_async: bool, use_parallel: bool, use_mmap: bool) -> GroupKey {
    GroupKey {
        cold_cache,
        use_async,
        use_parallel,
        use_mmap,
    }
}

#[test]
fn test_scenario_a_summary() {
    let report = analyse_csv(fixtures::SCENARIO_A, &PipelineConfig::default()).unwrap();

    assert_eq!(report.summary.len(), 1);
    let stats = report.summary.get(&key(false, true, true, true)).unwrap();
    assert_eq!(stats.count, 2);
    assert_eq!(stats.min, 0.069);
    assert_eq!(stats.max, 1.595);
    assert!((stats.median - 0.832).abs() < 1e-12);
    assert!(stats.min < stats.median && stats.median < stats.max);
}

#[test]
fn test_scenario_b_counted_but_not_charted() {
    let report =
        analyse_csv(fixtures::UNLABELED_CONFIGURATION, &PipelineConfig::default()).unwrap();

    assert_eq!(report.summary.record_count(), 4);
    assert!(report.summary.get(&key(true, true, false, false)).is_some());
    assert!(report.summary.get(&key(false, true, false, false)).is_some());

    assert_eq!(report.labeled_count, 2);
    for chart in &report.charts {
        assert_eq!(chart.figure.point_count(), 1);
    }
}

#[test]
fn test_singleton_std_is_nan_and_null_in_json() {
    let report =
        analyse_csv(fixtures::UNLABELED_CONFIGURATION, &PipelineConfig::default()).unwrap();
    assert!(report
        .summary
        .iter()
        .all(|(_, stats)| stats.count == 1 && stats.std.is_nan()));

    let json: Value = serde_json::from_str(&report.summary_json().unwrap()).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    for row in rows {
        assert!(row["std"].is_null());
        assert!(row["cold_cache"].is_boolean());
        assert_eq!(row["count"], 1);
    }
}

#[test]
fn test_text_summary_prints_nan() {
    let report =
        analyse_csv(fixtures::UNLABELED_CONFIGURATION, &PipelineConfig::default()).unwrap();
    let text = report.summary.to_string();
    assert!(text.contains("NaN"));
    assert!(text.lines().next().unwrap().contains("cold_cache"));
}

#[test]
fn test_tags_for_both_charts() {
    let config = PipelineConfig {
        embed: Some(EmbedConfig {
            compression: Compression::Gzip,
            ..Default::default()
        }),
        ..Default::default()
    };
    let report = analyse_csv(fixtures::MIXED, &config).unwrap();

    let tags: Vec<&EmbedTag> = report.tags().collect();
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0].caption, "Cold cache");
    assert_eq!(tags[1].caption, "Warm cache");

    let reparsed = EmbedTag::parse(&tags[1].to_string()).unwrap();
    let value = reparsed.decode(Compression::Gzip).unwrap();
    let warm = &report.chart(CacheState::Warm).unwrap().figure;
    assert_eq!(value["data"].as_array().unwrap().len(), warm.data.len());
}

#[test]
fn test_analyse_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(fixtures::MIXED.as_bytes()).unwrap();

    let report = analyse_file(file.path(), &PipelineConfig::default()).unwrap();
    assert_eq!(report.summary.record_count(), 24);
    assert_eq!(report.summary.len(), 12);
}

#[test]
fn test_missing_file() {
    let result = analyse_file(
        Path::new("/nonexistent/results.csv"),
        &PipelineConfig::default(),
    );
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_bad_file_fails_whole_ingestion() {
    let (_, sample) = fixtures::errors::invalid_csv_samples()
        .into_iter()
        .find(|(name, _)| *name == "bad_row_after_good_rows")
        .unwrap();

    let result = analyse_csv(sample, &PipelineConfig::default());
    assert!(matches!(result, Err(Error::Csv(_))));
}
