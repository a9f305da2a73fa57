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

//! Result aggregation and statistics computation.
//!
//! Groups benchmark records by configuration and computes a statistical
//! summary of `duration` for every group. Aggregation runs on the raw,
//! unlabeled records, so configurations without a display label are still
//! counted here.

use crate::record::{BenchmarkRecord, GroupKey};
use std::collections::BTreeMap;
use std::fmt;

/// Statistical summary of the durations in one group.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Statistics {
    /// Number of samples.
    pub count: usize,
    /// Minimum duration.
    pub min: f64,
    /// Median duration (mean of the two middle samples for even counts).
    pub median: f64,
    /// Maximum duration.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation. `NaN` when fewer than two samples exist.
    pub std: f64,
}

/// Computes the statistical summary of a set of durations.
///
/// # Returns
///
/// `None` for an empty slice, since none of the statistics is defined there.
pub fn compute_statistics(durations: &[f64]) -> Option<Statistics> {
    if durations.is_empty() {
        return None;
    }

    let mut sorted = durations.to_vec();
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let mean = sorted.iter().sum::<f64>() / count as f64;

    let median = if count % 2 == 0 {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    } else {
        sorted[count / 2]
    };

    let std = if count < 2 {
        f64::NAN
    } else {
        let variance = sorted
            .iter()
            .map(|d| {
                let diff = d - mean;
                diff * diff
            })
            .sum::<f64>()
            / (count - 1) as f64;
        variance.sqrt()
    };

    Some(Statistics {
        count,
        min: sorted[0],
        median,
        max: sorted[count - 1],
        mean,
        std,
    })
}

/// One row of the summary: a group key with its statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AggregateRow {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub key: GroupKey,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub stats: Statistics,
}

/// Per-configuration summary of a benchmark table.
///
/// Iteration yields groups sorted by key. That order keeps output stable
/// within a run but carries no meaning; look groups up with [`Summary::get`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    groups: BTreeMap<GroupKey, Statistics>,
}

impl Summary {
    /// Statistics for one configuration, if any record had that key.
    pub fn get(&self, key: &GroupKey) -> Option<&Statistics> {
        self.groups.get(key)
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the summary has no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of records across all groups.
    pub fn record_count(&self) -> usize {
        self.groups.values().map(|s| s.count).sum()
    }

    /// Iterate over groups and their statistics.
    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, &Statistics)> {
        self.groups.iter()
    }

    /// Flatten the summary into rows.
    pub fn rows(&self) -> Vec<AggregateRow> {
        self.groups
            .iter()
            .map(|(key, stats)| AggregateRow {
                key: *key,
                stats: *stats,
            })
            .collect()
    }
}

/// Groups records by `(cold_cache, use_async, use_parallel, use_mmap)` and
/// summarises the durations of every group.
pub fn aggregate(records: &[BenchmarkRecord]) -> Summary {
    let mut grouped: BTreeMap<GroupKey, Vec<f64>> = BTreeMap::new();

    for record in records {
        grouped
            .entry(record.group_key())
            .or_default()
            .push(record.duration);
    }

    let groups = grouped
        .into_iter()
        .filter_map(|(key, durations)| compute_statistics(&durations).map(|stats| (key, stats)))
        .collect::<BTreeMap<_, _>>();

    tracing::debug!(
        records = records.len(),
        groups = groups.len(),
        "aggregated benchmark records"
    );

    Summary { groups }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<10} {:<9} {:<12} {:<8} {:>5} {:>10} {:>10} {:>10} {:>10} {:>10}",
            "cold_cache",
            "use_async",
            "use_parallel",
            "use_mmap",
            "count",
            "min",
            "median",
            "max",
            "mean",
            "std"
        )?;

        for (key, stats) in &self.groups {
            writeln!(
                f,
                "{:<10} {:<9} {:<12} {:<8} {:>5} {:>10.6} {:>10.6} {:>10.6} {:>10.6} {:>10.6}",
                key.cold_cache,
                key.use_async,
                key.use_parallel,
                key.use_mmap,
                stats.count,
                stats.min,
                stats.median,
                stats.max,
                stats.mean,
                stats.std
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cold_cache: bool, duration: f64) -> BenchmarkRecord {
        BenchmarkRecord::new(true, true, true, cold_cache, 0, duration)
    }

    #[test]
    fn test_compute_statistics_odd_count() {
        let stats = compute_statistics(&[0.3, 0.1, 0.2]).unwrap();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.min, 0.1);
        assert_eq!(stats.max, 0.3);
        assert_eq!(stats.median, 0.2);
        assert!((stats.mean - 0.2).abs() < 1e-12);
        assert!((stats.std - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_compute_statistics_even_count_median() {
        let stats = compute_statistics(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(stats.median, 2.5);
    }

    #[test]
    fn test_compute_statistics_singleton_std_is_nan() {
        let stats = compute_statistics(&[0.42]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.min, 0.42);
        assert_eq!(stats.median, 0.42);
        assert_eq!(stats.max, 0.42);
        assert_eq!(stats.mean, 0.42);
        assert!(stats.std.is_nan());
    }

    #[test]
    fn test_compute_statistics_empty() {
        assert!(compute_statistics(&[]).is_none());
    }

    #[test]
    fn test_aggregate_groups_by_cache_state() {
        let records = vec![record(true, 1.0), record(true, 2.0), record(false, 0.5)];

        let summary = aggregate(&records);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary.record_count(), 3);

        let cold = summary.get(&records[0].group_key()).unwrap();
        assert_eq!(cold.count, 2);
        assert_eq!(cold.median, 1.5);

        let warm = summary.get(&records[2].group_key()).unwrap();
        assert_eq!(warm.count, 1);
        assert!(warm.std.is_nan());
    }

    #[test]
    fn test_aggregate_empty_input() {
        let summary = aggregate(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.record_count(), 0);
    }

    #[test]
    fn test_rows_follow_key_order() {
        let records = vec![record(true, 1.0), record(false, 0.5)];
        let rows = aggregate(&records).rows();
        assert_eq!(rows.len(), 2);
        assert!(!rows[0].key.cold_cache);
        assert!(rows[1].key.cold_cache);
    }

    #[test]
    fn test_display_prints_one_line_per_group() {
        let records = vec![record(true, 1.0), record(false, 0.5)];
        let text = aggregate(&records).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("median"));
        assert!(lines[1].contains("NaN"));
    }
}
