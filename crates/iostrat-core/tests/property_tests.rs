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

//! Property-based tests for aggregation and labeling.

use iostrat_core::{aggregate, BenchmarkRecord, LabelTable};
use proptest::prelude::*;

fn arb_record() -> impl Strategy<Value = BenchmarkRecord> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        0u32..10,
        0.0f64..10.0,
    )
        .prop_map(|(a, m, p, c, repeat, duration)| {
            BenchmarkRecord::new(a, m, p, c, repeat, duration)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: group sizes sum to the number of input records.
    #[test]
    fn prop_groups_partition_input(records in prop::collection::vec(arb_record(), 0..200)) {
        let summary = aggregate(&records);
        prop_assert_eq!(summary.record_count(), records.len());

        for record in &records {
            prop_assert!(summary.get(&record.group_key()).is_some());
        }

        for (key, stats) in summary.iter() {
            let members = records.iter().filter(|r| r.group_key() == *key).count();
            prop_assert_eq!(members, stats.count);
        }
    }

    /// Property: min <= median <= max and min <= mean <= max in every group.
    #[test]
    fn prop_statistics_are_ordered(records in prop::collection::vec(arb_record(), 1..200)) {
        for (_, stats) in aggregate(&records).iter() {
            prop_assert!(stats.min <= stats.median && stats.median <= stats.max);
            prop_assert!(stats.min <= stats.mean + 1e-9 && stats.mean <= stats.max + 1e-9);
            prop_assert_eq!(stats.std.is_nan(), stats.count < 2);
        }
    }

    /// Property: the join keeps exactly the records with a defined
    /// concurrency pair.
    #[test]
    fn prop_join_keeps_defined_pairs(records in prop::collection::vec(arb_record(), 0..200)) {
        let labeled = LabelTable::standard().join(&records);
        let expected = records
            .iter()
            .filter(|r| !(r.use_async && !r.use_parallel))
            .count();
        prop_assert_eq!(labeled.len(), expected);
    }
}
