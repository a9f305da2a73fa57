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

//! Invalid result files for ingestion error testing.

/// Invalid CSV samples.
///
/// Each tuple contains (name, csv_text). Every sample must be rejected as a
/// whole.
pub fn invalid_csv_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("empty", ""),
        (
            "missing_duration_column",
            "use_async,use_mmap,use_parallel,cold_cache,repeat\ntrue,true,true,true,0\n",
        ),
        (
            "missing_repeat_column",
            "use_async,use_mmap,use_parallel,cold_cache,duration\ntrue,true,true,true,1.0\n",
        ),
        (
            "bool_as_number",
            "use_async,use_mmap,use_parallel,cold_cache,repeat,duration\n1,true,true,true,0,1.0\n",
        ),
        (
            "bool_as_word",
            "use_async,use_mmap,use_parallel,cold_cache,repeat,duration\ntrue,yes,true,true,0,1.0\n",
        ),
        (
            "duration_not_a_number",
            "use_async,use_mmap,use_parallel,cold_cache,repeat,duration\ntrue,true,true,true,0,fast\n",
        ),
        (
            "duration_empty",
            "use_async,use_mmap,use_parallel,cold_cache,repeat,duration\ntrue,true,true,true,0,\n",
        ),
        (
            "duration_negative",
            "use_async,use_mmap,use_parallel,cold_cache,repeat,duration\ntrue,true,true,true,0,-1.0\n",
        ),
        (
            "repeat_fractional",
            "use_async,use_mmap,use_parallel,cold_cache,repeat,duration\ntrue,true,true,true,0.5,1.0\n",
        ),
        (
            "short_row",
            "use_async,use_mmap,use_parallel,cold_cache,repeat,duration\ntrue,true,true,true,0\n",
        ),
        (
            "bad_row_after_good_rows",
            "use_async,use_mmap,use_parallel,cold_cache,repeat,duration\ntrue,true,true,true,0,1.0\ntrue,true,true,true,1,1.1\ntrue,true,true,true,2,oops\n",
        ),
    ]
}
