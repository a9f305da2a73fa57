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

//! Benchmark result fixtures.

pub mod errors;
pub mod generate;

/// Header row written by the benchmark harness.
pub const HEADER: &str = "use_async,use_mmap,use_parallel,cold_cache,repeat,duration";

/// Two warm-cache trials of the async + mmap configuration.
pub const SCENARIO_A: &str = "use_async,use_mmap,use_parallel,cold_cache,repeat,duration
true,true,true,false,0,1.595
true,true,true,false,1,0.069
";

/// One labeled trial per cache state plus a sequential async trial, a
/// configuration that has no display label.
pub const UNLABELED_CONFIGURATION: &str = "use_async,use_mmap,use_parallel,cold_cache,repeat,duration
true,true,true,true,0,1.595
true,true,true,false,0,0.069
true,false,false,true,0,2.5
true,false,false,false,0,0.75
";

/// Both I/O strategies for every labeled concurrency strategy, both cache
/// states, two repeats each.
pub const MIXED: &str = "use_async,use_mmap,use_parallel,cold_cache,repeat,duration
true,true,true,true,0,1.595
true,true,true,true,1,1.480
true,false,true,true,0,2.110
true,false,true,true,1,2.054
false,true,true,true,0,0.912
false,true,true,true,1,0.955
false,false,true,true,0,1.204
false,false,true,true,1,1.187
false,true,false,true,0,3.311
false,true,false,true,1,3.402
false,false,false,true,0,4.018
false,false,false,true,1,3.977
true,true,true,false,0,0.069
true,true,true,false,1,0.071
true,false,true,false,0,0.099
true,false,true,false,1,0.104
false,true,true,false,0,0.052
false,true,true,false,1,0.049
false,false,true,false,0,0.088
false,false,true,false,1,0.091
false,true,false,false,0,0.210
false,true,false,false,1,0.199
false,false,false,false,0,0.305
false,false,false,false,1,0.312
";
