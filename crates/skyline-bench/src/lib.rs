// Dweve Skyline - Pareto frontier queries and algorithm benchmarking
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

//! Skyline Benchmark Framework
//!
//! Timing harness, synthetic datasets and reports for comparing skyline
//! algorithms on the same data.
//!
//! ## Features
//!
//! - **Harness**: warm-up runs, repeated trials and per-call statistics
//! - **Dataset generators**: seeded notebook catalogues plus degenerate shapes
//! - **Reports**: console tables, JSON and Markdown exports
//!
//! ## Usage
//!
//! Run the criterion suite:
//! ```bash
//! cargo bench --package skyline-bench
//! ```

pub mod core;
pub mod error;
pub mod generators;
pub mod harness;
pub mod reporters;

pub use crate::core::{BenchConfig, Statistics, STANDARD_SIZES};
pub use error::{validate_dataset_size, BenchError, BenchResult, MAX_DATASET_SIZE};
pub use generators::{generate_anticorrelated, generate_identical, generate_notebooks};
pub use harness::{
    benchmark_all, builtin_algorithms, measure, rank_by_mean, verify_agreement,
    AlgorithmBenchmark, Comparison, Measured,
};
pub use reporters::{export_json, export_markdown, print_report, ComparisonReport};
