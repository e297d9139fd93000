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

//! Benchmark command - times all algorithms on one dataset
//!
//! The dataset is either loaded from a file or generated. Before timing,
//! every algorithm is checked against brute-force so a fast but wrong
//! algorithm never shows up in the ranking.

use super::load_records;
use crate::error::CliError;
use colored::Colorize;
use skyline_bench::{
    benchmark_all, builtin_algorithms, export_json, export_markdown, generate_notebooks,
    print_report, verify_agreement, BenchConfig, ComparisonReport,
};
use skyline_core::Selection;
use std::path::Path;
use tracing::info;

/// Options for the benchmark command.
#[derive(Debug, Clone)]
pub struct BenchmarkOptions {
    /// Dataset file; a catalogue is generated when absent.
    pub file: Option<String>,
    /// Size of the generated catalogue.
    pub count: usize,
    /// Seed for the generated catalogue.
    pub seed: u64,
    /// Attribute pair and directions.
    pub selection: Selection,
    /// Untimed warm-up runs per algorithm.
    pub warmup: usize,
    /// Timed trials per algorithm.
    pub trials: usize,
    /// Optional JSON report path.
    pub json: Option<String>,
    /// Optional Markdown report path.
    pub markdown: Option<String>,
}

/// Run the benchmark and print a comparison report.
///
/// # Errors
///
/// Returns `Err` if the dataset cannot be loaded or generated, an algorithm
/// fails or disagrees with brute-force, or a report cannot be written.
pub fn benchmark(options: &BenchmarkOptions) -> Result<(), CliError> {
    let data = match &options.file {
        Some(path) => load_records(path)?,
        None => generate_notebooks(options.count, options.seed)?,
    };
    let config = BenchConfig::new(options.warmup, options.trials);
    config.validate()?;
    let algorithms = builtin_algorithms();

    let skyline_size = verify_agreement(&data, &options.selection, &algorithms)?;
    info!(
        target: "skyline::cli",
        records = data.len(),
        skyline = skyline_size,
        "algorithms agree"
    );

    let results = benchmark_all(&algorithms, &data, &options.selection, &config)?;

    let mut report =
        ComparisonReport::new("Skyline algorithm comparison", data.len(), &options.selection, &results);
    report.add_note(format!(
        "{} warm-up runs, {} trials, {} repeats per trial",
        config.warmup_runs,
        config.trials,
        config.repeats_for_size(data.len())
    ));
    report.add_note(format!(
        "all {} algorithms returned the same {} skyline records",
        algorithms.len(),
        skyline_size
    ));
    match &options.file {
        Some(path) => report.add_note(format!("dataset: {}", path)),
        None => report.add_note(format!(
            "dataset: generated notebooks (count {}, seed {})",
            options.count, options.seed
        )),
    }

    print_report(&report);

    if let Some(path) = &options.json {
        export_json(&report, Path::new(path))?;
        eprintln!("{} JSON report written to {}", "✓".green().bold(), path);
    }
    if let Some(path) = &options.markdown {
        export_markdown(&report, Path::new(path))?;
        eprintln!("{} Markdown report written to {}", "✓".green().bold(), path);
    }

    Ok(())
}
