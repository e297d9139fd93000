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

//! Console reporter for algorithm comparisons.

use crate::reporters::types::ComparisonReport;
use std::fmt::Write as _;

/// Renders the report as a plain-text table.
pub fn format_report(report: &ComparisonReport) -> String {
    let mut out = String::new();
    let rule = "=".repeat(80);
    let thin = "-".repeat(80);

    let _ = writeln!(out, "\n{}", rule);
    let _ = writeln!(out, "BENCHMARK REPORT: {}", report.title);
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "Timestamp: {}", report.timestamp);
    let _ = writeln!(out, "Records:   {}", report.dataset_size);
    let _ = writeln!(out, "Selection: {}", report.selection);
    let _ = writeln!(out, "Algorithms: {}", report.result_count());

    if !report.notes.is_empty() {
        let _ = writeln!(out, "\nNotes:");
        for note in &report.notes {
            let _ = writeln!(out, "  - {}", note);
        }
    }

    let _ = writeln!(out, "\n{}", thin);
    let _ = writeln!(
        out,
        "{:<22} {:>10} {:>10} {:>10} {:>10} {:>9} {:>6}",
        "ALGORITHM", "MEAN ms", "MEDIAN ms", "MIN ms", "MAX ms", "±RME %", "SIZE"
    );
    let _ = writeln!(out, "{}", thin);

    for result in &report.results {
        let _ = writeln!(
            out,
            "{:<22} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>9.2} {:>6}",
            result.label(),
            result.stats.mean,
            result.stats.median,
            result.stats.min,
            result.stats.max,
            result.rme,
            result.skyline_size
        );
    }

    if let Some(comparison) = &report.comparison {
        let _ = writeln!(out, "{}", thin);
        let _ = writeln!(out, "Fastest: {}", comparison.fastest);
        let _ = writeln!(out, "Slowest: {}", comparison.slowest);
        for result in &report.results {
            if let Some(factor) = report.speedup(&result.name) {
                let _ = writeln!(out, "  {:<20} {:>8.2}x vs slowest", result.name, factor);
            }
        }
    }

    let _ = writeln!(out, "{}", rule);
    out
}

/// Prints the report to stdout.
pub fn print_report(report: &ComparisonReport) {
    println!("{}", format_report(report));
}
