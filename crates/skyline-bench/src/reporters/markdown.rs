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

//! Markdown export for comparison reports.

use crate::error::BenchResult;
use crate::reporters::types::ComparisonReport;
use std::fs;
use std::path::Path;

/// Renders the report as Markdown.
pub fn render_markdown(report: &ComparisonReport) -> String {
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", report.title));
    md.push_str(&format!("**Timestamp:** {}\n\n", report.timestamp));
    md.push_str(&format!("**Records:** {}\n\n", report.dataset_size));
    md.push_str(&format!("**Selection:** {}\n\n", report.selection));
    md.push_str(&format!("**Algorithms:** {}\n\n", report.result_count()));

    if !report.notes.is_empty() {
        md.push_str("## Notes\n\n");
        for note in &report.notes {
            md.push_str(&format!("- {}\n", note));
        }
        md.push('\n');
    }

    md.push_str("## Results\n\n");
    md.push_str("| Algorithm | Mean (ms) | Median (ms) | Min (ms) | Max (ms) | ±RME | ops/s | Skyline |\n");
    md.push_str("|-----------|-----------|-------------|----------|----------|------|-------|---------|\n");

    for result in &report.results {
        md.push_str(&format!(
            "| {} | {:.4} | {:.4} | {:.4} | {:.4} | {:.2}% | {:.0} | {} |\n",
            result.label(),
            result.stats.mean,
            result.stats.median,
            result.stats.min,
            result.stats.max,
            result.rme,
            result.hz,
            result.skyline_size
        ));
    }

    if let Some(comparison) = &report.comparison {
        md.push_str("\n## Comparison\n\n");
        md.push_str(&format!("- **Fastest:** {}\n", comparison.fastest));
        md.push_str(&format!("- **Slowest:** {}\n", comparison.slowest));
        for result in &report.results {
            if let Some(factor) = report.speedup(&result.name) {
                md.push_str(&format!("- {}: {:.2}x vs slowest\n", result.name, factor));
            }
        }
    }

    md
}

/// Exports a comparison report as Markdown.
///
/// # Arguments
///
/// * `report` - The report to export
/// * `path` - Output file path
///
/// # Errors
///
/// Returns [`BenchError::Io`](crate::BenchError::Io) if the file cannot be written.
pub fn export_markdown(report: &ComparisonReport, path: &Path) -> BenchResult<()> {
    fs::write(path, render_markdown(report))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::types::fixtures::sample_report;
    use tempfile::NamedTempFile;

    #[test]
    fn test_export_markdown() {
        let report = sample_report();
        let temp = NamedTempFile::new().unwrap();

        export_markdown(&report, temp.path()).unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        assert!(content.starts_with("# Skyline comparison"));
        assert!(content.contains("| Maxima Finding | 0.5000 |"));
        assert!(content.contains("- **Fastest:** maxima"));
        assert!(content.contains("- brute: 1.00x vs slowest"));
        assert!(content.contains("**Algorithms:** 2"));
    }
}
