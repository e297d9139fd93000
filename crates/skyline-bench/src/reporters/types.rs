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

//! Report data structures.

use crate::harness::{rank_by_mean, AlgorithmBenchmark, Comparison};
use serde::{Deserialize, Serialize};
use skyline_core::Selection;
use std::collections::BTreeMap;

/// Result of comparing algorithms on one dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Report title.
    pub title: String,
    /// Report timestamp (RFC 3339).
    pub timestamp: String,
    /// Number of records benchmarked.
    pub dataset_size: usize,
    /// Attribute pair and directions, e.g. `performance (max) x price (min)`.
    pub selection: String,
    /// Per-algorithm results, fastest first.
    pub results: Vec<AlgorithmBenchmark>,
    /// Fastest/slowest summary, absent for an empty run.
    pub comparison: Option<Comparison>,
    /// Additional notes.
    pub notes: Vec<String>,
}

impl ComparisonReport {
    /// Builds a report from benchmark results, stamped with the current time.
    pub fn new(
        title: impl Into<String>,
        dataset_size: usize,
        selection: &Selection,
        results: &BTreeMap<String, AlgorithmBenchmark>,
    ) -> Self {
        Self {
            title: title.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            dataset_size,
            selection: selection.to_string(),
            results: rank_by_mean(results).into_iter().cloned().collect(),
            comparison: Comparison::from_results(results),
            notes: Vec::new(),
        }
    }

    /// Adds a note shown under the header.
    pub fn add_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    /// Returns the number of algorithm results.
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// Speed-up of `name` over the slowest algorithm, if known.
    pub fn speedup(&self, name: &str) -> Option<f64> {
        self.comparison
            .as_ref()
            .and_then(|c| c.relative_to_slowest.get(name).copied())
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::sample_report;

    #[test]
    fn test_report_ranks_results() {
        let report = sample_report();
        assert_eq!(report.result_count(), 2);
        assert_eq!(report.results[0].name, "maxima");
        assert_eq!(report.selection, "performance (max) x price (min)");
        assert_eq!(report.speedup("maxima"), Some(8.0));
        assert_eq!(report.speedup("bnl"), None);
        assert!(chrono::DateTime::parse_from_rfc3339(&report.timestamp).is_ok());
    }

    #[test]
    fn test_add_note() {
        let mut report = sample_report();
        report.add_note("release build");
        assert_eq!(report.notes, vec!["release build".to_string()]);
    }
}
