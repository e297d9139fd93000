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

//! Ranking and cross-checking of benchmark results.

use crate::error::{BenchError, BenchResult};
use crate::harness::runner::AlgorithmBenchmark;
use serde::{Deserialize, Serialize};
use skyline_core::{skyline_brute, Record, Selection, SkylineAlgorithm, SkylineError};
use std::collections::BTreeMap;

/// Orders results by mean time, fastest first. Equal means fall back to name.
pub fn rank_by_mean(results: &BTreeMap<String, AlgorithmBenchmark>) -> Vec<&AlgorithmBenchmark> {
    let mut ranked: Vec<&AlgorithmBenchmark> = results.values().collect();
    ranked.sort_by(|a, b| {
        a.stats
            .mean
            .total_cmp(&b.stats.mean)
            .then_with(|| a.name.cmp(&b.name))
    });
    ranked
}

/// Head-to-head summary of one benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Name of the algorithm with the lowest mean.
    pub fastest: String,
    /// Name of the algorithm with the highest mean.
    pub slowest: String,
    /// Speed-up of each algorithm over the slowest (`slowest.mean / mean`).
    pub relative_to_slowest: BTreeMap<String, f64>,
}

impl Comparison {
    /// Summarizes a result map. Returns `None` when the map is empty.
    pub fn from_results(results: &BTreeMap<String, AlgorithmBenchmark>) -> Option<Self> {
        let ranked = rank_by_mean(results);
        let fastest = ranked.first()?;
        let slowest = ranked.last()?;

        let relative_to_slowest = ranked
            .iter()
            .map(|r| {
                let factor = if r.stats.mean > 0.0 {
                    slowest.stats.mean / r.stats.mean
                } else {
                    1.0
                };
                (r.name.clone(), factor)
            })
            .collect();

        Some(Self {
            fastest: fastest.name.clone(),
            slowest: slowest.name.clone(),
            relative_to_slowest,
        })
    }
}

fn sorted_ids(skyline: &[&Record]) -> Vec<u64> {
    let mut ids: Vec<u64> = skyline.iter().map(|r| r.id.0).collect();
    ids.sort_unstable();
    ids
}

/// Runs every algorithm once and checks it returns the brute-force skyline.
///
/// Results are compared as sets of record ids; output order is free to
/// differ between algorithms.
///
/// # Returns
///
/// The skyline size all algorithms agreed on.
///
/// # Errors
///
/// Returns [`BenchError::Algorithm`] if an algorithm fails and
/// [`BenchError::Disagreement`] for the first algorithm whose result differs.
pub fn verify_agreement(
    data: &[Record],
    selection: &Selection,
    algorithms: &[&dyn SkylineAlgorithm],
) -> BenchResult<usize> {
    let oracle = |source: SkylineError| BenchError::Algorithm {
        algorithm: "brute".to_string(),
        source,
    };
    let expected = sorted_ids(&skyline_brute(data, selection).map_err(oracle)?);

    for algorithm in algorithms {
        let skyline = algorithm
            .compute(data, selection)
            .map_err(|source| BenchError::Algorithm {
                algorithm: algorithm.name().to_string(),
                source,
            })?;
        let actual = sorted_ids(&skyline);
        if actual != expected {
            return Err(BenchError::Disagreement {
                algorithm: algorithm.name().to_string(),
                expected,
                actual,
            });
        }
    }

    Ok(expected.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::measurement::Statistics;
    use crate::harness::runner::builtin_algorithms;

    fn result(name: &str, mean: f64) -> AlgorithmBenchmark {
        let stats = Statistics::from_samples(vec![mean]).unwrap();
        AlgorithmBenchmark {
            name: name.to_string(),
            hz: stats.hz(),
            rme: stats.rme(),
            stats,
            skyline_size: 3,
        }
    }

    fn results() -> BTreeMap<String, AlgorithmBenchmark> {
        [("brute", 8.0), ("dac", 4.0), ("sfs", 2.0), ("maxima", 2.0)]
            .into_iter()
            .map(|(name, mean)| (name.to_string(), result(name, mean)))
            .collect()
    }

    #[test]
    fn test_rank_by_mean() {
        let results = results();
        let order: Vec<&str> = rank_by_mean(&results).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(order, vec!["maxima", "sfs", "dac", "brute"]);
    }

    #[test]
    fn test_comparison() {
        let comparison = Comparison::from_results(&results()).unwrap();
        assert_eq!(comparison.fastest, "maxima");
        assert_eq!(comparison.slowest, "brute");
        assert_eq!(comparison.relative_to_slowest["brute"], 1.0);
        assert_eq!(comparison.relative_to_slowest["dac"], 2.0);
        assert_eq!(comparison.relative_to_slowest["sfs"], 4.0);
    }

    #[test]
    fn test_comparison_empty() {
        assert!(Comparison::from_results(&BTreeMap::new()).is_none());
    }

    #[test]
    fn test_verify_agreement() {
        let data = vec![
            Record::new(1).with_number("x", 10.0).with_number("y", 5.0),
            Record::new(2).with_number("x", 8.0).with_number("y", 3.0),
            Record::new(3).with_number("x", 6.0).with_number("y", 8.0),
        ];
        let sel = Selection::new("x", true, "y", false).unwrap();
        assert_eq!(verify_agreement(&data, &sel, &builtin_algorithms()), Ok(2));
    }

    #[test]
    fn test_verify_agreement_reports_failure() {
        let data = vec![Record::new(1).with_number("x", 1.0), Record::new(2)];
        let sel = Selection::new("x", true, "y", false).unwrap();
        let err = verify_agreement(&data, &sel, &builtin_algorithms()).unwrap_err();
        assert!(matches!(err, BenchError::Algorithm { ref algorithm, .. } if algorithm == "brute"));
    }
}
