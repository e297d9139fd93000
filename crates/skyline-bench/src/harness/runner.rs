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

//! Benchmark runner for timing skyline algorithms.
//!
//! Every algorithm goes through the same protocol: a few untimed warm-up
//! runs, then a fixed number of timed trials. Algorithms are measured one
//! after another, never concurrently, so they do not compete for the CPU.

use crate::core::config::BenchConfig;
use crate::core::measurement::{time_repeated, Statistics};
use crate::error::{BenchError, BenchResult};
use serde::{Deserialize, Serialize};
use skyline_core::{Algorithm, Record, Selection, SkylineAlgorithm, SkylineError};
use std::collections::BTreeMap;
use tracing::{debug, info};

static BUILTIN: [Algorithm; 4] = Algorithm::ALL;

/// The four built-in algorithms as trait objects, brute-force first.
pub fn builtin_algorithms() -> Vec<&'static dyn SkylineAlgorithm> {
    BUILTIN
        .iter()
        .map(|algorithm| algorithm as &dyn SkylineAlgorithm)
        .collect()
}

/// Skyline and timing statistics from one measured algorithm.
#[derive(Debug, Clone)]
pub struct Measured<'a> {
    /// Skyline returned by the final timed call.
    pub skyline: Vec<&'a Record>,
    /// Per-call timing statistics in milliseconds.
    pub stats: Statistics,
}

/// Benchmark summary for one algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmBenchmark {
    /// Algorithm name (`brute`, `dac`, `sfs`, `maxima`, ...).
    pub name: String,
    /// Timing statistics in milliseconds.
    pub stats: Statistics,
    /// Calls per second derived from the mean.
    pub hz: f64,
    /// Relative margin of error in percent.
    pub rme: f64,
    /// Number of records in the skyline.
    pub skyline_size: usize,
}

impl AlgorithmBenchmark {
    /// Builds a summary from a measurement.
    pub fn from_measured(name: impl Into<String>, measured: &Measured<'_>) -> Self {
        Self {
            name: name.into(),
            hz: measured.stats.hz(),
            rme: measured.stats.rme(),
            skyline_size: measured.skyline.len(),
            stats: measured.stats.clone(),
        }
    }

    /// Human-readable label for built-in algorithms, the name otherwise.
    pub fn label(&self) -> String {
        self.name
            .parse::<Algorithm>()
            .map(|algorithm| algorithm.label().to_string())
            .unwrap_or_else(|_| self.name.clone())
    }
}

fn tag(algorithm: &str) -> impl Fn(SkylineError) -> BenchError + '_ {
    move |source| BenchError::Algorithm {
        algorithm: algorithm.to_string(),
        source,
    }
}

/// Measures one algorithm on one dataset.
///
/// Runs `config.warmup_runs` untimed calls, then `config.trials` timed
/// trials. Each trial makes `config.repeats_for_size(data.len())` calls back
/// to back and records the mean time per call.
///
/// # Arguments
///
/// * `algorithm` - The algorithm to time
/// * `data` - Dataset to run on
/// * `selection` - Attribute pair and directions
/// * `config` - Warm-up and trial settings
///
/// # Errors
///
/// Returns [`BenchError::InvalidConfig`] for an unusable configuration and
/// [`BenchError::Algorithm`] as soon as any call fails.
pub fn measure<'a, A>(
    algorithm: &A,
    data: &'a [Record],
    selection: &Selection,
    config: &BenchConfig,
) -> BenchResult<Measured<'a>>
where
    A: SkylineAlgorithm + ?Sized,
{
    config.validate()?;
    let name = algorithm.name();
    let repeats = config.repeats_for_size(data.len());

    for _ in 0..config.warmup_runs {
        algorithm.compute(data, selection).map_err(tag(name))?;
    }

    let mut samples = Vec::with_capacity(config.trials);
    let mut skyline = Vec::new();
    for trial in 0..config.trials {
        let (result, per_call_ms) =
            time_repeated(repeats, || algorithm.compute(data, selection)).map_err(tag(name))?;
        debug!(
            target: "skyline::bench",
            algorithm = name,
            trial = trial,
            repeats = repeats,
            per_call_ms = per_call_ms,
            "trial finished"
        );
        samples.push(per_call_ms);
        skyline = result;
    }

    let stats = Statistics::from_samples(samples)?;
    Ok(Measured { skyline, stats })
}

/// Benchmarks several algorithms on the same dataset.
///
/// Algorithms run strictly one after another. The first failing algorithm
/// aborts the whole comparison.
///
/// # Errors
///
/// Returns [`BenchError::InvalidConfig`] if two algorithms share a name or
/// the configuration is unusable, and [`BenchError::Algorithm`] if any
/// algorithm fails.
///
/// # Example
///
/// ```
/// use skyline_bench::core::BenchConfig;
/// use skyline_bench::generators::{generate_notebooks, PERFORMANCE, PRICE};
/// use skyline_bench::harness::{benchmark_all, builtin_algorithms};
/// use skyline_core::Selection;
///
/// let data = generate_notebooks(200, 7).unwrap();
/// let selection = Selection::new(PERFORMANCE, true, PRICE, false).unwrap();
/// let config = BenchConfig::new(0, 2).with_repeats(1);
///
/// let results = benchmark_all(&builtin_algorithms(), &data, &selection, &config).unwrap();
/// assert_eq!(results.len(), 4);
/// assert_eq!(results["brute"].skyline_size, results["maxima"].skyline_size);
/// ```
pub fn benchmark_all(
    algorithms: &[&dyn SkylineAlgorithm],
    data: &[Record],
    selection: &Selection,
    config: &BenchConfig,
) -> BenchResult<BTreeMap<String, AlgorithmBenchmark>> {
    config.validate()?;

    let mut results = BTreeMap::new();
    for algorithm in algorithms {
        let name = algorithm.name();
        if results.contains_key(name) {
            return Err(BenchError::invalid_config(
                "algorithms",
                format!("algorithm '{}' listed twice", name),
            ));
        }

        let measured = measure(*algorithm, data, selection, config)?;
        let summary = AlgorithmBenchmark::from_measured(name, &measured);
        info!(
            target: "skyline::bench",
            algorithm = name,
            records = data.len(),
            mean_ms = summary.stats.mean,
            rme = summary.rme,
            skyline_size = summary.skyline_size,
            "benchmark complete"
        );
        results.insert(name.to_string(), summary);
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> Vec<Record> {
        vec![
            Record::new(1).with_number("x", 10.0).with_number("y", 5.0),
            Record::new(2).with_number("x", 8.0).with_number("y", 3.0),
            Record::new(3).with_number("x", 6.0).with_number("y", 8.0),
        ]
    }

    #[test]
    fn test_builtin_algorithms_order() {
        let names: Vec<String> = builtin_algorithms()
            .iter()
            .map(|a| a.name().to_string())
            .collect();
        assert_eq!(names, vec!["brute", "dac", "sfs", "maxima"]);
    }

    #[test]
    fn test_measure_collects_one_sample_per_trial() {
        let data = data();
        let sel = Selection::new("x", true, "y", false).unwrap();
        let config = BenchConfig::new(1, 4).with_repeats(2);

        let measured = measure(&Algorithm::SortFilter, &data, &sel, &config).unwrap();
        assert_eq!(measured.stats.iterations, 4);
        assert_eq!(measured.stats.samples.len(), 4);
        assert_eq!(measured.skyline.len(), 2);
        assert!(measured.stats.min <= measured.stats.median);
        assert!(measured.stats.median <= measured.stats.max);
    }

    #[test]
    fn test_measure_rejects_zero_trials() {
        let data = data();
        let sel = Selection::new("x", true, "y", false).unwrap();
        let err = measure(&Algorithm::Maxima, &data, &sel, &BenchConfig::new(0, 0)).unwrap_err();
        assert!(matches!(err, BenchError::InvalidConfig { .. }));
    }

    #[test]
    fn test_benchmark_all_rejects_duplicates() {
        let data = data();
        let sel = Selection::new("x", true, "y", false).unwrap();
        let algorithms: Vec<&dyn SkylineAlgorithm> = vec![&Algorithm::Maxima, &Algorithm::Maxima];
        let err = benchmark_all(&algorithms, &data, &sel, &BenchConfig::new(0, 1)).unwrap_err();
        assert!(err.to_string().contains("listed twice"));
    }

    #[test]
    fn test_summary_rates() {
        let data = data();
        let sel = Selection::new("x", true, "y", false).unwrap();
        let config = BenchConfig::new(0, 3);
        let results = benchmark_all(&builtin_algorithms(), &data, &sel, &config).unwrap();

        for summary in results.values() {
            assert_eq!(summary.skyline_size, 2);
            assert_eq!(summary.hz, summary.stats.hz());
            assert_eq!(summary.rme, summary.stats.rme());
        }
        assert_eq!(results["dac"].label(), "Divide & Conquer");
    }
}
