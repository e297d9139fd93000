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

//! Harness tests driven by test doubles and generated catalogues.

use skyline_bench::generators::{PERFORMANCE, PRICE};
use skyline_bench::{
    benchmark_all, builtin_algorithms, generate_anticorrelated, generate_notebooks, measure,
    verify_agreement, BenchConfig, BenchError, ComparisonReport,
};
use skyline_core::{
    skyline_brute, Record, RecordId, Selection, SkylineAlgorithm, SkylineError, SkylineResult,
};
use std::cell::Cell;

/// Counts calls and delegates to brute-force.
struct Counting {
    calls: Cell<usize>,
}

impl SkylineAlgorithm for Counting {
    fn name(&self) -> &str {
        "counting"
    }

    fn compute<'a>(
        &self,
        data: &'a [Record],
        selection: &Selection,
    ) -> SkylineResult<Vec<&'a Record>> {
        self.calls.set(self.calls.get() + 1);
        skyline_brute(data, selection)
    }
}

/// Fails on a chosen call.
struct FailsOnCall {
    fail_at: usize,
    calls: Cell<usize>,
}

impl SkylineAlgorithm for FailsOnCall {
    fn name(&self) -> &str {
        "flaky"
    }

    fn compute<'a>(
        &self,
        data: &'a [Record],
        selection: &Selection,
    ) -> SkylineResult<Vec<&'a Record>> {
        let call = self.calls.get() + 1;
        self.calls.set(call);
        if call == self.fail_at {
            return Err(SkylineError::malformed(RecordId(1), "price", "is missing"));
        }
        skyline_brute(data, selection)
    }
}

/// Always returns the whole input.
struct Everything;

impl SkylineAlgorithm for Everything {
    fn name(&self) -> &str {
        "everything"
    }

    fn compute<'a>(
        &self,
        data: &'a [Record],
        _selection: &Selection,
    ) -> SkylineResult<Vec<&'a Record>> {
        Ok(data.iter().collect())
    }
}

fn selection() -> Selection {
    Selection::new(PERFORMANCE, true, PRICE, false).unwrap()
}

#[test]
fn test_call_count_follows_protocol() {
    let data = generate_notebooks(50, 1).unwrap();
    let counting = Counting { calls: Cell::new(0) };

    // 50 records: 100 repeats per trial.
    let measured = measure(&counting, &data, &selection(), &BenchConfig::default()).unwrap();
    assert_eq!(counting.calls.get(), 3 + 5 * 100);
    assert_eq!(measured.stats.iterations, 5);

    let data = generate_notebooks(500, 1).unwrap();
    counting.calls.set(0);
    measure(&counting, &data, &selection(), &BenchConfig::new(2, 4)).unwrap();
    assert_eq!(counting.calls.get(), 2 + 4 * 10);

    let data = generate_notebooks(1_000, 1).unwrap();
    counting.calls.set(0);
    measure(&counting, &data, &selection(), &BenchConfig::new(0, 3)).unwrap();
    assert_eq!(counting.calls.get(), 3);
}

#[test]
fn test_failure_during_warmup_propagates() {
    let data = generate_notebooks(10, 2).unwrap();
    let flaky = FailsOnCall {
        fail_at: 2,
        calls: Cell::new(0),
    };

    let err = measure(&flaky, &data, &selection(), &BenchConfig::default()).unwrap_err();
    assert_eq!(
        err,
        BenchError::Algorithm {
            algorithm: "flaky".to_string(),
            source: SkylineError::malformed(RecordId(1), "price", "is missing"),
        }
    );
    assert_eq!(flaky.calls.get(), 2);
}

#[test]
fn test_failure_during_trial_aborts_comparison() {
    let data = generate_notebooks(2_000, 3).unwrap();
    let flaky = FailsOnCall {
        fail_at: 5,
        calls: Cell::new(0),
    };
    let counting = Counting { calls: Cell::new(0) };
    let algorithms: Vec<&dyn SkylineAlgorithm> = vec![&flaky, &counting];

    let err = benchmark_all(&algorithms, &data, &selection(), &BenchConfig::default()).unwrap_err();
    assert!(matches!(err, BenchError::Algorithm { ref algorithm, .. } if algorithm == "flaky"));
    assert_eq!(counting.calls.get(), 0, "later algorithms must not run");
}

#[test]
fn test_malformed_dataset_propagates_from_builtin() {
    let mut data = generate_notebooks(20, 4).unwrap();
    data[7].values.remove(PRICE);

    let err = benchmark_all(&builtin_algorithms(), &data, &selection(), &BenchConfig::default())
        .unwrap_err();
    match err {
        BenchError::Algorithm { algorithm, source } => {
            assert_eq!(algorithm, "brute");
            assert_eq!(
                source,
                SkylineError::malformed(RecordId(8), PRICE, "is missing")
            );
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_disagreement_detected() {
    let data = generate_notebooks(300, 5).unwrap();
    let algorithms: Vec<&dyn SkylineAlgorithm> = vec![&Everything];

    let err = verify_agreement(&data, &selection(), &algorithms).unwrap_err();
    match err {
        BenchError::Disagreement {
            algorithm,
            expected,
            actual,
        } => {
            assert_eq!(algorithm, "everything");
            assert_eq!(actual.len(), 300);
            assert!(expected.len() < actual.len());
        }
        other => panic!("unexpected error: {}", other),
    }
}

/// Ten thousand records, every algorithm, five stats per result.
#[test]
fn test_standard_comparison_shape() {
    let data = generate_notebooks(10_000, 42).unwrap();
    let sel = selection();
    let config = BenchConfig::new(0, 2);

    let size = verify_agreement(&data, &sel, &builtin_algorithms()).unwrap();
    let results = benchmark_all(&builtin_algorithms(), &data, &sel, &config).unwrap();

    assert_eq!(
        results.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["brute", "dac", "maxima", "sfs"]
    );
    for result in results.values() {
        let stats = &result.stats;
        assert!(stats.min.is_finite() && stats.min >= 0.0);
        assert!(stats.min <= stats.median && stats.median <= stats.max);
        assert!(stats.min <= stats.mean && stats.mean <= stats.max);
        assert!(stats.std_dev >= 0.0);
        assert_eq!(stats.iterations, 2);
        assert_eq!(result.skyline_size, size);
    }

    let report = ComparisonReport::new("notebooks", data.len(), &sel, &results);
    assert_eq!(report.result_count(), 4);
    assert!(report.comparison.is_some());
}

/// With no dominated records brute-force compares every pair, while
/// sort-filter only compares against the skyline found so far. Timing
/// sensitive, so run in release only.
#[test]
#[ignore]
fn test_brute_force_trails_sort_filter_without_dominance() {
    let data = generate_anticorrelated(5_000, 42).unwrap();
    let results =
        benchmark_all(&builtin_algorithms(), &data, &selection(), &BenchConfig::default()).unwrap();

    assert_eq!(results["brute"].skyline_size, 5_000);
    assert!(results["brute"].stats.mean > results["sfs"].stats.mean);
}
