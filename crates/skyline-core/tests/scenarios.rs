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

//! Scenario and boundary tests run against every algorithm.

use skyline_core::{
    compute_skyline, Algorithm, Record, RecordId, Selection, SkylineAlgorithm, SkylineError,
};

fn ids(skyline: &[&Record]) -> Vec<u64> {
    let mut ids: Vec<u64> = skyline.iter().map(|r| r.id.0).collect();
    ids.sort_unstable();
    ids
}

fn xy(id: u64, x: f64, y: f64) -> Record {
    Record::new(id).with_number("x", x).with_number("y", y)
}

// =============================================================================
// Boundaries
// =============================================================================

#[test]
fn test_empty_input_gives_empty_output() {
    let sel = Selection::new("x", true, "y", true).unwrap();
    for algorithm in Algorithm::ALL {
        let skyline = compute_skyline(algorithm, &[], &sel).unwrap();
        assert!(skyline.is_empty(), "{} returned records for empty input", algorithm);
    }
}

#[test]
fn test_single_record_returned_unchanged() {
    let sel = Selection::new("x", true, "y", true).unwrap();
    let data = vec![xy(42, 1.0, 2.0)];
    for algorithm in Algorithm::ALL {
        let skyline = compute_skyline(algorithm, &data, &sel).unwrap();
        assert_eq!(skyline.len(), 1, "{}", algorithm);
        assert_eq!(skyline[0], &data[0]);
    }
}

// =============================================================================
// Scenario A: maximize x, minimize y
// =============================================================================

#[test]
fn test_scenario_mixed_directions() {
    let data = vec![xy(1, 10.0, 5.0), xy(2, 8.0, 3.0), xy(3, 6.0, 8.0)];
    let sel = Selection::new("x", true, "y", false).unwrap();

    for algorithm in Algorithm::ALL {
        let skyline = compute_skyline(algorithm, &data, &sel).unwrap();
        assert_eq!(ids(&skyline), vec![1, 2], "{}", algorithm);
    }
}

// =============================================================================
// Scenario B: identical records
// =============================================================================

#[test]
fn test_identical_records_all_survive() {
    let data: Vec<Record> = (1..=25).map(|id| xy(id, 4.0, 4.0)).collect();
    let sel = Selection::new("x", false, "y", true).unwrap();

    for algorithm in Algorithm::ALL {
        let skyline = compute_skyline(algorithm, &data, &sel).unwrap();
        assert_eq!(skyline.len(), data.len(), "{}", algorithm);
    }
}

#[test]
fn test_shared_ids_are_still_compared() {
    // Distinct records carrying the same id must not be treated as one.
    let data = vec![xy(7, 1.0, 1.0), xy(7, 2.0, 2.0)];
    let sel = Selection::new("x", true, "y", true).unwrap();

    for algorithm in Algorithm::ALL {
        let skyline = compute_skyline(algorithm, &data, &sel).unwrap();
        assert_eq!(skyline.len(), 1, "{}", algorithm);
        assert_eq!(skyline[0].number("x"), Ok(2.0));
    }
}

#[test]
fn test_all_directions() {
    let data = vec![xy(1, 0.0, 0.0), xy(2, 1.0, 1.0), xy(3, 0.0, 1.0), xy(4, 1.0, 0.0)];
    let cases = [
        (true, true, vec![2]),
        (false, false, vec![1]),
        (true, false, vec![4]),
        (false, true, vec![3]),
    ];

    for (asc1, asc2, expected) in cases {
        let sel = Selection::new("x", asc1, "y", asc2).unwrap();
        for algorithm in Algorithm::ALL {
            let skyline = compute_skyline(algorithm, &data, &sel).unwrap();
            assert_eq!(ids(&skyline), expected, "{} asc=({}, {})", algorithm, asc1, asc2);
        }
    }
}

#[test]
fn test_chain_keeps_only_top() {
    let data: Vec<Record> = (1..=50).map(|i| xy(i, i as f64, i as f64)).collect();
    let sel = Selection::new("x", true, "y", true).unwrap();
    for algorithm in Algorithm::ALL {
        let skyline = compute_skyline(algorithm, &data, &sel).unwrap();
        assert_eq!(ids(&skyline), vec![50], "{}", algorithm);
    }
}

#[test]
fn test_anticorrelated_keeps_everything() {
    let data: Vec<Record> = (0..40).map(|i| xy(i, i as f64, (40 - i) as f64)).collect();
    let sel = Selection::new("x", true, "y", true).unwrap();
    for algorithm in Algorithm::ALL {
        assert_eq!(compute_skyline(algorithm, &data, &sel).unwrap().len(), 40, "{}", algorithm);
    }
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_same_attribute_twice_rejected() {
    let err = Selection::new("price", true, "price", true).unwrap_err();
    assert!(matches!(err, SkylineError::InvalidSelection { .. }));
}

#[test]
fn test_missing_attribute_rejected_by_all() {
    let data = vec![xy(1, 1.0, 1.0), Record::new(2).with_number("x", 5.0), xy(3, 2.0, 0.0)];
    let sel = Selection::new("x", true, "y", true).unwrap();

    for algorithm in Algorithm::ALL {
        let err = compute_skyline(algorithm, &data, &sel).unwrap_err();
        assert_eq!(
            err,
            SkylineError::MalformedRecord {
                id: RecordId(2),
                attribute: "y".to_string(),
                reason: "is missing".to_string(),
            },
            "{}",
            algorithm
        );
    }
}

#[test]
fn test_non_numeric_attribute_rejected() {
    let data = vec![xy(1, 1.0, 1.0), Record::new(2).with_number("x", 1.0).with_text("y", "n/a")];
    let sel = Selection::new("x", true, "y", true).unwrap();
    for algorithm in Algorithm::ALL {
        assert!(compute_skyline(algorithm, &data, &sel).is_err(), "{}", algorithm);
    }
}

#[test]
fn test_infinite_attribute_rejected_by_all() {
    // A score of inf + -inf would otherwise break the score ordering.
    let sel = Selection::new("x", true, "y", true).unwrap();
    let datasets = [
        vec![xy(1, f64::INFINITY, f64::NEG_INFINITY), xy(2, 5.0, 0.0)],
        vec![xy(2, 5.0, 0.0), Record::new(1).with_text("x", "inf").with_number("y", 1.0)],
    ];

    for data in &datasets {
        for algorithm in Algorithm::ALL {
            let err = compute_skyline(algorithm, data, &sel).unwrap_err();
            assert!(
                matches!(
                    err,
                    SkylineError::MalformedRecord { id: RecordId(1), ref attribute, ref reason }
                        if attribute == "x" && reason.starts_with("is not finite")
                ),
                "{}: {}",
                algorithm,
                err
            );
        }
    }
}

#[test]
fn test_trait_object_dispatch() {
    let data = vec![xy(1, 10.0, 5.0), xy(2, 8.0, 3.0), xy(3, 6.0, 8.0)];
    let sel = Selection::new("x", true, "y", false).unwrap();

    for algorithm in Algorithm::ALL {
        let dynamic: &dyn SkylineAlgorithm = &algorithm;
        let skyline = dynamic.compute(&data, &sel).unwrap();
        assert_eq!(ids(&skyline), vec![1, 2], "{}", dynamic.name());
    }
}
