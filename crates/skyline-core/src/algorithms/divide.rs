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

//! Divide & conquer skyline.
//!
//! Splits the input at its midpoint, solves both halves recursively and
//! merges by filtering the concatenated partial skylines exactly as the
//! brute-force algorithm does. A point that is globally non-dominated is
//! also non-dominated within its own half, so the union of the partial
//! skylines always contains the full skyline and the merge filter recovers
//! it exactly.
//!
//! The two halves read disjoint slices and write disjoint outputs. Recursion
//! depth is `ceil(log2 n)`.

use super::run_on_points;
use crate::dominance::dominated_by_any;
use crate::error::SkylineResult;
use crate::record::Record;
use crate::selection::{Point, Selection};

/// Compute the skyline by recursive midpoint split and filtering merge.
///
/// Output preserves input order.
///
/// # Errors
///
/// Returns [`SkylineError::MalformedRecord`](crate::SkylineError::MalformedRecord)
/// if any record lacks a numeric value for a selected attribute.
pub fn skyline_divide_conquer<'a>(
    data: &'a [Record],
    selection: &Selection,
) -> SkylineResult<Vec<&'a Record>> {
    run_on_points(data, selection, divide_points)
}

/// Divide & conquer over resolved points.
pub fn divide_points(points: &[Point]) -> Vec<Point> {
    if points.len() <= 1 {
        return points.to_vec();
    }

    let (left, right) = points.split_at(points.len() / 2);
    let mut merged = divide_points(left);
    merged.extend(divide_points(right));

    merged
        .iter()
        .filter(|a| !dominated_by_any(a, &merged))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::brute::brute_points;

    fn p(index: usize, v1: f64, v2: f64) -> Point {
        Point { index, v1, v2 }
    }

    #[test]
    fn test_cross_half_domination() {
        // Index 0 is only dominated by index 3, which lives in the other half.
        let points = vec![p(0, 1.0, 1.0), p(1, 0.0, 5.0), p(2, 5.0, 0.0), p(3, 2.0, 2.0)];
        let skyline = divide_points(&points);
        let order: Vec<usize> = skyline.iter().map(|p| p.index).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn test_matches_brute_on_odd_sizes() {
        for n in [2usize, 3, 5, 7, 11] {
            let points: Vec<Point> = (0..n)
                .map(|i| p(i, ((i * 7) % 5) as f64, ((i * 3) % 4) as f64))
                .collect();
            assert_eq!(divide_points(&points), brute_points(&points), "n = {}", n);
        }
    }

    #[test]
    fn test_equal_points_all_survive() {
        let points: Vec<Point> = (0..6).map(|i| p(i, 3.0, 3.0)).collect();
        assert_eq!(divide_points(&points).len(), 6);
    }
}
