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

//! Brute-force skyline.
//!
//! Keeps a point iff no other point of the full dataset dominates it.
//! O(n^2) time, no extra space beyond the output. Its result is the ground
//! truth the other algorithms are tested against.

use super::run_on_points;
use crate::dominance::dominated_by_any;
use crate::error::SkylineResult;
use crate::record::Record;
use crate::selection::{Point, Selection};

/// Compute the skyline by exhaustive pairwise comparison.
///
/// Output preserves input order.
///
/// # Errors
///
/// Returns [`SkylineError::MalformedRecord`](crate::SkylineError::MalformedRecord)
/// if any record lacks a numeric value for a selected attribute.
///
/// # Examples
///
/// ```
/// use skyline_core::{skyline_brute, Record, Selection};
///
/// let data = vec![
///     Record::new(1).with_number("x", 10.0).with_number("y", 5.0),
///     Record::new(2).with_number("x", 8.0).with_number("y", 3.0),
///     Record::new(3).with_number("x", 6.0).with_number("y", 8.0),
/// ];
/// let selection = Selection::new("x", true, "y", false).unwrap();
/// let skyline = skyline_brute(&data, &selection).unwrap();
/// let ids: Vec<u64> = skyline.iter().map(|r| r.id.0).collect();
/// assert_eq!(ids, vec![1, 2]);
/// ```
pub fn skyline_brute<'a>(
    data: &'a [Record],
    selection: &Selection,
) -> SkylineResult<Vec<&'a Record>> {
    run_on_points(data, selection, brute_points)
}

/// Brute-force filter over resolved points.
pub fn brute_points(points: &[Point]) -> Vec<Point> {
    points
        .iter()
        .filter(|a| !dominated_by_any(a, points))
        .copied()
        .collect()
}
