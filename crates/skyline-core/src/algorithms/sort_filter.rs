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

//! Sort-Filter Skyline (SFS).
//!
//! Sorts a copy of the points by descending score, then scans once. Each
//! candidate is compared only against the skyline accumulated so far, never
//! against the remaining input. A dominator always has a strictly larger
//! exact score than the point it dominates, and the sort tie-break keeps
//! that order when float sums collide, so every dominated candidate meets a
//! skyline member that dominates it before it could be admitted.

use super::{run_on_points, sort_by_score};
use crate::dominance::dominated_by_any;
use crate::error::SkylineResult;
use crate::record::Record;
use crate::selection::{Point, Selection};

/// Compute the skyline with a score sort followed by a filtering scan.
///
/// Output is in descending score order.
///
/// # Errors
///
/// Returns [`SkylineError::MalformedRecord`](crate::SkylineError::MalformedRecord)
/// if any record lacks a numeric value for a selected attribute.
pub fn skyline_sort_filter<'a>(
    data: &'a [Record],
    selection: &Selection,
) -> SkylineResult<Vec<&'a Record>> {
    run_on_points(data, selection, sort_filter_points)
}

/// Sort-filter over resolved points.
pub fn sort_filter_points(points: &[Point]) -> Vec<Point> {
    let mut sorted = points.to_vec();
    sort_by_score(&mut sorted);

    let mut skyline: Vec<Point> = Vec::new();
    for point in sorted {
        if !dominated_by_any(&point, &skyline) {
            skyline.push(point);
        }
    }
    skyline
}
