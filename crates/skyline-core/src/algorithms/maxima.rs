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

//! Maxima-finding skyline.
//!
//! Sort-filter with forward elimination. When a point is admitted, every
//! later unsettled point it dominates is settled immediately and the main
//! loop skips it without any comparison. Settled points are tracked in a
//! bitset indexed by position in the sorted order.
//!
//! Skipping a settled point never loses a skyline member: a settled point
//! is dominated by an admitted one, and dominance is transitive, so anything
//! the settled point would have dominated is dominated by the admitted one
//! too.

use super::{run_on_points, sort_by_score};
use crate::dominance::{dominated_by_any, dominates};
use crate::error::SkylineResult;
use crate::record::Record;
use crate::selection::{Point, Selection};

/// Compute the skyline with score sorting and forward elimination.
///
/// Output is in descending score order.
///
/// # Errors
///
/// Returns [`SkylineError::MalformedRecord`](crate::SkylineError::MalformedRecord)
/// if any record lacks a numeric value for a selected attribute.
pub fn skyline_maxima<'a>(
    data: &'a [Record],
    selection: &Selection,
) -> SkylineResult<Vec<&'a Record>> {
    run_on_points(data, selection, maxima_points)
}

/// Maxima-finding over resolved points.
pub fn maxima_points(points: &[Point]) -> Vec<Point> {
    let mut sorted = points.to_vec();
    sort_by_score(&mut sorted);

    let mut settled = Settled::with_len(sorted.len());
    let mut skyline: Vec<Point> = Vec::new();

    for i in 0..sorted.len() {
        if settled.contains(i) {
            continue;
        }
        settled.insert(i);

        let point = sorted[i];
        if dominated_by_any(&point, &skyline) {
            continue;
        }
        skyline.push(point);

        for (j, later) in sorted.iter().enumerate().skip(i + 1) {
            if !settled.contains(j) && dominates(&point, later) {
                settled.insert(j);
            }
        }
    }
    skyline
}

/// Fixed-size bitset over positions in the sorted order.
struct Settled {
    words: Vec<u64>,
}

impl Settled {
    fn with_len(len: usize) -> Self {
        Self {
            words: vec![0; (len + 63) / 64],
        }
    }

    #[inline]
    fn contains(&self, i: usize) -> bool {
        self.words[i / 64] & (1 << (i % 64)) != 0
    }

    #[inline]
    fn insert(&mut self, i: usize) {
        self.words[i / 64] |= 1 << (i % 64);
    }
}
