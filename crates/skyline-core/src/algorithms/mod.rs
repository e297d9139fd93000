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

//! Skyline algorithms.
//!
//! Four interchangeable implementations of the same query. All share one
//! signature, `(&[Record], &Selection) -> SkylineResult<Vec<&Record>>`, and
//! produce set-equal results:
//!
//! - [`brute`]: exhaustive pairwise filter, the reference oracle
//! - [`divide`]: recursive split at the midpoint with a filtering merge
//! - [`sort_filter`]: score-sorted scan against the accumulated skyline
//! - [`maxima`]: sort-filter plus forward elimination of dominated points
//!
//! Every entry point resolves the selection first, so malformed records are
//! rejected before any comparison runs.

pub mod brute;
pub mod divide;
pub mod maxima;
pub mod sort_filter;

pub use brute::skyline_brute;
pub use divide::skyline_divide_conquer;
pub use maxima::skyline_maxima;
pub use sort_filter::skyline_sort_filter;

use crate::error::SkylineResult;
use crate::record::Record;
use crate::selection::{Point, Selection};
use std::fmt;
use std::str::FromStr;

/// A skyline algorithm that can be invoked by name.
///
/// This is the seam the benchmark harness drives; anything implementing it
/// can be measured alongside the built-in algorithms.
pub trait SkylineAlgorithm {
    /// Stable short name used as a key in benchmark results.
    fn name(&self) -> &str;

    /// Compute the skyline of `data` under `selection`.
    ///
    /// # Errors
    ///
    /// Propagates any [`SkylineError`](crate::SkylineError) from resolving the dataset.
    fn compute<'a>(&self, data: &'a [Record], selection: &Selection)
        -> SkylineResult<Vec<&'a Record>>;
}

/// The built-in skyline algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// O(n^2) pairwise filter.
    BruteForce,
    /// Recursive midpoint split with a filtering merge.
    DivideAndConquer,
    /// Sort by score, then scan against the accumulated skyline.
    SortFilter,
    /// Sort-filter with forward elimination.
    Maxima,
}

impl Algorithm {
    /// All built-in algorithms, oracle first.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::BruteForce,
        Algorithm::DivideAndConquer,
        Algorithm::SortFilter,
        Algorithm::Maxima,
    ];

    /// Short identifier (`brute`, `dac`, `sfs`, `maxima`).
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BruteForce => "brute",
            Algorithm::DivideAndConquer => "dac",
            Algorithm::SortFilter => "sfs",
            Algorithm::Maxima => "maxima",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::BruteForce => "Brute-force",
            Algorithm::DivideAndConquer => "Divide & Conquer",
            Algorithm::SortFilter => "Sort Filter Skyline",
            Algorithm::Maxima => "Maxima Finding",
        }
    }

    /// Complexity notes for display next to benchmark results.
    pub fn description(self) -> &'static str {
        match self {
            Algorithm::BruteForce => {
                "Compares every point with every other point. Simplest approach and fine for \
                 small datasets, but O(n^2) time makes it unsuitable for large ones."
            }
            Algorithm::DivideAndConquer => {
                "Splits the dataset in half, solves each half recursively and merges the \
                 partial skylines. O(n log^2 n) in the typical case, with more overhead than \
                 brute-force on small inputs."
            }
            Algorithm::SortFilter => {
                "Sorts points by the sum of their adjusted attributes so that a point can only \
                 be dominated by an earlier one, then filters against the skyline found so far. \
                 O(n log n) for the sort plus O(n k) for the filter."
            }
            Algorithm::Maxima => {
                "Sort-filter with forward elimination: each admitted point settles the later \
                 points it dominates, so they are skipped without comparison. O(n log n) with \
                 typically fewer comparisons than sort-filter."
            }
        }
    }

    /// Run this algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`SkylineError::MalformedRecord`](crate::SkylineError::MalformedRecord) if any record lacks a
    /// numeric value for a selected attribute.
    pub fn run<'a>(
        self,
        data: &'a [Record],
        selection: &Selection,
    ) -> SkylineResult<Vec<&'a Record>> {
        match self {
            Algorithm::BruteForce => skyline_brute(data, selection),
            Algorithm::DivideAndConquer => skyline_divide_conquer(data, selection),
            Algorithm::SortFilter => skyline_sort_filter(data, selection),
            Algorithm::Maxima => skyline_maxima(data, selection),
        }
    }
}

impl SkylineAlgorithm for Algorithm {
    fn name(&self) -> &str {
        Algorithm::name(*self)
    }

    fn compute<'a>(
        &self,
        data: &'a [Record],
        selection: &Selection,
    ) -> SkylineResult<Vec<&'a Record>> {
        self.run(data, selection)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm '{0}' (expected one of: brute, dac, sfs, maxima)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brute" | "brute-force" | "bruteforce" => Ok(Algorithm::BruteForce),
            "dac" | "divide-and-conquer" | "divide" => Ok(Algorithm::DivideAndConquer),
            "sfs" | "sort-filter" => Ok(Algorithm::SortFilter),
            "maxima" | "maxima-finding" => Ok(Algorithm::Maxima),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Compute a skyline with the chosen algorithm.
///
/// # Errors
///
/// Returns [`SkylineError::MalformedRecord`](crate::SkylineError::MalformedRecord) if any record lacks a numeric
/// value for a selected attribute.
pub fn compute_skyline<'a>(
    algorithm: Algorithm,
    data: &'a [Record],
    selection: &Selection,
) -> SkylineResult<Vec<&'a Record>> {
    algorithm.run(data, selection)
}

/// Shared driver: resolve, short-circuit degenerate inputs, run, map back.
fn run_on_points<'a, F>(
    data: &'a [Record],
    selection: &Selection,
    skyline: F,
) -> SkylineResult<Vec<&'a Record>>
where
    F: FnOnce(&[Point]) -> Vec<Point>,
{
    let points = selection.resolve(data)?;
    if points.len() <= 1 {
        return Ok(data.iter().collect());
    }
    Ok(skyline(&points)
        .iter()
        .map(|p| &data[p.index])
        .collect())
}

/// Orders points by descending score.
///
/// Ties fall back to descending `v1` then `v2`. If `a` dominates `b` then
/// `a` sorts strictly before `b`, even when the float sums round to the
/// same score. The sort is stable.
pub(crate) fn sort_by_score(points: &mut [Point]) {
    points.sort_by(|a, b| {
        b.score()
            .total_cmp(&a.score())
            .then_with(|| b.v1.total_cmp(&a.v1))
            .then_with(|| b.v2.total_cmp(&a.v2))
    });
}
