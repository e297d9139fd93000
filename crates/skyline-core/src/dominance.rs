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

//! The dominance relation shared by every skyline algorithm.
//!
//! `a` dominates `b` when, after direction adjustment, `a` is at least as
//! good as `b` in both attributes and strictly better in at least one.
//! Records equal in both attributes never dominate each other, and no
//! record dominates itself.

use crate::error::SkylineResult;
use crate::record::Record;
use crate::selection::{Point, Selection};

/// Returns true if `a` dominates `b`.
///
/// Identity is the point's dataset index, so two distinct records that
/// happen to share an id are still compared.
#[inline]
pub fn dominates(a: &Point, b: &Point) -> bool {
    if a.index == b.index {
        return false;
    }
    (a.v1 >= b.v1 && a.v2 > b.v2) || (a.v1 > b.v1 && a.v2 >= b.v2)
}

/// Record-level dominance check under a selection.
///
/// Returns `false` when `a` and `b` are the same record, either the same
/// object or the same id.
///
/// # Errors
///
/// Returns [`SkylineError::MalformedRecord`](crate::SkylineError::MalformedRecord)
/// if either record lacks a numeric value for a selected attribute.
pub fn dominates_records(a: &Record, b: &Record, selection: &Selection) -> SkylineResult<bool> {
    if std::ptr::eq(a, b) || a.id == b.id {
        return Ok(false);
    }
    let pa = selection.point(0, a)?;
    let pb = selection.point(1, b)?;
    Ok(dominates(&pa, &pb))
}

/// Returns true if any point in `candidates` dominates `point`.
#[inline]
pub(crate) fn dominated_by_any(point: &Point, candidates: &[Point]) -> bool {
    candidates.iter().any(|c| dominates(c, point))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(index: usize, v1: f64, v2: f64) -> Point {
        Point { index, v1, v2 }
    }

    #[test]
    fn test_strictly_better_in_one() {
        assert!(dominates(&p(0, 5.0, 5.0), &p(1, 5.0, 4.0)));
        assert!(dominates(&p(0, 6.0, 5.0), &p(1, 5.0, 5.0)));
        assert!(dominates(&p(0, 6.0, 6.0), &p(1, 5.0, 5.0)));
    }

    #[test]
    fn test_ties_do_not_dominate() {
        assert!(!dominates(&p(0, 5.0, 5.0), &p(1, 5.0, 5.0)));
        assert!(!dominates(&p(1, 5.0, 5.0), &p(0, 5.0, 5.0)));
    }

    #[test]
    fn test_incomparable() {
        assert!(!dominates(&p(0, 6.0, 4.0), &p(1, 5.0, 5.0)));
        assert!(!dominates(&p(1, 5.0, 5.0), &p(0, 6.0, 4.0)));
    }

    #[test]
    fn test_irreflexive_by_index() {
        let a = p(3, 9.0, 9.0);
        assert!(!dominates(&a, &a));
        // Same index with different values is still "the same record".
        assert!(!dominates(&p(3, 9.0, 9.0), &p(3, 1.0, 1.0)));
    }

    #[test]
    fn test_dominates_records_with_directions() {
        let sel = Selection::new("x", true, "y", false).unwrap();
        let a = Record::new(1).with_number("x", 10.0).with_number("y", 5.0);
        let b = Record::new(2).with_number("x", 8.0).with_number("y", 3.0);
        let c = Record::new(3).with_number("x", 6.0).with_number("y", 8.0);

        assert_eq!(dominates_records(&b, &c, &sel), Ok(true));
        assert_eq!(dominates_records(&a, &c, &sel), Ok(true));
        assert_eq!(dominates_records(&a, &b, &sel), Ok(false));
        assert_eq!(dominates_records(&b, &a, &sel), Ok(false));
        assert_eq!(dominates_records(&a, &a, &sel), Ok(false));
    }

    #[test]
    fn test_dominates_records_same_id() {
        let sel = Selection::new("x", true, "y", true).unwrap();
        let a = Record::new(1).with_number("x", 10.0).with_number("y", 10.0);
        let b = Record::new(1).with_number("x", 1.0).with_number("y", 1.0);
        assert_eq!(dominates_records(&a, &b, &sel), Ok(false));
    }

    #[test]
    fn test_dominated_by_any() {
        let skyline = vec![p(0, 10.0, 1.0), p(1, 1.0, 10.0)];
        assert!(dominated_by_any(&p(2, 0.5, 9.0), &skyline));
        assert!(!dominated_by_any(&p(2, 5.0, 5.0), &skyline));
        assert!(!dominated_by_any(&p(2, 5.0, 5.0), &[]));
    }
}
