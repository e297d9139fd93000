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

//! Attribute selection and point resolution.
//!
//! A [`Selection`] names the two attributes a skyline query compares and the
//! optimization direction of each. Resolving a selection against a dataset
//! reads both attributes of every record exactly once and sign-adjusts them,
//! so the algorithms only ever compare plain `f64` pairs where larger is
//! better.

use crate::error::{SkylineError, SkylineResult};
use crate::record::Record;
use std::fmt;

/// Optimization direction of one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Higher is better.
    Maximize,
    /// Lower is better.
    Minimize,
}

impl Direction {
    /// Direction from the boolean flag form (`true` = maximize).
    pub fn from_flag(maximize: bool) -> Self {
        if maximize {
            Direction::Maximize
        } else {
            Direction::Minimize
        }
    }

    /// The boolean flag form of this direction.
    pub fn is_maximize(self) -> bool {
        self == Direction::Maximize
    }

    /// Sign-adjust a raw value so that larger is always better.
    #[inline]
    pub fn adjust(self, value: f64) -> f64 {
        // `+ 0.0` folds -0.0 into 0.0 so ordering and equality agree.
        match self {
            Direction::Maximize => value + 0.0,
            Direction::Minimize => -value + 0.0,
        }
    }

    /// Short label used in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Maximize => "max",
            Direction::Minimize => "min",
        }
    }
}

/// A validated pair of distinct attributes with their directions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Selection {
    attr1: String,
    dir1: Direction,
    attr2: String,
    dir2: Direction,
}

impl Selection {
    /// Create a selection from attribute names and direction flags.
    ///
    /// `asc` flags follow the convention `true` = higher is better.
    ///
    /// # Errors
    ///
    /// Returns [`SkylineError::InvalidSelection`] when both attributes are the same.
    pub fn new(
        attr1: impl Into<String>,
        asc1: bool,
        attr2: impl Into<String>,
        asc2: bool,
    ) -> SkylineResult<Self> {
        Self::with_directions(
            attr1,
            Direction::from_flag(asc1),
            attr2,
            Direction::from_flag(asc2),
        )
    }

    /// Create a selection from attribute names and [`Direction`]s.
    ///
    /// # Errors
    ///
    /// Returns [`SkylineError::InvalidSelection`] when both attributes are the same.
    pub fn with_directions(
        attr1: impl Into<String>,
        dir1: Direction,
        attr2: impl Into<String>,
        dir2: Direction,
    ) -> SkylineResult<Self> {
        let attr1 = attr1.into();
        let attr2 = attr2.into();
        if attr1 == attr2 {
            return Err(SkylineError::invalid_selection(attr1));
        }
        Ok(Self {
            attr1,
            dir1,
            attr2,
            dir2,
        })
    }

    /// First attribute name.
    pub fn attr1(&self) -> &str {
        &self.attr1
    }

    /// Second attribute name.
    pub fn attr2(&self) -> &str {
        &self.attr2
    }

    /// Direction of the first attribute.
    pub fn dir1(&self) -> Direction {
        self.dir1
    }

    /// Direction of the second attribute.
    pub fn dir2(&self) -> Direction {
        self.dir2
    }

    /// Resolve one record into a direction-adjusted point.
    ///
    /// # Errors
    ///
    /// Returns [`SkylineError::MalformedRecord`] if either attribute is
    /// missing or non-numeric.
    pub fn point(&self, index: usize, record: &Record) -> SkylineResult<Point> {
        Ok(Point {
            index,
            v1: self.dir1.adjust(record.number(&self.attr1)?),
            v2: self.dir2.adjust(record.number(&self.attr2)?),
        })
    }

    /// Resolve a whole dataset into points, in input order.
    ///
    /// Fails on the first malformed record; no partial result is produced.
    ///
    /// # Errors
    ///
    /// Returns [`SkylineError::MalformedRecord`] for the first record that
    /// lacks a numeric value for either attribute.
    pub fn resolve(&self, data: &[Record]) -> SkylineResult<Vec<Point>> {
        data.iter()
            .enumerate()
            .map(|(index, record)| self.point(index, record))
            .collect()
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) x {} ({})",
            self.attr1,
            self.dir1.as_str(),
            self.attr2,
            self.dir2.as_str()
        )
    }
}

/// A record reduced to its two direction-adjusted values.
///
/// `index` is the record's position in the resolved dataset and is the
/// identity used by the dominance check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Position of the source record in the dataset.
    pub index: usize,
    /// Adjusted value of the first attribute.
    pub v1: f64,
    /// Adjusted value of the second attribute.
    pub v2: f64,
}

impl Point {
    /// Heuristic score: sum of the adjusted values.
    #[inline]
    pub fn score(&self) -> f64 {
        self.v1 + self.v2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordId;

    fn laptop(id: u64, perf: f64, price: f64) -> Record {
        Record::new(id)
            .with_number("performance", perf)
            .with_number("price", price)
    }

    #[test]
    fn test_same_attribute_rejected() {
        let err = Selection::new("price", true, "price", false).unwrap_err();
        assert_eq!(err, SkylineError::invalid_selection("price"));
    }

    #[test]
    fn test_direction_adjust() {
        assert_eq!(Direction::Maximize.adjust(3.0), 3.0);
        assert_eq!(Direction::Minimize.adjust(3.0), -3.0);
        let zero = Direction::Minimize.adjust(0.0);
        assert!(zero.is_sign_positive());
        assert!(Direction::from_flag(true).is_maximize());
        assert!(!Direction::from_flag(false).is_maximize());
    }

    #[test]
    fn test_resolve_points() {
        let sel = Selection::new("performance", true, "price", false).unwrap();
        let data = vec![laptop(1, 80.0, 30_000.0), laptop(2, 70.0, 20_000.0)];
        let points = sel.resolve(&data).unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0], Point { index: 0, v1: 80.0, v2: -30_000.0 });
        assert_eq!(points[1].index, 1);
        assert_eq!(points[1].score(), 70.0 - 20_000.0);
    }

    #[test]
    fn test_resolve_fails_on_malformed() {
        let sel = Selection::new("performance", true, "price", false).unwrap();
        let data = vec![
            laptop(1, 80.0, 30_000.0),
            Record::new(2).with_number("performance", 90.0),
        ];
        let err = sel.resolve(&data).unwrap_err();
        assert!(matches!(
            err,
            SkylineError::MalformedRecord { id: RecordId(2), .. }
        ));
    }

    #[test]
    fn test_display() {
        let sel = Selection::new("performance", true, "price", false).unwrap();
        assert_eq!(sel.to_string(), "performance (max) x price (min)");
        assert_eq!(sel.attr1(), "performance");
        assert_eq!(sel.dir2(), Direction::Minimize);
    }
}
