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

//! Record model: an id plus named attribute values.

use crate::error::{SkylineError, SkylineResult};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Identifier of a record, unique within one dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A single attribute value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// Numeric value.
    Number(f64),
    /// Free text (names, labels, or numbers stored as text).
    Text(String),
    /// Explicit null.
    Null,
}

impl Value {
    /// Returns the numeric reading of this value.
    ///
    /// Text that parses as a number is accepted, so catalogues that store
    /// decimals as strings (`"1.35"`) remain usable. NaN and infinities have
    /// no reading.
    pub fn as_number(&self) -> Option<f64> {
        self.parsed().filter(|n| n.is_finite())
    }

    fn parsed(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(s) => s.trim().parse::<f64>().ok(),
            Value::Null => None,
        }
    }

    /// Returns the text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
            Value::Null => write!(f, "~"),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// An immutable entity with an id and named attribute values.
///
/// Records are built once and only read afterwards; no algorithm mutates
/// them. The attribute set is open: the core only needs lookup by name.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// Unique id within the dataset.
    pub id: RecordId,
    /// Attribute values keyed by name.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub values: BTreeMap<String, Value>,
}

impl Record {
    /// Create a record without attributes.
    pub fn new(id: impl Into<RecordId>) -> Self {
        Self {
            id: id.into(),
            values: BTreeMap::new(),
        }
    }

    /// Add an attribute value.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Add a numeric attribute.
    pub fn with_number(self, name: impl Into<String>, value: f64) -> Self {
        self.with(name, Value::Number(value))
    }

    /// Add a text attribute.
    pub fn with_text(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(name, Value::Text(value.into()))
    }

    /// Look up an attribute by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Read an attribute as a number.
    ///
    /// # Errors
    ///
    /// Returns [`SkylineError::MalformedRecord`] if the attribute is absent,
    /// null, not numeric, or not finite.
    pub fn number(&self, name: &str) -> SkylineResult<f64> {
        let value = match self.values.get(name) {
            None => return Err(SkylineError::malformed(self.id, name, "is missing")),
            Some(Value::Null) => return Err(SkylineError::malformed(self.id, name, "is null")),
            Some(value) => value,
        };
        match value.parsed() {
            Some(n) if n.is_finite() => Ok(n),
            Some(_) => Err(SkylineError::malformed(
                self.id,
                name,
                format!("is not finite: '{}'", value),
            )),
            None => Err(SkylineError::malformed(
                self.id,
                name,
                format!("is not numeric: '{}'", value),
            )),
        }
    }

    /// Iterate attribute names in sorted order.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// Checks that no two records share an id.
///
/// # Errors
///
/// Returns [`SkylineError::DuplicateId`] for the first repeated id.
pub fn ensure_unique_ids(records: &[Record]) -> SkylineResult<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id) {
            return Err(SkylineError::DuplicateId { id: record.id });
        }
    }
    Ok(())
}
