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

//! Error types for skyline computation.

use crate::record::RecordId;
use thiserror::Error;

/// An error raised before or during a skyline computation.
///
/// Every variant is a contract violation by the caller or the dataset
/// supplier. Computation itself is pure, so nothing here is retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkylineError {
    /// Both attributes of a selection name the same field.
    #[error("invalid selection: attribute '{attribute}' selected twice, choose two distinct attributes")]
    InvalidSelection {
        /// The duplicated attribute name.
        attribute: String,
    },

    /// A record is missing a selected attribute or holds a non-numeric value for it.
    #[error("malformed record {id}: attribute '{attribute}' {reason}")]
    MalformedRecord {
        /// Id of the offending record.
        id: RecordId,
        /// The attribute that could not be read.
        attribute: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Two records of one dataset share an id.
    #[error("duplicate record id {id}")]
    DuplicateId {
        /// The repeated id.
        id: RecordId,
    },
}

impl SkylineError {
    /// Create an invalid selection error.
    pub fn invalid_selection(attribute: impl Into<String>) -> Self {
        Self::InvalidSelection {
            attribute: attribute.into(),
        }
    }

    /// Create a malformed record error.
    pub fn malformed(id: RecordId, attribute: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            id,
            attribute: attribute.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for skyline operations.
pub type SkylineResult<T> = Result<T, SkylineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_selection_display() {
        let err = SkylineError::invalid_selection("price");
        let msg = err.to_string();
        assert!(msg.contains("price"));
        assert!(msg.contains("distinct"));
    }

    #[test]
    fn test_malformed_display() {
        let err = SkylineError::malformed(RecordId(7), "weight", "is missing");
        assert_eq!(err.to_string(), "malformed record 7: attribute 'weight' is missing");
    }

    #[test]
    fn test_duplicate_id_display() {
        let err = SkylineError::DuplicateId { id: RecordId(3) };
        assert_eq!(err.to_string(), "duplicate record id 3");
    }
}
