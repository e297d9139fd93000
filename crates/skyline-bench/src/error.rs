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

//! Error types for benchmarking operations.

use skyline_core::SkylineError;
use thiserror::Error;

/// Maximum dataset size accepted by the generators (10 million records).
///
/// Keeps a mistyped `--count` from exhausting memory.
pub const MAX_DATASET_SIZE: usize = 10_000_000;

/// Result type for benchmarking operations.
pub type BenchResult<T> = std::result::Result<T, BenchError>;

/// Errors that can occur during benchmarking operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BenchError {
    /// Invalid configuration parameter.
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name.
        parameter: String,
        /// Reason for invalidity.
        reason: String,
    },

    /// Dataset size exceeds the maximum allowed limit.
    #[error("Dataset size {requested} exceeds maximum allowed limit of {max}")]
    DatasetTooLarge {
        /// Requested size.
        requested: usize,
        /// Maximum allowed size.
        max: usize,
    },

    /// Statistics were requested over zero samples.
    #[error("No samples to compute statistics from")]
    NoSamples,

    /// An algorithm failed while being measured.
    #[error("Algorithm '{algorithm}' failed: {source}")]
    Algorithm {
        /// Name of the failing algorithm.
        algorithm: String,
        /// Underlying core error.
        #[source]
        source: SkylineError,
    },

    /// An algorithm returned a different skyline than brute-force.
    #[error(
        "Algorithm '{algorithm}' disagrees with brute-force: expected {} records, got {}",
        expected.len(),
        actual.len()
    )]
    Disagreement {
        /// Name of the disagreeing algorithm.
        algorithm: String,
        /// Sorted ids of the brute-force skyline.
        expected: Vec<u64>,
        /// Sorted ids returned by the algorithm.
        actual: Vec<u64>,
    },

    /// I/O error while writing a report.
    #[error("I/O error: {0}")]
    Io(String),

    /// Report serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl BenchError {
    /// Creates an invalid configuration error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        BenchError::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for BenchError {
    fn from(err: std::io::Error) -> Self {
        BenchError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BenchError {
    fn from(err: serde_json::Error) -> Self {
        BenchError::Serialization(err.to_string())
    }
}

/// Validate that a dataset size is within acceptable limits.
///
/// # Arguments
///
/// * `size` - The requested dataset size
///
/// # Returns
///
/// `Ok(())` if the size is valid, or a [`BenchError::DatasetTooLarge`] error
///
/// # Examples
///
/// ```
/// use skyline_bench::error::{validate_dataset_size, MAX_DATASET_SIZE};
///
/// assert!(validate_dataset_size(1000).is_ok());
/// assert!(validate_dataset_size(MAX_DATASET_SIZE + 1).is_err());
/// ```
#[inline]
pub fn validate_dataset_size(size: usize) -> BenchResult<()> {
    if size > MAX_DATASET_SIZE {
        Err(BenchError::DatasetTooLarge {
            requested: size,
            max: MAX_DATASET_SIZE,
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyline_core::RecordId;
    use std::error::Error as _;

    #[test]
    fn test_validate_dataset_size() {
        assert!(validate_dataset_size(0).is_ok());
        assert!(validate_dataset_size(MAX_DATASET_SIZE).is_ok());
        assert_eq!(
            validate_dataset_size(MAX_DATASET_SIZE + 1),
            Err(BenchError::DatasetTooLarge {
                requested: MAX_DATASET_SIZE + 1,
                max: MAX_DATASET_SIZE,
            })
        );
    }

    #[test]
    fn test_algorithm_error_keeps_source() {
        let err = BenchError::Algorithm {
            algorithm: "sfs".to_string(),
            source: SkylineError::malformed(RecordId(9), "price", "is missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("sfs"));
        assert!(msg.contains("price"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_disagreement_display() {
        let err = BenchError::Disagreement {
            algorithm: "dac".to_string(),
            expected: vec![1, 2, 3],
            actual: vec![1, 2],
        };
        assert_eq!(
            err.to_string(),
            "Algorithm 'dac' disagrees with brute-force: expected 3 records, got 2"
        );
    }

    #[test]
    fn test_invalid_config_display() {
        let err = BenchError::invalid_config("trials", "must be at least 1");
        let msg = err.to_string();
        assert!(msg.contains("trials"));
        assert!(msg.contains("must be at least 1"));
    }
}
