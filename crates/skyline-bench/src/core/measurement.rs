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

//! Timing primitives and sample statistics.
//!
//! All durations are reported in milliseconds as `f64`, so sub-millisecond
//! runs on small datasets keep their precision.

use crate::error::{BenchError, BenchResult};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Summary of timing samples, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Fastest sample.
    pub min: f64,
    /// Slowest sample.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median; the average of the two middle samples for even counts.
    pub median: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Number of samples.
    pub iterations: usize,
    /// Raw samples in the order they were taken.
    pub samples: Vec<f64>,
}

impl Statistics {
    /// Computes statistics from timing samples.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::NoSamples`] if `samples` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use skyline_bench::core::measurement::Statistics;
    ///
    /// let stats = Statistics::from_samples(vec![4.0, 1.0, 3.0, 2.0]).unwrap();
    /// assert_eq!(stats.median, 2.5);
    /// assert_eq!(stats.mean, 2.5);
    /// ```
    pub fn from_samples(samples: Vec<f64>) -> BenchResult<Self> {
        if samples.is_empty() {
            return Err(BenchError::NoSamples);
        }

        let mut sorted = samples.clone();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let mean = sorted.iter().sum::<f64>() / count as f64;
        let median = if count % 2 == 0 {
            (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
        } else {
            sorted[count / 2]
        };
        let variance = sorted
            .iter()
            .map(|s| {
                let diff = s - mean;
                diff * diff
            })
            .sum::<f64>()
            / count as f64;

        Ok(Self {
            min: sorted[0],
            max: sorted[count - 1],
            mean,
            median,
            std_dev: variance.sqrt(),
            iterations: count,
            samples,
        })
    }

    /// Operations per second derived from the mean (`1000 / mean`).
    ///
    /// Zero when the mean is zero.
    pub fn hz(&self) -> f64 {
        if self.mean > 0.0 {
            1000.0 / self.mean
        } else {
            0.0
        }
    }

    /// Relative margin of error in percent (`std_dev / mean * 100`).
    ///
    /// Zero when the mean is zero.
    pub fn rme(&self) -> f64 {
        if self.mean > 0.0 {
            self.std_dev / self.mean * 100.0
        } else {
            0.0
        }
    }
}

/// Runs `f` `repeats` times back to back and returns the last result with the
/// mean per-call time in milliseconds.
///
/// At least one call is always made. The first error aborts the trial.
///
/// # Arguments
///
/// * `repeats` - Number of back-to-back calls
/// * `f` - The operation to time
///
/// # Errors
///
/// Propagates the first error returned by `f`.
pub fn time_repeated<T, E, F>(repeats: usize, mut f: F) -> Result<(T, f64), E>
where
    F: FnMut() -> Result<T, E>,
{
    let calls = repeats.max(1);
    let start = Instant::now();
    let mut last = f()?;
    for _ in 1..calls {
        last = f()?;
    }
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    Ok((last, elapsed_ms / calls as f64))
}
