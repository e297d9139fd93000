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

//! Harness configuration.
//!
//! Controls the warm-up and trial protocol used when timing skyline
//! algorithms.

use crate::error::{BenchError, BenchResult};

/// Dataset sizes used by the benchmark suite and the CLI defaults.
pub const STANDARD_SIZES: &[usize] = &[100, 500, 1_000, 5_000, 10_000];

/// Default number of discarded warm-up runs.
pub const DEFAULT_WARMUP_RUNS: usize = 3;

/// Default number of timed trials.
pub const DEFAULT_TRIALS: usize = 5;

/// Inner repeats per trial for datasets under 100 records.
pub const REPEATS_TINY: usize = 100;

/// Inner repeats per trial for datasets under 1,000 records.
pub const REPEATS_SMALL: usize = 10;

/// Harness configuration.
///
/// Small inputs finish faster than the timer resolution, so each trial runs
/// the algorithm several times back to back and divides the elapsed time by
/// the repeat count.
///
/// # Example
///
/// ```
/// use skyline_bench::core::config::BenchConfig;
///
/// let config = BenchConfig::default().with_trials(10).with_warmup_runs(1);
/// assert_eq!(config.repeats_for_size(50), 100);
/// assert_eq!(config.repeats_for_size(5_000), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Untimed runs before measurement starts.
    pub warmup_runs: usize,
    /// Timed trials per algorithm.
    pub trials: usize,
    /// Fixed repeat count overriding the size-based scale.
    pub repeats: Option<usize>,
}

impl BenchConfig {
    /// Creates a configuration with the given warm-up and trial counts.
    pub fn new(warmup_runs: usize, trials: usize) -> Self {
        Self {
            warmup_runs,
            trials,
            repeats: None,
        }
    }

    /// Sets the warm-up run count.
    pub fn with_warmup_runs(mut self, warmup_runs: usize) -> Self {
        self.warmup_runs = warmup_runs;
        self
    }

    /// Sets the trial count.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Forces a fixed repeat count for every dataset size.
    pub fn with_repeats(mut self, repeats: usize) -> Self {
        self.repeats = Some(repeats);
        self
    }

    /// Returns how many back-to-back calls one trial makes for `size` records.
    pub fn repeats_for_size(&self, size: usize) -> usize {
        if let Some(repeats) = self.repeats {
            return repeats;
        }
        match size {
            s if s < 100 => REPEATS_TINY,
            s if s < 1_000 => REPEATS_SMALL,
            _ => 1,
        }
    }

    /// Checks that the configuration can produce at least one sample.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidConfig`] if `trials` is zero or a forced
    /// repeat count is zero.
    pub fn validate(&self) -> BenchResult<()> {
        if self.trials == 0 {
            return Err(BenchError::invalid_config("trials", "must be at least 1"));
        }
        if self.repeats == Some(0) {
            return Err(BenchError::invalid_config("repeats", "must be at least 1"));
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WARMUP_RUNS, DEFAULT_TRIALS)
    }
}
