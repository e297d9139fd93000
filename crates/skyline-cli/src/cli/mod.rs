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

//! CLI command definitions and argument parsing.

use crate::commands::{self, BenchmarkOptions, OutputFormat};
use crate::error::CliError;
use clap::{Args, Subcommand};
use skyline_core::{Algorithm, Selection};

/// Attribute pair shared by `compute` and `benchmark`.
#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// First attribute (x axis)
    #[arg(short = 'x', long, default_value = "performance")]
    pub x: String,

    /// Second attribute (y axis)
    #[arg(short = 'y', long, default_value = "price")]
    pub y: String,

    /// Minimize the first attribute instead of maximizing it
    #[arg(long)]
    pub x_min: bool,

    /// Minimize the second attribute instead of maximizing it
    #[arg(long)]
    pub y_min: bool,
}

impl SelectionArgs {
    /// Validate the flags into a [`Selection`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if both attributes are the same.
    pub fn to_selection(&self) -> Result<Selection, CliError> {
        commands::selection_from_flags(&self.x, self.x_min, &self.y, self.y_min)
    }
}

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Compute the skyline of a JSON dataset
    ///
    /// Loads a JSON array of records, checks that ids are unique, and prints
    /// the records no other record dominates on the two selected attributes.
    Compute {
        /// Input file path (JSON array of records)
        #[arg(value_name = "FILE")]
        file: String,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Algorithm to use (brute, dac, sfs, maxima)
        #[arg(short, long, default_value = "maxima")]
        algorithm: Algorithm,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Generate a synthetic notebook catalogue as JSON
    Generate {
        /// Number of records
        #[arg(short, long, default_value_t = 1_000)]
        count: usize,

        /// Random seed
        #[arg(short, long, default_value_t = 42)]
        seed: u64,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Benchmark all algorithms on one dataset
    ///
    /// Verifies that every algorithm returns the brute-force skyline, then
    /// times each one with warm-up runs and repeated trials and prints a
    /// ranking.
    Benchmark {
        /// Input file path (generates a catalogue when omitted)
        #[arg(value_name = "FILE")]
        file: Option<String>,

        /// Size of the generated catalogue
        #[arg(short, long, default_value_t = 1_000)]
        count: usize,

        /// Seed for the generated catalogue
        #[arg(short, long, default_value_t = 42)]
        seed: u64,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Timed trials per algorithm
        #[arg(long, default_value_t = skyline_bench::core::DEFAULT_TRIALS)]
        trials: usize,

        /// Untimed warm-up runs per algorithm
        #[arg(long, default_value_t = skyline_bench::core::DEFAULT_WARMUP_RUNS)]
        warmup: usize,

        /// Write a JSON report to this path
        #[arg(long, value_name = "PATH")]
        json: Option<String>,

        /// Write a Markdown report to this path
        #[arg(long, value_name = "PATH")]
        markdown: Option<String>,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command fails; see the individual commands.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Compute {
                file,
                selection,
                algorithm,
                format,
                output,
            } => commands::compute(
                &file,
                &selection.to_selection()?,
                algorithm,
                format,
                output.as_deref(),
            ),
            Commands::Generate {
                count,
                seed,
                output,
                pretty,
            } => commands::generate(count, seed, output.as_deref(), pretty),
            Commands::Benchmark {
                file,
                count,
                seed,
                selection,
                trials,
                warmup,
                json,
                markdown,
            } => commands::benchmark(&BenchmarkOptions {
                file,
                count,
                seed,
                selection: selection.to_selection()?,
                warmup,
                trials,
                json,
                markdown,
            }),
        }
    }
}
