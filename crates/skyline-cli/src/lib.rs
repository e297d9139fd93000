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

//! Skyline CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **compute**: Print the skyline of a JSON dataset as a table, JSON or CSV
//! - **generate**: Write a seeded synthetic notebook catalogue
//! - **benchmark**: Verify and time all four algorithms on one dataset
//!
//! # Examples
//!
//! ```no_run
//! use skyline_cli::commands::{compute, OutputFormat};
//! use skyline_core::{Algorithm, Selection};
//!
//! # fn main() -> Result<(), skyline_cli::error::CliError> {
//! let selection = Selection::new("performance", true, "price", false)?;
//! compute("laptops.json", &selection, Algorithm::Maxima, OutputFormat::Table, None)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
