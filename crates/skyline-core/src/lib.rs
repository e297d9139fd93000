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

//! Core record model and skyline algorithms.
//!
//! A skyline (Pareto frontier) query picks two numeric attributes and an
//! optimization direction for each, and returns the records no other record
//! dominates. This crate provides:
//!
//! - [`Record`] and [`Value`]: the attribute-carrying entities
//! - [`Selection`]: a validated attribute pair, resolved once per call into
//!   direction-adjusted [`Point`]s
//! - [`dominates`]: the single dominance predicate every algorithm uses
//! - four interchangeable algorithms behind [`Algorithm`] and the
//!   [`SkylineAlgorithm`] trait
//!
//! # Example
//!
//! ```
//! use skyline_core::{compute_skyline, Algorithm, Record, Selection};
//!
//! let laptops = vec![
//!     Record::new(1).with_number("performance", 90.0).with_number("price", 50_000.0),
//!     Record::new(2).with_number("performance", 70.0).with_number("price", 25_000.0),
//!     Record::new(3).with_number("performance", 65.0).with_number("price", 40_000.0),
//! ];
//!
//! // Maximize performance, minimize price.
//! let selection = Selection::new("performance", true, "price", false)?;
//! let skyline = compute_skyline(Algorithm::Maxima, &laptops, &selection)?;
//! assert_eq!(skyline.len(), 2);
//! # Ok::<(), skyline_core::SkylineError>(())
//! ```

pub mod algorithms;
mod dominance;
mod error;
mod record;
mod selection;

pub use algorithms::{
    compute_skyline, skyline_brute, skyline_divide_conquer, skyline_maxima, skyline_sort_filter,
    Algorithm, SkylineAlgorithm, UnknownAlgorithm,
};
pub use dominance::{dominates, dominates_records};
pub use error::{SkylineError, SkylineResult};
pub use record::{ensure_unique_ids, Record, RecordId, Value};
pub use selection::{Direction, Point, Selection};
