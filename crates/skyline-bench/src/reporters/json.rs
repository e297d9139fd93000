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

//! JSON export for comparison reports.

use crate::error::BenchResult;
use crate::reporters::types::ComparisonReport;
use std::fs;
use std::path::Path;

/// Exports a comparison report as pretty-printed JSON.
///
/// # Arguments
///
/// * `report` - The report to export
/// * `path` - Output file path
///
/// # Errors
///
/// Returns [`BenchError::Serialization`](crate::BenchError::Serialization)
/// or [`BenchError::Io`](crate::BenchError::Io).
pub fn export_json(report: &ComparisonReport, path: &Path) -> BenchResult<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}
