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

//! Generate command - writes a synthetic notebook catalogue

use super::write_output;
use crate::error::CliError;
use skyline_bench::generate_notebooks;
use tracing::info;

/// Generate `count` notebook records and write them as a JSON array.
///
/// # Errors
///
/// Returns `Err` if `count` exceeds the dataset limit or the output cannot
/// be written.
pub fn generate(count: usize, seed: u64, output: Option<&str>, pretty: bool) -> Result<(), CliError> {
    let records = generate_notebooks(count, seed)?;
    let mut json = if pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };
    json.push('\n');

    info!(target: "skyline::cli", count = count, seed = seed, "dataset generated");
    write_output(&json, output)
}
