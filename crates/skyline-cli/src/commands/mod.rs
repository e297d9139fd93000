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

//! CLI command implementations

mod benchmark;
mod compute;
mod generate;

pub use benchmark::{benchmark, BenchmarkOptions};
pub use compute::{compute, render_skyline, OutputFormat};
pub use generate::generate;

use crate::error::CliError;
use skyline_core::{ensure_unique_ids, Record, Selection};
use std::fs;
use std::io::{self, Write};
use tracing::debug;

/// Default maximum input file size (1 GB).
/// Can be overridden via the SKYLINE_MAX_FILE_SIZE environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

fn max_file_size() -> u64 {
    std::env::var("SKYLINE_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk, rejecting files above the size limit before
/// reading them.
///
/// # Errors
///
/// Returns [`CliError::Io`] if the file cannot be read and
/// [`CliError::FileTooLarge`] if it exceeds the limit.
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;
    let max = max_file_size();
    if metadata.len() > max {
        return Err(CliError::file_too_large(path, metadata.len(), max));
    }
    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Parse a JSON array of records and check that ids are unique.
///
/// # Errors
///
/// Returns [`CliError::JsonFormat`] for malformed JSON and
/// [`CliError::Skyline`] for duplicate ids.
pub fn parse_records(json: &str) -> Result<Vec<Record>, CliError> {
    let records: Vec<Record> = serde_json::from_str(json)?;
    ensure_unique_ids(&records)?;
    Ok(records)
}

/// Load a dataset file.
///
/// # Errors
///
/// See [`read_file`] and [`parse_records`].
pub fn load_records(path: &str) -> Result<Vec<Record>, CliError> {
    let records = parse_records(&read_file(path)?)?;
    debug!(target: "skyline::cli", path = path, records = records.len(), "dataset loaded");
    Ok(records)
}

/// Build a selection from CLI flags. Attributes are maximized unless the
/// matching `min` flag is set.
///
/// # Errors
///
/// Returns [`CliError::Skyline`] if both attributes are the same.
pub fn selection_from_flags(x: &str, x_min: bool, y: &str, y_min: bool) -> Result<Selection, CliError> {
    Ok(Selection::new(x, !x_min, y, !y_min)?)
}

/// Write output to a file or stdout.
///
/// # Errors
///
/// Returns [`CliError::Io`] if writing fails.
pub fn write_output(content: &str, output: Option<&str>) -> Result<(), CliError> {
    match output {
        Some(path) => fs::write(path, content).map_err(|e| CliError::io_error(path, e)),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| CliError::io_error("<stdout>", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyline_core::SkylineError;

    #[test]
    fn test_parse_records() {
        let records = parse_records(r#"[{"id": 1, "price": 10}, {"id": 2, "price": "12.5"}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].number("price"), Ok(12.5));
    }

    #[test]
    fn test_parse_records_rejects_duplicates() {
        let err = parse_records(r#"[{"id": 1}, {"id": 1}]"#).unwrap_err();
        assert!(matches!(err, CliError::Skyline(SkylineError::DuplicateId { .. })));
    }

    #[test]
    fn test_parse_records_rejects_non_array() {
        assert!(matches!(
            parse_records(r#"{"id": 1}"#),
            Err(CliError::JsonFormat { .. })
        ));
    }

    #[test]
    fn test_selection_from_flags() {
        let sel = selection_from_flags("performance", false, "price", true).unwrap();
        assert_eq!(sel.to_string(), "performance (max) x price (min)");
        assert!(selection_from_flags("price", false, "price", true).is_err());
    }

    #[test]
    fn test_read_missing_file() {
        assert!(matches!(
            read_file("/nonexistent/skyline.json"),
            Err(CliError::Io { .. })
        ));
    }
}
