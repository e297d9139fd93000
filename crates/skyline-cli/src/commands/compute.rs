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

//! Compute command - prints the skyline of a dataset

use super::{load_records, write_output};
use crate::error::CliError;
use clap::ValueEnum;
use skyline_core::{compute_skyline, Algorithm, Record, Selection, Value};
use std::collections::BTreeSet;
use tracing::info;

/// Output format for skyline results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table with the selected attributes.
    Table,
    /// JSON array of full records.
    Json,
    /// CSV with every attribute as a column.
    Csv,
}

/// Compute and print the skyline of a JSON dataset.
///
/// # Arguments
///
/// * `file` - Path to a JSON array of records
/// * `selection` - Attribute pair and directions
/// * `algorithm` - Algorithm to run
/// * `format` - Output format
/// * `output` - Output path (stdout if `None`)
///
/// # Errors
///
/// Returns `Err` if the file cannot be loaded, ids repeat, or any record
/// lacks a numeric value for a selected attribute.
pub fn compute(
    file: &str,
    selection: &Selection,
    algorithm: Algorithm,
    format: OutputFormat,
    output: Option<&str>,
) -> Result<(), CliError> {
    let records = load_records(file)?;
    let skyline = compute_skyline(algorithm, &records, selection)?;

    info!(
        target: "skyline::cli",
        algorithm = algorithm.name(),
        records = records.len(),
        skyline = skyline.len(),
        "skyline computed"
    );

    let rendered = render_skyline(&skyline, selection, format)?;
    write_output(&rendered, output)
}

/// Render skyline records in the requested format.
///
/// # Errors
///
/// Returns `Err` if JSON or CSV serialization fails.
pub fn render_skyline(
    skyline: &[&Record],
    selection: &Selection,
    format: OutputFormat,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Table => Ok(render_table(skyline, selection)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(skyline)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Csv => render_csv(skyline),
    }
}

fn cell(record: &Record, attribute: &str) -> String {
    match record.get(attribute) {
        Some(Value::Null) | None => String::new(),
        Some(value) => value.to_string(),
    }
}

fn render_table(skyline: &[&Record], selection: &Selection) -> String {
    let with_name = skyline.iter().any(|r| r.get("name").is_some());
    let mut header = vec![
        "id".to_string(),
        selection.attr1().to_string(),
        selection.attr2().to_string(),
    ];
    if with_name {
        header.push("name".to_string());
    }

    let rows: Vec<Vec<String>> = skyline
        .iter()
        .map(|record| {
            let mut row = vec![
                record.id.to_string(),
                cell(record, selection.attr1()),
                cell(record, selection.attr2()),
            ];
            if with_name {
                row.push(cell(record, "name"));
            }
            row
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            rows.iter()
                .map(|row| row[col].len())
                .chain(std::iter::once(header[col].len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: &[String]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let mut out = String::new();
    out.push_str(&line(&header));
    out.push('\n');
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));
    out.push('\n');
    for row in &rows {
        out.push_str(&line(row));
        out.push('\n');
    }
    out.push_str(&format!("\n{} records on the skyline ({})\n", skyline.len(), selection));
    out
}

fn render_csv(skyline: &[&Record]) -> Result<String, CliError> {
    let columns: BTreeSet<&str> = skyline.iter().flat_map(|r| r.attribute_names()).collect();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(std::iter::once("id").chain(columns.iter().copied()))?;
    for record in skyline {
        let mut row = vec![record.id.to_string()];
        row.extend(columns.iter().map(|c| cell(record, c)));
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CliError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CliError::Csv(e.to_string()))
}
