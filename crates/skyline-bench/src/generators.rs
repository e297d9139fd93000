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

//! Synthetic datasets for benchmarks and tests.
//!
//! The main generator produces a notebook catalogue: a name, a performance
//! score, weight, price and battery life per record. Two degenerate shapes
//! cover the extremes of skyline size.

use crate::error::{validate_dataset_size, BenchResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use skyline_core::Record;

/// Display name attribute.
pub const NAME: &str = "name";
/// Performance score, 60 to 99.
pub const PERFORMANCE: &str = "performance";
/// Weight in kilograms, 1.00 to 2.50, stored as two-decimal text.
pub const WEIGHT: &str = "weight";
/// Price, 20,000 to 99,999.
pub const PRICE: &str = "price";
/// Battery life in hours, 5 to 19.
pub const BATTERY_LIFE: &str = "battery_life";

/// The numeric attributes a selection can choose from.
pub const ATTRIBUTES: [&str; 4] = [PERFORMANCE, WEIGHT, PRICE, BATTERY_LIFE];

const BRANDS: [&str; 15] = [
    "Lenovo", "Dell", "HP", "Apple", "Asus", "Acer", "MSI", "Samsung", "Microsoft", "Huawei",
    "LG", "Gigabyte", "Razer", "Toshiba", "Sony",
];

/// Generates a notebook catalogue with ids `1..=count`.
///
/// The same seed always yields the same dataset.
///
/// # Errors
///
/// Returns [`BenchError::DatasetTooLarge`](crate::BenchError::DatasetTooLarge)
/// if `count` exceeds [`MAX_DATASET_SIZE`](crate::MAX_DATASET_SIZE).
///
/// # Example
///
/// ```
/// use skyline_bench::generators::{generate_notebooks, PRICE};
///
/// let notebooks = generate_notebooks(3, 42).unwrap();
/// assert_eq!(notebooks.len(), 3);
/// assert!(notebooks[0].number(PRICE).unwrap() >= 20_000.0);
/// ```
pub fn generate_notebooks(count: usize, seed: u64) -> BenchResult<Vec<Record>> {
    validate_dataset_size(count)?;
    let mut rng = StdRng::seed_from_u64(seed);

    let notebooks = (1..=count as u64)
        .map(|id| {
            let brand = BRANDS[rng.gen_range(0..BRANDS.len())];
            Record::new(id)
                .with_text(NAME, format!("{} Model {}", brand, id))
                .with_number(PERFORMANCE, f64::from(rng.gen_range(60_u32..100)))
                .with_text(WEIGHT, format!("{:.2}", rng.gen_range(1.0_f64..=2.5)))
                .with_number(PRICE, f64::from(rng.gen_range(20_000_u32..100_000)))
                .with_number(BATTERY_LIFE, f64::from(rng.gen_range(5_u32..20)))
        })
        .collect();

    Ok(notebooks)
}

/// Generates `count` records with identical attribute values.
///
/// Nothing dominates anything, so every record is in the skyline and every
/// algorithm hits its worst case for comparisons.
///
/// # Errors
///
/// Returns [`BenchError::DatasetTooLarge`](crate::BenchError::DatasetTooLarge)
/// for oversized requests.
pub fn generate_identical(count: usize) -> BenchResult<Vec<Record>> {
    validate_dataset_size(count)?;
    Ok((1..=count as u64)
        .map(|id| {
            Record::new(id)
                .with_text(NAME, format!("Clone {}", id))
                .with_number(PERFORMANCE, 80.0)
                .with_text(WEIGHT, "1.50")
                .with_number(PRICE, 50_000.0)
                .with_number(BATTERY_LIFE, 10.0)
        })
        .collect())
}

/// Generates records where higher performance always costs more.
///
/// Under "maximize performance, minimize price" the whole dataset is the
/// skyline. Performance values are distinct and price rises strictly with
/// them; the input order is shuffled by `seed`.
///
/// # Errors
///
/// Returns [`BenchError::DatasetTooLarge`](crate::BenchError::DatasetTooLarge)
/// for oversized requests.
pub fn generate_anticorrelated(count: usize, seed: u64) -> BenchResult<Vec<Record>> {
    validate_dataset_size(count)?;
    let mut rng = StdRng::seed_from_u64(seed);

    let mut records: Vec<Record> = (1..=count as u64)
        .map(|id| {
            let step = id as f64;
            Record::new(id)
                .with_text(NAME, format!("Tier {}", id))
                .with_number(PERFORMANCE, step)
                .with_text(WEIGHT, "1.50")
                .with_number(PRICE, 1_000.0 + step * 10.0)
                .with_number(BATTERY_LIFE, 10.0)
        })
        .collect();

    // Fisher-Yates so the input is not already in score order.
    for i in (1..records.len()).rev() {
        let j = rng.gen_range(0..=i);
        records.swap(i, j);
    }
    Ok(records)
}
