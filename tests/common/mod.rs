//! Shared test fixtures

use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Small FAOSTAT-shaped dataset with known characteristics:
///
/// - India: Wheat 1000 t over 100 ha in 2023 (yield 10.0), plus Rice and
///   Maize production rows for the portfolio chart
/// - France: Wheat 800 t over 160 ha (yield 5.0)
/// - Atlantis: Wheat production but zero harvested area (must be excluded)
/// - Narnia: valid yield but no ISO3 code (must be absent from the map)
/// - one India/Wheat row from 2022 that every 2023 filter must ignore
pub fn sample_faostat() -> DataFrame {
    df! {
        "Area" => [
            "India", "India", "France", "France", "Atlantis", "Atlantis",
            "Narnia", "Narnia", "India", "India", "India", "France",
        ],
        "Item" => [
            "Wheat", "Wheat", "Wheat", "Wheat", "Wheat", "Wheat",
            "Wheat", "Wheat", "Rice", "Maize", "Wheat", "Rice",
        ],
        "Element" => [
            "Production", "Area harvested", "Production", "Area harvested",
            "Production", "Area harvested", "Production", "Area harvested",
            "Production", "Production", "Production", "Production",
        ],
        "Year" => [2023i32, 2023, 2023, 2023, 2023, 2023, 2023, 2023, 2023, 2023, 2022, 2023],
        "Value" => [1000.0f64, 100.0, 800.0, 160.0, 300.0, 0.0, 500.0, 50.0, 2000.0, 600.0, 900.0, 10.0],
    }
    .unwrap()
}

/// Write a DataFrame to a CSV file in a fresh temp directory.
pub fn write_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("faostat.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}
