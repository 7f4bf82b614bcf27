//! FAOSTAT CSV Loader Module
//! Handles CSV file loading using Polars.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Dataset contains no rows: {0}")]
    EmptyDataset(PathBuf),
}

/// Load a FAOSTAT CSV export into a DataFrame.
///
/// Column types are inferred from the first 10 000 rows; unparseable cells
/// become nulls instead of aborting the load. The column schema itself is not
/// validated here - a missing column surfaces as a Polars error at the first
/// expression that references it.
pub fn load_faostat(path: &Path) -> Result<DataFrame, LoaderError> {
    // Use lazy evaluation for memory efficiency, then collect
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10000))
        .with_ignore_errors(true)
        .finish()?
        .collect()?;

    if df.height() == 0 {
        return Err(LoaderError::EmptyDataset(path.to_path_buf()));
    }

    Ok(df)
}
