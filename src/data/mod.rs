//! Data module - FAOSTAT loading and processing

mod loader;
mod processor;

pub use loader::{load_faostat, LoaderError};
pub use processor::{FaostatProcessor, ProcessorError, YieldRow, YieldTable};

/// FAOSTAT column names.
pub const COL_AREA: &str = "Area";
pub const COL_ITEM: &str = "Item";
pub const COL_ELEMENT: &str = "Element";
pub const COL_YEAR: &str = "Year";
pub const COL_VALUE: &str = "Value";

/// FAOSTAT element (measurement kind) names.
pub const ELEMENT_PRODUCTION: &str = "Production";
pub const ELEMENT_AREA_HARVESTED: &str = "Area harvested";
