//! Charts module - static chart rendering and the interactive yield map

mod choropleth;
mod renderer;

pub use choropleth::write_yield_map;
pub use renderer::{render_portfolio, render_top_producers, render_yield_scatter};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Chart rendering failed: {0}")]
    Render(String),
    #[error("Failed to write chart output: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode map figure: {0}")]
    Json(#[from] serde_json::Error),
}
