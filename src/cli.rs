//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Agroplot - Generate crop production and yield charts from a FAOSTAT export
#[derive(Parser, Debug)]
#[command(name = "agroplot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// FAOSTAT CSV export with Area/Item/Element/Year/Value columns
    #[arg(short, long)]
    pub input: PathBuf,

    /// Crop (Item column) to analyze
    #[arg(short, long, default_value = "Wheat")]
    pub crop: String,

    /// Year to analyze
    #[arg(short, long, default_value = "2023")]
    pub year: i32,

    /// Country for the crop-portfolio chart
    #[arg(long, default_value = "India")]
    pub country: String,

    /// Number of entries in the top-producer and portfolio charts
    #[arg(long, default_value = "10")]
    pub top: usize,

    /// Directory for generated chart files
    #[arg(short, long, default_value = "charts")]
    pub out_dir: PathBuf,

    /// Open the interactive yield map with the system default app when done
    #[arg(long)]
    pub open_map: bool,
}

impl Cli {
    pub fn top_producers_path(&self) -> PathBuf {
        self.out_dir.join("top_producers.png")
    }

    pub fn yield_map_path(&self) -> PathBuf {
        self.out_dir.join("yield_map.html")
    }

    pub fn portfolio_path(&self) -> PathBuf {
        self.out_dir.join("crop_portfolio.png")
    }

    pub fn yield_scatter_path(&self) -> PathBuf {
        self.out_dir.join("yield_vs_area.png")
    }
}
