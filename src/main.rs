//! Agroplot - FAOSTAT Crop Data Analysis & Chart Generator
//!
//! One-shot pipeline: load the FAOSTAT export, slice it for one crop and
//! year, then render the four chart artifacts.

use anyhow::{Context, Result};
use clap::Parser;

use agroplot::charts::{
    render_portfolio, render_top_producers, render_yield_scatter, write_yield_map,
};
use agroplot::cli::Cli;
use agroplot::data::{load_faostat, FaostatProcessor, ELEMENT_AREA_HARVESTED, ELEMENT_PRODUCTION};
use agroplot::geo;
use agroplot::utils::{print_completion, print_header, print_step, print_success, print_warn};

fn main() -> Result<()> {
    let cli = Cli::parse();
    print_header(&cli.crop, cli.year, &cli.input);

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating output directory {}", cli.out_dir.display()))?;

    let df = load_faostat(&cli.input)
        .with_context(|| format!("loading {}", cli.input.display()))?;
    print_step(&format!(
        "loaded {} rows x {} columns",
        df.height(),
        df.width()
    ));

    let prod = FaostatProcessor::element_slice(&df, &cli.crop, ELEMENT_PRODUCTION, cli.year)
        .context("filtering production rows")?;
    let area = FaostatProcessor::element_slice(&df, &cli.crop, ELEMENT_AREA_HARVESTED, cli.year)
        .context("filtering area-harvested rows")?;

    // 1. Top producing countries bar chart
    let top = FaostatProcessor::top_producers(&prod, cli.top)?;
    let top_path = cli.top_producers_path();
    render_top_producers(&top, &cli.crop, cli.year, &top_path)?;
    print_success(&format!("top producers: {}", top_path.display()));

    // 2. Global yield choropleth
    let table = FaostatProcessor::yield_table(&prod, &area)?;
    if table.zero_area_dropped > 0 {
        print_warn(&format!(
            "{} countries dropped (zero harvested area)",
            table.zero_area_dropped
        ));
    }
    let (map_rows, unresolved) = geo::partition_resolved(&table.rows);
    if !unresolved.is_empty() {
        print_warn(&format!(
            "{} areas not mapped to ISO3 codes: {}",
            unresolved.len(),
            unresolved.join(", ")
        ));
    }
    let map_path = cli.yield_map_path();
    write_yield_map(&map_rows, &cli.crop, cli.year, &map_path)?;
    print_success(&format!(
        "yield map ({} countries): {}",
        map_rows.len(),
        map_path.display()
    ));

    // 3. Crop portfolio bar chart for one country
    let portfolio = FaostatProcessor::country_portfolio(&df, &cli.country, cli.year, cli.top)
        .with_context(|| format!("building crop portfolio for {}", cli.country))?;
    let portfolio_path = cli.portfolio_path();
    render_portfolio(&portfolio, &cli.country, cli.year, &portfolio_path)?;
    print_success(&format!("crop portfolio: {}", portfolio_path.display()));

    // 4. Yield vs area scatter plot
    let scatter_path = cli.yield_scatter_path();
    render_yield_scatter(&table.rows, &cli.crop, cli.year, &scatter_path)?;
    print_success(&format!("yield vs area: {}", scatter_path.display()));

    print_completion(&cli.out_dir);

    if cli.open_map {
        open::that(&map_path)
            .with_context(|| format!("opening {}", map_path.display()))?;
    }

    Ok(())
}
