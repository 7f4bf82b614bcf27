//! Static Chart Renderer
//! Draws the bar charts and the yield/area scatter as PNG files via plotters.

use plotters::prelude::*;
use plotters::style::FontTransform;
use std::path::Path;

use super::ChartError;
use crate::data::YieldRow;

// Colors matched to the matplotlib defaults the charts were designed with
const BAR_GREEN: RGBColor = RGBColor(0, 128, 0);
const BAR_ORANGE: RGBColor = RGBColor(255, 165, 0);
const SCATTER_BLUE: RGBColor = RGBColor(31, 119, 180);

const CHART_SIZE: (u32, u32) = (1000, 650);

/// Top-N producing countries bar chart.
pub fn render_top_producers(
    entries: &[(String, f64)],
    crop: &str,
    year: i32,
    path: &Path,
) -> Result<(), ChartError> {
    let title = format!(
        "Top {} {} Producing Countries ({})",
        entries.len(),
        crop,
        year
    );
    draw_bar_chart(path, &title, "Production (tonnes)", entries, BAR_GREEN)
        .map_err(|e| ChartError::Render(e.to_string()))
}

/// Per-country crop portfolio bar chart.
pub fn render_portfolio(
    entries: &[(String, f64)],
    country: &str,
    year: i32,
    path: &Path,
) -> Result<(), ChartError> {
    let title = format!(
        "{} Top {} Crop Production ({})",
        country,
        entries.len(),
        year
    );
    draw_bar_chart(path, &title, "Production (tonnes)", entries, BAR_ORANGE)
        .map_err(|e| ChartError::Render(e.to_string()))
}

/// Yield vs area-harvested scatter plot, log-scale X.
pub fn render_yield_scatter(
    rows: &[YieldRow],
    crop: &str,
    year: i32,
    path: &Path,
) -> Result<(), ChartError> {
    let title = format!("{} Yield vs Area Harvested ({})", crop, year);
    draw_scatter(path, &title, rows).map_err(|e| ChartError::Render(e.to_string()))
}

fn draw_bar_chart(
    path: &Path,
    title: &str,
    y_desc: &str,
    entries: &[(String, f64)],
    color: RGBColor,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let y_max = entries
        .iter()
        .map(|(_, v)| *v)
        .fold(f64::MIN, f64::max)
        .max(1.0)
        * 1.05;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 26))
        .set_label_area_size(LabelAreaPosition::Left, 90)
        .set_label_area_size(LabelAreaPosition::Bottom, 140)
        .build_cartesian_2d((0..entries.len()).into_segmented(), 0f64..y_max)?;

    let labels: Vec<&str> = entries.iter().map(|(name, _)| name.as_str()).collect();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc(y_desc)
        .x_labels(entries.len())
        .x_label_formatter(&|seg| match seg {
            SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => {
                labels.get(*i).map(|s| s.to_string()).unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        })
        .x_label_style(
            ("sans-serif", 13)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .draw()?;

    chart.draw_series(entries.iter().enumerate().map(|(i, (_, v))| {
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), *v),
            ],
            color.filled(),
        );
        bar.set_margin(0, 0, 8, 8);
        bar
    }))?;

    root.present()?;
    Ok(())
}

fn draw_scatter(
    path: &Path,
    title: &str,
    rows: &[YieldRow],
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    // Harvested areas are strictly positive by the time they reach a chart,
    // but guard the log range anyway.
    let x_min = rows
        .iter()
        .map(|r| r.area_ha)
        .filter(|v| *v > 0.0)
        .fold(f64::INFINITY, f64::min);
    let x_min = if x_min.is_finite() { x_min * 0.8 } else { 1.0 };
    let x_max = rows.iter().map(|r| r.area_ha).fold(1.0, f64::max) * 1.2;
    let y_max = rows.iter().map(|r| r.yield_t_ha).fold(1.0, f64::max) * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 26))
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, 60)
        .build_cartesian_2d((x_min.max(1e-2)..x_max).log_scale(), 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Area harvested (ha, log scale)")
        .y_desc("Yield (tonnes/ha)")
        .x_label_formatter(&|v| format!("{:.0}", v))
        .draw()?;

    chart.draw_series(
        rows.iter()
            .map(|r| Circle::new((r.area_ha, r.yield_t_ha), 4, SCATTER_BLUE.filled())),
    )?;

    root.present()?;
    Ok(())
}
