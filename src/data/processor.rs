//! FAOSTAT Processor Module
//! Filtering, aggregation and the production/area merge behind each chart.

use polars::prelude::*;
use thiserror::Error;

use super::{COL_AREA, COL_ELEMENT, COL_ITEM, COL_VALUE, COL_YEAR, ELEMENT_PRODUCTION};

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("No rows match {0}")]
    EmptySelection(String),
}

/// One country's merged production/area row.
#[derive(Debug, Clone, PartialEq)]
pub struct YieldRow {
    pub country: String,
    pub production: f64,
    pub area_ha: f64,
    pub yield_t_ha: f64,
}

/// Merged yield table plus the rows excluded to keep yields finite.
#[derive(Debug, Clone)]
pub struct YieldTable {
    pub rows: Vec<YieldRow>,
    /// Countries dropped because their harvested area was zero or negative.
    pub zero_area_dropped: usize,
}

/// Handles the filter / aggregate / merge steps feeding each chart.
pub struct FaostatProcessor;

impl FaostatProcessor {
    /// Filter one (Item, Element, Year) slice down to Area + Value columns.
    /// Unparseable cells arrive from the loader as nulls and carry no usable
    /// value, so they are dropped here.
    pub fn element_slice(
        df: &DataFrame,
        crop: &str,
        element: &str,
        year: i32,
    ) -> Result<DataFrame, ProcessorError> {
        let sliced = df
            .clone()
            .lazy()
            .filter(
                col(COL_ITEM)
                    .eq(lit(crop))
                    .and(col(COL_ELEMENT).eq(lit(element)))
                    .and(col(COL_YEAR).eq(lit(year))),
            )
            .filter(col(COL_VALUE).is_not_null())
            .select([col(COL_AREA), col(COL_VALUE)])
            .collect()?;

        if sliced.height() == 0 {
            return Err(ProcessorError::EmptySelection(format!(
                "Item='{}', Element='{}', Year={}",
                crop, element, year
            )));
        }

        Ok(sliced)
    }

    /// Top-N producers from an element slice, sorted descending by value.
    /// Ties keep their input order (stable sort).
    pub fn top_producers(
        slice: &DataFrame,
        n: usize,
    ) -> Result<Vec<(String, f64)>, ProcessorError> {
        let top = slice
            .clone()
            .lazy()
            .sort(
                [COL_VALUE],
                SortMultipleOptions::default()
                    .with_order_descending(true)
                    .with_maintain_order(true),
            )
            .limit(n as u32)
            .collect()?;

        labeled_values(&top, COL_AREA, COL_VALUE)
    }

    /// Merge production and area slices on country and compute yield.
    ///
    /// Rows with a non-positive harvested area are excluded before the ratio
    /// so no infinite yield can reach a chart; the excluded count is returned
    /// rather than swallowed.
    pub fn yield_table(
        prod: &DataFrame,
        area: &DataFrame,
    ) -> Result<YieldTable, ProcessorError> {
        let merged = prod
            .clone()
            .lazy()
            .select([
                col(COL_AREA),
                col(COL_VALUE).cast(DataType::Float64).alias("Production"),
            ])
            .join(
                area.clone().lazy().select([
                    col(COL_AREA),
                    col(COL_VALUE).cast(DataType::Float64).alias("AreaHarvested"),
                ]),
                [col(COL_AREA)],
                [col(COL_AREA)],
                JoinArgs::new(JoinType::Inner),
            )
            .collect()?;

        let total = merged.height();
        let kept = merged
            .lazy()
            .filter(col("AreaHarvested").gt(lit(0.0)))
            .with_column(
                (col("Production") / col("AreaHarvested")).alias("Yield"),
            )
            .collect()?;
        let zero_area_dropped = total - kept.height();

        // Walk rows jointly so a null in one column can never pair a country
        // with another row's numbers.
        let countries = kept.column(COL_AREA)?;
        let production = kept.column("Production")?.cast(&DataType::Float64)?;
        let production = production.f64()?;
        let area_ha = kept.column("AreaHarvested")?.cast(&DataType::Float64)?;
        let area_ha = area_ha.f64()?;
        let yields = kept.column("Yield")?.cast(&DataType::Float64)?;
        let yields = yields.f64()?;

        let mut rows = Vec::with_capacity(kept.height());
        for i in 0..kept.height() {
            let country = countries.get(i)?;
            if country.is_null() {
                continue;
            }
            if let (Some(production), Some(area_ha), Some(yield_t_ha)) =
                (production.get(i), area_ha.get(i), yields.get(i))
            {
                rows.push(YieldRow {
                    country: country.to_string().trim_matches('"').to_string(),
                    production,
                    area_ha,
                    yield_t_ha,
                });
            }
        }

        Ok(YieldTable {
            rows,
            zero_area_dropped,
        })
    }

    /// Top-N items by summed production for one country and year.
    pub fn country_portfolio(
        df: &DataFrame,
        country: &str,
        year: i32,
        n: usize,
    ) -> Result<Vec<(String, f64)>, ProcessorError> {
        let portfolio = df
            .clone()
            .lazy()
            .filter(
                col(COL_AREA)
                    .eq(lit(country))
                    .and(col(COL_ELEMENT).eq(lit(ELEMENT_PRODUCTION)))
                    .and(col(COL_YEAR).eq(lit(year))),
            )
            .group_by([col(COL_ITEM)])
            .agg([col(COL_VALUE)
                .cast(DataType::Float64)
                .sum()
                .alias("Production")])
            .sort(
                ["Production"],
                SortMultipleOptions::default()
                    .with_order_descending(true)
                    .with_maintain_order(true),
            )
            .limit(n as u32)
            .collect()?;

        if portfolio.height() == 0 {
            return Err(ProcessorError::EmptySelection(format!(
                "Area='{}', Element='{}', Year={}",
                country, ELEMENT_PRODUCTION, year
            )));
        }

        labeled_values(&portfolio, COL_ITEM, "Production")
    }
}

/// Extract (label, value) pairs row-wise. A row is skipped only when either
/// side is null, so labels always keep their own row's value.
fn labeled_values(
    df: &DataFrame,
    label_col: &str,
    value_col: &str,
) -> Result<Vec<(String, f64)>, ProcessorError> {
    let labels = df.column(label_col)?;
    let casted = df.column(value_col)?.cast(&DataType::Float64)?;
    let values = casted.f64()?;

    let mut pairs = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let label = labels.get(i)?;
        if let (false, Some(value)) = (label.is_null(), values.get(i)) {
            pairs.push((label.to_string().trim_matches('"').to_string(), value));
        }
    }
    Ok(pairs)
}
