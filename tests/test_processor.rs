//! Unit tests for filtering, top-N selection and the yield merge

use agroplot::data::{FaostatProcessor, ProcessorError};
use polars::prelude::*;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_element_slice_filters_crop_element_year() {
    let df = common::sample_faostat();

    let prod = FaostatProcessor::element_slice(&df, "Wheat", "Production", 2023).unwrap();

    // India, France, Atlantis, Narnia - not the 2022 row, not Rice/Maize
    assert_eq!(prod.height(), 4);
    assert_eq!(prod.get_column_names(), &["Area", "Value"]);
}

#[test]
fn test_element_slice_empty_selection_errors() {
    let df = common::sample_faostat();

    let err = FaostatProcessor::element_slice(&df, "Barley", "Production", 2023).unwrap_err();
    assert!(matches!(err, ProcessorError::EmptySelection(_)));
}

#[test]
fn test_top_producers_sorted_descending_and_capped() {
    let df = common::sample_faostat();
    let prod = FaostatProcessor::element_slice(&df, "Wheat", "Production", 2023).unwrap();

    let top2 = FaostatProcessor::top_producers(&prod, 2).unwrap();
    assert_eq!(top2.len(), 2);
    assert_eq!(top2[0], ("India".to_string(), 1000.0));
    assert_eq!(top2[1], ("France".to_string(), 800.0));

    // Asking for more entries than rows just returns everything, still sorted
    let all = FaostatProcessor::top_producers(&prod, 10).unwrap();
    assert_eq!(all.len(), 4);
    for pair in all.windows(2) {
        assert!(pair[0].1 >= pair[1].1);
    }
}

#[test]
fn test_yield_table_excludes_zero_area() {
    let df = common::sample_faostat();
    let prod = FaostatProcessor::element_slice(&df, "Wheat", "Production", 2023).unwrap();
    let area = FaostatProcessor::element_slice(&df, "Wheat", "Area harvested", 2023).unwrap();

    let table = FaostatProcessor::yield_table(&prod, &area).unwrap();

    assert_eq!(table.zero_area_dropped, 1);
    assert_eq!(table.rows.len(), 3);
    assert!(table.rows.iter().all(|r| r.country != "Atlantis"));
    assert!(table.rows.iter().all(|r| r.yield_t_ha.is_finite()));

    let india = table.rows.iter().find(|r| r.country == "India").unwrap();
    assert_eq!(india.yield_t_ha, 10.0);
    let france = table.rows.iter().find(|r| r.country == "France").unwrap();
    assert_eq!(france.yield_t_ha, 5.0);
}

#[test]
fn test_null_values_are_dropped_not_mispaired() {
    // The loader turns unparseable Value cells into nulls; a null must drop
    // its own row, never shift another country's numbers onto it
    let df = df! {
        "Area" => ["India", "France", "Brazil", "India", "France", "Brazil"],
        "Item" => ["Wheat", "Wheat", "Wheat", "Wheat", "Wheat", "Wheat"],
        "Element" => [
            "Production", "Production", "Production",
            "Area harvested", "Area harvested", "Area harvested",
        ],
        "Year" => [2023i32, 2023, 2023, 2023, 2023, 2023],
        "Value" => [Some(1000.0f64), None, Some(600.0), Some(100.0), Some(50.0), Some(200.0)],
    }
    .unwrap();

    let prod = FaostatProcessor::element_slice(&df, "Wheat", "Production", 2023).unwrap();
    let area = FaostatProcessor::element_slice(&df, "Wheat", "Area harvested", 2023).unwrap();

    let top = FaostatProcessor::top_producers(&prod, 10).unwrap();
    assert_eq!(
        top,
        vec![
            ("India".to_string(), 1000.0),
            ("Brazil".to_string(), 600.0),
        ]
    );

    let table = FaostatProcessor::yield_table(&prod, &area).unwrap();
    assert_eq!(table.rows.len(), 2);
    assert!(table.rows.iter().all(|r| r.country != "France"));

    let india = table.rows.iter().find(|r| r.country == "India").unwrap();
    assert_eq!(india.production, 1000.0);
    assert_eq!(india.yield_t_ha, 10.0);

    let brazil = table.rows.iter().find(|r| r.country == "Brazil").unwrap();
    assert_eq!(brazil.production, 600.0);
    assert_eq!(brazil.yield_t_ha, 3.0);
}

#[test]
fn test_yield_reference_scenario() {
    let df = df! {
        "Area" => ["Wheatland", "Wheatland"],
        "Item" => ["Wheat", "Wheat"],
        "Element" => ["Production", "Area harvested"],
        "Year" => [2023i32, 2023],
        "Value" => [1000.0f64, 100.0],
    }
    .unwrap();

    let prod = FaostatProcessor::element_slice(&df, "Wheat", "Production", 2023).unwrap();
    let area = FaostatProcessor::element_slice(&df, "Wheat", "Area harvested", 2023).unwrap();
    let table = FaostatProcessor::yield_table(&prod, &area).unwrap();

    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0].country, "Wheatland");
    assert_eq!(table.rows[0].yield_t_ha, 10.0);
    assert_eq!(table.zero_area_dropped, 0);
}

#[test]
fn test_country_portfolio_sums_and_sorts() {
    let df = common::sample_faostat();

    let portfolio = FaostatProcessor::country_portfolio(&df, "India", 2023, 10).unwrap();

    // 2023 production only: Rice 2000, Wheat 1000, Maize 600
    assert_eq!(portfolio.len(), 3);
    assert_eq!(portfolio[0], ("Rice".to_string(), 2000.0));
    assert_eq!(portfolio[1], ("Wheat".to_string(), 1000.0));
    assert_eq!(portfolio[2], ("Maize".to_string(), 600.0));
}

#[test]
fn test_country_portfolio_respects_top_n() {
    let df = common::sample_faostat();

    let portfolio = FaostatProcessor::country_portfolio(&df, "India", 2023, 2).unwrap();
    assert_eq!(portfolio.len(), 2);
    assert_eq!(portfolio[0].0, "Rice");
}

#[test]
fn test_country_portfolio_unknown_country_errors() {
    let df = common::sample_faostat();

    let err = FaostatProcessor::country_portfolio(&df, "Oz", 2023, 10).unwrap_err();
    assert!(matches!(err, ProcessorError::EmptySelection(_)));
}
