//! Agroplot - FAOSTAT crop analysis library
//!
//! Loads a FAOSTAT agricultural-statistics export, filters it for a single
//! crop and year, and renders production/yield charts plus an interactive
//! world yield map.

pub mod charts;
pub mod cli;
pub mod data;
pub mod geo;
pub mod utils;
