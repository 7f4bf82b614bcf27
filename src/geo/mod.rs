//! Geo module - best-effort FAOSTAT country name to ISO3 resolution.
//!
//! FAOSTAT area names mostly follow ISO 3166-1 official names, but the export
//! also carries regional aggregates ("World", "Southern Asia") and a handful
//! of names the registry spells differently. Resolution is non-bijective and
//! lossy by design: anything unmatched is reported back to the caller instead
//! of reaching the map.

use crate::data::YieldRow;

/// FAOSTAT spellings that differ from the ISO 3166-1 registry names.
const FAOSTAT_ALIASES: &[(&str, &str)] = &[
    ("China, mainland", "CHN"),
    ("China, Hong Kong SAR", "HKG"),
    ("China, Macao SAR", "MAC"),
    ("China, Taiwan Province of", "TWN"),
    ("Côte d'Ivoire", "CIV"),
    ("Democratic People's Republic of Korea", "PRK"),
    ("Democratic Republic of the Congo", "COD"),
    ("Iran (Islamic Republic of)", "IRN"),
    ("Lao People's Democratic Republic", "LAO"),
    ("Netherlands (Kingdom of the)", "NLD"),
    ("Republic of Korea", "KOR"),
    ("Republic of Moldova", "MDA"),
    ("Russian Federation", "RUS"),
    ("Syrian Arab Republic", "SYR"),
    ("Türkiye", "TUR"),
    ("United Kingdom of Great Britain and Northern Ireland", "GBR"),
    ("United Republic of Tanzania", "TZA"),
    ("United States of America", "USA"),
    ("Venezuela (Bolivarian Republic of)", "VEN"),
    ("Viet Nam", "VNM"),
];

/// A yield row that resolved to a mappable country.
#[derive(Debug, Clone)]
pub struct MapRow {
    pub iso3: &'static str,
    pub country: String,
    pub yield_t_ha: f64,
}

/// Resolve a free-text country name to its ISO3 code.
///
/// Tries the FAOSTAT alias table, then an exact registry match, then a
/// case-insensitive match, then the name with a trailing parenthetical
/// stripped ("Bolivia (Plurinational State of)" -> "Bolivia"). Returns `None`
/// for anything else, including regional aggregates.
pub fn resolve_iso3(name: &str) -> Option<&'static str> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    if let Some((_, code)) = FAOSTAT_ALIASES.iter().find(|(alias, _)| *alias == name) {
        return Some(code);
    }

    if let Some(country) = rust_iso3166::ALL.iter().find(|c| c.name == name) {
        return Some(country.alpha3);
    }

    if let Some(country) = rust_iso3166::ALL
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
    {
        return Some(country.alpha3);
    }

    // "Iran (Islamic Republic of)" style names: retry without the parenthetical
    if let Some(stem) = name.split(" (").next() {
        if stem != name {
            return rust_iso3166::ALL
                .iter()
                .find(|c| c.name.eq_ignore_ascii_case(stem))
                .map(|c| c.alpha3);
        }
    }

    None
}

/// Split yield rows into mappable rows and the unresolved remainder.
///
/// The unresolved names are returned so the caller can report how many rows
/// were dropped from the map dataset.
pub fn partition_resolved(rows: &[YieldRow]) -> (Vec<MapRow>, Vec<String>) {
    let mut resolved = Vec::with_capacity(rows.len());
    let mut unresolved = Vec::new();

    for row in rows {
        match resolve_iso3(&row.country) {
            Some(iso3) => resolved.push(MapRow {
                iso3,
                country: row.country.clone(),
                yield_t_ha: row.yield_t_ha,
            }),
            None => unresolved.push(row.country.clone()),
        }
    }

    (resolved, unresolved)
}
