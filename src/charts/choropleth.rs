//! Interactive Yield Map
//! Generates a self-contained HTML choropleth since no Rust charting crate
//! ships world geometry; plotly.js resolves ISO3 locations natively.

use serde::Serialize;
use std::fs;
use std::path::Path;

use super::ChartError;
use crate::geo::MapRow;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.32.0.min.js";
const MAP_DIV: &str = "yield-map";

#[derive(Serialize)]
struct Figure {
    data: Vec<ChoroplethTrace>,
    layout: Layout,
}

#[derive(Serialize)]
struct ChoroplethTrace {
    #[serde(rename = "type")]
    trace_type: &'static str,
    locations: Vec<&'static str>,
    z: Vec<f64>,
    text: Vec<String>,
    colorscale: &'static str,
    colorbar: ColorBar,
}

#[derive(Serialize)]
struct ColorBar {
    title: &'static str,
}

#[derive(Serialize)]
struct Layout {
    title: String,
    geo: Geo,
}

#[derive(Serialize)]
struct Geo {
    projection: Projection,
    showframe: bool,
    showcoastlines: bool,
}

#[derive(Serialize)]
struct Projection {
    #[serde(rename = "type")]
    kind: &'static str,
}

/// Write the global yield choropleth as a standalone HTML file.
pub fn write_yield_map(
    rows: &[MapRow],
    crop: &str,
    year: i32,
    path: &Path,
) -> Result<(), ChartError> {
    let figure = Figure {
        data: vec![ChoroplethTrace {
            trace_type: "choropleth",
            locations: rows.iter().map(|r| r.iso3).collect(),
            z: rows.iter().map(|r| r.yield_t_ha).collect(),
            text: rows.iter().map(|r| r.country.clone()).collect(),
            colorscale: "Viridis",
            colorbar: ColorBar {
                title: "Yield (t/ha)",
            },
        }],
        layout: Layout {
            title: format!("Global {} Yield (tonnes/ha, {})", crop, year),
            geo: Geo {
                projection: Projection {
                    kind: "natural earth",
                },
                showframe: false,
                showcoastlines: true,
            },
        },
    };
    let spec = serde_json::to_string(&figure)?;

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Global {crop} Yield ({year})</title>
<script src="{PLOTLY_CDN}"></script>
</head>
<body>
<div id="{MAP_DIV}" style="width:100%;height:90vh;"></div>
<script>
var figure = {spec};
Plotly.newPlot("{MAP_DIV}", figure.data, figure.layout, {{responsive: true}});
</script>
</body>
</html>
"#
    );

    fs::write(path, html)?;
    Ok(())
}
