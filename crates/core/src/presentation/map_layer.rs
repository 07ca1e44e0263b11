//! Choropleth layer handed to the map renderer.

use rust_decimal::Decimal;
use serde::Serialize;

use super::format::{format_signed_millions, format_usd_trillions, millions_to_trillions};
use crate::comparison::{ComparisonRow, ComparisonState};

/// Diverging scale: red for `-1`, blue for `+1`.
const COLOR_SCALE: &str = "RdBu_r";

/// Per-country tooltip fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapTooltip {
    pub valuation_total_millions: Decimal,
    pub gdp_millions: Decimal,
    pub difference_millions: Decimal,
    pub valuation_total: String,
    pub gdp: String,
    pub difference: String,
}

/// One country on the map, keyed by ISO-3 code.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapFeature {
    pub location: String,
    pub name: String,
    /// Colour value, `-1` or `+1`
    pub z: i8,
    pub state: ComparisonState,
    pub tooltip: MapTooltip,
}

/// Everything a choropleth renderer needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapLayer {
    pub title: String,
    pub location_mode: String,
    pub colorscale: String,
    pub zmid: i8,
    pub zmin: i8,
    pub zmax: i8,
    pub features: Vec<MapFeature>,
}

/// `GDP vs Apple + Microsoft ($6.0T USD)`
pub fn map_title(company_names: &[&str], total_millions: Decimal) -> String {
    format!(
        "GDP vs {} ({} USD)",
        company_names.join(" + "),
        format_usd_trillions(millions_to_trillions(total_millions), 1)
    )
}

/// Build the layer; features follow the order of `rows`.
pub fn map_layer(
    rows: &[ComparisonRow],
    company_names: &[&str],
    total_millions: Decimal,
) -> MapLayer {
    let features = rows
        .iter()
        .map(|row| MapFeature {
            location: row.country.code.clone(),
            name: row.country.name.clone(),
            z: row.state.color_value(),
            state: row.state,
            tooltip: MapTooltip {
                valuation_total_millions: row.total_valuation,
                gdp_millions: row.country.gdp,
                difference_millions: row.difference,
                valuation_total: format_usd_trillions(
                    millions_to_trillions(row.total_valuation),
                    1,
                ),
                gdp: format_usd_trillions(millions_to_trillions(row.country.gdp), 1),
                difference: format_signed_millions(row.difference),
            },
        })
        .collect();

    MapLayer {
        title: map_title(company_names, total_millions),
        location_mode: "ISO-3".to_string(),
        colorscale: COLOR_SCALE.to_string(),
        zmid: 0,
        zmin: -1,
        zmax: 1,
        features,
    }
}
