//! Company and country tables.

use rust_decimal::Decimal;
use serde::Serialize;

use super::format::{format_signed_millions, format_usd_trillions, millions_to_trillions};
use crate::comparison::{to_millions, ComparisonRow, ComparisonState};
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::valuations::{ValuationStatus, Valuations};

/// One line of the company table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyTableRow {
    pub company: String,
    pub ticker: String,
    /// Capitalization in trillions of USD, rounded for display
    pub market_cap_trillions: Decimal,
    pub market_cap: String,
    pub status: ValuationStatus,
}

/// One line of the country table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryTableRow {
    pub code: String,
    pub country: String,
    pub gdp_trillions: Decimal,
    pub big_tech_trillions: Decimal,
    pub difference_millions: Decimal,
    pub difference: String,
    pub state: ComparisonState,
    pub result: String,
}

/// Companies sorted by capitalization, largest first.
///
/// Ties keep selection order.
pub fn company_table(valuations: &Valuations) -> Vec<CompanyTableRow> {
    let mut sorted: Vec<_> = valuations.iter().collect();
    sorted.sort_by(|a, b| b.capitalization.cmp(&a.capitalization));

    sorted
        .into_iter()
        .map(|v| {
            let trillions = millions_to_trillions(to_millions(v.capitalization));
            CompanyTableRow {
                company: v.name.clone(),
                ticker: v.ticker.clone(),
                market_cap_trillions: trillions.round_dp(DISPLAY_DECIMAL_PRECISION),
                market_cap: format_usd_trillions(trillions, DISPLAY_DECIMAL_PRECISION),
                status: v.status,
            }
        })
        .collect()
}

/// Countries sorted by GDP, largest first.
///
/// Ties keep input order. The rows themselves are not reordered.
pub fn country_table(rows: &[ComparisonRow]) -> Vec<CountryTableRow> {
    let mut sorted: Vec<&ComparisonRow> = rows.iter().collect();
    sorted.sort_by(|a, b| b.country.gdp.cmp(&a.country.gdp));

    sorted
        .into_iter()
        .map(|row| CountryTableRow {
            code: row.country.code.clone(),
            country: row.country.name.clone(),
            gdp_trillions: millions_to_trillions(row.country.gdp)
                .round_dp(DISPLAY_DECIMAL_PRECISION),
            big_tech_trillions: millions_to_trillions(row.total_valuation)
                .round_dp(DISPLAY_DECIMAL_PRECISION),
            difference_millions: row.difference.round_dp(0),
            difference: format_signed_millions(row.difference),
            state: row.state,
            result: row.state.label().to_string(),
        })
        .collect()
}
