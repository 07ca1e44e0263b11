use rust_decimal::Decimal;

use super::comparison_model::{ComparisonRow, ComparisonState};
use crate::constants::UNITS_PER_MILLION;
use crate::countries::CountryRecord;
use crate::valuations::Valuations;

/// Sum of all capitalizations, in base units.
///
/// Saturates at `Decimal::MAX` instead of overflowing.
pub fn total_valuation(valuations: &Valuations) -> Decimal {
    valuations.iter().fold(Decimal::ZERO, |total, v| {
        total.checked_add(v.capitalization).unwrap_or(Decimal::MAX)
    })
}

/// Convert a base-unit amount to millions, the unit of the GDP table.
pub fn to_millions(amount: Decimal) -> Decimal {
    amount / UNITS_PER_MILLION
}

/// Compare every country against `total_millions`.
///
/// Returns one row per input country in input order. `total_millions` must
/// already be normalised with [`to_millions`].
pub fn classify(countries: &[CountryRecord], total_millions: Decimal) -> Vec<ComparisonRow> {
    countries
        .iter()
        .map(|country| {
            let difference = country.gdp - total_millions;
            ComparisonRow {
                country: country.clone(),
                total_valuation: total_millions,
                difference,
                state: ComparisonState::from_difference(difference),
            }
        })
        .collect()
}
