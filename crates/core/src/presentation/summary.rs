//! Header metrics and per-state counts.

use rust_decimal::Decimal;
use serde::Serialize;

use super::format::{format_usd_trillions, millions_to_trillions};
use crate::comparison::{to_millions, ComparisonRow, ComparisonState};
use crate::constants::{DISPLAY_DECIMAL_PRECISION, GDP_BASE_YEAR};

/// Number of countries in each state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSummary {
    pub valuation_exceeds_gdp: usize,
    pub gdp_exceeds_valuation: usize,
    pub total: usize,
}

/// Figures shown above the tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderMetrics {
    /// Aggregate capitalization in base units
    pub total_market_cap: Decimal,
    /// Aggregate capitalization, `$X.XXT`
    pub total_market_cap_display: String,
    pub company_count: usize,
    pub country_count: usize,
    pub base_year: u16,
}

pub fn summarize(rows: &[ComparisonRow]) -> StateSummary {
    rows.iter().fold(StateSummary::default(), |mut summary, row| {
        match row.state {
            ComparisonState::ValuationExceedsGdp => summary.valuation_exceeds_gdp += 1,
            ComparisonState::GdpExceedsValuation => summary.gdp_exceeds_valuation += 1,
        }
        summary.total += 1;
        summary
    })
}

pub fn header_metrics(
    total_market_cap: Decimal,
    company_count: usize,
    country_count: usize,
) -> HeaderMetrics {
    HeaderMetrics {
        total_market_cap,
        total_market_cap_display: format_usd_trillions(
            millions_to_trillions(to_millions(total_market_cap)),
            DISPLAY_DECIMAL_PRECISION,
        ),
        company_count,
        country_count,
        base_year: GDP_BASE_YEAR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::classify;
    use crate::countries::reference_dataset;
    use rust_decimal_macros::dec;

    #[test]
    fn test_summarize_counts_each_state() {
        // Mexico sits exactly on the total and counts as GDP-dominant
        let rows = classify(reference_dataset(), dec!(2000000));

        let summary = summarize(&rows);

        assert_eq!(summary.total, 50);
        assert_eq!(
            summary.valuation_exceeds_gdp + summary.gdp_exceeds_valuation,
            50
        );
        let expected = reference_dataset()
            .iter()
            .filter(|c| c.gdp < dec!(2000000))
            .count();
        assert_eq!(summary.valuation_exceeds_gdp, expected);
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(&[]), StateSummary::default());
    }

    #[test]
    fn test_header_metrics() {
        let metrics = header_metrics(dec!(6000000000000), 2, 50);

        assert_eq!(metrics.total_market_cap_display, "$6.00T");
        assert_eq!(metrics.company_count, 2);
        assert_eq!(metrics.country_count, 50);
        assert_eq!(metrics.base_year, 2024);
    }
}
