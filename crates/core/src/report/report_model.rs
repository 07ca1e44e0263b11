//! Report domain models.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::comparison::{classify, to_millions, total_valuation, ComparisonRow};
use crate::countries::CountryRecord;
use crate::errors::Result;
use crate::presentation::{
    company_table, country_table, header_metrics, map_layer, summarize, CompanyTableRow,
    CountryTableRow, HeaderMetrics, MapLayer, StateSummary,
};
use crate::valuations::Valuations;

/// Everything derived from one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub header: HeaderMetrics,
    pub valuations: Valuations,
    /// Aggregate valuation, in millions of USD
    pub total_valuation_millions: Decimal,
    pub companies: Vec<CompanyTableRow>,
    pub countries: Vec<CountryTableRow>,
    pub summary: StateSummary,
    pub map: MapLayer,
    /// Unsorted rows, in reference dataset order
    #[serde(skip)]
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonReport {
    /// Classify `countries` against `valuations` and build every view.
    pub fn build(valuations: Valuations, countries: &[CountryRecord]) -> Self {
        let total = total_valuation(&valuations);
        let total_millions = to_millions(total);
        let rows = classify(countries, total_millions);

        let map = map_layer(&rows, &valuations.names(), total_millions);
        Self {
            header: header_metrics(total, valuations.len(), countries.len()),
            total_valuation_millions: total_millions,
            companies: company_table(&valuations),
            countries: country_table(&rows),
            summary: summarize(&rows),
            map,
            valuations,
            rows,
        }
    }

    /// Pretty-printed JSON of the full report.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
