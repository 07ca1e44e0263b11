//! Report service implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use super::report_model::ComparisonReport;
use super::report_traits::ReportServiceTrait;
use crate::companies::Company;
use crate::countries::{reference_dataset, CountryRecord};
use crate::errors::{Error, Result};
use crate::valuations::ValuationServiceTrait;

/// Service that produces a [`ComparisonReport`] per selection.
pub struct ReportService {
    valuation_service: Arc<dyn ValuationServiceTrait>,
    countries: &'static [CountryRecord],
}

impl ReportService {
    /// Compare against the embedded reference dataset.
    pub fn new(valuation_service: Arc<dyn ValuationServiceTrait>) -> Self {
        Self::with_countries(valuation_service, reference_dataset())
    }

    pub fn with_countries(
        valuation_service: Arc<dyn ValuationServiceTrait>,
        countries: &'static [CountryRecord],
    ) -> Self {
        Self {
            valuation_service,
            countries,
        }
    }
}

#[async_trait]
impl ReportServiceTrait for ReportService {
    async fn compare(&self, selection: &[Company]) -> Result<ComparisonReport> {
        if selection.is_empty() {
            return Err(Error::EmptySelection);
        }

        let valuations = self.valuation_service.fetch_valuations(selection).await;
        debug!(
            "Fetched {} valuation(s), {} unavailable",
            valuations.len(),
            valuations.unavailable_count()
        );

        let report = ComparisonReport::build(valuations, self.countries);
        info!(
            "Compared {} against {} economies: companies exceed GDP in {}, GDP exceeds companies in {}",
            report.header.total_market_cap_display,
            report.summary.total,
            report.summary.valuation_exceeds_gdp,
            report.summary.gdp_exceeds_valuation
        );
        Ok(report)
    }
}
