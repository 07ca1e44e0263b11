//! Report service traits.

use async_trait::async_trait;

use super::report_model::ComparisonReport;
use crate::companies::Company;
use crate::errors::Result;

/// Trait defining the contract for producing a comparison report.
#[async_trait]
pub trait ReportServiceTrait: Send + Sync {
    /// Fetch valuations for `selection` and compare them with every
    /// reference economy.
    ///
    /// # Errors
    /// [`crate::Error::EmptySelection`] when `selection` is empty; nothing is
    /// fetched or computed in that case. Valuation failures are not errors.
    async fn compare(&self, selection: &[Company]) -> Result<ComparisonReport>;
}
