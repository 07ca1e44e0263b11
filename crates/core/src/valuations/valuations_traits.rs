//! Valuation service traits.

use async_trait::async_trait;

use super::valuations_model::Valuations;
use crate::companies::Company;

/// Trait defining the contract for valuation fetching.
#[async_trait]
pub trait ValuationServiceTrait: Send + Sync {
    /// Fetch the current capitalization of every selected company.
    ///
    /// The key set of the result equals the (de-duplicated) input set.
    /// This call cannot fail; a company whose lookup failed is present
    /// with a capitalization of zero.
    async fn fetch_valuations(&self, selected: &[Company]) -> Valuations;
}
