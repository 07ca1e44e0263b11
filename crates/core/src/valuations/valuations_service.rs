//! Valuation service implementation.

use std::sync::Arc;

use async_trait::async_trait;
use capmap_market_data::{MarketCapQuote, MarketDataError, MarketDataProvider};
use futures::future::join_all;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::valuations_model::{CompanyValuation, Valuations};
use super::valuations_traits::ValuationServiceTrait;
use crate::companies::Company;
use crate::constants::MAX_MARKET_CAP;

/// Currency all reference GDP figures are expressed in.
const REFERENCE_CURRENCY: &str = "USD";

/// Service that resolves company capitalizations through a market data provider.
pub struct ValuationService {
    provider: Arc<dyn MarketDataProvider>,
}

impl ValuationService {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    /// Look up one company, collapsing every failure into a zero valuation.
    async fn fetch_one(&self, company: Company) -> CompanyValuation {
        let result = self.provider.get_market_cap(company.ticker).await;
        match result.and_then(|quote| capitalization_of(&quote)) {
            Ok(capitalization) => {
                debug!(
                    "{} ({}) capitalization {} from {}",
                    company.name,
                    company.ticker,
                    capitalization,
                    self.provider.id()
                );
                CompanyValuation::available(&company, capitalization)
            }
            Err(e) => {
                warn!(
                    data_error = e.is_data_error(),
                    "Valuation unavailable for {} ({}), using 0: {}",
                    company.name,
                    company.ticker,
                    e
                );
                CompanyValuation::unavailable(&company)
            }
        }
    }
}

#[async_trait]
impl ValuationServiceTrait for ValuationService {
    async fn fetch_valuations(&self, selected: &[Company]) -> Valuations {
        let mut unique: Vec<Company> = Vec::with_capacity(selected.len());
        for company in selected {
            if !unique.contains(company) {
                unique.push(*company);
            }
        }

        debug!(
            "Fetching {} valuation(s) from {}",
            unique.len(),
            self.provider.id()
        );

        // Lookups are independent; join_all keeps results in input order.
        let lookups = unique.iter().map(|company| self.fetch_one(*company));
        Valuations::new(join_all(lookups).await)
    }
}

/// Validate a provider quote and convert it to a decimal amount.
fn capitalization_of(quote: &MarketCapQuote) -> Result<Decimal, MarketDataError> {
    if let Some(currency) = quote.currency.as_deref() {
        if !currency.eq_ignore_ascii_case(REFERENCE_CURRENCY) {
            warn!(
                "{} market cap reported in {}, compared as {}",
                quote.symbol, currency, REFERENCE_CURRENCY
            );
        }
    }

    if !quote.market_cap.is_finite() || quote.market_cap < 0.0 {
        return Err(MarketDataError::ValidationFailed {
            message: format!("Invalid market cap {} for {}", quote.market_cap, quote.symbol),
        });
    }

    let capitalization = Decimal::from_f64_retain(quote.market_cap).ok_or_else(|| {
        MarketDataError::ValidationFailed {
            message: format!(
                "Failed to convert market cap {} for {} to Decimal",
                quote.market_cap, quote.symbol
            ),
        }
    })?;

    if capitalization > MAX_MARKET_CAP {
        return Err(MarketDataError::ValidationFailed {
            message: format!(
                "Market cap {} for {} exceeds {}",
                quote.market_cap, quote.symbol, MAX_MARKET_CAP
            ),
        });
    }
    Ok(capitalization)
}
