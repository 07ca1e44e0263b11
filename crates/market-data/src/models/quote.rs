use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::{Currency, ProviderId};

/// Latest market capitalization reported for a symbol.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketCapQuote {
    /// Symbol as requested from the provider
    pub symbol: String,

    /// Market capitalization in base currency units (not thousands, not millions)
    pub market_cap: f64,

    /// Quote currency, when the provider reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,

    /// Time of the underlying market price
    pub as_of: DateTime<Utc>,

    /// Source of the quote (YAHOO, ...)
    pub source: ProviderId,
}

impl MarketCapQuote {
    /// Create a quote stamped with the current time.
    pub fn new(symbol: impl Into<String>, market_cap: f64, source: impl Into<ProviderId>) -> Self {
        Self {
            symbol: symbol.into(),
            market_cap,
            currency: None,
            as_of: Utc::now(),
            source: source.into(),
        }
    }

    /// Set the quote currency
    pub fn currency(mut self, currency: impl Into<Currency>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Set the quote timestamp
    pub fn as_of(mut self, as_of: DateTime<Utc>) -> Self {
        self.as_of = as_of;
        self
    }
}
