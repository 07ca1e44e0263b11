//! Market data provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::MarketCapQuote;

/// Trait for market data providers.
///
/// Implement this trait to add support for a new market data source.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use capmap_market_data::{MarketCapQuote, MarketDataError, MarketDataProvider};
///
/// struct FixedProvider;
///
/// #[async_trait]
/// impl MarketDataProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn get_market_cap(&self, symbol: &str) -> Result<MarketCapQuote, MarketDataError> {
///         Ok(MarketCapQuote::new(symbol, 1.0e12, self.id()))
///     }
/// }
/// ```
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO". Used for logging and
    /// as the `source` of returned quotes.
    fn id(&self) -> &'static str;

    /// Fetch the latest market capitalization for a symbol.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Provider symbol (e.g., "AAPL")
    ///
    /// # Returns
    ///
    /// The quote on success. A response that carries no capitalization
    /// must be reported as [`MarketDataError::MissingField`], never as a
    /// zero-valued quote.
    async fn get_market_cap(&self, symbol: &str) -> Result<MarketCapQuote, MarketDataError>;
}
