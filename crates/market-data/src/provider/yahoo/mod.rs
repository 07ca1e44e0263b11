//! Yahoo Finance market data provider.
//!
//! Market capitalization is read from the `quoteSummary` endpoint, which
//! requires a cookie and a matching "crumb" token. Both are fetched once and
//! cached for the process lifetime.

mod models;

use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use lazy_static::lazy_static;
use reqwest::{header, StatusCode};
use tracing::debug;
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::models::MarketCapQuote;
use crate::provider::MarketDataProvider;

use models::YahooQuoteSummaryResponse;

/// Provider id used in logs and quote sources.
pub const PROVIDER_ID: &str = "YAHOO";

/// Browser user agent; Yahoo rejects requests without one.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

const COOKIE_URL: &str = "https://fc.yahoo.com";
const CRUMB_URL: &str = "https://query1.finance.yahoo.com/v1/test/getcrumb";
const QUOTE_SUMMARY_URL: &str = "https://query1.finance.yahoo.com/v10/finance/quoteSummary";
const MARKET_CAP_MODULES: &str = "price,summaryDetail";

// ============================================================================
// Crumb/Cookie Authentication
// ============================================================================

/// Cached Yahoo authentication data
#[derive(Debug, Clone)]
struct CrumbData {
    cookie: String,
    crumb: String,
}

lazy_static! {
    /// Global cache for Yahoo authentication crumb
    static ref YAHOO_CRUMB: RwLock<Option<CrumbData>> = RwLock::default();
}

// ============================================================================
// Yahoo Provider
// ============================================================================

/// HTTP client settings for [`YahooProvider`].
#[derive(Debug, Clone)]
pub struct YahooConfig {
    /// Whole-request timeout applied by the HTTP client
    pub timeout: Duration,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Yahoo Finance market data provider.
pub struct YahooProvider {
    client: reqwest::Client,
}

impl YahooProvider {
    /// Create a provider with the default client settings.
    pub fn new() -> Result<Self, MarketDataError> {
        Self::with_config(YahooConfig::default())
    }

    /// Create a provider with explicit client settings.
    pub fn with_config(config: YahooConfig) -> Result<Self, MarketDataError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| {
                MarketDataError::provider(
                    PROVIDER_ID,
                    format!("Failed to initialize HTTP client: {}", e),
                )
            })?;
        Ok(Self { client })
    }

    // ========================================================================
    // Crumb/Cookie Authentication
    // ========================================================================

    /// Ensure we have a valid Yahoo authentication crumb.
    async fn ensure_crumb(&self) -> Result<CrumbData, MarketDataError> {
        let cached = YAHOO_CRUMB.read().ok().and_then(|guard| guard.clone());
        if let Some(crumb) = cached {
            return Ok(crumb);
        }

        self.fetch_crumb().await
    }

    /// Fetch a new Yahoo authentication crumb.
    async fn fetch_crumb(&self) -> Result<CrumbData, MarketDataError> {
        debug!("Fetching Yahoo authentication crumb");

        // Step 1: Get cookie from fc.yahoo.com (the response status is irrelevant)
        let response = self
            .client
            .get(COOKIE_URL)
            .send()
            .await
            .map_err(|e| request_error("Failed to get cookie", e))?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(parse_cookie)
            .ok_or_else(|| {
                MarketDataError::provider(PROVIDER_ID, "Failed to parse Yahoo cookie")
            })?;

        // Step 2: Get crumb using cookie
        let crumb = self
            .client
            .get(CRUMB_URL)
            .header(header::COOKIE, &cookie)
            .send()
            .await
            .map_err(|e| request_error("Failed to get crumb", e))?
            .text()
            .await
            .map_err(|e| request_error("Failed to read crumb", e))?;

        let crumb = crumb.trim().to_string();
        if crumb.is_empty() {
            return Err(MarketDataError::provider(
                PROVIDER_ID,
                "Yahoo returned an empty crumb",
            ));
        }

        let crumb_data = CrumbData { cookie, crumb };

        if let Ok(mut guard) = YAHOO_CRUMB.write() {
            *guard = Some(crumb_data.clone());
        }

        Ok(crumb_data)
    }

    /// Clear the cached crumb (used when authentication fails)
    fn clear_crumb(&self) {
        if let Ok(mut guard) = YAHOO_CRUMB.write() {
            *guard = None;
        }
    }

    // ========================================================================
    // Market Cap Fetching
    // ========================================================================

    /// Fetch the `price` and `summaryDetail` modules for a symbol.
    async fn fetch_quote_summary(
        &self,
        symbol: &str,
    ) -> Result<YahooQuoteSummaryResponse, MarketDataError> {
        let crumb = self.ensure_crumb().await?;

        let url = format!(
            "{}/{}?modules={}&crumb={}",
            QUOTE_SUMMARY_URL,
            encode(symbol),
            MARKET_CAP_MODULES,
            encode(&crumb.crumb)
        );

        let response = self
            .client
            .get(&url)
            .header(header::COOKIE, &crumb.cookie)
            .send()
            .await
            .map_err(|e| request_error("quoteSummary request failed", e))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            self.clear_crumb();
        }
        check_status(symbol, status)?;

        response.json().await.map_err(|e| {
            MarketDataError::provider(
                PROVIDER_ID,
                format!("Failed to parse quoteSummary response: {}", e),
            )
        })
    }
}

// ============================================================================
// MarketDataProvider Implementation
// ============================================================================

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_market_cap(&self, symbol: &str) -> Result<MarketCapQuote, MarketDataError> {
        debug!("Fetching market cap for {} from Yahoo", symbol);

        let response = self.fetch_quote_summary(symbol).await?;
        market_cap_quote(symbol, response)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Map a transport failure, keeping timeouts distinguishable.
fn request_error(context: &str, error: reqwest::Error) -> MarketDataError {
    if error.is_timeout() {
        MarketDataError::Timeout {
            provider: PROVIDER_ID.to_string(),
        }
    } else {
        MarketDataError::provider(PROVIDER_ID, format!("{}: {}", context, error))
    }
}

/// Extract the `name=value` pair from a `Set-Cookie` header.
fn parse_cookie(set_cookie: &str) -> Option<String> {
    let pair = set_cookie.split(';').next()?.trim();
    if pair.contains('=') {
        Some(pair.to_string())
    } else {
        None
    }
}

/// Translate a quoteSummary HTTP status into an error, if any.
fn check_status(symbol: &str, status: StatusCode) -> Result<(), MarketDataError> {
    match status {
        s if s.is_success() => Ok(()),
        StatusCode::UNAUTHORIZED => Err(MarketDataError::provider(
            PROVIDER_ID,
            "Yahoo authentication expired",
        )),
        StatusCode::NOT_FOUND => Err(MarketDataError::SymbolNotFound(symbol.to_string())),
        StatusCode::TOO_MANY_REQUESTS => Err(MarketDataError::RateLimited {
            provider: PROVIDER_ID.to_string(),
        }),
        s => Err(MarketDataError::provider(
            PROVIDER_ID,
            format!("Unexpected HTTP status {} for {}", s, symbol),
        )),
    }
}

/// Build a [`MarketCapQuote`] from a parsed quoteSummary response.
fn market_cap_quote(
    symbol: &str,
    response: YahooQuoteSummaryResponse,
) -> Result<MarketCapQuote, MarketDataError> {
    let summary = response.quote_summary;
    if let Some(error) = &summary.error {
        debug!(
            "quoteSummary error for {}: {:?} {:?}",
            symbol, error.code, error.description
        );
    }

    let result = summary
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))?;

    let market_cap = result
        .market_cap()
        .ok_or_else(|| MarketDataError::MissingField {
            field: "marketCap".to_string(),
            symbol: symbol.to_string(),
        })?;

    if !market_cap.is_finite() || market_cap < 0.0 {
        return Err(MarketDataError::ValidationFailed {
            message: format!("Invalid market cap {} for {}", market_cap, symbol),
        });
    }

    let as_of = result
        .price
        .as_ref()
        .and_then(|p| p.regular_market_time)
        .and_then(|ts| Utc.timestamp_opt(ts, 0).single())
        .unwrap_or_else(Utc::now);

    let mut quote = MarketCapQuote::new(symbol, market_cap, PROVIDER_ID).as_of(as_of);
    if let Some(currency) = result.currency() {
        quote = quote.currency(currency);
    }
    Ok(quote)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> YahooQuoteSummaryResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_cookie() {
        assert_eq!(
            parse_cookie("A3=d=AQABBK&S=AQAAAj; Expires=Thu, 01 Jan 2026 00:00:00 GMT; Path=/"),
            Some("A3=d=AQABBK&S=AQAAAj".to_string())
        );
        assert_eq!(parse_cookie("garbage"), None);
    }

    #[test]
    fn test_check_status() {
        assert!(check_status("AAPL", StatusCode::OK).is_ok());
        assert!(matches!(
            check_status("ZZZZ", StatusCode::NOT_FOUND),
            Err(MarketDataError::SymbolNotFound(s)) if s == "ZZZZ"
        ));
        assert!(matches!(
            check_status("AAPL", StatusCode::TOO_MANY_REQUESTS),
            Err(MarketDataError::RateLimited { .. })
        ));
        assert!(matches!(
            check_status("AAPL", StatusCode::UNAUTHORIZED),
            Err(MarketDataError::ProviderError { .. })
        ));
        assert!(matches!(
            check_status("AAPL", StatusCode::BAD_GATEWAY),
            Err(MarketDataError::ProviderError { .. })
        ));
    }

    #[test]
    fn test_market_cap_quote() {
        let response = parse(
            r#"{"quoteSummary": {"result": [{
                "price": {"currency": "USD", "regularMarketTime": 1700000000},
                "summaryDetail": {"marketCap": {"raw": 3000000000000, "fmt": "3T"}}
            }], "error": null}}"#,
        );

        let quote = market_cap_quote("AAPL", response).unwrap();
        assert_eq!(quote.symbol, "AAPL");
        assert_eq!(quote.market_cap, 3.0e12);
        assert_eq!(quote.currency.as_deref(), Some("USD"));
        assert_eq!(quote.as_of.timestamp(), 1_700_000_000);
        assert_eq!(quote.source, PROVIDER_ID);
    }

    #[test]
    fn test_market_cap_quote_missing_field() {
        let response = parse(
            r#"{"quoteSummary": {"result": [{"price": {"currency": "USD"}, "summaryDetail": {}}]}}"#,
        );

        assert!(matches!(
            market_cap_quote("AAPL", response),
            Err(MarketDataError::MissingField { field, .. }) if field == "marketCap"
        ));
    }

    #[test]
    fn test_market_cap_quote_no_result() {
        let response = parse(
            r#"{"quoteSummary": {"result": null, "error": {"code": "Not Found", "description": "Quote not found"}}}"#,
        );
        assert!(matches!(
            market_cap_quote("ZZZZ", response),
            Err(MarketDataError::SymbolNotFound(_))
        ));

        let response = parse(r#"{"quoteSummary": {"result": []}}"#);
        assert!(matches!(
            market_cap_quote("ZZZZ", response),
            Err(MarketDataError::SymbolNotFound(_))
        ));
    }

    #[test]
    fn test_market_cap_quote_rejects_negative() {
        let response = parse(
            r#"{"quoteSummary": {"result": [{"summaryDetail": {"marketCap": {"raw": -5.0}}}]}}"#,
        );
        assert!(matches!(
            market_cap_quote("AAPL", response),
            Err(MarketDataError::ValidationFailed { .. })
        ));
    }

    #[test]
    fn test_default_config() {
        let config = YahooConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_provider_id() {
        let provider = YahooProvider::new().unwrap();
        assert_eq!(provider.id(), "YAHOO");
    }
}
