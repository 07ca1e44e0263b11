//! Yahoo Finance API response models.
//!
//! These models are used for parsing the quoteSummary API responses,
//! restricted to the `price` and `summaryDetail` modules.

use serde::Deserialize;

/// Main response wrapper for quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResponse {
    pub quote_summary: YahooQuoteSummary,
}

/// Quote summary container
///
/// Yahoo sends `"result": null` together with an `error` object for unknown
/// symbols, so both fields are optional.
#[derive(Debug, Deserialize)]
pub struct YahooQuoteSummary {
    #[serde(default)]
    pub result: Option<Vec<YahooQuoteSummaryResult>>,
    #[serde(default)]
    pub error: Option<YahooApiError>,
}

/// Error object embedded in quoteSummary responses
#[derive(Debug, Deserialize)]
pub struct YahooApiError {
    pub code: Option<String>,
    pub description: Option<String>,
}

/// Individual result from quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResult {
    pub price: Option<YahooPriceData>,
    pub summary_detail: Option<YahooSummaryDetail>,
}

/// Price data from quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooPriceData {
    pub currency: Option<String>,
    pub market_cap: Option<YahooPriceDetail>,
    pub regular_market_time: Option<i64>,
}

/// Price detail with raw and formatted values
#[derive(Debug, Deserialize, Clone)]
pub struct YahooPriceDetail {
    pub raw: Option<f64>,
    // Note: fmt field exists but we only use raw values
}

/// Summary detail data (financial metrics)
/// Yahoo returns these as nested objects like {"raw": 123.45, "fmt": "123.45"}
/// or empty objects {} when no data is available.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooSummaryDetail {
    pub market_cap: Option<YahooPriceDetail>,
    pub currency: Option<String>,
}

impl YahooQuoteSummaryResult {
    /// Market capitalization, preferring `summaryDetail` over `price`.
    pub fn market_cap(&self) -> Option<f64> {
        let from_detail = self
            .summary_detail
            .as_ref()
            .and_then(|d| d.market_cap.as_ref())
            .and_then(|d| d.raw);
        let from_price = || {
            self.price
                .as_ref()
                .and_then(|p| p.market_cap.as_ref())
                .and_then(|d| d.raw)
        };
        from_detail.or_else(from_price)
    }

    /// Reporting currency, preferring `price` over `summaryDetail`.
    pub fn currency(&self) -> Option<String> {
        self.price
            .as_ref()
            .and_then(|p| p.currency.clone())
            .or_else(|| self.summary_detail.as_ref().and_then(|d| d.currency.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_price_detail() {
        let json = r#"{"raw": 150.25, "fmt": "150.25"}"#;
        let detail: YahooPriceDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.raw, Some(150.25));
    }

    #[test]
    fn test_deserialize_price_detail_null() {
        let json = r#"{"raw": null, "fmt": null}"#;
        let detail: YahooPriceDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.raw, None);
    }

    #[test]
    fn test_market_cap_from_summary_detail() {
        let json = r#"{
            "price": {
                "currency": "USD",
                "longName": "Apple Inc.",
                "marketCap": {"raw": 2700000000000, "fmt": "2.7T"},
                "regularMarketTime": 1700000000
            },
            "summaryDetail": {
                "marketCap": {"raw": 2800000000000, "fmt": "2.8T"},
                "currency": "USD"
            }
        }"#;
        let result: YahooQuoteSummaryResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.market_cap(), Some(2800000000000.0));
        assert_eq!(result.currency().as_deref(), Some("USD"));
    }

    #[test]
    fn test_market_cap_falls_back_to_price() {
        // Yahoo returns empty objects {} for fields with no data
        let json = r#"{
            "price": {"marketCap": {"raw": 1000000000000, "fmt": "1T"}},
            "summaryDetail": {"marketCap": {}}
        }"#;
        let result: YahooQuoteSummaryResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.market_cap(), Some(1000000000000.0));
        assert_eq!(result.currency(), None);
    }

    #[test]
    fn test_market_cap_absent() {
        let json = r#"{"price": {"shortName": "Some Fund"}}"#;
        let result: YahooQuoteSummaryResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.market_cap(), None);
    }

    #[test]
    fn test_deserialize_not_found_response() {
        let json = r#"{
            "quoteSummary": {
                "result": null,
                "error": {"code": "Not Found", "description": "Quote not found for symbol: ZZZZ"}
            }
        }"#;
        let response: YahooQuoteSummaryResponse = serde_json::from_str(json).unwrap();
        assert!(response.quote_summary.result.is_none());
        let error = response.quote_summary.error.unwrap();
        assert_eq!(error.code.as_deref(), Some("Not Found"));
    }
}
