//! Error types for the market data crate.
//!
//! Callers in the domain layer collapse every variant into a single
//! "valuation unavailable" outcome; the variants exist so that the
//! collapse can be logged with a useful reason.

use thiserror::Error;

/// Errors that can occur during market data operations.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol was not found by the provider.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The provider answered but the response lacks a required field.
    #[error("Missing field '{field}' for {symbol}")]
    MissingField {
        /// Field name as reported by the provider
        field: String,
        /// Symbol that was requested
        symbol: String,
    },

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider returned data that failed validation checks.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Build a `ProviderError` for the given provider id.
    pub fn provider(provider: &str, message: impl Into<String>) -> Self {
        Self::ProviderError {
            provider: provider.to_string(),
            message: message.into(),
        }
    }

    /// Whether the failure means the symbol itself is unknown or unusable,
    /// as opposed to a transport or availability problem.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::SymbolNotFound(_) | Self::MissingField { .. } | Self::ValidationFailed { .. }
        )
    }
}
