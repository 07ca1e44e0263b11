//! Capmap Market Data Crate
//!
//! This crate provides provider-agnostic market capitalization lookups
//! for the capmap application.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |   Domain Layer   |  (ticker symbols from the company catalog)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |    Provider      |  (Yahoo Finance, or a test double)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  MarketCapQuote  |  (capitalization in base currency units)
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`MarketDataProvider`] - Trait every market data source implements
//! - [`MarketCapQuote`] - Latest market capitalization reported for a symbol
//! - [`MarketDataError`] - Failure taxonomy for provider calls
//! - [`YahooProvider`] - Yahoo Finance `quoteSummary` implementation

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{Currency, MarketCapQuote, ProviderId};
pub use provider::yahoo::{YahooConfig, YahooProvider};
pub use provider::MarketDataProvider;
