//! Capmap Core - reference data, valuation fetching, classification and
//! presentation models.
//!
//! Control flow for one selection:
//!
//! ```text
//! selection -> ValuationService -> total_valuation -> classify -> presentation
//! ```
//!
//! Network access is confined to the [`valuations`] module, which talks to a
//! `capmap_market_data::MarketDataProvider`. Everything else is pure.

pub mod companies;
pub mod comparison;
pub mod constants;
pub mod countries;
pub mod errors;
pub mod presentation;
pub mod report;
pub mod valuations;

pub use companies::{Company, CATALOG};
pub use comparison::{classify, to_millions, total_valuation, ComparisonRow, ComparisonState};
pub use countries::{reference_dataset, CountryRecord};
pub use report::{ComparisonReport, ReportService, ReportServiceTrait};
pub use valuations::{
    CompanyValuation, ValuationService, ValuationServiceTrait, ValuationStatus, Valuations,
};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
