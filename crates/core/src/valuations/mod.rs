//! Valuation fetching.
//!
//! This module turns a company selection into one capitalization per
//! company. Provider failures never escape: they become a zero
//! capitalization flagged [`ValuationStatus::Unavailable`].

mod valuations_model;
mod valuations_service;
mod valuations_traits;

pub use valuations_model::*;
pub use valuations_service::*;
pub use valuations_traits::*;
