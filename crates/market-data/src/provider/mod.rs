//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait that all providers implement
//! - The Yahoo Finance provider
//!
//! The domain layer only sees the trait, so alternate sources (or test
//! doubles) can be swapped in without touching the valuation logic.

mod traits;

pub mod yahoo;

pub use traits::MarketDataProvider;
