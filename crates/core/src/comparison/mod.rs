//! Aggregation and classification of valuations against GDP.

mod classifier;
mod comparison_model;

pub use classifier::{classify, to_millions, total_valuation};
pub use comparison_model::*;
