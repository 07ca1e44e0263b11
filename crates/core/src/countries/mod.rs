//! Static reference dataset of national economies.
//!
//! The table is compiled into the binary, materialised once on first access
//! and shared by reference afterwards. There are no mutation operations.

mod countries_model;
mod dataset;

pub use countries_model::*;
pub use dataset::{find_country, reference_dataset};
