//! End-to-end comparison for one selection.
//!
//! Wires the valuation service, the reference dataset, the classifier and
//! the presentation adapter together.

mod report_model;
mod report_service;
mod report_traits;

pub use report_model::*;
pub use report_service::*;
pub use report_traits::*;
