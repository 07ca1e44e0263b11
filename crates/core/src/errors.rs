//! Core error types for the capmap application.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the comparison core.
///
/// Failed valuation lookups are deliberately absent: they are collapsed to a
/// zero capitalization by the valuation service and never surface here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown company '{0}'. Expected one of: {1}")]
    UnknownCompany(String, String),

    #[error("Select at least one company")]
    EmptySelection,

    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
}
