//! Country domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One economy of the reference dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    /// ISO 3166-1 alpha-3 code, unique within the dataset
    pub code: String,
    /// Display name
    pub name: String,
    /// GDP for the base year, in millions of USD
    pub gdp: Decimal,
}

impl CountryRecord {
    pub fn new(code: impl Into<String>, name: impl Into<String>, gdp: Decimal) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            gdp,
        }
    }
}
