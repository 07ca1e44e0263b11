//! Comparison domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::countries::CountryRecord;

/// Which side of the comparison is larger for one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComparisonState {
    ValuationExceedsGdp,
    GdpExceedsValuation,
}

impl ComparisonState {
    /// Classify a signed `gdp - valuation` difference. Zero counts as GDP-dominant.
    pub fn from_difference(difference: Decimal) -> Self {
        if difference >= Decimal::ZERO {
            Self::GdpExceedsValuation
        } else {
            Self::ValuationExceedsGdp
        }
    }

    /// Value on the diverging colour scale.
    pub fn color_value(&self) -> i8 {
        match self {
            Self::ValuationExceedsGdp => -1,
            Self::GdpExceedsValuation => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ValuationExceedsGdp => "Companies > GDP",
            Self::GdpExceedsValuation => "GDP > Companies",
        }
    }
}

/// One country's GDP set against the aggregate selected valuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub country: CountryRecord,
    /// Aggregate valuation, in millions of USD
    pub total_valuation: Decimal,
    /// `country.gdp - total_valuation`, in millions of USD
    pub difference: Decimal,
    pub state: ComparisonState,
}
