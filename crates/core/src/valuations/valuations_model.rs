//! Valuation domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::companies::Company;

/// Whether a capitalization came from the provider or was substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValuationStatus {
    Available,
    Unavailable,
}

/// Market capitalization of one selected company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyValuation {
    /// Company display name
    pub name: String,
    /// Ticker used for the lookup
    pub ticker: String,
    /// Capitalization in USD base units; zero when unavailable
    pub capitalization: Decimal,
    /// Diagnostic only, never consulted by the classifier
    pub status: ValuationStatus,
}

impl CompanyValuation {
    pub fn available(company: &Company, capitalization: Decimal) -> Self {
        Self {
            name: company.name.to_string(),
            ticker: company.ticker.to_string(),
            capitalization,
            status: ValuationStatus::Available,
        }
    }

    pub fn unavailable(company: &Company) -> Self {
        Self {
            name: company.name.to_string(),
            ticker: company.ticker.to_string(),
            capitalization: Decimal::ZERO,
            status: ValuationStatus::Unavailable,
        }
    }
}

/// Company -> capitalization mapping for one selection, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Valuations {
    entries: Vec<CompanyValuation>,
}

impl Valuations {
    /// Build from entries; a later entry with an already-seen ticker replaces it.
    pub fn new(entries: impl IntoIterator<Item = CompanyValuation>) -> Self {
        let mut valuations = Self::default();
        for entry in entries {
            valuations.insert(entry);
        }
        valuations
    }

    pub fn insert(&mut self, entry: CompanyValuation) {
        match self.entries.iter_mut().find(|e| e.ticker == entry.ticker) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn get(&self, ticker: &str) -> Option<&CompanyValuation> {
        self.entries.iter().find(|e| e.ticker == ticker)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompanyValuation> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Company display names, in selection order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Number of companies whose lookup failed.
    pub fn unavailable_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.status == ValuationStatus::Unavailable)
            .count()
    }
}

impl<'a> IntoIterator for &'a Valuations {
    type Item = &'a CompanyValuation;
    type IntoIter = std::slice::Iter<'a, CompanyValuation>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
