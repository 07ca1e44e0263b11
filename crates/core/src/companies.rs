//! The fixed catalog of selectable companies.

use serde::Serialize;

use crate::errors::{Error, Result};

/// A selectable company and the ticker used to look up its valuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Company {
    /// Display name
    pub name: &'static str,
    /// Exchange ticker passed to the market data provider
    pub ticker: &'static str,
    /// Extra lowercase identifiers accepted on input
    #[serde(skip)]
    pub aliases: &'static [&'static str],
}

/// Every company the user can choose from, in display order.
pub const CATALOG: [Company; 5] = [
    Company {
        name: "Apple",
        ticker: "AAPL",
        aliases: &[],
    },
    Company {
        name: "Microsoft",
        ticker: "MSFT",
        aliases: &[],
    },
    Company {
        name: "Amazon",
        ticker: "AMZN",
        aliases: &[],
    },
    Company {
        name: "Google (Alphabet)",
        ticker: "GOOGL",
        aliases: &["google", "alphabet"],
    },
    Company {
        name: "Nvidia",
        ticker: "NVDA",
        aliases: &[],
    },
];

impl Company {
    /// Resolve a company by display name, ticker or alias, ignoring case.
    pub fn from_identifier(identifier: &str) -> Result<Company> {
        let needle = identifier.trim().to_lowercase();
        CATALOG
            .iter()
            .find(|c| c.matches(&needle))
            .copied()
            .ok_or_else(|| Error::UnknownCompany(identifier.to_string(), catalog_listing()))
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase() == needle
            || self.ticker.to_lowercase() == needle
            || self.aliases.iter().any(|alias| *alias == needle)
    }

    /// Position in [`CATALOG`]; used to keep selections in display order.
    pub fn catalog_index(&self) -> usize {
        CATALOG
            .iter()
            .position(|c| c.ticker == self.ticker)
            .unwrap_or(CATALOG.len())
    }
}

/// Parse user identifiers into a de-duplicated selection in catalog order.
///
/// An empty input yields an empty selection; rejecting that is up to the caller.
pub fn parse_selection<S: AsRef<str>>(identifiers: &[S]) -> Result<Vec<Company>> {
    let mut selection = Vec::with_capacity(identifiers.len());
    for identifier in identifiers {
        let company = Company::from_identifier(identifier.as_ref())?;
        if !selection.contains(&company) {
            selection.push(company);
        }
    }
    selection.sort_by_key(Company::catalog_index);
    Ok(selection)
}

/// "Apple (AAPL), Microsoft (MSFT), ..." for error messages and help text.
pub fn catalog_listing() -> String {
    CATALOG
        .iter()
        .map(|c| format!("{} ({})", c.name, c.ticker))
        .collect::<Vec<_>>()
        .join(", ")
}
