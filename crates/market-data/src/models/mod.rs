//! Market data models
//!
//! - `types` - Type aliases for common identifiers (ProviderId, Currency)
//! - `quote` - Market capitalization quote (MarketCapQuote)

mod quote;
mod types;

pub use quote::MarketCapQuote;
pub use types::{Currency, ProviderId};
