use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Reference year of the embedded GDP figures
pub const GDP_BASE_YEAR: u16 = 2024;

/// Number of economies in the reference dataset
pub const COUNTRY_COUNT: usize = 50;

/// Base currency units per million
pub const UNITS_PER_MILLION: Decimal = dec!(1000000);

/// Largest market capitalization accepted from a provider, in base units (1e15 USD)
pub const MAX_MARKET_CAP: Decimal = dec!(1000000000000000);

/// Millions per trillion
pub const MILLIONS_PER_TRILLION: Decimal = dec!(1000000);

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
