//! Number formatting for tables, tooltips and titles.

use rust_decimal::Decimal;

use crate::constants::MILLIONS_PER_TRILLION;

pub fn millions_to_trillions(millions: Decimal) -> Decimal {
    millions / MILLIONS_PER_TRILLION
}

/// `$6.00T`-style amount with `decimals` fractional digits.
pub fn format_usd_trillions(trillions: Decimal, decimals: u32) -> String {
    let rounded = trillions.round_dp(decimals);
    let prec = decimals as usize;
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${:.prec$}T", rounded.abs())
    } else {
        format!("${:.prec$}T", rounded.abs())
    }
}

/// `+22,840,000M USD`-style signed amount, rounded to whole millions.
pub fn format_signed_millions(millions: Decimal) -> String {
    let rounded = millions.round_dp(0);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        '-'
    } else {
        '+'
    };
    format!("{}{}M USD", sign, group_thousands(&rounded.abs().trunc().to_string()))
}

/// Insert `,` every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
