//! Money rounding and display helpers.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Cost figures are `rust_decimal::Decimal` end to end; these helpers only
//! decide how a finished figure is rounded and rendered.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places shown for every cost figure.
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Rounds a cost figure to display precision using Banker's Rounding.
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven)
}

/// Renders a cost figure with exactly two decimal places.
///
/// ```
/// use rust_decimal_macros::dec;
/// use costline_shared::types::format_amount;
///
/// assert_eq!(format_amount(dec!(10)), "10.00");
/// assert_eq!(format_amount(dec!(3.14159)), "3.14");
/// ```
#[must_use]
pub fn format_amount(value: Decimal) -> String {
    let mut rounded = round_money(value);
    rounded.rescale(DISPLAY_DECIMAL_PLACES);
    rounded.to_string()
}

/// Renders a cost figure followed by a currency symbol, e.g. `"12.50 EGP"`.
#[must_use]
pub fn format_currency(value: Decimal, symbol: &str) -> String {
    if symbol.is_empty() {
        return format_amount(value);
    }
    format!("{} {symbol}", format_amount(value))
}
