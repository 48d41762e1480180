//! Monetary rounding helpers.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts in Tallybook are `rust_decimal::Decimal`; this module fixes
//! the precision and rounding strategy used whenever an amount is derived
//! by multiplication (line subtotals, percentages).

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Number of decimal places for monetary amounts.
pub const MONEY_DP: u32 = 2;

/// Round a monetary value using Banker's Rounding.
///
/// Uses `RoundingStrategy::MidpointNearestEven` (Banker's Rounding) which:
/// - Rounds 2.125 → 2.12 (to nearest even at 2 decimals)
/// - Rounds 2.135 → 2.14 (to nearest even at 2 decimals)
///
/// Plain addition of already-rounded amounts never needs re-rounding:
/// decimal addition is exact.
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointNearestEven)
}
