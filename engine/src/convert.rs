//! Widened rational conversion with floor rounding.
//!
//! All intermediate products are computed in `u128` — double the balance
//! width — so `amount * coefficient` can never wrap. Rounding is always
//! floor on both paths: deposits can never mint more synthetic value than
//! the collateral received, and because withdrawal is the algebraic inverse
//! under its own floor, a round trip may return less than was deposited but
//! never more. That asymmetry is deliberate.

use crate::error::EngineError;
use synbtc_rates::Coefficient;

/// Synthetic units minted for `amount` deposited base units:
/// `floor(amount * numerator / denominator)`.
pub fn to_synthetic(amount: u64, coefficient: Coefficient) -> Result<u64, EngineError> {
    // Denominator is validated non-zero at coefficient construction.
    let wide = amount as u128 * coefficient.numerator() as u128;
    u64::try_from(wide / coefficient.denominator() as u128)
        .map_err(|_| EngineError::ArithmeticOverflow)
}

/// Base units returned for `amount` burned synthetic units:
/// `floor(amount * denominator / numerator)`.
///
/// A zero numerator makes withdrawal undefined (nothing was mintable
/// against it); the division fails closed instead of panicking.
pub fn to_base(amount: u64, coefficient: Coefficient) -> Result<u64, EngineError> {
    let wide = amount as u128 * coefficient.denominator() as u128;
    let returned = wide
        .checked_div(coefficient.numerator() as u128)
        .ok_or(EngineError::ArithmeticOverflow)?;
    u64::try_from(returned).map_err(|_| EngineError::ArithmeticOverflow)
}
