//! # Conversion policy
//!
//! Converts a native amount into reference-currency units with integer
//! arithmetic only:
//!
//! ```text
//! shift     = rate_decimals + native_decimals - REFERENCE_DECIMALS
//! reference = native_amount * rate / 10^shift      (shift >= 0, floor)
//! reference = native_amount * rate * 10^(-shift)   (shift <  0, exact)
//! ```
//!
//! Division truncates toward zero, which is floor for the non-negative
//! operands accepted here. An amount that lands a fraction below the minimum
//! is rejected, never rounded up.

/// Decimal precision of reference-currency amounts.
pub const REFERENCE_DECIMALS: u32 = 18;

/// Smallest accepted contribution: 50 reference units.
pub const MINIMUM_REFERENCE_AMOUNT: i128 = 50 * 1_000_000_000_000_000_000;

/// Convert `native_amount` to reference units. `None` on overflow.
pub fn to_reference_amount(
    native_amount: i128,
    rate: i128,
    rate_decimals: u32,
    native_decimals: u32,
) -> Option<i128> {
    let product = native_amount.checked_mul(rate)?;
    let scale = rate_decimals.checked_add(native_decimals)?;

    if scale >= REFERENCE_DECIMALS {
        let divisor = 10i128.checked_pow(scale - REFERENCE_DECIMALS)?;
        product.checked_div(divisor)
    } else {
        let multiplier = 10i128.checked_pow(REFERENCE_DECIMALS - scale)?;
        product.checked_mul(multiplier)
    }
}

#[inline]
pub fn meets_minimum(reference_amount: i128) -> bool {
    reference_amount >= MINIMUM_REFERENCE_AMOUNT
}
