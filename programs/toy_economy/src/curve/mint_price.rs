//! # Mint Price Computation
//!
//! The price of the next mint is a pure function of how many mints have
//! already happened:
//!
//! ```text
//! price(n) = min(max_price, min_price * growth_rate^n)
//! ```
//!
//! The item account stores only the mint count; the current price is always
//! recomputed from it. Nothing ever caches a price independently of the
//! count, so there is no stale-price state to keep consistent.
//!
//! Monotonicity follows directly: `growth_rate >= 1.0`, so the factor is
//! non-decreasing in `n`, and the cap keeps the price inside the configured
//! bounds.

use anchor_lang::prelude::*;

use crate::curve::fixed_point;

/// Current mint price for an item after `mint_count` successful purchases
///
/// # Arguments
/// * `min_price` - Price of the very first mint (fixed-point units)
/// * `max_price` - Hard cap the price never exceeds
/// * `growth_rate` - Per-mint multiplier, fixed-point, `>= 1.0`
/// * `mint_count` - Number of purchases recorded so far
///
/// # Example
/// ```ignore
/// // min 10_000, cap 100_000_000, growth 1.15
/// let p0 = mint_price(10_000, 100_000_000, 1_150_000, 0)?; // 10_000
/// let p1 = mint_price(10_000, 100_000_000, 1_150_000, 1)?; // 11_500
/// let p2 = mint_price(10_000, 100_000_000, 1_150_000, 2)?; // 13_225
/// ```
pub fn mint_price(
    min_price: u64,
    max_price: u64,
    growth_rate: u64,
    mint_count: u32,
) -> Result<u64> {
    let factor = fixed_point::pow(growth_rate, mint_count)?;
    Ok(fixed_point::mul(min_price, factor)?.min(max_price))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::fixed_point::SCALE;

    const MIN: u64 = 10_000;
    const MAX: u64 = 100_000_000;
    const GROWTH: u64 = 1_150_000; // 1.15

    #[test]
    fn test_first_mint_is_min_price() {
        assert_eq!(mint_price(MIN, MAX, GROWTH, 0).unwrap(), MIN);
    }

    #[test]
    fn test_advances_match_curve() {
        assert_eq!(mint_price(MIN, MAX, GROWTH, 1).unwrap(), 11_500);
        assert_eq!(mint_price(MIN, MAX, GROWTH, 2).unwrap(), 13_225);
    }

    #[test]
    fn test_price_is_monotonic() {
        let mut last = 0u64;
        for n in 0..100u32 {
            let p = mint_price(MIN, MAX, GROWTH, n).unwrap();
            assert!(p >= last, "price regressed at mint {n}");
            last = p;
        }
    }

    #[test]
    fn test_price_never_exceeds_cap() {
        // 1.15^67 * 10_000 > 100M, so the cap binds well before n = 100
        for n in 0..100u32 {
            assert!(mint_price(MIN, MAX, GROWTH, n).unwrap() <= MAX);
        }
        assert_eq!(mint_price(MIN, MAX, GROWTH, 99).unwrap(), MAX);
    }

    #[test]
    fn test_flat_curve_at_unit_growth() {
        // growth 1.0 keeps the price pinned at min_price
        for n in 0..10u32 {
            assert_eq!(mint_price(MIN, MAX, SCALE, n).unwrap(), MIN);
        }
    }

    #[test]
    fn test_overflow_surfaces_as_error() {
        // A steep curve with no effective cap eventually overflows the
        // factor representation; the error must be typed, not wrapped.
        let steep = 2_000_000; // 2.0
        assert!(mint_price(MIN, u64::MAX, steep, 64).is_err());
    }
}
