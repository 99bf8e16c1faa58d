//! # Fixed-Point Arithmetic
//!
//! Deterministic fixed-point math for all price and payout computations.
//!
//! ## Representation
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                                                              │
//! │   value = mantissa / SCALE,   SCALE = 1_000_000              │
//! │                                                              │
//! │   1.0   → 1_000_000                                          │
//! │   1.15  → 1_150_000                                          │
//! │   0.5   →   500_000                                          │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Six implied decimal places, carried as `u64` integers. Every monetary
//! quantity and every rate that crosses the program boundary uses this
//! representation.
//!
//! ## Rounding
//!
//! Multiplication truncates (floor), exactly once per operation. Repeated
//! operations therefore never accumulate drift beyond one unit per step,
//! and two validators computing the same product always agree.
//!
//! Overflow is a hard error (`ArithmeticOverflow`), never a wrapped value.

use anchor_lang::prelude::*;

/// Errors raised by fixed-point operations
#[error_code]
pub enum MathError {
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}

/// Number of implied decimal places carried by every fixed-point value
pub const FP_DECIMALS: u32 = 6;

/// Fixed-point scale factor (10^6); the mantissa of 1.0
pub const SCALE: u64 = 1_000_000;

/// Scaled multiplication with floor semantics
///
/// Computes `(a * b) / SCALE` through a `u128` intermediate so the raw
/// product cannot overflow. The single division truncates toward zero.
///
/// # Example
/// ```ignore
/// // 10_000 units at a 1.15 rate
/// let next = mul(10_000, 1_150_000)?; // 11_500
/// ```
pub fn mul(a: u64, b: u64) -> Result<u64> {
    let wide = (a as u128)
        .checked_mul(b as u128)
        .ok_or(MathError::ArithmeticOverflow)?
        / SCALE as u128;
    u64::try_from(wide).map_err(|_| error!(MathError::ArithmeticOverflow))
}

/// Integer exponentiation by repeated scaled multiplication
///
/// `pow(x, 0)` is 1.0 (`SCALE`). Each step truncates once, the same way a
/// sequence of `mul` calls would, so `pow(g, n)` equals the price factor
/// reached after `n` individual advances.
pub fn pow(base: u64, exp: u32) -> Result<u64> {
    let mut result = SCALE;
    for _ in 0..exp {
        result = mul(result, base)?;
    }
    Ok(result)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_identity() {
        assert_eq!(mul(123_456, SCALE).unwrap(), 123_456);
        assert_eq!(mul(SCALE, SCALE).unwrap(), SCALE);
        assert_eq!(mul(0, SCALE).unwrap(), 0);
    }

    #[test]
    fn test_mul_truncates() {
        // 1 * 1 raw units = 1/SCALE^2 of a whole, floors to zero
        assert_eq!(mul(1, 1).unwrap(), 0);
        // 10_000 * 1.15 = 11_500 exactly
        assert_eq!(mul(10_000, 1_150_000).unwrap(), 11_500);
        // 3 * 0.5 = 1.5, floors to 1
        assert_eq!(mul(3, 500_000).unwrap(), 1);
    }

    #[test]
    fn test_mul_overflow_is_error() {
        assert!(mul(u64::MAX, u64::MAX).is_err());
        // Largest product that still fits back into u64
        assert!(mul(u64::MAX, SCALE).is_ok());
        assert!(mul(u64::MAX, SCALE + 1).is_err());
    }

    #[test]
    fn test_pow_zero_is_one() {
        assert_eq!(pow(1_150_000, 0).unwrap(), SCALE);
        assert_eq!(pow(0, 0).unwrap(), SCALE);
    }

    #[test]
    fn test_pow_growth_factors() {
        // 1.15^1 and 1.15^2 at six decimals
        assert_eq!(pow(1_150_000, 1).unwrap(), 1_150_000);
        assert_eq!(pow(1_150_000, 2).unwrap(), 1_322_500);
        // 2.0^10 = 1024.0
        assert_eq!(pow(2_000_000, 10).unwrap(), 1_024_000_000);
    }

    #[test]
    fn test_pow_matches_repeated_mul() {
        let g = 1_071_773; // ~1.0718, deliberately inexact under truncation
        let mut acc = SCALE;
        for n in 0..20u32 {
            assert_eq!(pow(g, n).unwrap(), acc);
            acc = mul(acc, g).unwrap();
        }
    }
}
