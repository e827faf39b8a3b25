//! Fixed-point power-of-five tables, derived from the crate's own big integers.
//!
//! The digit generators need, for each relevant `q`, a `B`-bit truncation of `5^q` and a
//! `(B, +1)`-style reciprocal `floor(2^(len(5^q) - 1 + B) / 5^q) + 1`. The reference
//! implementation ships these as large constant arrays; here they are produced by the exact
//! definitions on first use and cached. Being computed from the same formulas the generator
//! script uses, they cannot drift out of sync with the arithmetic that consumes them.

use std::sync::OnceLock;

use crate::bigint::BigUint;

/// Bit width of the `f64` power-of-five approximations.
pub(crate) const DOUBLE_POW5_BITCOUNT: i32 = 125;
/// Bit width of the `f64` reciprocal approximations.
pub(crate) const DOUBLE_POW5_INV_BITCOUNT: i32 = 125;
/// Bit width of the `f32` power-of-five approximations.
pub(crate) const FLOAT_POW5_BITCOUNT: i32 = 61;
/// Bit width of the `f32` reciprocal approximations.
pub(crate) const FLOAT_POW5_INV_BITCOUNT: i32 = 59;

const DOUBLE_POW5_COUNT: usize = 326;
const DOUBLE_POW5_INV_COUNT: usize = 292;
const FLOAT_POW5_COUNT: usize = 47;
const FLOAT_POW5_INV_COUNT: usize = 31;

/// `5^i`, shifted so its bit length is exactly `bitcount` and truncated toward zero.
fn pow5_justified(i: u32, bitcount: i32) -> BigUint {
    let pow = BigUint::from(5_u32).pow(i);
    let bits = pow.bit_length() as i32;
    if bits <= bitcount {
        pow << (bitcount - bits) as usize
    } else {
        pow >> (bits - bitcount) as usize
    }
}

/// `floor(2^(len(5^q) - 1 + bitcount) / 5^q) + 1`, the rounded-up reciprocal the multiply-shift
/// in the digit generator expects.
fn pow5_inverse(q: u32, bitcount: i32) -> BigUint {
    let pow = BigUint::from(5_u32).pow(q);
    let bits = pow.bit_length() as i32;
    let numerator = BigUint::from(1_u32) << (bits - 1 + bitcount) as usize;
    numerator / &pow + &BigUint::from(1_u32)
}

/// Splits a value of at most 128 bits into `(low, high)` 64-bit halves.
fn split_u128(value: &BigUint) -> (u64, u64) {
    let limb = |i: usize| -> u64 {
        value.limbs().get(i).copied().unwrap_or(0) as u64
    };
    (limb(0) | limb(1) << 32, limb(2) | limb(3) << 32)
}

/// 128-bit truncations of `5^i` for `d2d`'s negative-exponent path.
pub(crate) fn double_pow5(i: usize) -> (u64, u64) {
    static TABLE: OnceLock<Vec<(u64, u64)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        (0..DOUBLE_POW5_COUNT)
            .map(|i| split_u128(&pow5_justified(i as u32, DOUBLE_POW5_BITCOUNT)))
            .collect()
    })[i]
}

/// 128-bit reciprocals of `5^q` for `d2d`'s non-negative-exponent path.
pub(crate) fn double_pow5_inv(q: usize) -> (u64, u64) {
    static TABLE: OnceLock<Vec<(u64, u64)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        (0..DOUBLE_POW5_INV_COUNT)
            .map(|q| split_u128(&pow5_inverse(q as u32, DOUBLE_POW5_INV_BITCOUNT)))
            .collect()
    })[q]
}

/// 61-bit truncations of `5^i` for `f2d`.
pub(crate) fn float_pow5(i: usize) -> u64 {
    static TABLE: OnceLock<Vec<u64>> = OnceLock::new();
    TABLE.get_or_init(|| {
        (0..FLOAT_POW5_COUNT)
            .map(|i| split_u128(&pow5_justified(i as u32, FLOAT_POW5_BITCOUNT)).0)
            .collect()
    })[i]
}

/// 59-bit reciprocals of `5^q` for `f2d`.
pub(crate) fn float_pow5_inv(q: usize) -> u64 {
    static TABLE: OnceLock<Vec<u64>> = OnceLock::new();
    TABLE.get_or_init(|| {
        (0..FLOAT_POW5_INV_COUNT)
            .map(|q| split_u128(&pow5_inverse(q as u32, FLOAT_POW5_INV_BITCOUNT)).0)
            .collect()
    })[q]
}
