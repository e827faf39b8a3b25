#![cfg(test)]

use super::tables::*;
use super::*;
use crate::num::{FloatBits32, FloatBits64};

/// Spot checks against the first entries of the reference implementation's constant tables.
#[test]
fn test_table_construction() {
    assert_eq!(double_pow5(0), (0, 1152921504606846976), "5^0 left-justified to 125 bits.");
    assert_eq!(double_pow5(1), (0, 1441151880758558720));
    assert_eq!(double_pow5_inv(0), (1, 2305843009213693952));
    assert_eq!(float_pow5(0), 1152921504606846976);
    assert_eq!(float_pow5(1), 1441151880758558720);
    assert_eq!(float_pow5_inv(0), 576460752303423489);

    // The last entries each generator can request must exist.
    let _ = double_pow5(325);
    let _ = double_pow5_inv(291);
    let _ = float_pow5(46);
    let _ = float_pow5_inv(30);
}

fn shortest64(value: f64) -> (u64, i32) {
    let bits = FloatBits64::from_float(value);
    let decimal = d2d(bits.mantissa(), bits.biased_exponent());
    (decimal.mantissa, decimal.exponent)
}

fn shortest32(value: f32) -> (u32, i32) {
    let bits = FloatBits32::from_float(value);
    let decimal = f2d(bits.mantissa(), bits.biased_exponent());
    (decimal.mantissa, decimal.exponent)
}

#[test]
fn test_d2d_basic() {
    assert_eq!(shortest64(1.0), (1, 0));
    assert_eq!(shortest64(0.1), (1, -1));
    assert_eq!(shortest64(0.3), (3, -1));
    assert_eq!(shortest64(123.456), (123456, -3));
    assert_eq!(shortest64(1e20), (1, 20));
    assert_eq!(shortest64(3.141592653589793), (3141592653589793, -15));
}

#[test]
fn test_d2d_extremes() {
    // Smallest positive subnormal: only one digit needed.
    assert_eq!(shortest64(f64::from_bits(1)), (5, -324));
    // Smallest normal.
    assert_eq!(shortest64(2.2250738585072014e-308), (22250738585072014, -324));
    // Largest finite.
    assert_eq!(shortest64(f64::MAX), (17976931348623157, 292));
    // 2^53: every digit is needed.
    assert_eq!(shortest64(9007199254740992.0), (9007199254740992, 0));
}

#[test]
fn test_f2d_basic() {
    assert_eq!(shortest32(1.0), (1, 0));
    assert_eq!(shortest32(0.3), (3, -1));
    assert_eq!(shortest32(0.33333334), (33333334, -8));
    assert_eq!(shortest32(1e20), (1, 20));
}

#[test]
fn test_f2d_extremes() {
    assert_eq!(shortest32(f32::from_bits(1)), (1, -45));
    assert_eq!(shortest32(f32::MAX), (34028235, 31));
    assert_eq!(shortest32(16777216.0), (16777216, 0));
}

#[test]
fn test_digit_counts() {
    assert_eq!(decimal_length17(1), 1);
    assert_eq!(decimal_length17(9), 1);
    assert_eq!(decimal_length17(10), 2);
    assert_eq!(decimal_length17(17976931348623157), 17);
    assert_eq!(decimal_length9(999_999_999), 9);
    assert_eq!(decimal_length9(0), 1);
}
