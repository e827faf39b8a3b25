//! Property-based tests for the numeric core.
//!
//! The limb arithmetic is checked against `u128` reference math on values small enough to fit,
//! the conversions are checked by round-tripping: shortest float formatting must reproduce the
//! exact bit pattern, which is the defining property of the Ryu digits plus correctly rounded
//! parsing.

use proptest::prelude::*;

use hamon::bigint::{BigInt, BigUint};
use hamon::charconv::{
    from_chars, from_chars_f32, from_chars_f64, to_chars, to_chars_f32, to_chars_f64,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    #[test]
    fn biguint_add_matches_u128(a in any::<u64>(), b in any::<u64>()) {
        let sum = BigUint::from(a) + &BigUint::from(b);
        prop_assert_eq!(sum, BigUint::from(a as u128 + b as u128));
    }

    #[test]
    fn biguint_mul_matches_u128(a in any::<u64>(), b in any::<u64>()) {
        let product = BigUint::from(a) * &BigUint::from(b);
        prop_assert_eq!(product, BigUint::from(a as u128 * b as u128));
    }

    #[test]
    fn biguint_div_rem_matches_u128(a in any::<u128>(), b in 1_u128..) {
        let (quotient, remainder) = BigUint::from(a).div_rem(&BigUint::from(b));
        prop_assert_eq!(quotient, BigUint::from(a / b));
        prop_assert_eq!(remainder, BigUint::from(a % b));
    }

    #[test]
    fn biguint_sub_round_trips(a in any::<u128>(), b in any::<u128>()) {
        let (high, low) = if a >= b { (a, b) } else { (b, a) };
        let difference = BigUint::from(high) - &BigUint::from(low);
        prop_assert_eq!(difference + &BigUint::from(low), BigUint::from(high));
    }

    #[test]
    fn biguint_shift_round_trips(a in any::<u128>(), shift in 0_usize..512) {
        let shifted = (BigUint::from(a) << shift) >> shift;
        prop_assert_eq!(shifted, BigUint::from(a));
    }

    #[test]
    fn biguint_order_matches_u128(a in any::<u128>(), b in any::<u128>()) {
        prop_assert_eq!(BigUint::from(a).cmp(&BigUint::from(b)), a.cmp(&b));
    }

    #[test]
    fn bigint_decimal_string_round_trips(value in any::<i128>()) {
        let big = BigInt::from(value);
        prop_assert_eq!(big.clone().to_string().parse::<BigInt>().unwrap(), big.clone());
        prop_assert_eq!(big.to_string(), value.to_string());
    }

    #[test]
    fn int_chars_round_trips(value in any::<i64>(), radix in 2_u32..=36) {
        let mut buffer = [0_u8; 80];
        let len = to_chars(&mut buffer, value, radix).unwrap();
        let (parsed, consumed) = from_chars::<i64>(&buffer[..len], radix).unwrap();
        prop_assert_eq!(parsed, value);
        prop_assert_eq!(consumed, len);
    }

    #[test]
    fn f64_shortest_round_trips(bits in any::<u64>()) {
        let value = f64::from_bits(bits);
        prop_assume!(value.is_finite());

        let mut buffer = [0_u8; 64];
        let len = to_chars_f64(&mut buffer, value).unwrap();
        let (parsed, consumed) = from_chars_f64(&buffer[..len]).unwrap();

        prop_assert_eq!(consumed, len);
        prop_assert_eq!(parsed.to_bits(), value.to_bits());
    }

    #[test]
    fn f32_shortest_round_trips(bits in any::<u32>()) {
        let value = f32::from_bits(bits);
        prop_assume!(value.is_finite());

        let mut buffer = [0_u8; 64];
        let len = to_chars_f32(&mut buffer, value).unwrap();
        let (parsed, consumed) = from_chars_f32(&buffer[..len]).unwrap();

        prop_assert_eq!(consumed, len);
        prop_assert_eq!(parsed.to_bits(), value.to_bits());
    }

    #[test]
    fn f64_parse_agrees_with_std(value in any::<f64>()) {
        prop_assume!(value.is_finite());
        let text = format!("{value:e}");
        let (parsed, consumed) = from_chars_f64(text.as_bytes()).unwrap();
        prop_assert_eq!(consumed, text.len());
        prop_assert_eq!(parsed.to_bits(), value.to_bits());
    }
}
