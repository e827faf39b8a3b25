#![cfg(test)]

use super::*;

#[test]
fn test_parse_and_format_decimal() {
    let value: BigUint = "340282366920938463463374607431768211455".parse().unwrap();
    assert_eq!(value, BigUint::from(u128::MAX));
    assert_eq!(value.to_string(), "340282366920938463463374607431768211455");

    assert_eq!("0".parse::<BigUint>().unwrap(), BigUint::new());
    assert_eq!("+42".parse::<BigUint>().unwrap(), BigUint::from(42_u32));

    let negative: BigInt = "-0".parse().unwrap();
    assert_eq!(negative, BigInt::new(), "-0 should parse to plain zero.");
    assert!(!negative.is_negative());
}

#[test]
fn test_parse_errors() {
    assert_eq!("".parse::<BigUint>(), Err(EmptyInputError.into()));
    assert_eq!("-".parse::<BigInt>(), Err(EmptyInputError.into()));
    assert_eq!(
        "12a4".parse::<BigUint>(),
        Err(InvalidDigitError { offset: 2, byte: b'a' }.into())
    );
    assert_eq!(
        "-12!4".parse::<BigInt>(),
        Err(InvalidDigitError { offset: 3, byte: b'!' }.into()),
        "Offsets should be relative to the original input, sign included."
    );
    assert!("-5".parse::<BigUint>().is_err(), "BigUint should reject a sign.");

    let error = "12a4".parse::<BigUint>().unwrap_err();
    assert!(error.is_invalid_digit());
    assert_eq!(error.to_string(), "Invalid digit 'a' at offset 2!");
}

#[test]
#[should_panic(expected = "Radix 37 outside of the supported range 2..=36!")]
fn test_radix_panic() {
    let _ = BigUint::from_str_radix("z", 37);
}

#[test]
fn test_radix_round_trip() {
    let value = BigUint::from(0xCAFE_F00D_DEAD_BEEF_u64);
    for radix in [2, 3, 8, 10, 16, 36] {
        let formatted = value.to_string_radix(radix);
        assert_eq!(
            BigUint::from_str_radix(&formatted, radix).unwrap(),
            value,
            "Round trip through radix {radix} should preserve the value."
        );
    }
    assert_eq!(value.to_string_radix(16), "cafef00ddeadbeef");
}

#[test]
fn test_signed_arithmetic() {
    let a = BigInt::from(-17);
    let b = BigInt::from(5);

    assert_eq!(a.clone() + b.clone(), BigInt::from(-12));
    assert_eq!(a.clone() - b.clone(), BigInt::from(-22));
    assert_eq!(a.clone() * b.clone(), BigInt::from(-85));
    assert_eq!(a.clone() / b.clone(), BigInt::from(-3), "Division should truncate toward zero.");
    assert_eq!(a.clone() % b.clone(), BigInt::from(-2), "Remainder should follow the dividend.");
    assert_eq!(BigInt::from(17) % BigInt::from(-5), BigInt::from(2));

    // (a / b) * b + (a % b) == a for every sign combination.
    for x in [-17_i64, 17] {
        for y in [-5_i64, 5] {
            let (a, b) = (BigInt::from(x), BigInt::from(y));
            let rebuilt = (a.clone() / b.clone()) * b.clone() + a.clone() % b;
            assert_eq!(rebuilt, a);
        }
    }
}

#[test]
fn test_large_multiplication() {
    // (2^1000 - 1) * (2^1000 + 1) == 2^2000 - 1
    let p = BigUint::from(2_u32).pow(1000);
    let one = BigUint::from(1_u32);
    let product = (p.clone() - &one) * &(p.clone() + &one);
    assert_eq!(product, BigUint::from(2_u32).pow(2000) - &one);
}

#[test]
fn test_large_division() {
    let numerator = BigUint::from(10_u32).pow(120) + &BigUint::from(12345_u32);
    let denominator = BigUint::from(10_u32).pow(40);
    let quotient = numerator.clone() / &denominator;
    let remainder = numerator.clone() % &denominator;

    assert_eq!(quotient, BigUint::from(10_u32).pow(80));
    assert_eq!(remainder, BigUint::from(12345_u32));
    assert_eq!(quotient * &denominator + &remainder, numerator);
}

#[test]
#[should_panic(expected = "Division by zero!")]
fn test_divide_by_zero_panics() {
    let _ = BigUint::from(1_u32) / BigUint::new();
}

#[test]
#[should_panic(expected = "Subtraction would produce a negative value!")]
fn test_underflow_panics() {
    let _ = BigUint::from(1_u32) - BigUint::from(2_u32);
}

#[test]
fn test_conversions() {
    assert_eq!(BigInt::from(i64::MIN).to_i64(), Some(i64::MIN));
    assert_eq!(BigInt::from(i64::MAX).to_i64(), Some(i64::MAX));
    assert_eq!((BigInt::from(i64::MIN) - BigInt::from(1)).to_i64(), None);
    assert_eq!(BigInt::from(-3).to_f64(), -3.0);

    // 2^70 + 2^10: the low bit is below f64 precision and must round away.
    let value = BigUint::from((1_u128 << 70) + (1 << 10));
    assert_eq!(value.to_f64(), (1_u128 << 70) as f64);

    // Exactly halfway between two representable values: ties go to even.
    let halfway = BigUint::from((1_u128 << 70) + (1 << 17));
    assert_eq!(halfway.to_f64(), (1_u128 << 70) as f64);
    let above = BigUint::from((1_u128 << 70) + (1 << 17) + 1);
    assert_eq!(above.to_f64(), ((1_u128 << 70) + (1 << 18)) as f64);
}
