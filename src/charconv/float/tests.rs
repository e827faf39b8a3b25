#![cfg(test)]

use super::*;
use crate::charconv::error::{FromCharsError, InvalidPatternError};

fn format64(value: f64) -> String {
    let mut buffer = [0_u8; 1600];
    let len = to_chars_f64(&mut buffer, value).unwrap();
    String::from_utf8(buffer[..len].to_vec()).unwrap()
}

fn format64_as(value: f64, format: FloatFormat) -> String {
    let mut buffer = [0_u8; 1600];
    let len = to_chars_f64_format(&mut buffer, value, format).unwrap();
    String::from_utf8(buffer[..len].to_vec()).unwrap()
}

fn format64_precision(value: f64, format: FloatFormat, precision: usize) -> String {
    let mut buffer = [0_u8; 1600];
    let len = to_chars_f64_precision(&mut buffer, value, format, precision).unwrap();
    String::from_utf8(buffer[..len].to_vec()).unwrap()
}

fn format32(value: f32) -> String {
    let mut buffer = [0_u8; 256];
    let len = to_chars_f32(&mut buffer, value).unwrap();
    String::from_utf8(buffer[..len].to_vec()).unwrap()
}

#[test]
fn test_shortest_general() {
    assert_eq!(format64(0.0), "0");
    assert_eq!(format64(-0.0), "-0");
    assert_eq!(format64(1.0), "1");
    assert_eq!(format64(-1.5), "-1.5");
    assert_eq!(format64(0.1), "0.1");
    assert_eq!(format64(0.3), "0.3");
    assert_eq!(format64(123.456), "123.456");
    assert_eq!(format64(100.0), "100");
    assert_eq!(format64(f64::NAN), "nan");
    assert_eq!(format64(f64::INFINITY), "inf");
    assert_eq!(format64(f64::NEG_INFINITY), "-inf");
}

#[test]
fn test_shortest_notation_choice() {
    // Fixed and scientific renderings compete on length; fixed wins ties.
    assert_eq!(format64(1e15), "1e+15");
    assert_eq!(format64(1e16), "1e+16");
    assert_eq!(format64(1234567890123.0), "1234567890123");
    assert_eq!(format64(1e-3), "0.001", "Five characters each way; fixed wins the tie.");
    assert_eq!(format64(1e-4), "1e-04");
    assert_eq!(format64(1e100), "1e+100");
    assert_eq!(format64(f64::MAX), "1.7976931348623157e+308");
    assert_eq!(format64(f64::from_bits(1)), "5e-324");
}

#[test]
fn test_forced_notation() {
    assert_eq!(format64_as(100.0, FloatFormat::Scientific), "1e+02");
    assert_eq!(format64_as(0.5, FloatFormat::Fixed), "0.5");
    assert_eq!(format64_as(1e-5, FloatFormat::Fixed), "0.00001");
    assert_eq!(format64_as(1e20, FloatFormat::Fixed), "100000000000000000000");
    assert_eq!(format64_as(0.0, FloatFormat::Scientific), "0e+00");
    assert_eq!(format64_as(123.456, FloatFormat::Scientific), "1.23456e+02");
}

#[test]
fn test_precision_fixed() {
    assert_eq!(format64_precision(0.5, FloatFormat::Fixed, 2), "0.50");
    assert_eq!(format64_precision(1.0 / 3.0, FloatFormat::Fixed, 4), "0.3333");
    assert_eq!(format64_precision(2.5, FloatFormat::Fixed, 0), "2");

    // The stored binary value of 2.675 is 2.67499999..., so it rounds down.
    assert_eq!(format64_precision(2.675, FloatFormat::Fixed, 2), "2.67");
    // 0.125 and 0.375 are exact; the halfway digit goes to the even neighbour.
    assert_eq!(format64_precision(0.125, FloatFormat::Fixed, 2), "0.12");
    assert_eq!(format64_precision(0.375, FloatFormat::Fixed, 2), "0.38");

    assert_eq!(format64_precision(0.0, FloatFormat::Fixed, 3), "0.000");
    assert_eq!(
        format64_precision(0.1, FloatFormat::Fixed, 20),
        "0.10000000000000000555",
        "Fixed precision must expand the exact binary value, not the shortest digits."
    );
}

#[test]
fn test_precision_scientific() {
    assert_eq!(format64_precision(1234.5678, FloatFormat::Scientific, 3), "1.235e+03");
    assert_eq!(format64_precision(0.5, FloatFormat::Scientific, 0), "5e-01");
    assert_eq!(
        format64_precision(0.999999, FloatFormat::Scientific, 2),
        "1.00e+00",
        "Rounding across all nines has to carry into the exponent."
    );
}

#[test]
fn test_precision_general() {
    assert_eq!(format64_precision(0.0001234, FloatFormat::General, 2), "0.00012");
    assert_eq!(format64_precision(0.00001234, FloatFormat::General, 3), "1.23e-05");
    assert_eq!(format64_precision(1234.0, FloatFormat::General, 2), "1.2e+03");
    assert_eq!(format64_precision(1234.0, FloatFormat::General, 6), "1234");
    assert_eq!(format64_precision(0.0, FloatFormat::General, 5), "0");
}

#[test]
fn test_format_f32() {
    assert_eq!(format32(0.1), "0.1");
    assert_eq!(format32(1.0 / 3.0), "0.33333334");
    assert_eq!(format32(f32::MAX), "3.4028235e+38");
    assert_eq!(format32(f32::from_bits(1)), "1e-45");
    assert_eq!(format32(-0.0), "-0");
}

#[test]
fn test_format_buffer_overflow() {
    let mut buffer = [0_u8; 3];
    assert!(to_chars_f64(&mut buffer, 0.25).is_err());
    let mut buffer = [0_u8; 4];
    assert_eq!(to_chars_f64(&mut buffer, 0.25), Ok(4));
}

#[test]
fn test_parse_basic() {
    assert_eq!(from_chars_f64(b"0.1 units").unwrap(), (0.1, 3));
    assert_eq!(from_chars_f64(b"-12.5").unwrap(), (-12.5, 5));
    assert_eq!(from_chars_f64(b".5").unwrap(), (0.5, 2));
    assert_eq!(from_chars_f64(b"3.").unwrap(), (3.0, 2));
    assert_eq!(from_chars_f64(b"1e10x").unwrap(), (1e10, 4));
    assert_eq!(from_chars_f64(b"00.50").unwrap(), (0.5, 5));

    let (value, consumed) = from_chars_f64(b"0.000").unwrap();
    assert_eq!((value, consumed), (0.0, 5));
    let (value, _) = from_chars_f64(b"-0").unwrap();
    assert!(value == 0.0 && value.is_sign_negative());
}

#[test]
fn test_parse_longest_prefix() {
    // A dangling exponent marker is not part of the number.
    assert_eq!(from_chars_f64(b"1e+").unwrap(), (1.0, 1));
    assert_eq!(from_chars_f64(b"1e").unwrap(), (1.0, 1));
    assert_eq!(from_chars_f64(b"2.5.3").unwrap(), (2.5, 3));

    assert_eq!(from_chars_f64(b"abc"), Err(InvalidPatternError.into()));
    assert_eq!(from_chars_f64(b"."), Err(InvalidPatternError.into()));
    assert_eq!(from_chars_f64(b"-"), Err(InvalidPatternError.into()));
    assert_eq!(from_chars_f64(b"+1"), Err(InvalidPatternError.into()), "No leading plus.");
}

#[test]
fn test_parse_specials() {
    let (value, consumed) = from_chars_f64(b"inf").unwrap();
    assert_eq!((value, consumed), (f64::INFINITY, 3));
    let (value, consumed) = from_chars_f64(b"-Infinity!").unwrap();
    assert_eq!((value, consumed), (f64::NEG_INFINITY, 9));

    let (value, consumed) = from_chars_f64(b"NaN").unwrap();
    assert!(value.is_nan());
    assert_eq!(consumed, 3);
    let (_, consumed) = from_chars_f64(b"nan(quiet)").unwrap();
    assert_eq!(consumed, 10);
    let (_, consumed) = from_chars_f64(b"nan(bad!").unwrap();
    assert_eq!(consumed, 3, "An unterminated payload is not part of the NaN.");
}

#[test]
fn test_parse_correct_rounding() {
    // Just below the subnormal/normal boundary midpoint: must round down to the largest
    // subnormal, not up to the smallest normal.
    let (value, _) = from_chars_f64(b"2.2250738585072011e-308").unwrap();
    assert_eq!(value.to_bits(), 0x000F_FFFF_FFFF_FFFF);

    // 2^53 + 1 is exactly halfway; ties go to the even mantissa.
    let (value, _) = from_chars_f64(b"9007199254740993").unwrap();
    assert_eq!(value, 9007199254740992.0);
    // Any nonzero tail breaks the tie upward.
    let (value, _) = from_chars_f64(b"9007199254740993.00000000000000000001").unwrap();
    assert_eq!(value, 9007199254740994.0);

    // 700 digits of 1/3 agree with the infinite expansion to well past the mantissa.
    let mut long = b"0.".to_vec();
    long.extend(std::iter::repeat_n(b'3', 700));
    let (value, consumed) = from_chars_f64(&long).unwrap();
    assert_eq!(value, 1.0 / 3.0);
    assert_eq!(consumed, 702);
}

#[test]
fn test_parse_subnormals() {
    let (value, _) = from_chars_f64(b"5e-324").unwrap();
    assert_eq!(value.to_bits(), 1);
    let (value, _) = from_chars_f64(b"3e-324").unwrap();
    assert_eq!(value.to_bits(), 1, "3e-324 is above the rounding midpoint 2.47e-324.");
    let (value, _) = from_chars_f64(b"4.9406564584124654e-324").unwrap();
    assert_eq!(value.to_bits(), 1);
}

#[test]
fn test_parse_out_of_range() {
    assert!(from_chars_f64(b"1e999").unwrap_err().is_out_of_range());
    assert!(from_chars_f64(b"-1e400").unwrap_err().is_out_of_range());
    assert!(from_chars_f64(b"1e-999").unwrap_err().is_out_of_range());
    assert!(
        from_chars_f64(b"2e-324").unwrap_err().is_out_of_range(),
        "Below half the smallest subnormal everything rounds to zero."
    );
    assert!(from_chars_f64(b"1.7976931348623157e308").is_ok());
    assert!(from_chars_f64(b"1.8e308").unwrap_err().is_out_of_range());
}

#[test]
fn test_parse_formats() {
    assert_eq!(
        from_chars_f64_format(b"1.5", FloatFormat::Scientific),
        Err(FromCharsError::InvalidPattern(InvalidPatternError)),
        "Scientific format requires an exponent."
    );
    assert_eq!(from_chars_f64_format(b"1.5e3", FloatFormat::Scientific).unwrap(), (1500.0, 5));
    assert_eq!(
        from_chars_f64_format(b"1.5e3", FloatFormat::Fixed).unwrap(),
        (1.5, 3),
        "Fixed format must leave the exponent unconsumed."
    );
}

#[test]
fn test_parse_f32() {
    assert_eq!(from_chars_f32(b"0.1").unwrap(), (0.1_f32, 3));
    assert_eq!(from_chars_f32(b"3.4028235e38").unwrap().0, f32::MAX);
    assert!(from_chars_f32(b"3.4028236e38").unwrap_err().is_out_of_range());
    assert_eq!(from_chars_f32(b"1e-45").unwrap().0.to_bits(), 1);

    // 0.1 parsed directly to f32 differs from parse-to-f64-then-narrow in the last bit for
    // some inputs; this one checks the direct rounding stays correct.
    let (value, _) = from_chars_f32(b"1.00000017881393432617187501").unwrap();
    assert_eq!(value.to_bits(), 0x3F80_0002, "Must round directly to f32, not via f64.");
}

#[test]
fn test_round_trip_shortest() {
    let values = [
        0.1,
        0.3,
        1.0 / 3.0,
        std::f64::consts::PI,
        1e-300,
        123456.789e100,
        f64::MAX,
        f64::MIN_POSITIVE,
        f64::from_bits(1),
        6.02214076e23,
    ];
    for &value in &values {
        let text = format64(value);
        let (parsed, consumed) = from_chars_f64(text.as_bytes()).unwrap();
        assert_eq!(consumed, text.len());
        assert_eq!(parsed.to_bits(), value.to_bits(), "Round trip failed for {text}.");
    }
}
