use crate::bigint::BigUint;
use crate::charconv::error::{FromCharsError, InvalidPatternError, OutOfRangeError};
use crate::charconv::float::format::FloatFormat;

/// Everything the per-type finishers need to know about a scanned decimal literal. The
/// represented magnitude is `digits * 10^exponent`, where `digits` holds the significant decimal
/// digits (values 0-9, leading zeros stripped, at most [`MAX_DIGITS`] kept) and `truncated`
/// records whether any nonzero digit beyond the cap was dropped.
struct DecimalScan {
    negative: bool,
    digits: Vec<u8>,
    exponent: i64,
    truncated: bool,
    consumed: usize,
}

/// Enough digits that any dropped tail can only matter as a sticky bit: the longest exactly
/// representable halfway point of an `f64` needs 768 significant digits, so with padding to
/// spare, nothing past this count can flip a rounding decision on its own.
const MAX_DIGITS: usize = 800;

/// Sign handling for the special-value spellings shared by both types.
enum Scanned {
    Number(DecimalScan),
    Infinity { negative: bool, consumed: usize },
    Nan { consumed: usize },
}

fn matches_ignore_case(input: &[u8], keyword: &[u8]) -> bool {
    input.len() >= keyword.len()
        && input[..keyword.len()].eq_ignore_ascii_case(keyword)
}

/// Scans the longest valid prefix of a decimal floating point literal: an optional `-`, digits
/// with at most one point, and (depending on `format`) an exponent. Also recognizes `inf`,
/// `infinity` and `nan(...)` in any case. No leading whitespace, no `+`, no hex.
fn scan(input: &[u8], format: FloatFormat) -> Result<Scanned, InvalidPatternError> {
    let mut cursor = 0;
    let negative = input.first() == Some(&b'-');
    if negative {
        cursor = 1;
    }

    if matches_ignore_case(&input[cursor..], b"inf") {
        cursor += 3;
        if matches_ignore_case(&input[cursor..], b"inity") {
            cursor += 5;
        }
        return Ok(Scanned::Infinity { negative, consumed: cursor });
    }
    if matches_ignore_case(&input[cursor..], b"nan") {
        cursor += 3;
        // Optional n-char-sequence: "nan(alnum_)".
        if input.get(cursor) == Some(&b'(') {
            let mut probe = cursor + 1;
            while probe < input.len()
                && (input[probe].is_ascii_alphanumeric() || input[probe] == b'_')
            {
                probe += 1;
            }
            if input.get(probe) == Some(&b')') {
                cursor = probe + 1;
            }
        }
        return Ok(Scanned::Nan { consumed: cursor });
    }

    let mut digits = Vec::new();
    let mut exponent = 0_i64;
    let mut truncated = false;
    let mut any_digits = false;
    let mut in_fraction = false;

    while cursor < input.len() {
        let byte = input[cursor];
        match byte {
            b'0'..=b'9' => {
                any_digits = true;
                let digit = byte - b'0';
                if digits.len() < MAX_DIGITS {
                    if in_fraction {
                        exponent -= 1;
                    }
                    if !digits.is_empty() || digit != 0 {
                        digits.push(digit);
                    }
                } else {
                    // Past the cap the digit can't be stored: an integer digit still scales
                    // the value, a fraction digit doesn't, and a dropped nonzero digit
                    // survives only as stickiness.
                    if !in_fraction {
                        exponent += 1;
                    }
                    truncated |= digit != 0;
                }
                cursor += 1;
            }
            b'.' if !in_fraction => {
                in_fraction = true;
                cursor += 1;
            }
            _ => break,
        }
    }

    if !any_digits {
        return Err(InvalidPatternError);
    }

    // The exponent marker is only consumed when it is followed by a well-formed exponent;
    // otherwise "1e+" must parse as "1" with two bytes left over.
    let mut has_exponent = false;
    if format != FloatFormat::Fixed
        && cursor < input.len()
        && (input[cursor] == b'e' || input[cursor] == b'E')
    {
        let mut probe = cursor + 1;
        let exp_negative = match input.get(probe) {
            Some(&b'-') => {
                probe += 1;
                true
            }
            Some(&b'+') => {
                probe += 1;
                false
            }
            _ => false,
        };

        let exp_digits_start = probe;
        let mut explicit = 0_i64;
        while probe < input.len() && input[probe].is_ascii_digit() {
            // Saturate: an exponent this size over- or underflows every binary format anyway.
            explicit = (explicit * 10 + (input[probe] - b'0') as i64).min(1 << 40);
            probe += 1;
        }

        if probe > exp_digits_start {
            exponent += if exp_negative { -explicit } else { explicit };
            cursor = probe;
            has_exponent = true;
        }
    }
    if format == FloatFormat::Scientific && !has_exponent {
        return Err(InvalidPatternError);
    }

    // All-zero input parses as zero with no digits kept.
    Ok(Scanned::Number(DecimalScan { negative, digits, exponent, truncated, consumed: cursor }))
}

/// Exactly representable powers of ten for the `f64` fast path: `5^22 < 2^53`.
const POW10_F64: [f64; 23] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];

/// Exactly representable powers of ten for the `f32` fast path: `5^10 < 2^24`.
const POW10_F32: [f32; 11] = [1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10];

/// Shape parameters for one IEEE-754 binary format, enough for the slow path to assemble raw
/// bits for either width.
struct BinaryFormat {
    mantissa_bits: u32,
    /// The exponent of the least significant bit of the subnormal range (`-1074` for `f64`).
    min_lsb_exponent: i32,
    /// The all-ones exponent field encoding infinity.
    max_exponent_field: i32,
    /// `digits + exponent` above this guarantees overflow.
    max_decimal_exponent: i64,
    /// `digits + exponent` at or below this guarantees underflow to zero.
    min_decimal_exponent: i64,
}

const F64_FORMAT: BinaryFormat = BinaryFormat {
    mantissa_bits: 52,
    min_lsb_exponent: -1074,
    max_exponent_field: 0x7FF,
    max_decimal_exponent: 310,
    min_decimal_exponent: -324,
};

const F32_FORMAT: BinaryFormat = BinaryFormat {
    mantissa_bits: 23,
    min_lsb_exponent: -149,
    max_exponent_field: 0xFF,
    max_decimal_exponent: 40,
    min_decimal_exponent: -46,
};

/// Correctly rounded binary assembly of `digits * 10^exponent` (nonzero, `truncated` marking an
/// inexact dropped tail), as raw bits of the target format without the sign.
fn decimal_to_bits(
    digits: &BigUint,
    exponent: i64,
    truncated: bool,
    format: &BinaryFormat,
) -> Result<u64, OutOfRangeError> {
    // v = num / den * 2^0, exactly.
    let mut num = digits.clone();
    let mut den = BigUint::from(1_u32);
    if exponent >= 0 {
        num = num * &BigUint::from(5_u32).pow(exponent as u32) << exponent as usize;
    } else {
        den = BigUint::from(5_u32).pow((-exponent) as u32) << (-exponent) as usize;
    }

    // First pass: locate the most significant bit of v exactly. With the quotient forced to 54+
    // bits, its bit length pins floor(log2 v) regardless of the discarded remainder.
    let scale = 55 - (num.bit_length() as i32 - den.bit_length() as i32);
    let (rough_num, rough_den) = if scale >= 0 {
        (num.clone() << scale as usize, den.clone())
    } else {
        (num.clone(), den.clone() << (-scale) as usize)
    };
    let rough = rough_num.div_rem(&rough_den).0;
    let msb = rough.bit_length() as i32 - 1 - scale;

    // Second pass: quotient with the unit in the last place one bit below the rounding
    // position, so the bottom quotient bit is the round bit and the remainder is the sticky.
    let lsb = (msb - format.mantissa_bits as i32).max(format.min_lsb_exponent);
    let shift = -(lsb - 1);
    let (final_num, final_den) = if shift >= 0 {
        (num << shift as usize, den)
    } else {
        (num, den << (-shift) as usize)
    };
    let (quotient, remainder) = final_num.div_rem(&final_den);

    let with_round_bit = quotient.to_u64().unwrap_or(u64::MAX);
    let mut mantissa = with_round_bit >> 1;
    let round = with_round_bit & 1 == 1;
    let sticky = !remainder.is_zero() || truncated;

    if round && (sticky || mantissa & 1 == 1) {
        mantissa += 1;
    }

    let mut lsb = lsb;
    if mantissa >> (format.mantissa_bits + 1) != 0 {
        // Rounding carried into a new binary digit.
        mantissa >>= 1;
        lsb += 1;
    }

    if mantissa == 0 {
        // A nonzero input rounded to zero is an underflow.
        return Err(OutOfRangeError);
    }

    if mantissa >> format.mantissa_bits == 0 {
        // Subnormal: lsb stayed pinned at the bottom of the range.
        Ok(mantissa)
    } else {
        let field = (lsb - format.min_lsb_exponent + 1) as i64;
        if field >= format.max_exponent_field as i64 {
            return Err(OutOfRangeError);
        }
        Ok((field as u64) << format.mantissa_bits
            | (mantissa & ((1 << format.mantissa_bits) - 1)))
    }
}

/// Folds up to 19 scanned digits into a `u64`; caller guarantees the count fits.
fn digits_to_u64(digits: &[u8]) -> u64 {
    digits.iter().fold(0_u64, |acc, &digit| acc * 10 + digit as u64)
}

/// Builds a `BigUint` from scanned digits, folding nine at a time.
fn digits_to_biguint(digits: &[u8]) -> BigUint {
    let mut value = BigUint::new();
    for chunk in digits.chunks(9) {
        let mut folded = 0_u32;
        for &digit in chunk {
            folded = folded * 10 + digit as u32;
        }
        value = value * &BigUint::from(10_u32.pow(chunk.len() as u32)) + &BigUint::from(folded);
    }
    value
}

/// Parses an `f64` from the start of `input`, returning the value and the bytes consumed.
/// Parsing is correctly rounded: the result is always the nearest representable value, ties to
/// even, no matter how many digits the input carries.
///
/// Values whose magnitude would overflow to infinity, or round all the way down to zero despite
/// nonzero input, report [out of range](FromCharsError::OutOfRange).
///
/// # Examples
/// ```
/// # use hamon::charconv::from_chars_f64;
/// let (value, consumed) = from_chars_f64(b"0.1 units").unwrap();
/// assert_eq!((value, consumed), (0.1, 3));
///
/// // 18 significant digits: more than fits a mantissa, rounded exactly.
/// let (value, _) = from_chars_f64(b"2.22507385850720138e-308").unwrap();
/// assert_eq!(value, 2.2250738585072014e-308);
///
/// assert!(from_chars_f64(b"1e999").unwrap_err().is_out_of_range());
/// ```
pub fn from_chars_f64(input: &[u8]) -> Result<(f64, usize), FromCharsError> {
    from_chars_f64_format(input, FloatFormat::General)
}

/// [`from_chars_f64`] with explicit format control: [`Fixed`](FloatFormat::Fixed) never consumes
/// an exponent, [`Scientific`](FloatFormat::Scientific) requires one.
pub fn from_chars_f64_format(
    input: &[u8],
    format: FloatFormat,
) -> Result<(f64, usize), FromCharsError> {
    let scanned = match scan(input, format)? {
        Scanned::Infinity { negative, consumed } => {
            let value = if negative { f64::NEG_INFINITY } else { f64::INFINITY };
            return Ok((value, consumed));
        }
        Scanned::Nan { consumed } => return Ok((f64::NAN, consumed)),
        Scanned::Number(scanned) => scanned,
    };

    if scanned.digits.is_empty() {
        return Ok((if scanned.negative { -0.0 } else { 0.0 }, scanned.consumed));
    }

    let magnitude = f64_magnitude(&scanned)?;
    let value = if scanned.negative { -magnitude } else { magnitude };
    Ok((value, scanned.consumed))
}

/// The `f32` counterpart of [`from_chars_f64`]. Note that rounding happens directly from the
/// decimal input to `f32`; parsing through `f64` and narrowing would double-round.
pub fn from_chars_f32(input: &[u8]) -> Result<(f32, usize), FromCharsError> {
    from_chars_f32_format(input, FloatFormat::General)
}

/// The `f32` counterpart of [`from_chars_f64_format`].
pub fn from_chars_f32_format(
    input: &[u8],
    format: FloatFormat,
) -> Result<(f32, usize), FromCharsError> {
    let scanned = match scan(input, format)? {
        Scanned::Infinity { negative, consumed } => {
            let value = if negative { f32::NEG_INFINITY } else { f32::INFINITY };
            return Ok((value, consumed));
        }
        Scanned::Nan { consumed } => return Ok((f32::NAN, consumed)),
        Scanned::Number(scanned) => scanned,
    };

    if scanned.digits.is_empty() {
        return Ok((if scanned.negative { -0.0 } else { 0.0 }, scanned.consumed));
    }

    let magnitude = f32_magnitude(&scanned)?;
    let value = if scanned.negative { -magnitude } else { magnitude };
    Ok((value, scanned.consumed))
}

fn f64_magnitude(scan: &DecimalScan) -> Result<f64, OutOfRangeError> {
    let decimal_magnitude = scan.digits.len() as i64 + scan.exponent;
    if decimal_magnitude > F64_FORMAT.max_decimal_exponent {
        return Err(OutOfRangeError);
    }
    if decimal_magnitude <= F64_FORMAT.min_decimal_exponent {
        return Err(OutOfRangeError);
    }

    // Clinger's fast path: both operands exact, one correctly rounded operation.
    if !scan.truncated && scan.digits.len() <= 19 {
        let mantissa = digits_to_u64(&scan.digits);
        if mantissa < 1 << 53 && scan.exponent.unsigned_abs() <= 22 {
            let mantissa = mantissa as f64;
            return Ok(if scan.exponent >= 0 {
                mantissa * POW10_F64[scan.exponent as usize]
            } else {
                mantissa / POW10_F64[(-scan.exponent) as usize]
            });
        }
    }

    let digits = digits_to_biguint(&scan.digits);
    let bits = decimal_to_bits(&digits, scan.exponent, scan.truncated, &F64_FORMAT)?;
    Ok(f64::from_bits(bits))
}

fn f32_magnitude(scan: &DecimalScan) -> Result<f32, OutOfRangeError> {
    let decimal_magnitude = scan.digits.len() as i64 + scan.exponent;
    if decimal_magnitude > F32_FORMAT.max_decimal_exponent {
        return Err(OutOfRangeError);
    }
    if decimal_magnitude <= F32_FORMAT.min_decimal_exponent {
        return Err(OutOfRangeError);
    }

    if !scan.truncated && scan.digits.len() <= 10 {
        let mantissa = digits_to_u64(&scan.digits);
        if mantissa < 1 << 24 && scan.exponent.unsigned_abs() <= 10 {
            let mantissa = mantissa as f32;
            return Ok(if scan.exponent >= 0 {
                mantissa * POW10_F32[scan.exponent as usize]
            } else {
                mantissa / POW10_F32[(-scan.exponent) as usize]
            });
        }
    }

    let digits = digits_to_biguint(&scan.digits);
    let bits = decimal_to_bits(&digits, scan.exponent, scan.truncated, &F32_FORMAT)?;
    Ok(f32::from_bits(bits as u32))
}
