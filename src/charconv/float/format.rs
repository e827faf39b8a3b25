use std::num::FpCategory;

use crate::bigint::BigUint;
use crate::charconv::error::BufferOverflowError;
use crate::charconv::float::ryu::{d2d, decimal_length9, decimal_length17, f2d};
use crate::num::{FloatBits32, FloatBits64};

/// The notation used by the floating point conversion functions, mirroring the three printf
/// families: `%f`, `%e` and `%g`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatFormat {
    /// Plain decimal notation, no exponent.
    Fixed,
    /// Normalized `d.ddde±XX` notation.
    Scientific,
    /// Whichever of the two is shorter; fixed wins ties. With an explicit precision this follows
    /// the `%g` rules instead: the precision counts significant digits and trailing zeros are
    /// removed.
    General,
}

/// A bounds-checked output window over the caller's buffer.
struct Cursor<'a> {
    buffer: &'a mut [u8],
    written: usize,
}

impl<'a> Cursor<'a> {
    fn new(buffer: &'a mut [u8]) -> Cursor<'a> {
        Cursor { buffer, written: 0 }
    }

    fn push(&mut self, byte: u8) -> Result<(), BufferOverflowError> {
        if self.written == self.buffer.len() {
            return Err(BufferOverflowError);
        }
        self.buffer[self.written] = byte;
        self.written += 1;
        Ok(())
    }

    fn push_bytes(&mut self, bytes: &[u8]) -> Result<(), BufferOverflowError> {
        for &byte in bytes {
            self.push(byte)?;
        }
        Ok(())
    }

    fn push_zeros(&mut self, count: usize) -> Result<(), BufferOverflowError> {
        for _ in 0..count {
            self.push(b'0')?;
        }
        Ok(())
    }
}

/// Formats `value` with the fewest characters that parse back to the identical bit pattern,
/// choosing between fixed and scientific notation. Equivalent to
/// [`to_chars_f64_format`] with [`FloatFormat::General`].
///
/// # Examples
/// ```
/// # use hamon::charconv::to_chars_f64;
/// let mut buffer = [0_u8; 32];
/// let len = to_chars_f64(&mut buffer, 0.1).unwrap();
/// assert_eq!(&buffer[..len], b"0.1");
/// let len = to_chars_f64(&mut buffer, 1e100).unwrap();
/// assert_eq!(&buffer[..len], b"1e+100");
/// ```
pub fn to_chars_f64(buffer: &mut [u8], value: f64) -> Result<usize, BufferOverflowError> {
    to_chars_f64_format(buffer, value, FloatFormat::General)
}

/// Formats `value` in the requested notation using the shortest round-trip digits.
pub fn to_chars_f64_format(
    buffer: &mut [u8],
    value: f64,
    format: FloatFormat,
) -> Result<usize, BufferOverflowError> {
    let bits = FloatBits64::from_float(value);
    let mut cursor = Cursor::new(buffer);

    if write_special(&mut cursor, bits.classify(), bits.is_sign_negative(), format, None)? {
        return Ok(cursor.written);
    }

    let decimal = d2d(bits.mantissa(), bits.biased_exponent());
    let mut digits = [0_u8; 17];
    let count = write_digits_u64(&mut digits, decimal.mantissa, decimal_length17(decimal.mantissa));

    if bits.is_sign_negative() {
        cursor.push(b'-')?;
    }
    write_shortest(&mut cursor, &digits[..count], decimal.exponent, format)?;
    Ok(cursor.written)
}

/// Formats `value` with an explicit precision, using exact decimal expansion of the underlying
/// binary value, rounded half to even. For [`Fixed`](FloatFormat::Fixed) the precision counts
/// digits after the point, for [`Scientific`](FloatFormat::Scientific) digits after the leading
/// digit, and for [`General`](FloatFormat::General) significant digits (`%g` style, trailing
/// zeros removed).
///
/// # Examples
/// ```
/// # use hamon::charconv::{to_chars_f64_precision, FloatFormat};
/// let mut buffer = [0_u8; 64];
/// let len = to_chars_f64_precision(&mut buffer, 0.1, FloatFormat::Fixed, 20).unwrap();
/// assert_eq!(&buffer[..len], b"0.10000000000000000555");
/// ```
pub fn to_chars_f64_precision(
    buffer: &mut [u8],
    value: f64,
    format: FloatFormat,
    precision: usize,
) -> Result<usize, BufferOverflowError> {
    let bits = FloatBits64::from_float(value);
    let mut cursor = Cursor::new(buffer);

    if write_special(&mut cursor, bits.classify(), bits.is_sign_negative(), format, Some(precision))? {
        return Ok(cursor.written);
    }

    let (negative, m2, e2) = bits.decompose();
    if negative {
        cursor.push(b'-')?;
    }
    write_precision(&mut cursor, m2, e2, format, precision)?;
    Ok(cursor.written)
}

/// The `f32` counterpart of [`to_chars_f64`].
pub fn to_chars_f32(buffer: &mut [u8], value: f32) -> Result<usize, BufferOverflowError> {
    to_chars_f32_format(buffer, value, FloatFormat::General)
}

/// The `f32` counterpart of [`to_chars_f64_format`].
pub fn to_chars_f32_format(
    buffer: &mut [u8],
    value: f32,
    format: FloatFormat,
) -> Result<usize, BufferOverflowError> {
    let bits = FloatBits32::from_float(value);
    let mut cursor = Cursor::new(buffer);

    if write_special(&mut cursor, bits.classify(), bits.is_sign_negative(), format, None)? {
        return Ok(cursor.written);
    }

    let decimal = f2d(bits.mantissa(), bits.biased_exponent());
    let mut digits = [0_u8; 9];
    let count =
        write_digits_u64(&mut digits, decimal.mantissa as u64, decimal_length9(decimal.mantissa));

    if bits.is_sign_negative() {
        cursor.push(b'-')?;
    }
    write_shortest(&mut cursor, &digits[..count], decimal.exponent, format)?;
    Ok(cursor.written)
}

/// The `f32` counterpart of [`to_chars_f64_precision`]. The expansion is of the exact `f32`
/// value, so the digits differ from the `f64` expansion of the same literal.
pub fn to_chars_f32_precision(
    buffer: &mut [u8],
    value: f32,
    format: FloatFormat,
    precision: usize,
) -> Result<usize, BufferOverflowError> {
    let bits = FloatBits32::from_float(value);
    let mut cursor = Cursor::new(buffer);

    if write_special(&mut cursor, bits.classify(), bits.is_sign_negative(), format, Some(precision))? {
        return Ok(cursor.written);
    }

    let (negative, m2, e2) = bits.decompose();
    if negative {
        cursor.push(b'-')?;
    }
    write_precision(&mut cursor, m2 as u64, e2, format, precision)?;
    Ok(cursor.written)
}

/// Handles NaN, infinities and zeros; returns true if the value was fully written. NaN is
/// written unsigned regardless of its sign bit.
fn write_special(
    cursor: &mut Cursor<'_>,
    category: FpCategory,
    negative: bool,
    format: FloatFormat,
    precision: Option<usize>,
) -> Result<bool, BufferOverflowError> {
    match category {
        FpCategory::Nan => {
            cursor.push_bytes(b"nan")?;
            Ok(true)
        }
        FpCategory::Infinite => {
            if negative {
                cursor.push(b'-')?;
            }
            cursor.push_bytes(b"inf")?;
            Ok(true)
        }
        FpCategory::Zero => {
            if negative {
                cursor.push(b'-')?;
            }
            match (format, precision) {
                (FloatFormat::Fixed, Some(p)) => {
                    cursor.push(b'0')?;
                    if p > 0 {
                        cursor.push(b'.')?;
                        cursor.push_zeros(p)?;
                    }
                }
                (FloatFormat::Scientific, Some(p)) => {
                    cursor.push(b'0')?;
                    if p > 0 {
                        cursor.push(b'.')?;
                        cursor.push_zeros(p)?;
                    }
                    cursor.push_bytes(b"e+00")?;
                }
                (FloatFormat::Scientific, None) => cursor.push_bytes(b"0e+00")?,
                _ => cursor.push(b'0')?,
            }
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Writes the decimal digits of `value` into the front of `out`, most significant first.
fn write_digits_u64(out: &mut [u8], mut value: u64, count: u32) -> usize {
    let count = count as usize;
    for i in (0..count).rev() {
        out[i] = b'0' + (value % 10) as u8;
        value /= 10;
    }
    count
}

/// Renders shortest-form digits in the requested notation. `digits` are the significant digits
/// and the represented value is `digits * 10^exp10`.
fn write_shortest(
    cursor: &mut Cursor<'_>,
    digits: &[u8],
    exp10: i32,
    format: FloatFormat,
) -> Result<(), BufferOverflowError> {
    let format = match format {
        FloatFormat::General => {
            if fixed_length(digits.len(), exp10) <= scientific_length(digits.len(), exp10) {
                FloatFormat::Fixed
            } else {
                FloatFormat::Scientific
            }
        }
        other => other,
    };

    match format {
        FloatFormat::Fixed => write_fixed_digits(cursor, digits, exp10),
        _ => write_scientific_digits(cursor, digits, exp10 + digits.len() as i32 - 1),
    }
}

/// The character count of the fixed rendering of `digits * 10^exp10`.
fn fixed_length(count: usize, exp10: i32) -> usize {
    if exp10 >= 0 {
        count + exp10 as usize
    } else if count as i32 + exp10 > 0 {
        count + 1
    } else {
        // "0." plus leading fraction zeros plus the digits.
        2 + (-exp10) as usize
    }
}

/// The character count of the scientific rendering.
fn scientific_length(count: usize, exp10: i32) -> usize {
    let exponent = exp10 + count as i32 - 1;
    let exponent_digits = decimal_length17(exponent.unsigned_abs() as u64).max(2) as usize;
    count + (count > 1) as usize + 2 + exponent_digits
}

fn write_fixed_digits(
    cursor: &mut Cursor<'_>,
    digits: &[u8],
    exp10: i32,
) -> Result<(), BufferOverflowError> {
    if exp10 >= 0 {
        cursor.push_bytes(digits)?;
        cursor.push_zeros(exp10 as usize)?;
        return Ok(());
    }

    let point = digits.len() as i32 + exp10;
    if point > 0 {
        cursor.push_bytes(&digits[..point as usize])?;
        cursor.push(b'.')?;
        cursor.push_bytes(&digits[point as usize..])
    } else {
        cursor.push_bytes(b"0.")?;
        cursor.push_zeros((-point) as usize)?;
        cursor.push_bytes(digits)
    }
}

fn write_scientific_digits(
    cursor: &mut Cursor<'_>,
    digits: &[u8],
    exponent: i32,
) -> Result<(), BufferOverflowError> {
    cursor.push(digits[0])?;
    if digits.len() > 1 {
        cursor.push(b'.')?;
        cursor.push_bytes(&digits[1..])?;
    }
    write_exponent(cursor, exponent)
}

/// Writes `e`, an explicit sign and at least two exponent digits, printf style.
fn write_exponent(cursor: &mut Cursor<'_>, exponent: i32) -> Result<(), BufferOverflowError> {
    cursor.push(b'e')?;
    cursor.push(if exponent < 0 { b'-' } else { b'+' })?;

    let magnitude = exponent.unsigned_abs();
    let mut digits = [0_u8; 10];
    let count = write_digits_u64(&mut digits, magnitude as u64, decimal_length17(magnitude as u64));
    if count < 2 {
        cursor.push(b'0')?;
    }
    cursor.push_bytes(&digits[..count])
}

/// The exact decimal expansion machinery behind the precision forms: the value `m2 * 2^e2` is
/// held as `total * 10^-scale` with `total` an exact big integer.
fn exact_decimal(m2: u64, e2: i32) -> (BigUint, u32) {
    if e2 >= 0 {
        (BigUint::from(m2) << e2 as usize, 0)
    } else {
        let k = (-e2) as u32;
        // frac * 10^k == (m2 mod 2^k) * 5^k, so scaling the whole value by 10^k only needs 5^k.
        (BigUint::from(m2) * &BigUint::from(5_u32).pow(k), k)
    }
}

/// `floor(value / 10^power)`, rounded half to even.
fn div_pow10_half_even(value: &BigUint, power: u32) -> BigUint {
    let divisor = BigUint::from(10_u32).pow(power);
    let (quotient, remainder) = value.div_rem(&divisor);
    let doubled = remainder * &BigUint::from(2_u32);
    match doubled.cmp(&divisor) {
        std::cmp::Ordering::Greater => quotient + &BigUint::from(1_u32),
        std::cmp::Ordering::Less => quotient,
        std::cmp::Ordering::Equal => {
            if quotient.get_bit(0) {
                quotient + &BigUint::from(1_u32)
            } else {
                quotient
            }
        }
    }
}

fn write_precision(
    cursor: &mut Cursor<'_>,
    m2: u64,
    e2: i32,
    format: FloatFormat,
    precision: usize,
) -> Result<(), BufferOverflowError> {
    match format {
        FloatFormat::Fixed => write_precision_fixed(cursor, m2, e2, precision),
        FloatFormat::Scientific => {
            let (digits, exponent) = round_significant(m2, e2, precision + 1);
            write_precision_scientific(cursor, digits.as_bytes(), exponent)
        }
        FloatFormat::General => write_precision_general(cursor, m2, e2, precision.max(1)),
    }
}

/// `%.*f`: exactly `precision` digits after the point.
fn write_precision_fixed(
    cursor: &mut Cursor<'_>,
    m2: u64,
    e2: i32,
    precision: usize,
) -> Result<(), BufferOverflowError> {
    let (total, scale) = exact_decimal(m2, e2);

    // Rescale the exact expansion to precision digits after the point, rounding once.
    let scaled = if precision as u32 >= scale {
        total * &BigUint::from(10_u32).pow(precision as u32 - scale)
    } else {
        div_pow10_half_even(&total, scale - precision as u32)
    };

    let rendered = scaled.to_string_radix(10);
    let digits = rendered.as_bytes();
    if digits.len() <= precision {
        cursor.push(b'0')?;
        cursor.push(b'.')?;
        cursor.push_zeros(precision - digits.len())?;
        cursor.push_bytes(digits)
    } else {
        let point = digits.len() - precision;
        cursor.push_bytes(&digits[..point])?;
        if precision > 0 {
            cursor.push(b'.')?;
            cursor.push_bytes(&digits[point..])?;
        }
        Ok(())
    }
}

/// Rounds the exact expansion of `m2 * 2^e2` to `significant` digits; returns the digit string
/// (exactly `significant` long) and the decimal exponent of its leading digit.
fn round_significant(m2: u64, e2: i32, significant: usize) -> (String, i32) {
    let (total, scale) = exact_decimal(m2, e2);
    let all = total.to_string_radix(10);
    let mut exponent = all.len() as i32 - 1 - scale as i32;

    if all.len() > significant {
        let rounded = div_pow10_half_even(&total, (all.len() - significant) as u32);
        let mut digits = rounded.to_string_radix(10);
        if digits.len() > significant {
            // 999... carried over into one more digit; drop the trailing zero it produced.
            digits.truncate(significant);
            exponent += 1;
        }
        (digits, exponent)
    } else {
        let mut digits = all;
        digits.extend(std::iter::repeat_n('0', significant - digits.len()));
        (digits, exponent)
    }
}

/// `%.*e`: one leading digit, `digits.len() - 1` digits after the point.
fn write_precision_scientific(
    cursor: &mut Cursor<'_>,
    digits: &[u8],
    exponent: i32,
) -> Result<(), BufferOverflowError> {
    cursor.push(digits[0])?;
    if digits.len() > 1 {
        cursor.push(b'.')?;
        cursor.push_bytes(&digits[1..])?;
    }
    write_exponent(cursor, exponent)
}

/// `%.*g`: `precision` significant digits, notation chosen from the rounded exponent, trailing
/// zeros removed.
fn write_precision_general(
    cursor: &mut Cursor<'_>,
    m2: u64,
    e2: i32,
    precision: usize,
) -> Result<(), BufferOverflowError> {
    let (digits, exponent) = round_significant(m2, e2, precision);
    let digits = digits.as_bytes();

    if exponent < -4 || exponent >= precision as i32 {
        let stripped = strip_trailing_zeros(digits);
        write_scientific_digits(cursor, stripped, exponent)
    } else if exponent >= 0 {
        let point = exponent as usize + 1;
        cursor.push_bytes(&digits[..point])?;
        let fraction = strip_trailing_zeros(&digits[point..]);
        if !fraction.is_empty() {
            cursor.push(b'.')?;
            cursor.push_bytes(fraction)?;
        }
        Ok(())
    } else {
        cursor.push_bytes(b"0.")?;
        cursor.push_zeros((-exponent - 1) as usize)?;
        cursor.push_bytes(strip_trailing_zeros(digits))
    }
}

fn strip_trailing_zeros(digits: &[u8]) -> &[u8] {
    let mut end = digits.len();
    while end > 0 && digits[end - 1] == b'0' {
        end -= 1;
    }
    &digits[..end]
}
