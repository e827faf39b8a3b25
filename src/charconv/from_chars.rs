use crate::bigint::check_radix;
use crate::charconv::error::{FromCharsError, InvalidPatternError, OutOfRangeError};
use crate::charconv::primitive::PrimitiveInt;

/// Parses an integer from the start of `input` in the given radix, returning the value and the
/// number of bytes consumed.
///
/// The accepted pattern is a minus sign (only for signed target types) followed by one or more
/// digits in either case. No leading whitespace, no `+`, no radix prefixes. Parsing stops at the
/// first byte that isn't a digit, so trailing text is fine; the longest valid digit run is always
/// consumed. If that run encodes a value outside the target type's range the error is
/// [out of range](FromCharsError::OutOfRange) rather than invalid.
///
/// # Panics
/// Panics if the radix is outside `2..=36`.
///
/// # Examples
/// ```
/// # use hamon::charconv::from_chars;
/// assert_eq!(from_chars::<u32>(b"7fff kHz", 16).unwrap(), (0x7fff, 4));
/// assert_eq!(from_chars::<i8>(b"-128", 10).unwrap(), (-128, 4));
/// assert!(from_chars::<i8>(b"128", 10).unwrap_err().is_out_of_range());
/// assert!(from_chars::<u32>(b"-1", 10).is_err(), "Unsigned types reject a sign entirely.");
/// ```
pub fn from_chars<T: PrimitiveInt>(input: &[u8], radix: u32) -> Result<(T, usize), FromCharsError> {
    check_radix(radix);

    let mut cursor = 0;
    let negative = T::SIGNED && input.first() == Some(&b'-');
    if negative {
        cursor = 1;
    }

    let digits_start = cursor;
    let mut magnitude = 0_u128;
    let mut overflowed = false;
    while cursor < input.len() {
        let digit = match (input[cursor] as char).to_digit(radix) {
            Some(digit) => digit,
            None => break,
        };

        // Keep consuming digits after an overflow so the error is out-of-range, not invalid.
        match magnitude
            .checked_mul(radix as u128)
            .and_then(|shifted| shifted.checked_add(digit as u128))
        {
            Some(next) => magnitude = next,
            None => overflowed = true,
        }
        cursor += 1;
    }

    if cursor == digits_start {
        return Err(InvalidPatternError.into());
    }
    if overflowed {
        return Err(OutOfRangeError.into());
    }

    match T::from_parts(negative, magnitude) {
        Some(value) => Ok((value, cursor)),
        None => Err(OutOfRangeError.into()),
    }
}
