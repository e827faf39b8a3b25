use crate::bigint::check_radix;
use crate::charconv::error::BufferOverflowError;
use crate::charconv::primitive::PrimitiveInt;
use crate::util::fmt::DIGITS;

/// Formats an integer into `buffer` in the given radix, returning the number of bytes written.
/// Negative values get a leading `-`; positive values get no sign. Digits above 9 are lowercase.
///
/// # Panics
/// Panics if the radix is outside `2..=36`.
///
/// # Examples
/// ```
/// # use hamon::charconv::to_chars;
/// let mut buffer = [0_u8; 64];
/// let len = to_chars(&mut buffer, 255_u8, 16).unwrap();
/// assert_eq!(&buffer[..len], b"ff");
///
/// let len = to_chars(&mut buffer, i128::MIN, 10).unwrap();
/// assert_eq!(&buffer[..len], b"-170141183460469231731687303715884105728");
/// ```
pub fn to_chars<T: PrimitiveInt>(
    buffer: &mut [u8],
    value: T,
    radix: u32,
) -> Result<usize, BufferOverflowError> {
    check_radix(radix);

    let (negative, mut magnitude) = value.to_parts();

    // Digits come out least significant first; 128 covers u128 in binary.
    let mut digits = [0_u8; 128];
    let mut count = 0;
    loop {
        digits[count] = DIGITS[(magnitude % radix as u128) as usize];
        magnitude /= radix as u128;
        count += 1;
        if magnitude == 0 {
            break;
        }
    }

    let total = count + negative as usize;
    if buffer.len() < total {
        return Err(BufferOverflowError);
    }

    let mut cursor = 0;
    if negative {
        buffer[0] = b'-';
        cursor = 1;
    }
    for i in (0..count).rev() {
        buffer[cursor] = digits[i];
        cursor += 1;
    }

    Ok(total)
}
