use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{
    Add, AddAssign, BitAnd, BitOr, BitXor, Div, Mul, MulAssign, Rem, Shl, Shr, Sub, SubAssign,
};
use std::str::FromStr;

use crate::bigint::algo;
use crate::bigint::error::{EmptyInputError, InvalidDigitError, NegativeDifferenceError, ParseBigIntError};
use crate::util::error::{DivideByZero, RadixOutOfRange};
use crate::util::fmt::{DebugUnquoted, DIGITS};
use crate::util::result::ResultExtension;

/// An unsigned integer of arbitrary size, stored as normalized little-endian `u32` limbs.
///
/// Arithmetic never overflows; the representation simply grows. Subtraction is the one partial
/// operation: [`checked_sub`](BigUint::checked_sub) is the fallible form and the [`Sub`] operator
/// panics when the difference would be negative, mirroring the panic-on-overflow behavior of the
/// primitive unsigned types.
///
/// # Examples
/// ```
/// # use hamon::bigint::BigUint;
/// let a = BigUint::from(2_u32).pow(100);
/// assert_eq!(a.to_string(), "1267650600228229401496703205376");
/// assert_eq!((a >> 90_usize).to_u64(), Some(1024));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BigUint {
    pub(crate) limbs: Vec<u32>,
}

/// Panics with a typed error if the radix is unsupported, matching the behavior of
/// [`u32::from_str_radix`].
pub(crate) fn check_radix(radix: u32) {
    if !(2..=36).contains(&radix) {
        Err(RadixOutOfRange { radix }).throw()
    }
}

impl BigUint {
    /// Creates a new BigUint with value zero.
    pub fn new() -> BigUint {
        BigUint { limbs: vec![0] }
    }

    /// Borrows the normalized little-endian limbs.
    pub(crate) fn limbs(&self) -> &[u32] {
        &self.limbs
    }

    /// Returns true if the value is zero.
    ///
    /// # Examples
    /// ```
    /// # use hamon::bigint::BigUint;
    /// assert!(BigUint::new().is_zero());
    /// assert!(!BigUint::from(3_u32).is_zero());
    /// ```
    pub fn is_zero(&self) -> bool {
        algo::is_zero(&self.limbs)
    }

    /// Returns the position of the highest set bit plus one, or 0 for zero.
    pub fn bit_length(&self) -> usize {
        algo::bit_length(&self.limbs)
    }

    /// Returns bit `index`, counting from the least significant bit.
    pub fn get_bit(&self, index: usize) -> bool {
        algo::get_bit(&self.limbs, index)
    }

    /// Parses a value from a string in the given radix. Accepts an optional leading `+` and then
    /// one or more digits; digits above 9 may be in either case.
    ///
    /// # Panics
    /// Panics if the radix is outside `2..=36`.
    ///
    /// # Examples
    /// ```
    /// # use hamon::bigint::BigUint;
    /// let value = BigUint::from_str_radix("ffff_is_not_valid", 16);
    /// assert!(value.is_err());
    /// let value = BigUint::from_str_radix("deadbeef", 16).unwrap();
    /// assert_eq!(value.to_u64(), Some(0xdead_beef));
    /// ```
    pub fn from_str_radix(source: &str, radix: u32) -> Result<BigUint, ParseBigIntError> {
        check_radix(radix);

        let bytes = source.strip_prefix('+').map_or(source.as_bytes(), str::as_bytes);
        let sign_len = source.len() - bytes.len();
        if bytes.is_empty() {
            return Err(EmptyInputError.into());
        }

        // Digits are folded into u32-sized chunks first, so the expensive limb operations run
        // once per chunk rather than once per digit.
        let chunk_digits = chunk_digits_for(radix);
        let chunk_radix = radix.pow(chunk_digits);

        let mut limbs = vec![0];
        let mut chunk = 0_u32;
        let mut pending = 0_u32;
        for (offset, &byte) in bytes.iter().enumerate() {
            let digit = match (byte as char).to_digit(radix) {
                Some(digit) => digit,
                None => {
                    return Err(InvalidDigitError { offset: offset + sign_len, byte }.into());
                }
            };

            chunk = chunk * radix + digit;
            pending += 1;
            if pending == chunk_digits {
                algo::mul_small(&mut limbs, chunk_radix);
                algo::add_small(&mut limbs, chunk);
                chunk = 0;
                pending = 0;
            }
        }
        if pending > 0 {
            algo::mul_small(&mut limbs, radix.pow(pending));
            algo::add_small(&mut limbs, chunk);
        }

        Ok(BigUint { limbs })
    }

    /// Formats the value in the given radix, lowercase, without any prefix.
    ///
    /// # Panics
    /// Panics if the radix is outside `2..=36`.
    ///
    /// # Examples
    /// ```
    /// # use hamon::bigint::BigUint;
    /// assert_eq!(BigUint::from(255_u32).to_string_radix(16), "ff");
    /// assert_eq!(BigUint::from(5_u32).to_string_radix(2), "101");
    /// ```
    pub fn to_string_radix(&self, radix: u32) -> String {
        check_radix(radix);

        if self.is_zero() {
            return "0".to_string();
        }

        let chunk_digits = chunk_digits_for(radix);
        let chunk_radix = radix.pow(chunk_digits);

        // Peel off chunk_digits digits at a time from the bottom; the chunks come out least
        // significant first.
        let mut scratch = self.limbs.clone();
        let mut chunks = Vec::new();
        while !algo::is_zero(&scratch) {
            chunks.push(algo::div_rem_small(&mut scratch, chunk_radix));
        }

        let mut out = Vec::with_capacity(chunks.len() * chunk_digits as usize);
        for (i, &chunk) in chunks.iter().rev().enumerate() {
            let mut digits = [0_u8; 32];
            let mut len = 0;
            let mut chunk = chunk;
            while chunk > 0 {
                digits[len] = DIGITS[(chunk % radix) as usize];
                chunk /= radix;
                len += 1;
            }
            // Interior chunks carry their leading zeros; the first does not.
            let width = if i == 0 { len } else { chunk_digits as usize };
            for j in (0..width).rev() {
                out.push(if j < len { digits[j] } else { b'0' });
            }
        }

        // The digit table only produces ASCII.
        String::from_utf8(out).throw()
    }

    /// Returns the quotient and remainder in a single division.
    ///
    /// # Panics
    /// Panics if `rhs` is zero.
    ///
    /// # Examples
    /// ```
    /// # use hamon::bigint::BigUint;
    /// let (quotient, remainder) = BigUint::from(47_u32).div_rem(&BigUint::from(10_u32));
    /// assert_eq!((quotient.to_u64(), remainder.to_u64()), (Some(4), Some(7)));
    /// ```
    pub fn div_rem(&self, rhs: &BigUint) -> (BigUint, BigUint) {
        if rhs.is_zero() {
            Err(DivideByZero).throw()
        }
        let (quotient, remainder) = algo::div_rem(&self.limbs, &rhs.limbs);
        (BigUint { limbs: quotient }, BigUint { limbs: remainder })
    }

    /// Subtracts `rhs`, returning `None` if the difference would be negative.
    ///
    /// # Examples
    /// ```
    /// # use hamon::bigint::BigUint;
    /// let five = BigUint::from(5_u32);
    /// let three = BigUint::from(3_u32);
    /// assert_eq!(five.checked_sub(&three), Some(BigUint::from(2_u32)));
    /// assert_eq!(three.checked_sub(&five), None);
    /// ```
    pub fn checked_sub(&self, rhs: &BigUint) -> Option<BigUint> {
        if self < rhs {
            return None;
        }
        let mut limbs = self.limbs.clone();
        algo::sub(&mut limbs, &rhs.limbs);
        Some(BigUint { limbs })
    }

    /// Raises the value to the given power by binary exponentiation. `0^0` is 1, following the
    /// convention of [`u32::pow`].
    pub fn pow(&self, mut exponent: u32) -> BigUint {
        let mut result = BigUint::from(1_u32);
        let mut base = self.clone();

        while exponent > 0 {
            if exponent & 1 == 1 {
                result.limbs = algo::mul(&result.limbs, &base.limbs);
            }
            exponent >>= 1;
            if exponent > 0 {
                base.limbs = algo::mul(&base.limbs, &base.limbs);
            }
        }

        result
    }

    /// Returns the value as a `u64` if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        algo::to_u64(&self.limbs)
    }

    /// Rounds the value to the nearest `f64` (ties to even), overflowing to infinity.
    ///
    /// # Examples
    /// ```
    /// # use hamon::bigint::BigUint;
    /// assert_eq!(BigUint::from(1_u64 << 60).to_f64(), (1_u64 << 60) as f64);
    /// assert_eq!(BigUint::from(10_u32).pow(400).to_f64(), f64::INFINITY);
    /// ```
    pub fn to_f64(&self) -> f64 {
        let bits = self.bit_length();
        if bits <= 64 {
            // Within u64 the primitive conversion already rounds to nearest.
            return self.to_u64().unwrap_or(0) as f64;
        }

        // Take the top 64 bits and fold everything below them into a sticky bit. The sticky bit
        // sits well below the 53-bit mantissa, so the u64 conversion performs the correctly
        // rounded halving for us.
        let shift = bits - 64;
        let mut top = self.limbs.clone();
        algo::shr(&mut top, shift);
        let mut top64 = algo::to_u64(&top).unwrap_or(u64::MAX);

        let mut sticky = false;
        for i in 0..shift / 32 {
            sticky |= self.limbs[i] != 0;
        }
        if shift % 32 != 0 {
            sticky |= self.limbs[shift / 32] << (32 - shift % 32) != 0;
        }
        if sticky {
            top64 |= 1;
        }

        (top64 as f64) * 2.0_f64.powi(shift as i32)
    }
}

/// The number of radix digits that fit in a u32 chunk.
fn chunk_digits_for(radix: u32) -> u32 {
    let mut digits = 0;
    let mut value = 1_u64;
    while value * radix as u64 <= u32::MAX as u64 {
        value *= radix as u64;
        digits += 1;
    }
    digits
}

impl Default for BigUint {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! biguint_from_unsigned {
    ($($from:ty),+) => {$(
        impl From<$from> for BigUint {
            fn from(value: $from) -> Self {
                let mut limbs = Vec::new();
                let mut value = value as u128;
                loop {
                    limbs.push(value as u32);
                    value >>= 32;
                    if value == 0 { break; }
                }
                BigUint { limbs }
            }
        }
    )+};
}

biguint_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        algo::compare(&self.limbs, &other.limbs)
    }
}

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for BigUint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.limbs.hash(state);
    }
}

impl Add<&BigUint> for BigUint {
    type Output = BigUint;

    fn add(mut self, rhs: &BigUint) -> BigUint {
        algo::add(&mut self.limbs, &rhs.limbs);
        self
    }
}

impl Sub<&BigUint> for BigUint {
    type Output = BigUint;

    /// # Panics
    /// Panics if the difference would be negative.
    fn sub(self, rhs: &BigUint) -> BigUint {
        self.checked_sub(rhs).ok_or(NegativeDifferenceError).throw()
    }
}

impl Mul<&BigUint> for BigUint {
    type Output = BigUint;

    fn mul(self, rhs: &BigUint) -> BigUint {
        BigUint { limbs: algo::mul(&self.limbs, &rhs.limbs) }
    }
}

impl Div<&BigUint> for BigUint {
    type Output = BigUint;

    /// # Panics
    /// Panics if `rhs` is zero.
    fn div(self, rhs: &BigUint) -> BigUint {
        if rhs.is_zero() {
            Err(DivideByZero).throw()
        }
        BigUint { limbs: algo::div_rem(&self.limbs, &rhs.limbs).0 }
    }
}

impl Rem<&BigUint> for BigUint {
    type Output = BigUint;

    /// # Panics
    /// Panics if `rhs` is zero.
    fn rem(self, rhs: &BigUint) -> BigUint {
        if rhs.is_zero() {
            Err(DivideByZero).throw()
        }
        BigUint { limbs: algo::div_rem(&self.limbs, &rhs.limbs).1 }
    }
}

impl BitAnd<&BigUint> for BigUint {
    type Output = BigUint;

    fn bitand(mut self, rhs: &BigUint) -> BigUint {
        algo::bit_and(&mut self.limbs, &rhs.limbs);
        self
    }
}

impl BitOr<&BigUint> for BigUint {
    type Output = BigUint;

    fn bitor(mut self, rhs: &BigUint) -> BigUint {
        algo::bit_or(&mut self.limbs, &rhs.limbs);
        self
    }
}

impl BitXor<&BigUint> for BigUint {
    type Output = BigUint;

    fn bitxor(mut self, rhs: &BigUint) -> BigUint {
        algo::bit_xor(&mut self.limbs, &rhs.limbs);
        self
    }
}

/// Forwards the owned-rhs form of a binary operator to the by-reference implementation above.
macro_rules! forward_owned_binop {
    ($(($trait:ident, $method:ident)),+) => {$(
        impl $trait<BigUint> for BigUint {
            type Output = BigUint;

            fn $method(self, rhs: BigUint) -> BigUint {
                $trait::<&BigUint>::$method(self, &rhs)
            }
        }
    )+};
}

forward_owned_binop!(
    (Add, add), (Sub, sub), (Mul, mul), (Div, div), (Rem, rem),
    (BitAnd, bitand), (BitOr, bitor), (BitXor, bitxor)
);

impl AddAssign<&BigUint> for BigUint {
    fn add_assign(&mut self, rhs: &BigUint) {
        algo::add(&mut self.limbs, &rhs.limbs);
    }
}

impl SubAssign<&BigUint> for BigUint {
    /// # Panics
    /// Panics if the difference would be negative.
    fn sub_assign(&mut self, rhs: &BigUint) {
        *self = std::mem::take(self) - rhs;
    }
}

impl MulAssign<&BigUint> for BigUint {
    fn mul_assign(&mut self, rhs: &BigUint) {
        self.limbs = algo::mul(&self.limbs, &rhs.limbs);
    }
}

impl Shl<usize> for BigUint {
    type Output = BigUint;

    fn shl(mut self, bits: usize) -> BigUint {
        algo::shl(&mut self.limbs, bits);
        self
    }
}

impl Shr<usize> for BigUint {
    type Output = BigUint;

    fn shr(mut self, bits: usize) -> BigUint {
        algo::shr(&mut self.limbs, bits);
        self
    }
}

impl FromStr for BigUint {
    type Err = ParseBigIntError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        BigUint::from_str_radix(source, 10)
    }
}

impl Display for BigUint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_radix(10))
    }
}

impl Debug for BigUint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BigUint")
            .field("value", &DebugUnquoted(self.to_string_radix(10)))
            .field("limbs", &self.limbs.len())
            .finish()
    }
}
