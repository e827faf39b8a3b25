use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Rem, Shl, Shr, Sub};
use std::str::FromStr;

use crate::bigint::error::{EmptyInputError, InvalidDigitError, ParseBigIntError};
use crate::bigint::BigUint;
use crate::util::fmt::DebugUnquoted;

/// A signed integer of arbitrary size: a sign and a [`BigUint`] magnitude.
///
/// Zero is always stored with a positive sign, so there is exactly one representation per value
/// and derived equality works. Division truncates toward zero and the remainder takes the sign of
/// the dividend, the same contract as the primitive integer types.
///
/// # Examples
/// ```
/// # use hamon::bigint::BigInt;
/// let a: BigInt = "-340282366920938463463374607431768211456".parse().unwrap();
/// assert_eq!(a, -BigInt::from(1_u32 << 16).pow(8));
/// assert_eq!((a.clone() / BigInt::from(2)) * BigInt::from(2), a);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BigInt {
    negative: bool,
    magnitude: BigUint,
}

impl BigInt {
    /// Creates a new BigInt with value zero.
    pub fn new() -> BigInt {
        BigInt { negative: false, magnitude: BigUint::new() }
    }

    /// Assembles a value from a sign and magnitude, normalizing the sign of zero.
    pub fn from_sign_magnitude(negative: bool, magnitude: BigUint) -> BigInt {
        BigInt { negative: negative && !magnitude.is_zero(), magnitude }
    }

    /// Returns true if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// Returns true if the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns the magnitude, discarding the sign.
    pub fn into_magnitude(self) -> BigUint {
        self.magnitude
    }

    /// Borrows the magnitude.
    pub fn magnitude(&self) -> &BigUint {
        &self.magnitude
    }

    /// Parses a value from a string in the given radix: an optional `+` or `-` followed by one or
    /// more digits.
    ///
    /// # Panics
    /// Panics if the radix is outside `2..=36`.
    pub fn from_str_radix(source: &str, radix: u32) -> Result<BigInt, ParseBigIntError> {
        super::check_radix(radix);

        let (negative, rest) = match source.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, source.strip_prefix('+').unwrap_or(source)),
        };
        if rest.is_empty() {
            return Err(EmptyInputError.into());
        }
        // BigUint tolerates a leading plus of its own; "-+5" must not slip through as -5.
        if negative && rest.starts_with('+') {
            return Err(InvalidDigitError { offset: 1, byte: b'+' }.into());
        }

        // Re-parsing through BigUint would misreport offsets past a sign, so adjust them.
        let sign_len = source.len() - rest.len();
        let magnitude = BigUint::from_str_radix(rest, radix).map_err(|error| match error {
            ParseBigIntError::InvalidDigit(mut inner) => {
                inner.offset += sign_len;
                inner.into()
            }
            other => other,
        })?;

        Ok(BigInt::from_sign_magnitude(negative, magnitude))
    }

    /// Formats the value in the given radix, lowercase, with a leading `-` when negative.
    ///
    /// # Panics
    /// Panics if the radix is outside `2..=36`.
    pub fn to_string_radix(&self, radix: u32) -> String {
        let digits = self.magnitude.to_string_radix(radix);
        if self.negative {
            format!("-{digits}")
        } else {
            digits
        }
    }

    /// Raises the value to the given power by binary exponentiation on the magnitude.
    pub fn pow(&self, exponent: u32) -> BigInt {
        BigInt::from_sign_magnitude(
            self.negative && exponent % 2 == 1,
            self.magnitude.pow(exponent),
        )
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> BigInt {
        BigInt { negative: false, magnitude: self.magnitude.clone() }
    }

    /// Returns the value as an `i64` if it fits.
    pub fn to_i64(&self) -> Option<i64> {
        let magnitude = self.magnitude.to_u64()?;
        if self.negative {
            // i64::MIN has no positive counterpart, so it needs the explicit comparison.
            if magnitude > 1 << 63 {
                None
            } else {
                Some((magnitude as i64).wrapping_neg())
            }
        } else {
            i64::try_from(magnitude).ok()
        }
    }

    /// Rounds the value to the nearest `f64` (ties to even), overflowing to `±inf`.
    pub fn to_f64(&self) -> f64 {
        let magnitude = self.magnitude.to_f64();
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! bigint_from_signed {
    ($($from:ty),+) => {$(
        impl From<$from> for BigInt {
            fn from(value: $from) -> Self {
                let negative = value < 0;
                BigInt {
                    negative,
                    magnitude: BigUint::from((value as i128).unsigned_abs()),
                }
            }
        }
    )+};
}

macro_rules! bigint_from_unsigned {
    ($($from:ty),+) => {$(
        impl From<$from> for BigInt {
            fn from(value: $from) -> Self {
                BigInt { negative: false, magnitude: BigUint::from(value) }
            }
        }
    )+};
}

bigint_from_signed!(i8, i16, i32, i64, i128, isize);
bigint_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl From<BigUint> for BigInt {
    fn from(value: BigUint) -> Self {
        BigInt { negative: false, magnitude: value }
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.negative.hash(state);
        self.magnitude.hash(state);
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::from_sign_magnitude(!self.negative, self.magnitude)
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, rhs: BigInt) -> BigInt {
        if self.negative == rhs.negative {
            return BigInt::from_sign_magnitude(self.negative, self.magnitude + rhs.magnitude);
        }

        // Opposite signs: the result takes the sign of the larger magnitude.
        match self.magnitude.cmp(&rhs.magnitude) {
            Ordering::Less => {
                BigInt::from_sign_magnitude(rhs.negative, rhs.magnitude - self.magnitude)
            }
            _ => BigInt::from_sign_magnitude(self.negative, self.magnitude - rhs.magnitude),
        }
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, rhs: BigInt) -> BigInt {
        self + -rhs
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: BigInt) -> BigInt {
        BigInt::from_sign_magnitude(
            self.negative != rhs.negative,
            self.magnitude * rhs.magnitude,
        )
    }
}

impl Div for BigInt {
    type Output = BigInt;

    /// Truncated division, like the primitive `/`.
    ///
    /// # Panics
    /// Panics if `rhs` is zero.
    fn div(self, rhs: BigInt) -> BigInt {
        BigInt::from_sign_magnitude(
            self.negative != rhs.negative,
            self.magnitude / rhs.magnitude,
        )
    }
}

impl Rem for BigInt {
    type Output = BigInt;

    /// The remainder takes the sign of the dividend, like the primitive `%`.
    ///
    /// # Panics
    /// Panics if `rhs` is zero.
    fn rem(self, rhs: BigInt) -> BigInt {
        BigInt::from_sign_magnitude(self.negative, self.magnitude % rhs.magnitude)
    }
}

impl Shl<usize> for BigInt {
    type Output = BigInt;

    fn shl(self, bits: usize) -> BigInt {
        BigInt { negative: self.negative, magnitude: self.magnitude << bits }
    }
}

impl Shr<usize> for BigInt {
    type Output = BigInt;

    /// Shifts the magnitude, truncating toward zero; `-5 >> 1` is `-2`.
    fn shr(self, bits: usize) -> BigInt {
        BigInt::from_sign_magnitude(self.negative, self.magnitude >> bits)
    }
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        BigInt::from_str_radix(source, 10)
    }
}

impl Display for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_radix(10))
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BigInt")
            .field("value", &DebugUnquoted(self.to_string_radix(10)))
            .finish()
    }
}
