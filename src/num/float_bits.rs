use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::num::FpCategory;

/// Wrapper for [`f32`] providing bit-pattern based equality, hashing and field access.
///
/// # Examples
/// ```
/// # use hamon::num::FloatBits32;
/// assert_eq!(FloatBits32::from_float(1.5).mantissa(), 1 << 22);
/// assert_ne!(FloatBits32::from_float(0.0), FloatBits32::from_float(-0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct FloatBits32(pub u32);

/// Wrapper for [`f64`] providing bit-pattern based equality, hashing and field access.
///
/// # Examples
/// ```
/// # use hamon::num::FloatBits64;
/// let (neg, m2, e2) = FloatBits64::from_float(0.5).decompose();
/// assert!(!neg);
/// assert_eq!(m2, 1 << 52);
/// assert_eq!(e2, -53);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct FloatBits64(pub u64);

macro_rules! float_bits_impl {
    (
        $name:ident, $float:ty, $bits:ty,
        mantissa: $mant_bits:expr, exponent: $exp_bits:expr, nan: $nan:expr
    ) => {
        impl $name {
            /// The number of explicitly stored mantissa bits.
            pub const MANTISSA_BITS: u32 = $mant_bits;
            /// The number of exponent bits.
            pub const EXPONENT_BITS: u32 = $exp_bits;
            /// The exponent bias.
            pub const BIAS: i32 = (1 << ($exp_bits - 1)) - 1;
            /// A canonical quiet NaN: sign 0, exponent all ones, mantissa MSB set.
            pub const NAN: Self = Self($nan);

            const SIGN_MASK: $bits = 1 << ($mant_bits + $exp_bits);
            const MANTISSA_MASK: $bits = (1 << $mant_bits) - 1;
            const EXPONENT_MAX: $bits = (1 << $exp_bits) - 1;

            /// Creates a wrapper from a float value.
            pub fn from_float(value: $float) -> Self {
                Self(value.to_bits())
            }

            /// Creates a wrapper from a raw bit pattern.
            pub const fn from_bits(bits: $bits) -> Self {
                Self(bits)
            }

            /// Returns the float value represented by this bit pattern.
            pub const fn value(self) -> $float {
                <$float>::from_bits(self.0)
            }

            /// Returns the raw bit pattern.
            pub const fn to_bits(self) -> $bits {
                self.0
            }

            /// Returns true if the sign bit is set. Note that this is also true for `-0.0` and
            /// negatively signed NaNs.
            pub const fn is_sign_negative(self) -> bool {
                self.0 & Self::SIGN_MASK != 0
            }

            /// Returns the raw biased exponent field.
            pub const fn biased_exponent(self) -> u32 {
                ((self.0 >> $mant_bits) & Self::EXPONENT_MAX) as u32
            }

            /// Returns the raw mantissa field, without the hidden bit.
            pub const fn mantissa(self) -> $bits {
                self.0 & Self::MANTISSA_MASK
            }

            /// Returns true if this pattern encodes a NaN (any payload).
            pub const fn is_nan(self) -> bool {
                self.biased_exponent() == Self::EXPONENT_MAX as u32 && self.mantissa() != 0
            }

            /// Returns true if this pattern encodes positive or negative infinity.
            pub const fn is_infinite(self) -> bool {
                self.biased_exponent() == Self::EXPONENT_MAX as u32 && self.mantissa() == 0
            }

            /// Returns true for `0.0` and `-0.0`.
            pub const fn is_zero(self) -> bool {
                self.0 & !Self::SIGN_MASK == 0
            }

            /// Classifies the value, matching [`f64::classify`].
            pub const fn classify(self) -> FpCategory {
                match (self.biased_exponent(), self.mantissa()) {
                    (0, 0) => FpCategory::Zero,
                    (0, _) => FpCategory::Subnormal,
                    (e, 0) if e == Self::EXPONENT_MAX as u32 => FpCategory::Infinite,
                    (e, _) if e == Self::EXPONENT_MAX as u32 => FpCategory::Nan,
                    _ => FpCategory::Normal,
                }
            }

            /// Splits a finite value into `(negative, m2, e2)` such that the value is exactly
            /// `(-1)^negative * m2 * 2^e2`. Normal values have the hidden bit restored, subnormal
            /// values use the minimum exponent, zeros return an `m2` of zero.
            ///
            /// The result for infinities and NaNs is meaningless; callers are expected to have
            /// classified the value first.
            pub const fn decompose(self) -> (bool, $bits, i32) {
                let exponent = self.biased_exponent();
                let mantissa = self.mantissa();

                let (m2, e2) = if exponent == 0 {
                    (mantissa, 1 - Self::BIAS - Self::MANTISSA_BITS as i32)
                } else {
                    (
                        mantissa | (1 << Self::MANTISSA_BITS),
                        exponent as i32 - Self::BIAS - Self::MANTISSA_BITS as i32,
                    )
                };

                (self.is_sign_negative(), m2, e2)
            }

            /// Returns the next representable value toward positive infinity. NaNs and positive
            /// infinity are returned unchanged.
            pub const fn next_up(self) -> Self {
                if self.is_nan() || (self.is_infinite() && !self.is_sign_negative()) {
                    self
                } else if self.0 == Self::SIGN_MASK || self.0 == 0 {
                    // Both zeros step up to the smallest positive subnormal.
                    Self(1)
                } else if self.is_sign_negative() {
                    Self(self.0 - 1)
                } else {
                    Self(self.0 + 1)
                }
            }

            /// Returns the next representable value toward negative infinity. NaNs and negative
            /// infinity are returned unchanged.
            pub const fn next_down(self) -> Self {
                if self.is_nan() || (self.is_infinite() && self.is_sign_negative()) {
                    self
                } else if self.0 == Self::SIGN_MASK || self.0 == 0 {
                    // Both zeros step down to the smallest negative subnormal.
                    Self(Self::SIGN_MASK | 1)
                } else if self.is_sign_negative() {
                    Self(self.0 + 1)
                } else {
                    Self(self.0 - 1)
                }
            }
        }

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.0.hash(state);
            }
        }

        impl From<$float> for $name {
            fn from(value: $float) -> Self {
                Self::from_float(value)
            }
        }

        impl From<$name> for $float {
            fn from(value: $name) -> Self {
                value.value()
            }
        }
    };
}

float_bits_impl!(FloatBits32, f32, u32, mantissa: 23, exponent: 8, nan: 0x7fc0_0000);
float_bits_impl!(FloatBits64, f64, u64, mantissa: 52, exponent: 11, nan: 0x7ff8_0000_0000_0000);

/// Compares two bit patterns using the IEEE-754 `totalOrder` predicate: negative NaNs first,
/// then negative reals, zeros (`-0.0 < 0.0`), positive reals, positive NaNs last.
pub fn total_order64(a: FloatBits64, b: FloatBits64) -> Ordering {
    // Flip negative patterns so that plain unsigned order matches the float order.
    const fn key(bits: u64) -> u64 {
        if bits & FloatBits64::SIGN_MASK != 0 {
            !bits
        } else {
            bits | FloatBits64::SIGN_MASK
        }
    }
    key(a.0).cmp(&key(b.0))
}
