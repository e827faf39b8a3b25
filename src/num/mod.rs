//! Bit-level views of the IEEE-754 floating point types.
//!
//! # Purpose
//! Everything the conversion code in this crate does starts from the same three questions: what is
//! the sign, what is the mantissa, what is the binary exponent. [`FloatBits32`] and [`FloatBits64`]
//! answer them without any floating point arithmetic, working purely on the bit patterns, which
//! also makes them usable as hash keys and for exact equality (two NaNs with the same payload
//! compare equal, `0.0` and `-0.0` do not).

mod float_bits;

pub use float_bits::*;
