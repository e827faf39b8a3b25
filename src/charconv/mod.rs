//! Locale-independent conversion between numbers and their decimal (or other radix) text forms.
//!
//! # Purpose
//! This is the part of a standard library that turns `0.1_f64` into `"0.1"` and back without
//! losing a bit. The integer half is bookkeeping; the floating point half is the reason this
//! module exists. Formatting uses the Ryu algorithm for the shortest digit string that round
//! trips, and parsing is correctly rounded for any input length, falling back from a fast exact
//! path to exact big-integer arithmetic built on [`bigint`](crate::bigint).
//!
//! # Method
//! All functions work on byte buffers rather than [`String`]s: formatting writes into a
//! `&mut [u8]` and returns the number of bytes written, parsing reads from a `&[u8]` and returns
//! the value together with the number of bytes consumed. This keeps the core allocation-free and
//! lets callers place the text exactly where they need it; `String` convenience is one
//! `from_utf8` away.
//!
//! ```
//! # use hamon::charconv::{from_chars, to_chars};
//! let mut buffer = [0_u8; 32];
//! let len = to_chars(&mut buffer, -123_456_i32, 10).unwrap();
//! assert_eq!(&buffer[..len], b"-123456");
//!
//! let (value, consumed) = from_chars::<i32>(b"-123456xyz", 10).unwrap();
//! assert_eq!((value, consumed), (-123_456, 7));
//! ```

mod error;
mod float;
mod from_chars;
mod primitive;
mod to_chars;

pub use error::*;
pub use float::*;
pub use from_chars::*;
pub use primitive::*;
pub use to_chars::*;
