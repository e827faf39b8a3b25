//! This crate is my attempt at writing the numeric core of a standard library from scratch.
//!
//! # Purpose
//! This repo / crate is a project that I'm working on as a learning experience, with no expectation
//! for it to be used in production. The parts of a standard library that always looked like magic
//! to me are the numeric ones: how `0.1` becomes `"0.1"` and comes back bit-identical, how parsing
//! rounds correctly when the input has 800 digits, how `nth_element` stays linear. Writing them
//! is the best way I know to stop them being magic.
//!
//! # Method
//! Everything here is written against published material rather than copied from an existing
//! implementation: the Ryu paper for shortest float formatting, Knuth's Algorithm D for long
//! division, Carlson's symmetric forms for the elliptic integrals. I'm not restricting myself from
//! reading other libraries' APIs for inspiration, especially [`std`]'s, but the code is mine.
//!
//! The crate is split into component groups, each behind a feature of the same name:
//! - [`bigint`]: arbitrary-precision integers over little-endian `u32` limbs.
//! - [`charconv`]: binary/decimal conversion for integers and floats, including shortest
//!   round-trip float formatting and correctly-rounded parsing.
//! - [`math`]: the "special function" end of a math library - elliptic integrals, Legendre
//!   polynomials and friends.
//! - [`algo`]: generic sorting, selection, heap and merge algorithms over slices.
//!
//! # Error Handling
//! Like a real standard library, fallible operations whose failure a caller can reasonably be
//! expected to handle return strongly typed [`Result`]s: enums for static dispatch rather than
//! dynamic, built from structs (often ZSTs) that implement [`Error`](std::error::Error).
//! Programmer errors - an out of range radix, an out of bounds index - panic instead, because
//! nobody wants to handle a `RadixOutOfRange` error every time they format an integer in base 10.
//! When we panic, the message is the [`Display`](std::fmt::Display) output of the same typed
//! error we would otherwise have returned.
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming. There is deliberately no logging, no allocator shenanigans and no
//! unsafe code: all the difficulty here is in the arithmetic.

#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "algo")]
pub mod algo;
#[cfg(feature = "bigint")]
pub mod bigint;
#[cfg(feature = "charconv")]
pub mod charconv;
#[cfg(feature = "math")]
pub mod math;
pub mod num;

pub(crate) mod util;
