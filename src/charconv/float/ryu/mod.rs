//! Shortest round-trip digit generation for binary floating point, after Ulf Adams' Ryu
//! algorithm (PLDI 2018).
//!
//! Given a finite nonzero float decomposed into `m2 * 2^e2`, these routines produce the decimal
//! `d * 10^e` with the fewest digits such that `d * 10^e` is closer to `m2 * 2^e2` than to any
//! other representable float, breaking ties toward even mantissas. The whole computation runs in
//! fixed-width integer arithmetic against precomputed 125-bit (64-bit for `f32`) fixed-point
//! approximations of the needed powers of five.
//!
//! One deliberate deviation from the reference implementation: the power-of-five tables are not
//! pasted into the source as six hundred lines of opaque constants. They are derived on first use
//! from this crate's own big-integer arithmetic, which makes them correct by construction and
//! costs a one-time table build. See [`tables`].

mod common;
mod d2s;
mod f2s;
mod tables;

pub(crate) use common::{decimal_length9, decimal_length17};
pub(crate) use d2s::{FloatingDecimal64, d2d};
pub(crate) use f2s::{FloatingDecimal32, f2d};

mod tests;
