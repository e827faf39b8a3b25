//! Arbitrary-precision integers and the limb arithmetic underneath them.
//!
//! # Purpose
//! Every interesting piece of this crate eventually needs integers wider than 128 bits: the float
//! parser compares 800-digit decimals against exact binary values, the formatter expands
//! fractions exactly, and the Ryu tables are built from large powers of five. [`BigUint`] and
//! [`BigInt`] are that foundation.
//!
//! # Method
//! The representation is a little-endian vector of `u32` limbs, kept normalized (no trailing zero
//! limbs, with zero itself stored as a single `0` limb). All the actual arithmetic lives in
//! [`algo`] as free functions over limb slices, in two flavours: growable operations on
//! [`Vec<u32>`] which never overflow, and fixed-width operations on `[u32; N]` which wrap modulo
//! `2^(32*N)` and report their carry, the same split a machine integer emulation layer needs.
//! The wrapper types only add sign handling, operators and string conversion on top.

pub mod algo;

mod big_int;
mod big_uint;
mod error;

pub use big_int::*;
pub use big_uint::*;
pub use error::*;

mod tests;
