//! Limb-wise arithmetic primitives over little-endian `u32` slices.
//!
//! # Purpose
//! These free functions are the building blocks that [`BigUint`](super::BigUint) and
//! [`BigInt`](super::BigInt) are assembled from. They are public because the conversion code uses
//! them directly when a full wrapper type would only get in the way, but they come with
//! representation requirements that the wrappers normally hide.
//!
//! # Representation
//! A value is a little-endian slice of 32-bit limbs: `limbs[0]` holds the least significant bits.
//! The *normalized* form has no trailing (most significant) zero limbs and is never empty; the
//! value zero is exactly `[0]`. Unless documented otherwise, every function expects normalized
//! inputs and produces normalized outputs.
//!
//! The fixed-width functions over `[u32; N]` are the exception: they model a machine register of
//! `32*N` bits, so all `N` limbs are significant, arithmetic wraps and the carry out of the top
//! limb is returned to the caller.

mod arithmetic;
mod bits;
mod muldiv;

pub use arithmetic::*;
pub use bits::*;
pub use muldiv::*;

mod tests;
