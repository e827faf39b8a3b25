//! Special mathematical functions over `f64`.
//!
//! # Purpose
//! The far end of a math library: gamma and beta, the complete and incomplete elliptic
//! integrals, orthogonal polynomial families, the exponential integral and the Riemann zeta
//! function. These are the functions whose implementations are genuinely numerical - series with
//! convergence conditions, recurrences with stability directions, reflection formulas - rather
//! than wrappers over hardware operations.
//!
//! # Method
//! Everything follows published, well-conditioned constructions: the elliptic integrals go
//! through Carlson's symmetric forms with the duplication theorem, log-gamma through the Lanczos
//! approximation, zeta through Borwein's accelerated alternating series. Every function
//! propagates NaN and answers domain violations with NaN instead of panicking, so the functions
//! compose the way the built-in float operations do.

mod carlson;
mod ellint;
mod expint;
mod gamma;
mod legendre;
mod poly;
mod zeta;

pub use carlson::*;
pub use ellint::*;
pub use expint::*;
pub use gamma::*;
pub use legendre::*;
pub use poly::*;
pub use zeta::*;

mod tests;
