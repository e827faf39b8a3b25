use std::f64::consts::FRAC_PI_2;

use super::carlson::{carlson_rd, carlson_rf, carlson_rj};

/// The complete elliptic integral of the first kind `K(k)`, in the modulus convention:
/// `K(k) = F(k, pi/2)`.
///
/// Returns infinity at `|k| = 1` and NaN beyond.
///
/// # Examples
/// ```
/// # use hamon::math::comp_ellint_1;
/// assert!((comp_ellint_1(0.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-14);
/// ```
pub fn comp_ellint_1(k: f64) -> f64 {
    if k.is_nan() {
        return f64::NAN;
    }
    if k.abs() > 1.0 {
        return f64::NAN;
    }
    if k.abs() == 1.0 {
        return f64::INFINITY;
    }

    carlson_rf(0.0, 1.0 - k * k, 1.0)
}

/// The complete elliptic integral of the second kind `E(k)`.
///
/// # Examples
/// ```
/// # use hamon::math::comp_ellint_2;
/// assert_eq!(comp_ellint_2(1.0), 1.0);
/// ```
pub fn comp_ellint_2(k: f64) -> f64 {
    if k.is_nan() {
        return f64::NAN;
    }
    if k.abs() > 1.0 {
        return f64::NAN;
    }
    if k.abs() == 1.0 {
        return 1.0;
    }

    let c = 1.0 - k * k;
    carlson_rf(0.0, c, 1.0) - k * k / 3.0 * carlson_rd(0.0, c, 1.0)
}

/// The complete elliptic integral of the third kind `Pi(k, nu)`, defined as the integral of
/// `1 / ((1 - nu sin^2 t) sqrt(1 - k^2 sin^2 t))` over `[0, pi/2]`.
///
/// Diverges to infinity as `nu` approaches 1 from below; `nu > 1` (where the integral only
/// exists as a principal value) returns NaN.
pub fn comp_ellint_3(k: f64, nu: f64) -> f64 {
    if k.is_nan() || nu.is_nan() {
        return f64::NAN;
    }
    if k.abs() > 1.0 || nu > 1.0 {
        return f64::NAN;
    }
    if nu == 1.0 || k.abs() == 1.0 {
        return f64::INFINITY;
    }

    let c = 1.0 - k * k;
    carlson_rf(0.0, c, 1.0) + nu / 3.0 * carlson_rj(0.0, c, 1.0, 1.0 - nu)
}

/// The incomplete elliptic integral of the first kind `F(k, phi)`.
///
/// `phi` beyond `[-pi/2, pi/2]` is reduced through the periodicity relation
/// `F(k, phi + n pi) = F(k, phi) + 2 n K(k)`.
pub fn ellint_1(k: f64, phi: f64) -> f64 {
    if k.is_nan() || phi.is_nan() {
        return f64::NAN;
    }
    if k.abs() > 1.0 || phi.is_infinite() {
        return f64::NAN;
    }

    let (periods, reduced) = reduce_phi(phi);
    let complete = if periods == 0.0 { 0.0 } else { 2.0 * periods * comp_ellint_1(k) };

    let s = reduced.sin();
    let c = reduced.cos();
    let q = 1.0 - (k * s) * (k * s);
    if q <= 0.0 {
        // |k sin(phi)| has reached 1: the integrand's singularity.
        return f64::INFINITY;
    }

    complete + s * carlson_rf(c * c, q, 1.0)
}

/// The incomplete elliptic integral of the second kind `E(k, phi)`, reduced through
/// `E(k, phi + n pi) = E(k, phi) + 2 n E(k)`.
pub fn ellint_2(k: f64, phi: f64) -> f64 {
    if k.is_nan() || phi.is_nan() {
        return f64::NAN;
    }
    if k.abs() > 1.0 || phi.is_infinite() {
        return f64::NAN;
    }

    let (periods, reduced) = reduce_phi(phi);
    let complete = if periods == 0.0 { 0.0 } else { 2.0 * periods * comp_ellint_2(k) };

    let s = reduced.sin();
    let c = reduced.cos();
    let q = 1.0 - (k * s) * (k * s);
    if q < 0.0 {
        return f64::NAN;
    }

    complete + s * carlson_rf(c * c, q, 1.0)
        - k * k / 3.0 * s.powi(3) * carlson_rd(c * c, q, 1.0)
}

/// The incomplete elliptic integral of the third kind `Pi(k, nu, phi)`, reduced through the
/// corresponding periodicity in the complete integral.
pub fn ellint_3(k: f64, nu: f64, phi: f64) -> f64 {
    if k.is_nan() || nu.is_nan() || phi.is_nan() {
        return f64::NAN;
    }
    if k.abs() > 1.0 || phi.is_infinite() {
        return f64::NAN;
    }

    let (periods, reduced) = reduce_phi(phi);
    let complete = if periods == 0.0 { 0.0 } else { 2.0 * periods * comp_ellint_3(k, nu) };

    let s = reduced.sin();
    let c = reduced.cos();
    let q = 1.0 - (k * s) * (k * s);
    let pole = 1.0 - nu * s * s;
    if q <= 0.0 || pole <= 0.0 {
        return f64::NAN;
    }

    complete
        + s * carlson_rf(c * c, q, 1.0)
        + nu / 3.0 * s.powi(3) * carlson_rj(c * c, q, 1.0, pole)
}

/// Splits `phi` into a whole number of half-period reflections and a remainder within
/// `[-pi/2, pi/2]`.
fn reduce_phi(phi: f64) -> (f64, f64) {
    let periods = (phi / std::f64::consts::PI).round();
    let reduced = phi - periods * std::f64::consts::PI;
    // Guard against the rounding edge exactly at the boundary.
    if reduced.abs() > FRAC_PI_2 {
        (periods, reduced.clamp(-FRAC_PI_2, FRAC_PI_2))
    } else {
        (periods, reduced)
    }
}
