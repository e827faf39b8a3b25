#![cfg(test)]

use std::f64::consts::{FRAC_PI_2, PI};

use super::*;

/// Asserts agreement to a relative (or tiny absolute) tolerance, with a labelled message.
fn assert_close(actual: f64, expected: f64, tolerance: f64, label: &str) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance * scale,
        "{label}: got {actual:e}, expected {expected:e}"
    );
}

#[test]
fn test_gamma() {
    assert_close(tgamma(5.0), 24.0, 1e-13, "gamma(5)");
    assert_close(tgamma(0.5), PI.sqrt(), 1e-13, "gamma(1/2)");
    assert_close(tgamma(-0.5), -2.0 * PI.sqrt(), 1e-13, "gamma(-1/2)");
    assert_close(lgamma(10.0), 362880_f64.ln(), 1e-13, "lgamma(10)");
    assert_close(lgamma(1e-3), (1e-3_f64).recip().ln(), 1e-3, "lgamma near the pole");

    assert_eq!(lgamma(0.0), f64::INFINITY);
    assert_eq!(tgamma(0.0), f64::INFINITY);
    assert_eq!(tgamma(-0.0), f64::NEG_INFINITY);
    assert!(tgamma(-3.0).is_nan(), "Negative integers are poles.");
    assert!(tgamma(f64::NAN).is_nan());
}

#[test]
fn test_beta() {
    assert_close(beta(2.0, 3.0), 1.0 / 12.0, 1e-13, "B(2,3)");
    assert_close(beta(0.5, 0.5), PI, 1e-13, "B(1/2,1/2)");
    assert_close(beta(7.0, 1.0), 1.0 / 7.0, 1e-13, "B(7,1)");
    assert!(beta(-1.0, 2.0).is_nan());
    assert!(beta(f64::NAN, 2.0).is_nan());
}

#[test]
fn test_complete_elliptic() {
    assert_close(comp_ellint_1(0.0), FRAC_PI_2, 1e-14, "K(0)");
    assert_close(comp_ellint_1(0.5), 1.6857503548125961, 1e-13, "K(1/2)");
    assert_eq!(comp_ellint_1(1.0), f64::INFINITY);
    assert!(comp_ellint_1(1.5).is_nan());

    assert_close(comp_ellint_2(0.0), FRAC_PI_2, 1e-14, "E(0)");
    assert_close(comp_ellint_2(0.5), 1.4674622093394272, 1e-13, "E(1/2)");
    assert_eq!(comp_ellint_2(1.0), 1.0);

    // Pi(k, 0) collapses to K(k); Pi(0, nu) has the closed form pi / (2 sqrt(1 - nu)).
    assert_close(comp_ellint_3(0.5, 0.0), comp_ellint_1(0.5), 1e-13, "Pi(k,0)");
    assert_close(comp_ellint_3(0.0, 0.5), PI / (2.0 * 0.5_f64.sqrt()), 1e-13, "Pi(0,nu)");
    assert_eq!(comp_ellint_3(0.5, 1.0), f64::INFINITY);
    assert!(comp_ellint_3(0.5, 1.5).is_nan());
}

#[test]
fn test_incomplete_elliptic() {
    // F and E with k = 0 are the identity on phi.
    assert_close(ellint_1(0.0, 0.7), 0.7, 1e-14, "F(0,phi)");
    assert_close(ellint_2(0.0, 0.7), 0.7, 1e-14, "E(0,phi)");
    // E(1, phi) = sin(phi) within the principal range.
    assert_close(ellint_2(1.0, 0.7), 0.7_f64.sin(), 1e-13, "E(1,phi)");

    // At phi = pi/2 the incomplete forms meet the complete ones.
    assert_close(ellint_1(0.5, FRAC_PI_2), comp_ellint_1(0.5), 1e-13, "F at pi/2");
    assert_close(ellint_2(0.5, FRAC_PI_2), comp_ellint_2(0.5), 1e-13, "E at pi/2");

    // Oddness in phi.
    assert_close(ellint_1(0.5, -0.9), -ellint_1(0.5, 0.9), 1e-14, "F odd");

    // Periodicity reduction: F(k, phi + pi) = F(k, phi) + 2K(k).
    assert_close(
        ellint_1(0.5, 0.4 + PI),
        ellint_1(0.5, 0.4) + 2.0 * comp_ellint_1(0.5),
        1e-13,
        "F reduction",
    );
    assert_close(
        ellint_2(0.5, 0.4 + 2.0 * PI),
        ellint_2(0.5, 0.4) + 4.0 * comp_ellint_2(0.5),
        1e-13,
        "E reduction",
    );

    // Pi(k, 0, phi) collapses to F; Pi(0, nu, phi) has a closed form.
    assert_close(ellint_3(0.5, 0.0, 0.8), ellint_1(0.5, 0.8), 1e-13, "Pi(k,0,phi)");
    let nu = 0.3_f64;
    let phi = 0.7_f64;
    let expected = ((1.0 - nu).sqrt() * phi.tan()).atan() / (1.0 - nu).sqrt();
    assert_close(ellint_3(0.0, nu, phi), expected, 1e-13, "Pi(0,nu,phi)");

    assert!(ellint_1(1.5, 0.3).is_nan());
    assert!(ellint_1(0.5, f64::NAN).is_nan());
}

#[test]
fn test_legendre() {
    assert_eq!(legendre(0, 0.3), 1.0);
    assert_eq!(legendre(1, 0.3), 0.3);
    assert_close(legendre(3, 0.3), (5.0 * 0.027 - 3.0 * 0.3) / 2.0, 1e-14, "P3");
    assert_eq!(legendre(10, 1.0), 1.0);
    assert_eq!(legendre(7, -1.0), -1.0);
    assert!(legendre(4, 1.5).is_nan(), "Outside [-1, 1] the recurrence is meaningless.");

    // Orthogonality spot check by 2001-point trapezoid: <P4, P6> ~ 0.
    let mut inner = 0.0;
    let steps = 2000;
    for i in 0..=steps {
        let x = -1.0 + 2.0 * i as f64 / steps as f64;
        let weight = if i == 0 || i == steps { 0.5 } else { 1.0 };
        inner += weight * legendre(4, x) * legendre(6, x);
    }
    inner *= 2.0 / steps as f64;
    assert!(inner.abs() < 1e-6, "P4 and P6 should be orthogonal, got {inner:e}");
}

#[test]
fn test_assoc_legendre() {
    assert_eq!(assoc_legendre(3, 0, 0.4), legendre(3, 0.4));
    assert_close(assoc_legendre(2, 1, 0.5), 3.0 * 0.5 * 0.75_f64.sqrt(), 1e-14, "P2^1");
    assert_close(assoc_legendre(3, 2, 0.5), 15.0 * 0.5 * 0.75, 1e-14, "P3^2");
    assert_eq!(assoc_legendre(2, 3, 0.5), 0.0, "m > l vanishes identically.");
    assert_eq!(assoc_legendre(1, 1, 0.0), 1.0, "No Condon-Shortley phase.");
}

#[test]
fn test_hermite_laguerre() {
    assert_close(hermite(4, 1.3), 16.0 * 1.3_f64.powi(4) - 48.0 * 1.69 + 12.0, 1e-12, "H4");
    assert_eq!(hermite(2, 0.0), -2.0);

    assert_close(laguerre(3, 2.0), -1.0 / 3.0, 1e-13, "L3(2)");
    assert_close(laguerre(2, 0.5), 0.125, 1e-14, "L2(1/2)");
    assert!(laguerre(2, -1.0).is_nan());
}

#[test]
fn test_expint() {
    assert_close(expint(1.0), 1.8951178163559368, 1e-13, "Ei(1)");
    assert_close(expint(-1.0), -0.21938393439552026, 1e-13, "Ei(-1)");
    assert_close(expint(10.0), 2492.2289762418777, 1e-12, "Ei(10)");
    assert_eq!(expint(0.0), f64::NEG_INFINITY);
    assert!(expint(f64::NAN).is_nan());

    // Large-argument branch against the first asymptotic terms, which bound the truth to
    // better than 1e-6 relative at x = 100.
    let leading = 1.0 + 1e-2 + 2e-4 + 6e-6 + 24e-8;
    assert_close(expint(100.0) * 100.0 / 100_f64.exp(), leading, 1e-6, "Ei(100) asymptotic");
}

#[test]
fn test_riemann_zeta() {
    assert_close(riemann_zeta(2.0), PI * PI / 6.0, 1e-14, "zeta(2)");
    assert_close(riemann_zeta(4.0), PI.powi(4) / 90.0, 1e-14, "zeta(4)");
    assert_close(riemann_zeta(3.0), 1.2020569031595943, 1e-14, "zeta(3)");
    assert_close(riemann_zeta(0.5), -1.4603545088095868, 1e-13, "zeta(1/2)");
    assert_eq!(riemann_zeta(0.0), -0.5);
    assert_close(riemann_zeta(-1.0), -1.0 / 12.0, 1e-13, "zeta(-1)");
    assert_close(riemann_zeta(-3.0), 1.0 / 120.0, 1e-13, "zeta(-3)");
    assert_eq!(riemann_zeta(-2.0), 0.0, "Trivial zeros are exact.");
    assert_eq!(riemann_zeta(-10.0), 0.0);
    assert!(riemann_zeta(1.0).is_nan(), "The pole has no principal value.");
    assert_eq!(riemann_zeta(f64::INFINITY), 1.0);
    assert!(riemann_zeta(f64::NAN).is_nan());
}
