/// The (physicists') Hermite polynomial `H_n(x)`, by `H_{n+1} = 2x H_n - 2n H_{n-1}`.
///
/// # Examples
/// ```
/// # use hamon::math::hermite;
/// assert_eq!(hermite(0, 1.5), 1.0);
/// assert_eq!(hermite(1, 1.5), 3.0);
/// // H_3(x) = 8x^3 - 12x
/// assert_eq!(hermite(3, 2.0), 40.0);
/// ```
pub fn hermite(n: u32, x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if n == 0 {
        return 1.0;
    }

    let mut previous = 1.0;
    let mut current = 2.0 * x;
    for k in 1..n {
        let next = 2.0 * x * current - 2.0 * k as f64 * previous;
        previous = current;
        current = next;
    }
    current
}

/// The Laguerre polynomial `L_n(x)`, by `(k + 1) L_{k+1} = (2k + 1 - x) L_k - k L_{k-1}`.
///
/// Negative arguments are outside the orthogonality domain and return NaN.
///
/// # Examples
/// ```
/// # use hamon::math::laguerre;
/// assert_eq!(laguerre(0, 0.5), 1.0);
/// assert_eq!(laguerre(1, 0.5), 0.5);
/// // L_2(x) = (x^2 - 4x + 2) / 2
/// assert!((laguerre(2, 0.5) - 0.125).abs() < 1e-15);
/// ```
pub fn laguerre(n: u32, x: f64) -> f64 {
    if x.is_nan() || x < 0.0 {
        return f64::NAN;
    }
    if n == 0 {
        return 1.0;
    }

    let mut previous = 1.0;
    let mut current = 1.0 - x;
    for k in 1..n {
        let next =
            ((2 * k + 1) as f64 - x) * current - k as f64 * previous;
        let next = next / (k + 1) as f64;
        previous = current;
        current = next;
    }
    current
}
