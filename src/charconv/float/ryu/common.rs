//! Small integer helpers shared by the `f32` and `f64` digit generators.

/// Returns `floor(e * log2(5)) + 1`, the bit length of `5^e`. Valid for `0 <= e <= 3528`, which
/// covers every exponent the callers can produce.
pub(crate) const fn pow5bits(e: i32) -> i32 {
    debug_assert!(e >= 0 && e <= 3528);
    ((e * 1217359) >> 19) + 1
}

/// Returns `floor(e * log10(2))`. Valid for `0 <= e <= 1650`.
pub(crate) const fn log10_pow2(e: i32) -> u32 {
    debug_assert!(e >= 0 && e <= 1650);
    (e as u32 * 78913) >> 18
}

/// Returns `floor(e * log10(5))`. Valid for `0 <= e <= 2620`.
pub(crate) const fn log10_pow5(e: i32) -> u32 {
    debug_assert!(e >= 0 && e <= 2620);
    (e as u32 * 732923) >> 20
}

/// Returns the highest power of 5 dividing `value`, which must be nonzero.
const fn pow5_factor(mut value: u64) -> u32 {
    debug_assert!(value != 0);
    let mut count = 0;
    while value % 5 == 0 {
        value /= 5;
        count += 1;
    }
    count
}

/// Returns true if `value` is divisible by `5^p`.
pub(crate) const fn multiple_of_power_of_5(value: u64, p: u32) -> bool {
    pow5_factor(value) >= p
}

/// Returns true if `value` is divisible by `2^p`. Requires `p < 64`.
pub(crate) const fn multiple_of_power_of_2(value: u64, p: u32) -> bool {
    value & ((1_u64 << p) - 1) == 0
}

/// The number of decimal digits in `value`, which must be below `10^17`.
pub(crate) fn decimal_length17(value: u64) -> u32 {
    debug_assert!(value < 100_000_000_000_000_000);
    let mut length = 1;
    let mut threshold = 10;
    while length < 17 && value >= threshold {
        length += 1;
        threshold = threshold.saturating_mul(10);
    }
    length
}

/// The number of decimal digits in `value`, which must be below `10^9`.
pub(crate) fn decimal_length9(value: u32) -> u32 {
    debug_assert!(value < 1_000_000_000);
    let mut length = 1;
    let mut threshold = 10;
    while length < 9 && value >= threshold {
        length += 1;
        threshold *= 10;
    }
    length
}
