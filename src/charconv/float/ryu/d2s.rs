use super::common::{
    log10_pow2, log10_pow5, multiple_of_power_of_2, multiple_of_power_of_5, pow5bits,
};
use super::tables::{
    DOUBLE_POW5_BITCOUNT, DOUBLE_POW5_INV_BITCOUNT, double_pow5, double_pow5_inv,
};
use crate::num::FloatBits64;

/// A decimal `mantissa * 10^exponent` with the fewest digits that round-trips to the source
/// `f64`. The mantissa never ends in a zero digit (except for the value zero itself, which the
/// callers special-case before reaching the generator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FloatingDecimal64 {
    pub mantissa: u64,
    pub exponent: i32,
}

/// Multiplies a 55-bit value by a 128-bit fixed-point factor and shifts right by `shift`, which
/// is always in `(64, 128)` here.
fn mul_shift_64(m: u64, factor: (u64, u64), shift: i32) -> u64 {
    let low = m as u128 * factor.0 as u128;
    let high = m as u128 * factor.1 as u128;
    (((low >> 64) + high) >> (shift - 64)) as u64
}

/// Shortest-round-trip digit generation for a finite nonzero `f64`, decomposed into its raw
/// mantissa and biased exponent fields.
pub(crate) fn d2d(ieee_mantissa: u64, ieee_exponent: u32) -> FloatingDecimal64 {
    const MANTISSA_BITS: i32 = FloatBits64::MANTISSA_BITS as i32;
    const BIAS: i32 = FloatBits64::BIAS;

    // The extra -2 scales everything by 4 so the midpoints to the neighbouring floats become
    // integers: mv is the value, mp the upper midpoint, mm the lower.
    let (m2, e2): (u64, i32) = if ieee_exponent == 0 {
        (ieee_mantissa, 1 - BIAS - MANTISSA_BITS - 2)
    } else {
        (
            ieee_mantissa | (1 << MANTISSA_BITS),
            ieee_exponent as i32 - BIAS - MANTISSA_BITS - 2,
        )
    };
    let even = m2 & 1 == 0;
    let accept_bounds = even;

    let mv = 4 * m2;
    // The lower boundary is closer when the mantissa is a power of two (except at the very
    // bottom of the exponent range, where there is no smaller neighbour to shrink toward).
    let mm_shift = (ieee_mantissa != 0 || ieee_exponent <= 1) as u64;

    // Scale the value and both midpoints into decimal by one multiply-shift each, tracking
    // whether the discarded lower bits were all zero.
    let mut vr: u64;
    let mut vp: u64;
    let mut vm: u64;
    let e10: i32;
    let mut vm_is_trailing_zeros = false;
    let mut vr_is_trailing_zeros = false;

    if e2 >= 0 {
        let q = log10_pow2(e2) - (e2 > 3) as u32;
        e10 = q as i32;
        let k = DOUBLE_POW5_INV_BITCOUNT + pow5bits(q as i32) - 1;
        let i = -e2 + q as i32 + k;
        let factor = double_pow5_inv(q as usize);
        vr = mul_shift_64(4 * m2, factor, i);
        vp = mul_shift_64(4 * m2 + 2, factor, i);
        vm = mul_shift_64(4 * m2 - 1 - mm_shift, factor, i);

        if q <= 21 {
            // Only one of mv, mv +/- 2 can be a multiple of 5^q, if any.
            if mv % 5 == 0 {
                vr_is_trailing_zeros = multiple_of_power_of_5(mv, q);
            } else if accept_bounds {
                vm_is_trailing_zeros = multiple_of_power_of_5(mv - 1 - mm_shift, q);
            } else {
                vp -= multiple_of_power_of_5(mv + 2, q) as u64;
            }
        }
    } else {
        let q = log10_pow5(-e2) - (-e2 > 1) as u32;
        e10 = q as i32 + e2;
        let i = -e2 - q as i32;
        let k = pow5bits(i) - DOUBLE_POW5_BITCOUNT;
        let j = q as i32 - k;
        let factor = double_pow5(i as usize);
        vr = mul_shift_64(4 * m2, factor, j);
        vp = mul_shift_64(4 * m2 + 2, factor, j);
        vm = mul_shift_64(4 * m2 - 1 - mm_shift, factor, j);

        if q <= 1 {
            // Every value has at least q trailing zero bits here.
            vr_is_trailing_zeros = true;
            if accept_bounds {
                vm_is_trailing_zeros = mm_shift == 1;
            } else {
                vp -= 1;
            }
        } else if q < 63 {
            vr_is_trailing_zeros = multiple_of_power_of_2(mv, q);
        }
    }

    // Strip digits until the interval (vm, vp) no longer proves them removable, remembering
    // enough to round the final digit correctly.
    let mut removed = 0;
    let mut last_removed_digit = 0_u64;
    let output: u64;

    if vm_is_trailing_zeros || vr_is_trailing_zeros {
        // Rare path: trailing zero state has to be maintained digit by digit.
        loop {
            let vp_div10 = vp / 10;
            let vm_div10 = vm / 10;
            if vp_div10 <= vm_div10 {
                break;
            }
            vm_is_trailing_zeros &= vm % 10 == 0;
            vr_is_trailing_zeros &= last_removed_digit == 0;
            last_removed_digit = vr % 10;
            vr /= 10;
            vp = vp_div10;
            vm = vm_div10;
            removed += 1;
        }

        if vm_is_trailing_zeros {
            while vm % 10 == 0 {
                vr_is_trailing_zeros &= last_removed_digit == 0;
                last_removed_digit = vr % 10;
                vr /= 10;
                vp /= 10;
                vm /= 10;
                removed += 1;
            }
        }

        if vr_is_trailing_zeros && last_removed_digit == 5 && vr % 2 == 0 {
            // Exactly halfway; round down to the even mantissa.
            last_removed_digit = 4;
        }

        output = vr
            + ((vr == vm && (!accept_bounds || !vm_is_trailing_zeros)) || last_removed_digit >= 5)
                as u64;
    } else {
        // Common path: only a round-up flag needs tracking, and digits can go two at a time.
        let mut round_up = false;
        let vp_div100 = vp / 100;
        let vm_div100 = vm / 100;
        if vp_div100 > vm_div100 {
            round_up = vr % 100 >= 50;
            vr /= 100;
            vp = vp_div100;
            vm = vm_div100;
            removed += 2;
        }

        loop {
            let vp_div10 = vp / 10;
            let vm_div10 = vm / 10;
            if vp_div10 <= vm_div10 {
                break;
            }
            round_up = vr % 10 >= 5;
            vr /= 10;
            vp = vp_div10;
            vm = vm_div10;
            removed += 1;
        }

        output = vr + (vr == vm || round_up) as u64;
    }

    FloatingDecimal64 {
        mantissa: output,
        exponent: e10 + removed,
    }
}
