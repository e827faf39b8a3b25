use super::common::{
    log10_pow2, log10_pow5, multiple_of_power_of_2, multiple_of_power_of_5, pow5bits,
};
use super::tables::{FLOAT_POW5_BITCOUNT, FLOAT_POW5_INV_BITCOUNT, float_pow5, float_pow5_inv};
use crate::num::FloatBits32;

/// The `f32` counterpart of [`FloatingDecimal64`](super::FloatingDecimal64).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FloatingDecimal32 {
    pub mantissa: u32,
    pub exponent: i32,
}

/// Multiplies a 26-bit value by a 64-bit fixed-point factor and shifts right by `shift`.
fn mul_shift_32(m: u32, factor: u64, shift: i32) -> u32 {
    debug_assert!(shift > 32);
    ((m as u128 * factor as u128) >> shift) as u32
}

fn mul_pow5_inv_div_pow2(m: u32, q: u32, j: i32) -> u32 {
    mul_shift_32(m, float_pow5_inv(q as usize), j)
}

fn mul_pow5_div_pow2(m: u32, i: i32, j: i32) -> u32 {
    mul_shift_32(m, float_pow5(i as usize), j)
}

/// Shortest-round-trip digit generation for a finite nonzero `f32`.
pub(crate) fn f2d(ieee_mantissa: u32, ieee_exponent: u32) -> FloatingDecimal32 {
    const MANTISSA_BITS: i32 = FloatBits32::MANTISSA_BITS as i32;
    const BIAS: i32 = FloatBits32::BIAS;

    let (m2, e2): (u32, i32) = if ieee_exponent == 0 {
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
    let mp = 4 * m2 + 2;
    let mm_shift = (ieee_mantissa != 0 || ieee_exponent <= 1) as u32;
    let mm = 4 * m2 - 1 - mm_shift;

    let mut vr: u32;
    let mut vp: u32;
    let mut vm: u32;
    let e10: i32;
    let mut vm_is_trailing_zeros = false;
    let mut vr_is_trailing_zeros = false;
    // The 64-bit table entries don't carry enough precision to recover the digit below the
    // stripped ones directly, so it is recomputed at one lower q when it could matter.
    let mut last_removed_digit = 0_u32;

    if e2 >= 0 {
        let q = log10_pow2(e2);
        e10 = q as i32;
        let k = FLOAT_POW5_INV_BITCOUNT + pow5bits(q as i32) - 1;
        let i = -e2 + q as i32 + k;
        vr = mul_pow5_inv_div_pow2(mv, q, i);
        vp = mul_pow5_inv_div_pow2(mp, q, i);
        vm = mul_pow5_inv_div_pow2(mm, q, i);

        if q != 0 && (vp - 1) / 10 <= vm / 10 {
            // One digit will certainly be removed; fetch the digit below it now.
            let l = FLOAT_POW5_INV_BITCOUNT + pow5bits(q as i32 - 1) - 1;
            last_removed_digit =
                mul_pow5_inv_div_pow2(mv, q - 1, -e2 + q as i32 - 1 + l) % 10;
        }

        if q <= 9 {
            if mv % 5 == 0 {
                vr_is_trailing_zeros = multiple_of_power_of_5(mv as u64, q);
            } else if accept_bounds {
                vm_is_trailing_zeros = multiple_of_power_of_5(mm as u64, q);
            } else {
                vp -= multiple_of_power_of_5(mp as u64, q) as u32;
            }
        }
    } else {
        let q = log10_pow5(-e2);
        e10 = q as i32 + e2;
        let i = -e2 - q as i32;
        let k = pow5bits(i) - FLOAT_POW5_BITCOUNT;
        let mut j = q as i32 - k;
        vr = mul_pow5_div_pow2(mv, i, j);
        vp = mul_pow5_div_pow2(mp, i, j);
        vm = mul_pow5_div_pow2(mm, i, j);

        if q != 0 && (vp - 1) / 10 <= vm / 10 {
            j = q as i32 - 1 - (pow5bits(i + 1) - FLOAT_POW5_BITCOUNT);
            last_removed_digit = mul_pow5_div_pow2(mv, i + 1, j) % 10;
        }

        if q <= 1 {
            vr_is_trailing_zeros = true;
            if accept_bounds {
                vm_is_trailing_zeros = mm_shift == 1;
            } else {
                vp -= 1;
            }
        } else if q < 31 {
            vr_is_trailing_zeros = multiple_of_power_of_2(mv as u64, q - 1);
        }
    }

    let mut removed = 0;
    let output: u32;

    if vm_is_trailing_zeros || vr_is_trailing_zeros {
        while vp / 10 > vm / 10 {
            vm_is_trailing_zeros &= vm % 10 == 0;
            vr_is_trailing_zeros &= last_removed_digit == 0;
            last_removed_digit = vr % 10;
            vr /= 10;
            vp /= 10;
            vm /= 10;
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
            last_removed_digit = 4;
        }

        output = vr
            + ((vr == vm && (!accept_bounds || !vm_is_trailing_zeros)) || last_removed_digit >= 5)
                as u32;
    } else {
        while vp / 10 > vm / 10 {
            last_removed_digit = vr % 10;
            vr /= 10;
            vp /= 10;
            vm /= 10;
            removed += 1;
        }

        output = vr + (vr == vm || last_removed_digit >= 5) as u32;
    }

    FloatingDecimal32 {
        mantissa: output,
        exponent: e10 + removed,
    }
}
