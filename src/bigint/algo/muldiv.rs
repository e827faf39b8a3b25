use std::cmp::Ordering;

use super::{LIMB_BITS, compare, is_zero, normalize};

// TODO: Switch to Karatsuba once both operands exceed a few hundred limbs.

/// Schoolbook multiplication with 64-bit accumulation, `O(n*m)` limb products.
pub fn mul(lhs: &[u32], rhs: &[u32]) -> Vec<u32> {
    if is_zero(lhs) || is_zero(rhs) {
        return vec![0];
    }

    let mut out = vec![0_u32; lhs.len() + rhs.len()];
    for (i, &l) in lhs.iter().enumerate() {
        if l == 0 {
            continue;
        }
        let mut carry = 0_u64;
        for (j, &r) in rhs.iter().enumerate() {
            let acc = out[i + j] as u64 + l as u64 * r as u64 + carry;
            out[i + j] = acc as u32;
            carry = acc >> LIMB_BITS;
        }
        // The carry slot for row i hasn't been written yet, so this is an assignment, not an add.
        out[i + rhs.len()] = carry as u32;
    }

    normalize(&mut out);
    out
}

/// Multiplies in place by a single limb.
pub fn mul_small(lhs: &mut Vec<u32>, rhs: u32) {
    if rhs == 0 {
        lhs.clear();
        lhs.push(0);
        return;
    }

    let mut carry = 0_u64;
    for limb in lhs.iter_mut() {
        let acc = *limb as u64 * rhs as u64 + carry;
        *limb = acc as u32;
        carry = acc >> LIMB_BITS;
    }
    if carry != 0 {
        lhs.push(carry as u32);
    }
}

/// Fixed-width multiplication, truncating to the low `32*N` bits.
pub fn mul_fixed<const N: usize>(lhs: &[u32; N], rhs: &[u32; N]) -> [u32; N] {
    let mut out = [0_u32; N];
    for i in 0..N {
        if lhs[i] == 0 {
            continue;
        }
        let mut carry = 0_u64;
        for j in 0..N - i {
            let acc = out[i + j] as u64 + lhs[i] as u64 * rhs[j] as u64 + carry;
            out[i + j] = acc as u32;
            carry = acc >> LIMB_BITS;
        }
    }
    out
}

/// Divides in place by a single nonzero limb, returning the remainder.
pub fn div_rem_small(num: &mut Vec<u32>, den: u32) -> u32 {
    debug_assert_ne!(den, 0);

    let mut rem = 0_u64;
    for limb in num.iter_mut().rev() {
        let acc = (rem << LIMB_BITS) | *limb as u64;
        *limb = (acc / den as u64) as u32;
        rem = acc % den as u64;
    }

    normalize(num);
    rem as u32
}

/// Long division: returns `(quotient, remainder)` with `num = quotient * den + remainder` and
/// `remainder < den`.
///
/// This is Knuth's Algorithm D over 32-bit limbs: the divisor is scaled so its top bit is set,
/// trial quotient limbs are estimated from the top two limbs of the running dividend against the
/// top divisor limb, corrected against the next limb down, and the rare overestimate is repaired
/// by an add-back step.
///
/// The divisor must be nonzero; the public wrappers check this before calling.
pub fn div_rem(num: &[u32], den: &[u32]) -> (Vec<u32>, Vec<u32>) {
    debug_assert!(!is_zero(den));

    match compare(num, den) {
        Ordering::Less => return (vec![0], num.to_vec()),
        Ordering::Equal => return (vec![1], vec![0]),
        Ordering::Greater => {}
    }

    if den.len() == 1 {
        let mut quot = num.to_vec();
        let rem = div_rem_small(&mut quot, den[0]);
        return (quot, vec![rem]);
    }

    const BASE: u64 = 1 << LIMB_BITS;

    // Scale both operands so the divisor's top limb has its high bit set. This keeps every trial
    // quotient within one or two of the true limb, which is what makes the correction loop below
    // terminate quickly.
    let shift = den[den.len() - 1].leading_zeros() as usize;
    let mut divisor = den.to_vec();
    shl_within(&mut divisor, shift);
    let n = divisor.len();

    let mut dividend = num.to_vec();
    dividend.push(0);
    shl_within(&mut dividend, shift);
    let m = dividend.len() - 1 - n;

    let top = divisor[n - 1] as u64;
    let next = divisor[n - 2] as u64;

    let mut quot = vec![0_u32; m + 1];
    for j in (0..=m).rev() {
        let head = (dividend[j + n] as u64) << LIMB_BITS | dividend[j + n - 1] as u64;
        let mut qhat = head / top;
        let mut rhat = head % top;

        while qhat >= BASE
            || qhat * next > (rhat << LIMB_BITS) + dividend[j + n - 2] as u64
        {
            qhat -= 1;
            rhat += top;
            if rhat >= BASE {
                break;
            }
        }

        // Multiply-and-subtract qhat * divisor from the current window of the dividend.
        let mut borrow = 0_i64;
        for i in 0..n {
            let product = qhat * divisor[i] as u64;
            let diff = dividend[j + i] as i64 - borrow - (product & (BASE - 1)) as i64;
            dividend[j + i] = diff as u32;
            borrow = (product >> LIMB_BITS) as i64 - (diff >> LIMB_BITS);
        }
        let diff = dividend[j + n] as i64 - borrow;
        dividend[j + n] = diff as u32;

        if diff < 0 {
            // qhat was one too large: add the divisor back.
            qhat -= 1;
            let mut carry = 0_u64;
            for i in 0..n {
                let sum = dividend[j + i] as u64 + divisor[i] as u64 + carry;
                dividend[j + i] = sum as u32;
                carry = sum >> LIMB_BITS;
            }
            dividend[j + n] = dividend[j + n].wrapping_add(carry as u32);
        }

        quot[j] = qhat as u32;
    }

    dividend.truncate(n);
    normalize(&mut dividend);
    super::shr(&mut dividend, shift);

    normalize(&mut quot);
    (quot, dividend)
}

/// Shifts left by fewer than 32 bits without changing the limb count. The caller guarantees the
/// top limb has at least `bits` leading zeros.
fn shl_within(limbs: &mut [u32], bits: usize) {
    if bits == 0 {
        return;
    }

    let mut carry = 0_u32;
    for limb in limbs.iter_mut() {
        let shifted = (*limb << bits) | carry;
        carry = *limb >> (LIMB_BITS - bits);
        *limb = shifted;
    }
    debug_assert_eq!(carry, 0);
}
