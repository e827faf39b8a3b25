use super::{LIMB_BITS, normalize};

/// Returns the position of the highest set bit plus one, or 0 for the value zero.
pub fn bit_length(limbs: &[u32]) -> usize {
    let top = limbs[limbs.len() - 1];
    if top == 0 {
        // Normalized zero.
        0
    } else {
        (limbs.len() - 1) * LIMB_BITS + (LIMB_BITS - top.leading_zeros() as usize)
    }
}

/// Returns bit `index`, where bit 0 is the least significant bit of the first limb. Bits beyond
/// the representation are zero.
pub fn get_bit(limbs: &[u32], index: usize) -> bool {
    let limb = index / LIMB_BITS;
    limb < limbs.len() && limbs[limb] >> (index % LIMB_BITS) & 1 != 0
}

/// Shifts left by an arbitrary bit count, growing the vector as needed.
pub fn shl(limbs: &mut Vec<u32>, bits: usize) {
    if super::is_zero(limbs) || bits == 0 {
        return;
    }

    let limb_shift = bits / LIMB_BITS;
    let bit_shift = bits % LIMB_BITS;

    if bit_shift != 0 {
        let mut carry = 0_u32;
        for limb in limbs.iter_mut() {
            let shifted = (*limb << bit_shift) | carry;
            carry = *limb >> (LIMB_BITS - bit_shift);
            *limb = shifted;
        }
        if carry != 0 {
            limbs.push(carry);
        }
    }

    if limb_shift != 0 {
        limbs.splice(0..0, std::iter::repeat_n(0, limb_shift));
    }
}

/// Shifts right by an arbitrary bit count, truncating toward zero. Shifting everything out
/// leaves zero.
pub fn shr(limbs: &mut Vec<u32>, bits: usize) {
    let limb_shift = bits / LIMB_BITS;
    let bit_shift = bits % LIMB_BITS;

    if limb_shift >= limbs.len() {
        limbs.clear();
        limbs.push(0);
        return;
    }
    limbs.drain(0..limb_shift);

    if bit_shift != 0 {
        let mut carry = 0_u32;
        for limb in limbs.iter_mut().rev() {
            let shifted = (*limb >> bit_shift) | carry;
            carry = *limb << (LIMB_BITS - bit_shift);
            *limb = shifted;
        }
    }

    normalize(limbs);
}

/// Bitwise AND. The result can't be longer than the shorter input.
pub fn bit_and(lhs: &mut Vec<u32>, rhs: &[u32]) {
    lhs.truncate(rhs.len());
    for (i, limb) in lhs.iter_mut().enumerate() {
        *limb &= rhs[i];
    }
    normalize(lhs);
}

/// Bitwise OR.
pub fn bit_or(lhs: &mut Vec<u32>, rhs: &[u32]) {
    if lhs.len() < rhs.len() {
        lhs.resize(rhs.len(), 0);
    }
    for (i, &limb) in rhs.iter().enumerate() {
        lhs[i] |= limb;
    }
}

/// Bitwise XOR.
pub fn bit_xor(lhs: &mut Vec<u32>, rhs: &[u32]) {
    if lhs.len() < rhs.len() {
        lhs.resize(rhs.len(), 0);
    }
    for (i, &limb) in rhs.iter().enumerate() {
        lhs[i] ^= limb;
    }
    normalize(lhs);
}
