/// A sort key usable by [`radix_sort`]: a fixed number of bytes, least significant first, whose
/// lexicographic (big-endian) order matches the key's ordering.
///
/// Unsigned integers are their own bytes; signed integers flip the sign bit so that negative
/// values order below positive ones in the unsigned byte space.
pub trait RadixKey: Copy {
    /// How many key bytes (and therefore counting passes) the type needs.
    const KEY_BYTES: u32;

    /// The byte at position `index`, with 0 the least significant.
    fn radix_byte(self, index: u32) -> u8;
}

macro_rules! radix_key_unsigned {
    ($($int:ty),+) => {$(
        impl RadixKey for $int {
            const KEY_BYTES: u32 = <$int>::BITS / 8;

            fn radix_byte(self, index: u32) -> u8 {
                (self >> (8 * index)) as u8
            }
        }
    )+};
}

macro_rules! radix_key_signed {
    ($(($int:ty, $uint:ty)),+) => {$(
        impl RadixKey for $int {
            const KEY_BYTES: u32 = <$int>::BITS / 8;

            fn radix_byte(self, index: u32) -> u8 {
                // Biasing by the sign bit turns two's complement order into unsigned order.
                let biased = self as $uint ^ (1 << (<$int>::BITS - 1));
                (biased >> (8 * index)) as u8
            }
        }
    )+};
}

radix_key_unsigned!(u8, u16, u32, u64, u128, usize);
radix_key_signed!((i8, u8), (i16, u16), (i32, u32), (i64, u64), (i128, u128), (isize, usize));

/// Stable least-significant-byte radix sort: one counting pass per key byte, ping-ponging
/// between the slice and a scratch buffer. `O(n)` passes with a 256-entry histogram each;
/// passes whose byte is identical across the input are skipped outright.
///
/// # Examples
/// ```
/// # use hamon::algo::radix_sort;
/// let mut data = [170_u32, 45, 75, 90, 802, 24, 2, 66];
/// radix_sort(&mut data);
/// assert_eq!(data, [2, 24, 45, 66, 75, 90, 170, 802]);
///
/// let mut signed = [3_i32, -1, 0, -7, 5];
/// radix_sort(&mut signed);
/// assert_eq!(signed, [-7, -1, 0, 3, 5]);
/// ```
pub fn radix_sort<T: RadixKey>(slice: &mut [T]) {
    radix_sort_by_key(slice, |value| *value);
}

/// [`radix_sort`] over a key extracted from each element. The extraction must be consistent
/// across passes (it is called once per element per pass).
pub fn radix_sort_by_key<T: Copy, K: RadixKey>(slice: &mut [T], key: impl Fn(&T) -> K) {
    if slice.len() < 2 {
        return;
    }

    let mut scratch = slice.to_vec();
    let mut in_scratch = false;

    for pass in 0..K::KEY_BYTES {
        let source: &[T] = if in_scratch { &scratch } else { slice };

        let mut counts = [0_usize; 256];
        for value in source {
            counts[key(value).radix_byte(pass) as usize] += 1;
        }

        // A constant byte would be an identity permutation; don't pay for the scatter.
        if counts.iter().any(|&count| count == source.len()) {
            continue;
        }

        let mut offsets = [0_usize; 256];
        let mut running = 0;
        for (offset, &count) in offsets.iter_mut().zip(counts.iter()) {
            *offset = running;
            running += count;
        }

        if in_scratch {
            scatter(&scratch, slice, pass, &key, &mut offsets);
        } else {
            scatter(slice, &mut scratch, pass, &key, &mut offsets);
        }
        in_scratch = !in_scratch;
    }

    if in_scratch {
        slice.copy_from_slice(&scratch);
    }
}

/// One stable counting-sort pass from `source` into `destination`.
fn scatter<T: Copy, K: RadixKey>(
    source: &[T],
    destination: &mut [T],
    pass: u32,
    key: &impl Fn(&T) -> K,
    offsets: &mut [usize; 256],
) {
    for &value in source {
        let bucket = key(&value).radix_byte(pass) as usize;
        destination[offsets[bucket]] = value;
        offsets[bucket] += 1;
    }
}
