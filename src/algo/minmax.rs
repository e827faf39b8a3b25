/// Finds the positions of the minimum and maximum in one pass, returning
/// `Some((min_index, max_index))` or `None` for an empty slice.
///
/// Equal elements follow the standard contract: the *first* of the minima and the *last* of the
/// maxima. Elements are processed in pairs, so the scan costs about `3n/2` comparisons instead
/// of the naive `2n`.
///
/// # Examples
/// ```
/// # use hamon::algo::minmax_element;
/// let data = [3, 1, 4, 1, 5, 9, 2, 9];
/// assert_eq!(minmax_element(&data), Some((1, 7)));
/// assert_eq!(minmax_element::<u8>(&[]), None);
/// ```
pub fn minmax_element<T: Ord>(slice: &[T]) -> Option<(usize, usize)> {
    minmax_element_by(slice, |a, b| a < b)
}

/// [`minmax_element`] with a custom `less` predicate.
pub fn minmax_element_by<T>(
    slice: &[T],
    mut less: impl FnMut(&T, &T) -> bool,
) -> Option<(usize, usize)> {
    if slice.is_empty() {
        return None;
    }

    let mut min = 0;
    let mut max = 0;
    let mut i = 1;

    // Compare each pair internally first, then only the pair's smaller against the running
    // minimum and its larger against the running maximum.
    while i + 1 < slice.len() {
        let (small, large) = if less(&slice[i + 1], &slice[i]) {
            (i + 1, i)
        } else {
            (i, i + 1)
        };
        if less(&slice[small], &slice[min]) {
            min = small;
        }
        if !less(&slice[large], &slice[max]) {
            max = large;
        }
        i += 2;
    }

    // Odd count leaves one element over.
    if i < slice.len() {
        if less(&slice[i], &slice[min]) {
            min = i;
        }
        if !less(&slice[i], &slice[max]) {
            max = i;
        }
    }

    Some((min, max))
}
