use super::heap::{make_heap_by, sift_down, sort_heap_by};
use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// Below this size quickselect partitions stop paying for themselves.
const INSERTION_CUTOFF: usize = 16;

/// Plain insertion sort, used below the cutoff and as the finishing step of selection.
pub(crate) fn insertion_sort<T>(slice: &mut [T], less: &mut impl FnMut(&T, &T) -> bool) {
    for sorted_end in 1..slice.len() {
        let mut cursor = sorted_end;
        while cursor > 0 && less(&slice[cursor], &slice[cursor - 1]) {
            slice.swap(cursor, cursor - 1);
            cursor -= 1;
        }
    }
}

/// Panics with a typed error if `index` can't address a position in a range of `len`; `allow_end`
/// permits the one-past-the-end position the range variants of the standard interfaces accept.
fn check_bound(index: usize, len: usize, allow_end: bool) {
    if index > len || (index == len && !allow_end) {
        Err(IndexOutOfBounds { index, len }).throw()
    }
}

/// Rearranges the slice so the smallest `mid` elements occupy `slice[..mid]` in ascending
/// order; the order of the rest is unspecified. `O(n log mid)`.
///
/// # Panics
/// Panics if `mid > slice.len()`.
///
/// # Examples
/// ```
/// # use hamon::algo::partial_sort;
/// let mut data = [5, 7, 4, 2, 8, 6, 1, 9, 0, 3];
/// partial_sort(&mut data, 4);
/// assert_eq!(&data[..4], &[0, 1, 2, 3]);
/// ```
pub fn partial_sort<T: Ord>(slice: &mut [T], mid: usize) {
    partial_sort_by(slice, mid, |a, b| a < b);
}

/// [`partial_sort`] with a custom `less` predicate.
pub fn partial_sort_by<T>(slice: &mut [T], mid: usize, mut less: impl FnMut(&T, &T) -> bool) {
    check_bound(mid, slice.len(), true);
    if mid == 0 {
        return;
    }

    // A max-heap of the best mid candidates: every later element that beats the worst
    // candidate replaces it.
    make_heap_by(&mut slice[..mid], &mut less);
    for i in mid..slice.len() {
        if less(&slice[i], &slice[0]) {
            slice.swap(0, i);
            sift_down(slice, &mut less, 0, mid);
        }
    }
    sort_heap_by(&mut slice[..mid], less);
}

/// Copies the smallest `destination.len()` elements of `source` into `destination` in ascending
/// order (or all of them, if `source` is shorter), returning how many were written.
/// `source` is not modified. `O(n log k)`.
///
/// # Examples
/// ```
/// # use hamon::algo::partial_sort_copy;
/// let source = [5, 7, 4, 2, 8, 6, 1, 9, 0, 3];
/// let mut best = [0; 3];
/// assert_eq!(partial_sort_copy(&source, &mut best), 3);
/// assert_eq!(best, [0, 1, 2]);
/// ```
pub fn partial_sort_copy<T: Ord + Clone>(source: &[T], destination: &mut [T]) -> usize {
    partial_sort_copy_by(source, destination, |a, b| a < b)
}

/// [`partial_sort_copy`] with a custom `less` predicate.
pub fn partial_sort_copy_by<T: Clone>(
    source: &[T],
    destination: &mut [T],
    mut less: impl FnMut(&T, &T) -> bool,
) -> usize {
    let count = source.len().min(destination.len());
    if count == 0 {
        return 0;
    }

    destination[..count].clone_from_slice(&source[..count]);
    make_heap_by(&mut destination[..count], &mut less);
    for candidate in &source[count..] {
        if less(candidate, &destination[0]) {
            destination[0] = candidate.clone();
            sift_down(destination, &mut less, 0, count);
        }
    }
    sort_heap_by(&mut destination[..count], less);

    count
}

/// Rearranges the slice so `slice[n]` is the element that would be there if the whole slice
/// were sorted, with everything before it no greater and everything after it no smaller.
/// Average `O(n)` by median-of-three quickselect, worst case `O(n log n)` via the heapsort
/// fallback when the recursion depth exceeds `2 log2(n)`.
///
/// `n == slice.len()` is allowed and does nothing, mirroring the one-past-the-end form of the
/// standard interface.
///
/// # Panics
/// Panics if `n > slice.len()`.
///
/// # Examples
/// ```
/// # use hamon::algo::nth_element;
/// let mut data = [9, 1, 8, 2, 7, 3, 6, 4, 5, 0];
/// nth_element(&mut data, 4);
/// assert_eq!(data[4], 4);
/// assert!(data[..4].iter().all(|&x| x < 4));
/// ```
pub fn nth_element<T: Ord>(slice: &mut [T], n: usize) {
    nth_element_by(slice, n, |a, b| a < b);
}

/// [`nth_element`] with a custom `less` predicate.
pub fn nth_element_by<T>(slice: &mut [T], n: usize, mut less: impl FnMut(&T, &T) -> bool) {
    check_bound(n, slice.len(), true);
    if n == slice.len() {
        return;
    }

    let mut lo = 0;
    let mut hi = slice.len();
    let mut depth_budget = 2 * slice.len().ilog2().max(1);

    loop {
        if hi - lo <= INSERTION_CUTOFF {
            insertion_sort(&mut slice[lo..hi], &mut less);
            return;
        }
        if depth_budget == 0 {
            // Too many bad pivots in a row; finish the active range with guaranteed
            // O(m log m) instead of risking quadratic quickselect.
            make_heap_by(&mut slice[lo..hi], &mut less);
            sort_heap_by(&mut slice[lo..hi], &mut less);
            return;
        }
        depth_budget -= 1;

        let pivot = partition(slice, lo, hi, &mut less);
        match n.cmp(&pivot) {
            std::cmp::Ordering::Equal => return,
            std::cmp::Ordering::Less => hi = pivot,
            std::cmp::Ordering::Greater => lo = pivot + 1,
        }
    }
}

/// Median-of-three Lomuto partition of `slice[lo..hi]`; returns the pivot's final index.
fn partition<T>(
    slice: &mut [T],
    lo: usize,
    hi: usize,
    less: &mut impl FnMut(&T, &T) -> bool,
) -> usize {
    let mid = lo + (hi - lo) / 2;
    let last = hi - 1;

    // Sort (lo, mid, last) so the median lands on mid, then park it at last as the pivot.
    if less(&slice[mid], &slice[lo]) {
        slice.swap(mid, lo);
    }
    if less(&slice[last], &slice[mid]) {
        slice.swap(last, mid);
        if less(&slice[mid], &slice[lo]) {
            slice.swap(mid, lo);
        }
    }
    slice.swap(mid, last);

    let mut store = lo;
    for probe in lo..last {
        if less(&slice[probe], &slice[last]) {
            slice.swap(store, probe);
            store += 1;
        }
    }
    slice.swap(store, last);
    store
}
