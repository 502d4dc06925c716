//! Binary search over sorted slices.

/// Searches an ascending slice for `target`, returning a matching position.
///
/// With duplicates, any matching position may be returned.
///
/// # Precondition
///
/// `sorted` must be ascending. On unsorted input the result is unspecified
/// (but never a panic or an out-of-bounds index). Prefer going through
/// [`Sorted`](crate::Sorted), which can only be obtained by sorting.
///
/// # Example
///
/// ```
/// use nexus_intlist::search::binary_search;
///
/// let v = [1, 3, 5, 7, 9];
/// assert_eq!(binary_search(&v, &5), Some(2));
/// assert_eq!(binary_search(&v, &6), None);
/// ```
pub fn binary_search<T: Ord>(sorted: &[T], target: &T) -> Option<usize> {
    // half-open window [lo, hi)
    let mut lo = 0;
    let mut hi = sorted.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match sorted[mid].cmp(target) {
            core::cmp::Ordering::Less => lo = mid + 1,
            core::cmp::Ordering::Greater => hi = mid,
            core::cmp::Ordering::Equal => return Some(mid),
        }
    }

    None
}
