//! In-place comparison sorts.
//!
//! All functions sort a slice ascending. [`IntList`](crate::IntList) only
//! ever hands them its present prefix, so unused capacity is never compared.
//!
//! | Algorithm | Comparisons | Stable | Extra space |
//! |-----------|-------------|--------|-------------|
//! | [`bubble_sort`] | O(n²), O(n) if sorted | yes | O(1) |
//! | [`selection_sort`] | O(n²) | no | O(1) |
//! | [`insertion_sort`] | O(n²), O(n) if sorted | yes | O(1) |
//! | [`quick_sort`] | O(n log n) avg, O(n²) worst | no | O(log n) stack |

use tracing::trace;

/// Selects one of the sorts in this module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SortAlgorithm {
    /// [`bubble_sort`]
    Bubble,
    /// [`selection_sort`]
    Selection,
    /// [`insertion_sort`]
    #[default]
    Insertion,
    /// [`quick_sort`]
    Quick,
}

impl SortAlgorithm {
    /// Every algorithm, slowest first on random input.
    pub const ALL: [Self; 4] = [Self::Bubble, Self::Selection, Self::Insertion, Self::Quick];

    /// Short lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Quick => "quick",
        }
    }

    /// Returns `true` if equal elements keep their relative order.
    pub const fn is_stable(self) -> bool {
        matches!(self, Self::Bubble | Self::Insertion)
    }

    /// Sorts `v` ascending with this algorithm.
    pub fn sort<T: Ord + Copy>(self, v: &mut [T]) {
        trace!(algorithm = self.name(), len = v.len(), "sorting");
        match self {
            Self::Bubble => bubble_sort(v),
            Self::Selection => selection_sort(v),
            Self::Insertion => insertion_sort(v),
            Self::Quick => quick_sort(v),
        }
    }
}

impl core::fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Bubble sort with early exit.
///
/// Each pass only scans up to the last swap of the previous pass; everything
/// after it is already in final position.
pub fn bubble_sort<T: Ord>(v: &mut [T]) {
    let mut end = v.len();
    while end > 1 {
        let mut last_swap = 0;
        for j in 1..end {
            if v[j - 1] > v[j] {
                v.swap(j - 1, j);
                last_swap = j;
            }
        }
        end = last_swap;
    }
}

/// Selection sort. At most `n - 1` swaps.
pub fn selection_sort<T: Ord>(v: &mut [T]) {
    let len = v.len();
    for i in 0..len.saturating_sub(1) {
        let mut min = i;
        for j in (i + 1)..len {
            if v[j] < v[min] {
                min = j;
            }
        }
        if min != i {
            v.swap(i, min);
        }
    }
}

/// Shift-based insertion sort.
pub fn insertion_sort<T: Ord + Copy>(v: &mut [T]) {
    for i in 1..v.len() {
        let key = v[i];
        let mut hole = i;
        while hole > 0 && v[hole - 1] > key {
            v[hole] = v[hole - 1];
            hole -= 1;
        }
        v[hole] = key;
    }
}

/// Quicksort with Hoare partitioning around the middle element.
///
/// Recurses into the smaller partition and loops on the larger, so stack
/// depth stays O(log n) even on adversarial input. Time is still O(n²) in
/// the worst case.
pub fn quick_sort<T: Ord + Copy>(v: &mut [T]) {
    let mut v = v;
    while v.len() > 1 {
        let (lo_end, hi_start) = partition(v);
        let (lo, rest) = core::mem::take(&mut v).split_at_mut(lo_end);
        let hi = &mut rest[hi_start - lo_end..];

        if lo.len() < hi.len() {
            quick_sort(lo);
            v = hi;
        } else {
            quick_sort(hi);
            v = lo;
        }
    }
}

/// Hoare partition of `v` (`len >= 2`) around its middle element.
///
/// Returns `(lo_end, hi_start)`: every element of `v[..lo_end]` is `<=` the
/// pivot, every element of `v[hi_start..]` is `>=` it, and anything between
/// equals it. Both outer ranges are strictly shorter than `v`.
fn partition<T: Ord + Copy>(v: &mut [T]) -> (usize, usize) {
    debug_assert!(v.len() >= 2);

    let pivot = v[(v.len() - 1) / 2];
    let mut i: isize = 0;
    let mut j: isize = v.len() as isize - 1;

    while i <= j {
        while v[i as usize] < pivot {
            i += 1;
        }
        while v[j as usize] > pivot {
            j -= 1;
        }
        if i <= j {
            v.swap(i as usize, j as usize);
            i += 1;
            j -= 1;
        }
    }

    ((j + 1) as usize, i as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(algorithm: SortAlgorithm, input: &[i32]) {
        let mut actual = input.to_vec();
        algorithm.sort(&mut actual);

        let mut expected = input.to_vec();
        expected.sort_unstable();

        assert_eq!(actual, expected, "{algorithm} on {input:?}");
    }

    #[test]
    fn edge_shapes() {
        let cases: [&[i32]; 8] = [
            &[],
            &[1],
            &[2, 1],
            &[5, 5, 5, 5],
            &[1, 2, 3, 4, 5],
            &[5, 4, 3, 2, 1],
            &[3, 1, 5, 4],
            &[i32::MAX, i32::MIN, 0, -1, 1],
        ];
        for algorithm in SortAlgorithm::ALL {
            for case in cases {
                check(algorithm, case);
            }
        }
    }

    #[test]
    fn partition_splits_strictly() {
        let mut v = [4, 4, 4, 4];
        let (lo_end, hi_start) = partition(&mut v);
        assert!(lo_end < v.len());
        assert!(hi_start > 0);
        assert!(lo_end <= hi_start);
    }

    #[test]
    fn partition_orders_around_pivot() {
        let mut v = [9, 3, 7, 5, 1, 8, 2];
        let pivot = v[(v.len() - 1) / 2];
        let (lo_end, hi_start) = partition(&mut v);

        assert!(v[..lo_end].iter().all(|&x| x <= pivot));
        assert!(v[hi_start..].iter().all(|&x| x >= pivot));
        assert!(v[lo_end..hi_start].iter().all(|&x| x == pivot));
    }

    #[test]
    fn quick_sort_survives_organ_pipe() {
        // Middle-pivot adversarial shape; depth must stay bounded.
        let n = 10_000;
        let mut v: Vec<i32> = (0..n / 2).chain((0..n / 2).rev()).collect();
        quick_sort(&mut v);
        assert!(v.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn stable_sorts_keep_equal_order() {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        struct Tagged(i32, u8);

        impl PartialOrd for Tagged {
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for Tagged {
            fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let input = [Tagged(2, 0), Tagged(1, 0), Tagged(2, 1), Tagged(1, 1)];
        for algorithm in SortAlgorithm::ALL.into_iter().filter(|a| a.is_stable()) {
            let mut v = input;
            algorithm.sort(&mut v);
            assert_eq!(
                v,
                [Tagged(1, 0), Tagged(1, 1), Tagged(2, 0), Tagged(2, 1)],
                "{algorithm}"
            );
        }
    }

    #[test]
    fn names() {
        let names: Vec<_> = SortAlgorithm::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(names, ["bubble", "selection", "insertion", "quick"]);
        assert_eq!(SortAlgorithm::default(), SortAlgorithm::Insertion);
    }
}
