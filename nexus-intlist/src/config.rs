//! Construction-time configuration for [`IntList`](crate::IntList).

use crate::sort::SortAlgorithm;

/// Capacity used when a list is requested with capacity 0.
pub const DEFAULT_CAPACITY: usize = 10;

/// How the slot buffer grows once its last slot is occupied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GrowthPolicy {
    /// Multiply capacity by 2.
    #[default]
    Double,
    /// Multiply capacity by 1.5, rounding down.
    OneAndHalf,
}

impl GrowthPolicy {
    /// Returns the capacity that follows `current`.
    ///
    /// Always strictly greater than `current`, so a full buffer gains at
    /// least one free slot.
    #[inline]
    pub const fn next_capacity(self, current: usize) -> usize {
        if current == 0 {
            return DEFAULT_CAPACITY;
        }

        let grown = match self {
            Self::Double => current.saturating_mul(2),
            Self::OneAndHalf => current.saturating_add(current / 2),
        };

        if grown > current { grown } else { current + 1 }
    }
}

/// Configuration for an [`IntList`](crate::IntList).
///
/// # Example
///
/// ```
/// use nexus_intlist::{GrowthPolicy, IntList, ListConfig, SortAlgorithm};
///
/// let config = ListConfig::default()
///     .with_initial_capacity(4)
///     .with_growth(GrowthPolicy::OneAndHalf)
///     .with_sort(SortAlgorithm::Quick);
///
/// let list = IntList::with_config(config).unwrap();
/// assert_eq!(list.capacity(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ListConfig {
    /// Requested initial capacity. 0 selects [`DEFAULT_CAPACITY`]; negative
    /// values are rejected at construction.
    pub initial_capacity: isize,
    /// Growth policy applied when the buffer is full.
    pub growth: GrowthPolicy,
    /// Algorithm used by [`IntList::sort_default`](crate::IntList::sort_default).
    pub sort: SortAlgorithm,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY as isize,
            growth: GrowthPolicy::Double,
            sort: SortAlgorithm::Insertion,
        }
    }
}

impl ListConfig {
    /// Sets the requested initial capacity.
    #[must_use]
    pub const fn with_initial_capacity(mut self, capacity: isize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the growth policy.
    #[must_use]
    pub const fn with_growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    /// Sets the default sort algorithm.
    #[must_use]
    pub const fn with_sort(mut self, sort: SortAlgorithm) -> Self {
        self.sort = sort;
        self
    }

    /// Resolves the requested capacity to a physical one.
    ///
    /// Returns `None` for negative requests.
    pub(crate) const fn resolved_capacity(&self) -> Option<usize> {
        match self.initial_capacity {
            c if c < 0 => None,
            0 => Some(DEFAULT_CAPACITY),
            c => Some(c as usize),
        }
    }
}
