//! IntList - a growable list of `i32` with in-place sorting.

use core::fmt;

use tracing::trace;

use crate::config::{GrowthPolicy, ListConfig};
use crate::error::{ListError, Result};
use crate::search::binary_search;
use crate::sort::SortAlgorithm;
use crate::storage::{Slot, SlotBuffer};

/// A growable, index-addressable list of `i32`.
///
/// Elements live in a [`SlotBuffer`]: positions `0..len()` are present,
/// the rest of the capacity is absent. Appends grow the buffer according to
/// the configured [`GrowthPolicy`] once the last slot is taken.
///
/// # Example
///
/// ```
/// use nexus_intlist::{IntList, SortAlgorithm};
///
/// let mut list = IntList::new(4).unwrap();
/// list.add(3);
/// list.add(1);
/// list.add(5);
/// list.add(4);
/// assert_eq!(list.to_array(), vec![3, 1, 5, 4]);
///
/// let sorted = list.sort(SortAlgorithm::Insertion);
/// assert!(sorted.contains(4));
/// assert_eq!(list.to_array(), vec![1, 3, 4, 5]);
///
/// list.remove(1).unwrap();
/// assert_eq!(list.to_array(), vec![3, 4, 5]);
/// ```
#[derive(Debug, Clone)]
pub struct IntList {
    storage: SlotBuffer,
    config: ListConfig,
}

impl IntList {
    /// Creates a list with the requested capacity and default policies.
    ///
    /// A capacity of 0 selects [`DEFAULT_CAPACITY`](crate::DEFAULT_CAPACITY).
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidArgument`] if `capacity` is negative.
    pub fn new(capacity: isize) -> Result<Self> {
        Self::with_config(ListConfig::default().with_initial_capacity(capacity))
    }

    /// Creates a list from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidArgument`] if the requested capacity is
    /// negative.
    pub fn with_config(config: ListConfig) -> Result<Self> {
        let capacity = config
            .resolved_capacity()
            .ok_or(ListError::InvalidArgument {
                capacity: config.initial_capacity,
            })?;

        Ok(Self {
            storage: SlotBuffer::with_capacity(capacity),
            config,
        })
    }

    /// Returns the configuration this list was built with.
    #[inline]
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Returns the growth policy.
    #[inline]
    pub fn growth(&self) -> GrowthPolicy {
        self.config.growth
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the number of physical slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Appends `item`, growing first if the last slot is occupied.
    ///
    /// Returns `item`. Amortized O(1).
    #[inline]
    pub fn add(&mut self, item: i32) -> i32 {
        self.storage.reserve_one(self.config.growth);
        self.storage.push(item);
        item
    }

    /// Inserts `item` at `index`, shifting later elements right.
    ///
    /// Returns `item`. O(n).
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index > len()`.
    pub fn insert(&mut self, index: usize, item: i32) -> Result<i32> {
        self.check_index(index, self.len())?;
        self.storage.reserve_one(self.config.growth);
        self.storage.insert(index, item);
        Ok(item)
    }

    /// Overwrites the element at `index` with `item`.
    ///
    /// `index == len()` is accepted and appends, so the list never develops
    /// a gap. Returns `item`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index > len()`.
    pub fn set(&mut self, index: usize, item: i32) -> Result<i32> {
        self.check_index(index, self.len())?;
        if index == self.len() {
            return Ok(self.add(item));
        }
        self.storage.replace(index, item);
        Ok(item)
    }

    /// Removes every occurrence of `item` in one compacting pass.
    ///
    /// Returns `item`. Use [`remove_first`](Self::remove_first) to drop only
    /// one occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::ValueNotFound`] if `item` is not in the list.
    pub fn remove(&mut self, item: i32) -> Result<i32> {
        if !self.contains(item) {
            return Err(ListError::ValueNotFound { value: item });
        }
        let removed = self.storage.retain(|v| v != item);
        trace!(item, removed, "removed all occurrences");
        Ok(item)
    }

    /// Removes the first occurrence of `item`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::ValueNotFound`] if `item` is not in the list.
    pub fn remove_first(&mut self, item: i32) -> Result<i32> {
        let index = self
            .index_of(item)
            .ok_or(ListError::ValueNotFound { value: item })?;
        self.remove_at(index)
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// left.
    ///
    /// # Errors
    ///
    /// - [`ListError::IndexOutOfRange`] if `index >= len()`
    /// - [`ListError::SlotAbsent`] if the slot holds no element
    pub fn remove_at(&mut self, index: usize) -> Result<i32> {
        let value = self.get(index)?;
        self.storage.remove(index);
        Ok(value)
    }

    /// Removes all elements. Capacity is kept.
    pub fn clear(&mut self) {
        trace!(len = self.len(), capacity = self.capacity(), "clearing list");
        self.storage.clear();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// - [`ListError::IndexOutOfRange`] if `index >= len()`
    /// - [`ListError::SlotAbsent`] if the slot holds no element
    pub fn get(&self, index: usize) -> Result<i32> {
        if index >= self.len() {
            return Err(ListError::IndexOutOfRange {
                index,
                size: self.len(),
            });
        }
        self.storage
            .slot(index)
            .and_then(Slot::get)
            .ok_or(ListError::SlotAbsent { index })
    }

    /// Returns `true` if `item` is in the list. Linear scan, never reorders.
    pub fn contains(&self, item: i32) -> bool {
        self.storage.present().iter().any(|slot| slot.holds(item))
    }

    /// Returns the position of the first occurrence of `item`.
    pub fn index_of(&self, item: i32) -> Option<usize> {
        self.storage.present().iter().position(|slot| slot.holds(item))
    }

    /// Returns the position of the last occurrence of `item`.
    pub fn last_index_of(&self, item: i32) -> Option<usize> {
        self.storage.present().iter().rposition(|slot| slot.holds(item))
    }

    /// Returns a copy of the elements in order.
    pub fn to_array(&self) -> Vec<i32> {
        self.storage.values().collect()
    }

    /// Returns an iterator over the elements in order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.storage.present().iter(),
        }
    }

    /// Compares against a list that may not exist.
    ///
    /// Lists are equal when they hold the same elements in the same order;
    /// capacity and policies are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::ListNotFound`] if `other` is `None`.
    pub fn equals(&self, other: Option<&IntList>) -> Result<bool> {
        let other = other.ok_or(ListError::ListNotFound)?;
        Ok(self.storage.present() == other.storage.present())
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    /// Sorts the elements in place and returns a sorted view for searching.
    ///
    /// Only the present elements are sorted; unused capacity is untouched.
    pub fn sort(&mut self, algorithm: SortAlgorithm) -> Sorted<'_> {
        algorithm.sort(self.storage.present_mut());
        Sorted {
            slots: self.storage.present(),
        }
    }

    /// Sorts with the configured default algorithm.
    pub fn sort_default(&mut self) -> Sorted<'_> {
        let algorithm = self.config.sort;
        self.sort(algorithm)
    }

    /// Sorts in place, then binary searches for `item`.
    ///
    /// This reorders the list. Use [`contains`](Self::contains) for a
    /// read-only membership test.
    pub fn sort_and_search(&mut self, algorithm: SortAlgorithm, item: i32) -> bool {
        self.sort(algorithm).contains(item)
    }

    #[inline]
    fn check_index(&self, index: usize, max: usize) -> Result<()> {
        if index > max {
            return Err(ListError::IndexOutOfRange {
                index,
                size: self.len(),
            });
        }
        Ok(())
    }
}

impl Default for IntList {
    fn default() -> Self {
        Self {
            storage: SlotBuffer::with_capacity(crate::DEFAULT_CAPACITY),
            config: ListConfig::default(),
        }
    }
}

impl PartialEq for IntList {
    fn eq(&self, other: &Self) -> bool {
        self.storage.present() == other.storage.present()
    }
}

impl Eq for IntList {}

impl fmt::Display for IntList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl Extend<i32> for IntList {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl FromIterator<i32> for IntList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = Self::default();
        list.extend(iter);
        list
    }
}

impl<'a> IntoIterator for &'a IntList {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Sorted view
// =============================================================================

/// Borrowed view of a list that has just been sorted.
///
/// Obtained only from [`IntList::sort`], so binary search through it always
/// runs on ascending data. The list cannot be mutated while the view lives.
#[derive(Debug, Clone, Copy)]
pub struct Sorted<'a> {
    slots: &'a [Slot],
}

impl<'a> Sorted<'a> {
    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the view is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Binary searches for `item`. O(log n).
    #[inline]
    pub fn contains(&self, item: i32) -> bool {
        self.position(item).is_some()
    }

    /// Binary searches for `item`, returning a matching position.
    ///
    /// With duplicates, any matching position may be returned.
    #[inline]
    pub fn position(&self, item: i32) -> Option<usize> {
        binary_search(self.slots, &Slot::Present(item))
    }

    /// Returns the smallest element.
    pub fn first(&self) -> Option<i32> {
        self.slots.first().and_then(|slot| slot.get())
    }

    /// Returns the largest element.
    pub fn last(&self) -> Option<i32> {
        self.slots.last().and_then(|slot| slot.get())
    }

    /// Returns an iterator over the elements in ascending order.
    #[inline]
    pub fn iter(&self) -> Iter<'a> {
        Iter {
            inner: self.slots.iter(),
        }
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// Iterator over list elements, front to back.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: core::slice::Iter<'a, Slot>,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<i32> {
        self.inner.next().and_then(|slot| slot.get())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<i32> {
        self.inner.next_back().and_then(|slot| slot.get())
    }
}

impl ExactSizeIterator for Iter<'_> {}
