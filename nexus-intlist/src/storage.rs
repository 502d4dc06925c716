//! Slot buffer backing [`IntList`](crate::IntList).
//!
//! The buffer owns a fixed run of [`Slot`]s and a logical length. Every slot
//! below the length is [`Slot::Present`], every slot at or above it is
//! [`Slot::Absent`]. All mutating operations preserve that split, so callers
//! never need to scan for a marker to find the end of the data.
//!
//! Growth is reallocation-and-copy: a new boxed slice is allocated, the
//! present prefix copied over, and the old allocation dropped.

use tracing::debug;

use crate::config::GrowthPolicy;

/// One physical storage position.
///
/// Ordering puts every `Present` value before `Absent`, and orders present
/// values by their integer. Sorting a run of slots therefore sorts the
/// integers they hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    /// Slot holds a value.
    Present(i32),
    /// Slot is unused capacity.
    #[default]
    Absent,
}

impl Slot {
    /// Returns the held value, if any.
    #[inline]
    pub const fn get(self) -> Option<i32> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Returns `true` if the slot holds a value.
    #[inline]
    pub const fn is_present(self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if the slot is unused.
    #[inline]
    pub const fn is_absent(self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if the slot holds exactly `value`.
    #[inline]
    pub const fn holds(self, value: i32) -> bool {
        matches!(self, Self::Present(v) if v == value)
    }
}

impl From<i32> for Slot {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Present(value)
    }
}

impl From<Option<i32>> for Slot {
    #[inline]
    fn from(value: Option<i32>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }
}

// =============================================================================
// SlotBuffer
// =============================================================================

/// Contiguous, growable run of slots with a present prefix.
#[derive(Debug, Clone)]
pub struct SlotBuffer {
    slots: Box<[Slot]>,
    len: usize,
}

impl SlotBuffer {
    /// Creates a buffer with exactly `capacity` absent slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        Self {
            slots: vec![Slot::Absent; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Returns the number of physical slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of present slots.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slot is present.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the last physical slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Returns the slot at `pos`, including positions past the length.
    #[inline]
    pub fn slot(&self, pos: usize) -> Option<Slot> {
        self.slots.get(pos).copied()
    }

    /// Returns the present prefix.
    #[inline]
    pub fn present(&self) -> &[Slot] {
        &self.slots[..self.len]
    }

    /// Returns the present prefix mutably.
    ///
    /// Callers may reorder or overwrite slots in place but must leave every
    /// slot present.
    #[inline]
    pub fn present_mut(&mut self) -> &mut [Slot] {
        &mut self.slots[..self.len]
    }

    /// Grows the buffer if it is full, so the next store has a free slot.
    pub fn reserve_one(&mut self, policy: GrowthPolicy) {
        if !self.is_full() {
            return;
        }

        let old = self.capacity();
        let new = policy.next_capacity(old);
        debug!(old, new, ?policy, "growing slot buffer");

        let mut slots = vec![Slot::Absent; new].into_boxed_slice();
        slots[..self.len].copy_from_slice(&self.slots[..self.len]);
        self.slots = slots;
    }

    /// Stores `value` after the last present slot.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is full. Call [`reserve_one`](Self::reserve_one)
    /// first.
    #[inline]
    pub fn push(&mut self, value: i32) {
        assert!(!self.is_full(), "slot buffer is full");
        self.slots[self.len] = Slot::Present(value);
        self.len += 1;
    }

    /// Stores `value` at `pos`, shifting `pos..len` one slot right.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is full or `pos > len`.
    pub fn insert(&mut self, pos: usize, value: i32) {
        assert!(!self.is_full(), "slot buffer is full");
        assert!(pos <= self.len, "insert position out of bounds");

        // [pos, len] -> [pos + 1, len + 1]; slot `len` is absent and gets overwritten
        self.slots[pos..=self.len].rotate_right(1);
        self.slots[pos] = Slot::Present(value);
        self.len += 1;
    }

    /// Overwrites the present slot at `pos`, returning the previous value.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= len`.
    #[inline]
    pub fn replace(&mut self, pos: usize, value: i32) -> Slot {
        assert!(pos < self.len, "replace position out of bounds");
        core::mem::replace(&mut self.slots[pos], Slot::Present(value))
    }

    /// Removes the slot at `pos`, shifting `pos + 1..len` one slot left and
    /// clearing the freed tail slot.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= len`.
    pub fn remove(&mut self, pos: usize) -> Slot {
        assert!(pos < self.len, "remove position out of bounds");

        let removed = self.slots[pos];
        self.slots[pos..self.len].rotate_left(1);
        self.len -= 1;
        self.slots[self.len] = Slot::Absent;
        removed
    }

    /// Keeps only the present slots for which `keep` returns `true`,
    /// compacting survivors to the front in one pass.
    ///
    /// Returns the number of slots removed.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(i32) -> bool,
    {
        let mut write = 0;
        for read in 0..self.len {
            let slot = self.slots[read];
            if slot.get().is_some_and(&mut keep) {
                self.slots[write] = slot;
                write += 1;
            }
        }

        let removed = self.len - write;
        self.slots[write..self.len].fill(Slot::Absent);
        self.len = write;
        removed
    }

    /// Marks every slot absent. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.slots[..self.len].fill(Slot::Absent);
        self.len = 0;
    }

    /// Returns an iterator over present values.
    #[inline]
    pub fn values(&self) -> impl DoubleEndedIterator<Item = i32> + '_ {
        self.present().iter().filter_map(|slot| slot.get())
    }
}
