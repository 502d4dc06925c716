//! Growable integer list with in-place sorting and binary search.
//!
//! [`IntList`] stores `i32` values in a contiguous run of [`Slot`]s, keeping
//! the logical length separate from physical capacity. Appends grow the
//! buffer by reallocation-and-copy once the last slot is occupied, giving
//! amortized O(1) `add`.
//!
//! # Quick Start
//!
//! ```
//! use nexus_intlist::{IntList, SortAlgorithm};
//!
//! let mut list = IntList::new(4).unwrap();
//! list.extend([9, 4, 7, 1, 3]); // grows past 4
//!
//! assert_eq!(list.len(), 5);
//! assert!(list.capacity() >= 5);
//!
//! // Sorting hands back a view that can binary search.
//! let sorted = list.sort(SortAlgorithm::Quick);
//! assert!(sorted.contains(7));
//! assert!(!sorted.contains(8));
//!
//! assert_eq!(list.to_array(), vec![1, 3, 4, 7, 9]);
//! ```
//!
//! # Storage Model
//!
//! ```text
//! capacity = 8, len = 5
//! ┌────┬────┬────┬────┬────┬────┬────┬────┐
//! │ P3 │ P1 │ P5 │ P4 │ P2 │ ·  │ ·  │ ·  │
//! └────┴────┴────┴────┴────┴────┴────┴────┘
//!   present prefix          absent tail
//! ```
//!
//! Every slot below `len` is [`Slot::Present`]; every slot at or above it is
//! [`Slot::Absent`]. Removal compacts and clears the freed slot, so queries
//! and sorts only ever look at the present prefix.
//!
//! # Sorting and Searching
//!
//! | Algorithm | Time | Stable |
//! |-----------|------|--------|
//! | [`SortAlgorithm::Bubble`] | O(n²) | yes |
//! | [`SortAlgorithm::Selection`] | O(n²) | no |
//! | [`SortAlgorithm::Insertion`] | O(n²), O(n) if sorted | yes |
//! | [`SortAlgorithm::Quick`] | O(n log n) avg | no |
//!
//! Binary search needs ascending input. [`IntList`] only exposes it through
//! [`Sorted`], which [`IntList::sort`] returns, or the composite
//! [`IntList::sort_and_search`]. [`IntList::contains`] is a plain linear scan
//! and never reorders the list.
//!
//! # Errors
//!
//! Fallible operations return [`ListError`]. Arguments are validated before
//! any slot is touched; an error leaves the list unchanged.
//!
//! # Threading
//!
//! `IntList` is `Send + Sync` but has no interior synchronization. Wrap it in
//! a `Mutex` to share mutable access across threads.
//!
//! # Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` for [`ListConfig`], [`GrowthPolicy`]
//!   and [`SortAlgorithm`]
//! - `harness` - builds the `perf_intlist_sort` timing binary

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod list;
pub mod search;
pub mod sort;
pub mod storage;

pub use config::{DEFAULT_CAPACITY, GrowthPolicy, ListConfig};
pub use error::{ErrorKind, ListError, Result};
pub use list::{IntList, Iter, Sorted};
pub use sort::SortAlgorithm;
pub use storage::{Slot, SlotBuffer};
