// nexus-intlist/src/error.rs

//! Error types for list operations.

use thiserror::Error;

/// Result alias for fallible list operations.
pub type Result<T> = core::result::Result<T, ListError>;

/// Fieldless error discriminant, for matching without caring about payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A constructor argument was rejected.
    InvalidArgument,
    /// An index fell outside the permitted range.
    IndexOutOfRange,
    /// A value or slot was not present.
    ElementNotFound,
    /// An equality check was made against a missing list.
    ListNotFound,
}

/// Errors returned by [`IntList`](crate::IntList).
///
/// Every operation validates its arguments before touching the buffer, so a
/// returned error means the list is exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// Requested capacity was negative.
    #[error("illegal capacity: {capacity}")]
    InvalidArgument {
        /// The rejected capacity.
        capacity: isize,
    },

    /// Index outside the valid range for the operation.
    #[error("index {index} out of range for list of size {size}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Logical size at the time of the call.
        size: usize,
    },

    /// Value is not in the list.
    #[error("element {value} not found")]
    ValueNotFound {
        /// The value that was searched for.
        value: i32,
    },

    /// Slot at `index` holds no element.
    #[error("no element at index {index}")]
    SlotAbsent {
        /// The index of the absent slot.
        index: usize,
    },

    /// Comparison target was missing.
    #[error("list to compare against does not exist")]
    ListNotFound,
}

impl ListError {
    /// Returns the error's kind.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Self::ValueNotFound { .. } | Self::SlotAbsent { .. } => ErrorKind::ElementNotFound,
            Self::ListNotFound => ErrorKind::ListNotFound,
        }
    }
}
