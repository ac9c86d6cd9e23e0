//! Storage-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while allocating a storage block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageError {
    /// The requested slot count does not fit in the address space
    /// (`n * size_of::<T>()` overflows `isize::MAX`).
    CapacityOverflow {
        /// Number of slots requested.
        requested: usize,
    },
    /// The allocator refused the request.
    AllocationFailed {
        /// Number of slots requested.
        requested: usize,
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: {requested} slots requested")
            }
            Self::AllocationFailed { requested } => {
                write!(f, "allocation failed: {requested} slots requested")
            }
        }
    }
}

impl Error for StorageError {}
