//! Container error types.
//!
//! Only recoverable failures live here. Precondition violations (unchecked
//! indexing out of bounds, `remove_last` on an empty container, `erase`
//! past the end) are programmer errors and panic instead.

use std::error::Error;
use std::fmt;

use simple_vector_storage::StorageError;

/// Recoverable errors from [`DynamicArray`](crate::DynamicArray) operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VectorError {
    /// A checked access or insertion named a position outside the live range.
    OutOfRange {
        /// The offending position.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// Building replacement storage failed; the container is unchanged.
    AllocationFailed(StorageError),
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::AllocationFailed(reason) => write!(f, "reservation failed: {reason}"),
        }
    }
}

impl Error for VectorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AllocationFailed(reason) => Some(reason),
            _ => None,
        }
    }
}

impl From<StorageError> for VectorError {
    fn from(err: StorageError) -> Self {
        Self::AllocationFailed(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_index_and_len() {
        let err = VectorError::OutOfRange { index: 100, len: 3 };
        assert_eq!(err.to_string(), "index 100 out of range for length 3");
        assert!(err.source().is_none());
    }

    #[test]
    fn allocation_failure_exposes_storage_source() {
        let err: VectorError = StorageError::CapacityOverflow { requested: 7 }.into();
        let source = err.source().expect("wrapped storage error");
        assert_eq!(source.to_string(), "capacity overflow: 7 slots requested");
    }
}
