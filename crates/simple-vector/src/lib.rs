//! A growable, contiguous sequence container with value semantics.
//!
//! [`DynamicArray`] reimplements the dynamic-array abstraction on top of an
//! exclusively-owned slot block ([`ContiguousStorage`]) with an explicit,
//! testable growth policy rather than delegating growth to `Vec`.
//!
//! ```text
//! DynamicArray<T>
//! ├── len                       (live elements, [0, len))
//! └── ContiguousStorage<T>      (capacity() slots, swapped on growth)
//! ```
//!
//! # Growth
//!
//! A full container that must take one more element grows to
//! `max(capacity * 2, capacity + 1)` (see [`GrowthPolicy`]). `resize` past
//! capacity grows to `max(new_len, capacity * 2)`. `reserve` grows to
//! exactly the requested capacity. Capacity never shrinks implicitly.
//!
//! # Failure model
//!
//! - [`VectorError::OutOfRange`] is a recoverable error from the checked
//!   accessors ([`DynamicArray::at`], [`DynamicArray::at_mut`]) and from
//!   [`DynamicArray::insert`].
//! - Unchecked indexing out of range, [`DynamicArray::remove_last`] on an
//!   empty container, and [`DynamicArray::erase`] past the end are
//!   precondition violations and panic.
//! - Replacement storage is always built completely before it is swapped
//!   in, so allocation failure or a panicking `Default`/`Clone` leaves the
//!   container as it was.
//!
//! # Example
//!
//! ```rust
//! use simple_vector::DynamicArray;
//!
//! let mut v = DynamicArray::new();
//! v.push(5);
//! v.push(7);
//! v.push(9);
//! assert_eq!((v.len(), v.capacity()), (3, 4));
//!
//! v.insert(1, 6).unwrap();
//! assert_eq!(v.as_slice(), &[5, 6, 7, 9]);
//! assert!(v.at(100).is_err());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod cmp;
pub mod config;
pub mod error;
pub mod iter;
pub mod vector;

// Public re-exports for the primary API surface.
pub use config::{GrowthPolicy, ReserveHint};
pub use error::VectorError;
pub use iter::IntoIter;
pub use simple_vector_storage::{ContiguousStorage, StorageError};
pub use vector::DynamicArray;
