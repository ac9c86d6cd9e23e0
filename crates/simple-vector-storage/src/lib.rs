//! Exclusively-owned contiguous slot storage.
//!
//! [`ContiguousStorage`] owns zero or one heap block of `T` slots. It never
//! grows or shrinks in place: a container that needs more room allocates a
//! fresh block, relocates its elements, and exchanges the two blocks with
//! [`ContiguousStorage::swap`]. Every slot in the block always holds a valid
//! `T` (freshly allocated slots hold `T::default()`), so dropping the storage
//! drops every slot and frees the block with no bookkeeping.
//!
//! ```text
//! ContiguousStorage<T>
//! └── Box<[T]>   (empty box = owns nothing, no allocation)
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;

pub use error::StorageError;

use std::alloc::Layout;
use std::ops::{Index, IndexMut};

/// An exclusively-owned, fixed-length block of `T` slots.
///
/// The slot count is fixed at allocation. Ownership moves between two
/// storages in O(1) via [`swap`](Self::swap); no element is touched.
pub struct ContiguousStorage<T> {
    slots: Box<[T]>,
}

impl<T> ContiguousStorage<T> {
    /// Create a storage that owns nothing.
    pub fn new() -> Self {
        Self {
            slots: Box::default(),
        }
    }

    /// Allocate a block of exactly `len` default-valued slots.
    ///
    /// A zero `len` owns nothing and does not touch the allocator.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts if the allocator fails. Use
    /// [`try_allocate`](Self::try_allocate) to observe either as an error.
    pub fn allocate(len: usize) -> Self
    where
        T: Default,
    {
        Self {
            slots: std::iter::repeat_with(T::default).take(len).collect(),
        }
    }

    /// Allocate a block of exactly `len` default-valued slots, reporting
    /// allocation failure instead of aborting.
    pub fn try_allocate(len: usize) -> Result<Self, StorageError>
    where
        T: Default,
    {
        if Layout::array::<T>(len).is_err() {
            return Err(StorageError::CapacityOverflow { requested: len });
        }
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(len)
            .map_err(|_| StorageError::AllocationFailed { requested: len })?;
        slots.resize_with(len, T::default);
        Ok(Self {
            slots: slots.into_boxed_slice(),
        })
    }

    /// Exchange ownership of the two blocks in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.slots, &mut other.slots);
    }

    /// Number of slots this storage was sized for.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether this storage owns no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Shared view over every owned slot.
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// Mutable view over every owned slot.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Release the block as a `Vec` holding every slot.
    pub fn into_vec(self) -> Vec<T> {
        self.slots.into_vec()
    }
}

impl<T> Default for ContiguousStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Box<[T]>> for ContiguousStorage<T> {
    fn from(slots: Box<[T]>) -> Self {
        Self { slots }
    }
}

impl<T> From<Vec<T>> for ContiguousStorage<T> {
    fn from(slots: Vec<T>) -> Self {
        Self {
            slots: slots.into_boxed_slice(),
        }
    }
}

impl<T> FromIterator<T> for ContiguousStorage<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

impl<T> Index<usize> for ContiguousStorage<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.slots[index]
    }
}

impl<T> IndexMut<usize> for ContiguousStorage<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.slots[index]
    }
}
