//! The growable contiguous container.
//!
//! A [`DynamicArray`] is a [`ContiguousStorage`] block plus a logical
//! length. Slots `[0, len)` are live; slots `[len, capacity)` hold
//! placeholders (defaults, or values left behind by a move or removal) and
//! are never observable through the public API.
//!
//! Storage is never resized in place. Whenever more room is needed the
//! container allocates a complete replacement block, moves the live
//! elements across, and swaps the blocks. Until that swap the container is
//! untouched, so a failed or panicking allocation leaves it exactly as it
//! was.

use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};
use std::{fmt, slice};

use log::{debug, trace};
use simple_vector_storage::ContiguousStorage;

use crate::config::{GrowthPolicy, ReserveHint};
use crate::error::VectorError;

/// A growable array with value semantics and an explicit doubling policy.
///
/// Element types that take part in growth (`push`, `insert`, `reserve`,
/// `resize`) must implement `Default`: freshly allocated slots are filled
/// with `T::default()`, and moving an element out of a slot leaves a
/// placeholder behind.
///
/// # Access tiers
///
/// - [`at`](Self::at) / [`at_mut`](Self::at_mut) check the index and return
///   [`VectorError::OutOfRange`] on failure.
/// - `v[i]` does not offer recovery: an index outside `[0, len)` is a
///   contract violation and panics.
///
/// # Iterators
///
/// Iterators borrow the container, so any operation that may reallocate
/// or shift elements cannot run while one is outstanding.
pub struct DynamicArray<T> {
    storage: ContiguousStorage<T>,
    len: usize,
}

impl<T> DynamicArray<T> {
    /// Create an empty container. Does not allocate.
    pub fn new() -> Self {
        Self {
            storage: ContiguousStorage::new(),
            len: 0,
        }
    }

    /// Take ownership of `other`'s elements and storage in O(1), leaving
    /// `other` empty with zero capacity.
    pub fn take(other: &mut Self) -> Self {
        std::mem::take(other)
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Whether there are no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.storage.as_slice()[..self.len]
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.storage.as_mut_slice()[..self.len]
    }

    /// Iterator over the live elements, front to back.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Mutable iterator over the live elements, front to back.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Checked access to the element at `index`.
    pub fn at(&self, index: usize) -> Result<&T, VectorError> {
        if index >= self.len {
            return Err(VectorError::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(&self.storage[index])
    }

    /// Checked mutable access to the element at `index`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, VectorError> {
        if index >= self.len {
            return Err(VectorError::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(&mut self.storage[index])
    }

    /// Drop the last element from the live range. Capacity is unchanged.
    ///
    /// The vacated slot keeps its stale value until it is overwritten or
    /// the storage is released.
    ///
    /// # Panics
    ///
    /// Panics if the container is empty.
    pub fn remove_last(&mut self) {
        assert!(
            !self.is_empty(),
            "remove_last called on an empty DynamicArray"
        );
        self.len -= 1;
    }

    /// Remove the element at `index`, shifting everything after it one
    /// slot to the left.
    ///
    /// Returns the position now holding the element that followed the
    /// removed one (equal to the new `len()` when the last element was
    /// removed). O(len).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> usize {
        assert!(
            index < self.len,
            "erase index {index} out of bounds for DynamicArray of length {}",
            self.len
        );
        // The removed value rotates to the end of the live range and
        // becomes the placeholder at the old last slot.
        self.storage.as_mut_slice()[index..self.len].rotate_left(1);
        self.len -= 1;
        index
    }

    /// Forget every live element. Capacity and storage are unchanged.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Exchange contents, length, and capacity with `other` in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        self.storage.swap(&mut other.storage);
        std::mem::swap(&mut self.len, &mut other.len);
    }

    /// Move the live elements into `fresh` and install it as the storage.
    ///
    /// `fresh` must have at least `len` slots. Moving swaps each element
    /// with the placeholder already in the destination slot, so nothing
    /// here can fail.
    fn relocate_into(&mut self, mut fresh: ContiguousStorage<T>) {
        let len = self.len;
        trace!(
            "relocating {len} elements: capacity {} -> {}",
            self.capacity(),
            fresh.len()
        );
        fresh.as_mut_slice()[..len].swap_with_slice(&mut self.storage.as_mut_slice()[..len]);
        self.storage.swap(&mut fresh);
    }

    /// Release the storage as a `Vec` of exactly the live elements.
    pub(crate) fn into_live_vec(self) -> Vec<T> {
        let mut slots = self.storage.into_vec();
        slots.truncate(self.len);
        slots
    }
}

impl<T: Default> DynamicArray<T> {
    /// Create a container of `len` default-valued elements with
    /// `capacity() == len`.
    pub fn with_len(len: usize) -> Self {
        Self {
            storage: ContiguousStorage::allocate(len),
            len,
        }
    }

    /// Create an empty container with exactly `capacity` slots allocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: ContiguousStorage::allocate(capacity),
            len: 0,
        }
    }

    /// Grow the allocation to exactly `new_capacity` slots.
    ///
    /// `new_capacity` is an absolute slot count, not an additional count.
    /// Does nothing if it does not exceed the current capacity. Never
    /// changes `len()` or any element.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity() {
            self.relocate_into(ContiguousStorage::allocate(new_capacity));
        }
    }

    /// Fallible [`reserve`](Self::reserve).
    ///
    /// On failure the container is unchanged.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), VectorError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        let fresh = ContiguousStorage::try_allocate(new_capacity).map_err(|err| {
            debug!("reserving {new_capacity} slots failed: {err}");
            VectorError::from(err)
        })?;
        self.relocate_into(fresh);
        Ok(())
    }

    /// Append `value` at the end, growing by the [`GrowthPolicy`] when full.
    ///
    /// Amortized O(1); O(len) on a growth step.
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.relocate_into(ContiguousStorage::allocate(GrowthPolicy::next_capacity(
                self.capacity(),
            )));
        }
        self.storage[self.len] = value;
        self.len += 1;
    }

    /// Insert `value` at `index`, shifting the elements at and after it
    /// one slot to the right. `index == len()` appends.
    ///
    /// Returns `index`, the position of the inserted element. Fails with
    /// [`VectorError::OutOfRange`] if `index > len()`, leaving the
    /// container unchanged. O(len).
    pub fn insert(&mut self, index: usize, value: T) -> Result<usize, VectorError> {
        let len = self.len;
        if index > len {
            return Err(VectorError::OutOfRange { index, len });
        }

        if len == self.capacity() {
            let mut fresh = ContiguousStorage::allocate(GrowthPolicy::next_capacity(len));
            trace!(
                "relocating {len} elements around insert at {index}: capacity {len} -> {}",
                fresh.len()
            );
            let old = self.storage.as_mut_slice();
            let new = fresh.as_mut_slice();
            new[..index].swap_with_slice(&mut old[..index]);
            new[index] = value;
            new[index + 1..=len].swap_with_slice(&mut old[index..len]);
            self.storage.swap(&mut fresh);
        } else {
            // Slot `len` holds a placeholder; rotating brings it to
            // `index`, where it is overwritten.
            let window = &mut self.storage.as_mut_slice()[index..=len];
            window.rotate_right(1);
            window[0] = value;
        }

        self.len += 1;
        Ok(index)
    }

    /// Set the length to `new_len`.
    ///
    /// Growing past capacity reallocates to
    /// `max(new_len, capacity() * 2)`. Newly exposed elements are
    /// `T::default()`. Shrinking only changes the length.
    pub fn resize(&mut self, new_len: usize) {
        if new_len > self.capacity() {
            // Fresh slots past `len` are already default-valued.
            self.relocate_into(ContiguousStorage::allocate(GrowthPolicy::resize_capacity(
                self.capacity(),
                new_len,
            )));
        } else if new_len > self.len {
            for slot in &mut self.storage.as_mut_slice()[self.len..new_len] {
                *slot = T::default();
            }
        }
        self.len = new_len;
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Create a container of `len` clones of `value` with
    /// `capacity() == len`.
    pub fn from_elem(len: usize, value: T) -> Self {
        Self {
            storage: std::iter::repeat_n(value, len).collect(),
            len,
        }
    }

    /// Append a clone of `value`.
    pub fn push_clone(&mut self, value: &T)
    where
        T: Default,
    {
        self.push(value.clone());
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    /// Deep-copies the live elements. The copy's capacity equals the
    /// source's length; spare capacity is not carried over.
    fn clone(&self) -> Self {
        Self {
            storage: self.iter().cloned().collect(),
            len: self.len,
        }
    }

    /// Copy-and-swap: the full copy is built before `self` is touched.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        debug_assert!(
            index < self.len,
            "index {index} out of bounds for DynamicArray of length {}",
            self.len
        );
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.len,
            "index {index} out of bounds for DynamicArray of length {}",
            self.len
        );
        &mut self.as_mut_slice()[index]
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(items: Vec<T>) -> Self {
        let len = items.len();
        Self {
            storage: ContiguousStorage::from(items),
            len,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(items: [T; N]) -> Self {
        Self::from(Vec::from(items))
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(items: &[T]) -> Self {
        Self::from(items.to_vec())
    }
}

impl<T: Default> From<ReserveHint> for DynamicArray<T> {
    fn from(hint: ReserveHint) -> Self {
        Self::with_capacity(hint.capacity)
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Default> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T: Copy + Default + 'a> Extend<&'a T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &value in iter {
            self.push(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
