//! Capacity configuration: reservation hints and the growth policy.

/// A capacity reservation for constructing an empty container.
///
/// `DynamicArray::from(ReserveHint::new(n))` yields `len == 0` and
/// `capacity == n` with the block already allocated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReserveHint {
    /// Number of slots to allocate up front.
    pub capacity: usize,
}

impl ReserveHint {
    /// Create a hint reserving `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl From<usize> for ReserveHint {
    fn from(capacity: usize) -> Self {
        Self::new(capacity)
    }
}

/// Capacity growth arithmetic shared by every growing operation.
///
/// When a full container must take one more element it moves to
/// `max(capacity * GROWTH_FACTOR, capacity + 1)`: an empty container gets
/// one slot, anything else doubles. Across N pushes this bounds total
/// relocation work to O(N).
#[derive(Clone, Copy, Debug)]
pub struct GrowthPolicy;

impl GrowthPolicy {
    /// Multiplier applied to a non-empty capacity on growth.
    pub const GROWTH_FACTOR: usize = 2;

    /// Capacity an empty container grows to when it first needs a slot.
    pub const MIN_NON_ZERO_CAPACITY: usize = 1;

    /// Capacity after one growth step from `current`.
    ///
    /// # Panics
    ///
    /// Panics if the doubled capacity overflows `usize`.
    pub fn next_capacity(current: usize) -> usize {
        current
            .checked_mul(Self::GROWTH_FACTOR)
            .map(|doubled| doubled.max(current + 1))
            .unwrap_or_else(|| capacity_overflow())
    }

    /// Capacity to grow to when `required` slots must fit and `current`
    /// does not suffice: `max(required, current * GROWTH_FACTOR)`.
    ///
    /// Doubling that overflows saturates to `required`, which is always
    /// representable.
    pub fn resize_capacity(current: usize, required: usize) -> usize {
        current
            .checked_mul(Self::GROWTH_FACTOR)
            .map_or(required, |doubled| doubled.max(required))
    }
}

#[cold]
fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}
