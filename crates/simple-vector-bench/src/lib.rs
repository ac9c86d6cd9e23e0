//! Shared fixtures for the simple-vector benchmarks.

#![forbid(unsafe_code)]

use simple_vector::DynamicArray;

/// A container holding `0..len` with `capacity() == len`.
pub fn filled(len: usize) -> DynamicArray<u64> {
    (0..len as u64).collect()
}

/// Deterministic insertion positions spread over a growing container.
///
/// Position `i` is drawn from `[0, i]`, so it is always a valid insertion
/// index for a container that already holds `i` elements.
pub fn insertion_positions(count: usize) -> Vec<usize> {
    (0..count).map(|i| (i * 7919) % (i + 1)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_has_exact_capacity() {
        let v = filled(100);
        assert_eq!(v.len(), 100);
        assert_eq!(v.capacity(), 100);
        assert_eq!(v[99], 99);
    }

    #[test]
    fn insertion_positions_are_always_valid() {
        let mut v = DynamicArray::new();
        for (i, at) in insertion_positions(256).into_iter().enumerate() {
            assert!(at <= i);
            v.insert(at, i).unwrap();
        }
        assert_eq!(v.len(), 256);
    }
}
