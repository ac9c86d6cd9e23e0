//! Equality and ordering.
//!
//! Equality is the one equality primitive and `partial_cmp`/`cmp` the one
//! ordering primitive. `!=`, `<`, `<=`, `>` and `>=` are the standard
//! traits' provided methods on top of them, so they cannot disagree.

use std::cmp::Ordering;

use crate::vector::DynamicArray;

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    /// Same instance, or same length and elementwise equal in order.
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
            || (self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b))
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: PartialOrd> PartialOrd for DynamicArray<T> {
    /// Lexicographic over the live elements; a strict prefix is less.
    /// The same instance is always `Equal`, matching `eq`.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if std::ptr::eq(self, other) {
            return Some(Ordering::Equal);
        }
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for DynamicArray<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_when_same_elements() {
        let a = DynamicArray::from([1, 2, 3]);
        let mut b = DynamicArray::with_capacity(10);
        b.extend([1, 2, 3]);
        assert_eq!(a, b);
        assert_eq!(b, a);
    }

    #[test]
    fn unequal_lengths() {
        assert_ne!(DynamicArray::from([1, 2]), DynamicArray::from([1, 2, 3]));
    }

    #[test]
    fn stale_slots_do_not_affect_equality() {
        let mut a = DynamicArray::from([1, 2, 9]);
        a.remove_last();
        assert_eq!(a, DynamicArray::from([1, 2]));
    }

    #[test]
    #[allow(clippy::eq_op)]
    fn identity_is_equal_even_for_nan() {
        let v = DynamicArray::from([f64::NAN]);
        assert!(v == v);
        assert!(v != DynamicArray::from([f64::NAN]));
    }

    #[test]
    #[allow(clippy::eq_op)]
    fn identity_ordering_agrees_with_equality_for_nan() {
        let v = DynamicArray::from([f64::NAN]);
        assert_eq!(v.partial_cmp(&v), Some(Ordering::Equal));
        assert!(v <= v && v >= v);
        assert!(!v.lt(&v) && !v.gt(&v));

        let other = DynamicArray::from([f64::NAN]);
        assert_eq!(v.partial_cmp(&other), None);
        assert!(!v.le(&other) && !v.ge(&other));
    }

    #[test]
    fn lexicographic_ordering() {
        let a = DynamicArray::from([1, 2]);
        let b = DynamicArray::from([1, 2, 3]);
        let c = DynamicArray::from([2]);
        assert!(a < b);
        assert!(b < c);
        assert!(a < c);
        assert!(c > a);
        assert!(a <= a.clone());
        assert!(a >= a.clone());
        assert_eq!(a.cmp(&b), Ordering::Less);
    }

    #[test]
    fn empty_is_least() {
        let empty: DynamicArray<i32> = DynamicArray::new();
        assert!(empty < DynamicArray::from([i32::MIN]));
        assert_eq!(empty.cmp(&DynamicArray::new()), Ordering::Equal);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn clone_is_equal(items in proptest::collection::vec(any::<i32>(), 0..32)) {
                let v = DynamicArray::from(items);
                prop_assert_eq!(v.clone(), v);
            }

            #[test]
            fn ordering_matches_slice_ordering(
                a in proptest::collection::vec(0u8..4, 0..8),
                b in proptest::collection::vec(0u8..4, 0..8),
            ) {
                let (va, vb) = (DynamicArray::from(a.clone()), DynamicArray::from(b.clone()));
                prop_assert_eq!(va.cmp(&vb), a.cmp(&b));
                prop_assert_eq!(va == vb, a == b);
                prop_assert_eq!(va < vb, vb > va);
                prop_assert_eq!(va <= vb, !(va > vb));
            }
        }
    }
}
