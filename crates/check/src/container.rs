//! Container adapter for the comparison engine
//!
//! The engine needs three things from a container: its size, its elements in
//! iteration order, and a native membership test. [`Container`] provides them
//! through a GAT iterator so that slices, arrays, vectors, deques and sets can
//! all be compared without copying.

use std::collections::{BTreeSet, HashSet, VecDeque, btree_set, hash_set, vec_deque};
use std::fmt;
use std::hash::{BuildHasher, Hash};

// ============================================================================
// CORE TRAIT
// ============================================================================

/// A sized, iterable collection of elements.
pub trait Container {
    /// Element type.
    type Item;

    /// Iterator over the elements in iteration order.
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Number of elements.
    fn size(&self) -> usize;

    /// Iterates the elements.
    fn elements(&self) -> Self::Iter<'_>;

    /// Native membership test.
    ///
    /// Linear by default; sets override it with their own lookup.
    fn holds(&self, item: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.elements().any(|element| element == item)
    }
}

/// Marker for containers without multiplicity.
pub trait SetContainer: Container {}

/// Marker for containers whose iteration order is fixed by their contents or
/// their construction, so that positions can be compared.
///
/// `HashSet` is not ordered:
///
/// ```compile_fail
/// use std::collections::HashSet;
/// use attest_check::Checker;
///
/// let a: HashSet<u32> = (0..8).collect();
/// let b: HashSet<u32> = (0..8).rev().collect();
/// let _ = Checker::default().same_order(&a, &b);
/// ```
pub trait OrderedContainer: Container {}

// ============================================================================
// SEQUENCES
// ============================================================================

impl<T> Container for [T] {
    type Item = T;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T> OrderedContainer for [T] {}

impl<T, const N: usize> Container for [T; N] {
    type Item = T;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn size(&self) -> usize {
        N
    }

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T, const N: usize> OrderedContainer for [T; N] {}

impl<T> Container for Vec<T> {
    type Item = T;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T> OrderedContainer for Vec<T> {}

impl<T> Container for VecDeque<T> {
    type Item = T;
    type Iter<'a>
        = vec_deque::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T> OrderedContainer for VecDeque<T> {}

// ============================================================================
// SETS
// ============================================================================

impl<T, S> Container for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    type Item = T;
    type Iter<'a>
        = hash_set::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn holds(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.contains(item)
    }
}

impl<T, S> SetContainer for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
}

impl<T: Ord> Container for BTreeSet<T> {
    type Item = T;
    type Iter<'a>
        = btree_set::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn holds(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.contains(item)
    }
}

impl<T: Ord> SetContainer for BTreeSet<T> {}

impl<T: Ord> OrderedContainer for BTreeSet<T> {}

// ============================================================================
// RENDERING
// ============================================================================

/// Renders a container as a debug list, e.g. `[1, 2, 3]`.
pub struct Listing<'a, C: ?Sized>(pub &'a C);

impl<C> fmt::Display for Listing<'_, C>
where
    C: Container + ?Sized,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.elements()).finish()
    }
}

impl<C> fmt::Debug for Listing<'_, C>
where
    C: Container + ?Sized,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Shorthand for [`Listing`].
pub fn listing<C: ?Sized>(container: &C) -> Listing<'_, C> {
    Listing(container)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_and_vec() {
        let items = vec![1, 2, 3];
        assert_eq!(items.size(), 3);
        assert_eq!(items.as_slice().size(), 3);
        assert!(items.holds(&2));
        assert!(!items.holds(&4));
    }

    #[test]
    fn test_array_size_is_const() {
        let items = [7u8; 4];
        assert_eq!(items.size(), 4);
        assert_eq!(items.elements().count(), 4);
    }

    #[test]
    fn test_deque_iteration_order() {
        let mut items = VecDeque::new();
        items.push_back(2);
        items.push_front(1);
        let collected: Vec<_> = items.elements().copied().collect();
        assert_eq!(collected, vec![1, 2]);
    }

    #[test]
    fn test_sets_use_native_lookup() {
        let hashed: HashSet<&str> = ["a", "b"].into_iter().collect();
        let ordered: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
        assert!(hashed.holds(&"a"));
        assert!(!hashed.holds(&"c"));
        assert!(ordered.holds(&3));
        assert_eq!(ordered.size(), 3);
    }

    #[test]
    fn test_listing() {
        assert_eq!(listing(&vec![1, 2, 3]).to_string(), "[1, 2, 3]");
        assert_eq!(listing(&Vec::<i32>::new()).to_string(), "[]");
        assert_eq!(listing(&["a", "b"]).to_string(), "[\"a\", \"b\"]");
        let ordered: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
        assert_eq!(format!("{:?}", listing(&ordered)), "[1, 2, 3]");
    }
}
