//! Pluggable equivalence relations
//!
//! The comparison engine never uses the element types' own `==` in its `_by`
//! operations. It asks an [`Equivalence`] instead, which may relate two
//! different element types.
//!
//! Any `Fn(&T, &K) -> bool` closure is a relation:
//!
//! ```
//! use attest_check::Equivalence;
//!
//! let same_length = |a: &&str, b: &String| a.len() == b.len();
//! assert!(same_length.equals(&"abc", &"xyz".to_string()).unwrap());
//! ```

use std::marker::PhantomData;

use crate::error::RelationError;

// ============================================================================
// EQUIVALENCE TRAIT
// ============================================================================

/// Decides whether two elements, possibly of different types, are equal for
/// one comparison.
///
/// Implementations must be reflexive where `T` and `K` coincide and must give
/// the same answer for the same pair on every call. The engine trusts them.
///
/// An `Err` means the relation itself failed; the engine propagates it.
pub trait Equivalence<T: ?Sized, K: ?Sized = T> {
    /// Returns whether `first` and `second` are equal under this relation.
    fn equals(&self, first: &T, second: &K) -> Result<bool, RelationError>;
}

impl<T, K, F> Equivalence<T, K> for F
where
    T: ?Sized,
    K: ?Sized,
    F: Fn(&T, &K) -> bool,
{
    #[inline]
    fn equals(&self, first: &T, second: &K) -> Result<bool, RelationError> {
        Ok(self(first, second))
    }
}

// ============================================================================
// NATIVE
// ============================================================================

/// Relation that delegates to the element type's own `PartialEq`.
///
/// An absent value (`None`) equals only another absent value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Native;

impl<T, K> Equivalence<T, K> for Native
where
    T: PartialEq<K> + ?Sized,
    K: ?Sized,
{
    #[inline]
    fn equals(&self, first: &T, second: &K) -> Result<bool, RelationError> {
        Ok(first == second)
    }
}

// ============================================================================
// FALLIBLE
// ============================================================================

/// Relation built from a closure that can fail.
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F> {
    compare: F,
}

impl<T, K, E, F> Equivalence<T, K> for Fallible<F>
where
    T: ?Sized,
    K: ?Sized,
    F: Fn(&T, &K) -> Result<bool, E>,
    E: Into<RelationError>,
{
    fn equals(&self, first: &T, second: &K) -> Result<bool, RelationError> {
        (self.compare)(first, second).map_err(Into::into)
    }
}

/// Wraps a fallible comparison closure into a relation.
///
/// # Examples
///
/// ```
/// use attest_check::{Equivalence, fallible};
///
/// let parsed = fallible(|a: &i32, b: &&str| b.parse::<i32>().map(|b| *a == b));
/// assert!(parsed.equals(&4, &"4").unwrap());
/// assert!(parsed.equals(&4, &"four").is_err());
/// ```
pub fn fallible<F>(compare: F) -> Fallible<F> {
    Fallible { compare }
}

// ============================================================================
// BY KEY
// ============================================================================

/// Relation comparing a key extracted from each element.
pub struct ByKey<T: ?Sized, F> {
    key: F,
    _phantom: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F: Clone> Clone for ByKey<T, F> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T: ?Sized, F> std::fmt::Debug for ByKey<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByKey").finish_non_exhaustive()
    }
}

impl<T, Q, F> Equivalence<T, T> for ByKey<T, F>
where
    T: ?Sized,
    Q: PartialEq,
    F: Fn(&T) -> Q,
{
    fn equals(&self, first: &T, second: &T) -> Result<bool, RelationError> {
        Ok((self.key)(first) == (self.key)(second))
    }
}

/// Creates a relation that treats two elements as equal when their keys are.
///
/// # Examples
///
/// ```
/// use attest_check::{Equivalence, by_key};
///
/// let case_insensitive = by_key(|s: &String| s.to_lowercase());
/// assert!(case_insensitive.equals(&"Foo".to_string(), &"fOO".to_string()).unwrap());
/// ```
pub fn by_key<T: ?Sized, Q, F>(key: F) -> ByKey<T, F>
where
    F: Fn(&T) -> Q,
{
    ByKey {
        key,
        _phantom: PhantomData,
    }
}

// ============================================================================
// FLIPPED
// ============================================================================

/// Relation with its argument order swapped.
#[derive(Debug, Clone, Copy)]
pub struct Flipped<R> {
    inner: R,
}

impl<T, K, R> Equivalence<K, T> for Flipped<R>
where
    T: ?Sized,
    K: ?Sized,
    R: Equivalence<T, K>,
{
    fn equals(&self, first: &K, second: &T) -> Result<bool, RelationError> {
        self.inner.equals(second, first)
    }
}

/// Turns an `Equivalence<T, K>` into an `Equivalence<K, T>`.
pub fn flipped<R>(relation: R) -> Flipped<R> {
    Flipped { inner: relation }
}

// ============================================================================
// TESTS
// ============================================================================
