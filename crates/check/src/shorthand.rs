//! Free functions for the common checks
//!
//! Each function runs the check on a default [`Checker`]: active, without a
//! message prefix. Use a configured `Checker` for anything else.

use std::fmt::Debug;

use crate::checker::Checker;
use crate::container::{Container, OrderedContainer};
use crate::equivalence::Equivalence;
use crate::error::CheckResult;

/// See [`Checker::same_size`].
pub fn same_size<A, B>(expected: &A, found: &B) -> CheckResult<()>
where
    A: Container + ?Sized,
    B: Container + ?Sized,
    A::Item: Debug,
    B::Item: Debug,
{
    Checker::default().same_size(expected, found)
}

/// See [`Checker::contains_exact`].
pub fn contains_exact<A, B>(expected: &A, found: &B) -> CheckResult<()>
where
    A: Container + ?Sized,
    B: Container<Item = A::Item> + ?Sized,
    A::Item: PartialEq + Debug,
{
    Checker::default().contains_exact(expected, found)
}

/// See [`Checker::contains_exact_by`].
pub fn contains_exact_by<A, B, R>(expected: &A, found: &B, relation: R) -> CheckResult<()>
where
    A: Container + ?Sized,
    B: Container + ?Sized,
    A::Item: Debug,
    B::Item: Debug,
    R: Equivalence<A::Item, B::Item>,
{
    Checker::default().contains_exact_by(expected, found, relation)
}

/// See [`Checker::same_order`].
pub fn same_order<A, B>(expected: &A, found: &B) -> CheckResult<()>
where
    A: OrderedContainer + ?Sized,
    B: OrderedContainer + ?Sized,
    A::Item: PartialEq<B::Item> + Debug,
    B::Item: Debug,
{
    Checker::default().same_order(expected, found)
}

/// See [`Checker::same_order_by`].
pub fn same_order_by<A, B, R>(expected: &A, found: &B, relation: R) -> CheckResult<()>
where
    A: OrderedContainer + ?Sized,
    B: OrderedContainer + ?Sized,
    A::Item: Debug,
    B::Item: Debug,
    R: Equivalence<A::Item, B::Item>,
{
    Checker::default().same_order_by(expected, found, relation)
}

/// See [`Checker::contains_at_least`].
pub fn contains_at_least<T, C, R>(expected_object: &T, found: &C, relation: R) -> CheckResult<()>
where
    T: Debug + ?Sized,
    C: Container + ?Sized,
    C::Item: Debug,
    R: Equivalence<T, C::Item>,
{
    Checker::default().contains_at_least(expected_object, found, relation)
}

/// See [`Checker::unique_elements`].
pub fn unique_elements<C>(collection: &C) -> CheckResult<()>
where
    C: Container + ?Sized,
    C::Item: PartialEq + Debug,
{
    Checker::default().unique_elements(collection)
}

/// See [`Checker::contains`].
pub fn contains<C>(expected_item: &C::Item, found: &C) -> CheckResult<()>
where
    C: Container + ?Sized,
    C::Item: PartialEq + Debug,
{
    Checker::default().contains(expected_item, found)
}

/// See [`Checker::has_size`].
pub fn has_size<C>(size: usize, collection: &C) -> CheckResult<()>
where
    C: Container + ?Sized,
{
    Checker::default().has_size(size, collection)
}

/// See [`Checker::not_null_argument`].
pub fn not_null_argument<T: ?Sized>(value: Option<&T>, name: &str) -> CheckResult<()> {
    Checker::default().not_null_argument(value, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_shorthands_use_strict_default() {
        assert!(same_size(&[1, 2], &[3, 4]).is_ok());
        assert!(contains_exact(&[1, 2], &[2, 1]).is_ok());
        assert!(same_order(&[1, 2], &[2, 1]).is_err());
        assert!(unique_elements(&["a", "b"]).is_ok());
        assert!(contains(&2, &[1, 2]).is_ok());
        assert!(has_size(0, &Vec::<()>::new()).is_ok());

        let error = not_null_argument(None::<&u8>, "input").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NullArgument);
    }

    #[test]
    fn test_relation_shorthands() {
        let relation = |a: &u8, b: &char| char::from(b'a' + *a) == *b;
        assert!(contains_exact_by(&[0, 1], &['b', 'a'], relation).is_ok());
        assert!(same_order_by(&[0, 1], &['a', 'b'], relation).is_ok());
        assert!(contains_at_least(&2u8, &['a', 'c'], relation).is_ok());
    }
}
