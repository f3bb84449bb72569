//! Collection comparison checks
//!
//! Every operation compares containers through [`Container`]. The `_by`
//! variants take an [`Equivalence`] and never fall back to the elements' own
//! `==`. Matching is a plain nested scan: containers are expected to be small.

use std::fmt::Debug;

use crate::checker::Checker;
use crate::container::{Container, Listing, OrderedContainer, SetContainer};
use crate::equivalence::{Equivalence, Native};
use crate::error::{CheckError, CheckResult, RelationError};

/// First pair of positions `i < k` whose elements relate.
pub(crate) struct Duplicate<'a, T: ?Sized> {
    pub(crate) first: usize,
    pub(crate) first_element: &'a T,
    pub(crate) second: usize,
    pub(crate) second_element: &'a T,
}

/// Scans a snapshot of `collection` for the first related pair.
pub(crate) fn first_duplicate<'a, C, R>(
    collection: &'a C,
    relation: &R,
) -> Result<Option<Duplicate<'a, C::Item>>, RelationError>
where
    C: Container + ?Sized,
    R: Equivalence<C::Item> + ?Sized,
{
    let elements: Vec<&C::Item> = collection.elements().collect();
    for (i, &first) in elements.iter().enumerate() {
        for (k, &second) in elements.iter().enumerate().skip(i + 1) {
            if relation.equals(first, second)? {
                return Ok(Some(Duplicate {
                    first: i,
                    first_element: first,
                    second: k,
                    second_element: second,
                }));
            }
        }
    }
    Ok(None)
}

fn duplicate_cause<C>(duplicate: &Duplicate<'_, C::Item>, collection: &C) -> String
where
    C: Container + ?Sized,
    C::Item: Debug,
{
    format!(
        "has non-unique elements - two (or more) elements are equal with respect to the \
         equivalence relation - equal element[{}]: {:?}, equal element[{}]: {:?}, collection={}",
        duplicate.first,
        duplicate.first_element,
        duplicate.second,
        duplicate.second_element,
        Listing(collection)
    )
}

impl Checker {
    // ========================================================================
    // SIZE
    // ========================================================================

    /// Passes iff both containers have the same number of elements.
    pub fn same_size<A, B>(&self, expected: &A, found: &B) -> CheckResult<()>
    where
        A: Container + ?Sized,
        B: Container + ?Sized,
        A::Item: Debug,
        B::Item: Debug,
    {
        if expected.size() != found.size() {
            return Err(self.fail_compare(
                format_args!(
                    "[Assertion failed] - collections do not have the same size - \
                     expected collection={} found collection={}",
                    Listing(expected),
                    Listing(found)
                ),
                expected.size(),
                found.size(),
            ));
        }
        Ok(())
    }

    /// Passes iff `collection` has no elements.
    pub fn is_empty<C>(&self, collection: &C) -> CheckResult<()>
    where
        C: Container + ?Sized,
    {
        if collection.size() != 0 {
            return Err(self.fail_compare(
                "[Assertion failed] - no elements expected",
                0,
                collection.size(),
            ));
        }
        Ok(())
    }

    /// Passes iff `collection` has exactly `size` elements.
    pub fn has_size<C>(&self, size: usize, collection: &C) -> CheckResult<()>
    where
        C: Container + ?Sized,
    {
        if collection.size() != size {
            return Err(self.fail_compare(
                "[Assertion failed] - collection has wrong size",
                size,
                collection.size(),
            ));
        }
        Ok(())
    }

    /// Passes iff `collection` has at least `min` elements.
    pub fn has_size_at_least<C>(&self, min: usize, collection: &C) -> CheckResult<()>
    where
        C: Container + ?Sized,
    {
        if collection.size() < min {
            return Err(self.fail_compare(
                "[Assertion failed] - collection does not have the minimal size",
                min,
                collection.size(),
            ));
        }
        Ok(())
    }

    // ========================================================================
    // EXACT CONTENT
    // ========================================================================

    /// Passes iff both containers have the same size and every expected
    /// element is held by `found`.
    ///
    /// This is set containment with equal cardinality, not multiset equality:
    ///
    /// ```
    /// use attest_check::Checker;
    ///
    /// let checker = Checker::default();
    /// assert!(checker.contains_exact(&vec![3, 2, 1], &vec![1, 2, 3]).is_ok());
    /// assert!(checker.contains_exact(&vec![1, 1, 2], &vec![1, 2, 2]).is_ok());
    /// assert!(checker.contains_exact(&vec![1, 2, 3], &vec![1, 2, 4]).is_err());
    /// ```
    pub fn contains_exact<A, B>(&self, expected: &A, found: &B) -> CheckResult<()>
    where
        A: Container + ?Sized,
        B: Container<Item = A::Item> + ?Sized,
        A::Item: PartialEq + Debug,
    {
        self.same_size(expected, found)?;
        for item in expected.elements() {
            if !found.holds(item) {
                return Err(self.fail_compare(
                    format_args!(
                        "[Assertion failed] - collection {} does not contain {item:?}",
                        Listing(found)
                    ),
                    Listing(expected),
                    Listing(found),
                ));
            }
        }
        Ok(())
    }

    /// Passes iff `found` holds exactly one element and it equals
    /// `expected_item`.
    pub fn contains_exact_item<C>(&self, expected_item: &C::Item, found: &C) -> CheckResult<()>
    where
        C: Container + ?Sized,
        C::Item: PartialEq + Debug,
    {
        if found.size() != 1 {
            return Err(self.fail_compare(
                "[Assertion failed] - collection does not have exactly one item",
                format_args!("{expected_item:?}"),
                Listing(found),
            ));
        }
        if !found.holds(expected_item) {
            return Err(self.fail_compare(
                "[Assertion failed] - collection does not contain expected element",
                format_args!("{expected_item:?}"),
                Listing(found),
            ));
        }
        Ok(())
    }

    /// Passes iff both containers have the same size and every expected
    /// element relates to some found element.
    ///
    /// The first matching found element wins and is not consumed, so one
    /// found element may satisfy several expected ones.
    pub fn contains_exact_by<A, B, R>(
        &self,
        expected: &A,
        found: &B,
        relation: R,
    ) -> CheckResult<()>
    where
        A: Container + ?Sized,
        B: Container + ?Sized,
        A::Item: Debug,
        B::Item: Debug,
        R: Equivalence<A::Item, B::Item>,
    {
        self.same_size(expected, found)?;
        for item in expected.elements() {
            if !any_relates(item, found, &relation)? {
                return Err(self.fail_compare(
                    format_args!(
                        "[Assertion failed] - collections do not contain equal elements - \
                         first element not found={item:?}"
                    ),
                    Listing(expected),
                    Listing(found),
                ));
            }
        }
        Ok(())
    }

    /// Passes iff `found` holds exactly one element and it relates to
    /// `expected_object`.
    pub fn contains_exact_item_by<T, C, R>(
        &self,
        expected_object: &T,
        found: &C,
        relation: R,
    ) -> CheckResult<()>
    where
        T: Debug + ?Sized,
        C: Container + ?Sized,
        C::Item: Debug,
        R: Equivalence<T, C::Item>,
    {
        self.has_size(1, found)?;
        let matches = match found.elements().next() {
            Some(only) => relation.equals(expected_object, only)?,
            None => false,
        };
        if !matches {
            return Err(self.fail_compare(
                "[Assertion failed] - collection does not contain expected (one) element",
                format_args!("{expected_object:?}"),
                Listing(found),
            ));
        }
        Ok(())
    }

    // ========================================================================
    // ORDER
    // ========================================================================

    /// Passes iff both sequences have the same size and equal elements at
    /// every position.
    ///
    /// Only [`OrderedContainer`]s qualify; a `BTreeSet` is compared in its
    /// sorted order.
    pub fn same_order<A, B>(&self, expected: &A, found: &B) -> CheckResult<()>
    where
        A: OrderedContainer + ?Sized,
        B: OrderedContainer + ?Sized,
        A::Item: PartialEq<B::Item> + Debug,
        B::Item: Debug,
    {
        self.same_order_by(expected, found, Native)
    }

    /// Passes iff both sequences have the same size and related elements at
    /// every position.
    ///
    /// A relation failure at position `i` is reported as an
    /// [`ArgumentViolation`](CheckError::ArgumentViolation) whose source is
    /// the relation error.
    pub fn same_order_by<A, B, R>(&self, expected: &A, found: &B, relation: R) -> CheckResult<()>
    where
        A: OrderedContainer + ?Sized,
        B: OrderedContainer + ?Sized,
        A::Item: Debug,
        B::Item: Debug,
        R: Equivalence<A::Item, B::Item>,
    {
        self.same_size(expected, found)?;
        for (index, (first, second)) in expected.elements().zip(found.elements()).enumerate() {
            let equal = relation.equals(first, second).map_err(|source| {
                CheckError::argument_caused_by(
                    format!(
                        "[Exception while assertion check] - the elements do not have the same \
                         order (first difference at index {index} (expected={first:?} \
                         found={second:?})) - expected list {} found list {}",
                        Listing(expected),
                        Listing(found)
                    ),
                    source,
                )
            })?;
            if !equal {
                return Err(self.fail_compare(
                    format_args!(
                        "[Assertion failed] - the elements do not have the same order - first \
                         difference at index {index} - expected element={first:?}, found \
                         element={second:?}"
                    ),
                    Listing(expected),
                    Listing(found),
                ));
            }
        }
        Ok(())
    }

    // ========================================================================
    // AT LEAST
    // ========================================================================

    /// Passes iff some element of `found` relates to `expected_object`.
    pub fn contains_at_least<T, C, R>(
        &self,
        expected_object: &T,
        found: &C,
        relation: R,
    ) -> CheckResult<()>
    where
        T: Debug + ?Sized,
        C: Container + ?Sized,
        C::Item: Debug,
        R: Equivalence<T, C::Item>,
    {
        self.at_least(expected_object, found, &relation)
    }

    /// Runs [`contains_at_least`](Self::contains_at_least) for every expected
    /// element and stops at the first one without a match.
    pub fn contains_at_least_each<A, B, R>(
        &self,
        expected: &A,
        found: &B,
        relation: R,
    ) -> CheckResult<()>
    where
        A: Container + ?Sized,
        B: Container + ?Sized,
        A::Item: Debug,
        B::Item: Debug,
        R: Equivalence<A::Item, B::Item>,
    {
        for item in expected.elements() {
            self.at_least(item, found, &relation)?;
        }
        Ok(())
    }

    fn at_least<T, C, R>(&self, expected_object: &T, found: &C, relation: &R) -> CheckResult<()>
    where
        T: Debug + ?Sized,
        C: Container + ?Sized,
        C::Item: Debug,
        R: Equivalence<T, C::Item> + ?Sized,
    {
        if any_relates(expected_object, found, relation)? {
            return Ok(());
        }
        Err(self.fail_compare(
            "[Assertion failed] - expected object not found in collection",
            format_args!("{expected_object:?}"),
            Listing(found),
        ))
    }

    // ========================================================================
    // UNIQUENESS
    // ========================================================================

    /// Passes iff no two elements are equal.
    ///
    /// ```
    /// use attest_check::Checker;
    ///
    /// let error = Checker::default().unique_elements(&vec![1, 2, 3, 1]).unwrap_err();
    /// assert!(error.to_string().contains("element[0]: 1, equal element[3]: 1"));
    /// ```
    pub fn unique_elements<C>(&self, collection: &C) -> CheckResult<()>
    where
        C: Container + ?Sized,
        C::Item: PartialEq + Debug,
    {
        self.unique_elements_by(collection, Native)
    }

    /// Passes iff no two elements relate.
    pub fn unique_elements_by<C, R>(&self, collection: &C, relation: R) -> CheckResult<()>
    where
        C: Container + ?Sized,
        C::Item: Debug,
        R: Equivalence<C::Item>,
    {
        if let Some(duplicate) = first_duplicate(collection, &relation)? {
            return Err(self.fail(format_args!(
                "[Assertion failed] - collection {}",
                duplicate_cause(&duplicate, collection)
            )));
        }
        Ok(())
    }

    /// Argument form of [`unique_elements`](Self::unique_elements).
    pub fn unique_elements_argument<C>(&self, collection: &C, name: &str) -> CheckResult<()>
    where
        C: Container + ?Sized,
        C::Item: PartialEq + Debug,
    {
        self.unique_elements_argument_by(collection, Native, name)
    }

    /// Argument form of [`unique_elements_by`](Self::unique_elements_by).
    pub fn unique_elements_argument_by<C, R>(
        &self,
        collection: &C,
        relation: R,
        name: &str,
    ) -> CheckResult<()>
    where
        C: Container + ?Sized,
        C::Item: Debug,
        R: Equivalence<C::Item>,
    {
        if let Some(duplicate) = first_duplicate(collection, &relation)? {
            return self.reject_argument(format!(
                "[Assertion failed] - collection on argument {name} {}",
                duplicate_cause(&duplicate, collection)
            ));
        }
        Ok(())
    }

    // ========================================================================
    // MEMBERSHIP
    // ========================================================================

    /// Passes iff `found` holds `expected_item`.
    pub fn contains<C>(&self, expected_item: &C::Item, found: &C) -> CheckResult<()>
    where
        C: Container + ?Sized,
        C::Item: PartialEq + Debug,
    {
        if !found.holds(expected_item) {
            return Err(self.fail_compare(
                "[Assertion failed] - collection does not contain expected item",
                format_args!("{expected_item:?}"),
                Listing(found),
            ));
        }
        Ok(())
    }

    /// Passes iff `found` holds every element of `expected_items`.
    pub fn contains_all<A, B>(&self, expected_items: &A, found: &B) -> CheckResult<()>
    where
        A: Container + ?Sized,
        B: Container<Item = A::Item> + ?Sized,
        A::Item: PartialEq + Debug,
    {
        for item in expected_items.elements() {
            self.contains(item, found)?;
        }
        Ok(())
    }

    /// Passes iff the set `found` does not hold `not_expected_item`.
    pub fn contains_not<S>(&self, not_expected_item: &S::Item, found: &S) -> CheckResult<()>
    where
        S: SetContainer + ?Sized,
        S::Item: PartialEq + Debug,
    {
        if found.holds(not_expected_item) {
            return Err(self.fail(format_args!(
                "[Assertion failed] - collection {} does contain the not expected item \
                 {not_expected_item:?}",
                Listing(found)
            )));
        }
        Ok(())
    }
}

fn any_relates<T, C, R>(item: &T, found: &C, relation: &R) -> CheckResult<bool>
where
    T: ?Sized,
    C: Container + ?Sized,
    R: Equivalence<T, C::Item> + ?Sized,
{
    for candidate in found.elements() {
        if relation.equals(item, candidate)? {
            return Ok(true);
        }
    }
    Ok(false)
}
