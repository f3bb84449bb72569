//! Counting checks over a fixed pair plus a tail of values

use std::fmt::Debug;

use crate::checker::Checker;
use crate::error::CheckResult;

/// A value that may be absent.
///
/// Implemented for `Option<T>`, so values of different types can be counted
/// together as `&dyn Presence`.
pub trait Presence: Debug {
    /// Returns true when a value is present.
    fn is_present(&self) -> bool;
}

impl<T: Debug> Presence for Option<T> {
    #[inline]
    fn is_present(&self) -> bool {
        self.is_some()
    }
}

fn count_present(first: &dyn Presence, second: &dyn Presence, rest: &[&dyn Presence]) -> usize {
    [first, second]
        .into_iter()
        .chain(rest.iter().copied())
        .filter(|value| value.is_present())
        .count()
}

impl Checker {
    /// Passes iff exactly one of the flags is true.
    ///
    /// ```
    /// use attest_check::Checker;
    ///
    /// let checker = Checker::default();
    /// assert!(checker.contains_exact_one_true(false, true, &[false, false]).is_ok());
    /// assert!(checker.contains_exact_one_true(true, true, &[]).is_err());
    /// ```
    pub fn contains_exact_one_true(
        &self,
        first: bool,
        second: bool,
        rest: &[bool],
    ) -> CheckResult<()> {
        let count = [first, second]
            .iter()
            .chain(rest)
            .filter(|value| **value)
            .count();
        if count != 1 {
            return Err(self.fail(format_args!(
                "[Assertion failed] - the booleans {first}, {second}, {rest:?} do not contain \
                 exactly one true value - {count} true values found"
            )));
        }
        Ok(())
    }

    /// Passes iff exactly one of the values is present.
    pub fn contains_exact_one_not_null(
        &self,
        first: &dyn Presence,
        second: &dyn Presence,
        rest: &[&dyn Presence],
    ) -> CheckResult<()> {
        let count = count_present(first, second, rest);
        if count != 1 {
            return Err(self.fail(format_args!(
                "[Assertion failed] - the values {first:?}, {second:?}, {rest:?} do not contain \
                 exactly one present value - {count} present values found"
            )));
        }
        Ok(())
    }

    /// Passes iff at most one of the values is present.
    pub fn contains_zero_or_one_not_null(
        &self,
        first: &dyn Presence,
        second: &dyn Presence,
        rest: &[&dyn Presence],
    ) -> CheckResult<()> {
        let count = count_present(first, second, rest);
        if count > 1 {
            return Err(self.fail(format_args!(
                "[Assertion failed] - the values {first:?}, {second:?}, {rest:?} do not contain \
                 zero or one present value - {count} present values found"
            )));
        }
        Ok(())
    }

    /// Argument check: exactly `expected` of `values` must be present.
    ///
    /// `names` describes the arguments in the failure message.
    pub fn argument_exact_not_null_count(
        &self,
        expected: usize,
        names: &str,
        values: &[&dyn Presence],
    ) -> CheckResult<()> {
        let found = values.iter().filter(|value| value.is_present()).count();
        if found != expected {
            return self.reject_argument(format!(
                "[Assertion failed] - the arguments {names} contain {found} present values, but \
                 {expected} are expected - parameters={values:?}"
            ));
        }
        Ok(())
    }
}
