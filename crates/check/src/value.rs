//! Assertions on single values and strings

use std::fmt::Debug;

use crate::checker::Checker;
use crate::error::CheckResult;

impl Checker {
    /// Passes iff `s` is empty.
    pub fn is_empty_str(&self, s: &str) -> CheckResult<()> {
        if !s.is_empty() {
            return Err(self.fail_compare("[Assertion failed] - empty string expected", "", s));
        }
        Ok(())
    }

    /// Passes iff the two values differ.
    pub fn not_equals<T, K>(&self, first: &T, second: &K) -> CheckResult<()>
    where
        T: PartialEq<K> + Debug + ?Sized,
        K: Debug + ?Sized,
    {
        if first == second {
            return Err(self.fail(format_args!(
                "[Assertion failed] - both objects are equal but should not be - {first:?}"
            )));
        }
        Ok(())
    }

    /// Passes iff the strings are equal once every space character is removed.
    ///
    /// Only `' '` is removed; tabs and newlines are compared as they are.
    ///
    /// ```
    /// use attest_check::Checker;
    ///
    /// let checker = Checker::default();
    /// assert!(checker.equals_without_whitespace("a b c", "abc").is_ok());
    /// assert!(checker.equals_without_whitespace("a\tb", "ab").is_err());
    /// ```
    pub fn equals_without_whitespace(&self, expected: &str, found: &str) -> CheckResult<()> {
        let expected = expected.replace(' ', "");
        let found = found.replace(' ', "");
        if expected != found {
            return Err(self.fail_compare(
                "[Assertion failed] - strings without spaces are not equal",
                expected,
                found,
            ));
        }
        Ok(())
    }
}
