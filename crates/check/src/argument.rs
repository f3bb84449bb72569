//! Argument checks
//!
//! Preconditions for production call sites. Every failure is an
//! [`ArgumentViolation`](crate::CheckError::ArgumentViolation) and goes
//! through the checker's failure policy, so an inactive checker returns
//! `Ok(())` after running its alternative action.
//!
//! Bounds use `!(value >= min)` rather than `value < min` so that an
//! unordered value such as NaN never satisfies them.

use std::any::{Any, type_name};
use std::fmt::{Debug, Display};

use crate::checker::Checker;
use crate::container::{Container, Listing};
use crate::error::CheckResult;

#[allow(clippy::neg_cmp_op_on_partial_ord)]
impl Checker {
    // ========================================================================
    // PRESENCE AND EMPTINESS
    // ========================================================================

    /// Fails when the string argument is empty.
    pub fn not_empty_argument(&self, argument: &str, name: &str) -> CheckResult<()> {
        if argument.is_empty() {
            return self.reject_argument(format!(
                "[Assertion failed] - string argument {name} must have length"
            ));
        }
        Ok(())
    }

    /// Fails when the container argument is empty.
    pub fn not_empty_collection_argument<C>(&self, argument: &C, name: &str) -> CheckResult<()>
    where
        C: Container + ?Sized,
    {
        if argument.size() == 0 {
            return self.reject_argument(format!(
                "[Assertion failed] - collection argument {name} must not be empty"
            ));
        }
        Ok(())
    }

    /// Fails when the container argument has no elements.
    pub fn min_one_element_argument<C>(&self, argument: &C, name: &str) -> CheckResult<()>
    where
        C: Container + ?Sized,
    {
        if argument.size() < 1 {
            return self.reject_argument(format!(
                "[Assertion failed] - argument collection {name} should have one or more \
                 element(s) - but it is empty"
            ));
        }
        Ok(())
    }

    /// Fails when any element of the container argument is absent.
    pub fn not_null_element_argument<C, T>(&self, argument: &C, name: &str) -> CheckResult<()>
    where
        C: Container<Item = Option<T>> + ?Sized,
        T: Debug,
    {
        if argument.elements().any(Option::is_none) {
            return self.reject_argument(format!(
                "[Assertion failed] - collection {name} should not contain a null element, but it \
                 has one or more - {name} = {}",
                Listing(argument)
            ));
        }
        Ok(())
    }

    /// Fails when `value` is true.
    pub fn false_argument(&self, value: bool, name: &str) -> CheckResult<()> {
        if value {
            return self.reject_argument(format!(
                "[Assertion failed] - boolean argument {name} should be false but is true"
            ));
        }
        Ok(())
    }

    // ========================================================================
    // TYPE
    // ========================================================================

    /// Downcasts `argument` to `T`, failing when it holds another type.
    ///
    /// Returns `Ok(None)` when an inactive checker swallowed the failure.
    ///
    /// ```
    /// use std::any::Any;
    /// use attest_check::Checker;
    ///
    /// let value: Box<dyn Any> = Box::new(7u64);
    /// let checker = Checker::default();
    /// assert_eq!(checker.argument_instance_of::<u64>(value.as_ref(), "id").unwrap(), Some(&7));
    /// assert!(checker.argument_instance_of::<String>(value.as_ref(), "id").is_err());
    /// ```
    pub fn argument_instance_of<'a, T: Any>(
        &self,
        argument: &'a dyn Any,
        name: &str,
    ) -> CheckResult<Option<&'a T>> {
        match argument.downcast_ref::<T>() {
            Some(value) => Ok(Some(value)),
            None => {
                self.reject_argument(format!(
                    "[Assertion failed] - type {} expected for argument {name} but got a value \
                     of another type",
                    type_name::<T>()
                ))?;
                Ok(None)
            }
        }
    }

    // ========================================================================
    // SIGN
    // ========================================================================

    /// Fails when `value` equals zero (`T::default()`).
    pub fn not_zero_argument<T>(&self, value: T, name: &str) -> CheckResult<()>
    where
        T: PartialEq + Default + Display,
    {
        if value == T::default() {
            return self.reject_argument(format!(
                "[Assertion failed] - the numeric argument {name} must not be zero but is \
                 {value}"
            ));
        }
        Ok(())
    }

    /// Fails when `value` is zero or negative.
    pub fn not_zero_or_negative_argument<T>(&self, value: T, name: &str) -> CheckResult<()>
    where
        T: PartialOrd + Default + Display,
    {
        if !(value > T::default()) {
            return self.reject_argument(format!(
                "[Assertion failed] - the numeric argument {name} must not be zero or negative \
                 but is {value}"
            ));
        }
        Ok(())
    }

    /// Fails when `value` is negative.
    pub fn not_negative_argument<T>(&self, value: T, name: &str) -> CheckResult<()>
    where
        T: PartialOrd + Default + Display,
    {
        if !(value >= T::default()) {
            return self.reject_argument(format!(
                "[Assertion failed] - the numeric argument {name} must not be negative but is \
                 {value}"
            ));
        }
        Ok(())
    }

    /// Fails when `|value| < epsilon`.
    pub fn not_zero_float_argument(&self, value: f64, epsilon: f64, name: &str) -> CheckResult<()> {
        if value.abs() < epsilon {
            return self.reject_argument(format!(
                "[Assertion failed] - the numeric argument {name} must not be zero (epsilon \
                 {epsilon}) but is {value}"
            ));
        }
        Ok(())
    }

    // ========================================================================
    // BOUNDS
    // ========================================================================

    /// Fails unless `min <= value <= max`.
    ///
    /// ```
    /// use attest_check::Checker;
    ///
    /// let checker = Checker::default();
    /// assert!(checker.argument_between(5, 1, 10, "port").is_ok());
    /// assert!(checker.argument_between(f64::NAN, 0.0, 1.0, "ratio").is_err());
    /// ```
    pub fn argument_between<T>(&self, value: T, min: T, max: T, name: &str) -> CheckResult<()>
    where
        T: PartialOrd + Display,
    {
        self.argument_greater_equals(&min, &value, name)?;
        self.argument_less_equals(&max, &value, name)
    }

    /// Fails unless `value >= min`.
    pub fn argument_greater_equals<T>(&self, min: T, value: T, name: &str) -> CheckResult<()>
    where
        T: PartialOrd + Display,
    {
        if !(value >= min) {
            return self.reject_argument(format!(
                "[Assertion failed] - argument {name} must be greater or equal {min} but is {value}"
            ));
        }
        Ok(())
    }

    /// Fails unless `value <= max`.
    pub fn argument_less_equals<T>(&self, max: T, value: T, name: &str) -> CheckResult<()>
    where
        T: PartialOrd + Display,
    {
        if !(value <= max) {
            return self.reject_argument(format!(
                "[Assertion failed] - argument {name} must be less or equal {max} but is {value}"
            ));
        }
        Ok(())
    }

    // ========================================================================
    // EQUALITY
    // ========================================================================

    /// Fails unless both arguments are equal.
    pub fn equal_arguments<T>(
        &self,
        first: &T,
        second: &T,
        first_name: &str,
        second_name: &str,
    ) -> CheckResult<()>
    where
        T: PartialEq + Debug + ?Sized,
    {
        if first != second {
            return self.reject_argument(format!(
                "[Assertion failed] - the arguments {first_name} and {second_name} are not equal, \
                 the first one is {first:?} the second one is {second:?}"
            ));
        }
        Ok(())
    }

    /// Fails unless `argument` equals `expected`.
    pub fn equals_argument<T>(&self, expected: &T, argument: &T, name: &str) -> CheckResult<()>
    where
        T: PartialEq + Debug + ?Sized,
    {
        if expected != argument {
            return self.reject_argument(format!(
                "[Assertion failed] - argument {name} is not equal to {expected:?}, it was \
                 {argument:?}"
            ));
        }
        Ok(())
    }

    /// Like [`equals_argument`](Self::equals_argument) but passes when the
    /// argument is absent.
    pub fn equals_or_null_argument<T>(
        &self,
        expected: &T,
        argument: Option<&T>,
        name: &str,
    ) -> CheckResult<()>
    where
        T: PartialEq + Debug + ?Sized,
    {
        match argument {
            Some(argument) => self.equals_argument(expected, argument, name),
            None => Ok(()),
        }
    }

    // ========================================================================
    // SIZE
    // ========================================================================

    /// Fails unless both container arguments have the same size.
    pub fn same_size_argument<A, B>(
        &self,
        first: &A,
        second: &B,
        first_name: &str,
        second_name: &str,
    ) -> CheckResult<()>
    where
        A: Container + ?Sized,
        B: Container + ?Sized,
    {
        if first.size() != second.size() {
            return self.reject_argument(format!(
                "[Assertion failed] - collections have different size: {first_name}.size() = {}, \
                 {second_name}.size() = {}",
                first.size(),
                second.size()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CheckConfig, FailureAction};
    use crate::error::ErrorKind;
    use rstest::rstest;

    fn strict() -> Checker {
        Checker::default()
    }

    fn lenient() -> Checker {
        Checker::new(CheckConfig::lenient(FailureAction::Silent))
    }

    #[test]
    fn test_not_empty_argument() {
        assert!(strict().not_empty_argument("x", "name").is_ok());
        let error = strict().not_empty_argument("", "name").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Argument);
        assert_eq!(
            error.to_string(),
            "[Assertion failed] - string argument name must have length"
        );
    }

    #[test]
    fn test_not_empty_collection_argument() {
        assert!(strict().not_empty_collection_argument(&vec!["a"], "tags").is_ok());
        let error = strict()
            .not_empty_collection_argument(&Vec::<&str>::new(), "tags")
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Argument);
        assert_eq!(
            error.to_string(),
            "[Assertion failed] - collection argument tags must not be empty"
        );
        assert!(lenient().not_empty_collection_argument(&[0u8; 0], "tags").is_ok());
    }

    #[test]
    fn test_argument_instance_of() {
        let value: Box<dyn Any> = Box::new(1u128);
        let found = strict().argument_instance_of::<u128>(value.as_ref(), "test1").unwrap();
        assert!(std::ptr::eq(found.unwrap(), value.downcast_ref::<u128>().unwrap()));
    }

    #[test]
    fn test_argument_instance_of_generic_type() {
        let value: Box<dyn Any> = Box::new(Vec::<u128>::new());
        let found = strict()
            .argument_instance_of::<Vec<u128>>(value.as_ref(), "test1")
            .unwrap();
        assert_eq!(found.map(Vec::len), Some(0));
        assert!(strict().argument_instance_of::<Vec<u8>>(value.as_ref(), "test1").is_err());
    }

    #[test]
    fn test_argument_instance_of_wrong_type() {
        let value: Box<dyn Any> = Box::new(());
        let error = strict()
            .argument_instance_of::<Vec<u8>>(value.as_ref(), "test1")
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Argument);
        let message = error.to_string();
        assert!(message.starts_with("[Assertion failed] - type "));
        assert!(message.contains("Vec<u8> expected for argument test1"));

        let swallowed = lenient()
            .argument_instance_of::<Vec<u8>>(value.as_ref(), "test1")
            .unwrap();
        assert_eq!(swallowed, None);
    }

    #[test]
    fn test_min_one_element_argument() {
        assert!(strict().min_one_element_argument(&[0], "items").is_ok());
        assert!(strict().min_one_element_argument(&Vec::<u8>::new(), "items").is_err());
    }

    #[test]
    fn test_not_null_element_argument() {
        assert!(strict().not_null_element_argument(&vec![Some(1), Some(2)], "values").is_ok());
        let error = strict()
            .not_null_element_argument(&vec![Some(1), None], "values")
            .unwrap_err();
        assert!(error.to_string().ends_with("values = [Some(1), None]"));
    }

    #[test]
    fn test_false_argument() {
        assert!(strict().false_argument(false, "flag").is_ok());
        assert!(strict().false_argument(true, "flag").is_err());
    }

    #[rstest]
    #[case(1, true)]
    #[case(0, false)]
    #[case(-1, true)]
    fn test_not_zero_argument(#[case] value: i64, #[case] passes: bool) {
        assert_eq!(strict().not_zero_argument(value, "n").is_ok(), passes);
    }

    #[test]
    fn test_not_zero_argument_message() {
        let error = strict().not_zero_argument(0.0, "rate").unwrap_err();
        assert_eq!(
            error.to_string(),
            "[Assertion failed] - the numeric argument rate must not be zero but is 0"
        );
    }

    #[rstest]
    #[case(1, true)]
    #[case(0, false)]
    #[case(-1, false)]
    fn test_not_zero_or_negative_argument(#[case] value: i32, #[case] passes: bool) {
        assert_eq!(strict().not_zero_or_negative_argument(value, "n").is_ok(), passes);
    }

    #[rstest]
    #[case(0.0, true)]
    #[case(2.5, true)]
    #[case(-0.5, false)]
    #[case(f64::NAN, false)]
    fn test_not_negative_argument(#[case] value: f64, #[case] passes: bool) {
        assert_eq!(strict().not_negative_argument(value, "x").is_ok(), passes);
    }

    #[test]
    fn test_not_zero_float_argument() {
        assert!(strict().not_zero_float_argument(0.1, 0.01, "x").is_ok());
        assert!(strict().not_zero_float_argument(-0.001, 0.01, "x").is_err());
    }

    #[rstest]
    #[case(1, true)]
    #[case(10, true)]
    #[case(0, false)]
    #[case(11, false)]
    fn test_argument_between(#[case] value: i32, #[case] passes: bool) {
        assert_eq!(strict().argument_between(value, 1, 10, "port").is_ok(), passes);
    }

    #[test]
    fn test_bounds_reject_nan() {
        assert!(strict().argument_greater_equals(0.0, f64::NAN, "x").is_err());
        assert!(strict().argument_less_equals(1.0, f64::NAN, "x").is_err());
    }

    #[test]
    fn test_bound_messages() {
        let error = strict().argument_greater_equals(3, 2, "count").unwrap_err();
        assert_eq!(
            error.to_string(),
            "[Assertion failed] - argument count must be greater or equal 3 but is 2"
        );
        let error = strict().argument_less_equals(3, 4, "count").unwrap_err();
        assert!(error.to_string().contains("must be less or equal 3 but is 4"));
    }

    #[test]
    fn test_equality_arguments() {
        assert!(strict().equal_arguments("a", "a", "left", "right").is_ok());
        assert!(strict().equal_arguments(&1, &2, "left", "right").is_err());
        assert!(strict().equals_argument(&None::<i32>, &None, "opt").is_ok());
        assert!(strict().equals_or_null_argument(&3, None, "n").is_ok());
        assert!(strict().equals_or_null_argument(&3, Some(&3), "n").is_ok());
        assert!(strict().equals_or_null_argument(&3, Some(&4), "n").is_err());
    }

    #[test]
    fn test_same_size_argument() {
        assert!(strict().same_size_argument(&[1, 2], &vec!['a', 'b'], "ids", "names").is_ok());
        let error = strict()
            .same_size_argument(&[1], &Vec::<char>::new(), "ids", "names")
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "[Assertion failed] - collections have different size: ids.size() = 1, names.size() = 0"
        );
    }

    #[test]
    fn test_inactive_checker_swallows_argument_violations() {
        let checker = lenient();
        assert!(checker.not_empty_argument("", "name").is_ok());
        assert!(checker.false_argument(true, "flag").is_ok());
        assert!(checker.argument_between(0, 1, 2, "n").is_ok());
        assert!(checker.same_size_argument(&[1], &[1, 2], "a", "b").is_ok());
    }
}
