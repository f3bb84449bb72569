//! The check engine
//!
//! [`Checker`] carries the failure policy and an optional message prefix.
//! Comparison operations live in `collection`, argument checks in
//! `argument` and arity checks in `arity`; all of them report through the
//! primitives defined here.

use std::borrow::Cow;
use std::fmt;

use crate::config::CheckConfig;
use crate::error::{CheckError, CheckResult};

/// Runs checks under a [`CheckConfig`].
///
/// A `Checker` is an immutable value; [`describe`](Self::describe) returns a
/// copy with a message prefix for the next failures.
///
/// # Examples
///
/// ```
/// use attest_check::Checker;
///
/// let checker = Checker::default().describe("login form");
/// let error = checker.has_size(2, &vec!["user"]).unwrap_err();
/// assert_eq!(
///     error.to_string(),
///     "login form [Assertion failed] - collection has wrong size expected <2> but was <1>"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checker {
    config: CheckConfig,
    message: Option<Cow<'static, str>>,
}

impl Checker {
    /// Creates a checker with the given policy.
    #[must_use]
    pub fn new(config: CheckConfig) -> Self {
        Self {
            config,
            message: None,
        }
    }

    /// Returns the failure policy.
    #[must_use]
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Returns a copy that prefixes failure messages with `message`.
    #[must_use]
    pub fn describe(&self, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            config: self.config,
            message: Some(message.into()),
        }
    }

    /// Returns the message prefix, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Combines the message prefix with `cause`.
    pub fn format_message(&self, cause: impl fmt::Display) -> String {
        match &self.message {
            Some(message) => format!("{message} {cause}"),
            None => cause.to_string(),
        }
    }

    /// Builds a constraint violation for `cause`.
    pub fn fail(&self, cause: impl fmt::Display) -> CheckError {
        let error = CheckError::constraint(self.format_message(cause));
        tracing::debug!(target: "attest::check", %error, "check failed");
        error
    }

    /// Builds a constraint violation for `cause` reporting both values.
    pub fn fail_compare(
        &self,
        cause: impl fmt::Display,
        expected: impl fmt::Display,
        found: impl fmt::Display,
    ) -> CheckError {
        let error = CheckError::compare(self.format_message(cause), expected, found);
        tracing::debug!(target: "attest::check", %error, "check failed");
        error
    }

    /// Applies the failure policy to an argument violation.
    ///
    /// Active checkers return the error. Inactive ones run the alternative
    /// action and succeed.
    pub(crate) fn reject(&self, error: CheckError) -> CheckResult<()> {
        tracing::debug!(
            target: "attest::check",
            %error,
            mode = %self.config.mode,
            "argument check failed"
        );
        if self.config.is_active() {
            Err(error)
        } else {
            self.config.alternative_action.perform(&error);
            Ok(())
        }
    }

    /// Shorthand for rejecting an [`ArgumentViolation`](CheckError::ArgumentViolation).
    pub(crate) fn reject_argument(&self, message: impl Into<String>) -> CheckResult<()> {
        self.reject(CheckError::argument(message))
    }

    /// Fails when `value` is absent.
    ///
    /// ```
    /// use attest_check::Checker;
    ///
    /// let name: Option<&str> = None;
    /// let error = Checker::default().not_null_argument(name.as_ref(), "name").unwrap_err();
    /// assert_eq!(error.argument_name(), Some("name"));
    /// ```
    pub fn not_null_argument<T: ?Sized>(&self, value: Option<&T>, name: &str) -> CheckResult<()> {
        if value.is_none() {
            return self.reject(CheckError::null_argument(name));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FailureAction;
    use crate::error::ErrorKind;

    #[test]
    fn test_format_message_without_prefix() {
        let checker = Checker::default();
        assert_eq!(checker.message(), None);
        assert_eq!(checker.format_message("cause"), "cause");
    }

    #[test]
    fn test_describe_keeps_config() {
        let checker = Checker::new(CheckConfig::lenient(FailureAction::Log)).describe("ctx");
        assert_eq!(checker.message(), Some("ctx"));
        assert!(!checker.config().is_active());
        assert_eq!(checker.format_message("cause"), "ctx cause");
    }

    #[test]
    fn test_fail_and_fail_compare() {
        let checker = Checker::default().describe(String::from("ctx"));
        let error = checker.fail("broken");
        assert_eq!(error.kind(), ErrorKind::Constraint);
        assert_eq!(error.to_string(), "ctx broken");

        let error = checker.fail_compare("mismatch", 1, 2);
        assert_eq!(error.to_string(), "ctx mismatch expected <1> but was <2>");
    }

    #[test]
    fn test_not_null_argument() {
        let checker = Checker::default();
        assert!(checker.not_null_argument(Some(&1), "value").is_ok());

        let error = checker
            .not_null_argument(None::<&i32>, "value")
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NullArgument);
    }

    #[test]
    fn test_reject_follows_mode() {
        let strict = Checker::default();
        assert!(strict.reject_argument("bad").is_err());

        let lenient = Checker::new(CheckConfig::lenient(FailureAction::Silent));
        assert!(lenient.reject_argument("bad").is_ok());
        assert!(lenient.not_null_argument(None::<&str>, "value").is_ok());
    }

    #[test]
    fn test_checker_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<Checker>();
    }
}
