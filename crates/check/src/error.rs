//! Error types for failed checks
//!
//! A failed check produces a [`CheckError`]. The variant tells the audience
//! of the failure apart:
//!
//! - [`CheckError::NullArgument`] and [`CheckError::ArgumentViolation`] come
//!   from defensive argument checks in production code.
//! - [`CheckError::ConstraintViolation`] comes from expected-vs-found
//!   assertions, typically in test code.
//! - [`CheckError::Relation`] carries a failure raised by a caller-supplied
//!   equivalence relation.

use std::fmt;

use thiserror::Error;

/// Error raised by an [`Equivalence`](crate::Equivalence) while it is being
/// evaluated.
pub type RelationError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias used by every check.
pub type CheckResult<T> = Result<T, CheckError>;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Coarse classification of a [`CheckError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required value was absent.
    NullArgument,
    /// A precondition on an argument was broken.
    Argument,
    /// An expected-vs-found assertion failed.
    Constraint,
    /// A caller-supplied relation failed while being evaluated.
    Relation,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullArgument => write!(f, "null_argument"),
            Self::Argument => write!(f, "argument_violation"),
            Self::Constraint => write!(f, "constraint_violation"),
            Self::Relation => write!(f, "relation_failure"),
        }
    }
}

// ============================================================================
// CHECK ERROR
// ============================================================================

/// A failed check.
///
/// # Examples
///
/// ```
/// use attest_check::{CheckError, ErrorKind};
///
/// let error = CheckError::compare("collection has wrong size", 3, 2);
/// assert_eq!(error.kind(), ErrorKind::Constraint);
/// assert_eq!(error.to_string(), "collection has wrong size expected <3> but was <2>");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CheckError {
    /// A required argument was absent.
    #[error("[Assertion failed] - argument {name} must not be null")]
    NullArgument {
        /// Name of the absent argument.
        name: String,
    },

    /// A precondition on an argument was broken.
    #[error("{message}")]
    ArgumentViolation {
        /// Full failure message.
        message: String,
        /// Failure that caused this violation, if any.
        #[source]
        source: Option<RelationError>,
    },

    /// An assertion about expected vs. found state failed.
    #[error("{message}{}", compare_suffix(.expected, .found))]
    ConstraintViolation {
        /// Failure message without the comparison suffix.
        message: String,
        /// Rendered expected value, for comparison failures.
        expected: Option<String>,
        /// Rendered found value, for comparison failures.
        found: Option<String>,
    },

    /// A caller-supplied relation failed.
    #[error("equivalence relation failed: {0}")]
    Relation(#[from] RelationError),
}

fn compare_suffix(expected: &Option<String>, found: &Option<String>) -> String {
    match (expected, found) {
        (None, None) => String::new(),
        (expected, found) => format!(
            " expected <{}> but was <{}>",
            expected.as_deref().unwrap_or("null"),
            found.as_deref().unwrap_or("null")
        ),
    }
}

impl CheckError {
    /// Creates a null-argument error.
    pub fn null_argument(name: impl Into<String>) -> Self {
        Self::NullArgument { name: name.into() }
    }

    /// Creates an argument violation without a cause.
    pub fn argument(message: impl Into<String>) -> Self {
        Self::ArgumentViolation {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an argument violation caused by a relation failure.
    pub fn argument_caused_by(message: impl Into<String>, source: RelationError) -> Self {
        Self::ArgumentViolation {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Creates a constraint violation without comparison values.
    pub fn constraint(message: impl Into<String>) -> Self {
        Self::ConstraintViolation {
            message: message.into(),
            expected: None,
            found: None,
        }
    }

    /// Creates a constraint violation that reports an expected and a found value.
    pub fn compare(
        message: impl Into<String>,
        expected: impl fmt::Display,
        found: impl fmt::Display,
    ) -> Self {
        Self::ConstraintViolation {
            message: message.into(),
            expected: Some(expected.to_string()),
            found: Some(found.to_string()),
        }
    }

    /// Returns the classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NullArgument { .. } => ErrorKind::NullArgument,
            Self::ArgumentViolation { .. } => ErrorKind::Argument,
            Self::ConstraintViolation { .. } => ErrorKind::Constraint,
            Self::Relation(_) => ErrorKind::Relation,
        }
    }

    /// Returns true for argument violations, including null arguments.
    #[must_use]
    pub fn is_argument_violation(&self) -> bool {
        matches!(
            self,
            Self::NullArgument { .. } | Self::ArgumentViolation { .. }
        )
    }

    /// Returns true for failed assertions.
    #[must_use]
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation { .. })
    }

    /// Name of the absent argument, for null-argument errors.
    #[must_use]
    pub fn argument_name(&self) -> Option<&str> {
        match self {
            Self::NullArgument { name } => Some(name),
            _ => None,
        }
    }

    /// Rendered expected value of a comparison failure.
    #[must_use]
    pub fn expected(&self) -> Option<&str> {
        match self {
            Self::ConstraintViolation { expected, .. } => expected.as_deref(),
            _ => None,
        }
    }

    /// Rendered found value of a comparison failure.
    #[must_use]
    pub fn found(&self) -> Option<&str> {
        match self {
            Self::ConstraintViolation { found, .. } => found.as_deref(),
            _ => None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_null_argument() {
        let error = CheckError::null_argument("found");
        assert_eq!(error.kind(), ErrorKind::NullArgument);
        assert!(error.is_argument_violation());
        assert_eq!(error.argument_name(), Some("found"));
        assert_eq!(
            error.to_string(),
            "[Assertion failed] - argument found must not be null"
        );
    }

    #[test]
    fn test_constraint_without_values() {
        let error = CheckError::constraint("both objects are equal");
        assert!(error.is_constraint_violation());
        assert!(!error.is_argument_violation());
        assert_eq!(error.to_string(), "both objects are equal");
        assert_eq!(error.expected(), None);
    }

    #[test]
    fn test_compare_renders_values() {
        let error = CheckError::compare("wrong size", 3, 4);
        assert_eq!(error.expected(), Some("3"));
        assert_eq!(error.found(), Some("4"));
        assert_eq!(error.to_string(), "wrong size expected <3> but was <4>");
    }

    #[test]
    fn test_argument_caused_by_exposes_source() {
        let error = CheckError::argument_caused_by("relation blew up", "boom".into());
        assert_eq!(error.kind(), ErrorKind::Argument);
        let source = error.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("boom"));
    }

    #[test]
    fn test_relation_from_boxed_error() {
        let relation_error: RelationError = "not comparable".into();
        let error = CheckError::from(relation_error);
        assert_eq!(error.kind(), ErrorKind::Relation);
        assert!(error.source().is_some());
        assert_eq!(
            error.to_string(),
            "equivalence relation failed: not comparable"
        );
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ErrorKind::Constraint.to_string(), "constraint_violation");
        assert_eq!(ErrorKind::NullArgument.to_string(), "null_argument");
    }
}
