//! # attest-check
//!
//! Argument checks for production code and comparison assertions for tests.
//!
//! ## Quick Start
//!
//! ```
//! use attest_check::prelude::*;
//!
//! let checker = Checker::default();
//!
//! // Preconditions raise argument violations.
//! let error = checker.not_empty_argument("", "username").unwrap_err();
//! assert!(error.is_argument_violation());
//!
//! // Assertions raise constraint violations.
//! let error = checker.same_order(&[1, 2, 3], &[1, 3, 2]).unwrap_err();
//! assert!(error.is_constraint_violation());
//! ```
//!
//! ## Equivalence relations
//!
//! The `_by` comparisons take an [`Equivalence`] between two element types
//! instead of using `==`. Closures, [`Native`], [`by_key`], [`fallible`] and
//! [`flipped`] all qualify:
//!
//! ```
//! use attest_check::{Checker, by_key};
//!
//! #[derive(Debug)]
//! struct User { id: u32, name: &'static str }
//!
//! let expected = [1u32, 2];
//! let found = vec![User { id: 2, name: "bo" }, User { id: 1, name: "al" }];
//! Checker::default()
//!     .contains_exact_by(&expected, &found, |id: &u32, user: &User| *id == user.id)
//!     .unwrap();
//!
//! let users = [User { id: 1, name: "al" }, User { id: 1, name: "al2" }];
//! assert!(Checker::default().unique_elements_by(&users, by_key(|u: &User| u.id)).is_err());
//! ```
//!
//! ## Failure policy
//!
//! A [`Checker`] carries a [`CheckConfig`]. In [`CheckMode::Inactive`],
//! argument violations run the configured [`FailureAction`] and are
//! swallowed; assertion failures are always returned.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod argument;
mod arity;
mod checker;
mod collection;
pub mod config;
pub mod container;
pub mod equivalence;
pub mod error;
pub mod prelude;
mod shorthand;
mod value;

pub use arity::Presence;
pub use checker::Checker;
pub use config::{CheckConfig, CheckMode, FailureAction, ParseConfigError};
pub use container::{Container, Listing, OrderedContainer, SetContainer, listing};
pub use equivalence::{ByKey, Equivalence, Fallible, Flipped, Native, by_key, fallible, flipped};
pub use error::{CheckError, CheckResult, ErrorKind, RelationError};
pub use shorthand::{
    contains, contains_at_least, contains_exact, contains_exact_by, has_size, not_null_argument,
    same_order, same_order_by, same_size, unique_elements,
};
