//! Prelude module for convenient imports.
//!
//! ```
//! use attest_check::prelude::*;
//!
//! let checker = Checker::new(CheckConfig::strict());
//! assert!(checker.same_order(&[1, 2], &vec![1, 2]).is_ok());
//! ```

// ============================================================================
// ENGINE
// ============================================================================

pub use crate::checker::Checker;
pub use crate::config::{CheckConfig, CheckMode, FailureAction};
pub use crate::error::{CheckError, CheckResult, ErrorKind, RelationError};

// ============================================================================
// RELATIONS AND CONTAINERS
// ============================================================================

pub use crate::arity::Presence;
pub use crate::container::{Container, OrderedContainer, SetContainer};
pub use crate::equivalence::{Equivalence, Native, by_key, fallible, flipped};
