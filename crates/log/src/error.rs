//! Error handling for attest-log

use thiserror::Error;
use tracing_subscriber::util::TryInitError;

/// Result type for logger operations
pub type LogResult<T> = Result<T, LogError>;

/// Error type for logger operations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LogError {
    /// Filter directive could not be parsed
    #[error("Invalid filter '{filter}': {reason}")]
    Filter {
        /// The rejected directive
        filter: String,
        /// Parser message
        reason: String,
    },

    /// A global subscriber is already installed
    #[error("Logger already initialized")]
    AlreadyInitialized(#[from] TryInitError),
}

impl LogError {
    pub(crate) fn filter(filter: impl Into<String>, reason: impl ToString) -> Self {
        Self::Filter {
            filter: filter.into(),
            reason: reason.to_string(),
        }
    }
}
