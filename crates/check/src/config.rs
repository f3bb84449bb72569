//! Check configuration
//!
//! A [`CheckConfig`] decides what happens when an argument check fails:
//! the failure is either returned, or handed to an alternative
//! [`FailureAction`] and swallowed. Constraint violations ignore the
//! configuration and are always returned.
//!
//! The configuration is a plain value injected into a
//! [`Checker`](crate::Checker); there is no process-wide switch.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::CheckError;

/// Environment variable read by [`CheckConfig::from_env`] for the mode.
pub const MODE_ENV: &str = "ATTEST_CHECK_MODE";

/// Environment variable read by [`CheckConfig::from_env`] for the
/// alternative failure action.
pub const FAILURE_ACTION_ENV: &str = "ATTEST_FAILURE_ACTION";

// ============================================================================
// MODE
// ============================================================================

/// Whether argument checks raise their failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckMode {
    /// Argument violations are returned as errors.
    #[default]
    Active,
    /// Argument violations run the alternative action and are swallowed.
    Inactive,
}

impl fmt::Display for CheckMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
        }
    }
}

impl FromStr for CheckMode {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(ParseConfigError::new("mode", s)),
        }
    }
}

// ============================================================================
// FAILURE ACTION
// ============================================================================

/// What to do with an argument violation in [`CheckMode::Inactive`].
///
/// Kept for callers migrating from the process-wide toggle; new code should
/// leave checks active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureAction {
    /// Drop the failure.
    #[default]
    #[serde(alias = "none")]
    Silent,
    /// Emit a `tracing` warning with target `attest::check`.
    Log,
    /// Print one line to standard output.
    Stdout,
}

impl FailureAction {
    /// Runs the action for a swallowed failure.
    pub fn perform(self, error: &CheckError) {
        match self {
            Self::Silent => {}
            Self::Log => {
                tracing::warn!(
                    target: "attest::check",
                    kind = %error.kind(),
                    "check failure ignored: {error}"
                );
            }
            Self::Stdout => println!("Check failure - message={error}"),
        }
    }
}

impl fmt::Display for FailureAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Silent => write!(f, "silent"),
            Self::Log => write!(f, "log"),
            Self::Stdout => write!(f, "stdout"),
        }
    }
}

impl FromStr for FailureAction {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "silent" | "none" => Ok(Self::Silent),
            "log" => Ok(Self::Log),
            "stdout" => Ok(Self::Stdout),
            _ => Err(ParseConfigError::new("failure action", s)),
        }
    }
}

/// A configuration value could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown check {field} '{value}'")]
pub struct ParseConfigError {
    field: &'static str,
    value: String,
}

impl ParseConfigError {
    fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

// ============================================================================
// CONFIG
// ============================================================================

/// Failure policy injected into a [`Checker`](crate::Checker).
///
/// # Examples
///
/// ```
/// use attest_check::{CheckConfig, CheckMode, FailureAction};
///
/// let config = CheckConfig::lenient(FailureAction::Log);
/// assert_eq!(config.mode, CheckMode::Inactive);
/// assert!(!config.is_active());
/// assert!(CheckConfig::default().is_active());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Whether argument checks raise.
    pub mode: CheckMode,

    /// Action run for swallowed argument violations.
    pub alternative_action: FailureAction,
}

impl CheckConfig {
    /// Active checks, no alternative action.
    #[must_use]
    pub fn strict() -> Self {
        Self::default()
    }

    /// Inactive argument checks that run `action` instead of raising.
    #[must_use]
    pub fn lenient(action: FailureAction) -> Self {
        Self {
            mode: CheckMode::Inactive,
            alternative_action: action,
        }
    }

    /// Reads `ATTEST_CHECK_MODE` and `ATTEST_FAILURE_ACTION`.
    ///
    /// Unset variables keep their defaults. Unknown values are reported with a
    /// warning and ignored.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) but reads values through `lookup`.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = lookup(MODE_ENV) {
            match value.parse() {
                Ok(mode) => config.mode = mode,
                Err(error) => {
                    tracing::warn!(target: "attest::check", %error, "ignoring {MODE_ENV}");
                }
            }
        }

        if let Some(value) = lookup(FAILURE_ACTION_ENV) {
            match value.parse() {
                Ok(action) => config.alternative_action = action,
                Err(error) => {
                    tracing::warn!(
                        target: "attest::check",
                        %error,
                        "ignoring {FAILURE_ACTION_ENV}"
                    );
                }
            }
        }

        config
    }

    /// Sets the mode.
    #[must_use]
    pub fn with_mode(mut self, mode: CheckMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the alternative failure action.
    #[must_use]
    pub fn with_alternative_action(mut self, action: FailureAction) -> Self {
        self.alternative_action = action;
        self
    }

    /// Returns true when argument violations are raised.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.mode == CheckMode::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_is_strict() {
        let config = CheckConfig::default();
        assert_eq!(config, CheckConfig::strict());
        assert_eq!(config.mode, CheckMode::Active);
        assert_eq!(config.alternative_action, FailureAction::Silent);
    }

    #[test]
    fn test_from_lookup() {
        let config = CheckConfig::from_lookup(lookup_in(&[
            (MODE_ENV, "Inactive"),
            (FAILURE_ACTION_ENV, "stdout"),
        ]));
        assert_eq!(config, CheckConfig::lenient(FailureAction::Stdout));
    }

    #[test]
    fn test_from_lookup_ignores_unknown_values() {
        let config = CheckConfig::from_lookup(lookup_in(&[
            (MODE_ENV, "sometimes"),
            (FAILURE_ACTION_ENV, "log"),
        ]));
        assert!(config.is_active());
        assert_eq!(config.alternative_action, FailureAction::Log);
    }

    #[test]
    fn test_from_lookup_empty() {
        assert_eq!(CheckConfig::from_lookup(|_| None), CheckConfig::default());
    }

    #[test]
    fn test_parse_failure_action() {
        assert_eq!("none".parse::<FailureAction>(), Ok(FailureAction::Silent));
        assert_eq!(" LOG ".parse::<FailureAction>(), Ok(FailureAction::Log));
        let error = "syslog".parse::<FailureAction>().unwrap_err();
        assert_eq!(error.to_string(), "unknown check failure action 'syslog'");
    }

    #[test]
    fn test_builder_setters() {
        let config = CheckConfig::strict()
            .with_mode(CheckMode::Inactive)
            .with_alternative_action(FailureAction::Log);
        assert_eq!(config, CheckConfig::lenient(FailureAction::Log));
    }

    #[test]
    fn test_serde_defaults_and_alias() {
        let config: CheckConfig = serde_json::from_str(r#"{"mode":"inactive"}"#).unwrap();
        assert_eq!(config, CheckConfig::lenient(FailureAction::Silent));

        let config: CheckConfig =
            serde_json::from_str(r#"{"alternative_action":"none"}"#).unwrap();
        assert_eq!(config, CheckConfig::default());

        let json = serde_json::to_string(&CheckConfig::lenient(FailureAction::Log)).unwrap();
        assert_eq!(json, r#"{"mode":"inactive","alternative_action":"log"}"#);
    }
}
