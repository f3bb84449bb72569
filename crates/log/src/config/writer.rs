//! Writer and display configuration

use serde::{Deserialize, Serialize};

/// Writer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
#[non_exhaustive]
pub enum WriterConfig {
    /// Write to stderr
    #[default]
    Stderr,
    /// Write to stdout
    Stdout,
    /// Write through the test harness so output is captured per test
    Test,
}

/// Display configuration
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show timestamps
    pub time: bool,
    /// Show source location (`file:line`)
    pub source: bool,
    /// Show target module
    pub target: bool,
    /// Show thread IDs
    pub thread_ids: bool,
    /// Show thread names
    pub thread_names: bool,
    /// Use ANSI colors
    pub colors: bool,
    /// Show span list in JSON
    pub span_list: bool,
    /// Flatten JSON events
    pub flatten: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time: true,
            source: cfg!(debug_assertions),
            target: true,
            thread_ids: false,
            thread_names: false,
            colors: std::io::IsTerminal::is_terminal(&std::io::stderr()),
            span_list: true,
            flatten: true,
        }
    }
}

impl DisplayConfig {
    /// Applies `ATTEST_LOG_TIME`, `ATTEST_LOG_SOURCE` and `ATTEST_LOG_COLORS`
    pub(super) fn apply_vars(&mut self, lookup: &impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("ATTEST_LOG_TIME") {
            self.time = enabled(&v);
        }
        if let Some(v) = lookup("ATTEST_LOG_SOURCE") {
            self.source = enabled(&v);
        }
        if let Some(v) = lookup("ATTEST_LOG_COLORS") {
            self.colors = enabled(&v);
        }
    }
}

fn enabled(value: &str) -> bool {
    value != "0" && value != "false"
}
