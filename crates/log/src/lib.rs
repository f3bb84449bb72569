//! # attest-log
//!
//! `tracing-subscriber` setup for attest binaries and tests. The check crate
//! only emits `tracing` events; this crate decides where they go.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> attest_log::LogResult<()> {
//!     // ATTEST_LOG / RUST_LOG win, otherwise a debug or release preset
//!     let _guard = attest_log::auto_init()?;
//!
//!     tracing::info!(port = 8080, "Server starting");
//!     Ok(())
//! }
//! ```
//!
//! ## Capturing output
//!
//! ```
//! let (_guard, logs) = attest_log::capture("info").unwrap();
//! tracing::info!("visible");
//! assert!(logs.contents().contains("visible"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod writer;

// Public API
pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{
    Config, DisplayConfig, FORMAT_ENV, Format, LEVEL_ENV, RUST_LOG_ENV, WriterConfig,
};
pub use error::{LogError, LogResult};
pub use writer::{CapturedLogs, CapturedWriter};

// ============================================================================
// Initialization Functions
// ============================================================================

/// Auto-detect and initialize the best logging configuration
pub fn auto_init() -> LogResult<LoggerGuard> {
    if std::env::var_os(LEVEL_ENV).is_some() || std::env::var_os(RUST_LOG_ENV).is_some() {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Initialize with default configuration
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::default())
}

/// Initialize with custom configuration
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}

/// Initialize for tests (output captured by the test harness)
///
/// Safe to call from every test: if a global subscriber already exists a
/// no-op guard is returned.
pub fn init_test() -> LogResult<LoggerGuard> {
    if tracing::dispatcher::has_been_set() {
        return Ok(LoggerGuard::noop());
    }
    match init_with(Config::test()) {
        Err(LogError::AlreadyInitialized(_)) => Ok(LoggerGuard::noop()),
        other => other,
    }
}

/// Install a thread-local logger that writes into memory
///
/// `filter` is an `EnvFilter` directive such as `"attest::check=warn"`.
/// Output uses the compact format without timestamps or colors.
pub fn capture(filter: &str) -> LogResult<(LoggerGuard, CapturedLogs)> {
    let logs = CapturedLogs::new();
    let config = Config {
        level: filter.to_string(),
        format: Format::Compact,
        writer: WriterConfig::Stderr,
        display: DisplayConfig {
            time: false,
            colors: false,
            source: false,
            ..DisplayConfig::default()
        },
    };
    let guard = LoggerBuilder::from_config(config)
        .capture_into(logs.clone())
        .build_scoped()?;
    Ok((guard, logs))
}
