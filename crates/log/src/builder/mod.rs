//! Logger builder implementation
//!
//! `format` holds the fmt layer macros shared by every output format.

#[macro_use]
mod format;

// External dependencies
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::{Layered, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

// Internal crates
use crate::config::{Config, Format};
use crate::error::{LogError, LogResult};
use crate::writer::{self, CapturedLogs};

type Filtered = Layered<EnvFilter, Registry>;
type FmtLayer = Box<dyn Layer<Filtered> + Send + Sync + 'static>;
type Subscriber = Layered<FmtLayer, Filtered>;

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
    capture: Option<CapturedLogs>,
}

/// Guard that keeps the logger alive
///
/// For scoped loggers the subscriber is uninstalled from the current thread
/// when the guard drops. Global loggers live for the rest of the process.
pub struct LoggerGuard {
    scoped: Option<DefaultGuard>,
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            capture: None,
        }
    }

    /// Send formatted output to `logs` instead of the configured writer
    #[must_use]
    pub fn capture_into(mut self, logs: CapturedLogs) -> Self {
        self.capture = Some(logs);
        self
    }

    /// Build and install the logger as the global default
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already installed
    pub fn build(self) -> LogResult<LoggerGuard> {
        self.subscriber()?.try_init()?;
        Ok(LoggerGuard::noop())
    }

    /// Build and install the logger for the current thread only
    ///
    /// # Errors
    ///
    /// Returns error if the filter string cannot be parsed.
    pub fn build_scoped(self) -> LogResult<LoggerGuard> {
        let guard = self.subscriber()?.set_default();
        Ok(LoggerGuard {
            scoped: Some(guard),
        })
    }

    fn subscriber(self) -> LogResult<Subscriber> {
        let filter = EnvFilter::try_new(&self.config.level)
            .map_err(|e| LogError::filter(&self.config.level, e))?;

        let writer = match self.capture {
            Some(logs) => BoxMakeWriter::new(logs),
            None => writer::make_writer(self.config.writer),
        };

        let display = &self.config.display;
        let fmt_layer: FmtLayer = match self.config.format {
            Format::Pretty => create_fmt_layer!(pretty, display, writer),
            Format::Compact => create_fmt_layer!(compact, display, writer),
            Format::Json => create_json_layer!(display, writer),
        };

        Ok(Registry::default().with(filter).with(fmt_layer))
    }
}

impl std::fmt::Debug for LoggerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerGuard")
            .field("scoped", &self.is_scoped())
            .finish()
    }
}

impl LoggerGuard {
    /// Guard that owns nothing
    #[must_use]
    pub fn noop() -> Self {
        Self { scoped: None }
    }

    /// Returns true if dropping this guard uninstalls a thread-local logger
    #[must_use]
    pub fn is_scoped(&self) -> bool {
        self.scoped.is_some()
    }
}
