//! Configuration presets for common scenarios

use super::{Config, DisplayConfig, Format, WriterConfig};

/// Filter directive variable, takes precedence over `RUST_LOG`
pub const LEVEL_ENV: &str = "ATTEST_LOG";

/// Fallback filter directive variable
pub const RUST_LOG_ENV: &str = "RUST_LOG";

/// Output format variable (`pretty`, `compact` or `json`)
pub const FORMAT_ENV: &str = "ATTEST_LOG_FORMAT";

impl Config {
    /// Create configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from variables resolved through `lookup`
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup(LEVEL_ENV).or_else(|| lookup(RUST_LOG_ENV)) {
            config.level = level;
        }

        if let Some(format) = lookup(FORMAT_ENV) {
            config.format = match format.to_lowercase().as_str() {
                "pretty" => Format::Pretty,
                "json" => Format::Json,
                _ => Format::Compact,
            };
        }

        config.display.apply_vars(&lookup);

        config
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            display: DisplayConfig {
                colors: true,
                source: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                source: false,
                flatten: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Test configuration (trace level, output captured by the test harness)
    #[must_use]
    pub fn test() -> Self {
        Self {
            level: "trace".to_string(),
            format: Format::Compact,
            writer: WriterConfig::Test,
            display: DisplayConfig {
                colors: false,
                time: false,
                ..DisplayConfig::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_lookup_prefers_attest_log() {
        let config = Config::from_lookup(|key| match key {
            LEVEL_ENV => Some("debug".to_string()),
            RUST_LOG_ENV => Some("warn".to_string()),
            _ => None,
        });
        assert_eq!(config.level, "debug");
    }

    #[test]
    fn test_from_lookup_falls_back_to_rust_log() {
        let config = Config::from_lookup(|key| (key == RUST_LOG_ENV).then(|| "warn".to_string()));
        assert_eq!(config.level, "warn");
        assert_eq!(config.format, Format::Compact);
    }

    #[test]
    fn test_from_lookup_format_and_display() {
        let config = Config::from_lookup(|key| match key {
            FORMAT_ENV => Some("JSON".to_string()),
            "ATTEST_LOG_TIME" => Some("0".to_string()),
            "ATTEST_LOG_COLORS" => Some("true".to_string()),
            _ => None,
        });
        assert_eq!(config.format, Format::Json);
        assert!(!config.display.time);
        assert!(config.display.colors);
    }

    #[test]
    fn test_presets() {
        assert_eq!(Config::development().format, Format::Pretty);
        assert_eq!(Config::production().format, Format::Json);
        assert!(!Config::production().display.colors);
        assert_eq!(Config::test().writer, WriterConfig::Test);
        assert_eq!(Config::test().level, "trace");
    }

    #[test]
    fn test_serde_defaults() {
        let config: Config = serde_json::from_str(r#"{"format":"json","writer":{"type":"stdout"}}"#).unwrap();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, Format::Json);
        assert_eq!(config.writer, WriterConfig::Stdout);
    }
}
