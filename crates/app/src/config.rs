//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `itemhub.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::Path;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Change event delivery.
    pub event_bus: EventBusConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Event bus configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EventBusConfig {
    /// Events buffered per subscriber before the slowest one starts lagging.
    pub capacity: usize,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `itemhub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("itemhub.toml")
    }

    /// Same as [`load`](Self::load) with an explicit file path.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load_with(path.as_ref(), |key| std::env::var(key).ok())
    }

    fn load_with(
        path: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_overrides(env);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(val) = env("ITEMHUB_EVENT_BUS_CAPACITY")
            && let Ok(capacity) = val.parse()
        {
            self.event_bus.capacity = capacity;
        }
        if let Some(val) = env("ITEMHUB_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = env("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.event_bus.capacity == 0 {
            return Err(ConfigError::Validation(
                "event bus capacity must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self { capacity: 256 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "itemhub=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.event_bus.capacity, 256);
        assert_eq!(config.logging.filter, "itemhub=info");
    }

    #[test]
    fn should_parse_empty_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.event_bus.capacity, 256);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [event_bus]
            capacity = 1024

            [logging]
            filter = 'itemhub=debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.event_bus.capacity, 1024);
        assert_eq!(config.logging.filter, "itemhub=debug");
    }

    #[test]
    fn should_keep_defaults_for_missing_sections() {
        let config: Config = toml::from_str("[logging]\nfilter = 'warn'").unwrap();
        assert_eq!(config.event_bus.capacity, 256);
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file(Path::new("nonexistent-itemhub.toml")).unwrap();
        assert_eq!(config.event_bus.capacity, 256);
    }

    #[test]
    fn should_reject_zero_capacity() {
        let mut config = Config::default();
        config.event_bus.capacity = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_accept_default_capacity() {
        assert!(Config::default().validate().is_ok());
    }

    fn env<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value).to_string())
        }
    }

    fn write_config(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("itemhub.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn should_load_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "[event_bus]\ncapacity = 32\n\n[logging]\nfilter = 'itemhub=trace'\n",
        );

        let config = Config::load_with(&path, env(&[])).unwrap();

        assert_eq!(config.event_bus.capacity, 32);
        assert_eq!(config.logging.filter, "itemhub=trace");
    }

    #[test]
    fn should_load_defaults_through_public_entry_point_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path().join("missing.toml")).unwrap();
        assert!(config.event_bus.capacity > 0);
    }

    #[test]
    fn should_reject_file_with_zero_capacity() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[event_bus]\ncapacity = 0\n");

        let result = Config::load_with(&path, env(&[]));

        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[event_bus\n");
        assert!(matches!(
            Config::load_with(&path, env(&[])),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn should_report_io_error_when_path_is_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::load_with(dir.path(), env(&[])),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn should_override_capacity_from_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[event_bus]\ncapacity = 32\n");

        let config =
            Config::load_with(&path, env(&[("ITEMHUB_EVENT_BUS_CAPACITY", "512")])).unwrap();

        assert_eq!(config.event_bus.capacity, 512);
    }

    #[test]
    fn should_ignore_unparseable_capacity_from_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[event_bus]\ncapacity = 32\n");

        let config =
            Config::load_with(&path, env(&[("ITEMHUB_EVENT_BUS_CAPACITY", "lots")])).unwrap();

        assert_eq!(config.event_bus.capacity, 32);
    }

    #[test]
    fn should_reject_zero_capacity_from_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "");
        let result = Config::load_with(&path, env(&[("ITEMHUB_EVENT_BUS_CAPACITY", "0")]));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_override_log_filter_from_itemhub_log() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("ITEMHUB_LOG", "itemhub=debug")]));
        assert_eq!(config.logging.filter, "itemhub=debug");
    }

    #[test]
    fn should_prefer_rust_log_over_itemhub_log() {
        let mut config = Config::default();
        config.apply_overrides(env(&[
            ("ITEMHUB_LOG", "itemhub=debug"),
            ("RUST_LOG", "warn"),
        ]));
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
