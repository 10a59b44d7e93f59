//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `domod.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use chrono::NaiveTime;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Layout storage settings.
    pub storage: StorageConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Simulation parameter presets.
    pub simulation: SimulationConfig,
}

/// Layout storage configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the layout JSON documents.
    pub path: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Presets for the simulation parameters of the demo pass.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Whether away mode is active.
    pub away_mode: bool,
    /// Ambient outdoor temperature (°C).
    pub temperature: i32,
    /// Start of the auto-lighting window, `HH:MM` in 24-hour format.
    pub min_lights_time: String,
    /// End of the auto-lighting window, `HH:MM` in 24-hour format.
    pub max_lights_time: String,
}

impl Config {
    /// Load configuration from `domod.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if
    /// the resulting configuration fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("domod.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("DOMOD_DATA_DIR") {
            self.storage.path = val;
        }
        if let Ok(val) = std::env::var("DOMOD_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.path.is_empty() {
            return Err(ConfigError::Validation(
                "storage path must not be empty".to_string(),
            ));
        }
        self.lights_window()?;
        Ok(())
    }

    /// Parse the configured auto-lighting window.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when either bound is not a
    /// valid `HH:MM` time.
    pub fn lights_window(&self) -> Result<(NaiveTime, NaiveTime), ConfigError> {
        let parse = |text: &str| {
            NaiveTime::parse_from_str(text, "%H:%M")
                .map_err(|_| ConfigError::Validation(format!("invalid time of day: {text:?}")))
        };
        Ok((
            parse(&self.simulation.min_lights_time)?,
            parse(&self.simulation.max_lights_time)?,
        ))
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: "layouts".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "domod=info,domo=info".to_string(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            away_mode: false,
            temperature: 20,
            min_lights_time: "18:00".to_string(),
            max_lights_time: "06:00".to_string(),
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
        assert_eq!(config.storage.path, "layouts");
        assert!(!config.simulation.away_mode);
        assert_eq!(config.simulation.temperature, 20);
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.storage.path, "layouts");
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [storage]
            path = '/var/lib/domod'

            [logging]
            filter = 'debug'

            [simulation]
            away_mode = true
            temperature = -5
            min_lights_time = '17:30'
            max_lights_time = '07:00'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.storage.path, "/var/lib/domod");
        assert_eq!(config.logging.filter, "debug");
        assert!(config.simulation.away_mode);
        assert_eq!(config.simulation.temperature, -5);

        let (min, max) = config.lights_window().unwrap();
        assert_eq!(min, NaiveTime::from_hms_opt(17, 30, 0).unwrap());
        assert_eq!(max, NaiveTime::from_hms_opt(7, 0, 0).unwrap());
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [simulation]
            temperature = 12
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.simulation.temperature, 12);
        assert_eq!(config.simulation.min_lights_time, "18:00");
        assert_eq!(config.storage.path, "layouts");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.storage.path, "layouts");
    }

    #[test]
    fn should_reject_empty_storage_path() {
        let mut config = Config::default();
        config.storage.path = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_malformed_lights_time() {
        let mut config = Config::default();
        config.simulation.min_lights_time = "not-a-time".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
