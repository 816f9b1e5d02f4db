//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `homesphere.toml` in the working directory. Every field has a
//! default so the file is optional. Environment variables take precedence
//! over file values.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Household identity.
    pub household: HouseholdConfig,
    /// Demo run settings.
    pub demo: DemoConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Household identity.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HouseholdConfig {
    pub id: u32,
    pub address: String,
}

/// Seeded demo household run at startup.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Seed the demo household and run its scene.
    pub enabled: bool,
    /// Scene triggered after seeding.
    pub scene_id: u32,
    /// Width of the energy report window, ending now.
    pub report_hours: f64,
}

impl Config {
    /// Load configuration from `homesphere.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed or
    /// unreadable, or if the resulting values are invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("homesphere.toml")?;
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
        if let Ok(val) = std::env::var("HOMESPHERE_ADDRESS") {
            self.household.address = val;
        }
        if let Ok(val) = std::env::var("HOMESPHERE_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.household.id == 0 {
            return Err(ConfigError::Validation(
                "household id must be non-zero".to_string(),
            ));
        }
        if !self.demo.report_hours.is_finite() || self.demo.report_hours <= 0.0 {
            return Err(ConfigError::Validation(
                "report_hours must be a positive number".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "homesphered=info,homesphere_app=info".to_string(),
        }
    }
}

impl Default for HouseholdConfig {
    fn default() -> Self {
        Self {
            id: 1,
            address: "127 Friendship Road".to_string(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            scene_id: 1,
            report_hours: 24.0,
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
