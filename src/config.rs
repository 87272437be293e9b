//! Configuration management for the Globetrotter booking wizard
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::GlobetrotterError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the booking wizard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobetrotterConfig {
    /// Flight catalog source settings
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Booking flow settings
    #[serde(default)]
    pub booking: BookingConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Flight catalog source settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Address of the JSON flight feed
    #[serde(default = "default_catalog_source_url")]
    pub source_url: String,
    /// Local JSON file read instead of the feed when set
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Request timeout in seconds
    #[serde(default = "default_catalog_timeout")]
    pub timeout_seconds: u32,
}

/// Booking flow settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Simulated confirmation delay in milliseconds
    #[serde(default = "default_confirmation_delay")]
    pub confirmation_delay_ms: u64,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_catalog_source_url() -> String {
    "https://raw.githubusercontent.com/Lstanislao/cities-permalink/main/flights.json".to_string()
}

fn default_catalog_timeout() -> u32 {
    30
}

fn default_confirmation_delay() -> u64 {
    2000
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source_url: default_catalog_source_url(),
            file: None,
            timeout_seconds: default_catalog_timeout(),
        }
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            confirmation_delay_ms: default_confirmation_delay(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl GlobetrotterConfig {
    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // GLOBETROTTER_CATALOG__SOURCE_URL overrides catalog.source_url
        builder = builder.add_source(
            Environment::with_prefix("GLOBETROTTER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: GlobetrotterConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("globetrotter").join("config.toml"))
    }

    /// Apply default values to blank configuration fields
    pub fn apply_defaults(&mut self) {
        if self.catalog.source_url.is_empty() {
            self.catalog.source_url = default_catalog_source_url();
        }
        if self.catalog.timeout_seconds == 0 {
            self.catalog.timeout_seconds = default_catalog_timeout();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.catalog.timeout_seconds > 300 {
            return Err(GlobetrotterError::config(
                "Catalog timeout cannot exceed 300 seconds"
            ).into());
        }

        if self.booking.confirmation_delay_ms > 60_000 {
            return Err(GlobetrotterError::config(
                "Confirmation delay cannot exceed 60000 ms"
            ).into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(GlobetrotterError::config(
                format!("Invalid log level '{}'. Must be one of: {}",
                    self.logging.level,
                    valid_log_levels.join(", ")
                )
            ).into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(GlobetrotterError::config(
                format!("Invalid log format '{}'. Must be one of: {}",
                    self.logging.format,
                    valid_log_formats.join(", ")
                )
            ).into());
        }

        if !self.catalog.source_url.starts_with("http://") && !self.catalog.source_url.starts_with("https://") {
            return Err(GlobetrotterError::config(
                "Catalog source URL must be a valid HTTP or HTTPS URL"
            ).into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = GlobetrotterConfig::default();
        assert!(config.catalog.source_url.ends_with("flights.json"));
        assert_eq!(config.catalog.timeout_seconds, 30);
        assert!(config.catalog.file.is_none());
        assert_eq!(config.booking.confirmation_delay_ms, 2000);
        assert_eq!(config.logging.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = GlobetrotterConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = GlobetrotterConfig::default();
        config.catalog.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout cannot exceed"));

        let mut config = GlobetrotterConfig::default();
        config.booking.confirmation_delay_ms = 120_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_source_url() {
        let mut config = GlobetrotterConfig::default();
        config.catalog.source_url = "ftp://flights".to_string();
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("HTTP or HTTPS"));
    }

    #[test]
    fn test_apply_defaults_fills_blanks() {
        let mut config = GlobetrotterConfig::default();
        config.catalog.source_url.clear();
        config.catalog.timeout_seconds = 0;
        config.logging.format.clear();
        config.apply_defaults();
        assert_eq!(config.catalog.source_url, default_catalog_source_url());
        assert_eq!(config.catalog.timeout_seconds, 30);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[catalog]\nfile = \"flights.json\"\n\n[booking]\nconfirmation_delay_ms = 10\n"
        )
        .unwrap();

        let config = GlobetrotterConfig::load_from_path(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.catalog.file, Some(PathBuf::from("flights.json")));
        assert_eq!(config.booking.confirmation_delay_ms, 10);
        assert_eq!(config.catalog.timeout_seconds, 30);
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = GlobetrotterConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("globetrotter"));
            assert!(path.to_string_lossy().contains("config.toml"));
        }
    }
}
