//! Error types and handling for the Globetrotter booking wizard

use thiserror::Error;

/// Main error type for the booking wizard
#[derive(Error, Debug)]
pub enum GlobetrotterError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Flight catalog fetch or parse errors
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl GlobetrotterError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new catalog error
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            GlobetrotterError::Config { .. } => {
                "Configuration error. Please check your config file and environment.".to_string()
            }
            GlobetrotterError::Catalog { .. } => {
                "Unable to load available flights. Please check your internet connection."
                    .to_string()
            }
            GlobetrotterError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            GlobetrotterError::Io { .. } => {
                "File operation failed. Please check the path and file permissions.".to_string()
            }
        }
    }
}

impl From<serde_json::Error> for GlobetrotterError {
    fn from(err: serde_json::Error) -> Self {
        GlobetrotterError::catalog(format!("Malformed flight data: {err}"))
    }
}

impl From<reqwest::Error> for GlobetrotterError {
    fn from(err: reqwest::Error) -> Self {
        GlobetrotterError::catalog(format!("Request failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = GlobetrotterError::config("bad delay");
        assert!(matches!(config_err, GlobetrotterError::Config { .. }));

        let catalog_err = GlobetrotterError::catalog("connection failed");
        assert!(matches!(catalog_err, GlobetrotterError::Catalog { .. }));

        let validation_err = GlobetrotterError::validation("unknown class");
        assert!(matches!(validation_err, GlobetrotterError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = GlobetrotterError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let catalog_err = GlobetrotterError::catalog("test");
        assert!(catalog_err.user_message().contains("Unable to load"));

        let validation_err = GlobetrotterError::validation("traveler 7");
        assert!(validation_err.user_message().contains("traveler 7"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GlobetrotterError = io_err.into();
        assert!(matches!(err, GlobetrotterError::Io { .. }));
        assert!(err.user_message().contains("File operation failed"));
    }

    #[test]
    fn test_json_error_becomes_catalog_error() {
        let json_err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let err: GlobetrotterError = json_err.into();
        assert!(matches!(err, GlobetrotterError::Catalog { .. }));
        assert!(err.to_string().contains("Malformed flight data"));
    }
}
