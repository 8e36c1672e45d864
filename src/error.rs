//! Error types and handling for `PackSmart`

use thiserror::Error;

/// Main error type for the `PackSmart` application
#[derive(Error, Debug)]
pub enum PackSmartError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl PackSmartError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            PackSmartError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            PackSmartError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            PackSmartError::General { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = PackSmartError::config("bad port");
        assert!(matches!(config_err, PackSmartError::Config { .. }));

        let validation_err = PackSmartError::validation("destination is required");
        assert!(matches!(validation_err, PackSmartError::Validation { .. }));

        let general_err = PackSmartError::general("boom");
        assert!(matches!(general_err, PackSmartError::General { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = PackSmartError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let validation_err = PackSmartError::validation("duration must be at least 1");
        assert_eq!(
            validation_err.user_message(),
            "Invalid input: duration must be at least 1"
        );

        let general_err = PackSmartError::general("plain message");
        assert_eq!(general_err.user_message(), "plain message");
    }
}
