//! Error handling module for the wormt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the wormt CLI application.
#[derive(Error, Debug)]
pub enum WormtError {
    /// Error when the configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when a configuration file cannot be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The scanned sources produced lexical diagnostics.
    ///
    /// The diagnostics themselves have already been printed.
    #[error("{0} diagnostic(s) reported")]
    DiagnosticsReported(usize),
}

impl WormtError {
    /// Process exit status for this error.
    ///
    /// Lexical diagnostics exit with 1, every other failure with 2.
    pub fn exit_code(&self) -> u8 {
        match self {
            WormtError::DiagnosticsReported(_) => 1,
            _ => 2,
        }
    }
}

/// Result type alias using WormtError.
pub type Result<T> = std::result::Result<T, WormtError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = WormtError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_validation_error_display() {
        let err = WormtError::Validation("invalid extension".to_string());
        assert_eq!(err.to_string(), "Validation error: invalid extension");
    }

    #[test]
    fn test_diagnostics_reported_display() {
        assert_eq!(
            WormtError::DiagnosticsReported(3).to_string(),
            "3 diagnostic(s) reported"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(WormtError::DiagnosticsReported(1).exit_code(), 1);
        assert_eq!(WormtError::Validation(String::new()).exit_code(), 2);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: WormtError = io_err.into();
        assert!(matches!(err, WormtError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("jobs = ").unwrap_err();
        let err: WormtError = toml_err.into();
        assert!(matches!(err, WormtError::Toml(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: WormtError = json_err.into();
        assert!(matches!(err, WormtError::Json(_)));
    }
}
