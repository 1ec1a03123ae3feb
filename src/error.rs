//! Error types for ESR Core

use thiserror::Error;

/// Main error type for payment slip operations
#[derive(Error, Debug)]
pub enum SlipError {
    /// A field was accessed while the slip variant does not carry it
    #[error("Field is disabled: {0}")]
    DisabledField(&'static str),

    /// Amount cannot be printed on a slip
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Slip configuration could not be parsed
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for SlipError {
    fn from(err: serde_json::Error) -> Self {
        SlipError::ConfigError(err.to_string())
    }
}

/// Result type alias for slip operations
pub type Result<T> = std::result::Result<T, SlipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SlipError::DisabledField("reference number");
        assert_eq!(err.to_string(), "Field is disabled: reference number");

        let err = SlipError::DisabledField("banking customer ID");
        assert!(err.to_string().contains("banking customer ID"));

        let err = SlipError::InvalidAmount("-1.00".to_string());
        assert!(err.to_string().contains("-1.00"));

        let err = SlipError::ConfigError("bad key".to_string());
        assert!(err.to_string().contains("bad key"));
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let slip_err: SlipError = json_err.into();
        match slip_err {
            SlipError::ConfigError(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected ConfigError"),
        }
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        let slip_err: SlipError = io_err.into();
        assert!(matches!(slip_err, SlipError::IoError(_)));
        assert!(slip_err.to_string().contains("missing.json"));
    }
}
