//! Error types for folio operations.
//!
//! Every user-facing feature in folio has a designed fallback value, so
//! most of these errors are logged and absorbed rather than surfaced.

use thiserror::Error;

/// Result type alias for folio operations.
pub type FolioResult<T> = Result<T, FolioError>;

/// Main error type for all folio operations.
#[derive(Error, Debug)]
pub enum FolioError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Outbound HTTP call failed.
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Response body could not be interpreted.
    #[error("Parse error: {0}")]
    Parse(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FolioError {
    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

impl From<reqwest::Error> for FolioError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_display() {
        let err = FolioError::network("connection refused");
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_configuration_error_display() {
        let err = FolioError::Configuration("FOLIO_PORT must be a number".to_string());
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
