//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for PetMatch
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum PetMatchError {
    /// Missing or invalid configuration, e.g. absent API credentials.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Non-2xx response or transport failure from the upstream directory.
    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PetMatchError {
    /// Stable label suitable for structured logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Upstream(_) => "upstream",
            Self::NotFound(_) => "not_found",
            Self::InvalidInput(_) => "invalid_input",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for PetMatch operations
pub type Result<T> = std::result::Result<T, PetMatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let err = PetMatchError::Upstream("HTTP 500".to_string());
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["type"], "Upstream");
        assert_eq!(json["message"], "HTTP 500");
    }

    #[test]
    fn display_includes_category() {
        let err = PetMatchError::Config("API key missing".to_string());
        assert_eq!(err.to_string(), "Configuration error: API key missing");
        assert_eq!(err.label(), "config");
    }
}
