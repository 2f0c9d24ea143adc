//! Error types for RDLS template operations

use thiserror::Error;

/// Main error type for RDLS template operations
#[derive(Error, Debug)]
pub enum RdlsError {
    /// Schema parsing errors
    #[error("Failed to parse schema: {message}")]
    ParseError {
        /// Error message
        message: String,
        /// Location in the schema if available
        location: Option<String>,
    },

    /// Schema structure errors
    #[error("Schema validation failed: {message}")]
    SchemaValidationError {
        /// Error message
        message: String,
        /// Schema element that failed
        element: Option<String>,
    },

    /// Reference resolution errors
    #[error("Failed to resolve reference '{reference}': {reason}")]
    RefError {
        /// Reference that failed
        reference: String,
        /// Reason for failure
        reason: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO errors
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Generic errors with context
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for RDLS template operations
pub type Result<T> = std::result::Result<T, RdlsError>;

impl RdlsError {
    /// Create a new parse error
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
            location: None,
        }
    }

    /// Create a new parse error with location
    #[must_use]
    pub fn parse_at(message: impl Into<String>, location: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
            location: Some(location.into()),
        }
    }

    /// Create a new schema validation error
    #[must_use]
    pub fn schema_validation(message: impl Into<String>) -> Self {
        Self::SchemaValidationError {
            message: message.into(),
            element: None,
        }
    }

    /// Create a new schema validation error naming the offending element
    #[must_use]
    pub fn schema_validation_at(message: impl Into<String>, element: impl Into<String>) -> Self {
        Self::SchemaValidationError {
            message: message.into(),
            element: Some(element.into()),
        }
    }

    /// Create a new reference resolution error
    #[must_use]
    pub fn reference(reference: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::RefError {
            reference: reference.into(),
            reason: reason.into(),
        }
    }

    /// Create a new configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// Create a serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError(message.into())
    }

    /// Create a generic error
    #[must_use]
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
            source: None,
        }
    }

    /// Create a generic error with source
    #[must_use]
    pub fn other_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Other {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Implement conversions for common error types
impl From<serde_json::Error> for RdlsError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<serde_yaml::Error> for RdlsError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<anyhow::Error> for RdlsError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other {
            message: err.to_string(),
            source: Some(Box::new(std::io::Error::other(err))),
        }
    }
}
