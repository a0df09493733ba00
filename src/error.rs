// src/error.rs

//! Unified error handling for the bot.

use thiserror::Error;

/// Result type alias for bot operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Network-level connection failure
    #[error("connection error: {0}")]
    Connection(String),

    /// Any other transport-layer failure
    #[error("request-processing error: {0}")]
    Request(String),

    /// Non-success HTTP status from the API
    #[error("page unavailable: HTTP {0}")]
    HttpStatus(u16),

    /// Response body is not valid JSON
    #[error("JSON could not be formed: {0}")]
    Parse(String),

    /// Response shape violation
    #[error("type mismatch: {0}")]
    Type(String),

    /// Required field absent, or status outside the verdict catalog
    #[error("missing key: {0}")]
    MissingKey(String),

    /// Telegram delivery failure
    #[error("message delivery failed: {0}")]
    Delivery(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a shape-violation error.
    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self::Type(message.into())
    }

    /// Create a missing-key error.
    pub fn missing_key(message: impl Into<String>) -> Self {
        Self::MissingKey(message.into())
    }

    /// Create a delivery error.
    pub fn delivery(message: impl Into<String>) -> Self {
        Self::Delivery(message.into())
    }
}
