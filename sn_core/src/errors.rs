//! # Error Types
//!
//! Structured error types for sn_core. The curve math itself never fails:
//! form values fall back to defaults and correction factors guard their own
//! divisions. Errors only come from strict parsing, serialization, and the
//! chat transport.
//!
//! ## Example
//!
//! ```rust
//! use sn_core::errors::{FatigueError, FatigueResult};
//!
//! fn validate_exponent(b: f64) -> FatigueResult<()> {
//!     if b <= 0.0 {
//!         return Err(FatigueError::InvalidInput {
//!             field: "b".to_string(),
//!             value: b.to_string(),
//!             reason: "Basquin exponent must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for sn_core operations
pub type FatigueResult<T> = Result<T, FatigueError>;

/// Structured error type for fatigue operations.
///
/// Serializes as `{"type": ..., "details": {...}}` so the chat panel and the
/// CLI can hand it to a consumer as JSON.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum FatigueError {
    /// An input value is invalid (out of range, not a number, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The chat request never produced a response (connection, timeout, TLS)
    #[error("Network error: {reason}")]
    ChatRequest { reason: String },

    /// The chat endpoint answered with something that is not JSON
    #[error("Malformed chat response: {reason}")]
    ChatResponse { reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl FatigueError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        FatigueError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a ChatRequest error
    pub fn chat_request(reason: impl Into<String>) -> Self {
        FatigueError::ChatRequest {
            reason: reason.into(),
        }
    }

    /// Create a ChatResponse error
    pub fn chat_response(reason: impl Into<String>) -> Self {
        FatigueError::ChatResponse {
            reason: reason.into(),
        }
    }

    /// Check if this is a recoverable error (user can simply try again)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FatigueError::ChatRequest { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            FatigueError::InvalidInput { .. } => "INVALID_INPUT",
            FatigueError::ChatRequest { .. } => "CHAT_REQUEST",
            FatigueError::ChatResponse { .. } => "CHAT_RESPONSE",
            FatigueError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for FatigueError {
    fn from(err: serde_json::Error) -> Self {
        FatigueError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = FatigueError::invalid_input("n_min", "-5", "Cycle count must be at least 1");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: FatigueError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(FatigueError::chat_request("timeout").error_code(), "CHAT_REQUEST");
        assert_eq!(FatigueError::chat_response("not json").error_code(), "CHAT_RESPONSE");
    }

    #[test]
    fn test_network_error_message() {
        let error = FatigueError::chat_request("connection refused");
        assert_eq!(error.to_string(), "Network error: connection refused");
        assert!(error.is_recoverable());
    }
}
