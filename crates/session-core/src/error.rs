//! # Processor Error Types
//!
//! Two layers of error handling:
//!
//! - [`ProcessorError`] is the internal taxonomy raised while validating session
//!   data or talking to the gateway.
//! - [`AdapterError`] is the flat `{error, code, detail}` shape handed back to
//!   the host. Every public processor operation returns it instead of panicking
//!   or leaking a typed error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of a rejected session mutation or missing session field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationKind {
    /// Session data is malformed or carries a forbidden change
    InvalidData,
    /// Operation is not allowed with the given session data
    NotAllowed,
    /// A required argument is missing
    InvalidArgument,
}

impl ValidationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationKind::InvalidData => "INVALID_DATA",
            ValidationKind::NotAllowed => "NOT_ALLOWED",
            ValidationKind::InvalidArgument => "INVALID_ARGUMENT",
        }
    }
}

impl std::fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Internal error type for processor and gateway operations
#[derive(Debug, Error)]
pub enum ProcessorError {
    /// Missing credentials or unsupported API version (fatal at construction)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Required session fields absent or a forbidden mutation attempted
    #[error("{message}")]
    Validation {
        kind: ValidationKind,
        message: String,
    },

    /// Non-2xx response from the gateway
    #[error("Toss Payments API error with status code {status}: {code} {message}")]
    Gateway {
        status: u16,
        code: String,
        message: String,
    },

    /// Network failure, no HTTP response
    #[error("{0}")]
    Transport(String),

    /// Gateway response body could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ProcessorError {
    pub fn validation(kind: ValidationKind, message: impl Into<String>) -> Self {
        ProcessorError::Validation {
            kind,
            message: message.into(),
        }
    }

    /// Code relayed to the host: the validation kind or the gateway's own code
    pub fn code(&self) -> &str {
        match self {
            ProcessorError::Validation { kind, .. } => kind.as_str(),
            ProcessorError::Gateway { code, .. } => code,
            ProcessorError::Configuration(_) => ValidationKind::InvalidArgument.as_str(),
            ProcessorError::Transport(_) | ProcessorError::Serialization(_) => "",
        }
    }

    /// HTTP status reported by the gateway, if the failure came from a response
    pub fn http_status(&self) -> Option<u16> {
        match self {
            ProcessorError::Gateway { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for internal processor operations
pub type ProcessorResult<T> = Result<T, ProcessorError>;

/// Uniform failure shape returned to the host by every processor operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{error}")]
pub struct AdapterError {
    /// Static description of the failing call
    pub error: String,
    /// Validation kind or gateway error code, empty when unknown
    pub code: String,
    /// Underlying cause, newline-joined when errors are chained
    pub detail: String,
}

impl AdapterError {
    /// Wrap an internal error; `detail` is the error's own message.
    pub fn new(message: impl Into<String>, cause: &ProcessorError) -> Self {
        Self {
            error: message.into(),
            code: cause.code().to_string(),
            detail: cause.to_string(),
        }
    }

    /// Wrap an error that already has the adapter shape, keeping its chain in `detail`.
    pub fn chain(message: impl Into<String>, cause: &AdapterError) -> Self {
        Self {
            error: message.into(),
            code: cause.code.clone(),
            detail: format!("{}\n{}", cause.error, cause.detail),
        }
    }

    /// Returns true if the failure came from session validation rather than the gateway
    pub fn is_validation(&self) -> bool {
        matches!(
            self.code.as_str(),
            "INVALID_DATA" | "NOT_ALLOWED" | "INVALID_ARGUMENT"
        )
    }
}

/// Result type for host-facing processor operations
pub type ProcessorOutcome<T> = Result<T, AdapterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_error_display() {
        let err = ProcessorError::Gateway {
            status: 400,
            code: "EXCEED_MAX_AMOUNT".into(),
            message: "too much".into(),
        };
        assert_eq!(
            err.to_string(),
            "Toss Payments API error with status code 400: EXCEED_MAX_AMOUNT too much"
        );
        assert_eq!(err.code(), "EXCEED_MAX_AMOUNT");
        assert_eq!(err.http_status(), Some(400));
    }

    #[test]
    fn test_adapter_error_from_processor_error() {
        let cause = ProcessorError::validation(ValidationKind::NotAllowed, "missing keys");
        let err = AdapterError::new("Error in authorize_payment", &cause);

        assert_eq!(err.error, "Error in authorize_payment");
        assert_eq!(err.code, "NOT_ALLOWED");
        assert_eq!(err.detail, "missing keys");
        assert!(err.is_validation());
    }

    #[test]
    fn test_adapter_error_chain() {
        let inner = AdapterError {
            error: "inner failure".into(),
            code: "INVALID_DATA".into(),
            detail: "root cause".into(),
        };
        let outer = AdapterError::chain("outer failure", &inner);

        assert_eq!(outer.error, "outer failure");
        assert_eq!(outer.code, "INVALID_DATA");
        assert_eq!(outer.detail, "inner failure\nroot cause");
    }

    #[test]
    fn test_transport_error_has_empty_code() {
        let err = AdapterError::new(
            "Error in retrieve_payment",
            &ProcessorError::Transport("connection refused".into()),
        );
        assert_eq!(err.code, "");
        assert_eq!(err.detail, "connection refused");
        assert!(!err.is_validation());
    }
}
