//! # API Error Type
//!
//! Unified error type for commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Abacus                                 │
//! │                                                                         │
//! │  press_keys(id, "3 + foo")                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Unknown widget id? ───────── ApiError { NOT_FOUND } ─────────────────► │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Unparseable key? ─── CoreError::UnknownKey ── ApiError { INVALID_KEY } │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Engine transition ─── never fails ───────────── CalculatorResponse ──► │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors serialize with a machine-readable `code` and a human-readable
//! `message`, so a web front end can consume them unchanged.

use abacus_core::CoreError;
use serde::Serialize;

/// Error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "INVALID_KEY",
///   "message": "Unknown key: foo"
/// }
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Widget id does not name an open calculator
    NotFound,

    /// Request is malformed (e.g. widget id is not a UUID)
    ValidationError,

    /// Key token could not be parsed
    InvalidKey,

    /// Too many calculators open at once
    SessionLimit,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts key parsing errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError::new(ErrorCode::InvalidKey, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
