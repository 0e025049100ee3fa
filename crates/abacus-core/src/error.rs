//! # Error Types
//!
//! Domain-specific error types for abacus-core.
//!
//! ## Where Errors Can Happen
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Boundaries                                │
//! │                                                                         │
//! │  "7", "×", "CE", "Enter"  ──► input parsing ──► Key ──► Calculator      │
//! │                                    │                       │            │
//! │                              CoreError here           never fails       │
//! │                                                                         │
//! │  The engine itself has no error channel: the display is always a       │
//! │  well-formed number, and division by zero yields Infinity/NaN.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Errors raised while turning untyped input into typed keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Input is not a single decimal digit.
    #[error("Invalid digit: {0}")]
    InvalidDigit(String),

    /// Input is not one of the supported operator symbols.
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    /// Input does not name any calculator key.
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    /// Nothing to parse.
    #[error("No key given")]
    EmptyInput,
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
