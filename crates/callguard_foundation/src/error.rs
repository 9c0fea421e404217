//! Error types for guarded calls and schema parsing.
//!
//! Uses `thiserror` for ergonomic error definition.

use thiserror::Error;

/// The main error type for Callguard operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub const fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a context-gate rejection.
    #[must_use]
    pub fn context_rejected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ContextRejected(message.into()))
    }

    /// Creates a parameter-validation rejection.
    #[must_use]
    pub fn parameters_rejected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ParametersRejected(message.into()))
    }

    /// Creates a return-value-validation rejection.
    #[must_use]
    pub fn return_rejected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ReturnRejected(message.into()))
    }

    /// Creates a malformed-schema error for a continuation line.
    #[must_use]
    pub fn malformed_schema(line: usize, text: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedSchema {
            line,
            text: text.into(),
        })
    }

    /// Creates an unknown-callable error.
    #[must_use]
    pub fn unknown_callable(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownCallable(name.into()))
    }

    /// Creates a JSON decode error.
    #[must_use]
    pub fn json_decode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::JsonDecode(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
///
/// The three rejection variants render in the fixed guarded-call abort
/// format so callers see a stable, phase-tagged message.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The caller's context is not in the declared allow-list.
    #[error("Context could not be validated. Details: {0}")]
    ContextRejected(String),

    /// An argument failed validation before invocation.
    #[error("Parameters could not be validated. Details: {0}")]
    ParametersRejected(String),

    /// The invocation result failed validation.
    #[error("Return value could not be validated. Details: {0}")]
    ReturnRejected(String),

    /// A nested schema continuation line did not parse (strict mode only).
    #[error("malformed nested declaration at comment line {line}: {text}")]
    MalformedSchema {
        /// Line number within the normalized comment (1-indexed).
        line: usize,
        /// The offending line text.
        text: String,
    },

    /// No callable is registered under the given name.
    #[error("unknown callable: {0}")]
    UnknownCallable(String),

    /// A value declared as JSON did not decode.
    #[error("invalid JSON: {0}")]
    JsonDecode(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
