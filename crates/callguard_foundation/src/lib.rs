//! Core types, values, and errors for Callguard.
//!
//! This crate provides:
//! - [`Value`] - The dynamic value type flowing through validation
//! - [`ParamType`] - The closed set of declarable parameter types
//! - [`Rule`] - The closed set of declarable validation rules
//! - [`Verdict`] - The pass/fail outcome of a validation check
//! - [`Error`] - Rich error types for guarded calls

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod types;
pub mod value;
pub mod verdict;

pub use error::{Error, ErrorKind};
pub use types::{ParamType, Rule};
pub use value::{NativeFn, Value, ValueMap};
pub use verdict::Verdict;

/// Convenience result type for Callguard operations.
pub type Result<T> = std::result::Result<T, Error>;
