//! Callguard - Doc-comment driven parameter validation and guarded calls
//!
//! This crate re-exports all layers of the Callguard system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: callguard_engine     — Value validation, guarded calls, registry
//! Layer 1: callguard_doctag     — Comment normalization, tags, signatures
//! Layer 0: callguard_foundation — Core types (Value, ParamType, Verdict, Error)
//! ```

pub use callguard_doctag as doctag;
pub use callguard_engine as engine;
pub use callguard_foundation as foundation;
