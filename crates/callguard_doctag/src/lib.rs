//! Comment block normalization, tag extraction, and signature parsing.
//!
//! This crate provides:
//! - [`CommentBlock`] - Normalized line view of a raw doc comment
//! - Tag extraction - description, version tags, internal tags
//! - [`SchemaNode`] / [`Signature`] - The parsed shape of one callable
//! - [`SignatureParser`] - Declaration scanning with recursive nesting

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod comment;
pub mod config;
pub mod parser;
pub mod schema;
pub mod tags;

pub use comment::CommentBlock;
pub use config::ParseConfig;
pub use parser::SignatureParser;
pub use schema::{ContextSet, SchemaNode, Signature};
pub use tags::VersionTags;
