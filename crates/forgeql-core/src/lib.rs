//! Semantic core of the toolchain: assembles parsed SDL into an indexed,
//! immutable [`schema::Schema`], validates executable documents against
//! it, and answers introspection queries by interpreting the schema model.
//!
//! The schema is built once at start-up and shared read-only; documents
//! are parsed and validated per request:
//!
//! ```
//! use forgeql_core::schema::SchemaBuilder;
//! use forgeql_core::Validator;
//!
//! let schema = SchemaBuilder::new()
//!     .load_str("type Query { hello: String }")?
//!     .build()?;
//!
//! let validator = Validator::new(&schema);
//! assert!(validator.validate_source("{ hello }").is_ok());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod document_error;
pub mod introspection;
pub mod schema;
mod validation_error;
mod validator;

pub use document_error::DocumentError;
pub use validation_error::ValidationError;
pub use validator::Validator;

// The parser crate's models appear throughout this crate's API; re-export
// it so downstream crates need only one dependency.
pub use forgeql_parser;

#[cfg(test)]
mod tests;
