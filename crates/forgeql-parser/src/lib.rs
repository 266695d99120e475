//! Lexer and parsers for GraphQL schema definition (SDL) files and
//! executable documents.
//!
//! One shared, context-sensitive scanner ([`Lexer`]) feeds two
//! recursive-descent parsers: [`SchemaParser`] produces a
//! [`schema::SchemaDocument`] and [`ExecutableParser`] produces an
//! [`executable::Document`]. Semantic assembly (merging documents,
//! indexing, validation) lives downstream in `forgeql-core`.

pub mod executable;
mod executable_parser;
mod lex_error;
mod lexer;
mod lexer_mode;
mod parse_error;
pub mod schema;
mod schema_parser;
mod source_position;
mod token;
mod token_cursor;
mod token_kind;
mod type_ref;
mod value;

pub use executable_parser::ExecutableParser;
pub use lex_error::LexError;
pub use lexer::Lexer;
pub use lexer_mode::LexerMode;
pub use parse_error::ParseError;
pub use parse_error::ParseErrorKind;
pub use parse_error::ParseErrorNotes;
pub use parse_error::SyntaxError;
pub use schema_parser::SchemaParser;
pub use source_position::SourcePosition;
pub use token::Token;
pub use token_kind::TokenKind;
pub use token_kind::TokenTag;
pub use type_ref::TypeRef;
pub use value::Value;

#[cfg(test)]
mod tests;
