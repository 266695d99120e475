//! Shared helpers for the parser test modules.

use crate::ExecutableParser;
use crate::Lexer;
use crate::SchemaParser;
use crate::Token;
use crate::TokenTag;
use crate::executable::Document;
use crate::schema::SchemaDocument;
use crate::schema::TypeDefinition;

pub(crate) fn lex_schema(source: &str) -> Vec<Token<'_>> {
    Lexer::schema(source)
        .lex()
        .unwrap_or_else(|err| panic!("lexing failed: {err}"))
}

pub(crate) fn lex_executable(source: &str) -> Vec<Token<'_>> {
    Lexer::executable(source)
        .lex()
        .unwrap_or_else(|err| panic!("lexing failed: {err}"))
}

pub(crate) fn parse_schema(source: &str) -> SchemaDocument {
    SchemaParser::parse(source)
        .unwrap_or_else(|err| panic!("parsing failed: {err}"))
}

pub(crate) fn parse_executable(source: &str) -> Document {
    ExecutableParser::parse(source)
        .unwrap_or_else(|err| panic!("parsing failed: {err}"))
}

/// The tag sequence of a token stream, `Eof` included.
pub(crate) fn tags(tokens: &[Token<'_>]) -> Vec<TokenTag> {
    tokens.iter().map(|t| t.kind.tag()).collect()
}

/// Looks up a type definition in a parsed document by name.
pub(crate) fn type_named<'a>(
    document: &'a SchemaDocument,
    name: &str,
) -> &'a TypeDefinition {
    document
        .types
        .iter()
        .find(|t| t.name == name)
        .unwrap_or_else(|| panic!("no type named `{name}` in document"))
}
