use crate::ValidationError;
use forgeql_parser::SyntaxError;

/// Everything that can go wrong between raw document bytes and a
/// validated document: the lexer or parser rejected the input, or the
/// document does not fit the schema.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
