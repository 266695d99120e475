use crate::SourcePosition;
use crate::TokenKind;

/// A lexed token: a kind (carrying the lexeme for ident-like and literal
/// kinds) plus the position of its first byte.
///
/// The `'src` lifetime ties lexeme text to the source buffer: tokens are
/// views into the input and live only until the corresponding parser
/// finishes.
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind<'src>,
    pub position: SourcePosition,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind<'src>, position: SourcePosition) -> Self {
        Self { kind, position }
    }
}
