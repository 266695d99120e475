use crate::SourcePosition;

/// An error produced while lexing a source buffer.
///
/// Lexing fails fast: the first byte that cannot be classified (and does
/// not advance the cursor) aborts the scan.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LexError {
    #[error("unexpected character {character:?} at {position}")]
    UnexpectedCharacter {
        character: char,
        position: SourcePosition,
    },

    #[error("unterminated string literal starting at {position}")]
    UnterminatedString { position: SourcePosition },

    #[error("malformed number `{text}` at {position}")]
    MalformedNumber {
        text: String,
        position: SourcePosition,
    },

    #[error("unexpected `.` at {position} (use `...` for a spread)")]
    IncompleteEllipsis { position: SourcePosition },
}

impl LexError {
    pub fn position(&self) -> &SourcePosition {
        match self {
            LexError::UnexpectedCharacter { position, .. }
            | LexError::UnterminatedString { position }
            | LexError::MalformedNumber { position, .. }
            | LexError::IncompleteEllipsis { position } => position,
        }
    }
}
