use crate::SourcePosition;
use smallvec::SmallVec;

/// Additional context notes attached to a [`ParseError`]. Most errors carry
/// zero or one note, so the inline capacity avoids heap allocation.
pub type ParseErrorNotes = SmallVec<[String; 2]>;

/// Categorized parse error kind, for programmatic handling without string
/// matching.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseErrorKind {
    UnexpectedToken,
    UnexpectedEof,
    InvalidValue,
    InvalidDefinition,
}

/// A parse error with the position where it was detected.
///
/// Both parsers stop on the first error; the error message names what was
/// expected and what was found, e.g. ``expected `{` after type name``.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct ParseError {
    message: String,
    position: SourcePosition,
    kind: ParseErrorKind,
    notes: ParseErrorNotes,
}

impl ParseError {
    pub fn new(
        message: impl Into<String>,
        position: SourcePosition,
        kind: ParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            position,
            kind,
            notes: SmallVec::new(),
        }
    }

    /// Attach a help note to this error.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn position(&self) -> &SourcePosition {
        &self.position
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Single-line rendering: `3:7: error: expected `{` after type name`.
    pub fn format_oneline(&self) -> String {
        format!("{}: error: {}", self.position, self.message)
    }

    /// Multi-line rendering with any attached notes, for CLI output.
    pub fn format_detailed(&self) -> String {
        let mut output = self.format_oneline();
        for note in &self.notes {
            output.push_str("\n   = help: ");
            output.push_str(note);
        }
        output
    }
}

/// Either kind of syntax failure: the lexer rejected a byte, or a parser
/// rejected the token stream.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SyntaxError {
    #[error(transparent)]
    Lex(#[from] crate::LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
