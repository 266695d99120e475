/// Line/column/byte-offset of a single position in a source buffer.
///
/// Positions are tracked by the lexer as it consumes bytes: `\n` increments
/// the line and resets the column to 1, every other character advances the
/// column by 1. Every token records the position of its first byte.
///
/// # Indexing convention
///
/// - `line` and `column` are 1-based (the first character of a document is
///   at 1:1). This is what editors display and what diagnostics print.
/// - `byte_offset` is 0-based from the start of the document. Token lexemes
///   are subslices of the input starting at this offset.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SourcePosition {
    line: usize,
    column: usize,
    byte_offset: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize, byte_offset: usize) -> Self {
        Self {
            line,
            column,
            byte_offset,
        }
    }

    /// Returns the 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 1-based column number.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the 0-based byte offset from the start of the document.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
