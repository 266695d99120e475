//! The shared scanner behind both token streams.
//!
//! One state machine lexes both SDL and executable documents; a
//! [`LexerMode`] selects the keyword table and the context rules. The
//! lexer is context-sensitive: it inspects the tail of the tokens it has
//! already emitted to decide whether an ident-like run is an identifier
//! (a type reference) or a field name, and whether the cursor sits in a
//! value position (after `=`, inside `@dir(...)` arguments, after `:`
//! inside an argument list).
//!
//! Lexing is zero-copy: every lexeme is a subslice of the input buffer.

use crate::LexError;
use crate::LexerMode;
use crate::SourcePosition;
use crate::Token;
use crate::TokenKind;
use crate::TokenTag;

/// Lexes a source buffer into a token sequence terminated by `Eof`.
pub struct Lexer<'src> {
    source: &'src str,
    mode: LexerMode,

    /// Byte offset of the next unconsumed character.
    cursor: usize,
    /// 1-based line of the next unconsumed character.
    line: usize,
    /// 1-based column of the next unconsumed character.
    column: usize,

    /// Inside `@name( ... )` directive arguments (schema mode).
    directive_args: bool,
    /// Inside a variable definition's type annotation (query mode).
    variable_type: bool,
    /// Open `(` argument/variable-definition lists (query mode).
    paren_depth: usize,
    /// Open `[` list-value literals.
    list_depth: usize,
    /// Open `{` object-value literals (query mode).
    object_depth: usize,
}

impl<'src> Lexer<'src> {
    /// A lexer for schema definition (SDL) input.
    pub fn schema(source: &'src str) -> Self {
        Self::new(source, LexerMode::Schema)
    }

    /// A lexer for executable-document input.
    pub fn executable(source: &'src str) -> Self {
        Self::new(source, LexerMode::Query)
    }

    pub fn new(source: &'src str, mode: LexerMode) -> Self {
        Self {
            source,
            mode,
            cursor: 0,
            line: 1,
            column: 1,
            directive_args: false,
            variable_type: false,
            paren_depth: 0,
            list_depth: 0,
            object_depth: 0,
        }
    }

    /// Consumes the whole input, returning the token sequence (terminated
    /// by an `Eof` token) or the first lexing error.
    pub fn lex(mut self) -> Result<Vec<Token<'src>>, LexError> {
        let mut tokens: Vec<Token<'src>> = Vec::new();

        loop {
            self.skip_ignored();

            let position = self.position();
            let Some(ch) = self.peek_char() else {
                tokens.push(Token::new(TokenKind::Eof, position));
                return Ok(tokens);
            };

            let kind = match ch {
                '{' => {
                    self.consume();
                    if self.in_value_region(&tokens) {
                        self.object_depth += 1;
                    }
                    TokenKind::CurlyOpen
                }
                '}' => {
                    self.consume();
                    self.object_depth = self.object_depth.saturating_sub(1);
                    TokenKind::CurlyClose
                }
                '(' => {
                    self.consume();
                    self.paren_depth += 1;
                    if self.mode == LexerMode::Schema && tail_is_directive_name(&tokens) {
                        self.directive_args = true;
                    }
                    TokenKind::ParenOpen
                }
                ')' => {
                    self.consume();
                    self.paren_depth = self.paren_depth.saturating_sub(1);
                    self.directive_args = false;
                    self.variable_type = false;
                    TokenKind::ParenClose
                }
                ':' => {
                    self.consume();
                    if self.mode == LexerMode::Query && tail_is_variable_name(&tokens) {
                        self.variable_type = true;
                    }
                    TokenKind::Colon
                }
                '@' => {
                    self.consume();
                    TokenKind::At
                }
                ',' => {
                    self.consume();
                    self.variable_type = false;
                    TokenKind::Comma
                }
                '=' => {
                    self.consume();
                    self.variable_type = false;
                    TokenKind::Equals
                }
                '[' => {
                    let value = self.in_value_region(&tokens);
                    self.consume();
                    if value {
                        self.list_depth += 1;
                    }
                    TokenKind::BracketOpen
                }
                ']' => {
                    self.consume();
                    self.list_depth = self.list_depth.saturating_sub(1);
                    TokenKind::BracketClose
                }
                '!' => {
                    self.consume();
                    TokenKind::Bang
                }
                '|' => {
                    self.consume();
                    TokenKind::Pipe
                }
                '&' => {
                    self.consume();
                    TokenKind::Ampersand
                }
                '$' => {
                    self.consume();
                    self.variable_type = false;
                    TokenKind::Dollar
                }
                '.' => self.lex_ellipsis(position)?,
                '"' => self.lex_string(position)?,
                c if c == '-' || c.is_ascii_digit() => self.lex_number(position)?,
                c if is_name_start(c) => self.lex_name(&tokens),
                other => {
                    return Err(LexError::UnexpectedCharacter {
                        character: other,
                        position,
                    });
                }
            };

            tokens.push(Token::new(kind, position));
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn position(&self) -> SourcePosition {
        SourcePosition::new(self.line, self.column, self.cursor)
    }

    fn remaining(&self) -> &'src str {
        &self.source[self.cursor..]
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes one character, maintaining line/column tracking: `\n`
    /// increments the line and resets the column to 1; every other
    /// character advances the column by 1.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.cursor += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Skips whitespace and `#` comments (comments run to end of line).
    fn skip_ignored(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | '\u{FEFF}' => {
                    self.consume();
                }
                '#' => {
                    while let Some(c) = self.peek_char() {
                        if c == '\n' {
                            break;
                        }
                        self.consume();
                    }
                }
                _ => break,
            }
        }
    }

    // =========================================================================
    // Context rules
    // =========================================================================

    /// Whether the cursor sits where a value literal is expected.
    ///
    /// Schema mode: after `=` (default values), inside a bracketed list
    /// value, or after `:` inside directive arguments. Query mode: inside
    /// list/object literals, or after `:`/`=` inside an argument or
    /// variable-definition list (but not in a variable's type annotation).
    fn in_value_region(&self, tokens: &[Token<'src>]) -> bool {
        if self.list_depth > 0 {
            return true;
        }
        let last = last_tag(tokens);
        match self.mode {
            LexerMode::Schema => {
                last == Some(TokenTag::Equals)
                    || (self.directive_args && last == Some(TokenTag::Colon))
            }
            LexerMode::Query => {
                self.object_depth > 0
                    || (self.paren_depth > 0
                        && !self.variable_type
                        && matches!(last, Some(TokenTag::Colon) | Some(TokenTag::Equals)))
            }
        }
    }

    /// Whether the next ident-like run is an identifier (a type
    /// reference) rather than a field name.
    fn in_identifier_context(&self, tokens: &[Token<'src>]) -> bool {
        let last = last_tag(tokens);
        match self.mode {
            LexerMode::Schema => matches!(
                last,
                Some(
                    TokenTag::Type
                        | TokenTag::Colon
                        | TokenTag::BracketOpen
                        | TokenTag::At
                        | TokenTag::Input
                        | TokenTag::Interface
                        | TokenTag::Pipe
                )
            ),
            LexerMode::Query => {
                self.variable_type || matches!(last, Some(TokenTag::On | TokenTag::At))
            }
        }
    }

    // =========================================================================
    // Name lexing
    // =========================================================================

    /// Lexes an ident-like run and classifies it by context: value
    /// keyword, keyword, identifier, or field name.
    fn lex_name(&mut self, tokens: &[Token<'src>]) -> TokenKind<'src> {
        let value_region = self.in_value_region(tokens);
        let identifier_context = self.in_identifier_context(tokens);

        let start = self.cursor;
        self.consume();
        while let Some(ch) = self.peek_char() {
            if is_name_continue(ch) {
                self.consume();
            } else {
                break;
            }
        }
        let text = &self.source[start..self.cursor];

        if value_region {
            return match text {
                "true" | "false" => TokenKind::Boolean(text.into()),
                "null" => TokenKind::Null,
                // A bare name in a value position is an enum value in a
                // document and a union member / enum default in SDL.
                _ if self.mode == LexerMode::Schema => TokenKind::identifier(text),
                _ => TokenKind::field_name(text),
            };
        }

        if identifier_context {
            return TokenKind::identifier(text);
        }

        if let Some(keyword) = self.match_keyword(text, tokens) {
            return keyword;
        }

        TokenKind::field_name(text)
    }

    /// Matches a run against the mode's keyword table.
    ///
    /// Matching is exact (case-sensitive): `SCALAR` is a valid enum value
    /// or directive location, only `scalar` is the keyword. Query
    /// keywords are additionally position-gated: `query`/`mutation`/
    /// `subscription`/`fragment` only start a definition, and `on` only
    /// follows a spread or a fragment name, so fields with those names
    /// still lex as names.
    fn match_keyword(
        &self,
        text: &str,
        tokens: &[Token<'src>],
    ) -> Option<TokenKind<'src>> {
        match self.mode {
            LexerMode::Schema => match text {
                "type" => Some(TokenKind::Type),
                "extend" => Some(TokenKind::Extend),
                "scalar" => Some(TokenKind::Scalar),
                "enum" => Some(TokenKind::Enum),
                "input" => Some(TokenKind::Input),
                "interface" => Some(TokenKind::Interface),
                "union" => Some(TokenKind::Union),
                "schema" => Some(TokenKind::Schema),
                "directive" => Some(TokenKind::Directive),
                "on" if matches!(
                    last_tag(tokens),
                    Some(TokenTag::ParenClose | TokenTag::Identifier)
                ) =>
                {
                    Some(TokenKind::On)
                }
                _ => None,
            },
            LexerMode::Query => {
                let last = last_tag(tokens);
                let at_definition_start =
                    matches!(last, None | Some(TokenTag::CurlyClose));
                match text {
                    "query" if at_definition_start => Some(TokenKind::Query),
                    "mutation" if at_definition_start => Some(TokenKind::Mutation),
                    "subscription" if at_definition_start => {
                        Some(TokenKind::Subscription)
                    }
                    "fragment" if at_definition_start => Some(TokenKind::Fragment),
                    "on" if last == Some(TokenTag::Ellipsis)
                        || tail_is_fragment_name(tokens) =>
                    {
                        Some(TokenKind::On)
                    }
                    _ => None,
                }
            }
        }
    }

    // =========================================================================
    // Number lexing
    // =========================================================================

    /// Lexes an integer or float literal; a `.` followed by digits
    /// promotes the token to a float.
    fn lex_number(&mut self, position: SourcePosition) -> Result<TokenKind<'src>, LexError> {
        let start = self.cursor;

        if self.peek_char() == Some('-') {
            self.consume();
        }
        if !matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
            return Err(LexError::MalformedNumber {
                text: self.source[start..self.cursor].to_string(),
                position,
            });
        }
        while matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
            self.consume();
        }

        let mut is_float = false;
        if self.peek_char() == Some('.') {
            if !matches!(self.peek_char_nth(1), Some(c) if c.is_ascii_digit()) {
                return Err(LexError::MalformedNumber {
                    text: self.source[start..self.cursor + 1].to_string(),
                    position,
                });
            }
            is_float = true;
            self.consume();
            while matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
                self.consume();
            }
        }

        let text = &self.source[start..self.cursor];
        Ok(if is_float {
            TokenKind::Float(text.into())
        } else {
            TokenKind::Int(text.into())
        })
    }

    // =========================================================================
    // String lexing
    // =========================================================================

    /// Lexes a string literal, raw text including its quotes. Handles
    /// both single-line (`"..."`, with `\"` escapes) and block
    /// (`"""..."""`) forms.
    fn lex_string(&mut self, position: SourcePosition) -> Result<TokenKind<'src>, LexError> {
        let start = self.cursor;

        if self.remaining().starts_with("\"\"\"") {
            self.consume();
            self.consume();
            self.consume();
            loop {
                if self.remaining().starts_with("\"\"\"") {
                    self.consume();
                    self.consume();
                    self.consume();
                    break;
                }
                if self.consume().is_none() {
                    return Err(LexError::UnterminatedString { position });
                }
            }
            return Ok(TokenKind::String(self.source[start..self.cursor].into()));
        }

        self.consume();
        loop {
            match self.peek_char() {
                None | Some('\n') => {
                    return Err(LexError::UnterminatedString { position });
                }
                Some('"') => {
                    self.consume();
                    break;
                }
                Some('\\') => {
                    self.consume();
                    self.consume();
                }
                Some(_) => {
                    self.consume();
                }
            }
        }
        Ok(TokenKind::String(self.source[start..self.cursor].into()))
    }

    // =========================================================================
    // Ellipsis lexing
    // =========================================================================

    fn lex_ellipsis(&mut self, position: SourcePosition) -> Result<TokenKind<'src>, LexError> {
        if self.remaining().starts_with("...") {
            self.consume();
            self.consume();
            self.consume();
            Ok(TokenKind::Ellipsis)
        } else {
            Err(LexError::IncompleteEllipsis { position })
        }
    }
}

// =============================================================================
// Tail inspection helpers
// =============================================================================

fn last_tag(tokens: &[Token<'_>]) -> Option<TokenTag> {
    tokens.last().map(|t| t.kind.tag())
}

fn nth_last_tag(tokens: &[Token<'_>], n: usize) -> Option<TokenTag> {
    tokens
        .len()
        .checked_sub(n)
        .and_then(|i| tokens.get(i))
        .map(|t| t.kind.tag())
}

/// Tail is `@ identifier`: an opening `(` here starts directive
/// arguments.
fn tail_is_directive_name(tokens: &[Token<'_>]) -> bool {
    nth_last_tag(tokens, 1) == Some(TokenTag::Identifier)
        && nth_last_tag(tokens, 2) == Some(TokenTag::At)
}

/// Tail is `$ name`: a `:` here introduces a variable's type annotation.
fn tail_is_variable_name(tokens: &[Token<'_>]) -> bool {
    nth_last_tag(tokens, 1) == Some(TokenTag::FieldName)
        && nth_last_tag(tokens, 2) == Some(TokenTag::Dollar)
}

/// Tail is `fragment name`: the next run may be the `on` keyword.
fn tail_is_fragment_name(tokens: &[Token<'_>]) -> bool {
    nth_last_tag(tokens, 1) == Some(TokenTag::FieldName)
        && nth_last_tag(tokens, 2) == Some(TokenTag::Fragment)
}

fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}
