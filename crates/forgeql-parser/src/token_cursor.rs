use crate::ParseError;
use crate::ParseErrorKind;
use crate::SourcePosition;
use crate::Token;
use crate::TokenKind;
use crate::TokenTag;
use crate::value::unquote_string;

type Result<T> = std::result::Result<T, ParseError>;

/// Shared token-stream plumbing for the two recursive-descent parsers:
/// lookahead, consumption, and the `expected X, found Y` diagnostics.
///
/// The cursor exclusively owns its token vector, which the lexer always
/// terminates with an `Eof` token; `peek`/`next` saturate there instead of
/// running off the end.
pub(crate) struct TokenCursor<'src> {
    tokens: Vec<Token<'src>>,
    pos: usize,
}

impl<'src> TokenCursor<'src> {
    pub(crate) fn new(tokens: Vec<Token<'src>>) -> Self {
        debug_assert!(matches!(
            tokens.last().map(|t| &t.kind),
            Some(TokenKind::Eof)
        ));
        Self { tokens, pos: 0 }
    }

    pub(crate) fn peek(&self) -> &Token<'src> {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    pub(crate) fn peek_tag(&self) -> TokenTag {
        self.peek().kind.tag()
    }

    pub(crate) fn next(&mut self) -> Token<'src> {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        token
    }

    pub(crate) fn eat(&mut self, tag: TokenTag) -> bool {
        if self.peek_tag() == tag {
            self.next();
            true
        } else {
            false
        }
    }

    pub(crate) fn skip_commas(&mut self) {
        while self.eat(TokenTag::Comma) {}
    }

    pub(crate) fn at_eof(&self) -> bool {
        self.peek_tag() == TokenTag::Eof
    }

    pub(crate) fn expect(&mut self, tag: TokenTag, context: &str) -> Result<Token<'src>> {
        if self.peek_tag() == tag {
            Ok(self.next())
        } else {
            let found = self.peek();
            Err(ParseError::new(
                format!(
                    "expected `{}` {context}, found {}",
                    tag.token_str(),
                    found.kind.describe(),
                ),
                found.position,
                if found.kind.tag() == TokenTag::Eof {
                    ParseErrorKind::UnexpectedEof
                } else {
                    ParseErrorKind::UnexpectedToken
                },
            ))
        }
    }

    /// Consumes an ident-like token (identifier or field name) and
    /// returns its text.
    pub(crate) fn expect_name(&mut self, what: &str) -> Result<(String, SourcePosition)> {
        if self.peek().kind.is_name_like() {
            let token = self.next();
            let name = match token.kind {
                TokenKind::Identifier(s) | TokenKind::FieldName(s) => s.into_owned(),
                _ => unreachable!("is_name_like() guaranteed an ident-like token"),
            };
            Ok((name, token.position))
        } else {
            Err(self.unexpected(what))
        }
    }

    /// Whether the next token is an ident-like token with this exact text.
    pub(crate) fn peek_name_is(&self, text: &str) -> bool {
        self.peek().kind.name_text() == Some(text)
    }

    /// A leading string literal, unquoted, if present.
    pub(crate) fn take_description(&mut self) -> Option<String> {
        if self.peek_tag() == TokenTag::String {
            let token = self.next();
            match token.kind {
                TokenKind::String(raw) => Some(unquote_string(&raw)),
                _ => None,
            }
        } else {
            None
        }
    }

    pub(crate) fn error_here(&self, message: &str, kind: ParseErrorKind) -> ParseError {
        ParseError::new(message, self.peek().position, kind)
    }

    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        let token = self.peek();
        ParseError::new(
            format!("expected {expected}, found {}", token.kind.describe()),
            token.position,
            if token.kind.tag() == TokenTag::Eof {
                ParseErrorKind::UnexpectedEof
            } else {
                ParseErrorKind::UnexpectedToken
            },
        )
    }
}
