use std::borrow::Cow;

/// The kind of a lexed token.
///
/// This is a closed set: reserved schema keywords, operation keywords,
/// value literals, the two ident-like kinds, punctuators, and `Eof`.
///
/// Lexeme-carrying kinds store the raw source text as `Cow<'src, str>` so
/// that lexing a string buffer never allocates (zero-copy). Literal kinds
/// keep the *raw* text: a `String` token includes its quotes and a
/// `Boolean` token holds `"true"` or `"false"` as written.
///
/// The lexer is context-sensitive about ident-like runs: a run in a type
/// position (after `type`, `:`, `[`, `@`, `input`, `interface`, a union
/// `=`/`|`, ...) becomes an [`Identifier`](TokenKind::Identifier); anywhere
/// else it becomes a [`FieldName`](TokenKind::FieldName).
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind<'src> {
    // Reserved schema keywords
    Type,
    Extend,
    Scalar,
    Enum,
    Input,
    Interface,
    Union,
    Schema,
    Directive,

    // Operation keywords (executable documents)
    Query,
    Mutation,
    Subscription,
    Fragment,

    // Shared keyword: fragment type conditions and directive locations
    On,

    // Ident-like
    Identifier(Cow<'src, str>),
    FieldName(Cow<'src, str>),

    // Value literals (raw source text)
    Int(Cow<'src, str>),
    Float(Cow<'src, str>),
    String(Cow<'src, str>),
    Boolean(Cow<'src, str>),
    Null,

    // Punctuators
    CurlyOpen,
    CurlyClose,
    ParenOpen,
    ParenClose,
    Colon,
    At,
    Comma,
    Equals,
    BracketOpen,
    BracketClose,
    Bang,
    Pipe,
    Ampersand,
    Ellipsis,
    Dollar,

    Eof,
}

/// Field-free twin of [`TokenKind`], used by the parsers to state
/// expectations without constructing a lexeme.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenTag {
    Type,
    Extend,
    Scalar,
    Enum,
    Input,
    Interface,
    Union,
    Schema,
    Directive,
    Query,
    Mutation,
    Subscription,
    Fragment,
    On,
    Identifier,
    FieldName,
    Int,
    Float,
    String,
    Boolean,
    Null,
    CurlyOpen,
    CurlyClose,
    ParenOpen,
    ParenClose,
    Colon,
    At,
    Comma,
    Equals,
    BracketOpen,
    BracketClose,
    Bang,
    Pipe,
    Ampersand,
    Ellipsis,
    Dollar,
    Eof,
}

impl<'src> TokenKind<'src> {
    /// Create an `Identifier` borrowing directly from the source buffer.
    #[inline]
    pub fn identifier(s: &'src str) -> Self {
        TokenKind::Identifier(Cow::Borrowed(s))
    }

    /// Create a `FieldName` borrowing directly from the source buffer.
    #[inline]
    pub fn field_name(s: &'src str) -> Self {
        TokenKind::FieldName(Cow::Borrowed(s))
    }

    pub fn tag(&self) -> TokenTag {
        match self {
            TokenKind::Type => TokenTag::Type,
            TokenKind::Extend => TokenTag::Extend,
            TokenKind::Scalar => TokenTag::Scalar,
            TokenKind::Enum => TokenTag::Enum,
            TokenKind::Input => TokenTag::Input,
            TokenKind::Interface => TokenTag::Interface,
            TokenKind::Union => TokenTag::Union,
            TokenKind::Schema => TokenTag::Schema,
            TokenKind::Directive => TokenTag::Directive,
            TokenKind::Query => TokenTag::Query,
            TokenKind::Mutation => TokenTag::Mutation,
            TokenKind::Subscription => TokenTag::Subscription,
            TokenKind::Fragment => TokenTag::Fragment,
            TokenKind::On => TokenTag::On,
            TokenKind::Identifier(_) => TokenTag::Identifier,
            TokenKind::FieldName(_) => TokenTag::FieldName,
            TokenKind::Int(_) => TokenTag::Int,
            TokenKind::Float(_) => TokenTag::Float,
            TokenKind::String(_) => TokenTag::String,
            TokenKind::Boolean(_) => TokenTag::Boolean,
            TokenKind::Null => TokenTag::Null,
            TokenKind::CurlyOpen => TokenTag::CurlyOpen,
            TokenKind::CurlyClose => TokenTag::CurlyClose,
            TokenKind::ParenOpen => TokenTag::ParenOpen,
            TokenKind::ParenClose => TokenTag::ParenClose,
            TokenKind::Colon => TokenTag::Colon,
            TokenKind::At => TokenTag::At,
            TokenKind::Comma => TokenTag::Comma,
            TokenKind::Equals => TokenTag::Equals,
            TokenKind::BracketOpen => TokenTag::BracketOpen,
            TokenKind::BracketClose => TokenTag::BracketClose,
            TokenKind::Bang => TokenTag::Bang,
            TokenKind::Pipe => TokenTag::Pipe,
            TokenKind::Ampersand => TokenTag::Ampersand,
            TokenKind::Ellipsis => TokenTag::Ellipsis,
            TokenKind::Dollar => TokenTag::Dollar,
            TokenKind::Eof => TokenTag::Eof,
        }
    }

    /// The raw source text of a lexeme-carrying token.
    pub fn text(&self) -> Option<&str> {
        match self {
            TokenKind::Identifier(s)
            | TokenKind::FieldName(s)
            | TokenKind::Int(s)
            | TokenKind::Float(s)
            | TokenKind::String(s)
            | TokenKind::Boolean(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// The text of an ident-like token (`Identifier` or `FieldName`).
    pub fn name_text(&self) -> Option<&str> {
        match self {
            TokenKind::Identifier(s) | TokenKind::FieldName(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// Returns `true` for `Identifier` and `FieldName`.
    pub fn is_name_like(&self) -> bool {
        matches!(self, TokenKind::Identifier(_) | TokenKind::FieldName(_))
    }

    /// A human-readable rendering for diagnostics, e.g. `` `{` `` or
    /// `` identifier `Foo` ``.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Identifier(s) => format!("identifier `{s}`"),
            TokenKind::FieldName(s) => format!("name `{s}`"),
            TokenKind::Int(s) | TokenKind::Float(s) | TokenKind::Boolean(s) => {
                format!("`{s}`")
            }
            TokenKind::String(_) => "string literal".to_string(),
            TokenKind::Eof => "end of input".to_string(),
            other => format!("`{}`", other.tag().token_str()),
        }
    }
}

impl TokenTag {
    /// The literal source text of a fixed-text token, or a class name for
    /// the lexeme-carrying kinds. Used in `expected ...` diagnostics.
    pub fn token_str(&self) -> &'static str {
        match self {
            TokenTag::Type => "type",
            TokenTag::Extend => "extend",
            TokenTag::Scalar => "scalar",
            TokenTag::Enum => "enum",
            TokenTag::Input => "input",
            TokenTag::Interface => "interface",
            TokenTag::Union => "union",
            TokenTag::Schema => "schema",
            TokenTag::Directive => "directive",
            TokenTag::Query => "query",
            TokenTag::Mutation => "mutation",
            TokenTag::Subscription => "subscription",
            TokenTag::Fragment => "fragment",
            TokenTag::On => "on",
            TokenTag::Identifier => "identifier",
            TokenTag::FieldName => "name",
            TokenTag::Int => "integer",
            TokenTag::Float => "float",
            TokenTag::String => "string",
            TokenTag::Boolean => "boolean",
            TokenTag::Null => "null",
            TokenTag::CurlyOpen => "{",
            TokenTag::CurlyClose => "}",
            TokenTag::ParenOpen => "(",
            TokenTag::ParenClose => ")",
            TokenTag::Colon => ":",
            TokenTag::At => "@",
            TokenTag::Comma => ",",
            TokenTag::Equals => "=",
            TokenTag::BracketOpen => "[",
            TokenTag::BracketClose => "]",
            TokenTag::Bang => "!",
            TokenTag::Pipe => "|",
            TokenTag::Ampersand => "&",
            TokenTag::Ellipsis => "...",
            TokenTag::Dollar => "$",
            TokenTag::Eof => "end of input",
        }
    }
}
