//! Tests for the shared scanner: token classification in both modes,
//! position tracking, and the zero-copy lexeme invariant.

use crate::LexError;
use crate::Lexer;
use crate::TokenKind;
use crate::TokenTag;
use crate::tests::utils::lex_executable;
use crate::tests::utils::lex_schema;
use crate::tests::utils::tags;

// =============================================================================
// Schema mode
// =============================================================================

#[test]
fn schema_minimal_type() {
    let tokens = lex_schema("type Query { hello: String }");

    assert_eq!(tags(&tokens), vec![
        TokenTag::Type,
        TokenTag::Identifier,
        TokenTag::CurlyOpen,
        TokenTag::FieldName,
        TokenTag::Colon,
        TokenTag::Identifier,
        TokenTag::CurlyClose,
        TokenTag::Eof,
    ]);
    assert_eq!(tokens[1].kind.text(), Some("Query"));
    assert_eq!(tokens[3].kind.text(), Some("hello"));
    assert_eq!(tokens[5].kind.text(), Some("String"));
}

/// A type-position run is an identifier, a member-position run is a field
/// name; the same spelling lexes differently by context.
#[test]
fn schema_identifier_vs_field_name_context() {
    let tokens = lex_schema("type User { friend: User }");

    // `User` in the definition header is an identifier...
    assert!(matches!(tokens[1].kind, TokenKind::Identifier(_)));
    // ...`friend` is a field name...
    assert!(matches!(tokens[3].kind, TokenKind::FieldName(_)));
    // ...and `User` in the field's type position is an identifier again.
    assert!(matches!(tokens[5].kind, TokenKind::Identifier(_)));
}

#[test]
fn schema_field_names_may_contain_digits() {
    let tokens = lex_schema("type T { field2: Int }");
    assert_eq!(tokens[3].kind.text(), Some("field2"));
    assert!(matches!(tokens[3].kind, TokenKind::FieldName(_)));
}

#[test]
fn schema_default_values() {
    let tokens = lex_schema(r#"type T { f(limit: Int = 10, name: String = "x"): T }"#);

    let limit_default = &tokens[9];
    assert_eq!(limit_default.kind, TokenKind::Int("10".into()));
    let name_default = &tokens[15];
    assert_eq!(name_default.kind, TokenKind::String("\"x\"".into()));
}

#[test]
fn schema_default_value_list() {
    let tokens = lex_schema("type T { f(tags: [String] = [\"a\", \"b\"]): Int }");

    let listed: Vec<_> = tokens
        .iter()
        .filter(|t| matches!(t.kind, TokenKind::String(_)))
        .collect();
    assert_eq!(listed.len(), 2);
}

/// Union members sit after `=` and `|` and must lex as identifiers, not
/// as scalar values.
#[test]
fn schema_union_members_are_identifiers() {
    let tokens = lex_schema("union Result = A | B");

    assert_eq!(tags(&tokens), vec![
        TokenTag::Union,
        TokenTag::FieldName,
        TokenTag::Equals,
        TokenTag::Identifier,
        TokenTag::Pipe,
        TokenTag::Identifier,
        TokenTag::Eof,
    ]);
}

#[test]
fn schema_directive_arguments() {
    let tokens = lex_schema(r#"type T @auth(role: "admin", strict: true) { f: Int }"#);

    // `role` and `strict` are argument names; `"admin"` and `true` are
    // value literals even though `true` is an ident-like run.
    assert_eq!(tokens[5].kind.text(), Some("role"));
    assert_eq!(tokens[7].kind, TokenKind::String("\"admin\"".into()));
    assert_eq!(tokens[9].kind.text(), Some("strict"));
    assert_eq!(tokens[11].kind, TokenKind::Boolean("true".into()));
}

/// `directive @d(if: Boolean!) on ...` puts a type annotation where an
/// applied directive would put a value; the ident-like run must stay an
/// identifier.
#[test]
fn schema_directive_definition_argument_types() {
    let tokens = lex_schema("directive @skip(if: Boolean!) on FIELD | INLINE_FRAGMENT");

    assert_eq!(tags(&tokens), vec![
        TokenTag::Directive,
        TokenTag::At,
        TokenTag::Identifier,
        TokenTag::ParenOpen,
        TokenTag::FieldName,
        TokenTag::Colon,
        TokenTag::Identifier,
        TokenTag::Bang,
        TokenTag::ParenClose,
        TokenTag::On,
        TokenTag::FieldName,
        TokenTag::Pipe,
        TokenTag::Identifier,
        TokenTag::Eof,
    ]);
}

#[test]
fn schema_comments_are_skipped() {
    let tokens = lex_schema("# a comment\ntype Query { hello: String }");
    assert_eq!(tokens[0].kind, TokenKind::Type);
    assert_eq!(tokens[0].position.line(), 2);
}

#[test]
fn schema_introspection_names() {
    let tokens = lex_schema("type __Schema { queryType: __Type! }");
    assert_eq!(tokens[1].kind.text(), Some("__Schema"));
}

// =============================================================================
// Query mode
// =============================================================================

#[test]
fn query_shorthand() {
    let tokens = lex_executable("{ hello }");
    assert_eq!(tags(&tokens), vec![
        TokenTag::CurlyOpen,
        TokenTag::FieldName,
        TokenTag::CurlyClose,
        TokenTag::Eof,
    ]);
}

#[test]
fn query_operation_with_variables() {
    let tokens = lex_executable("query GetUser($id: ID!) { user(id: $id) { name } }");

    assert_eq!(tags(&tokens), vec![
        TokenTag::Query,
        TokenTag::FieldName, // operation name
        TokenTag::ParenOpen,
        TokenTag::Dollar,
        TokenTag::FieldName, // variable name
        TokenTag::Colon,
        TokenTag::Identifier, // variable type
        TokenTag::Bang,
        TokenTag::ParenClose,
        TokenTag::CurlyOpen,
        TokenTag::FieldName,
        TokenTag::ParenOpen,
        TokenTag::FieldName,
        TokenTag::Colon,
        TokenTag::Dollar,
        TokenTag::FieldName,
        TokenTag::ParenClose,
        TokenTag::CurlyOpen,
        TokenTag::FieldName,
        TokenTag::CurlyClose,
        TokenTag::CurlyClose,
        TokenTag::Eof,
    ]);
}

/// `query` etc. only start definitions; a field with the same spelling
/// lexes as a name.
#[test]
fn query_keywords_are_position_gated() {
    let tokens = lex_executable("{ query mutation fragment }");
    assert!(matches!(tokens[1].kind, TokenKind::FieldName(_)));
    assert!(matches!(tokens[2].kind, TokenKind::FieldName(_)));
    assert!(matches!(tokens[3].kind, TokenKind::FieldName(_)));
}

#[test]
fn query_spreads_and_type_conditions() {
    let tokens = lex_executable("{ ...F ... on User { x } }");

    assert_eq!(tags(&tokens), vec![
        TokenTag::CurlyOpen,
        TokenTag::Ellipsis,
        TokenTag::FieldName,
        TokenTag::Ellipsis,
        TokenTag::On,
        TokenTag::Identifier,
        TokenTag::CurlyOpen,
        TokenTag::FieldName,
        TokenTag::CurlyClose,
        TokenTag::CurlyClose,
        TokenTag::Eof,
    ]);
}

#[test]
fn query_argument_values() {
    let tokens = lex_executable(r#"{ f(a: [1, 2.5], b: {x: RED}, c: "s", d: null) }"#);

    let kinds = tags(&tokens);
    assert!(kinds.contains(&TokenTag::Int));
    assert!(kinds.contains(&TokenTag::Float));
    assert!(kinds.contains(&TokenTag::String));
    assert!(kinds.contains(&TokenTag::Null));
    // `RED` inside the object value is an enum value run, lexed as a name.
    let red = tokens.iter().find(|t| t.kind.text() == Some("RED"));
    assert!(matches!(red.map(|t| &t.kind), Some(TokenKind::FieldName(_))));
}

#[test]
fn query_negative_numbers() {
    let tokens = lex_executable("{ f(a: -5, b: -1.5) }");
    assert_eq!(tokens[5].kind, TokenKind::Int("-5".into()));
    assert_eq!(tokens[9].kind, TokenKind::Float("-1.5".into()));
}

// =============================================================================
// Positions and the zero-copy invariant
// =============================================================================

#[test]
fn positions_track_lines_and_columns() {
    let tokens = lex_schema("type Query {\n  hello: String\n}");

    let type_kw = &tokens[0];
    assert_eq!((type_kw.position.line(), type_kw.position.column()), (1, 1));

    let hello = &tokens[3];
    assert_eq!((hello.position.line(), hello.position.column()), (2, 3));

    let close = &tokens[6];
    assert_eq!((close.position.line(), close.position.column()), (3, 1));
}

/// Every lexeme is a subslice of the input at the recorded byte offset.
#[test]
fn lexemes_are_zero_copy_subslices() {
    let source = "type Query {\n  user(id: ID! = \"7\"): User @dir(a: 1)\n}";
    let tokens = lex_schema(source);

    for token in &tokens {
        if let Some(text) = token.kind.text() {
            let start = token.position.byte_offset();
            assert_eq!(
                &source[start..start + text.len()],
                text,
                "lexeme of {:?} does not match its recorded offset",
                token.kind,
            );
        }
    }
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn unexpected_character_reports_position() {
    let err = Lexer::schema("type T { ? }").lex().unwrap_err();
    match err {
        LexError::UnexpectedCharacter {
            character,
            position,
        } => {
            assert_eq!(character, '?');
            assert_eq!((position.line(), position.column()), (1, 10));
        }
        other => panic!("expected UnexpectedCharacter, got {other:?}"),
    }
}

#[test]
fn unterminated_string_is_an_error() {
    let err = Lexer::schema("type T { f: String @doc(text: \"oops) }")
        .lex()
        .unwrap_err();
    assert!(matches!(err, LexError::UnterminatedString { .. }));
}

#[test]
fn lone_dots_are_an_error() {
    let err = Lexer::executable("{ .. }").lex().unwrap_err();
    assert!(matches!(err, LexError::IncompleteEllipsis { .. }));
}
