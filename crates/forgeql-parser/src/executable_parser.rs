//! Recursive descent parser for executable documents.
//!
//! Grammar (shorthand documents parse as queries):
//!
//! ```text
//! Document        := (Operation | FragmentDefinition)+
//! Operation       := (query|mutation|subscription) Name? VarDefs? Dirs? SelectionSet
//!                  | SelectionSet
//! FragmentDef     := fragment Name on TypeName Dirs? SelectionSet
//! SelectionSet    := { Selection+ }
//! Selection       := Field | FragmentSpread | InlineFragment
//! Field           := (Alias :)? Name Args? Dirs? SelectionSet?
//! FragmentSpread  := ... Name Dirs?
//! InlineFragment  := ... (on TypeName)? Dirs? SelectionSet
//! ```
//!
//! The parser stops on the first error.

use crate::Lexer;
use crate::ParseError;
use crate::ParseErrorKind;
use crate::SyntaxError;
use crate::TokenKind;
use crate::TokenTag;
use crate::TypeRef;
use crate::Value;
use crate::executable::Argument;
use crate::executable::Document;
use crate::executable::Field;
use crate::executable::FragmentDefinition;
use crate::executable::FragmentSpread;
use crate::executable::InlineFragment;
use crate::executable::Operation;
use crate::executable::OperationKind;
use crate::executable::Selection;
use crate::executable::VariableDefinition;
use crate::schema::DirectiveAnnotation;
use crate::token_cursor::TokenCursor;
use crate::value::unquote_string;

type Result<T> = std::result::Result<T, ParseError>;

/// Parser over an executable-document token stream.
pub struct ExecutableParser<'src> {
    tokens: TokenCursor<'src>,
}

impl<'src> ExecutableParser<'src> {
    /// Lexes and parses one executable-document buffer.
    pub fn parse(source: &'src str) -> std::result::Result<Document, SyntaxError> {
        let tokens = Lexer::executable(source).lex()?;
        let mut parser = Self {
            tokens: TokenCursor::new(tokens),
        };
        Ok(parser.parse_document()?)
    }

    fn parse_document(&mut self) -> Result<Document> {
        let mut document = Document::default();

        loop {
            match self.tokens.peek_tag() {
                TokenTag::Eof => {
                    if document.operations.is_empty() && document.fragments.is_empty() {
                        return Err(self.tokens.error_here(
                            "document contains no definitions",
                            ParseErrorKind::InvalidDefinition,
                        ));
                    }
                    return Ok(document);
                }

                // Shorthand query: a bare selection set.
                TokenTag::CurlyOpen => {
                    let selections = self.parse_selection_set()?;
                    document.operations.push(Operation {
                        kind: OperationKind::Query,
                        name: None,
                        variable_definitions: Vec::new(),
                        directives: Vec::new(),
                        selections,
                    });
                }

                TokenTag::Query => {
                    document.operations.push(
                        self.parse_operation(OperationKind::Query)?,
                    );
                }
                TokenTag::Mutation => {
                    document.operations.push(
                        self.parse_operation(OperationKind::Mutation)?,
                    );
                }
                TokenTag::Subscription => {
                    document.operations.push(
                        self.parse_operation(OperationKind::Subscription)?,
                    );
                }

                TokenTag::Fragment => {
                    document.fragments.push(self.parse_fragment_definition()?);
                }

                _ => {
                    return Err(self.tokens.unexpected(
                        "an operation, fragment definition, or `{`",
                    ));
                }
            }
        }
    }

    // =========================================================================
    // Operations and fragments
    // =========================================================================

    fn parse_operation(&mut self, kind: OperationKind) -> Result<Operation> {
        self.tokens.next(); // operation keyword

        let name = if self.tokens.peek().kind.is_name_like() {
            Some(self.tokens.expect_name("an operation name")?.0)
        } else {
            None
        };

        let variable_definitions = if self.tokens.eat(TokenTag::ParenOpen) {
            self.parse_variable_definitions()?
        } else {
            Vec::new()
        };

        let directives = self.parse_directives()?;
        let selections = self.parse_selection_set()?;

        Ok(Operation {
            kind,
            name,
            variable_definitions,
            directives,
            selections,
        })
    }

    /// `fragment Name on TypeName Dirs? SelectionSet`
    fn parse_fragment_definition(&mut self) -> Result<FragmentDefinition> {
        self.tokens.next(); // `fragment`
        let (name, name_position) = self.tokens.expect_name("a fragment name")?;
        if name == "on" {
            return Err(ParseError::new(
                "`on` cannot be used as a fragment name",
                name_position,
                ParseErrorKind::InvalidDefinition,
            ));
        }
        self.tokens.expect(TokenTag::On, "after fragment name")?;
        let (based_type_name, _) = self.tokens.expect_name("a type name")?;
        let directives = self.parse_directives()?;
        let selections = self.parse_selection_set()?;

        Ok(FragmentDefinition {
            name,
            based_type_name,
            directives,
            selections,
        })
    }

    /// `( $name: Type = default, ... )`, already past the `(`.
    fn parse_variable_definitions(&mut self) -> Result<Vec<VariableDefinition>> {
        let mut definitions = Vec::new();
        loop {
            self.tokens.skip_commas();
            if self.tokens.eat(TokenTag::ParenClose) {
                return Ok(definitions);
            }
            if self.tokens.at_eof() {
                return Err(self.tokens.error_here(
                    "unclosed `(` in variable definitions",
                    ParseErrorKind::UnexpectedEof,
                ));
            }

            self.tokens.expect(TokenTag::Dollar, "before variable name")?;
            let (name, _) = self.tokens.expect_name("a variable name")?;
            self.tokens.expect(TokenTag::Colon, "after variable name")?;
            let ty = self.parse_type_ref()?;
            let default_value = if self.tokens.eat(TokenTag::Equals) {
                Some(self.parse_value()?)
            } else {
                None
            };

            definitions.push(VariableDefinition {
                name,
                ty,
                default_value,
            });
        }
    }

    // =========================================================================
    // Selections
    // =========================================================================

    /// `{ Selection+ }`
    fn parse_selection_set(&mut self) -> Result<Vec<Selection>> {
        self.tokens.expect(TokenTag::CurlyOpen, "to begin a selection set")?;

        let mut selections = Vec::new();
        loop {
            self.tokens.skip_commas();
            if self.tokens.eat(TokenTag::CurlyClose) {
                if selections.is_empty() {
                    return Err(self.tokens.error_here(
                        "selection set must select at least one field",
                        ParseErrorKind::InvalidDefinition,
                    ));
                }
                return Ok(selections);
            }
            if self.tokens.at_eof() {
                return Err(self.tokens.error_here(
                    "unclosed `{` in selection set",
                    ParseErrorKind::UnexpectedEof,
                ));
            }

            selections.push(self.parse_selection()?);
        }
    }

    fn parse_selection(&mut self) -> Result<Selection> {
        if self.tokens.eat(TokenTag::Ellipsis) {
            return self.parse_spread_or_inline_fragment();
        }
        Ok(Selection::Field(self.parse_field()?))
    }

    /// After `...`: a fragment spread (`...Name`) or an inline fragment
    /// (`... on Type { ... }` / `... { ... }`).
    fn parse_spread_or_inline_fragment(&mut self) -> Result<Selection> {
        if self.tokens.eat(TokenTag::On) {
            let (type_condition, _) = self.tokens.expect_name("a type name")?;
            let directives = self.parse_directives()?;
            let selections = self.parse_selection_set()?;
            return Ok(Selection::InlineFragment(InlineFragment {
                type_condition: Some(type_condition),
                directives,
                selections,
            }));
        }

        if self.tokens.peek().kind.is_name_like() {
            let (name, _) = self.tokens.expect_name("a fragment name")?;
            let directives = self.parse_directives()?;
            return Ok(Selection::FragmentSpread(FragmentSpread {
                name,
                directives,
            }));
        }

        // `... @dir { ... }` or `... { ... }`: condition-less inline
        // fragment applying to the enclosing type.
        let directives = self.parse_directives()?;
        let selections = self.parse_selection_set()?;
        Ok(Selection::InlineFragment(InlineFragment {
            type_condition: None,
            directives,
            selections,
        }))
    }

    /// `(Alias :)? Name Args? Dirs? SelectionSet?`
    fn parse_field(&mut self) -> Result<Field> {
        let (first_name, _) = self.tokens.expect_name("a field name")?;

        let (alias, name) = if self.tokens.eat(TokenTag::Colon) {
            let (name, _) = self.tokens.expect_name("a field name after alias")?;
            (Some(first_name), name)
        } else {
            (None, first_name)
        };

        let arguments = if self.tokens.eat(TokenTag::ParenOpen) {
            self.parse_arguments()?
        } else {
            Vec::new()
        };

        let directives = self.parse_directives()?;

        let selections = if self.tokens.peek_tag() == TokenTag::CurlyOpen {
            self.parse_selection_set()?
        } else {
            Vec::new()
        };

        Ok(Field {
            alias,
            name,
            arguments,
            directives,
            selections,
        })
    }

    /// `( Name : Value, ... )`, already past the `(`.
    fn parse_arguments(&mut self) -> Result<Vec<Argument>> {
        let mut arguments = Vec::new();
        loop {
            self.tokens.skip_commas();
            if self.tokens.eat(TokenTag::ParenClose) {
                return Ok(arguments);
            }
            if self.tokens.at_eof() {
                return Err(self.tokens.error_here(
                    "unclosed `(` in arguments",
                    ParseErrorKind::UnexpectedEof,
                ));
            }

            let (name, _) = self.tokens.expect_name("an argument name")?;
            self.tokens.expect(TokenTag::Colon, "after argument name")?;
            let value = self.parse_value()?;
            arguments.push(Argument { name, value });
        }
    }

    /// Zero or more `@name(arg: value, ...)` annotations.
    fn parse_directives(&mut self) -> Result<Vec<DirectiveAnnotation>> {
        let mut directives = Vec::new();
        while self.tokens.eat(TokenTag::At) {
            let (name, _) = self.tokens.expect_name("a directive name")?;
            let mut annotation = DirectiveAnnotation::new(name);
            if self.tokens.eat(TokenTag::ParenOpen) {
                for argument in self.parse_arguments()? {
                    annotation.arguments.push((argument.name, argument.value));
                }
            }
            directives.push(annotation);
        }
        Ok(directives)
    }

    // =========================================================================
    // Types and values
    // =========================================================================

    /// `Name`, `[TypeRef]`, either suffixed with `!`.
    fn parse_type_ref(&mut self) -> Result<TypeRef> {
        if self.tokens.eat(TokenTag::BracketOpen) {
            let element = self.parse_type_ref()?;
            self.tokens.expect(TokenTag::BracketClose, "to close list type")?;
            let nullable = !self.tokens.eat(TokenTag::Bang);
            return Ok(TypeRef::List {
                element: Box::new(element),
                nullable,
            });
        }

        let (name, _) = self.tokens.expect_name("a type name")?;
        let nullable = !self.tokens.eat(TokenTag::Bang);
        Ok(TypeRef::Named { name, nullable })
    }

    /// One value: variable, scalar literal, enum name, list, or object.
    fn parse_value(&mut self) -> Result<Value> {
        let token = self.tokens.next();
        match token.kind {
            TokenKind::Dollar => {
                let (name, _) = self.tokens.expect_name("a variable name")?;
                Ok(Value::Variable(name))
            }
            TokenKind::Int(raw) => raw.parse::<i64>().map(Value::Int).map_err(|_| {
                ParseError::new(
                    format!("integer `{raw}` is out of range"),
                    token.position,
                    ParseErrorKind::InvalidValue,
                )
            }),
            TokenKind::Float(raw) => raw.parse::<f64>().map(Value::Float).map_err(|_| {
                ParseError::new(
                    format!("malformed float `{raw}`"),
                    token.position,
                    ParseErrorKind::InvalidValue,
                )
            }),
            TokenKind::String(raw) => Ok(Value::String(unquote_string(&raw))),
            TokenKind::Boolean(raw) => Ok(Value::Boolean(raw == "true")),
            TokenKind::Null => Ok(Value::Null),
            TokenKind::Identifier(name) | TokenKind::FieldName(name) => {
                Ok(Value::Enum(name.into_owned()))
            }
            TokenKind::BracketOpen => {
                let mut items = Vec::new();
                loop {
                    self.tokens.skip_commas();
                    if self.tokens.eat(TokenTag::BracketClose) {
                        return Ok(Value::List(items));
                    }
                    if self.tokens.at_eof() {
                        return Err(self.tokens.error_here(
                            "unclosed `[` in list value",
                            ParseErrorKind::UnexpectedEof,
                        ));
                    }
                    items.push(self.parse_value()?);
                }
            }
            TokenKind::CurlyOpen => {
                let mut fields = Vec::new();
                loop {
                    self.tokens.skip_commas();
                    if self.tokens.eat(TokenTag::CurlyClose) {
                        return Ok(Value::Object(fields));
                    }
                    if self.tokens.at_eof() {
                        return Err(self.tokens.error_here(
                            "unclosed `{` in object value",
                            ParseErrorKind::UnexpectedEof,
                        ));
                    }
                    let (field_name, _) = self.tokens.expect_name("an object field name")?;
                    self.tokens.expect(TokenTag::Colon, "after object field name")?;
                    fields.push((field_name, self.parse_value()?));
                }
            }
            other => Err(ParseError::new(
                format!("expected a value, found {}", other.describe()),
                token.position,
                ParseErrorKind::InvalidValue,
            )),
        }
    }
}
