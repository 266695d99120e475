//! Recursive descent parser for schema definition (SDL) documents.
//!
//! Produces a [`SchemaDocument`]: the raw definitions of one SDL buffer.
//! The parser stops on the first error and reports it with the position
//! where it was detected. Semantic checks that need the whole schema
//! (duplicates, extension targets, reference resolution) are not performed
//! here.

use crate::Lexer;
use crate::ParseError;
use crate::ParseErrorKind;
use crate::SyntaxError;
use crate::TokenKind;
use crate::TokenTag;
use crate::token_cursor::TokenCursor;
use crate::TypeRef;
use crate::Value;
use crate::schema::ArgumentDefinition;
use crate::schema::DirectiveAnnotation;
use crate::schema::DirectiveDefinition;
use crate::schema::EnumValueDefinition;
use crate::schema::FieldDefinition;
use crate::schema::RootOperationTypes;
use crate::schema::SchemaDocument;
use crate::schema::TypeDefinition;
use crate::schema::TypeDefinitionKind;
use crate::schema::TypeExtension;
use crate::value::unquote_string;

type Result<T> = std::result::Result<T, ParseError>;

/// Parser over a schema token stream. The parser exclusively owns its
/// tokens; the parsed document is handed to the caller.
pub struct SchemaParser<'src> {
    tokens: TokenCursor<'src>,
}

impl<'src> SchemaParser<'src> {
    /// Lexes and parses one SDL buffer.
    pub fn parse(source: &'src str) -> std::result::Result<SchemaDocument, SyntaxError> {
        let tokens = Lexer::schema(source).lex()?;
        let mut parser = Self {
            tokens: TokenCursor::new(tokens),
        };
        Ok(parser.parse_document()?)
    }

    fn parse_document(&mut self) -> Result<SchemaDocument> {
        let mut document = SchemaDocument::default();

        loop {
            let description = self.tokens.take_description();

            match self.tokens.peek().kind.tag() {
                TokenTag::Eof => {
                    if description.is_some() {
                        return Err(self.tokens.error_here(
                            "expected a definition after description",
                            ParseErrorKind::InvalidDefinition,
                        ));
                    }
                    return Ok(document);
                }

                TokenTag::Schema => {
                    let definition = self.parse_schema_definition()?;
                    if document.definition.is_some() {
                        return Err(self.tokens.error_here(
                            "duplicate schema definition",
                            ParseErrorKind::InvalidDefinition,
                        ));
                    }
                    document.definition = Some(definition);
                }

                TokenTag::Type
                | TokenTag::Input
                | TokenTag::Interface
                | TokenTag::Union
                | TokenTag::Enum
                | TokenTag::Scalar => {
                    let type_def = self.parse_type_definition(description)?;
                    document.types.push(type_def);
                }

                TokenTag::Extend => {
                    let position = self.tokens.next().position;
                    let definition = self.parse_type_definition(description)?;
                    document.extensions.push(TypeExtension {
                        definition,
                        position,
                    });
                }

                TokenTag::Directive => {
                    let directive = self.parse_directive_definition(description)?;
                    document.directives.push(directive);
                }

                _ => {
                    return Err(self.tokens.unexpected("a definition keyword"));
                }
            }
        }
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    /// `schema { query: X, mutation: Y, subscription: Z }`
    fn parse_schema_definition(&mut self) -> Result<RootOperationTypes> {
        self.tokens.next(); // `schema`
        self.tokens.expect(TokenTag::CurlyOpen, "after `schema`")?;

        let mut roots = RootOperationTypes::default();
        loop {
            self.tokens.skip_commas();
            if self.tokens.eat(TokenTag::CurlyClose) {
                return Ok(roots);
            }

            let (key, key_position) = self.tokens.expect_name("an operation kind")?;
            self.tokens.expect(TokenTag::Colon, "after operation kind")?;
            let (type_name, _) = self.tokens.expect_name("a type name")?;

            let slot = match key.as_str() {
                "query" => &mut roots.query,
                "mutation" => &mut roots.mutation,
                "subscription" => &mut roots.subscription,
                other => {
                    return Err(ParseError::new(
                        format!(
                            "unknown operation kind `{other}` in schema definition"
                        ),
                        key_position,
                        ParseErrorKind::InvalidDefinition,
                    ));
                }
            };
            if slot.is_some() {
                return Err(ParseError::new(
                    format!("duplicate `{key}` operation type"),
                    key_position,
                    ParseErrorKind::InvalidDefinition,
                ));
            }
            *slot = Some(type_name);
        }
    }

    /// Dispatches on the definition keyword under the cursor. Used for
    /// both plain definitions and the payload of `extend`.
    fn parse_type_definition(
        &mut self,
        description: Option<String>,
    ) -> Result<TypeDefinition> {
        match self.tokens.peek().kind.tag() {
            TokenTag::Type => self.parse_object_definition(description),
            TokenTag::Input => self.parse_input_definition(description),
            TokenTag::Interface => self.parse_interface_definition(description),
            TokenTag::Union => self.parse_union_definition(description),
            TokenTag::Enum => self.parse_enum_definition(description),
            TokenTag::Scalar => self.parse_scalar_definition(description),
            _ => Err(self.tokens.unexpected("a type definition keyword")),
        }
    }

    /// `type Name implements A & B @dir { field: Type }`
    fn parse_object_definition(
        &mut self,
        description: Option<String>,
    ) -> Result<TypeDefinition> {
        self.tokens.next(); // `type`
        let (name, _) = self.tokens.expect_name("a type name")?;

        let mut implements = Vec::new();
        if self.tokens.peek_name_is("implements") {
            self.tokens.next();
            loop {
                let (interface_name, _) = self.tokens.expect_name("an interface name")?;
                implements.push(interface_name);
                if !self.tokens.eat(TokenTag::Ampersand) {
                    break;
                }
            }
        }

        let directives = self.parse_directive_annotations()?;
        let fields = if self.tokens.eat(TokenTag::CurlyOpen) {
            self.parse_field_definitions()?
        } else {
            Vec::new()
        };

        let mut def = TypeDefinition::new(name, TypeDefinitionKind::Object {
            implements,
            fields,
        });
        def.description = description;
        def.directives = directives;
        Ok(def)
    }

    /// `input Name @dir { field: Type }`
    fn parse_input_definition(
        &mut self,
        description: Option<String>,
    ) -> Result<TypeDefinition> {
        self.tokens.next(); // `input`
        let (name, _) = self.tokens.expect_name("an input type name")?;
        let directives = self.parse_directive_annotations()?;
        self.tokens.expect(TokenTag::CurlyOpen, "after input type name")?;
        let fields = self.parse_field_definitions()?;

        let mut def = TypeDefinition::new(name, TypeDefinitionKind::InputObject { fields });
        def.description = description;
        def.directives = directives;
        Ok(def)
    }

    /// `interface Name @dir { field: Type }`
    fn parse_interface_definition(
        &mut self,
        description: Option<String>,
    ) -> Result<TypeDefinition> {
        self.tokens.next(); // `interface`
        let (name, _) = self.tokens.expect_name("an interface name")?;
        let directives = self.parse_directive_annotations()?;
        self.tokens.expect(TokenTag::CurlyOpen, "after interface name")?;
        let fields = self.parse_field_definitions()?;

        let mut def = TypeDefinition::new(name, TypeDefinitionKind::Interface { fields });
        def.description = description;
        def.directives = directives;
        Ok(def)
    }

    /// `union Name @dir = A | B | C`
    fn parse_union_definition(
        &mut self,
        description: Option<String>,
    ) -> Result<TypeDefinition> {
        self.tokens.next(); // `union`
        let (name, _) = self.tokens.expect_name("a union name")?;
        let directives = self.parse_directive_annotations()?;
        self.tokens.expect(TokenTag::Equals, "after union name")?;

        let mut members = Vec::new();
        self.tokens.eat(TokenTag::Pipe); // optional leading `|`
        loop {
            let (member, _) = self.tokens.expect_name("a union member type name")?;
            members.push(member);
            if !self.tokens.eat(TokenTag::Pipe) {
                break;
            }
        }

        let mut def = TypeDefinition::new(name, TypeDefinitionKind::Union { members });
        def.description = description;
        def.directives = directives;
        Ok(def)
    }

    /// `enum Name @dir { A B C }`
    fn parse_enum_definition(
        &mut self,
        description: Option<String>,
    ) -> Result<TypeDefinition> {
        self.tokens.next(); // `enum`
        let (name, _) = self.tokens.expect_name("an enum name")?;
        let directives = self.parse_directive_annotations()?;
        self.tokens.expect(TokenTag::CurlyOpen, "after enum name")?;

        let mut values = Vec::new();
        loop {
            self.tokens.skip_commas();
            if self.tokens.eat(TokenTag::CurlyClose) {
                break;
            }
            if self.tokens.peek().kind.tag() == TokenTag::Eof {
                return Err(self.tokens.error_here(
                    "unclosed `{` in enum definition",
                    ParseErrorKind::UnexpectedEof,
                ));
            }
            let value_description = self.tokens.take_description();
            let (value_name, _) = self.tokens.expect_name("an enum value")?;
            let value_directives = self.parse_directive_annotations()?;
            values.push(EnumValueDefinition {
                name: value_name,
                description: value_description,
                directives: value_directives,
            });
        }

        let mut def = TypeDefinition::new(name, TypeDefinitionKind::Enum { values });
        def.description = description;
        def.directives = directives;
        Ok(def)
    }

    /// `scalar Name @dir`
    fn parse_scalar_definition(
        &mut self,
        description: Option<String>,
    ) -> Result<TypeDefinition> {
        self.tokens.next(); // `scalar`
        let (name, _) = self.tokens.expect_name("a scalar name")?;
        let directives = self.parse_directive_annotations()?;

        let mut def = TypeDefinition::new(name, TypeDefinitionKind::Scalar);
        def.description = description;
        def.directives = directives;
        Ok(def)
    }

    /// `directive @name(args) on LOC1 | LOC2`
    fn parse_directive_definition(
        &mut self,
        description: Option<String>,
    ) -> Result<DirectiveDefinition> {
        self.tokens.next(); // `directive`
        self.tokens.expect(TokenTag::At, "after `directive`")?;
        let (name, _) = self.tokens.expect_name("a directive name")?;

        let arguments = if self.tokens.eat(TokenTag::ParenOpen) {
            self.parse_argument_definitions()?
        } else {
            Vec::new()
        };

        self.tokens.expect(TokenTag::On, "in directive definition")?;

        let mut locations = Vec::new();
        self.tokens.eat(TokenTag::Pipe);
        loop {
            let (location, _) = self.tokens.expect_name("a directive location")?;
            locations.push(location);
            if !self.tokens.eat(TokenTag::Pipe) {
                break;
            }
        }

        Ok(DirectiveDefinition {
            name,
            description,
            arguments,
            locations,
        })
    }

    // =========================================================================
    // Fields, arguments, type refs
    // =========================================================================

    /// Field definitions up to the closing `}` (already past the `{`).
    fn parse_field_definitions(&mut self) -> Result<Vec<FieldDefinition>> {
        let mut fields = Vec::new();
        loop {
            self.tokens.skip_commas();
            if self.tokens.eat(TokenTag::CurlyClose) {
                return Ok(fields);
            }
            if self.tokens.peek().kind.tag() == TokenTag::Eof {
                return Err(self.tokens.error_here(
                    "unclosed `{` in type definition",
                    ParseErrorKind::UnexpectedEof,
                ));
            }

            let description = self.tokens.take_description();
            let (name, _) = self.tokens.expect_name("a field name")?;
            let arguments = if self.tokens.eat(TokenTag::ParenOpen) {
                self.parse_argument_definitions()?
            } else {
                Vec::new()
            };
            self.tokens.expect(TokenTag::Colon, "after field name")?;
            let ty = self.parse_type_ref()?;
            let default_value = if self.tokens.eat(TokenTag::Equals) {
                Some(self.parse_value()?)
            } else {
                None
            };
            let directives = self.parse_directive_annotations()?;

            fields.push(FieldDefinition {
                name,
                description,
                arguments,
                ty,
                default_value,
                directives,
            });
        }
    }

    /// Argument definitions up to the closing `)` (already past the `(`).
    fn parse_argument_definitions(&mut self) -> Result<Vec<ArgumentDefinition>> {
        let mut arguments = Vec::new();
        loop {
            self.tokens.skip_commas();
            if self.tokens.eat(TokenTag::ParenClose) {
                return Ok(arguments);
            }
            if self.tokens.peek().kind.tag() == TokenTag::Eof {
                return Err(self.tokens.error_here(
                    "unclosed `(` in argument definitions",
                    ParseErrorKind::UnexpectedEof,
                ));
            }

            let description = self.tokens.take_description();
            let (name, _) = self.tokens.expect_name("an argument name")?;
            self.tokens.expect(TokenTag::Colon, "after argument name")?;
            let ty = self.parse_type_ref()?;
            let default_value = if self.tokens.eat(TokenTag::Equals) {
                Some(self.parse_value()?)
            } else {
                None
            };
            let directives = self.parse_directive_annotations()?;

            arguments.push(ArgumentDefinition {
                name,
                description,
                ty,
                default_value,
                directives,
            });
        }
    }

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

    // =========================================================================
    // Directive annotations and values
    // =========================================================================

    /// Zero or more `@name(arg: value, ...)` annotations.
    fn parse_directive_annotations(&mut self) -> Result<Vec<DirectiveAnnotation>> {
        let mut annotations = Vec::new();
        while self.tokens.eat(TokenTag::At) {
            let (name, _) = self.tokens.expect_name("a directive name")?;
            let mut annotation = DirectiveAnnotation::new(name);

            if self.tokens.eat(TokenTag::ParenOpen) {
                loop {
                    self.tokens.skip_commas();
                    if self.tokens.eat(TokenTag::ParenClose) {
                        break;
                    }
                    if self.tokens.peek().kind.tag() == TokenTag::Eof {
                        return Err(self.tokens.error_here(
                            "unclosed `(` in directive arguments",
                            ParseErrorKind::UnexpectedEof,
                        ));
                    }
                    let (arg_name, _) = self.tokens.expect_name("an argument name")?;
                    self.tokens.expect(TokenTag::Colon, "after argument name")?;
                    let value = self.parse_value()?;
                    annotation.arguments.push((arg_name, value));
                }
            }
            annotations.push(annotation);
        }
        Ok(annotations)
    }

    /// One const value: scalar literal, enum name, list, or input object.
    /// Variables never occur in schema documents.
    fn parse_value(&mut self) -> Result<Value> {
        let token = self.tokens.next();
        match token.kind {
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
                    if self.tokens.peek().kind.tag() == TokenTag::Eof {
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
                    if self.tokens.peek().kind.tag() == TokenTag::Eof {
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
            TokenKind::Dollar => Err(ParseError::new(
                "variables are not allowed in schema documents",
                token.position,
                ParseErrorKind::InvalidValue,
            )),
            other => Err(ParseError::new(
                format!("expected a value, found {}", other.describe()),
                token.position,
                ParseErrorKind::InvalidValue,
            )),
        }
    }
}
