//! The runtime projection of a schema into introspection values.
//!
//! The projection is driven by the selection set of the introspection
//! query itself: each builder method iterates the children of the query
//! node it answers and switches on the child name, populating only what
//! was asked for. Unrequested branches stay `None` and are omitted from
//! the serialized response.

use crate::introspection::DirectiveIntrospection;
use crate::introspection::EnumValueIntrospection;
use crate::introspection::FieldIntrospection;
use crate::introspection::GraphQLError;
use crate::introspection::InputValueIntrospection;
use crate::introspection::IntrospectionData;
use crate::introspection::IntrospectionError;
use crate::introspection::IntrospectionResponse;
use crate::introspection::IntrospectionTypeKind;
use crate::introspection::SchemaIntrospection;
use crate::introspection::TypeIntrospection;
use crate::schema::Schema;
use forgeql_parser::TypeRef;
use forgeql_parser::Value;
use forgeql_parser::executable::Document;
use forgeql_parser::executable::Field;
use forgeql_parser::executable::OperationKind;
use forgeql_parser::executable::Selection;
use forgeql_parser::schema::ArgumentDefinition;
use forgeql_parser::schema::DirectiveDefinition;
use forgeql_parser::schema::EnumValueDefinition;
use forgeql_parser::schema::FieldDefinition;
use forgeql_parser::schema::TypeDefinition;
use forgeql_parser::schema::TypeDefinitionKind;

type Result<T> = std::result::Result<T, IntrospectionError>;

/// Projects one schema into `__Schema`/`__Type` responses.
pub struct IntrospectionBuilder<'schema> {
    schema: &'schema Schema,
}

impl<'schema> IntrospectionBuilder<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self { schema }
    }

    /// Answers the introspection fields of a document's query operation,
    /// folded into the GraphQL `{ data, errors }` envelope.
    pub fn respond(&self, document: &Document) -> IntrospectionResponse {
        match self.resolve(document) {
            Ok(data) => IntrospectionResponse {
                data: Some(data),
                errors: Vec::new(),
            },
            Err(error) => IntrospectionResponse {
                data: None,
                errors: vec![GraphQLError {
                    message: error.to_string(),
                }],
            },
        }
    }

    /// Resolves `__schema` and `__type` root fields of the document's
    /// query operation.
    pub fn resolve(&self, document: &Document) -> Result<IntrospectionData> {
        let operation = document
            .operation_of_kind(OperationKind::Query)
            .ok_or(IntrospectionError::NotAnIntrospectionQuery)?;

        let mut data = IntrospectionData::default();
        let mut matched = false;
        for field in self.flatten_fields(&operation.selections, document)? {
            match field.name.as_str() {
                "__schema" => {
                    data.schema = Some(self.build_schema(field, document)?);
                    matched = true;
                }
                "__type" => {
                    data.type_lookup = Some(self.resolve_type_lookup(field, document)?);
                    matched = true;
                }
                _ => {}
            }
        }

        if !matched {
            return Err(IntrospectionError::NotAnIntrospectionQuery);
        }
        Ok(data)
    }

    /// `__type(name: "...")`: `None` (GraphQL `null`) for unknown names.
    fn resolve_type_lookup(
        &self,
        node: &Field,
        document: &Document,
    ) -> Result<Option<TypeIntrospection>> {
        let name = match node.argument("name") {
            Some(Value::String(name)) => name,
            Some(_) => return Err(IntrospectionError::InvalidNameArgument),
            None => return Err(IntrospectionError::MissingNameArgument),
        };

        match self.schema.type_definition(name) {
            Some(type_def) => Ok(Some(self.build_type(type_def, node, document)?)),
            None => Ok(None),
        }
    }

    // =========================================================================
    // __Schema
    // =========================================================================

    fn build_schema(&self, node: &Field, document: &Document) -> Result<SchemaIntrospection> {
        let mut out = SchemaIntrospection::default();

        for child in self.flatten_fields(&node.selections, document)? {
            match child.name.as_str() {
                "types" => {
                    let mut types = Vec::with_capacity(self.schema.types().len());
                    for type_def in self.schema.types().values() {
                        types.push(self.build_type(type_def, child, document)?);
                    }
                    out.types = Some(types);
                }
                "queryType" => {
                    out.query_type =
                        Some(self.build_type(self.schema.query_type(), child, document)?);
                }
                "mutationType" => {
                    out.mutation_type = Some(
                        match self.schema.operation_root(OperationKind::Mutation) {
                            Some(type_def) => {
                                Some(self.build_type(type_def, child, document)?)
                            }
                            None => None,
                        },
                    );
                }
                "subscriptionType" => {
                    out.subscription_type = Some(
                        match self.schema.operation_root(OperationKind::Subscription) {
                            Some(type_def) => {
                                Some(self.build_type(type_def, child, document)?)
                            }
                            None => None,
                        },
                    );
                }
                "directives" => {
                    let mut directives = Vec::new();
                    for directive in self.schema.directives() {
                        directives.push(self.build_directive(directive, child, document)?);
                    }
                    out.directives = Some(directives);
                }
                _ => {}
            }
        }
        Ok(out)
    }

    // =========================================================================
    // __Type
    // =========================================================================

    fn build_type(
        &self,
        type_def: &TypeDefinition,
        node: &Field,
        document: &Document,
    ) -> Result<TypeIntrospection> {
        let mut out = TypeIntrospection::default();

        for child in self.flatten_fields(&node.selections, document)? {
            match child.name.as_str() {
                "kind" => out.kind = Some(kind_of(type_def)),
                "name" => out.name = Some(Some(type_def.name.clone())),
                "description" => out.description = Some(type_def.description.clone()),

                "fields" => {
                    let include_deprecated = bool_argument(child, "includeDeprecated");
                    out.fields = Some(match &type_def.kind {
                        TypeDefinitionKind::Object { fields, .. }
                        | TypeDefinitionKind::Interface { fields } => {
                            let mut built = Vec::new();
                            for field_def in fields {
                                if !include_deprecated && field_def.deprecation().is_some() {
                                    continue;
                                }
                                built.push(self.build_field(field_def, child, document)?);
                            }
                            Some(built)
                        }
                        _ => None,
                    });
                }

                "interfaces" => {
                    out.interfaces = Some(match &type_def.kind {
                        TypeDefinitionKind::Object { implements, .. } => {
                            let mut built = Vec::new();
                            for interface_name in implements {
                                built.push(self.build_named_type(
                                    interface_name,
                                    child,
                                    document,
                                )?);
                            }
                            Some(built)
                        }
                        TypeDefinitionKind::Interface { .. } => Some(Vec::new()),
                        _ => None,
                    });
                }

                "possibleTypes" => {
                    out.possible_types = Some(match &type_def.kind {
                        TypeDefinitionKind::Union { members } => {
                            let mut built = Vec::new();
                            for member in members {
                                built.push(self.build_named_type(member, child, document)?);
                            }
                            Some(built)
                        }
                        TypeDefinitionKind::Interface { .. } => {
                            let mut built = Vec::new();
                            for implementor in self.schema.implementors_of(&type_def.name) {
                                built.push(self.build_named_type(
                                    implementor,
                                    child,
                                    document,
                                )?);
                            }
                            Some(built)
                        }
                        _ => None,
                    });
                }

                "enumValues" => {
                    let include_deprecated = bool_argument(child, "includeDeprecated");
                    out.enum_values = Some(match &type_def.kind {
                        TypeDefinitionKind::Enum { values } => {
                            let mut built = Vec::new();
                            for value in values {
                                if !include_deprecated && value.deprecation().is_some() {
                                    continue;
                                }
                                built.push(self.build_enum_value(value, child, document)?);
                            }
                            Some(built)
                        }
                        _ => None,
                    });
                }

                "inputFields" => {
                    out.input_fields = Some(match &type_def.kind {
                        TypeDefinitionKind::InputObject { fields } => {
                            let mut built = Vec::new();
                            for field_def in fields {
                                built.push(self.build_input_field(field_def, child, document)?);
                            }
                            Some(built)
                        }
                        _ => None,
                    });
                }

                // Named types terminate a wrapper chain.
                "ofType" => out.of_type = Some(None),

                _ => {}
            }
        }
        Ok(out)
    }

    fn build_named_type(
        &self,
        name: &str,
        node: &Field,
        document: &Document,
    ) -> Result<TypeIntrospection> {
        match self.schema.type_definition(name) {
            Some(type_def) => self.build_type(type_def, node, document),
            // Unreachable after the builder's reference check; project an
            // empty object rather than fail the whole response.
            None => Ok(TypeIntrospection::default()),
        }
    }

    /// Projects a TypeRef as the `NON_NULL -> (LIST -> ...) -> primitive`
    /// wrapper chain, one `__Type` per wrapper.
    fn build_type_ref(
        &self,
        type_ref: &TypeRef,
        node: &Field,
        document: &Document,
    ) -> Result<TypeIntrospection> {
        if !type_ref.is_nullable() {
            let inner = nullable_clone(type_ref);
            return self.build_wrapper(IntrospectionTypeKind::NonNull, &inner, node, document);
        }

        match type_ref {
            TypeRef::List { element, .. } => {
                self.build_wrapper(IntrospectionTypeKind::List, element, node, document)
            }
            TypeRef::Named { name, .. } => self.build_named_type(name, node, document),
        }
    }

    /// One `LIST` or `NON_NULL` wrapper: `name` is null and `ofType`
    /// carries the inner chain.
    fn build_wrapper(
        &self,
        kind: IntrospectionTypeKind,
        inner: &TypeRef,
        node: &Field,
        document: &Document,
    ) -> Result<TypeIntrospection> {
        let mut out = TypeIntrospection::default();
        for child in self.flatten_fields(&node.selections, document)? {
            match child.name.as_str() {
                "kind" => out.kind = Some(kind),
                "name" => out.name = Some(None),
                "description" => out.description = Some(None),
                "ofType" => {
                    out.of_type = Some(Some(Box::new(
                        self.build_type_ref(inner, child, document)?,
                    )));
                }
                _ => {}
            }
        }
        Ok(out)
    }

    // =========================================================================
    // __Field, __InputValue, __EnumValue, __Directive
    // =========================================================================

    fn build_field(
        &self,
        field_def: &FieldDefinition,
        node: &Field,
        document: &Document,
    ) -> Result<FieldIntrospection> {
        let mut out = FieldIntrospection::default();
        for child in self.flatten_fields(&node.selections, document)? {
            match child.name.as_str() {
                "name" => out.name = Some(field_def.name.clone()),
                "description" => out.description = Some(field_def.description.clone()),
                "args" => {
                    let mut args = Vec::new();
                    for argument in &field_def.arguments {
                        args.push(self.build_input_value(argument, child, document)?);
                    }
                    out.args = Some(args);
                }
                "type" => {
                    out.ty = Some(self.build_type_ref(&field_def.ty, child, document)?);
                }
                "isDeprecated" => {
                    out.is_deprecated = Some(field_def.deprecation().is_some());
                }
                "deprecationReason" => {
                    out.deprecation_reason =
                        Some(field_def.deprecation().flatten().map(str::to_string));
                }
                _ => {}
            }
        }
        Ok(out)
    }

    fn build_input_value(
        &self,
        argument: &ArgumentDefinition,
        node: &Field,
        document: &Document,
    ) -> Result<InputValueIntrospection> {
        let mut out = InputValueIntrospection::default();
        for child in self.flatten_fields(&node.selections, document)? {
            match child.name.as_str() {
                "name" => out.name = Some(argument.name.clone()),
                "description" => out.description = Some(argument.description.clone()),
                "type" => {
                    out.ty = Some(self.build_type_ref(&argument.ty, child, document)?);
                }
                "defaultValue" => {
                    out.default_value = Some(
                        argument.default_value.as_ref().map(ToString::to_string),
                    );
                }
                _ => {}
            }
        }
        Ok(out)
    }

    /// Input-object fields project as `__InputValue`s.
    fn build_input_field(
        &self,
        field_def: &FieldDefinition,
        node: &Field,
        document: &Document,
    ) -> Result<InputValueIntrospection> {
        let mut out = InputValueIntrospection::default();
        for child in self.flatten_fields(&node.selections, document)? {
            match child.name.as_str() {
                "name" => out.name = Some(field_def.name.clone()),
                "description" => out.description = Some(field_def.description.clone()),
                "type" => {
                    out.ty = Some(self.build_type_ref(&field_def.ty, child, document)?);
                }
                "defaultValue" => {
                    out.default_value = Some(
                        field_def.default_value.as_ref().map(ToString::to_string),
                    );
                }
                _ => {}
            }
        }
        Ok(out)
    }

    fn build_enum_value(
        &self,
        value: &EnumValueDefinition,
        node: &Field,
        document: &Document,
    ) -> Result<EnumValueIntrospection> {
        let mut out = EnumValueIntrospection::default();
        for child in self.flatten_fields(&node.selections, document)? {
            match child.name.as_str() {
                "name" => out.name = Some(value.name.clone()),
                "description" => out.description = Some(value.description.clone()),
                "isDeprecated" => {
                    out.is_deprecated = Some(value.deprecation().is_some());
                }
                "deprecationReason" => {
                    out.deprecation_reason =
                        Some(value.deprecation().flatten().map(str::to_string));
                }
                _ => {}
            }
        }
        Ok(out)
    }

    fn build_directive(
        &self,
        directive: &DirectiveDefinition,
        node: &Field,
        document: &Document,
    ) -> Result<DirectiveIntrospection> {
        let mut out = DirectiveIntrospection::default();
        for child in self.flatten_fields(&node.selections, document)? {
            match child.name.as_str() {
                "name" => out.name = Some(directive.name.clone()),
                "description" => out.description = Some(directive.description.clone()),
                "locations" => out.locations = Some(directive.locations.clone()),
                "args" => {
                    let mut args = Vec::new();
                    for argument in &directive.arguments {
                        args.push(self.build_input_value(argument, child, document)?);
                    }
                    out.args = Some(args);
                }
                _ => {}
            }
        }
        Ok(out)
    }

    // =========================================================================
    // Selection flattening
    // =========================================================================

    /// The field children of a selection set with fragment spreads and
    /// inline fragments resolved in place, in source order.
    fn flatten_fields<'d>(
        &self,
        selections: &'d [Selection],
        document: &'d Document,
    ) -> Result<Vec<&'d Field>> {
        let mut fields = Vec::new();
        self.flatten_into(selections, document, &mut fields)?;
        Ok(fields)
    }

    fn flatten_into<'d>(
        &self,
        selections: &'d [Selection],
        document: &'d Document,
        fields: &mut Vec<&'d Field>,
    ) -> Result<()> {
        for selection in selections {
            match selection {
                Selection::Field(field) => fields.push(field),
                Selection::InlineFragment(inline) => {
                    self.flatten_into(&inline.selections, document, fields)?;
                }
                Selection::FragmentSpread(spread) => {
                    let fragment = document.fragment(&spread.name).ok_or_else(|| {
                        IntrospectionError::UndefinedFragment {
                            name: spread.name.clone(),
                        }
                    })?;
                    self.flatten_into(&fragment.selections, document, fields)?;
                }
            }
        }
        Ok(())
    }
}

fn kind_of(type_def: &TypeDefinition) -> IntrospectionTypeKind {
    match &type_def.kind {
        TypeDefinitionKind::Object { .. } => IntrospectionTypeKind::Object,
        TypeDefinitionKind::InputObject { .. } => IntrospectionTypeKind::InputObject,
        TypeDefinitionKind::Interface { .. } => IntrospectionTypeKind::Interface,
        TypeDefinitionKind::Union { .. } => IntrospectionTypeKind::Union,
        TypeDefinitionKind::Enum { .. } => IntrospectionTypeKind::Enum,
        TypeDefinitionKind::Scalar => IntrospectionTypeKind::Scalar,
    }
}

/// The same reference with its outermost non-null mark stripped.
fn nullable_clone(type_ref: &TypeRef) -> TypeRef {
    match type_ref {
        TypeRef::Named { name, .. } => TypeRef::Named {
            name: name.clone(),
            nullable: true,
        },
        TypeRef::List { element, .. } => TypeRef::List {
            element: element.clone(),
            nullable: true,
        },
    }
}

fn bool_argument(field: &Field, name: &str) -> bool {
    matches!(field.argument(name), Some(Value::Boolean(true)))
}
