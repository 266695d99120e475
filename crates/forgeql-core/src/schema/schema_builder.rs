use crate::schema::BUILTIN_SCALARS;
use crate::schema::Schema;
use crate::schema::SchemaError;
use crate::schema::bootstrap::INTROSPECTION_SDL;
use forgeql_parser::SchemaParser;
use forgeql_parser::executable::OperationKind;
use forgeql_parser::schema::RootOperationTypes;
use forgeql_parser::schema::SchemaDocument;
use forgeql_parser::schema::TypeDefinition;
use forgeql_parser::schema::TypeDefinitionKind;
use forgeql_parser::schema::TypeExtension;
use indexmap::IndexMap;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaError>;

/// Assembles parsed SDL documents into an immutable, indexed [`Schema`].
///
/// Loading accumulates raw documents; `build()` performs the post-pass in
/// order: introspection bootstrap, document merging with duplicate
/// detection, type-extension merging, root-operation resolution,
/// reference checking, and index construction. The schema handed back is
/// never mutated again.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    documents: Vec<SchemaDocument>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses one SDL buffer and queues it for assembly.
    pub fn load_str(mut self, sdl: &str) -> Result<Self> {
        self.documents.push(SchemaParser::parse(sdl)?);
        Ok(self)
    }

    /// Reads and parses one SDL file.
    pub fn load_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let sdl = std::fs::read_to_string(path).map_err(|source| {
            SchemaError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        })?;
        self.load_str(&sdl)
    }

    /// Reads and parses a set of SDL files, in order.
    pub fn load_files<P: AsRef<Path>>(
        mut self,
        paths: impl IntoIterator<Item = P>,
    ) -> Result<Self> {
        for path in paths {
            self = self.load_file(path)?;
        }
        Ok(self)
    }

    /// Assembles everything loaded so far into a [`Schema`].
    pub fn build(self) -> Result<Schema> {
        let mut types: IndexMap<String, TypeDefinition> = IndexMap::new();
        let mut directives = Vec::new();
        let mut definition = RootOperationTypes::default();
        let mut extensions: Vec<TypeExtension> = Vec::new();

        // Built-in scalars are always defined.
        for name in BUILTIN_SCALARS {
            types.insert(
                name.to_string(),
                TypeDefinition::new(name, TypeDefinitionKind::Scalar),
            );
        }

        // The introspection model and built-in directives come before any
        // user SDL.
        let bootstrap = SchemaParser::parse(INTROSPECTION_SDL)
            .expect("the canonical introspection schema parses");
        for type_def in bootstrap.types {
            types.insert(type_def.name.clone(), type_def);
        }
        directives.extend(bootstrap.directives);

        for document in self.documents {
            if let Some(roots) = document.definition {
                merge_root_operation_types(&mut definition, roots)?;
            }

            for type_def in document.types {
                if types.contains_key(&type_def.name) {
                    return Err(SchemaError::DuplicateTypeDefinition {
                        type_name: type_def.name,
                    });
                }
                types.insert(type_def.name.clone(), type_def);
            }

            for directive in document.directives {
                if directives.iter().any(|d| d.name == directive.name) {
                    return Err(SchemaError::DuplicateDirectiveDefinition {
                        directive_name: directive.name,
                    });
                }
                directives.push(directive);
            }

            extensions.extend(document.extensions);
        }

        for extension in extensions {
            merge_extension(&mut types, extension)?;
        }

        resolve_root_operation_defaults(&mut definition, &types);
        check_root_operation_types(&definition, &types)?;
        check_references(&types)?;

        let implementors = build_implementors(&types);

        Ok(Schema {
            definition,
            types,
            directives,
            implementors,
        })
    }
}

/// Folds one document's `schema { ... }` block into the accumulated root
/// operation declaration, rejecting re-declarations.
fn merge_root_operation_types(
    accumulated: &mut RootOperationTypes,
    roots: RootOperationTypes,
) -> Result<()> {
    let slots = [
        (OperationKind::Query, roots.query, &mut accumulated.query),
        (OperationKind::Mutation, roots.mutation, &mut accumulated.mutation),
        (
            OperationKind::Subscription,
            roots.subscription,
            &mut accumulated.subscription,
        ),
    ];
    for (kind, incoming, slot) in slots {
        if let Some(type_name) = incoming {
            if slot.is_some() {
                return Err(SchemaError::DuplicateOperationType { kind });
            }
            *slot = Some(type_name);
        }
    }
    Ok(())
}

/// Merges an `extend` payload into the definition it targets. The
/// extension must target a defined type of the same kind.
fn merge_extension(
    types: &mut IndexMap<String, TypeDefinition>,
    extension: TypeExtension,
) -> Result<()> {
    let incoming = extension.definition;
    let Some(existing) = types.get_mut(&incoming.name) else {
        return Err(SchemaError::ExtensionOfUndefinedType {
            type_name: incoming.name,
        });
    };

    let mismatch = SchemaError::ExtensionKindMismatch {
        type_name: incoming.name.clone(),
        kind: existing.kind_str(),
        extension_kind: kind_str_of(&incoming.kind),
    };

    match (&mut existing.kind, incoming.kind) {
        (
            TypeDefinitionKind::Object {
                fields, implements, ..
            },
            TypeDefinitionKind::Object {
                fields: new_fields,
                implements: new_implements,
            },
        ) => {
            fields.extend(new_fields);
            implements.extend(new_implements);
        }
        (
            TypeDefinitionKind::InputObject { fields },
            TypeDefinitionKind::InputObject { fields: new_fields },
        ) => fields.extend(new_fields),
        (
            TypeDefinitionKind::Interface { fields },
            TypeDefinitionKind::Interface { fields: new_fields },
        ) => fields.extend(new_fields),
        (
            TypeDefinitionKind::Union { members },
            TypeDefinitionKind::Union { members: new_members },
        ) => members.extend(new_members),
        (
            TypeDefinitionKind::Enum { values },
            TypeDefinitionKind::Enum { values: new_values },
        ) => values.extend(new_values),
        (TypeDefinitionKind::Scalar, TypeDefinitionKind::Scalar) => {}
        _ => return Err(mismatch),
    }

    existing.directives.extend(incoming.directives);
    Ok(())
}

fn kind_str_of(kind: &TypeDefinitionKind) -> &'static str {
    match kind {
        TypeDefinitionKind::Object { .. } => "object",
        TypeDefinitionKind::InputObject { .. } => "input object",
        TypeDefinitionKind::Interface { .. } => "interface",
        TypeDefinitionKind::Union { .. } => "union",
        TypeDefinitionKind::Enum { .. } => "enum",
        TypeDefinitionKind::Scalar => "scalar",
    }
}

/// Absent an explicit `schema { ... }` block, object types named
/// `Query`/`Mutation`/`Subscription` serve as the root operation types.
fn resolve_root_operation_defaults(
    definition: &mut RootOperationTypes,
    types: &IndexMap<String, TypeDefinition>,
) {
    let defaults = [
        (&mut definition.query, "Query"),
        (&mut definition.mutation, "Mutation"),
        (&mut definition.subscription, "Subscription"),
    ];
    for (slot, default_name) in defaults {
        if slot.is_none() && types.get(default_name).is_some_and(TypeDefinition::is_object)
        {
            *slot = Some(default_name.to_string());
        }
    }
}

/// Every declared root operation type must be a defined object type, and
/// a query root must exist.
fn check_root_operation_types(
    definition: &RootOperationTypes,
    types: &IndexMap<String, TypeDefinition>,
) -> Result<()> {
    let declared = [
        (OperationKind::Query, definition.query.as_deref()),
        (OperationKind::Mutation, definition.mutation.as_deref()),
        (OperationKind::Subscription, definition.subscription.as_deref()),
    ];
    for (kind, type_name) in declared {
        let Some(type_name) = type_name else { continue };
        if !types.get(type_name).is_some_and(TypeDefinition::is_object) {
            return Err(SchemaError::InvalidOperationType {
                kind,
                type_name: type_name.to_string(),
            });
        }
    }

    if definition.query.is_none() {
        return Err(SchemaError::NoQueryOperationType);
    }
    Ok(())
}

/// Every name referenced by a field, argument, union member, or
/// `implements` list must resolve to a defined type. Built-in scalars are
/// seeded into the types map, so a plain lookup covers them.
fn check_references(types: &IndexMap<String, TypeDefinition>) -> Result<()> {
    let check = |type_name: &str, site: String| -> Result<()> {
        if types.contains_key(type_name) {
            Ok(())
        } else {
            Err(SchemaError::UndefinedTypeReference {
                type_name: type_name.to_string(),
                site,
            })
        }
    };

    for type_def in types.values() {
        for field in type_def.fields() {
            check(
                field.ty.leaf_name(),
                format!("field {}.{}", type_def.name, field.name),
            )?;
            for argument in &field.arguments {
                check(
                    argument.ty.leaf_name(),
                    format!(
                        "argument {}.{}({}:)",
                        type_def.name, field.name, argument.name
                    ),
                )?;
            }
        }

        if let TypeDefinitionKind::Union { members } = &type_def.kind {
            for member in members {
                check(member, format!("union {}", type_def.name))?;
            }
        }

        for interface_name in type_def.implements() {
            check(
                interface_name,
                format!("implements list of {}", type_def.name),
            )?;
        }
    }
    Ok(())
}

/// interface name -> object types whose `implements` list contains it.
fn build_implementors(
    types: &IndexMap<String, TypeDefinition>,
) -> IndexMap<String, Vec<String>> {
    let mut implementors: IndexMap<String, Vec<String>> = IndexMap::new();
    for type_def in types.values() {
        for interface_name in type_def.implements() {
            implementors
                .entry(interface_name.clone())
                .or_default()
                .push(type_def.name.clone());
        }
    }
    implementors
}
