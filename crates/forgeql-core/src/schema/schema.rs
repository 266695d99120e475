use forgeql_parser::executable::OperationKind;
use forgeql_parser::schema::DirectiveDefinition;
use forgeql_parser::schema::RootOperationTypes;
use forgeql_parser::schema::TypeDefinition;
use indexmap::IndexMap;

/// A fully assembled, immutable GraphQL schema.
///
/// Built once by [`SchemaBuilder`](crate::schema::SchemaBuilder) at
/// start-up and read-only afterwards: the types map doubles as the
/// by-name index (insertion order is preserved, so introspection output
/// is deterministic), and the `implementors` table is derived in the same
/// build pass. Nothing here exposes a mutator, so a schema can be shared
/// across request workers behind an `Arc` without further ceremony.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) definition: RootOperationTypes,
    pub(crate) types: IndexMap<String, TypeDefinition>,
    pub(crate) directives: Vec<DirectiveDefinition>,
    /// interface name -> object type names whose `implements` list
    /// contains it, in definition order.
    pub(crate) implementors: IndexMap<String, Vec<String>>,
}

impl Schema {
    /// The root operation type names (`schema { ... }` block, or the
    /// `Query`/`Mutation`/`Subscription` defaults).
    pub fn definition(&self) -> &RootOperationTypes {
        &self.definition
    }

    /// All type definitions, introspection and built-in scalars included,
    /// keyed by name in definition order.
    pub fn types(&self) -> &IndexMap<String, TypeDefinition> {
        &self.types
    }

    /// All directive definitions.
    pub fn directives(&self) -> &[DirectiveDefinition] {
        &self.directives
    }

    /// Looks up any type definition by name.
    pub fn type_definition(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    /// Looks up a union definition by name.
    pub fn union_definition(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name).filter(|t| t.is_union())
    }

    /// Looks up an interface definition by name.
    pub fn interface_definition(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name).filter(|t| t.is_interface())
    }

    /// The object types implementing the named interface, in definition
    /// order. Empty for unknown names.
    pub fn implementors_of(&self, interface_name: &str) -> &[String] {
        self.implementors
            .get(interface_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The root operation type for an operation kind, if the schema
    /// defines one.
    pub fn operation_root(&self, kind: OperationKind) -> Option<&TypeDefinition> {
        let name = match kind {
            OperationKind::Query => self.definition.query.as_deref(),
            OperationKind::Mutation => self.definition.mutation.as_deref(),
            OperationKind::Subscription => self.definition.subscription.as_deref(),
        }?;
        self.types.get(name)
    }

    /// The Query root operation type.
    ///
    /// Every built schema has one; the builder rejects schemas without a
    /// query type.
    pub fn query_type(&self) -> &TypeDefinition {
        self.operation_root(OperationKind::Query)
            .expect("built schemas always define a query root")
    }

    pub fn is_builtin_scalar(name: &str) -> bool {
        crate::schema::BUILTIN_SCALARS.contains(&name)
    }
}
