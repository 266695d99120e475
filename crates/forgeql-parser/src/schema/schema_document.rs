use crate::SourcePosition;
use crate::schema::DirectiveDefinition;
use crate::schema::TypeDefinition;

/// The root operation type names declared by a `schema { ... }` block.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RootOperationTypes {
    pub query: Option<String>,
    pub mutation: Option<String>,
    pub subscription: Option<String>,
}

/// An `extend <kind> Name ...` definition, merged into the extended
/// definition by name after all documents are loaded.
///
/// The payload reuses [`TypeDefinition`]: an extension carries the same
/// shape of content as the definition it extends.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeExtension {
    pub definition: TypeDefinition,
    pub position: SourcePosition,
}

/// The raw parse result for one SDL document.
///
/// This is syntax only: duplicate detection, extension merging, reference
/// checking, and index construction happen when documents are assembled
/// into a schema.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SchemaDocument {
    pub definition: Option<RootOperationTypes>,
    pub types: Vec<TypeDefinition>,
    pub extensions: Vec<TypeExtension>,
    pub directives: Vec<DirectiveDefinition>,
}
