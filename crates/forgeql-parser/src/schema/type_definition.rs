use crate::schema::DirectiveAnnotation;
use crate::schema::FieldDefinition;
use crate::schema::field_definition::deprecation_of;

/// A named type definition in a schema.
///
/// The variant payloads live in [`TypeDefinitionKind`]; everything a
/// definition kind shares (name, description, applied directives, the
/// introspection flag) lives here.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeDefinition {
    pub name: String,
    pub description: Option<String>,
    pub kind: TypeDefinitionKind,
    pub directives: Vec<DirectiveAnnotation>,
    /// Set for names beginning with `__` (the introspection model types
    /// merged into every schema).
    pub is_introspection: bool,
}

/// The tagged variant over the kinds of type definition.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeDefinitionKind {
    Object {
        implements: Vec<String>,
        fields: Vec<FieldDefinition>,
    },
    InputObject {
        fields: Vec<FieldDefinition>,
    },
    Interface {
        fields: Vec<FieldDefinition>,
    },
    Union {
        members: Vec<String>,
    },
    Enum {
        values: Vec<EnumValueDefinition>,
    },
    Scalar,
}

/// One value of an enum definition.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition {
    pub name: String,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
}

impl EnumValueDefinition {
    pub fn deprecation(&self) -> Option<Option<&str>> {
        deprecation_of(&self.directives)
    }
}

impl TypeDefinition {
    pub fn new(
        name: impl Into<String>,
        kind: TypeDefinitionKind,
    ) -> Self {
        let name = name.into();
        let is_introspection = name.starts_with("__");
        Self {
            name,
            description: None,
            kind,
            directives: Vec::new(),
            is_introspection,
        }
    }

    /// The fields of an object, interface, or input definition; empty for
    /// union, enum, and scalar definitions.
    pub fn fields(&self) -> &[FieldDefinition] {
        match &self.kind {
            TypeDefinitionKind::Object { fields, .. }
            | TypeDefinitionKind::InputObject { fields }
            | TypeDefinitionKind::Interface { fields } => fields,
            _ => &[],
        }
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields().iter().find(|f| f.name == name)
    }

    /// The interface names an object definition implements.
    pub fn implements(&self) -> &[String] {
        match &self.kind {
            TypeDefinitionKind::Object { implements, .. } => implements,
            _ => &[],
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self.kind, TypeDefinitionKind::Object { .. })
    }

    pub fn is_interface(&self) -> bool {
        matches!(self.kind, TypeDefinitionKind::Interface { .. })
    }

    pub fn is_union(&self) -> bool {
        matches!(self.kind, TypeDefinitionKind::Union { .. })
    }

    /// Composite types have fields or members; the opposite of a leaf.
    pub fn is_composite(&self) -> bool {
        matches!(
            self.kind,
            TypeDefinitionKind::Object { .. }
                | TypeDefinitionKind::Interface { .. }
                | TypeDefinitionKind::Union { .. }
        )
    }

    /// Leaf types (scalars and enums) must not carry selection sets.
    pub fn is_leaf(&self) -> bool {
        matches!(
            self.kind,
            TypeDefinitionKind::Scalar | TypeDefinitionKind::Enum { .. }
        )
    }

    /// A short noun for diagnostics: "object", "union", ...
    pub fn kind_str(&self) -> &'static str {
        match &self.kind {
            TypeDefinitionKind::Object { .. } => "object",
            TypeDefinitionKind::InputObject { .. } => "input object",
            TypeDefinitionKind::Interface { .. } => "interface",
            TypeDefinitionKind::Union { .. } => "union",
            TypeDefinitionKind::Enum { .. } => "enum",
            TypeDefinitionKind::Scalar => "scalar",
        }
    }
}
