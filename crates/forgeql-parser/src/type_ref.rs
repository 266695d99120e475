/// A reference to a type at a field, argument, or variable site.
///
/// Lists nest through `element`; a `Named` node is the leaf of every
/// chain, so unwrapping always terminates. `nullable` is `false` when the
/// wrapper at that level carries a `!` suffix: `[[Int!]!]!` is
/// `List(nullable: false, List(nullable: false, Named("Int", nullable: false)))`.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeRef {
    Named {
        name: String,
        nullable: bool,
    },
    List {
        element: Box<TypeRef>,
        nullable: bool,
    },
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named {
            name: name.into(),
            nullable: true,
        }
    }

    pub fn non_null_named(name: impl Into<String>) -> Self {
        TypeRef::Named {
            name: name.into(),
            nullable: false,
        }
    }

    /// The name of the primitive (leaf) type, reached by unwrapping list
    /// wrappers.
    pub fn leaf_name(&self) -> &str {
        match self {
            TypeRef::Named { name, .. } => name,
            TypeRef::List { element, .. } => element.leaf_name(),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, TypeRef::List { .. })
    }

    pub fn is_nullable(&self) -> bool {
        match self {
            TypeRef::Named { nullable, .. } => *nullable,
            TypeRef::List { nullable, .. } => *nullable,
        }
    }

    /// The directly wrapped type of a list wrapper; `None` at the leaf.
    pub fn element(&self) -> Option<&TypeRef> {
        match self {
            TypeRef::Named { .. } => None,
            TypeRef::List { element, .. } => Some(element),
        }
    }
}

impl std::fmt::Display for TypeRef {
    /// Renders the reference the way it is written in SDL, e.g. `[Int!]!`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeRef::Named { name, nullable } => {
                write!(f, "{name}{}", if *nullable { "" } else { "!" })
            }
            TypeRef::List { element, nullable } => {
                write!(f, "[{element}]{}", if *nullable { "" } else { "!" })
            }
        }
    }
}
