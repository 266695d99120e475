use forgeql_parser::executable::OperationKind;

/// A diagnostic produced while validating a document against a schema.
///
/// Validation is fail-fast: the first error encountered is returned. The
/// `InField`/`InFragment` variants wrap the error raised deeper in the
/// descent, so the rendered message carries the path to the offending
/// selection: `field user: field nickname is not defined in schema`.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("field {name}: {source}")]
    InField {
        name: String,
        source: Box<ValidationError>,
    },

    #[error("fragment {name}: {source}")]
    InFragment {
        name: String,
        source: Box<ValidationError>,
    },

    #[error("field {name} is not defined in schema")]
    UndefinedField { name: String },

    #[error("field {field} is missing required arguments: {missing:?}")]
    MissingRequiredArguments {
        field: String,
        missing: Vec<String>,
    },

    #[error("fragment {name} is not defined")]
    UndefinedFragment { name: String },

    #[error("fragment {name} is based on type {based_type_name}, but field is of type {parent_type_name}")]
    FragmentTypeMismatch {
        name: String,
        based_type_name: String,
        parent_type_name: String,
    },

    #[error("type {name} is not defined in schema")]
    UndefinedType { name: String },

    #[error("union type {name} must have subfields")]
    UnionWithoutSelections { name: String },

    #[error("field {field} of composite type {type_name} must have a selection set")]
    CompositeWithoutSelections { field: String, type_name: String },

    #[error("field {field} of leaf type {type_name} must not have a selection set")]
    LeafWithSelections { field: String, type_name: String },

    #[error("inline fragment on leaf type {type_name} cannot have a selection set")]
    InlineFragmentOnLeaf { type_name: String },

    #[error("fragment cycle detected at fragment {name}")]
    FragmentCycle { name: String },

    #[error("schema does not define a {kind} operation type")]
    MissingRootOperation { kind: OperationKind },

    #[error("variable ${name} is not declared by the operation")]
    UndeclaredVariable { name: String },

    #[error("variable ${name} is declared but never used")]
    UnusedVariable { name: String },

    #[error("variable ${name} has undefined type {type_name}")]
    UndefinedVariableType { name: String, type_name: String },

    #[error("directive @{name} requires an `if` argument")]
    MissingIfArgument { name: String },
}

impl ValidationError {
    /// The innermost error, with the `InField`/`InFragment` wrapping
    /// stripped.
    pub fn root_cause(&self) -> &ValidationError {
        match self {
            ValidationError::InField { source, .. }
            | ValidationError::InFragment { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
