use forgeql_parser::SyntaxError;
use forgeql_parser::executable::OperationKind;
use std::path::PathBuf;

/// An error raised while assembling loaded SDL documents into a
/// [`Schema`](crate::schema::Schema).
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("duplicate type {type_name}")]
    DuplicateTypeDefinition { type_name: String },

    #[error("duplicate directive @{directive_name}")]
    DuplicateDirectiveDefinition { directive_name: String },

    #[error("multiple definitions of the {kind} operation type")]
    DuplicateOperationType { kind: OperationKind },

    #[error("cannot extend type {type_name}: it is not defined")]
    ExtensionOfUndefinedType { type_name: String },

    #[error("cannot extend {kind} {type_name} with a {extension_kind} extension")]
    ExtensionKindMismatch {
        type_name: String,
        kind: &'static str,
        extension_kind: &'static str,
    },

    #[error("schema does not define a query operation type")]
    NoQueryOperationType,

    #[error("{kind} operation type {type_name} is not an object type defined in the schema")]
    InvalidOperationType {
        kind: OperationKind,
        type_name: String,
    },

    #[error("type {type_name} referenced by {site} is not defined")]
    UndefinedTypeReference { type_name: String, site: String },

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("failed to read schema file {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
