//! The schema document model produced by [`SchemaParser`].
//!
//! [`SchemaParser`]: crate::SchemaParser

mod directive;
mod field_definition;
mod schema_document;
mod type_definition;

pub use directive::DirectiveAnnotation;
pub use directive::DirectiveDefinition;
pub use field_definition::ArgumentDefinition;
pub use field_definition::FieldDefinition;
pub use schema_document::RootOperationTypes;
pub use schema_document::SchemaDocument;
pub use schema_document::TypeExtension;
pub use type_definition::EnumValueDefinition;
pub use type_definition::TypeDefinition;
pub use type_definition::TypeDefinitionKind;
