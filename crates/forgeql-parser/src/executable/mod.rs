//! The executable document model produced by [`ExecutableParser`].
//!
//! Documents are created per request and discarded after validation;
//! nothing here refers back to the source buffer.
//!
//! [`ExecutableParser`]: crate::ExecutableParser

mod document;
mod fragment;
mod operation;
mod selection;
mod variable_definition;

pub use document::Document;
pub use fragment::FragmentDefinition;
pub use fragment::FragmentSpread;
pub use fragment::InlineFragment;
pub use operation::Operation;
pub use operation::OperationKind;
pub use selection::Argument;
pub use selection::Field;
pub use selection::Selection;
pub use variable_definition::VariableDefinition;
