use crate::executable::FragmentDefinition;
use crate::executable::Operation;
use crate::executable::OperationKind;

/// A parsed executable document: its operations and named fragments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub operations: Vec<Operation>,
    pub fragments: Vec<FragmentDefinition>,
}

impl Document {
    /// Looks up a named fragment definition.
    pub fn fragment(&self, name: &str) -> Option<&FragmentDefinition> {
        self.fragments.iter().find(|f| f.name == name)
    }

    /// The first operation of the given kind, if any.
    pub fn operation_of_kind(&self, kind: OperationKind) -> Option<&Operation> {
        self.operations.iter().find(|op| op.kind == kind)
    }
}
