use crate::TypeRef;
use crate::Value;

/// One variable declared by an operation: `$name: Type = default`.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub name: String,
    pub ty: TypeRef,
    pub default_value: Option<Value>,
}
