use crate::TypeRef;
use crate::Value;
use crate::schema::DirectiveAnnotation;

/// A field on an object, interface, or input definition.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    pub name: String,
    pub description: Option<String>,
    pub arguments: Vec<ArgumentDefinition>,
    pub ty: TypeRef,
    /// Input-object fields may declare a default: `limit: Int = 10`.
    pub default_value: Option<Value>,
    pub directives: Vec<DirectiveAnnotation>,
}

impl FieldDefinition {
    /// The applied `@deprecated` directive's reason, if the field is
    /// deprecated. `Some(None)` means deprecated without a reason.
    pub fn deprecation(&self) -> Option<Option<&str>> {
        deprecation_of(&self.directives)
    }
}

/// An argument accepted by a field or directive.
///
/// An argument is required when its type is non-null and it declares no
/// default value.
#[derive(Clone, Debug, PartialEq)]
pub struct ArgumentDefinition {
    pub name: String,
    pub description: Option<String>,
    pub ty: TypeRef,
    pub default_value: Option<Value>,
    pub directives: Vec<DirectiveAnnotation>,
}

impl ArgumentDefinition {
    pub fn is_required(&self) -> bool {
        !self.ty.is_nullable() && self.default_value.is_none()
    }
}

/// Shared `@deprecated` extraction for fields and enum values.
pub(crate) fn deprecation_of(
    directives: &[DirectiveAnnotation],
) -> Option<Option<&str>> {
    directives
        .iter()
        .find(|d| d.name == "deprecated")
        .map(|d| d.argument("reason").and_then(Value::as_str))
}
