//! The serializable introspection response model.
//!
//! Every field is optional at two levels: the outer `Option` tracks
//! whether the client *requested* the field (unrequested fields are
//! omitted from the serialized response entirely), and for fields that
//! are nullable in the introspection schema the inner `Option` carries
//! the GraphQL `null`. The builder populates only what the query asked
//! for; everything else stays `None`.

use serde::Serialize;

/// The GraphQL response envelope: `{ "data": ..., "errors": [...] }`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IntrospectionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<IntrospectionData>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQLError>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphQLError {
    pub message: String,
}

/// The `data` object of an introspection response.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct IntrospectionData {
    #[serde(rename = "__schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaIntrospection>,

    /// `Some(None)` is a requested `__type` that found no such type and
    /// serializes as `null`.
    #[serde(rename = "__type", skip_serializing_if = "Option::is_none")]
    pub type_lookup: Option<Option<TypeIntrospection>>,
}

/// `__TypeKind`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntrospectionTypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

/// `__Schema`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaIntrospection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<TypeIntrospection>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_type: Option<TypeIntrospection>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mutation_type: Option<Option<TypeIntrospection>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_type: Option<Option<TypeIntrospection>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub directives: Option<Vec<DirectiveIntrospection>>,
}

/// `__Type`. Named types populate `name`; `LIST`/`NON_NULL` wrappers have
/// a `null` name and point at their inner type through `of_type`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeIntrospection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<IntrospectionTypeKind>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Option<Vec<FieldIntrospection>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub interfaces: Option<Option<Vec<TypeIntrospection>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub possible_types: Option<Option<Vec<TypeIntrospection>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Option<Vec<EnumValueIntrospection>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_fields: Option<Option<Vec<InputValueIntrospection>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub of_type: Option<Option<Box<TypeIntrospection>>>,
}

/// `__Field`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldIntrospection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<InputValueIntrospection>>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeIntrospection>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deprecated: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_reason: Option<Option<String>>,
}

/// `__InputValue`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputValueIntrospection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeIntrospection>,

    /// The default value serialized as a GraphQL literal, or `null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Option<String>>,
}

/// `__EnumValue`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValueIntrospection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deprecated: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_reason: Option<Option<String>>,
}

/// `__Directive`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveIntrospection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<InputValueIntrospection>>,
}
