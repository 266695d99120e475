//! Shared fixtures for the core test modules.

use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use forgeql_parser::ExecutableParser;
use forgeql_parser::executable::Document;

pub(crate) fn build_schema(sdl: &str) -> Schema {
    SchemaBuilder::new()
        .load_str(sdl)
        .and_then(SchemaBuilder::build)
        .unwrap_or_else(|err| panic!("schema failed to build: {err}"))
}

pub(crate) fn parse_document(source: &str) -> Document {
    ExecutableParser::parse(source)
        .unwrap_or_else(|err| panic!("document failed to parse: {err}"))
}

/// A schema with one required argument and a nested object type.
pub(crate) fn user_schema() -> Schema {
    build_schema(concat!(
        "type Query { user(id: ID!): User, hello: String }\n",
        "type User { name: String, email: String }",
    ))
}

/// A schema with a union result type.
pub(crate) fn union_schema() -> Schema {
    build_schema(concat!(
        "union Result = A | B\n",
        "type A { a: String }\n",
        "type B { b: Int }\n",
        "type Query { r: Result }",
    ))
}

/// A schema with an interface and two implementors, one of which has an
/// extra field.
pub(crate) fn interface_schema() -> Schema {
    build_schema(concat!(
        "interface Node { id: ID }\n",
        "type User implements Node { id: ID, name: String }\n",
        "type Post implements Node { id: ID }\n",
        "type Query { node: Node }",
    ))
}
