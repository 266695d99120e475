//! Tests for the introspection builder: selection-driven projection,
//! wrapper chains, deprecation filtering, and the response envelope.

use crate::introspection::IntrospectionBuilder;
use crate::introspection::IntrospectionTypeKind;
use crate::introspection::TypeIntrospection;
use crate::tests::utils::build_schema;
use crate::tests::utils::parse_document;

#[test]
fn query_type_projection() {
    let schema = build_schema("type Query { hello: String }");
    let document = parse_document("{ __schema { queryType { name kind } } }");

    let data = IntrospectionBuilder::new(&schema).resolve(&document).unwrap();
    let schema_out = data.schema.unwrap();

    let query_type = schema_out.query_type.unwrap();
    assert_eq!(query_type.name, Some(Some("Query".to_string())));
    assert_eq!(query_type.kind, Some(IntrospectionTypeKind::Object));

    // Only requested branches are populated.
    assert!(schema_out.types.is_none());
    assert!(schema_out.directives.is_none());
    assert!(query_type.fields.is_none());
}

#[test]
fn types_listing_includes_user_builtin_and_introspection_types() {
    let schema = build_schema("type Query { hello: String }");
    let document = parse_document("{ __schema { types { name kind } } }");

    let data = IntrospectionBuilder::new(&schema).resolve(&document).unwrap();
    let types = data.schema.unwrap().types.unwrap();

    let names: Vec<String> = types
        .iter()
        .map(|t| t.name.clone().unwrap().unwrap())
        .collect();
    assert!(names.contains(&"Query".to_string()));
    assert!(names.contains(&"Int".to_string()));
    assert!(names.contains(&"__Schema".to_string()));
}

#[test]
fn type_lookup_by_name() {
    let schema = build_schema(concat!(
        "type Query { user: User }\n",
        "type User { name: String, age: Int }",
    ));
    let document = parse_document(
        r#"{ __type(name: "User") { name fields { name type { name kind } } } }"#,
    );

    let data = IntrospectionBuilder::new(&schema).resolve(&document).unwrap();
    let user = data.type_lookup.unwrap().unwrap();

    assert_eq!(user.name, Some(Some("User".to_string())));
    let fields = user.fields.unwrap().unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].name.as_deref(), Some("name"));
    let name_type = fields[0].ty.as_ref().unwrap();
    assert_eq!(name_type.kind, Some(IntrospectionTypeKind::Scalar));
}

#[test]
fn unknown_type_lookup_is_null() {
    let schema = build_schema("type Query { hello: String }");
    let document = parse_document(r#"{ __type(name: "Nope") { name } }"#);

    let data = IntrospectionBuilder::new(&schema).resolve(&document).unwrap();
    assert_eq!(data.type_lookup, Some(None));
}

/// `[[Int!]!]!` projects as the chain
/// `NON_NULL -> LIST -> NON_NULL -> LIST -> NON_NULL -> SCALAR(Int)`.
#[test]
fn nested_non_null_list_wrapper_chain() {
    let schema = build_schema("type Query { m: [[Int!]!]! }");
    let document = parse_document(concat!(
        r#"{ __type(name: "Query") { fields { type "#,
        "{ kind name ofType { kind name ofType { kind name ofType ",
        "{ kind name ofType { kind name ofType { kind name } } } } } } } } }",
    ));

    let data = IntrospectionBuilder::new(&schema).resolve(&document).unwrap();
    let fields = data.type_lookup.unwrap().unwrap().fields.unwrap().unwrap();
    let mut node: &TypeIntrospection = fields[0].ty.as_ref().unwrap();

    let mut chain = vec![node.kind.unwrap()];
    while let Some(Some(inner)) = &node.of_type {
        node = inner.as_ref();
        chain.push(node.kind.unwrap());
    }

    use IntrospectionTypeKind::*;
    assert_eq!(chain, vec![NonNull, List, NonNull, List, NonNull, Scalar]);
    assert_eq!(node.name, Some(Some("Int".to_string())));
}

#[test]
fn deprecated_fields_are_filtered_by_default() {
    let schema = build_schema(concat!(
        "type Query {\n",
        "  current: String\n",
        "  old: String @deprecated(reason: \"use current\")\n",
        "}",
    ));
    let builder = IntrospectionBuilder::new(&schema);

    let without = parse_document(r#"{ __type(name: "Query") { fields { name } } }"#);
    let data = builder.resolve(&without).unwrap();
    let fields = data.type_lookup.unwrap().unwrap().fields.unwrap().unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name.as_deref(), Some("current"));

    let with = parse_document(concat!(
        r#"{ __type(name: "Query") "#,
        "{ fields(includeDeprecated: true) { name isDeprecated deprecationReason } } }",
    ));
    let data = builder.resolve(&with).unwrap();
    let fields = data.type_lookup.unwrap().unwrap().fields.unwrap().unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[1].is_deprecated, Some(true));
    assert_eq!(
        fields[1].deprecation_reason,
        Some(Some("use current".to_string())),
    );
}

#[test]
fn union_and_interface_possible_types() {
    let schema = build_schema(concat!(
        "union R = A | B\n",
        "type A { x: Int }\n",
        "type B { y: Int }\n",
        "interface Node { id: ID }\n",
        "type User implements Node { id: ID }\n",
        "type Query { r: R, node: Node }",
    ));
    let builder = IntrospectionBuilder::new(&schema);

    let document = parse_document(r#"{ __type(name: "R") { possibleTypes { name } } }"#);
    let possible = builder
        .resolve(&document)
        .unwrap()
        .type_lookup
        .unwrap()
        .unwrap()
        .possible_types
        .unwrap()
        .unwrap();
    let names: Vec<_> = possible
        .iter()
        .map(|t| t.name.clone().unwrap().unwrap())
        .collect();
    assert_eq!(names, ["A", "B"]);

    let document = parse_document(r#"{ __type(name: "Node") { possibleTypes { name } } }"#);
    let possible = builder
        .resolve(&document)
        .unwrap()
        .type_lookup
        .unwrap()
        .unwrap()
        .possible_types
        .unwrap()
        .unwrap();
    assert_eq!(possible.len(), 1);
}

#[test]
fn fragments_in_introspection_queries_are_flattened() {
    let schema = build_schema("type Query { hello: String }");
    let document = parse_document(concat!(
        "query { __schema { ...SchemaBits } }\n",
        "fragment SchemaBits on __Schema { queryType { name } }",
    ));

    let data = IntrospectionBuilder::new(&schema).resolve(&document).unwrap();
    let query_type = data.schema.unwrap().query_type.unwrap();
    assert_eq!(query_type.name, Some(Some("Query".to_string())));
}

#[test]
fn response_envelope_serialization() {
    let schema = build_schema("type Query { hello: String }");
    let builder = IntrospectionBuilder::new(&schema);

    let document = parse_document("{ __schema { queryType { name } } }");
    let response = builder.respond(&document);
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["data"]["__schema"]["queryType"]["name"], "Query");
    assert!(json.get("errors").is_none());

    // A non-introspection operation surfaces as a GraphQL error list.
    let document = parse_document("{ hello }");
    let response = builder.respond(&document);
    let json = serde_json::to_value(&response).unwrap();

    assert!(json.get("data").is_none());
    assert_eq!(json["errors"].as_array().unwrap().len(), 1);
}

#[test]
fn input_object_fields_and_defaults() {
    let schema = build_schema(concat!(
        "input Filter { limit: Int = 10, after: ID }\n",
        "type Query { list(filter: Filter): String }",
    ));
    let document = parse_document(concat!(
        r#"{ __type(name: "Filter") "#,
        "{ inputFields { name defaultValue type { name } } } }",
    ));

    let data = IntrospectionBuilder::new(&schema).resolve(&document).unwrap();
    let input_fields = data
        .type_lookup
        .unwrap()
        .unwrap()
        .input_fields
        .unwrap()
        .unwrap();

    assert_eq!(input_fields.len(), 2);
    assert_eq!(input_fields[0].name.as_deref(), Some("limit"));
    assert_eq!(input_fields[0].default_value, Some(Some("10".to_string())));
    assert_eq!(input_fields[1].default_value, Some(None));
}
