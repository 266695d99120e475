//! Tests for document validation: field existence, argument satisfaction,
//! leaf/composite discipline, union and interface expansion, fragments,
//! variables, and directive checks.

use crate::DocumentError;
use crate::ValidationError;
use crate::Validator;
use crate::tests::utils::build_schema;
use crate::tests::utils::interface_schema;
use crate::tests::utils::union_schema;
use crate::tests::utils::user_schema;

fn validate(schema: &crate::schema::Schema, source: &str) -> Result<(), DocumentError> {
    Validator::new(schema).validate_source(source)
}

fn validation_error(schema: &crate::schema::Schema, source: &str) -> ValidationError {
    match validate(schema, source) {
        Err(DocumentError::Validation(err)) => err,
        Err(other) => panic!("expected a validation error, got {other}"),
        Ok(()) => panic!("expected a validation error, document passed"),
    }
}

// =============================================================================
// Fields and arguments
// =============================================================================

#[test]
fn minimal_document_validates() {
    let schema = build_schema("type Query { hello: String }");
    assert!(validate(&schema, "{ hello }").is_ok());
}

#[test]
fn missing_required_argument() {
    let schema = user_schema();
    let err = validation_error(&schema, "{ user { name } }");

    assert!(matches!(
        &err,
        ValidationError::MissingRequiredArguments { field, missing }
            if field == "user" && missing == &["id"],
    ));
    assert!(err.to_string().contains("id"));
}

#[test]
fn unknown_field_reports_wrapped_path() {
    let schema = user_schema();
    let err = validation_error(&schema, r#"{ user(id: "1") { nickname } }"#);

    assert_eq!(
        err.to_string(),
        "field user: field nickname is not defined in schema",
    );
}

#[test]
fn extra_arguments_are_tolerated() {
    let schema = user_schema();
    assert!(validate(&schema, r#"{ user(id: "1", verbose: true) { name } }"#).is_ok());
}

#[test]
fn typename_is_allowed_on_composites() {
    let schema = user_schema();
    assert!(validate(&schema, r#"{ user(id: "1") { __typename name } }"#).is_ok());
}

// =============================================================================
// Leaf / composite discipline
// =============================================================================

#[test]
fn leaf_field_with_selection_set_is_an_error() {
    let schema = build_schema("type Query { hello: String }");
    let err = validation_error(&schema, "{ hello { sub } }");

    assert!(matches!(
        err,
        ValidationError::LeafWithSelections { field, type_name }
            if field == "hello" && type_name == "String",
    ));
}

#[test]
fn composite_field_without_selection_set_is_an_error() {
    let schema = user_schema();
    let err = validation_error(&schema, r#"{ user(id: "1") }"#);

    assert!(matches!(
        err,
        ValidationError::CompositeWithoutSelections { field, .. } if field == "user",
    ));
}

#[test]
fn union_field_without_subfields_is_an_error() {
    let schema = union_schema();
    let err = validation_error(&schema, "{ r }");

    assert_eq!(err.to_string(), "union type Result must have subfields");
}

// =============================================================================
// Unions and interfaces
// =============================================================================

#[test]
fn union_selection_with_inline_fragments() {
    let schema = union_schema();
    assert!(validate(&schema, "{ r { ... on A { a } ... on B { b } } }").is_ok());
}

/// A bare field under a union parent must exist on every member.
#[test]
fn union_bare_field_must_exist_on_all_members() {
    let schema = union_schema();
    let err = validation_error(&schema, "{ r { a } }");

    assert_eq!(err.root_cause(), &ValidationError::UndefinedField {
        name: "a".to_string(),
    });
}

#[test]
fn union_typename_is_allowed() {
    let schema = union_schema();
    assert!(validate(&schema, "{ r { __typename ... on A { a } } }").is_ok());
}

#[test]
fn interface_fields_check_against_every_implementor() {
    let schema = interface_schema();

    // `id` is on every implementor.
    assert!(validate(&schema, "{ node { id } }").is_ok());

    // `name` is only on User, so Post fails the expansion.
    let err = validation_error(&schema, "{ node { name } }");
    assert_eq!(err.root_cause(), &ValidationError::UndefinedField {
        name: "name".to_string(),
    });
}

#[test]
fn interface_narrowing_with_inline_fragment() {
    let schema = interface_schema();
    assert!(validate(&schema, "{ node { id ... on User { name } } }").is_ok());
}

// =============================================================================
// Fragments
// =============================================================================

#[test]
fn fragment_spread_resolves_and_validates() {
    let schema = user_schema();
    let document = concat!(
        "fragment UserBits on User { name email }\n",
        "{ user(id: \"1\") { ...UserBits } }",
    );
    assert!(validate(&schema, document).is_ok());
}

#[test]
fn undefined_fragment_is_an_error() {
    let schema = user_schema();
    let err = validation_error(&schema, r#"{ user(id: "1") { ...Missing } }"#);

    assert_eq!(
        err.to_string(),
        "field user: fragment Missing is not defined",
    );
}

#[test]
fn fragment_type_mismatch() {
    let schema = build_schema(concat!(
        "type Query { someBField: B }\n",
        "type A { x: String }\n",
        "type B { y: String }",
    ));
    let document = "fragment F on A { x }\n{ someBField { ...F } }";
    let err = validation_error(&schema, document);

    assert!(err.to_string().contains(
        "fragment F is based on type A, but field is of type B",
    ));
}

#[test]
fn fragment_on_union_member_may_spread_under_the_union() {
    let schema = union_schema();
    let document = "fragment OnA on A { a }\n{ r { ...OnA } }";
    assert!(validate(&schema, document).is_ok());
}

#[test]
fn fragment_cycles_are_rejected() {
    let schema = user_schema();
    let document = concat!(
        "fragment A on User { ...B }\n",
        "fragment B on User { ...A }\n",
        "{ hello }",
    );
    let err = validation_error(&schema, document);

    assert!(matches!(err, ValidationError::FragmentCycle { .. }));
}

#[test]
fn self_referential_fragment_is_a_cycle() {
    let schema = user_schema();
    let document = "fragment A on User { name ...A }\n{ hello }";
    let err = validation_error(&schema, document);

    assert!(matches!(
        err,
        ValidationError::FragmentCycle { name } if name == "A",
    ));
}

// =============================================================================
// Operations, variables, directives
// =============================================================================

#[test]
fn mutations_are_validated_against_the_mutation_root() {
    let schema = build_schema(concat!(
        "type Query { q: Int }\n",
        "type Mutation { create(name: String!): Int }",
    ));

    assert!(validate(&schema, r#"mutation { create(name: "x") }"#).is_ok());

    let err = validation_error(&schema, "mutation { create }");
    assert!(matches!(
        err,
        ValidationError::MissingRequiredArguments { field, .. } if field == "create",
    ));
}

#[test]
fn operations_without_a_root_type_are_rejected() {
    let schema = build_schema("type Query { q: Int }");
    let err = validation_error(&schema, "subscription { tick }");

    assert!(matches!(
        err,
        ValidationError::MissingRootOperation { .. },
    ));
}

#[test]
fn variables_must_be_declared() {
    let schema = user_schema();
    let err = validation_error(&schema, "{ user(id: $id) { name } }");

    assert!(matches!(
        err,
        ValidationError::UndeclaredVariable { name } if name == "id",
    ));
}

#[test]
fn declared_variables_must_be_used() {
    let schema = build_schema("type Query { hello: String }");
    let err = validation_error(&schema, "query ($x: Int) { hello }");

    assert!(matches!(
        err,
        ValidationError::UnusedVariable { name } if name == "x",
    ));
}

#[test]
fn variable_types_must_resolve() {
    let schema = build_schema("type Query { hello: String }");
    let err = validation_error(&schema, "query ($x: Missing) { hello }");

    assert!(matches!(
        err,
        ValidationError::UndefinedVariableType { type_name, .. } if type_name == "Missing",
    ));
}

#[test]
fn variables_used_through_fragments_count() {
    let schema = user_schema();
    let document = concat!(
        "query ($id: ID!) { user(id: $id) { ...Bits } }\n",
        "fragment Bits on User { name }",
    );
    assert!(validate(&schema, document).is_ok());
}

#[test]
fn skip_and_include_require_an_if_argument() {
    let schema = build_schema("type Query { hello: String }");

    assert!(validate(&schema, "{ hello @include(if: true) }").is_ok());

    let err = validation_error(&schema, "{ hello @include }");
    assert!(matches!(
        err,
        ValidationError::MissingIfArgument { name } if name == "include",
    ));
}

#[test]
fn validation_is_deterministic() {
    let schema = user_schema();
    let source = r#"{ user(id: "1") { nickname } }"#;

    let first = validation_error(&schema, source);
    let second = validation_error(&schema, source);
    assert_eq!(first, second);
}
