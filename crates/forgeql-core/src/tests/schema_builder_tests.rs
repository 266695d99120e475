//! Tests for schema assembly: bootstrap, merging, extensions, root
//! operation resolution, reference checks, and the derived indexes.

use crate::schema::SchemaBuilder;
use crate::schema::SchemaError;
use crate::tests::utils::build_schema;
use forgeql_parser::executable::OperationKind;

type Result<T> = std::result::Result<T, SchemaError>;

mod assembly {
    use super::*;

    #[test]
    fn minimal_schema_builds() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str("type Query { hello: String }")?
            .build()?;

        assert_eq!(schema.query_type().name, "Query");
        assert!(schema.definition().mutation.is_none());
        Ok(())
    }

    /// Built-in scalars and the introspection model are merged in before
    /// any user SDL.
    #[test]
    fn bootstrap_types_are_always_present() {
        let schema = build_schema("type Query { hello: String }");

        for scalar in ["Int", "Float", "String", "Boolean", "ID"] {
            assert!(schema.type_definition(scalar).is_some(), "missing {scalar}");
        }

        let introspection_schema = schema.type_definition("__Schema").unwrap();
        assert!(introspection_schema.is_introspection);
        assert!(schema.type_definition("__Type").is_some());
        assert!(schema.type_definition("__TypeKind").is_some());

        let directive_names: Vec<_> = schema
            .directives()
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert!(directive_names.contains(&"skip"));
        assert!(directive_names.contains(&"include"));
        assert!(directive_names.contains(&"deprecated"));
    }

    #[test]
    fn schema_block_overrides_default_root_names() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str("schema { query: Root }\ntype Root { a: Int }")?
            .build()?;

        assert_eq!(schema.query_type().name, "Root");
        Ok(())
    }

    #[test]
    fn default_root_names_are_picked_up() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(concat!(
                "type Query { a: Int }\n",
                "type Mutation { b: Int }\n",
                "type Subscription { c: Int }",
            ))?
            .build()?;

        assert!(schema.operation_root(OperationKind::Query).is_some());
        assert!(schema.operation_root(OperationKind::Mutation).is_some());
        assert!(schema.operation_root(OperationKind::Subscription).is_some());
        Ok(())
    }

    #[test]
    fn documents_merge_across_loads() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str("type Query { user: User }")?
            .load_str("type User { name: String }")?
            .build()?;

        assert!(schema.type_definition("User").is_some());
        Ok(())
    }
}

mod errors {
    use super::*;

    #[test]
    fn missing_query_type_is_an_error() {
        let result = SchemaBuilder::new()
            .load_str("type User { name: String }")
            .and_then(SchemaBuilder::build);

        assert!(matches!(result, Err(SchemaError::NoQueryOperationType)));
    }

    #[test]
    fn duplicate_type_is_an_error() {
        let result = SchemaBuilder::new()
            .load_str("type Query { a: Int }")
            .and_then(|b| b.load_str("type Query { b: Int }"))
            .and_then(SchemaBuilder::build);

        assert!(matches!(
            result,
            Err(SchemaError::DuplicateTypeDefinition { type_name }) if type_name == "Query",
        ));
    }

    #[test]
    fn non_object_operation_type_is_an_error() {
        let result = SchemaBuilder::new()
            .load_str("schema { query: Role }\nenum Role { ADMIN }")
            .and_then(SchemaBuilder::build);

        assert!(matches!(
            result,
            Err(SchemaError::InvalidOperationType {
                kind: OperationKind::Query,
                ..
            }),
        ));
    }

    #[test]
    fn dangling_field_reference_is_an_error() {
        let result = SchemaBuilder::new()
            .load_str("type Query { a: Missing }")
            .and_then(SchemaBuilder::build);

        match result {
            Err(SchemaError::UndefinedTypeReference { type_name, site }) => {
                assert_eq!(type_name, "Missing");
                assert_eq!(site, "field Query.a");
            }
            other => panic!("expected UndefinedTypeReference, got {other:?}"),
        }
    }

    #[test]
    fn dangling_union_member_is_an_error() {
        let result = SchemaBuilder::new()
            .load_str("union R = A | Nope\ntype A { x: Int }\ntype Query { r: R }")
            .and_then(SchemaBuilder::build);

        assert!(matches!(
            result,
            Err(SchemaError::UndefinedTypeReference { type_name, .. }) if type_name == "Nope",
        ));
    }
}

mod extensions {
    use super::*;

    #[test]
    fn extension_appends_fields() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str("type Query { a: Int }")?
            .load_str("extend type Query { b: String }")?
            .build()?;

        let query = schema.query_type();
        assert!(query.field("a").is_some());
        assert!(query.field("b").is_some());
        Ok(())
    }

    #[test]
    fn extension_appends_union_members() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(concat!(
                "union R = A\n",
                "type A { x: Int }\n",
                "type B { y: Int }\n",
                "type Query { r: R }\n",
                "extend union R = B",
            ))?
            .build()?;

        let union = schema.union_definition("R").unwrap();
        assert_eq!(union.fields().len(), 0);
        assert!(matches!(
            &union.kind,
            forgeql_parser::schema::TypeDefinitionKind::Union { members }
                if members == &["A", "B"],
        ));
        Ok(())
    }

    #[test]
    fn extending_an_undefined_type_is_an_error() {
        let result = SchemaBuilder::new()
            .load_str("type Query { a: Int }\nextend type Nope { b: Int }")
            .and_then(SchemaBuilder::build);

        assert!(matches!(
            result,
            Err(SchemaError::ExtensionOfUndefinedType { type_name }) if type_name == "Nope",
        ));
    }

    #[test]
    fn extending_with_a_different_kind_is_an_error() {
        let result = SchemaBuilder::new()
            .load_str("type Query { a: Int }\nextend enum Query { B }")
            .and_then(SchemaBuilder::build);

        assert!(matches!(
            result,
            Err(SchemaError::ExtensionKindMismatch { .. }),
        ));
    }
}

mod indexes {
    use super::*;
    use crate::schema::Schema;

    #[test]
    fn implementors_are_indexed_in_definition_order() {
        let schema = build_schema(concat!(
            "interface Node { id: ID }\n",
            "type User implements Node { id: ID }\n",
            "type Post implements Node { id: ID }\n",
            "type Query { node: Node }",
        ));

        assert_eq!(schema.implementors_of("Node"), ["User", "Post"]);
        assert!(schema.implementors_of("Missing").is_empty());
    }

    #[test]
    fn kind_filtered_lookups() {
        let schema = build_schema(concat!(
            "union R = A\n",
            "type A { x: Int }\n",
            "interface I { id: ID }\n",
            "type Query { r: R }",
        ));

        assert!(schema.union_definition("R").is_some());
        assert!(schema.union_definition("Query").is_none());
        assert!(schema.interface_definition("I").is_some());
        assert!(schema.interface_definition("R").is_none());
        assert!(schema.type_definition("Unknown").is_none());
    }

    #[test]
    fn builtin_scalar_names() {
        assert!(Schema::is_builtin_scalar("Int"));
        assert!(Schema::is_builtin_scalar("ID"));
        assert!(!Schema::is_builtin_scalar("User"));
    }
}
