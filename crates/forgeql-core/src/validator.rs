//! Cross-checks an executable document against an indexed schema.
//!
//! For each operation the validator descends the selection sets with an
//! expected parent type, starting at the operation's root type: field
//! existence, required-argument satisfaction, leaf/composite selection
//! discipline, union and interface expansion, and fragment resolution.
//! Variables and `@skip`/`@include` are checked per operation, and
//! fragment cycles are rejected by a pre-check before any descent.
//!
//! Validation is deterministic: selections are visited in source order
//! and the first diagnostic is returned.

use crate::DocumentError;
use crate::ValidationError;
use crate::schema::Schema;
use forgeql_parser::ExecutableParser;
use forgeql_parser::Value;
use forgeql_parser::executable::Document;
use forgeql_parser::executable::Field;
use forgeql_parser::executable::FragmentSpread;
use forgeql_parser::executable::InlineFragment;
use forgeql_parser::executable::Operation;
use forgeql_parser::executable::Selection;
use forgeql_parser::schema::DirectiveAnnotation;
use forgeql_parser::schema::TypeDefinition;
use forgeql_parser::schema::TypeDefinitionKind;
use std::collections::BTreeSet;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, ValidationError>;

/// Validates documents against one schema. Holds no mutable state, so a
/// single validator can serve any number of request workers.
pub struct Validator<'schema> {
    schema: &'schema Schema,
}

impl<'schema> Validator<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self { schema }
    }

    /// Parses and validates raw document bytes in one call. A `None`
    /// error means the document is well-formed against the schema.
    pub fn validate_source(&self, source: &str) -> std::result::Result<(), DocumentError> {
        let document = ExecutableParser::parse(source)?;
        self.validate(&document)?;
        Ok(())
    }

    /// Validates a pre-parsed document.
    pub fn validate(&self, document: &Document) -> Result<()> {
        check_fragment_cycles(document)?;
        for operation in &document.operations {
            self.validate_operation(operation, document)?;
        }
        Ok(())
    }

    fn validate_operation(&self, operation: &Operation, document: &Document) -> Result<()> {
        let root = self.schema.operation_root(operation.kind).ok_or(
            ValidationError::MissingRootOperation {
                kind: operation.kind,
            },
        )?;

        self.check_variables(operation, document)?;
        self.validate_selection_set(&operation.selections, root, document)
    }

    // =========================================================================
    // Selection descent
    // =========================================================================

    fn validate_selection_set(
        &self,
        selections: &[Selection],
        parent: &TypeDefinition,
        document: &Document,
    ) -> Result<()> {
        for selection in selections {
            match selection {
                Selection::Field(field) => {
                    self.validate_field_selection(field, parent, document)?;
                }
                Selection::FragmentSpread(spread) => {
                    self.validate_fragment_spread(spread, parent, document)?;
                }
                Selection::InlineFragment(inline) => {
                    self.validate_inline_fragment(inline, parent, document)?;
                }
            }
        }
        Ok(())
    }

    /// Validates one field selection against the expected parent type.
    ///
    /// Union parents check the field against every member type; interface
    /// parents check it against every implementing object type.
    fn validate_field_selection(
        &self,
        field: &Field,
        parent: &TypeDefinition,
        document: &Document,
    ) -> Result<()> {
        if field.name == "__typename" {
            if !field.selections.is_empty() {
                return Err(ValidationError::LeafWithSelections {
                    field: field.name.clone(),
                    type_name: "String".to_string(),
                });
            }
            return Ok(());
        }

        match &parent.kind {
            TypeDefinitionKind::Object { .. } | TypeDefinitionKind::InputObject { .. } => {
                self.validate_field_on(parent, field, document)
            }

            TypeDefinitionKind::Interface { .. } => {
                let implementors = self.schema.implementors_of(&parent.name);
                if implementors.is_empty() {
                    return self.validate_field_on(parent, field, document);
                }
                for implementor_name in implementors {
                    let implementor = self
                        .schema
                        .type_definition(implementor_name)
                        .expect("implementors index holds defined types");
                    self.validate_field_on(implementor, field, document)?;
                }
                Ok(())
            }

            TypeDefinitionKind::Union { members } => {
                for member_name in members {
                    let member = self
                        .schema
                        .type_definition(member_name)
                        .expect("union members are checked at schema build");
                    self.validate_field_on(member, field, document)?;
                }
                Ok(())
            }

            // Leaf parents never reach here: the descent only recurses
            // into composite types.
            TypeDefinitionKind::Scalar | TypeDefinitionKind::Enum { .. } => Ok(()),
        }
    }

    /// Checks a field against the concrete type that owns it, then
    /// descends into its selection set.
    fn validate_field_on(
        &self,
        owner: &TypeDefinition,
        field: &Field,
        document: &Document,
    ) -> Result<()> {
        let Some(schema_field) = owner.field(&field.name) else {
            return Err(ValidationError::UndefinedField {
                name: field.name.clone(),
            });
        };

        let missing: Vec<String> = schema_field
            .arguments
            .iter()
            .filter(|argument| argument.is_required())
            .filter(|argument| field.argument(&argument.name).is_none())
            .map(|argument| argument.name.clone())
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingRequiredArguments {
                field: field.name.clone(),
                missing,
            });
        }

        let leaf_name = schema_field.ty.leaf_name();
        let Some(leaf_def) = self.schema.type_definition(leaf_name) else {
            // Unreachable after the builder's reference check.
            return Ok(());
        };

        if leaf_def.is_leaf() {
            if !field.selections.is_empty() {
                return Err(ValidationError::LeafWithSelections {
                    field: field.name.clone(),
                    type_name: leaf_name.to_string(),
                });
            }
            return Ok(());
        }

        if field.selections.is_empty() {
            return Err(match &leaf_def.kind {
                TypeDefinitionKind::Union { .. } => ValidationError::UnionWithoutSelections {
                    name: leaf_name.to_string(),
                },
                _ => ValidationError::CompositeWithoutSelections {
                    field: field.name.clone(),
                    type_name: leaf_name.to_string(),
                },
            });
        }

        self.validate_selection_set(&field.selections, leaf_def, document)
            .map_err(|source| ValidationError::InField {
                name: field.name.clone(),
                source: Box::new(source),
            })
    }

    fn validate_fragment_spread(
        &self,
        spread: &FragmentSpread,
        parent: &TypeDefinition,
        document: &Document,
    ) -> Result<()> {
        let Some(fragment) = document.fragment(&spread.name) else {
            return Err(ValidationError::UndefinedFragment {
                name: spread.name.clone(),
            });
        };

        let based_name = &fragment.based_type_name;
        let Some(based_def) = self.schema.type_definition(based_name) else {
            return Err(ValidationError::UndefinedType {
                name: based_name.clone(),
            });
        };

        if !self.spread_target_allowed(based_name, parent) {
            return Err(ValidationError::FragmentTypeMismatch {
                name: spread.name.clone(),
                based_type_name: based_name.clone(),
                parent_type_name: parent.name.clone(),
            });
        }

        self.validate_selection_set(&fragment.selections, based_def, document)
            .map_err(|source| ValidationError::InFragment {
                name: spread.name.clone(),
                source: Box::new(source),
            })
    }

    /// Whether a fragment based on `based_name` may be spread where the
    /// expected type is `parent`: the parent itself, a member of a union
    /// parent, an implementor of an interface parent, or an interface the
    /// parent implements.
    fn spread_target_allowed(&self, based_name: &str, parent: &TypeDefinition) -> bool {
        if based_name == parent.name {
            return true;
        }
        match &parent.kind {
            TypeDefinitionKind::Union { members } => {
                members.iter().any(|member| member == based_name)
            }
            TypeDefinitionKind::Interface { .. } => self
                .schema
                .implementors_of(&parent.name)
                .iter()
                .any(|implementor| implementor == based_name),
            TypeDefinitionKind::Object { implements, .. } => {
                implements.iter().any(|interface| interface == based_name)
            }
            _ => false,
        }
    }

    fn validate_inline_fragment(
        &self,
        inline: &InlineFragment,
        parent: &TypeDefinition,
        document: &Document,
    ) -> Result<()> {
        let target = match &inline.type_condition {
            Some(condition) => self.schema.type_definition(condition).ok_or_else(|| {
                ValidationError::UndefinedType {
                    name: condition.clone(),
                }
            })?,
            None => parent,
        };

        if target.is_leaf() {
            return Err(ValidationError::InlineFragmentOnLeaf {
                type_name: target.name.clone(),
            });
        }

        self.validate_selection_set(&inline.selections, target, document)
    }

    // =========================================================================
    // Variables and directive arguments
    // =========================================================================

    /// Checks that declared variable types resolve, every referenced
    /// variable is declared, every declared variable is used, and
    /// `@skip`/`@include` carry their `if` argument. Fragments spread by
    /// the operation count toward variable usage.
    fn check_variables(&self, operation: &Operation, document: &Document) -> Result<()> {
        for variable in &operation.variable_definitions {
            let leaf_name = variable.ty.leaf_name();
            if self.schema.type_definition(leaf_name).is_none() {
                return Err(ValidationError::UndefinedVariableType {
                    name: variable.name.clone(),
                    type_name: leaf_name.to_string(),
                });
            }
        }

        let mut used = BTreeSet::new();
        let mut visited_fragments = HashSet::new();
        collect_directive_uses(&operation.directives, &mut used)?;
        collect_selection_uses(
            &operation.selections,
            document,
            &mut used,
            &mut visited_fragments,
        )?;

        for name in &used {
            if !operation
                .variable_definitions
                .iter()
                .any(|variable| &variable.name == name)
            {
                return Err(ValidationError::UndeclaredVariable { name: name.clone() });
            }
        }
        for variable in &operation.variable_definitions {
            if !used.contains(&variable.name) {
                return Err(ValidationError::UnusedVariable {
                    name: variable.name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Records the variables referenced in a selection tree, following
/// fragment spreads (each fragment at most once), and checks
/// `@skip`/`@include` arguments along the way.
fn collect_selection_uses<'d>(
    selections: &'d [Selection],
    document: &'d Document,
    used: &mut BTreeSet<String>,
    visited_fragments: &mut HashSet<&'d str>,
) -> Result<()> {
    for selection in selections {
        match selection {
            Selection::Field(field) => {
                for argument in &field.arguments {
                    collect_value_variables(&argument.value, used);
                }
                collect_directive_uses(&field.directives, used)?;
                collect_selection_uses(&field.selections, document, used, visited_fragments)?;
            }
            Selection::FragmentSpread(spread) => {
                collect_directive_uses(&spread.directives, used)?;
                if let Some(fragment) = document.fragment(&spread.name) {
                    if visited_fragments.insert(&fragment.name) {
                        collect_directive_uses(&fragment.directives, used)?;
                        collect_selection_uses(
                            &fragment.selections,
                            document,
                            used,
                            visited_fragments,
                        )?;
                    }
                }
            }
            Selection::InlineFragment(inline) => {
                collect_directive_uses(&inline.directives, used)?;
                collect_selection_uses(&inline.selections, document, used, visited_fragments)?;
            }
        }
    }
    Ok(())
}

fn collect_directive_uses(
    directives: &[DirectiveAnnotation],
    used: &mut BTreeSet<String>,
) -> Result<()> {
    for directive in directives {
        if matches!(directive.name.as_str(), "skip" | "include")
            && directive.argument("if").is_none()
        {
            return Err(ValidationError::MissingIfArgument {
                name: directive.name.clone(),
            });
        }
        for (_, value) in &directive.arguments {
            collect_value_variables(value, used);
        }
    }
    Ok(())
}

fn collect_value_variables(value: &Value, used: &mut BTreeSet<String>) {
    match value {
        Value::Variable(name) => {
            used.insert(name.clone());
        }
        Value::List(items) => {
            for item in items {
                collect_value_variables(item, used);
            }
        }
        Value::Object(fields) => {
            for (_, field_value) in fields {
                collect_value_variables(field_value, used);
            }
        }
        _ => {}
    }
}

// =============================================================================
// Fragment cycles
// =============================================================================

/// Rejects fragment definitions that eventually spread themselves. The
/// seen-set bounds the descent, so cyclic documents cannot recurse the
/// validator into the ground.
fn check_fragment_cycles(document: &Document) -> Result<()> {
    for fragment in &document.fragments {
        let mut stack = Vec::new();
        visit_fragment(document, &fragment.name, &fragment.selections, &mut stack)?;
    }
    Ok(())
}

fn visit_fragment<'d>(
    document: &'d Document,
    name: &'d str,
    selections: &'d [Selection],
    stack: &mut Vec<&'d str>,
) -> Result<()> {
    if stack.contains(&name) {
        return Err(ValidationError::FragmentCycle {
            name: name.to_string(),
        });
    }
    stack.push(name);
    visit_spreads(document, selections, stack)?;
    stack.pop();
    Ok(())
}

fn visit_spreads<'d>(
    document: &'d Document,
    selections: &'d [Selection],
    stack: &mut Vec<&'d str>,
) -> Result<()> {
    for selection in selections {
        match selection {
            Selection::Field(field) => {
                visit_spreads(document, &field.selections, stack)?;
            }
            Selection::InlineFragment(inline) => {
                visit_spreads(document, &inline.selections, stack)?;
            }
            Selection::FragmentSpread(spread) => {
                // Unresolved spreads are reported during descent, not here.
                if let Some(fragment) = document.fragment(&spread.name) {
                    visit_fragment(document, &fragment.name, &fragment.selections, stack)?;
                }
            }
        }
    }
    Ok(())
}
