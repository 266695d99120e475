use crate::executable::Selection;
use crate::schema::DirectiveAnnotation;

/// A named fragment definition: `fragment Name on Type { ... }`.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub name: String,
    /// The type condition: the type this fragment's selections apply to.
    pub based_type_name: String,
    pub directives: Vec<DirectiveAnnotation>,
    pub selections: Vec<Selection>,
}

/// A spread of a named fragment: `...Name @dir`.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub name: String,
    pub directives: Vec<DirectiveAnnotation>,
}

/// An inline fragment: `... on Type @dir { ... }`. The type condition is
/// optional; without one the fragment applies to the enclosing type.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub type_condition: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub selections: Vec<Selection>,
}
