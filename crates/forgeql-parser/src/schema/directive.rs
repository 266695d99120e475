use crate::Value;

/// A directive applied at a definition or field site:
/// `@name(arg: value, ...)`.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub name: String,
    pub arguments: Vec<(String, Value)>,
}

impl DirectiveAnnotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// The value of the named argument, if present.
    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments
            .iter()
            .find(|(arg_name, _)| arg_name == name)
            .map(|(_, value)| value)
    }
}

/// A directive definition: `directive @name(args) on LOC1 | LOC2`.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub name: String,
    pub description: Option<String>,
    pub arguments: Vec<crate::schema::ArgumentDefinition>,
    pub locations: Vec<String>,
}
