/// The grammar the shared scanner is lexing for.
///
/// The schema and query lexers share almost all of their logic; the mode
/// selects the keyword table and the context rules that decide whether an
/// ident-like run is an identifier (a type reference) or a field name, and
/// where value literals may appear.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LexerMode {
    /// Schema definition files (`type`, `input`, `union`, ...).
    Schema,
    /// Executable documents (`query`, `mutation`, `fragment`, `...`, `$`).
    Query,
}
