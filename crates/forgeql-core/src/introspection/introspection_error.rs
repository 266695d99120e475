/// An internal introspection failure. These never escape as errors to the
/// caller's type system: [`IntrospectionBuilder::respond`] folds them into
/// the GraphQL `errors: [...]` list of the response envelope.
///
/// [`IntrospectionBuilder::respond`]: crate::introspection::IntrospectionBuilder::respond
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum IntrospectionError {
    #[error("operation does not select an introspection field")]
    NotAnIntrospectionQuery,

    #[error("__type requires a `name` argument")]
    MissingNameArgument,

    #[error("the `name` argument of __type must be a string")]
    InvalidNameArgument,

    #[error("fragment {name} is not defined")]
    UndefinedFragment { name: String },
}
