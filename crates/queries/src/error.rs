//! Query generation errors

/// Query generation result type.
pub type QueryResult<T> = Result<T, QueryError>;

/// All errors the query generator can return.
///
/// An exhausted weight walk is not represented here: it can only happen when the registered
/// weights are corrupt and is treated as a bug.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// A method weight was configured for a name outside the supported registry.
    #[error("{0} is not supported")]
    UnsupportedMethod(String),
    /// Sampling was attempted on a generator without any registered queries.
    #[error("no query generators available")]
    NoGenerators,
    /// Registering the named query would overflow the total weight.
    #[error("total weight overflows when adding {0}")]
    WeightOverflow(String),
}
