//! Execution-time errors (§7 error kinds 5 and 6).
//!
//! [`GraphQLError`] is the per-field located error that fills
//! [`crate::ExecutionResult::errors`]: it carries byte-offset AST
//! [`Location`]s rather than `{line, column}` pairs, because `execute`
//! never sees the original [`graphql_lang::Source`] text (only the already
//! parsed [`graphql_lang::ast::Document`]) and so has nothing to compute a
//! line/column against. The `graphql` facade crate, which does hold the
//! `Source` it parsed, converts these into the wire-stable `{line, column}`
//! shape from spec §6.
//!
//! [`ExecutionError`] covers the handful of ways execution can fail before
//! a single field is ever resolved: an unresolvable operation, a root type
//! the schema doesn't declare, or variable coercion failing outright.

use graphql_lang::ast::Location;
use graphql_types::{PathSegment, Value};
use graphql_value::CoercionError;

/// A single located error, attached to a response path (§4.7 "Error
/// semantics", §6 "Error object").
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLError {
    pub message: String,
    pub locations: Vec<Location>,
    pub path: Vec<PathSegment>,
    pub extensions: Option<Value>,
}

impl GraphQLError {
    pub fn new(message: impl Into<String>) -> Self {
        GraphQLError { message: message.into(), locations: Vec::new(), path: Vec::new(), extensions: None }
    }

    pub fn at(message: impl Into<String>, locations: Vec<Location>, path: Vec<PathSegment>) -> Self {
        GraphQLError { message: message.into(), locations, path, extensions: None }
    }

    pub fn from_coercion(err: CoercionError) -> Self {
        GraphQLError { message: err.message, locations: Vec::new(), path: err.path, extensions: None }
    }
}

impl std::fmt::Display for GraphQLError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for GraphQLError {}

/// Fatal, pre-resolution execution failures (§7 error kind 6, and the
/// request-boundary half of kind 4 "Coercion error"): these never reach a
/// resolver, so there is no field/path to localize them against beyond
/// what the failure itself names.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ExecutionError {
    #[error("Must provide an operation.")]
    NoOperation,

    #[error("Unknown operation named \"{0}\".")]
    UnknownOperationName(String),

    #[error("Must provide operation name if query contains multiple operations.")]
    AmbiguousOperation,

    #[error("Schema is not configured for {operation_type} operations.")]
    MissingRootType { operation_type: &'static str },

    #[error("Subscription operation must have exactly one root field, found {0}.")]
    NotSingleRootField(usize),

    #[error("`subscribe` requires a subscription operation.")]
    NotASubscription,

    #[error("Field \"{field}\" on subscription root type \"{parent_type}\" does not define a subscribe resolver.")]
    NotSubscribable { parent_type: String, field: String },
}

impl ExecutionError {
    pub fn into_graphql_error(self) -> GraphQLError {
        GraphQLError::new(self.to_string())
    }
}
