//! Execution (§4.7) and the subscription driver (§4.8): collects a
//! selection set's fields, coerces their arguments, dispatches resolvers
//! concurrently (serially for a mutation's root fields), completes
//! resolved values against the schema's declared types with the
//! non-null/list/leaf/composite recursion §4.7 describes, and resolves
//! abstract types along the way.
//!
//! This crate knows nothing about wire transport or line/column error
//! locations — its [`GraphQLError`] carries byte-offset
//! [`graphql_lang::ast::Location`]s, since a [`graphql_lang::ast::Document`]
//! never keeps a reference to the [`graphql_lang::Source`] it was parsed
//! from. The `graphql` facade crate, which does retain that `Source`,
//! converts these into the wire-stable `{line, column}` shape.

pub mod collect;
pub mod default_resolver;
pub mod error;
pub mod execute;
pub mod subscribe;

#[cfg(test)]
mod tests;

pub use collect::{collect_fields, index_fragments};
pub use default_resolver::default_resolve;
pub use error::{ExecutionError, GraphQLError};
pub use execute::{build_context, execute, execute_sync, ExecutionContext, ExecutionResult};
pub use subscribe::{subscribe, MapStream};
