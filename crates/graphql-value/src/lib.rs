//! Input coercion and output serialization (§4.6): turning AST literals
//! and externally supplied JSON into [`graphql_types::Value`]s typed
//! against a schema, and turning resolved values back into response
//! leaves.

pub mod coerce;
pub mod error;
pub mod json;

#[cfg(test)]
mod tests;

pub use coerce::{coerce_argument_values, coerce_external, coerce_literal, coerce_variable_values, serialize_output};
pub use error::CoercionError;
pub use json::{json_to_value, value_to_json};
