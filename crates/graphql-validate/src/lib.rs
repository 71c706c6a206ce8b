//! Validation of an executable document against a schema (§4.5): the set
//! of structural, known-name, fragment, variable, field-merging, and
//! value-shape rules a document must pass before it's eligible for
//! execution (§8's "a document that passes validation never causes
//! executor coercion to fail").
//!
//! Deliberately independent of `graphql-value`'s coercion pipeline: rules
//! that check a literal's shape against an expected type (`rules::values`)
//! re-walk the literal themselves rather than calling into execution's
//! coercion, the way the reference implementation keeps validation free of
//! any dependency on the executor.

pub mod context;
pub mod error;
pub mod rules;
pub mod type_info;

#[cfg(test)]
mod tests;

pub use context::ValidationContext;
pub use error::ValidationError;
pub use rules::validate;
