use graphql_lang::ast::Location;

/// A single rule violation (§4.5, §7 error kind 3). Validation never
/// short-circuits on the first error: every rule runs to completion and
/// `validate` returns the full list.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    pub locations: Vec<Location>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        ValidationError { message: message.into(), locations: Vec::new() }
    }

    pub fn at(message: impl Into<String>, loc: Option<Location>) -> Self {
        ValidationError { message: message.into(), locations: loc.into_iter().collect() }
    }

    pub fn at_many(message: impl Into<String>, locs: impl IntoIterator<Item = Option<Location>>) -> Self {
        ValidationError { message: message.into(), locations: locs.into_iter().flatten().collect() }
    }
}
