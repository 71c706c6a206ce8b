use graphql_types::PathSegment;

/// Coercion failure (§7 error kind 4): produced by input coercion
/// (variables, argument values, input-object fields) and by output
/// serialization. Carries the field path traversed so far (§4.6 "Errors
/// carry the field path").
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct CoercionError {
    pub message: String,
    pub path: Vec<PathSegment>,
}

impl CoercionError {
    pub fn new(message: impl Into<String>) -> Self {
        CoercionError { message: message.into(), path: Vec::new() }
    }

    pub fn at(message: impl Into<String>, path: &graphql_types::Path) -> Self {
        CoercionError { message: message.into(), path: path.to_vec() }
    }
}
