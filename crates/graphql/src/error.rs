//! The wire-stable error shape (§6 "Error object"): `{message, locations?:
//! [{line, column}], path?: [string|int], extensions?}`. Every other
//! crate's located error carries byte-offset [`graphql_lang::ast::Location`]s
//! (or, for [`graphql_lang::GraphQLSyntaxError`], an already-computed
//! [`graphql_lang::position::SourcePosition`]); this is the one place in the
//! workspace that turns those into `{line, column}`, since this is the one
//! place that still holds the [`graphql_lang::Source`] the byte offsets are
//! relative to.

use graphql_lang::position::{position_for_offset, SourcePosition};
use graphql_lang::Source;
use graphql_types::PathSegment;

/// One located error, in the shape every GraphQL transport expects to
/// serialize directly to JSON.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLError {
    pub message: String,
    pub locations: Vec<SourcePosition>,
    pub path: Vec<PathSegment>,
    pub extensions: Option<graphql_types::Value>,
}

impl std::fmt::Display for GraphQLError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for GraphQLError {}

impl GraphQLError {
    pub fn new(message: impl Into<String>) -> Self {
        GraphQLError { message: message.into(), locations: Vec::new(), path: Vec::new(), extensions: None }
    }

    pub fn from_syntax(err: graphql_lang::GraphQLSyntaxError) -> Self {
        GraphQLError { message: err.message, locations: vec![err.position], path: Vec::new(), extensions: None }
    }

    pub fn from_schema(source: &Source, err: graphql_types::SchemaError) -> Self {
        match err {
            graphql_types::SchemaError::Located { message, locations } => {
                GraphQLError { message, locations: positions_for(source, &locations), path: Vec::new(), extensions: None }
            }
            other => GraphQLError::new(other.to_string()),
        }
    }

    pub fn from_validation(source: &Source, err: graphql_validate::ValidationError) -> Self {
        GraphQLError { message: err.message, locations: positions_for(source, &err.locations), path: Vec::new(), extensions: None }
    }

    pub fn from_coercion(err: graphql_value::CoercionError) -> Self {
        GraphQLError { message: err.message, locations: Vec::new(), path: err.path, extensions: None }
    }

    pub fn from_execution(source: &Source, err: graphql_exec::GraphQLError) -> Self {
        GraphQLError { message: err.message, locations: positions_for(source, &err.locations), path: err.path, extensions: err.extensions }
    }
}

fn positions_for(source: &Source, locations: &[graphql_lang::ast::Location]) -> Vec<SourcePosition> {
    locations.iter().map(|loc| position_for_offset(&source.body, loc.start, source.location_offset)).collect()
}
