//! The top-level API (§6): `parse`, `print`, `validate`, `execute`,
//! `subscribe`, the `graphql` convenience wrapper, and the
//! `build_schema`/`build_ast_schema` collaborators, composed from the five
//! crates underneath. This is where a caller starts — it is the only crate
//! in the workspace that holds onto a [`graphql_lang::Source`] long enough
//! to turn the byte-offset locations every other crate's errors carry into
//! the wire-stable `{line, column}` shape (see [`error::GraphQLError`]).

pub mod error;
pub mod introspection;

#[cfg(test)]
mod tests;

use graphql_lang::ast::{self, Document};
use graphql_lang::parser::ParseOptions;
use graphql_lang::Source;
use graphql_types::{AnyValue, Schema};
use std::sync::Arc;

pub use error::GraphQLError;
pub use graphql_types::{build_ast_schema, build_schema};
pub use introspection::{introspection_from_schema, introspection_query};

/// A full execution result (§6 "Execution result"): `data` is `None` only
/// when an error occurred before any field was resolved (a parse, schema,
/// validation, or variable-coercion failure); `errors` is empty when
/// execution fully succeeded.
#[derive(Clone, Debug, Default)]
pub struct ExecutionResult {
    pub data: Option<graphql_types::Value>,
    pub errors: Vec<GraphQLError>,
    pub extensions: Option<graphql_types::Value>,
}

impl ExecutionResult {
    fn from_exec(source: &Source, result: graphql_exec::ExecutionResult) -> Self {
        ExecutionResult {
            data: result.data,
            errors: result.errors.into_iter().map(|e| GraphQLError::from_execution(source, e)).collect(),
            extensions: None,
        }
    }

    fn errors_only(errors: Vec<GraphQLError>) -> Self {
        ExecutionResult { data: None, errors, extensions: None }
    }
}

/// Parses a document (§4.2), translating any syntax error into the
/// wire-stable [`GraphQLError`] shape.
pub fn parse(source: &Source, options: ParseOptions) -> Result<Document, GraphQLError> {
    graphql_lang::parse_document(source, options).map_err(GraphQLError::from_syntax)
}

pub fn parse_value(text: &str) -> Result<ast::Value, GraphQLError> {
    graphql_lang::parse_value(text).map_err(GraphQLError::from_syntax)
}

pub fn parse_type(text: &str) -> Result<ast::Type, GraphQLError> {
    graphql_lang::parse_type(text).map_err(GraphQLError::from_syntax)
}

/// Prints a document back to GraphQL source text (§4.9).
pub fn print(document: &Document) -> String {
    graphql_lang::print(document)
}

/// Runs the operation validator (§4.5) and converts every resulting
/// [`graphql_validate::ValidationError`] to the wire shape against `source`.
pub fn validate(schema: &Schema, document: &Document, source: &Source) -> Vec<GraphQLError> {
    graphql_validate::validate(schema, document).into_iter().map(|e| GraphQLError::from_validation(source, e)).collect()
}

/// Runs the executor (§4.7) over an already-parsed, already-validated
/// document, converting the result's errors to the wire shape against
/// `source`. Callers that only have source text should use [`graphql`]
/// instead, which also parses and validates.
#[allow(clippy::too_many_arguments)]
pub async fn execute(
    schema: Arc<Schema>,
    document: Arc<Document>,
    source: &Source,
    operation_name: Option<&str>,
    raw_variables: Option<&serde_json::Map<String, serde_json::Value>>,
    root_value: AnyValue,
    context_value: AnyValue,
) -> ExecutionResult {
    match graphql_exec::build_context(schema, document, operation_name, raw_variables, root_value, context_value) {
        Ok(ctx) => ExecutionResult::from_exec(source, graphql_exec::execute(&ctx).await),
        Err(errors) => ExecutionResult::errors_only(errors.into_iter().map(|e| GraphQLError::from_execution(source, e)).collect()),
    }
}

/// Runs the subscription driver (§4.8), returning a stream of
/// wire-shaped [`ExecutionResult`]s, or a single-element error list if
/// subscription setup itself fails (§6 "a single `{errors}` result when
/// subscription setup fails").
pub async fn subscribe(
    schema: Arc<Schema>,
    document: Arc<Document>,
    source: Arc<Source>,
    operation_name: Option<&str>,
    raw_variables: Option<&serde_json::Map<String, serde_json::Value>>,
    context_value: AnyValue,
) -> Result<graphql_types::BoxStream<'static, ExecutionResult>, Vec<GraphQLError>> {
    use futures::stream::StreamExt;

    let operation_name = operation_name.map(|s| s.to_string());
    let raw_variables = raw_variables.cloned();
    let events = graphql_exec::subscribe(schema, document, operation_name.as_deref(), raw_variables.as_ref(), context_value)
        .await
        .map_err(|errors| errors.into_iter().map(|e| GraphQLError::from_execution(&source, e)).collect::<Vec<_>>())?;

    let mapped = events.map(move |result| ExecutionResult::from_exec(&source, result));
    Ok(Box::pin(mapped))
}

/// The one-call convenience wrapper (§6 "convenience wrapping parse +
/// validate + execute"): parses `source_text`, validates the result
/// against `schema`, and executes it if validation passed. Any stage's
/// failure short-circuits the remaining stages and is returned as an
/// error-only result, matching §7's "prevents execution" policy for
/// syntax/validation/coercion errors.
#[allow(clippy::too_many_arguments)]
pub async fn graphql(
    schema: Arc<Schema>,
    source_text: impl Into<String>,
    operation_name: Option<&str>,
    raw_variables: Option<&serde_json::Map<String, serde_json::Value>>,
    root_value: AnyValue,
    context_value: AnyValue,
) -> ExecutionResult {
    let source = Source::new(source_text);
    let document = match parse(&source, ParseOptions::default()) {
        Ok(doc) => doc,
        Err(e) => return ExecutionResult::errors_only(vec![e]),
    };

    let validation_errors = validate(&schema, &document, &source);
    if !validation_errors.is_empty() {
        return ExecutionResult::errors_only(validation_errors);
    }

    execute(schema, Arc::new(document), &source, operation_name, raw_variables, root_value, context_value).await
}
