//! The executor (§4.7): given a validated document, a schema, a root
//! value, a context value, variable values, and an operation name, walks
//! the selection set and produces a response tree.
//!
//! Ported from graphql-js's `execute`/`executeOperation`/
//! `executeFieldsSerially`/`executeFields`/`executeField`/`completeValue`
//! family. The null-propagation shape is kept as close to the original as
//! idiomatic Rust allows: [`complete_value`] is the raw completion (it may
//! return a propagation signal that should bubble to the parent), and
//! [`complete_value_catching`] is the "catch point" that decides, based on
//! the field's nullability, whether to absorb that signal into a `null` or
//! let it continue upward (§4.7 "Null propagation"). Every catch point
//! that observes a failure records exactly one [`GraphQLError`] on
//! [`ExecutionContext::errors`] before propagating, mirroring
//! `exeContext.errors` in the reference algorithm — the field futures
//! themselves run concurrently (via `join_all`, not spawned tasks, so no
//! real thread contention), hence a `Mutex` rather than a plain `Vec`.

use crate::collect::{collect_fields, index_fragments};
use crate::default_resolver;
use crate::error::{ExecutionError, GraphQLError};
use futures::future::{join_all, BoxFuture, FutureExt};
use graphql_lang::ast::{self, Document, OperationDefinition, OperationType};
use graphql_types::{AnyValue, NamedType, ObjectType, Path, ResolveInfo, Schema, Type, Value};
use graphql_value::{coerce_argument_values, coerce_variable_values, serialize_output};
use indexmap::IndexMap;
use std::sync::{Arc, Mutex};
use std::task::{Context as TaskContext, Poll, RawWaker, RawWakerVTable, Waker};

/// Inputs to one execution (§4.7 "Execution context"): everything that's
/// fixed for the lifetime of a single request and threaded down through
/// every field/selection-set call instead of being recomputed, plus the
/// shared error accumulator every catch point appends to.
pub struct ExecutionContext {
    pub schema: Arc<Schema>,
    pub document: Arc<Document>,
    pub fragments: Arc<IndexMap<String, ast::FragmentDefinition>>,
    pub operation: Arc<OperationDefinition>,
    pub variable_values: Arc<IndexMap<String, Value>>,
    pub root_value: AnyValue,
    pub context_value: AnyValue,
    errors: Mutex<Vec<GraphQLError>>,
}

impl ExecutionContext {
    fn record_error(&self, message: impl Into<String>, loc: Option<ast::Location>, path: &Path) {
        let error = GraphQLError::at(message, loc.into_iter().collect(), path.to_vec());
        tracing::debug!(message = %error.message, path = ?error.path, "field error");
        self.errors.lock().unwrap_or_else(|e| e.into_inner()).push(error);
    }
}

/// A full execution result (§4.7, §6): `data` is `None` only when an
/// error occurred before any field was resolved (invalid operation
/// selection, variable coercion failure); otherwise it is always
/// present, with `null` standing in for any subtree that failed under a
/// non-null boundary.
#[derive(Clone, Debug, Default)]
pub struct ExecutionResult {
    pub data: Option<Value>,
    pub errors: Vec<GraphQLError>,
}

/// Internal propagation signal (§4.7 "Null propagation"): the underlying
/// `GraphQLError` has already been recorded on `ExecutionContext::errors`
/// by the time this is returned, so every catch point just needs to
/// decide absorb-vs-propagate, never re-record.
struct PropagateNull;

type FieldResult = Result<Value, PropagateNull>;

/// Selects the operation to run (§4.7 "Operation selection"): the sole
/// operation if the document has only one, else the one matching
/// `operation_name`.
fn get_operation<'a>(document: &'a Document, operation_name: Option<&str>) -> Result<&'a OperationDefinition, ExecutionError> {
    match operation_name {
        Some(name) => document
            .operations()
            .find(|op| op.name.as_ref().map(|n| n.as_str()) == Some(name))
            .ok_or_else(|| ExecutionError::UnknownOperationName(name.to_string())),
        None => {
            let mut operations = document.operations();
            let first = operations.next().ok_or(ExecutionError::NoOperation)?;
            if operations.next().is_some() {
                return Err(ExecutionError::AmbiguousOperation);
            }
            Ok(first)
        }
    }
}

fn root_type_for<'a>(schema: &'a Schema, operation: &OperationDefinition) -> Result<&'a Arc<ObjectType>, ExecutionError> {
    match operation.operation {
        OperationType::Query => schema.query.as_ref().ok_or(ExecutionError::MissingRootType { operation_type: "query" }),
        OperationType::Mutation => schema.mutation.as_ref().ok_or(ExecutionError::MissingRootType { operation_type: "mutation" }),
        OperationType::Subscription => {
            schema.subscription.as_ref().ok_or(ExecutionError::MissingRootType { operation_type: "subscription" })
        }
    }
}

/// Builds the request-scoped [`ExecutionContext`], coercing variables
/// against the selected operation's declarations (§4.6 "Variables").
pub fn build_context(
    schema: Arc<Schema>,
    document: Arc<Document>,
    operation_name: Option<&str>,
    raw_variables: Option<&serde_json::Map<String, serde_json::Value>>,
    root_value: AnyValue,
    context_value: AnyValue,
) -> Result<ExecutionContext, Vec<GraphQLError>> {
    let operation = get_operation(&document, operation_name).map_err(|e| vec![e.into_graphql_error()])?;
    let variable_values = coerce_variable_values(&schema, &operation.variable_definitions, raw_variables)
        .map_err(|errs| errs.into_iter().map(GraphQLError::from_coercion).collect::<Vec<_>>())?;
    let fragments = index_fragments(&document);
    let operation = operation.clone();
    Ok(ExecutionContext {
        schema,
        document,
        fragments: Arc::new(fragments),
        operation: Arc::new(operation),
        variable_values: Arc::new(variable_values),
        root_value,
        context_value,
        errors: Mutex::new(Vec::new()),
    })
}

/// Executes an already-built [`ExecutionContext`] (§4.7 "Top-level
/// dispatch"): query and subscription root fields resolve concurrently
/// (§5 "Query/subscription root fields execute concurrently"); mutation
/// root fields resolve one at a time, in document order (§5 "Mutation
/// root fields execute serially").
pub async fn execute(ctx: &ExecutionContext) -> ExecutionResult {
    let root_type = match root_type_for(&ctx.schema, &ctx.operation) {
        Ok(t) => t,
        Err(e) => return ExecutionResult { data: None, errors: vec![e.into_graphql_error()] },
    };

    let mut grouped: IndexMap<String, Vec<&ast::Field>> = IndexMap::new();
    collect_fields(
        &ctx.schema,
        &ctx.fragments,
        &root_type.name,
        &ctx.operation.selection_set,
        &ctx.variable_values,
        &mut Default::default(),
        &mut grouped,
    );

    let data = match ctx.operation.operation {
        OperationType::Mutation => execute_fields_serially(ctx, root_type, ctx.root_value.clone(), &grouped, &Path::new()).await,
        OperationType::Query | OperationType::Subscription => {
            execute_fields_parallel(ctx, root_type, ctx.root_value.clone(), &grouped, &Path::new()).await
        }
    };

    let errors = std::mem::take(&mut *ctx.errors.lock().unwrap_or_else(|e| e.into_inner()));
    ExecutionResult { data: Some(data.unwrap_or(Value::Null)), errors }
}

/// Blocking convenience wrapper (§4.7 "`execute_sync`"): runs `execute`
/// to completion on a hand-rolled poll-once executor. Valid only when
/// every resolver in the schema resolves without ever yielding — if one
/// does yield, the future is polled again immediately (a busy spin) since
/// this workspace's `futures` dependency excludes the `executor` feature
/// and pulling in a full async runtime for a synchronous convenience
/// wrapper would be the wrong tool for the job.
pub fn execute_sync(ctx: &ExecutionContext) -> ExecutionResult {
    let mut fut = Box::pin(execute(ctx));
    let waker = noop_waker();
    let mut task_cx = TaskContext::from_waker(&waker);
    loop {
        match fut.as_mut().poll(&mut task_cx) {
            Poll::Ready(result) => return result,
            Poll::Pending => continue,
        }
    }
}

fn noop_waker() -> Waker {
    fn no_op(_: *const ()) {}
    fn clone(_: *const ()) -> RawWaker {
        RawWaker::new(std::ptr::null(), &VTABLE)
    }
    static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, no_op, no_op, no_op);
    unsafe { Waker::from_raw(RawWaker::new(std::ptr::null(), &VTABLE)) }
}

/// Executes every field of a collected selection set concurrently (§4.7
/// "Per-field dispatch"). Returns `Err(PropagateNull)` — rather than
/// silently folding it into `Value::Null` — whenever any field within the
/// set propagated a non-null violation, so that an enclosing non-null
/// object-typed field sees the failure and can itself decide to
/// propagate further (§4.7 "Null propagation" composes across levels).
async fn execute_fields_parallel(
    ctx: &ExecutionContext,
    parent_type: &Arc<ObjectType>,
    source: AnyValue,
    grouped: &IndexMap<String, Vec<&ast::Field>>,
    path: &Path,
) -> FieldResult {
    let futures_iter = grouped.iter().map(|(response_key, field_nodes)| {
        let source = source.clone();
        async move {
            let result = execute_field(ctx, parent_type, source, response_key, field_nodes, path).await;
            (response_key.clone(), result)
        }
    });
    let results = join_all(futures_iter).await;
    let mut out = IndexMap::new();
    for (key, result) in results {
        out.insert(key, result?);
    }
    Ok(Value::Object(out))
}

async fn execute_fields_serially(
    ctx: &ExecutionContext,
    parent_type: &Arc<ObjectType>,
    source: AnyValue,
    grouped: &IndexMap<String, Vec<&ast::Field>>,
    path: &Path,
) -> FieldResult {
    let mut out = IndexMap::new();
    for (response_key, field_nodes) in grouped {
        let value = execute_field(ctx, parent_type, source.clone(), response_key, field_nodes, path).await?;
        out.insert(response_key.clone(), value);
    }
    Ok(Value::Object(out))
}

/// Resolves and completes a single field (§4.7 "Per-field dispatch"):
/// looks up the field definition, coerces arguments, calls the resolver
/// (or the default resolver), then completes the resolved value against
/// the field's declared type. Unknown fields resolve to `null` rather
/// than erroring — validation is responsible for rejecting a document
/// that selects a field the schema doesn't declare.
async fn execute_field(
    ctx: &ExecutionContext,
    parent_type: &Arc<ObjectType>,
    source: AnyValue,
    response_key: &str,
    field_nodes: &[&ast::Field],
    path: &Path,
) -> FieldResult {
    let field_path = path.with_key(response_key.to_string());
    let first_node = field_nodes[0];
    let field_name = first_node.name.as_str();

    if field_name == "__typename" {
        return Ok(Value::String(parent_type.name.clone()));
    }

    let field_def = match parent_type.field(field_name) {
        Some(f) => f,
        None => return Ok(Value::Null),
    };

    let args = match coerce_argument_values(&field_def.args, &first_node.arguments, &ctx.variable_values) {
        Ok(args) => args,
        Err(errs) => {
            for e in errs {
                ctx.record_error(e.message, first_node.loc, &field_path);
            }
            return if field_def.field_type.is_non_null() { Err(PropagateNull) } else { Ok(Value::Null) };
        }
    };

    let info = ResolveInfo {
        field_name: field_name.to_string(),
        field_nodes: Arc::new(field_nodes.iter().map(|f| (*f).clone()).collect()),
        return_type: field_def.field_type.clone(),
        parent_type_name: parent_type.name.clone(),
        path: field_path.clone(),
        schema: ctx.schema.clone(),
        fragments: ctx.fragments.clone(),
        root_value: ctx.root_value.clone(),
        operation: ctx.operation.clone(),
        variable_values: ctx.variable_values.clone(),
        context: ctx.context_value.clone(),
    };

    let resolver = field_def
        .resolve
        .clone()
        .unwrap_or_else(|| Arc::new(default_resolver::default_resolve) as graphql_types::FieldResolver);
    let resolved = resolver(source, info, args, ctx.context_value.clone()).await;

    match resolved {
        Ok(value) => {
            complete_value_catching(ctx, &field_def.field_type, field_nodes, (&parent_type.name, field_name), value, &field_path).await
        }
        Err(resolver_err) => {
            ctx.record_error(resolver_err.message, first_node.loc, &field_path);
            if field_def.field_type.is_non_null() {
                Err(PropagateNull)
            } else {
                Ok(Value::Null)
            }
        }
    }
}

/// The "catch point" (§4.7 "Null propagation"): absorbs a propagated
/// signal into `null` when this field's type is nullable, otherwise lets
/// it continue propagating to the parent field/list item.
async fn complete_value_catching(
    ctx: &ExecutionContext,
    return_type: &Type,
    field_nodes: &[&ast::Field],
    field_coords: (&str, &str),
    value: Value,
    path: &Path,
) -> FieldResult {
    match complete_value(ctx, return_type, field_nodes, field_coords, value, path).await {
        Ok(v) => Ok(v),
        Err(PropagateNull) => {
            if return_type.is_non_null() {
                Err(PropagateNull)
            } else {
                Ok(Value::Null)
            }
        }
    }
}

/// Raw value completion (§4.7 "Value completion"): `Null`, list, leaf
/// (scalar/enum, via output serialization), or composite (object /
/// abstract-type resolution then sub-selection execution), recursing
/// through `List`/`NonNull` wrappers. Records the error at the point of
/// failure and returns the propagation signal; never itself decides to
/// absorb it into `null` — that's `complete_value_catching`'s job at each
/// catch point (field, list item).
fn complete_value<'a>(
    ctx: &'a ExecutionContext,
    return_type: &'a Type,
    field_nodes: &'a [&'a ast::Field],
    field_coords: (&'a str, &'a str),
    value: Value,
    path: &'a Path,
) -> BoxFuture<'a, FieldResult> {
    async move {
        if let Type::NonNull(inner) = return_type {
            let inner_type: Type = (**inner).clone().into();
            if value.is_null() {
                ctx.record_error(
                    format!("Cannot return null for non-nullable field {}.{}.", field_coords.0, field_coords.1),
                    field_nodes[0].loc,
                    path,
                );
                return Err(PropagateNull);
            }
            return complete_value(ctx, &inner_type, field_nodes, field_coords, value, path).await;
        }

        if value.is_null() {
            return Ok(Value::Null);
        }

        match return_type {
            Type::List(item_type) => {
                let Value::List(items) = value else {
                    ctx.record_error("Expected Iterable, but did not find one for field.".to_string(), field_nodes[0].loc, path);
                    return Err(PropagateNull);
                };
                let futures_iter = items.into_iter().enumerate().map(|(i, item)| {
                    let item_path = path.with_index(i);
                    async move { complete_value_catching(ctx, item_type, field_nodes, field_coords, item, &item_path).await }
                });
                let results = join_all(futures_iter).await;
                let mut out = Vec::with_capacity(results.len());
                for r in results {
                    match r {
                        Ok(v) => out.push(v),
                        Err(PropagateNull) => return Err(PropagateNull),
                    }
                }
                Ok(Value::List(out))
            }
            Type::Named(named) => complete_named_value(ctx, named, field_nodes, value, path).await,
            Type::NonNull(_) => unreachable!("handled above"),
        }
    }
    .boxed()
}

async fn complete_named_value<'a>(
    ctx: &'a ExecutionContext,
    named: &'a NamedType,
    field_nodes: &'a [&'a ast::Field],
    value: Value,
    path: &'a Path,
) -> FieldResult {
    match named {
        NamedType::Scalar(_) | NamedType::Enum(_) => serialize_output(&value, &Type::Named(named.clone()), path).map_err(|e| {
            ctx.record_error(e.message, field_nodes[0].loc, path);
            PropagateNull
        }),
        NamedType::Object(obj) => execute_sub_selection(ctx, obj, value, field_nodes, path).await,
        NamedType::Interface(_) | NamedType::Union(_) => {
            let Some(obj) = resolve_abstract_type(ctx, named, &value, field_nodes, path).await else {
                ctx.record_error(
                    format!("Abstract type \"{}\" must resolve to an Object type.", named.name()),
                    field_nodes[0].loc,
                    path,
                );
                return Err(PropagateNull);
            };
            execute_sub_selection(ctx, &obj, value, field_nodes, path).await
        }
        NamedType::InputObject(_) => unreachable!("input-object cannot be an output type (schema validation rejects this)"),
    }
}

/// Collects and executes a composite value's sub-selection, merging
/// every field node's selection set first (§4.7 "Field merging": same
/// response key under the same runtime type shares one collected set of
/// sub-selections). A `null` composite result under a non-null-typed
/// field has already been turned into an error by whichever leaf field
/// inside it hit the non-null violation; that error is recorded at the
/// point of violation, so this frame just re-propagates.
async fn execute_sub_selection<'a>(
    ctx: &'a ExecutionContext,
    object_type: &Arc<ObjectType>,
    value: Value,
    field_nodes: &'a [&'a ast::Field],
    path: &'a Path,
) -> FieldResult {
    let mut grouped: IndexMap<String, Vec<&ast::Field>> = IndexMap::new();
    for field_node in field_nodes {
        if let Some(sub_selection) = &field_node.selection_set {
            collect_fields(
                &ctx.schema,
                &ctx.fragments,
                &object_type.name,
                sub_selection,
                &ctx.variable_values,
                &mut Default::default(),
                &mut grouped,
            );
        }
    }
    let source: AnyValue = Arc::new(value);
    execute_fields_parallel(ctx, object_type, source, &grouped, path).await
}

/// Abstract-type resolution (§4.7 "Abstract"): `resolve_type` if present,
/// else each possible type's `is_type_of` in declaration order.
async fn resolve_abstract_type(
    ctx: &ExecutionContext,
    named: &NamedType,
    value: &Value,
    field_nodes: &[&ast::Field],
    path: &Path,
) -> Option<Arc<ObjectType>> {
    let resolve_type = match named {
        NamedType::Interface(iface) => iface.resolve_type.clone(),
        NamedType::Union(u) => u.resolve_type.clone(),
        _ => None,
    };

    let info = ResolveInfo {
        field_name: field_nodes[0].name.as_str().to_string(),
        field_nodes: Arc::new(field_nodes.iter().map(|f| (*f).clone()).collect()),
        return_type: Type::Named(named.clone()),
        parent_type_name: named.name().to_string(),
        path: path.clone(),
        schema: ctx.schema.clone(),
        fragments: ctx.fragments.clone(),
        root_value: ctx.root_value.clone(),
        operation: ctx.operation.clone(),
        variable_values: ctx.variable_values.clone(),
        context: ctx.context_value.clone(),
    };

    let source: AnyValue = Arc::new(value.clone());

    if let Some(resolve_type) = resolve_type {
        if let Some(type_name) = resolve_type(source.clone(), info.clone()).await {
            return ctx.schema.possible_types(named.name()).into_iter().find(|t| t.name == type_name);
        }
    }

    for candidate in ctx.schema.possible_types(named.name()) {
        if let Some(is_type_of) = candidate.is_type_of.clone() {
            if is_type_of(source.clone(), info.clone()).await {
                return Some(candidate);
            }
        }
    }
    None
}
