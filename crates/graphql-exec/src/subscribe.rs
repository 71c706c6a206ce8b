//! The subscription driver (§4.8): a subscription operation resolves its
//! single root field's `subscribe` resolver to a stream of source events,
//! then maps every event through the ordinary executor with that event as
//! the root value, producing a stream of [`ExecutionResult`]s.
//!
//! Grounded on the reference implementation's `mapAsyncIterable`, which
//! enforces "at most one in-flight `next()` call" and always closes the
//! underlying iterator — including on early drop — rather than leaving it
//! half-consumed. [`MapStream`] reproduces that with `futures::stream::unfold`
//! plus a `Drop` impl standing in for `mapAsyncIterable`'s explicit
//! `aclose()` on early termination.

use crate::error::{ExecutionError, GraphQLError};
use crate::execute::{build_context, execute, ExecutionResult};
use futures::stream::{Stream, StreamExt};
use graphql_lang::ast::{Document, Field, OperationType};
use graphql_types::{AnyValue, BoxStream, ResolverError, Schema};
use indexmap::IndexMap;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

/// Wraps a [`SourceStream`](graphql_types::SourceStream), applying
/// `mapper` to each source event and yielding the mapped output — one
/// in-flight mapping at a time, by construction of `unfold`'s
/// poll-next-then-map sequencing.
pub struct MapStream<T> {
    inner: Pin<Box<dyn Stream<Item = T> + Send>>,
}

impl<T> MapStream<T> {
    fn new<S, F, Fut>(source: S, mapper: F) -> Self
    where
        S: Stream<Item = Result<AnyValue, ResolverError>> + Send + 'static,
        F: Fn(Result<AnyValue, ResolverError>) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let mapper = Arc::new(mapper);
        let stream = futures::stream::unfold((source, mapper), |(mut source, mapper)| async move {
            let event = source.next().await?;
            let mapped = mapper(event).await;
            Some((mapped, (source, mapper)))
        });
        MapStream { inner: Box::pin(stream) }
    }
}

impl<T> Stream for MapStream<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        self.inner.as_mut().poll_next(cx)
    }
}

/// Beyond the ordinary drop glue of `inner`, there is nothing extra to
/// release here: the wrapped `Stream` (typically built from the host's
/// `subscribe` resolver) is expected to free any underlying resource (a
/// channel, a DB cursor) from its own `Drop`, which runs regardless of
/// whether the stream was exhausted or simply dropped early.
impl<T> Drop for MapStream<T> {
    fn drop(&mut self) {}
}

/// Runs the subscribe phase (§4.8 "`subscribe`"): validates that the
/// operation is a subscription selecting exactly one root field, that the
/// field declares a `subscribe` resolver, calls it, and returns a stream
/// that maps each source event through `execute` with the event as root
/// value (§4.8 "Mapping: each event becomes the root value of one
/// ordinary `execute` pass over the rest of the selection set").
pub async fn subscribe(
    schema: Arc<Schema>,
    document: Arc<Document>,
    operation_name: Option<&str>,
    raw_variables: Option<&serde_json::Map<String, serde_json::Value>>,
    context_value: AnyValue,
) -> Result<BoxStream<'static, ExecutionResult>, Vec<GraphQLError>> {
    let placeholder_root: AnyValue = Arc::new(());
    let ctx = build_context(schema, document.clone(), operation_name, raw_variables, placeholder_root, context_value.clone())?;

    if ctx.operation.operation != OperationType::Subscription {
        return Err(vec![ExecutionError::NotASubscription.into_graphql_error()]);
    }

    let subscription_type = ctx
        .schema
        .subscription
        .clone()
        .ok_or(ExecutionError::MissingRootType { operation_type: "subscription" })
        .map_err(|e| vec![e.into_graphql_error()])?;

    let mut grouped: IndexMap<String, Vec<&Field>> = IndexMap::new();
    crate::collect::collect_fields(
        &ctx.schema,
        &ctx.fragments,
        &subscription_type.name,
        &ctx.operation.selection_set,
        &ctx.variable_values,
        &mut Default::default(),
        &mut grouped,
    );
    if grouped.len() != 1 {
        return Err(vec![ExecutionError::NotSingleRootField(grouped.len()).into_graphql_error()]);
    }
    let (_, field_nodes) = grouped.into_iter().next().unwrap();
    let first_node = field_nodes[0];
    let field_name = first_node.name.as_str();

    let field_def = subscription_type.field(field_name).ok_or_else(|| {
        vec![ExecutionError::NotSubscribable { parent_type: subscription_type.name.clone(), field: field_name.to_string() }.into_graphql_error()]
    })?;

    let subscribe_resolver = field_def.subscribe.clone().ok_or_else(|| {
        vec![ExecutionError::NotSubscribable { parent_type: subscription_type.name.clone(), field: field_name.to_string() }.into_graphql_error()]
    })?;

    let args = graphql_value::coerce_argument_values(&field_def.args, &first_node.arguments, &ctx.variable_values)
        .map_err(|errs| errs.into_iter().map(GraphQLError::from_coercion).collect::<Vec<_>>())?;

    let info = graphql_types::ResolveInfo {
        field_name: field_name.to_string(),
        field_nodes: Arc::new(field_nodes.iter().map(|f| (*f).clone()).collect()),
        return_type: field_def.field_type.clone(),
        parent_type_name: subscription_type.name.clone(),
        path: graphql_types::Path::new().with_key(field_name.to_string()),
        schema: ctx.schema.clone(),
        fragments: ctx.fragments.clone(),
        root_value: ctx.root_value.clone(),
        operation: ctx.operation.clone(),
        variable_values: ctx.variable_values.clone(),
        context: ctx.context_value.clone(),
    };

    let source_value: AnyValue = ctx.root_value.clone();
    let source_stream = subscribe_resolver(source_value, info, args, context_value.clone())
        .await
        .map_err(|e| vec![GraphQLError::new(e.message)])?;

    let schema = ctx.schema.clone();
    let operation_name = operation_name.map(|s| s.to_string());
    let raw_variables = raw_variables.cloned();

    let mapped = MapStream::new(source_stream, move |event| {
        let schema = schema.clone();
        let document = document.clone();
        let operation_name = operation_name.clone();
        let raw_variables = raw_variables.clone();
        let context_value = context_value.clone();
        async move {
            match event {
                Ok(root_value) => {
                    match build_context(schema, document, operation_name.as_deref(), raw_variables.as_ref(), root_value, context_value) {
                        Ok(event_ctx) => execute(&event_ctx).await,
                        Err(errors) => ExecutionResult { data: None, errors },
                    }
                }
                Err(resolver_err) => ExecutionResult { data: None, errors: vec![GraphQLError::new(resolver_err.message)] },
            }
        }
    });

    Ok(Box::pin(mapped))
}
