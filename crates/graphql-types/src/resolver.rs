//! Resolver contract (§6): field resolvers, abstract-type resolvers, and
//! subscribe resolvers. Source/context values are type-erased (`dyn Any`)
//! because the engine, like the reference implementation, is dynamically
//! typed: a `Schema` built at runtime does not know the Rust type of the
//! application's root/context objects ahead of time.
//!
//! Deferred values (§9 "Deferred values") are modeled directly as
//! `Future`s rather than a hand-rolled `Ready`/`Pending` enum: `async fn`
//! resolvers that never `.await` resolve on the first poll, which gives
//! the same "whole subtree stays synchronous" fast path §5 asks for
//! without a bespoke combinator type.

use crate::path::Path;
use crate::schema::Schema;
use crate::value::Value;
use graphql_lang::ast::{Field as FieldNode, FragmentDefinition, OperationDefinition};
use indexmap::IndexMap;
use std::any::Any;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub type AnyValue = Arc<dyn Any + Send + Sync>;
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
pub type BoxStream<'a, T> = Pin<Box<dyn futures::Stream<Item = T> + Send + 'a>>;

/// A located resolver failure (§7 error kind 5); converted by `graphql-exec`
/// into a wire `GraphQLError` carrying the field's location and path.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolverError {
    pub message: String,
    pub extensions: Option<Value>,
}

impl ResolverError {
    pub fn new(message: impl Into<String>) -> Self {
        ResolverError { message: message.into(), extensions: None }
    }
}

impl std::fmt::Display for ResolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ResolverError {}

/// `info` passed to every resolver (§4.7 "Per-field dispatch"). Owned
/// rather than borrowed so resolver futures can be `'static` and run on any
/// executor without tying their lifetime to the traversal stack frame.
#[derive(Clone)]
pub struct ResolveInfo {
    pub field_name: String,
    pub field_nodes: Arc<Vec<FieldNode>>,
    pub return_type: crate::type_ref::Type,
    pub parent_type_name: String,
    pub path: Path,
    pub schema: Arc<Schema>,
    pub fragments: Arc<IndexMap<String, FragmentDefinition>>,
    pub root_value: AnyValue,
    pub operation: Arc<OperationDefinition>,
    pub variable_values: Arc<IndexMap<String, Value>>,
    pub context: AnyValue,
}

pub type FieldResolver =
    Arc<dyn Fn(AnyValue, ResolveInfo, IndexMap<String, Value>, AnyValue) -> BoxFuture<'static, Result<Value, ResolverError>> + Send + Sync>;

/// Subscribe resolver (§4.8): unlike an ordinary `resolve`, a
/// subscription root field's `subscribe` produces a stream of source
/// events rather than a single value — each event later becomes the root
/// value of one ordinary `execute` pass over the rest of the operation's
/// selection set.
pub type SubscribeResolver =
    Arc<dyn Fn(AnyValue, ResolveInfo, IndexMap<String, Value>, AnyValue) -> BoxFuture<'static, Result<SourceStream, ResolverError>> + Send + Sync>;

/// Abstract-type resolution (§4.7 "Abstract"): returns the concrete object
/// type name, or `None` if the resolver declines (falls through to
/// `is_type_of`).
pub type TypeResolver = Arc<dyn Fn(AnyValue, ResolveInfo) -> BoxFuture<'static, Option<String>> + Send + Sync>;

/// Per-object `is_type_of` (§4.7): tried in declaration order when an
/// abstract type has no `resolve_type`.
pub type IsTypeOfResolver = Arc<dyn Fn(AnyValue, ResolveInfo) -> BoxFuture<'static, bool> + Send + Sync>;

/// Subscribe resolver's stream of source events (§4.8); each event is later
/// mapped through the ordinary executor as the root value of a query
/// execution.
pub type SourceStream = BoxStream<'static, Result<AnyValue, ResolverError>>;
