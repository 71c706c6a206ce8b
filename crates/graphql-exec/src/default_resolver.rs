//! The default field resolver (§4.7 "Default resolver"): every level of
//! the response below the root is a `graphql_types::Value`, so there is
//! exactly one default lookup strategy rather than one per host-chosen
//! root type. Fields with an explicit `resolve` never reach this path.

use futures::future::FutureExt;
use graphql_types::{BoxFuture, ResolveInfo, ResolverError, Value};
use indexmap::IndexMap;
use std::any::Any;
use std::sync::Arc;

/// Property access by response field name (§4.7): `source.field_name` for
/// an object value, `null` for anything else (including a source that
/// simply has no such key).
pub fn default_resolve(
    source: Arc<dyn Any + Send + Sync>,
    info: ResolveInfo,
    _args: IndexMap<String, Value>,
    _context: Arc<dyn Any + Send + Sync>,
) -> BoxFuture<'static, Result<Value, ResolverError>> {
    let value = source
        .downcast_ref::<Value>()
        .and_then(|v| match v {
            Value::Object(fields) => fields.get(&info.field_name).cloned(),
            _ => None,
        })
        .unwrap_or(Value::Null);
    futures::future::ok(value).boxed()
}
