//! A small schema built programmatically (fields wired with explicit
//! `resolve`/`subscribe` closures) rather than from SDL, the way
//! `graphql-validate`'s `star_wars_schema` fixture is built — SDL has no
//! syntax for attaching a resolver, so any fixture that needs one must
//! construct `Field`s directly.

use futures::future::{BoxFuture, FutureExt};
use graphql_types::{
    BoxStream, Field, InputValue, IsTypeOfResolver, NamedType, ObjectType, ResolveInfo, ResolverError,
    Schema, SourceStream, Thunk, Type, Value,
};
use indexmap::IndexMap;
use std::sync::Arc;

fn sync_resolver<F>(f: F) -> graphql_types::FieldResolver
where
    F: Fn(Value, IndexMap<String, Value>) -> Result<Value, ResolverError> + Send + Sync + 'static,
{
    Arc::new(move |source, _info, args, _ctx| -> BoxFuture<'static, Result<Value, ResolverError>> {
        let source_value = source.downcast_ref::<Value>().cloned().unwrap_or(Value::Null);
        futures::future::ready(f(source_value, args)).boxed()
    })
}

fn is_type_of(name: &'static str) -> IsTypeOfResolver {
    Arc::new(move |source, _info: ResolveInfo| -> BoxFuture<'static, bool> {
        let matches = source
            .downcast_ref::<Value>()
            .map(|v| matches!(v, Value::Object(fields) if fields.get("__typename").and_then(Value::as_str) == Some(name)))
            .unwrap_or(false);
        futures::future::ready(matches).boxed()
    })
}

/// `Named { name: String! }` implemented by `Dog` and `Cat`, exercised by
/// the abstract-type-resolution tests.
fn named_interface() -> Arc<graphql_types::InterfaceType> {
    Arc::new(graphql_types::InterfaceType::new(
        "Named",
        None,
        Vec::new(),
        Thunk::eager(Vec::new()),
        Thunk::eager({
            let mut fields = IndexMap::new();
            fields.insert("name".to_string(), Field::new("name", Type::non_null(Type::string())));
            fields
        }),
    ))
}

fn dog_type(named: Arc<graphql_types::InterfaceType>) -> Arc<ObjectType> {
    Arc::new(
        ObjectType::new(
            "Dog",
            None,
            Vec::new(),
            Thunk::eager(vec![named]),
            Thunk::eager({
                let mut fields = IndexMap::new();
                fields.insert("name".to_string(), Field::new("name", Type::non_null(Type::string())));
                fields.insert("bark".to_string(), Field::new("bark", Type::non_null(Type::string())));
                fields
            }),
        )
        .with_is_type_of(is_type_of("Dog")),
    )
}

fn cat_type(named: Arc<graphql_types::InterfaceType>) -> Arc<ObjectType> {
    Arc::new(
        ObjectType::new(
            "Cat",
            None,
            Vec::new(),
            Thunk::eager(vec![named]),
            Thunk::eager({
                let mut fields = IndexMap::new();
                fields.insert("name".to_string(), Field::new("name", Type::non_null(Type::string())));
                fields.insert("meow".to_string(), Field::new("meow", Type::non_null(Type::string())));
                fields
            }),
        )
        .with_is_type_of(is_type_of("Cat")),
    )
}

fn nested_type() -> Arc<ObjectType> {
    Arc::new(ObjectType::new("Nested", None, Vec::new(), Thunk::eager(Vec::new()), Thunk::eager({
        let mut fields = IndexMap::new();
        fields.insert("value".to_string(), Field::new("value", Type::non_null(Type::string())));
        // No resolver and absent from `root_value`'s nested object, so the
        // default resolver yields `null` — exercises a genuine non-null
        // propagation (not a resolver error) for the executor tests.
        fields.insert("val".to_string(), Field::new("val", Type::non_null(Type::string())));
        fields
    })))
}

/// Query: `hello: String!`, `shout(text: String!): String!`,
/// `secret: String` (errors, nullable), `secretNonNull: String!` (errors,
/// non-null — exercises propagation to the parent), `nested: Nested!`,
/// `numbers: [Int!]!`, `pet: Named!` (abstract type via `is_type_of`).
pub fn query_schema() -> Schema {
    let named = named_interface();
    let dog = dog_type(named.clone());
    let cat = cat_type(named.clone());
    let nested = nested_type();

    let mut query_fields = IndexMap::new();
    query_fields.insert("hello".to_string(), Field::new("hello", Type::non_null(Type::string())));

    let mut shout = Field::new("shout", Type::non_null(Type::string()));
    shout.args.insert(
        "text".to_string(),
        InputValue { value_type: Type::non_null(Type::string()), default_value: None, description: None },
    );
    shout.resolve = Some(sync_resolver(|_source, args| {
        let text = args.get("text").and_then(Value::as_str).unwrap_or_default();
        Ok(Value::String(text.to_uppercase()))
    }));
    query_fields.insert("shout".to_string(), shout);

    let mut secret = Field::new("secret", Type::string());
    secret.resolve = Some(sync_resolver(|_source, _args| Err(ResolverError::new("secrets are not for telling"))));
    query_fields.insert("secret".to_string(), secret);

    let mut secret_non_null = Field::new("secretNonNull", Type::non_null(Type::string()));
    secret_non_null.resolve = Some(sync_resolver(|_source, _args| Err(ResolverError::new("secrets are not for telling"))));
    query_fields.insert("secretNonNull".to_string(), secret_non_null);

    query_fields.insert("nested".to_string(), Field::new("nested", Type::non_null(Type::named(NamedType::Object(nested.clone())))));
    query_fields.insert("numbers".to_string(), Field::new("numbers", Type::non_null(Type::list(Type::non_null(Type::int())))));

    let mut pet = Field::new("pet", Type::non_null(Type::named(NamedType::Interface(named.clone()))));
    pet.resolve = Some(sync_resolver(|_source, _args| {
        let mut obj = IndexMap::new();
        obj.insert("__typename".to_string(), Value::String("Dog".to_string()));
        obj.insert("name".to_string(), Value::String("Rex".to_string()));
        obj.insert("bark".to_string(), Value::String("Woof".to_string()));
        Ok(Value::Object(obj))
    }));
    query_fields.insert("pet".to_string(), pet);

    let query = Arc::new(ObjectType::new("Query", None, Vec::new(), Thunk::eager(Vec::new()), Thunk::eager(query_fields)));

    let mut mutation_fields = IndexMap::new();
    let mut increment = Field::new("increment", Type::non_null(Type::int()));
    increment.args.insert(
        "by".to_string(),
        InputValue { value_type: Type::non_null(Type::int()), default_value: None, description: None },
    );
    increment.resolve = Some(sync_resolver(|source, args| {
        let base = match source {
            Value::Int(i) => i,
            _ => 0,
        };
        let by = args.get("by").and_then(|v| if let Value::Int(i) = v { Some(*i) } else { None }).unwrap_or(0);
        Ok(Value::Int(base + by))
    }));
    mutation_fields.insert("increment".to_string(), increment);
    let mutation = Arc::new(ObjectType::new("Mutation", None, Vec::new(), Thunk::eager(Vec::new()), Thunk::eager(mutation_fields)));

    let mut subscription_fields = IndexMap::new();
    let mut countdown = Field::new("countdown", Type::non_null(Type::int()));
    countdown.args.insert(
        "from".to_string(),
        InputValue { value_type: Type::non_null(Type::int()), default_value: None, description: None },
    );
    countdown.resolve = Some(sync_resolver(|source, _args| Ok(source)));
    countdown.subscribe = Some(Arc::new(move |_source, _info, args, _ctx| -> BoxFuture<'static, Result<SourceStream, ResolverError>> {
        let from = args.get("from").and_then(|v| if let Value::Int(i) = v { Some(*i) } else { None }).unwrap_or(0);
        let events: Vec<Result<graphql_types::AnyValue, ResolverError>> =
            (0..=from).rev().map(|n| Ok(Arc::new(Value::Int(n)) as graphql_types::AnyValue)).collect();
        let stream: BoxStream<'static, Result<graphql_types::AnyValue, ResolverError>> = Box::pin(futures::stream::iter(events));
        futures::future::ready(Ok(stream)).boxed()
    }));
    subscription_fields.insert("countdown".to_string(), countdown);
    let subscription = Arc::new(ObjectType::new("Subscription", None, Vec::new(), Thunk::eager(Vec::new()), Thunk::eager(subscription_fields)));

    Schema::builder()
        .query(query)
        .mutation(mutation)
        .subscription(subscription)
        .extra_type(NamedType::Interface(named))
        .extra_type(NamedType::Object(dog))
        .extra_type(NamedType::Object(cat))
        .build()
        .expect("fixture schema must build")
}

pub fn root_value() -> Value {
    let mut nested = IndexMap::new();
    nested.insert("value".to_string(), Value::String("nested value".to_string()));

    let mut root = IndexMap::new();
    root.insert("hello".to_string(), Value::String("world".to_string()));
    root.insert("nested".to_string(), Value::Object(nested));
    root.insert("numbers".to_string(), Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]));
    Value::Object(root)
}
