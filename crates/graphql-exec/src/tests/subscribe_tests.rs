use super::schema_fixture::query_schema;
use crate::subscribe::subscribe;
use futures::stream::StreamExt;
use graphql_lang::ast::Document;
use graphql_lang::parser::{parse_document, ParseOptions};
use graphql_lang::source::Source;
use graphql_types::{AnyValue, Value};
use std::sync::Arc;

fn parse(body: &str) -> Document {
    let source = Source::new(body);
    parse_document(&source, ParseOptions::default()).expect("parse ok")
}

fn field<'a>(data: &'a Value, key: &str) -> &'a Value {
    match data {
        Value::Object(fields) => fields.get(key).unwrap_or_else(|| panic!("missing field {key}")),
        other => panic!("expected object, found {other:?}"),
    }
}

#[tokio::test]
async fn countdown_subscription_yields_one_execution_result_per_event() {
    let schema = Arc::new(query_schema());
    let document = Arc::new(parse("subscription { countdown(from: 3) }"));
    let context: AnyValue = Arc::new(());
    let mut stream = subscribe(schema, document, None, None, context).await.expect("subscribe succeeds");

    let mut seen = Vec::new();
    while let Some(result) = stream.next().await {
        assert!(result.errors.is_empty(), "{:?}", result.errors);
        let data = result.data.expect("data present");
        seen.push(field(&data, "countdown").clone());
    }
    assert_eq!(seen, vec![Value::Int(3), Value::Int(2), Value::Int(1), Value::Int(0)]);
}

#[tokio::test]
async fn subscribe_on_a_query_operation_is_rejected() {
    let schema = Arc::new(query_schema());
    let document = Arc::new(parse("{ hello }"));
    let context: AnyValue = Arc::new(());
    let errors = subscribe(schema, document, None, None, context).await.expect_err("must reject a non-subscription operation");
    assert!(errors[0].message.contains("subscribe"));
}

#[tokio::test]
async fn subscription_with_more_than_one_root_field_is_rejected() {
    let schema = Arc::new(query_schema());
    let document = Arc::new(parse("subscription { countdown(from: 1) countdown2: countdown(from: 1) }"));
    let context: AnyValue = Arc::new(());
    let errors = subscribe(schema, document, None, None, context).await.expect_err("must reject more than one root field");
    assert!(errors[0].message.contains("exactly one root field"));
}

#[tokio::test]
async fn subscribing_to_a_field_without_a_subscribe_resolver_is_rejected() {
    let schema = Arc::new(query_schema());
    let document = Arc::new(parse("subscription { __typename }"));
    let context: AnyValue = Arc::new(());
    let errors = subscribe(schema, document, None, None, context).await.expect_err("must reject a field with no subscribe resolver");
    assert!(errors[0].message.contains("does not define a subscribe resolver"));
}
