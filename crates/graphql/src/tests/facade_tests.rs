use super::schema_fixture::{book_schema, root_value};
use crate::{build_schema, execute, graphql, introspection_from_schema, introspection_query, parse, print, subscribe, validate};
use graphql_lang::parser::ParseOptions;
use graphql_lang::Source;
use graphql_types::{AnyValue, Value};
use std::sync::Arc;

fn field<'a>(data: &'a Value, key: &str) -> &'a Value {
    match data {
        Value::Object(fields) => fields.get(key).unwrap_or_else(|| panic!("missing field {key}")),
        other => panic!("expected object, found {other:?}"),
    }
}

#[test]
fn parse_and_print_round_trip_preserves_the_query_shape() {
    let source = Source::new("query { hello book { title } }");
    let document = parse(&source, ParseOptions::default()).expect("parse ok");
    let printed = print(&document);
    assert!(printed.contains("hello"));
    assert!(printed.contains("title"));

    let reparsed = parse(&Source::new(printed), ParseOptions::default()).expect("reprint parses");
    assert_eq!(reparsed.operations().count(), 1);
}

#[test]
fn parse_reports_a_located_syntax_error() {
    let source = Source::new("{ hello");
    let err = parse(&source, ParseOptions::default()).expect_err("must fail to parse");
    assert!(!err.locations.is_empty());
}

#[test]
fn validate_reports_unknown_field_with_a_line_and_column() {
    let schema = book_schema();
    let source = Source::new("{ nonsenseField }");
    let document = parse(&source, ParseOptions::default()).expect("parse ok");
    let errors = validate(&schema, &document, &source);
    assert!(errors.iter().any(|e| e.message.contains("nonsenseField")));
    assert!(errors[0].locations[0].line >= 1);
}

#[tokio::test]
async fn execute_resolves_fields_from_the_root_value_via_the_default_resolver() {
    let schema = Arc::new(book_schema());
    let source = Source::new("{ hello book { title author } }");
    let document = Arc::new(parse(&source, ParseOptions::default()).expect("parse ok"));
    let root: AnyValue = Arc::new(root_value());
    let context: AnyValue = Arc::new(());

    let result = execute(schema, document, &source, None, None, root, context).await;
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    let data = result.data.expect("data present");
    assert_eq!(field(&data, "hello").as_str(), Some("world"));
    let book = field(&data, "book");
    assert_eq!(field(book, "title").as_str(), Some("Dune"));
}

#[tokio::test]
async fn graphql_convenience_parses_validates_and_executes() {
    let schema = Arc::new(book_schema());
    let root: AnyValue = Arc::new(root_value());
    let context: AnyValue = Arc::new(());

    let result = graphql(schema, "{ hello }", None, None, root, context).await;
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    let data = result.data.expect("data present");
    assert_eq!(field(&data, "hello").as_str(), Some("world"));
}

#[tokio::test]
async fn graphql_convenience_short_circuits_before_executing_on_a_validation_error() {
    let schema = Arc::new(book_schema());
    let root: AnyValue = Arc::new(root_value());
    let context: AnyValue = Arc::new(());

    let result = graphql(schema, "{ nonsenseField }", None, None, root, context).await;
    assert_eq!(result.data, None);
    assert!(!result.errors.is_empty());
}

#[tokio::test]
async fn subscribe_on_a_field_without_a_subscribe_resolver_reports_one_error() {
    let schema = Arc::new(book_schema());
    let source = Arc::new(Source::new("subscription { ticks }"));
    let document = Arc::new(parse(&source, ParseOptions::default()).expect("parse ok"));
    let context: AnyValue = Arc::new(());

    let errors = subscribe(schema, document, source, None, None, context).await.expect_err("must fail to set up");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("does not define a subscribe resolver"));
}

#[test]
fn introspection_query_text_asks_for_the_schema() {
    assert!(introspection_query().contains("__schema"));
}

#[test]
fn introspection_from_schema_reports_the_query_root_and_its_types() {
    let schema = book_schema();
    let result = introspection_from_schema(&schema);
    let schema_value = field(&result, "__schema");
    let query_type = field(schema_value, "queryType");
    assert_eq!(field(query_type, "name").as_str(), Some("Query"));

    let Value::List(types) = field(schema_value, "types") else { panic!("types must be a list") };
    let has_book = types.iter().any(|t| matches!(t, Value::Object(fields) if fields.get("name").and_then(Value::as_str) == Some("Book")));
    assert!(has_book, "expected Book in introspected types");
}
