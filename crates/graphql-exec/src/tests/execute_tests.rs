use super::schema_fixture::{query_schema, root_value};
use crate::execute::{build_context, execute_sync};
use graphql_lang::parser::{parse_document, ParseOptions};
use graphql_lang::source::Source;
use graphql_types::{AnyValue, Value};
use std::sync::Arc;

fn run(body: &str, operation_name: Option<&str>) -> crate::execute::ExecutionResult {
    let schema = Arc::new(query_schema());
    let source = Source::new(body);
    let document = Arc::new(parse_document(&source, ParseOptions::default()).expect("parse ok"));
    let root: AnyValue = Arc::new(root_value());
    let context: AnyValue = Arc::new(());
    let ctx = build_context(schema, document, operation_name, None, root, context).expect("context builds");
    execute_sync(&ctx)
}

fn field<'a>(data: &'a Value, key: &str) -> &'a Value {
    match data {
        Value::Object(fields) => fields.get(key).unwrap_or_else(|| panic!("missing field {key}")),
        other => panic!("expected object, found {other:?}"),
    }
}

#[test]
fn resolves_a_plain_field_from_the_root_value() {
    let result = run("{ hello }", None);
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    let data = result.data.expect("data present");
    assert_eq!(field(&data, "hello").as_str(), Some("world"));
}

#[test]
fn coerces_and_passes_arguments_to_the_resolver() {
    let result = run(r#"{ shout(text: "hi") }"#, None);
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    let data = result.data.expect("data present");
    assert_eq!(field(&data, "shout").as_str(), Some("HI"));
}

#[test]
fn resolves_a_nested_object_field() {
    let result = run("{ nested { value } }", None);
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    let data = result.data.expect("data present");
    let nested = field(&data, "nested");
    assert_eq!(field(nested, "value").as_str(), Some("nested value"));
}

#[test]
fn resolves_a_list_field() {
    let result = run("{ numbers }", None);
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    let data = result.data.expect("data present");
    assert_eq!(field(&data, "numbers"), &Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]));
}

#[test]
fn typename_meta_field_reports_the_runtime_type() {
    let result = run("{ __typename hello }", None);
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    let data = result.data.expect("data present");
    assert_eq!(field(&data, "__typename").as_str(), Some("Query"));
}

#[test]
fn abstract_type_resolves_via_is_type_of() {
    let result = run("{ pet { __typename name ... on Dog { bark } } }", None);
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    let data = result.data.expect("data present");
    let pet = field(&data, "pet");
    assert_eq!(field(pet, "__typename").as_str(), Some("Dog"));
    assert_eq!(field(pet, "name").as_str(), Some("Rex"));
    assert_eq!(field(pet, "bark").as_str(), Some("Woof"));
}

#[test]
fn nullable_field_error_is_absorbed_to_null_without_failing_the_response() {
    let result = run("{ hello secret }", None);
    let data = result.data.expect("data present");
    assert_eq!(field(&data, "hello").as_str(), Some("world"));
    assert_eq!(field(&data, "secret"), &Value::Null);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].message.contains("secrets are not for telling"));
}

#[test]
fn non_null_field_returning_null_nulls_the_nearest_nullable_ancestor() {
    let result = run("{ nested { val } }", None);
    let data = result.data.expect("data present");
    assert_eq!(field(&data, "nested"), &Value::Null);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].message, "Cannot return null for non-nullable field Nested.val.");
    assert_eq!(
        result.errors[0].path,
        vec![graphql_types::PathSegment::Key("nested".to_string()), graphql_types::PathSegment::Key("val".to_string())]
    );
}

#[test]
fn non_null_field_error_propagates_null_to_the_whole_response() {
    let result = run("{ hello secretNonNull }", None);
    assert_eq!(result.data, Some(Value::Null));
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].message.contains("secrets are not for telling"));
}

#[test]
fn mutation_root_fields_execute_serially_in_document_order() {
    let result = run("mutation { first: increment(by: 1) second: increment(by: 10) }", None);
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    let data = result.data.expect("data present");
    assert_eq!(field(&data, "first"), &Value::Int(1));
    assert_eq!(field(&data, "second"), &Value::Int(10));
}

#[test]
fn selecting_an_operation_by_name_runs_only_that_operation() {
    let result = run(
        r#"
        query One { hello }
        query Two { numbers }
        "#,
        Some("Two"),
    );
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    let data = result.data.expect("data present");
    assert_eq!(field(&data, "numbers"), &Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]));
}

#[test]
fn unknown_operation_name_is_a_request_level_error() {
    let result = run("query One { hello }", Some("Missing"));
    assert_eq!(result.data, None);
    assert!(result.errors[0].message.contains("Unknown operation named"));
}
