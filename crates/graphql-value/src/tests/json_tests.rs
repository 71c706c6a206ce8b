use crate::json::{json_to_value, value_to_json};
use graphql_types::Value;
use serde_json::json;

#[test]
fn round_trips_scalars_through_json() {
    assert_eq!(json_to_value(&json!(null)), Value::Null);
    assert_eq!(json_to_value(&json!(true)), Value::Boolean(true));
    assert_eq!(json_to_value(&json!(42)), Value::Int(42));
    assert_eq!(json_to_value(&json!(1.5)), Value::Float(1.5));
    assert_eq!(json_to_value(&json!("hi")), Value::String("hi".to_string()));
}

#[test]
fn round_trips_lists_and_objects() {
    let input = json!({"a": [1, 2, null], "b": "x"});
    let value = json_to_value(&input);
    let back = value_to_json(&value);
    assert_eq!(back, input);
}

#[test]
fn integers_too_wide_for_i64_fall_back_to_float() {
    let huge = json!(18_446_744_073_709_551_615_u64);
    match json_to_value(&huge) {
        Value::Float(_) => {}
        other => panic!("expected a Float fallback, got {other:?}"),
    }
}
