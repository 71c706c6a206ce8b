use crate::coerce::{coerce_argument_values, coerce_literal, coerce_variable_values, serialize_output};
use graphql_types::{Path, Value};
use indexmap::IndexMap;

fn schema_with_input_object() -> graphql_types::Schema {
    graphql_types::build_schema(
        r#"
        input PointInput {
            x: Int!
            y: Int = 0
        }

        enum Color {
            RED
            GREEN
            BLUE
        }

        type Query {
            distance(from: PointInput!, to: PointInput!): Float
            paint(color: Color = RED): String
            echo(values: [Int!]): [Int!]
        }
        "#,
    )
    .expect("valid schema")
}

fn field_arg_type(schema: &graphql_types::Schema, field_name: &str, arg_name: &str) -> graphql_types::Type {
    let query = schema.query.clone().expect("query root");
    query.field(field_name).expect("field exists").args.get(arg_name).expect("arg exists").value_type.clone()
}

#[test]
fn coerces_input_object_literal_applying_default() {
    let schema = schema_with_input_object();
    let ty = field_arg_type(&schema, "distance", "from");
    let literal = graphql_lang::parse_value("{x: 3}").expect("parses");
    let value = coerce_literal(&literal, &ty, None, &Path::new()).expect("coerces");
    match value {
        Value::Object(fields) => {
            assert_eq!(fields.get("x"), Some(&Value::Int(3)));
            assert_eq!(fields.get("y"), Some(&Value::Int(0)));
        }
        other => panic!("expected object, got {other:?}"),
    }
}

#[test]
fn missing_required_input_object_field_is_an_error() {
    let schema = schema_with_input_object();
    let ty = field_arg_type(&schema, "distance", "from");
    let literal = graphql_lang::parse_value("{y: 5}").expect("parses");
    let err = coerce_literal(&literal, &ty, None, &Path::new()).unwrap_err();
    assert!(err.message.contains('x'), "error should mention missing field: {}", err.message);
}

#[test]
fn unknown_input_object_field_is_an_error() {
    let schema = schema_with_input_object();
    let ty = field_arg_type(&schema, "distance", "from");
    let literal = graphql_lang::parse_value("{x: 1, z: 2}").expect("parses");
    let err = coerce_literal(&literal, &ty, None, &Path::new()).unwrap_err();
    assert!(err.message.contains('z'));
}

#[test]
fn coerces_enum_literal_to_its_internal_value() {
    let schema = schema_with_input_object();
    let ty = field_arg_type(&schema, "paint", "color");
    let literal = graphql_lang::parse_value("GREEN").expect("parses");
    let value = coerce_literal(&literal, &ty, None, &Path::new()).expect("coerces");
    assert_eq!(value, Value::Enum("GREEN".to_string()));
}

#[test]
fn unknown_enum_value_is_an_error() {
    let schema = schema_with_input_object();
    let ty = field_arg_type(&schema, "paint", "color");
    let literal = graphql_lang::parse_value("PURPLE").expect("parses");
    assert!(coerce_literal(&literal, &ty, None, &Path::new()).is_err());
}

#[test]
fn coerces_list_and_singleton_wrapping() {
    let schema = schema_with_input_object();
    let ty = field_arg_type(&schema, "echo", "values");
    let list_literal = graphql_lang::parse_value("[1, 2, 3]").expect("parses");
    let value = coerce_literal(&list_literal, &ty, None, &Path::new()).expect("coerces");
    assert_eq!(value, Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]));

    let single_literal = graphql_lang::parse_value("5").expect("parses");
    let value = coerce_literal(&single_literal, &ty, None, &Path::new()).expect("coerces");
    assert_eq!(value, Value::List(vec![Value::Int(5)]));
}

#[test]
fn variable_reference_resolves_from_supplied_map() {
    let schema = schema_with_input_object();
    let ty = field_arg_type(&schema, "paint", "color");
    let mut vars = IndexMap::new();
    vars.insert("c".to_string(), Value::Enum("BLUE".to_string()));
    let literal = graphql_lang::parse_value("$c").expect("parses");
    let value = coerce_literal(&literal, &ty, Some(&vars), &Path::new()).expect("coerces");
    assert_eq!(value, Value::Enum("BLUE".to_string()));
}

#[test]
fn coerce_variable_values_applies_declared_default() {
    let schema = schema_with_input_object();
    let document = graphql_lang::parse_document(
        &graphql_lang::Source::new("query($color: Color = RED) { paint(color: $color) }"),
        Default::default(),
    )
    .expect("parses");
    let op = document.operations().next().expect("one operation");
    let coerced = coerce_variable_values(&schema, &op.variable_definitions, None).expect("coerces");
    assert_eq!(coerced.get("color"), Some(&Value::Enum("RED".to_string())));
}

#[test]
fn coerce_variable_values_rejects_missing_required_variable() {
    let schema = schema_with_input_object();
    let document = graphql_lang::parse_document(
        &graphql_lang::Source::new("query($from: PointInput!) { distance(from: $from, to: $from) }"),
        Default::default(),
    )
    .expect("parses");
    let op = document.operations().next().expect("one operation");
    let errs = coerce_variable_values(&schema, &op.variable_definitions, None).unwrap_err();
    assert_eq!(errs.len(), 1);
}

#[test]
fn coerce_argument_values_substitutes_coerced_variables() {
    let schema = schema_with_input_object();
    let field = schema.query.clone().unwrap();
    let field = field.field("paint").unwrap();
    let mut variable_values = IndexMap::new();
    variable_values.insert("c".to_string(), Value::Enum("GREEN".to_string()));
    let arg_node = graphql_lang::ast::Argument {
        name: graphql_lang::ast::Name::new("color"),
        value: graphql_lang::ast::Value::Variable(graphql_lang::ast::Variable { name: graphql_lang::ast::Name::new("c"), loc: None }),
        loc: None,
    };
    let coerced = coerce_argument_values(&field.args, &[arg_node], &variable_values).expect("coerces");
    assert_eq!(coerced.get("color"), Some(&Value::Enum("GREEN".to_string())));
}

#[test]
fn coerce_argument_values_applies_default_when_omitted() {
    let schema = schema_with_input_object();
    let field = schema.query.clone().unwrap();
    let field = field.field("paint").unwrap();
    let variable_values = IndexMap::new();
    let coerced = coerce_argument_values(&field.args, &[], &variable_values).expect("coerces");
    assert_eq!(coerced.get("color"), Some(&Value::Enum("RED".to_string())));
}

#[test]
fn serializes_scalar_and_enum_output() {
    let schema = schema_with_input_object();
    let color_type = field_arg_type(&schema, "paint", "color");
    let out = serialize_output(&Value::Enum("BLUE".to_string()), &color_type, &Path::new()).expect("serializes");
    assert_eq!(out, Value::Enum("BLUE".to_string()));

    let int_type = graphql_types::Type::int();
    let out = serialize_output(&Value::Int(7), &int_type, &Path::new()).expect("serializes");
    assert_eq!(out, Value::Int(7));
}

#[test]
fn serializes_null_without_consulting_the_type() {
    let out = serialize_output(&Value::Null, &graphql_types::Type::non_null(graphql_types::Type::int()), &Path::new()).expect("serializes");
    assert_eq!(out, Value::Null);
}
