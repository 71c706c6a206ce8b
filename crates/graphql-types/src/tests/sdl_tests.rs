use crate::sdl::build_schema;
use crate::type_ref::NamedType;

#[test]
fn builds_a_minimal_query_schema() {
    let schema = build_schema("type Query { hello: String }").expect("valid SDL");
    let query = schema.query.as_ref().expect("query root");
    assert_eq!(query.name, "Query");
    assert!(query.fields().contains_key("hello"));
    assert!(schema.validate().is_empty());
}

#[test]
fn resolves_mutually_recursive_object_types() {
    let schema = build_schema(
        r#"
        type Query { me: User }
        type User { name: String! friend: User }
        "#,
    )
    .expect("valid SDL");
    let user = match schema.get_type("User") {
        Some(NamedType::Object(u)) => u.clone(),
        _ => panic!("expected User object type"),
    };
    let friend_type = &user.field("friend").unwrap().field_type;
    assert_eq!(friend_type.display_name(), "User");
}

#[test]
fn object_implementing_interface_is_validated() {
    let schema = build_schema(
        r#"
        type Query { pet: Pet }
        interface Pet { name: String! }
        type Dog implements Pet { name: String! woofs: Boolean! }
        "#,
    )
    .expect("valid SDL");
    assert!(schema.validate().is_empty());
    assert!(schema.is_possible_type("Pet", "Dog"));
}

#[test]
fn missing_interface_field_is_a_validation_error() {
    let schema = build_schema(
        r#"
        type Query { pet: Pet }
        interface Pet { name: String! }
        type Dog implements Pet { woofs: Boolean! }
        "#,
    )
    .expect("valid SDL");
    assert!(!schema.validate().is_empty());
}

#[test]
fn extend_type_appends_fields_in_order() {
    let schema = build_schema(
        r#"
        type Query { a: String }
        extend type Query { b: String }
        "#,
    )
    .expect("valid SDL");
    let keys: Vec<_> = schema.query.unwrap().fields().keys().cloned().collect();
    assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn schema_without_query_type_is_rejected_by_build() {
    let schema = build_schema("type NotQuery { x: String }").expect("builds even without a Query root");
    assert!(schema.validate().iter().any(|e| matches!(e, crate::error::SchemaError::MissingQueryType)));
}
