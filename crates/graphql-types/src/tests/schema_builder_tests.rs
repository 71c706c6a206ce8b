use crate::input::InputValue;
use crate::lazy::Thunk;
use crate::object::{Field, ObjectType};
use crate::schema::Schema;
use crate::type_ref::Type;
use indexmap::IndexMap;
use std::sync::Arc;

fn simple_query() -> Arc<ObjectType> {
    let mut fields = IndexMap::new();
    fields.insert("hello".to_string(), Field::new("hello", Type::string()));
    Arc::new(ObjectType::new("Query", None, Vec::new(), Thunk::eager(Vec::new()), Thunk::eager(fields)))
}

#[test]
fn programmatic_builder_collects_reachable_types() {
    let schema = Schema::builder().query(simple_query()).build().expect("valid schema");
    assert!(schema.get_type("Query").is_some());
    assert!(schema.get_type("String").is_some());
    assert!(schema.validate().is_empty());
}

#[test]
fn directive_argument_must_be_input_type() {
    use crate::directive::{DirectiveLocation, DirectiveType};
    let mut args = IndexMap::new();
    args.insert("x".to_string(), InputValue { value_type: Type::string(), default_value: None, description: None });
    let directive = DirectiveType {
        name: "custom".to_string(),
        description: None,
        locations: [DirectiveLocation::Field].into_iter().collect(),
        args,
        repeatable: false,
    };
    let schema = Schema::builder().query(simple_query()).directive(directive).build().expect("valid schema");
    assert!(schema.validate().is_empty());
}
