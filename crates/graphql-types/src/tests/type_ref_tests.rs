use crate::type_ref::Type;

#[test]
fn display_name_round_trips_wrapper_nesting() {
    let t = Type::non_null(Type::list(Type::non_null(Type::string())));
    assert_eq!(t.display_name(), "[String!]!");
}

#[test]
fn nullable_strips_one_non_null_layer() {
    let t = Type::non_null(Type::int());
    assert_eq!(t.nullable().display_name(), "Int");
}
