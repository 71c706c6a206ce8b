use crate::ast::*;
use crate::parser::{parse_document, parse_type, parse_value, ParseOptions};
use crate::source::Source;

fn parse(body: &str) -> Document {
    let source = Source::new(body);
    parse_document(&source, ParseOptions::default()).expect("parse ok")
}

#[test]
fn parses_simple_query_shorthand() {
    let doc = parse("{ hero { name friends { name } } }");
    let ops: Vec<_> = doc.operations().collect();
    assert_eq!(ops.len(), 1);
    assert_eq!(ops[0].operation, OperationType::Query);
    assert!(ops[0].name.is_none());
    assert_eq!(ops[0].selection_set.selections.len(), 1);
}

#[test]
fn parses_named_operation_with_variables_and_directives() {
    let doc = parse(
        r#"
        query HeroForEpisode($ep: Episode = JEDI, $withFriends: Boolean!) @cached {
            hero(episode: $ep) {
                name
                friends @include(if: $withFriends) {
                    name
                }
            }
        }
        "#,
    );
    let op = doc.operations().next().unwrap();
    assert_eq!(op.name.as_ref().unwrap().as_str(), "HeroForEpisode");
    assert_eq!(op.variable_definitions.len(), 2);
    assert_eq!(op.variable_definitions[0].variable.name.as_str(), "ep");
    assert!(matches!(op.variable_definitions[1].var_type, Type::NonNull(_)));
    assert_eq!(op.directives.len(), 1);
    assert_eq!(op.directives[0].name.as_str(), "cached");
}

#[test]
fn parses_fragment_spread_and_inline_fragment() {
    let doc = parse(
        r#"
        {
            hero {
                ...heroFields
                ... on Droid {
                    primaryFunction
                }
            }
        }
        fragment heroFields on Character {
            name
        }
        "#,
    );
    assert_eq!(doc.fragments().count(), 1);
    let op = doc.operations().next().unwrap();
    let Selection::Field(hero) = &op.selection_set.selections[0] else { panic!("expected field") };
    let selections = &hero.selection_set.as_ref().unwrap().selections;
    assert!(matches!(selections[0], Selection::FragmentSpread(_)));
    assert!(matches!(selections[1], Selection::InlineFragment(_)));
}

#[test]
fn alias_sets_response_key() {
    let doc = parse("{ aliased: name }");
    let op = doc.operations().next().unwrap();
    let Selection::Field(field) = &op.selection_set.selections[0] else { panic!("expected field") };
    assert_eq!(field.response_key(), "aliased");
    assert_eq!(field.name.as_str(), "name");
}

#[test]
fn parses_object_and_list_values_in_arguments() {
    let doc = parse(r#"{ field(list: [1, 2, 3], obj: { a: "x", b: null }) }"#);
    let op = doc.operations().next().unwrap();
    let Selection::Field(field) = &op.selection_set.selections[0] else { panic!("expected field") };
    assert_eq!(field.arguments.len(), 2);
    assert!(matches!(field.arguments[0].value, Value::List(_)));
    assert!(matches!(field.arguments[1].value, Value::Object(_)));
}

#[test]
fn missing_selection_set_closing_brace_is_syntax_error() {
    let source = Source::new("{ hero { name }");
    let err = parse_document(&source, ParseOptions::default()).unwrap_err();
    assert!(err.message.contains("Expected"));
}

#[test]
fn lone_variable_definition_without_colon_is_syntax_error() {
    let source = Source::new("query($x Int) { field }");
    let err = parse_document(&source, ParseOptions::default()).unwrap_err();
    assert!(err.message.contains("Expected \":\""));
}

#[test]
fn parses_scalar_and_object_type_definitions() {
    let doc = parse(
        r#"
        scalar DateTime

        "A character in the saga"
        type Character implements Node {
            id: ID!
            name: String
            friends: [Character]
        }
        "#,
    );
    assert_eq!(doc.definitions.len(), 2);
    let Definition::Type(TypeDefinition::Object(obj)) = &doc.definitions[1] else { panic!("expected object type") };
    assert_eq!(obj.name.as_str(), "Character");
    assert_eq!(obj.interfaces.len(), 1);
    assert_eq!(obj.fields.len(), 3);
    assert!(obj.description.is_some());
}

#[test]
fn parses_enum_union_and_input_object() {
    let doc = parse(
        r#"
        enum Episode { NEWHOPE EMPIRE JEDI }
        union SearchResult = Human | Droid | Starship
        input ReviewInput {
            stars: Int!
            commentary: String = "none"
        }
        "#,
    );
    assert_eq!(doc.definitions.len(), 3);
}

#[test]
fn parses_directive_definition_with_repeatable_and_locations() {
    let doc = parse(r#"directive @tag(name: String!) repeatable on FIELD_DEFINITION | OBJECT"#);
    let Definition::Directive(def) = &doc.definitions[0] else { panic!("expected directive definition") };
    assert!(def.repeatable);
    assert_eq!(def.locations.len(), 2);
    assert_eq!(def.locations[0], DirectiveLocation::FieldDefinition);
}

#[test]
fn parses_type_extension() {
    let doc = parse("extend type Character { homePlanet: String }");
    assert!(matches!(&doc.definitions[0], Definition::TypeExtension(TypeExtension::Object(_))));
}

#[test]
fn standalone_value_and_type_parsing() {
    assert!(matches!(parse_value("[1, 2, 3]").unwrap(), Value::List(_)));
    assert!(matches!(parse_type("[String!]!").unwrap(), Type::NonNull(_)));
}

#[test]
fn locations_are_recorded_by_default() {
    let doc = parse("{ a }");
    assert!(doc.loc.is_some());
    let op = doc.operations().next().unwrap();
    assert!(op.selection_set.loc.is_some());
}

#[test]
fn no_location_option_suppresses_locations() {
    let source = Source::new("{ a }");
    let doc = parse_document(&source, ParseOptions { no_location: true, max_tokens: None }).unwrap();
    assert!(doc.loc.is_none());
}
