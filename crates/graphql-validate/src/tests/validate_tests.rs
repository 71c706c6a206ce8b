use super::schema_fixture::star_wars_schema;
use crate::validate;
use graphql_lang::parser::{parse_document, ParseOptions};
use graphql_lang::source::Source;

fn parse(body: &str) -> graphql_lang::ast::Document {
    let source = Source::new(body);
    parse_document(&source, ParseOptions::default()).expect("parse ok")
}

fn messages(body: &str) -> Vec<String> {
    let schema = star_wars_schema();
    let doc = parse(body);
    validate(&schema, &doc).into_iter().map(|e| e.message).collect()
}

#[test]
fn well_formed_query_has_no_errors() {
    let errors = messages(
        r#"
        query HeroForEpisode($ep: Episode) {
            hero(episode: $ep) {
                name
                ... on Droid {
                    primaryFunction
                }
                ... HumanFields
            }
        }
        fragment HumanFields on Human {
            homePlanet
        }
        "#,
    );
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[test]
fn unknown_field_is_reported() {
    let errors = messages("{ hero { name nonsenseField } }");
    assert!(errors.iter().any(|m| m.contains("Cannot query field \"nonsenseField\"")), "{errors:?}");
}

#[test]
fn unknown_type_condition_is_reported() {
    let errors = messages("{ hero { ... on Wookiee { name } } }");
    assert!(errors.iter().any(|m| m.contains("Unknown type \"Wookiee\"")), "{errors:?}");
}

#[test]
fn unknown_directive_is_reported() {
    let errors = messages("{ hero { name @bogus } }");
    assert!(errors.iter().any(|m| m.contains("Unknown directive \"@bogus\"")), "{errors:?}");
}

#[test]
fn unknown_argument_is_reported() {
    let errors = messages("{ hero(weapon: \"lightsaber\") { name } }");
    assert!(errors.iter().any(|m| m.contains("Unknown argument \"weapon\"")), "{errors:?}");
}

#[test]
fn fragment_cannot_condition_on_scalar() {
    let errors = messages("{ hero { ... on String { name } } }");
    assert!(errors.iter().any(|m| m.contains("cannot condition on non composite type")), "{errors:?}");
}

#[test]
fn fragment_spread_impossible_type_is_reported() {
    let errors = messages(
        r#"
        { human(id: "1000") { ... droidFields } }
        fragment droidFields on Droid { primaryFunction }
        "#,
    );
    assert!(errors.iter().any(|m| m.contains("can never be of type")), "{errors:?}");
}

#[test]
fn unused_fragment_is_reported() {
    let errors = messages(
        r#"
        { hero { name } }
        fragment unused on Human { homePlanet }
        "#,
    );
    assert!(errors.iter().any(|m| m.contains("Fragment \"unused\" is never used")), "{errors:?}");
}

#[test]
fn fragment_cycle_is_reported() {
    let errors = messages(
        r#"
        { hero { ...cyclic } }
        fragment cyclic on Character { friends { ...cyclic } }
        "#,
    );
    assert!(errors.iter().any(|m| m.contains("within itself")), "{errors:?}");
}

#[test]
fn duplicate_fragment_name_is_reported() {
    let errors = messages(
        r#"
        { hero { ...frag } }
        fragment frag on Character { name }
        fragment frag on Character { name }
        "#,
    );
    assert!(errors.iter().any(|m| m.contains("only one fragment named")), "{errors:?}");
}

#[test]
fn undefined_variable_is_reported() {
    let errors = messages("query { hero(episode: $ep) { name } }");
    assert!(errors.iter().any(|m| m.contains("\"$ep\" is not defined")), "{errors:?}");
}

#[test]
fn unused_variable_is_reported() {
    let errors = messages("query Q($ep: Episode) { hero { name } }");
    assert!(errors.iter().any(|m| m.contains("\"$ep\" is never used")), "{errors:?}");
}

#[test]
fn variable_type_mismatch_is_reported() {
    let errors = messages(
        r#"
        query Q($id: String) { human(id: $id) { name } }
        "#,
    );
    assert!(errors.iter().any(|m| m.contains("used in position expecting type")), "{errors:?}");
}

#[test]
fn nullable_variable_rejected_for_non_null_argument_without_default() {
    let errors = messages("query Q($id: ID) { human(id: $id) { name } }");
    assert!(errors.iter().any(|m| m.contains("used in position expecting type")), "{errors:?}");
}

#[test]
fn nullable_variable_with_default_allowed_for_non_null_argument() {
    let errors = messages(r#"query Q($id: ID = "1") { human(id: $id) { name } }"#);
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[test]
fn required_argument_missing_is_reported() {
    let errors = messages("{ human { name } }");
    assert!(errors.iter().any(|m| m.contains("required type \"ID!\" was not provided")), "{errors:?}");
}

#[test]
fn enum_value_of_wrong_kind_is_reported() {
    let errors = messages(r#"{ hero(episode: "NEWHOPE") { name } }"#);
    assert!(errors.iter().any(|m| m.contains("Enum \"Episode\" cannot represent non-enum value")), "{errors:?}");
}

#[test]
fn unknown_enum_member_is_reported() {
    let errors = messages("{ hero(episode: MOVIE_SEVEN) { name } }");
    assert!(errors.iter().any(|m| m.contains("does not exist in \"Episode\" enum")), "{errors:?}");
}

#[test]
fn input_object_unknown_field_is_reported() {
    let errors = messages(
        r#"
        mutation {
            createReview(episode: JEDI, review: { stars: 5, bogus: "x" }) {
                name
            }
        }
        "#,
    );
    assert!(errors.iter().any(|m| m.contains("is not defined by type \"ReviewInput\"")), "{errors:?}");
}

#[test]
fn input_object_missing_required_field_is_reported() {
    let errors = messages(
        r#"
        mutation {
            createReview(episode: JEDI, review: { commentary: "good" }) {
                name
            }
        }
        "#,
    );
    assert!(errors.iter().any(|m| m.contains("Field \"stars\" of required type \"Int!\" was not provided")), "{errors:?}");
}

#[test]
fn overlapping_fields_with_different_arguments_conflict() {
    let errors = messages(
        r#"
        {
            hero(episode: JEDI) { name }
            hero(episode: EMPIRE) { name }
        }
        "#,
    );
    assert!(errors.iter().any(|m| m.contains("differing arguments")), "{errors:?}");
}

#[test]
fn overlapping_aliased_fields_are_allowed() {
    let errors = messages(
        r#"
        {
            jedi: hero(episode: JEDI) { name }
            empire: hero(episode: EMPIRE) { name }
        }
        "#,
    );
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[test]
fn anonymous_operation_must_be_alone() {
    let errors = messages(
        r#"
        { hero { name } }
        query Named { hero { name } }
        "#,
    );
    assert!(errors.iter().any(|m| m.contains("must be the only defined operation")), "{errors:?}");
}

#[test]
fn duplicate_operation_name_is_reported() {
    let errors = messages(
        r#"
        query Q { hero { name } }
        query Q { human(id: "1000") { name } }
        "#,
    );
    assert!(errors.iter().any(|m| m.contains("only one operation named \"Q\"")), "{errors:?}");
}

#[test]
fn scalar_field_with_subselection_is_reported() {
    let errors = messages("{ hero { name { first } } }");
    assert!(errors.iter().any(|m| m.contains("must not have a selection since type \"String!\" has no subfields")), "{errors:?}");
}

#[test]
fn composite_field_without_subselection_is_reported() {
    let errors = messages("{ hero }");
    assert!(errors.iter().any(|m| m.contains("must have a selection of subfields")), "{errors:?}");
}
