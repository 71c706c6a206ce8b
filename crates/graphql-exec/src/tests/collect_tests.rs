use super::schema_fixture::query_schema;
use crate::collect::{collect_fields, index_fragments};
use graphql_lang::ast::Document;
use graphql_lang::parser::{parse_document, ParseOptions};
use graphql_lang::source::Source;
use indexmap::IndexMap;
use std::collections::HashSet;

fn parse(body: &str) -> Document {
    let source = Source::new(body);
    parse_document(&source, ParseOptions::default()).expect("parse ok")
}

fn collected_keys(body: &str, variables: &IndexMap<String, graphql_types::Value>) -> Vec<String> {
    let schema = query_schema();
    let document = parse(body);
    let fragments = index_fragments(&document);
    let operation = document.operations().next().expect("one operation");
    let mut fields = IndexMap::new();
    collect_fields(&schema, &fragments, "Query", &operation.selection_set, variables, &mut HashSet::new(), &mut fields);
    fields.keys().cloned().collect()
}

#[test]
fn plain_fields_collect_in_order() {
    let keys = collected_keys("{ hello nested { value } numbers }", &IndexMap::new());
    assert_eq!(keys, vec!["hello", "nested", "numbers"]);
}

#[test]
fn skip_true_drops_the_field() {
    let keys = collected_keys("{ hello @skip(if: true) nested { value } }", &IndexMap::new());
    assert_eq!(keys, vec!["nested"]);
}

#[test]
fn include_false_drops_the_field() {
    let keys = collected_keys("{ hello @include(if: false) nested { value } }", &IndexMap::new());
    assert_eq!(keys, vec!["nested"]);
}

#[test]
fn skip_respects_bound_variable() {
    let mut vars = IndexMap::new();
    vars.insert("omit".to_string(), graphql_types::Value::Boolean(true));
    let keys = collected_keys("query($omit: Boolean!) { hello @skip(if: $omit) nested { value } }", &vars);
    assert_eq!(keys, vec!["nested"]);
}

#[test]
fn inline_fragment_matching_type_condition_is_flattened() {
    let keys = collected_keys("{ ... on Query { hello } numbers }", &IndexMap::new());
    assert_eq!(keys, vec!["hello", "numbers"]);
}

#[test]
fn inline_fragment_with_mismatched_type_condition_is_dropped() {
    let keys = collected_keys("{ ... on Nested { value } hello }", &IndexMap::new());
    assert_eq!(keys, vec!["hello"]);
}

#[test]
fn fragment_spread_is_flattened_and_merged_with_direct_selection() {
    let keys = collected_keys(
        r#"
        { hello ...QueryFields }
        fragment QueryFields on Query { nested { value } }
        "#,
        &IndexMap::new(),
    );
    assert_eq!(keys, vec!["hello", "nested"]);
}

#[test]
fn same_response_key_from_two_branches_merges_into_one_entry() {
    let schema = query_schema();
    let document = parse("{ hello ... on Query { hello } }");
    let fragments = index_fragments(&document);
    let operation = document.operations().next().expect("one operation");
    let mut fields = IndexMap::new();
    collect_fields(&schema, &fragments, "Query", &operation.selection_set, &IndexMap::new(), &mut HashSet::new(), &mut fields);
    assert_eq!(fields.len(), 1);
    assert_eq!(fields["hello"].len(), 2);
}

#[test]
fn recursive_fragment_spread_does_not_loop_forever() {
    let keys = collected_keys(
        r#"
        { ...A }
        fragment A on Query { hello ...A }
        "#,
        &IndexMap::new(),
    );
    assert_eq!(keys, vec!["hello"]);
}
