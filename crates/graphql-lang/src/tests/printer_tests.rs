use crate::parser::{parse_document, ParseOptions};
use crate::printer::print;
use crate::source::Source;

fn parse(body: &str) -> crate::ast::Document {
    let source = Source::new(body);
    parse_document(&source, ParseOptions::default()).expect("parse ok")
}

fn reprint(body: &str) -> String {
    print(&parse(body))
}

#[test]
fn prints_shorthand_query_unchanged_in_shape() {
    let printed = reprint("{ hero { name } }");
    assert_eq!(printed, "{\n  hero {\n    name\n  }\n}");
}

#[test]
fn prints_named_operation_with_variables_and_directive() {
    let printed = reprint("query Hero($ep: Episode = JEDI) @cached { hero(episode: $ep) { name } }");
    assert_eq!(printed, "query Hero($ep: Episode = JEDI) @cached {\n  hero(episode: $ep) {\n    name\n  }\n}");
}

#[test]
fn prints_aliases_and_arguments() {
    let printed = reprint(r#"{ aliased: field(a: 1, b: "x", c: [1, 2], d: { k: true }) }"#);
    assert_eq!(printed, "{\n  aliased: field(a: 1, b: \"x\", c: [1, 2], d: {k: true})\n}");
}

#[test]
fn prints_fragment_spread_and_inline_fragment() {
    let printed = reprint("{ hero { ...heroFields ... on Droid { primaryFunction } } }");
    assert!(printed.contains("...heroFields"));
    assert!(printed.contains("... on Droid {"));
}

#[test]
fn prints_fragment_definition() {
    let printed = reprint("fragment heroFields on Character { name }");
    assert_eq!(printed, "fragment heroFields on Character {\n  name\n}");
}

#[test]
fn printing_is_idempotent() {
    let once = reprint("query Q($x: Int!) { a(x: $x) { b c } }");
    let twice = print(&parse(&once));
    assert_eq!(once, twice);
}

#[test]
fn prints_object_type_definition_with_fields_and_interfaces() {
    let printed = reprint("type Character implements Node { id: ID! name: String }");
    assert_eq!(printed, "type Character implements Node {\n  id: ID!\n  name: String\n}");
}

#[test]
fn prints_enum_and_union_and_input_object() {
    let printed = reprint(
        "enum Episode { NEWHOPE JEDI }\nunion SearchResult = Human | Droid\ninput ReviewInput { stars: Int! commentary: String }",
    );
    assert!(printed.contains("enum Episode {\n  NEWHOPE\n  JEDI\n}"));
    assert!(printed.contains("union SearchResult = Human | Droid"));
    assert!(printed.contains("input ReviewInput {\n  stars: Int!\n  commentary: String\n}"));
}

#[test]
fn prints_type_description() {
    let printed = reprint("\"A character.\"\ntype Character { name: String }");
    assert_eq!(printed, "\"A character.\"\ntype Character {\n  name: String\n}");
}

#[test]
fn prints_string_value_with_escapes() {
    let printed = reprint(r#"{ field(s: "line\nbreak and \"quote\"") }"#);
    assert!(printed.contains(r#""line\nbreak and \"quote\"""#));
}
