use crate::parser::{parse_document, ParseOptions};
use crate::source::Source;
use crate::utilities::{and_list, or_list, quoted_or_list, separate_operations};

fn s(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn or_list_formats_by_count() {
    assert_eq!(or_list(&s(&["a"])), "a");
    assert_eq!(or_list(&s(&["a", "b"])), "a or b");
    assert_eq!(or_list(&s(&["a", "b", "c"])), "a, b, or c");
}

#[test]
fn or_list_truncates_past_five() {
    let items = s(&["a", "b", "c", "d", "e", "f"]);
    assert_eq!(or_list(&items), "a, b, c, d, or e, ...");
}

#[test]
fn and_list_uses_and_conjunction() {
    assert_eq!(and_list(&s(&["a", "b"])), "a and b");
}

#[test]
fn quoted_or_list_wraps_each_item() {
    assert_eq!(quoted_or_list(&s(&["name", "id"])), "\"name\" or \"id\"");
}

#[test]
fn separate_operations_splits_and_keeps_only_needed_fragments() {
    let source = Source::new(
        r#"
        query A { hero { ...heroFields } }
        query B { hero { name } }
        fragment heroFields on Character { name ...extraFields }
        fragment extraFields on Character { appearsIn }
        fragment unused on Character { id }
        "#,
    );
    let doc = parse_document(&source, ParseOptions::default()).unwrap();
    let separated = separate_operations(&doc);

    assert_eq!(separated.len(), 2);
    let a = &separated["A"];
    assert_eq!(a.fragments().count(), 2);
    assert!(a.fragments().any(|f| f.name.as_str() == "heroFields"));
    assert!(a.fragments().any(|f| f.name.as_str() == "extraFields"));

    let b = &separated["B"];
    assert_eq!(b.fragments().count(), 0);
}
