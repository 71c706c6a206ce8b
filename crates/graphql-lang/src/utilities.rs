//! Small helpers the validator and facade crate build on: English-list
//! formatting for "did you mean" suggestions, and splitting a document with
//! several operations into one self-contained document per operation.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::ast::*;
use crate::visitor::{walk_selection_set_standalone, VisitAction, VisitContext, Visitor};

const MAX_LISTED: usize = 5;

/// Joins `items` as an English disjunction: `"a"`, `"a or b"`, `"a, b, or c"`.
/// Caps at five items, appending `", ..."` when more were supplied.
pub fn or_list(items: &[String]) -> String {
    format_list("or", items)
}

/// Joins `items` as an English conjunction: `"a"`, `"a and b"`, `"a, b, and c"`.
pub fn and_list(items: &[String]) -> String {
    format_list("and", items)
}

/// [`or_list`], but each item is first wrapped in double quotes — the form
/// used by "Did you mean ...?" suggestions.
pub fn quoted_or_list(items: &[String]) -> String {
    or_list(&items.iter().map(|s| format!("\"{s}\"")).collect::<Vec<_>>())
}

fn format_list(conjunction: &str, items: &[String]) -> String {
    assert!(!items.is_empty(), "format_list requires at least one item");
    let shown = &items[..items.len().min(MAX_LISTED)];
    let joined = match shown {
        [] => unreachable!(),
        [only] => only.clone(),
        [first, second] => format!("{first} {conjunction} {second}"),
        _ => {
            let (head, last) = shown.split_at(shown.len() - 1);
            format!("{}, {conjunction} {}", head.join(", "), last[0])
        }
    };
    if items.len() > shown.len() {
        format!("{joined}, ...")
    } else {
        joined
    }
}

/// Appends a "Did you mean ...?" clause built from `suggestions`, or returns
/// an empty string when there are none.
pub fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" Did you mean {}?", quoted_or_list(&suggestions.to_vec()))
    }
}

struct SpreadCollector {
    names: HashSet<String>,
}

impl Visitor for SpreadCollector {
    fn enter_fragment_spread(&mut self, _ctx: &VisitContext<'_>, spread: &FragmentSpread) -> VisitAction {
        self.names.insert(spread.name.as_str().to_string());
        VisitAction::Continue
    }
}

fn collect_spread_names(selection_set: &SelectionSet) -> HashSet<String> {
    let mut collector = SpreadCollector { names: HashSet::new() };
    walk_selection_set_standalone(selection_set, &mut collector);
    collector.names
}

/// Splits a document containing several operations into one document per
/// operation, each carrying only the fragments it (transitively) spreads.
/// Anonymous operations are keyed by the empty string.
pub fn separate_operations(document: &Document) -> IndexMap<String, Document> {
    let fragments_by_name: IndexMap<&str, &FragmentDefinition> =
        document.fragments().map(|f| (f.name.as_str(), f)).collect();

    let mut result = IndexMap::new();
    for op in document.operations() {
        let key = op.name.as_ref().map(|n| n.as_str().to_string()).unwrap_or_default();

        let mut needed = HashSet::new();
        let mut queue: Vec<String> = collect_spread_names(&op.selection_set).into_iter().collect();
        while let Some(name) = queue.pop() {
            if !needed.insert(name.clone()) {
                continue;
            }
            if let Some(frag) = fragments_by_name.get(name.as_str()) {
                queue.extend(collect_spread_names(&frag.selection_set));
            }
        }

        let mut definitions = vec![Definition::Executable(ExecutableDefinition::Operation(op.clone()))];
        for frag in document.fragments() {
            if needed.contains(frag.name.as_str()) {
                definitions.push(Definition::Executable(ExecutableDefinition::Fragment(frag.clone())));
            }
        }
        result.insert(key, Document { definitions, loc: None });
    }
    result
}

#[cfg(test)]
#[path = "tests/utilities_tests.rs"]
mod utilities_tests;
