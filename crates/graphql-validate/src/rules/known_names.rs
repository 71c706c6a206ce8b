//! Known-name rules (§4.5): every type, directive, and argument name
//! referenced by an operation must be declared in the schema. Shares the
//! combined traversal in `rules::Validator`; this module only holds the
//! pure lookup/message-building helpers it calls into.

use graphql_lang::utilities::did_you_mean;
use graphql_types::{DirectiveType, NamedType, Schema};
use std::sync::Arc;

pub fn unknown_type_message(schema: &Schema, name: &str) -> String {
    let suggestions: Vec<String> = schema
        .type_map
        .keys()
        .filter(|candidate| is_close(candidate, name))
        .cloned()
        .collect();
    format!("Unknown type \"{name}\".{}", did_you_mean(&suggestions))
}

pub fn unknown_directive_message(schema: &Schema, name: &str) -> String {
    let suggestions: Vec<String> =
        schema.directives.iter().map(|d| d.name.clone()).filter(|candidate| is_close(candidate, name)).collect();
    format!("Unknown directive \"@{name}\".{}", did_you_mean(&suggestions))
}

pub fn unknown_argument_message(arg_name: &str, holder: &str, known: &[String]) -> String {
    let suggestions: Vec<String> = known.iter().filter(|candidate| is_close(candidate, arg_name)).cloned().collect();
    format!("Unknown argument \"{arg_name}\" on \"{holder}\".{}", did_you_mean(&suggestions))
}

pub fn unknown_field_message(field_name: &str, type_name: &str, known: &[String]) -> String {
    let suggestions: Vec<String> = known.iter().filter(|candidate| is_close(candidate, field_name)).cloned().collect();
    format!("Cannot query field \"{field_name}\" on type \"{type_name}\".{}", did_you_mean(&suggestions))
}

/// Cheap closeness heuristic for "did you mean" suggestions: shares a
/// case-insensitive prefix or is within edit distance 2. Not a full
/// Damerau-Levenshtein implementation (the reference implementation's is),
/// since suggestion quality is cosmetic here, not a correctness property.
fn is_close(candidate: &str, name: &str) -> bool {
    if candidate.eq_ignore_ascii_case(name) {
        return true;
    }
    let a = candidate.to_ascii_lowercase();
    let b = name.to_ascii_lowercase();
    if a.len().abs_diff(b.len()) > 2 {
        return false;
    }
    levenshtein_at_most(&a, &b, 2)
}

fn levenshtein_at_most(a: &str, b: &str, max: usize) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    for i in 1..=a.len() {
        let mut row = vec![i];
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            row.push((prev[j] + 1).min(row[j - 1] + 1).min(prev[j - 1] + cost));
        }
        prev = row;
    }
    *prev.last().unwrap() <= max
}

pub fn find_directive<'a>(schema: &'a Schema, name: &str) -> Option<&'a Arc<DirectiveType>> {
    schema.directives.iter().find(|d| d.name == name)
}

pub fn composite_type_names(named: &NamedType) -> Vec<String> {
    match named {
        NamedType::Object(o) => o.fields().keys().cloned().collect(),
        NamedType::Interface(i) => i.fields().keys().cloned().collect(),
        _ => Vec::new(),
    }
}
