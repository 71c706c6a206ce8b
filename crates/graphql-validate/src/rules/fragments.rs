//! Fragment-shaped rules (§4.5): unique fragment names, known fragment
//! spreads, fragments (and inline fragments) restricted to composite
//! types, fragment spread possibility (type-condition overlap with the
//! spread site), no unused fragments, and fragment-spread cycles (a
//! soundness prerequisite for §8's "a document that passes validation
//! never causes executor coercion to fail", since an unguarded cycle would
//! make field collection (§4.7) recurse forever rather than merely
//! produce a bad answer).

use crate::error::ValidationError;
use graphql_lang::ast::{self, Node};
use graphql_types::{NamedType, Schema};
use indexmap::IndexMap;
use std::collections::HashSet;

pub fn is_composite(named: &NamedType) -> bool {
    named.is_composite_type()
}

pub fn possible_type_names(schema: &Schema, named: &NamedType) -> HashSet<String> {
    match named {
        NamedType::Object(o) => std::iter::once(o.name.clone()).collect(),
        NamedType::Interface(i) => schema.possible_types(&i.name).iter().map(|o| o.name.clone()).collect(),
        NamedType::Union(u) => u.possible_type_names().into_iter().map(|s| s.to_string()).collect(),
        _ => HashSet::new(),
    }
}

/// §4.5 "fragment spread is possible": the spread's type condition and the
/// enclosing selection set's type must share at least one possible
/// concrete type.
pub fn types_overlap(schema: &Schema, a: &NamedType, b: &NamedType) -> bool {
    if a == b {
        return true;
    }
    let pa = possible_type_names(schema, a);
    let pb = possible_type_names(schema, b);
    pa.intersection(&pb).next().is_some()
}

/// Flat, traversal-independent checks over the whole document: unique
/// fragment definition names, no-unused-fragments, and spread cycles.
/// Independent of the combined per-operation traversal in `rules::Validator`
/// since these are document-wide rather than per-operation-scoped
/// properties.
pub fn check_document_level(
    document: &ast::Document,
    fragments: &IndexMap<&str, &ast::FragmentDefinition>,
    errors: &mut Vec<ValidationError>,
) {
    check_unique_fragment_names(document, errors);
    check_fragment_cycles(fragments, errors);
    check_unused_fragments(document, fragments, errors);
}

fn check_unique_fragment_names(document: &ast::Document, errors: &mut Vec<ValidationError>) {
    let mut seen: HashSet<&str> = HashSet::new();
    for frag in document.fragments() {
        if !seen.insert(frag.name.as_str()) {
            errors.push(ValidationError::at(
                format!("There can be only one fragment named \"{}\".", frag.name.as_str()),
                frag.loc,
            ));
        }
    }
}

fn spread_names(selection_set: &ast::SelectionSet, out: &mut Vec<(String, Option<ast::Location>)>) {
    for selection in &selection_set.selections {
        match selection {
            ast::Selection::FragmentSpread(s) => out.push((s.name.as_str().to_string(), s.loc)),
            ast::Selection::Field(f) => {
                if let Some(ss) = &f.selection_set {
                    spread_names(ss, out);
                }
            }
            ast::Selection::InlineFragment(i) => spread_names(&i.selection_set, out),
        }
    }
}

fn check_fragment_cycles(fragments: &IndexMap<&str, &ast::FragmentDefinition>, errors: &mut Vec<ValidationError>) {
    for (name, frag) in fragments {
        let mut visiting = HashSet::new();
        visiting.insert(*name);
        if has_cycle(frag, fragments, &mut visiting) {
            errors.push(ValidationError::at(
                format!("Cannot spread fragment \"{name}\" within itself."),
                frag.loc,
            ));
        }
    }
}

fn has_cycle<'a>(
    frag: &'a ast::FragmentDefinition,
    fragments: &IndexMap<&'a str, &'a ast::FragmentDefinition>,
    visiting: &mut HashSet<&'a str>,
) -> bool {
    let mut spreads = Vec::new();
    spread_names(&frag.selection_set, &mut spreads);
    for (name, _) in &spreads {
        let Some(target) = fragments.get(name.as_str()) else { continue };
        if !visiting.insert(target.name.as_str()) {
            return true;
        }
        if has_cycle(target, fragments, visiting) {
            return true;
        }
        visiting.remove(target.name.as_str());
    }
    false
}

fn check_unused_fragments(
    document: &ast::Document,
    fragments: &IndexMap<&str, &ast::FragmentDefinition>,
    errors: &mut Vec<ValidationError>,
) {
    let mut used: HashSet<String> = HashSet::new();
    let mut queue: Vec<(String, Option<ast::Location>)> = Vec::new();
    for op in document.operations() {
        spread_names(&op.selection_set, &mut queue);
    }
    while let Some((name, _)) = queue.pop() {
        if !used.insert(name.clone()) {
            continue;
        }
        if let Some(frag) = fragments.get(name.as_str()) {
            spread_names(&frag.selection_set, &mut queue);
        }
    }
    for (name, frag) in fragments {
        if !used.contains(*name) {
            errors.push(ValidationError::at(format!("Fragment \"{name}\" is never used."), frag.loc));
        }
    }
}
