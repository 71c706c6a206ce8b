//! Field-shaped rules that need more than one selection at a time:
//! "overlapping fields can be merged" (§4.5). Operates directly on a
//! selection set plus its enclosing type, recursing through fragment
//! spreads and inline fragments itself rather than riding the shared
//! traversal, since merge-checking is about *groups* of sibling selections
//! rather than a single node.

use crate::error::ValidationError;
use crate::type_info::named_type_field;
use graphql_lang::ast;
use graphql_types::{Field, NamedType, Schema};
use indexmap::IndexMap;

struct Entry<'a> {
    field: &'a ast::Field,
    parent: NamedType,
}

pub fn check_selection_set(
    schema: &Schema,
    fragments: &IndexMap<&str, &ast::FragmentDefinition>,
    selection_set: &ast::SelectionSet,
    parent_type: &NamedType,
    errors: &mut Vec<ValidationError>,
) {
    let mut groups: IndexMap<&str, Vec<Entry>> = IndexMap::new();
    collect_fields(schema, fragments, selection_set, parent_type, &mut groups, &mut Vec::new());

    for (response_key, entries) in &groups {
        for pair in entries.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if let Some(message) = conflict_message(response_key, a, b, schema) {
                errors.push(ValidationError::at_many(message, [a.field.loc, b.field.loc]));
            }
        }
    }

    // Recurse into every distinct nested selection set reached here,
    // keyed by the field whose subselection it is.
    for entries in groups.values() {
        let Some(first) = entries.first() else { continue };
        if first.field.selection_set.is_none() {
            continue;
        }
        if let Some(def) = named_type_field(&first.parent, first.field.name.as_str()) {
            let merged = merge_subselections(entries);
            check_selection_set(schema, fragments, &merged, def.field_type.named_type(), errors);
        }
    }
}

/// The reference algorithm merges every field sharing a response key's
/// subselections into one combined selection set before recursing, so a
/// conflict two levels down surfaces even if each individual field's own
/// subselection set looks fine alone.
fn merge_subselections(entries: &[Entry]) -> ast::SelectionSet {
    let mut selections = Vec::new();
    for entry in entries {
        if let Some(ss) = &entry.field.selection_set {
            selections.extend(ss.selections.iter().cloned());
        }
    }
    ast::SelectionSet { selections, loc: None }
}

fn collect_fields<'a>(
    schema: &Schema,
    fragments: &IndexMap<&str, &'a ast::FragmentDefinition>,
    selection_set: &'a ast::SelectionSet,
    parent_type: &NamedType,
    groups: &mut IndexMap<&'a str, Vec<Entry<'a>>>,
    visited_fragments: &mut Vec<String>,
) {
    for selection in &selection_set.selections {
        match selection {
            ast::Selection::Field(field) => {
                groups.entry(field.response_key()).or_default().push(Entry { field, parent: parent_type.clone() });
            }
            ast::Selection::InlineFragment(inline) => {
                let ty = inline
                    .type_condition
                    .as_ref()
                    .and_then(|n| schema.get_type(n.name.as_str()))
                    .cloned()
                    .unwrap_or_else(|| parent_type.clone());
                collect_fields(schema, fragments, &inline.selection_set, &ty, groups, visited_fragments);
            }
            ast::Selection::FragmentSpread(spread) => {
                if visited_fragments.contains(&spread.name.as_str().to_string()) {
                    continue;
                }
                let Some(frag) = fragments.get(spread.name.as_str()) else { continue };
                let Some(ty) = schema.get_type(frag.type_condition.name.as_str()) else { continue };
                visited_fragments.push(spread.name.as_str().to_string());
                collect_fields(schema, fragments, &frag.selection_set, &ty.clone(), groups, visited_fragments);
                visited_fragments.pop();
            }
        }
    }
}

/// Two fields sharing a response key conflict if they come from the same
/// concrete type (or at least one side's parent isn't known to be a
/// distinct object) and either their names/arguments differ, or (when
/// their parent types agree) their return types differ.
fn conflict_message(response_key: &str, a: &Entry, b: &Entry, schema: &Schema) -> Option<String> {
    let same_parent = !are_mutually_exclusive(&a.parent, &b.parent);
    if same_parent && a.field.name.as_str() != b.field.name.as_str() {
        return Some(format!(
            "Fields \"{response_key}\" conflict because \"{}\" and \"{}\" are different fields. Use different aliases on the fields to fetch both if this was intentional.",
            a.field.name.as_str(),
            b.field.name.as_str()
        ));
    }
    if !same_arguments(a.field, b.field) {
        return Some(format!(
            "Fields \"{response_key}\" conflict because they have differing arguments. Use different aliases on the fields to fetch both if this was intentional."
        ));
    }
    if same_parent {
        let def_a = named_type_field(&a.parent, a.field.name.as_str());
        let def_b = named_type_field(&b.parent, b.field.name.as_str());
        if let (Some(da), Some(db)) = (def_a, def_b) {
            if !same_return_shape(&da, &db) {
                return Some(format!(
                    "Fields \"{response_key}\" conflict because they return conflicting types \"{}\" and \"{}\". Use different aliases on the fields to fetch both if this was intentional.",
                    da.field_type.display_name(),
                    db.field_type.display_name()
                ));
            }
        }
    }
    let _ = schema;
    None
}

fn are_mutually_exclusive(a: &NamedType, b: &NamedType) -> bool {
    matches!((a, b), (NamedType::Object(x), NamedType::Object(y)) if x.name != y.name)
}

fn same_arguments(a: &ast::Field, b: &ast::Field) -> bool {
    if a.arguments.len() != b.arguments.len() {
        return false;
    }
    a.arguments.iter().all(|arg_a| b.arguments.iter().any(|arg_b| arg_a.name.as_str() == arg_b.name.as_str() && values_equal(&arg_a.value, &arg_b.value)))
}

fn values_equal(a: &ast::Value, b: &ast::Value) -> bool {
    use ast::Value::*;
    match (a, b) {
        (Variable(x), Variable(y)) => x.name.as_str() == y.name.as_str(),
        (Int(x), Int(y)) => x.value == y.value,
        (Float(x), Float(y)) => x.value == y.value,
        (String(x), String(y)) => x.value == y.value,
        (Boolean(x), Boolean(y)) => x.value == y.value,
        (Null(_), Null(_)) => true,
        (Enum(x), Enum(y)) => x.value == y.value,
        (List(x), List(y)) => x.values.len() == y.values.len() && x.values.iter().zip(&y.values).all(|(p, q)| values_equal(p, q)),
        (Object(x), Object(y)) => {
            x.fields.len() == y.fields.len()
                && x.fields.iter().all(|fx| y.fields.iter().any(|fy| fx.name.as_str() == fy.name.as_str() && values_equal(&fx.value, &fy.value)))
        }
        _ => false,
    }
}

fn same_return_shape(a: &Field, b: &Field) -> bool {
    a.field_type.display_name() == b.field_type.display_name()
}
