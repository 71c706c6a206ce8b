//! Field collection (§4.7 "Collect fields"): flattening a selection set's
//! fields, fragment spreads, and inline fragments into a response-key →
//! field-node-list map, honoring `@skip`/`@include` and fragment type
//! conditions. Ported from graphql-js's `CollectFields` algorithm: fields
//! with the same response key (from different branches of the same
//! selection set) are merged into one list so the executor can later
//! merge their sub-selection sets too (§3 glossary "Field merging").

use graphql_lang::ast::{self, Document, Field, FragmentDefinition, Selection, SelectionSet};
use graphql_types::{NamedType, Schema, Value};
use graphql_value::coerce_literal;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Evaluates a `@skip`/`@include` directive's `if` argument, substituting
/// already-coerced variables. Per §3 "Directive defaults", an absent
/// `@skip`/`@include` application has no effect; a present one with an
/// unresolvable `if` (an unbound variable, caught by validation rather
/// than here) defaults to `false` rather than panicking.
fn directive_if(directives: &[ast::Directive], name: &str, variable_values: &IndexMap<String, Value>) -> Option<bool> {
    let directive = directives.iter().find(|d| d.name.as_str() == name)?;
    let arg = directive.argument("if")?;
    let path = graphql_types::Path::new();
    match coerce_literal(&arg.value, &graphql_types::Type::non_null(graphql_types::Type::boolean()), Some(variable_values), &path) {
        Ok(Value::Boolean(b)) => Some(b),
        _ => Some(false),
    }
}

fn should_skip(directives: &[ast::Directive], variable_values: &IndexMap<String, Value>) -> bool {
    if directive_if(directives, "skip", variable_values) == Some(true) {
        return true;
    }
    if directive_if(directives, "include", variable_values) == Some(false) {
        return true;
    }
    false
}

fn fragment_matches(type_condition: &NamedType, runtime_type_name: &str, schema: &Schema) -> bool {
    match type_condition {
        NamedType::Object(obj) => obj.name == runtime_type_name,
        NamedType::Interface(iface) => schema.is_possible_type(&iface.name, runtime_type_name),
        NamedType::Union(u) => schema.is_possible_type(&u.name, runtime_type_name),
        _ => false,
    }
}

/// Collects the fields of `selection_set` against `runtime_type_name`
/// (the concrete object type the selection set is being evaluated
/// against), flattening fragment spreads and inline fragments and
/// dropping anything `@skip`ped/not `@include`d or whose type condition
/// doesn't apply.
pub fn collect_fields<'doc>(
    schema: &Schema,
    document_fragments: &'doc IndexMap<String, FragmentDefinition>,
    runtime_type_name: &str,
    selection_set: &'doc SelectionSet,
    variable_values: &IndexMap<String, Value>,
    visited_fragments: &mut HashSet<String>,
    fields: &mut IndexMap<String, Vec<&'doc Field>>,
) {
    for selection in &selection_set.selections {
        match selection {
            Selection::Field(field) => {
                if should_skip(&field.directives, variable_values) {
                    continue;
                }
                fields.entry(field.response_key().to_string()).or_default().push(field);
            }
            Selection::FragmentSpread(spread) => {
                if should_skip(&spread.directives, variable_values) {
                    continue;
                }
                let name = spread.name.as_str();
                if visited_fragments.contains(name) {
                    continue;
                }
                visited_fragments.insert(name.to_string());
                let Some(fragment) = document_fragments.get(name) else {
                    continue;
                };
                let Some(type_condition) = schema.get_type(fragment.type_condition.name.as_str()) else {
                    continue;
                };
                if !fragment_matches(type_condition, runtime_type_name, schema) {
                    continue;
                }
                collect_fields(
                    schema,
                    document_fragments,
                    runtime_type_name,
                    &fragment.selection_set,
                    variable_values,
                    visited_fragments,
                    fields,
                );
            }
            Selection::InlineFragment(inline) => {
                if should_skip(&inline.directives, variable_values) {
                    continue;
                }
                if let Some(type_condition) = &inline.type_condition {
                    let Some(named) = schema.get_type(type_condition.name.as_str()) else {
                        continue;
                    };
                    if !fragment_matches(named, runtime_type_name, schema) {
                        continue;
                    }
                }
                collect_fields(
                    schema,
                    document_fragments,
                    runtime_type_name,
                    &inline.selection_set,
                    variable_values,
                    visited_fragments,
                    fields,
                );
            }
        }
    }
}

/// Indexes a document's fragment definitions by name, for `ResolveInfo`
/// and for field collection (§4.7 references "fragments" as part of the
/// execution context built once per request).
pub fn index_fragments(document: &Document) -> IndexMap<String, FragmentDefinition> {
    document.fragments().map(|f| (f.name.as_str().to_string(), f.clone())).collect()
}
