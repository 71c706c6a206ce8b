//! Value- and argument-shaped rules (§4.5): values of correct type,
//! required arguments provided, unique argument names, unique input field
//! names. Independent of `graphql-value`'s coercion pipeline by design —
//! validation and execution each import the type system directly rather
//! than one depending on the other, the way the reference implementation
//! keeps its validation rules free of the execution module.

use crate::error::ValidationError;
use crate::rules::known_names::unknown_argument_message;
use graphql_lang::ast::{self, Node};
use graphql_types::{InputValue, NamedType, Type};
use indexmap::IndexMap;
use std::collections::HashSet;

pub fn check_arguments(
    arg_defs: &IndexMap<String, InputValue>,
    arg_nodes: &[ast::Argument],
    holder: &str,
    holder_loc: Option<ast::Location>,
    errors: &mut Vec<ValidationError>,
) {
    let mut seen: HashSet<&str> = HashSet::new();
    for arg in arg_nodes {
        if !seen.insert(arg.name.as_str()) {
            errors.push(ValidationError::at(format!("There can be only one argument named \"{}\".", arg.name.as_str()), arg.loc));
        }
        if !arg_defs.contains_key(arg.name.as_str()) {
            let known: Vec<String> = arg_defs.keys().cloned().collect();
            errors.push(ValidationError::at(unknown_argument_message(arg.name.as_str(), holder, &known), arg.loc));
        }
    }

    for (name, def) in arg_defs {
        match arg_nodes.iter().find(|a| a.name.as_str() == name) {
            Some(arg) => check_value(&arg.value, &def.value_type, errors),
            None if def.default_value.is_none() && def.value_type.is_non_null() => {
                errors.push(ValidationError::at(
                    format!("Argument \"{name}\" of required type \"{}\" was not provided.", def.value_type.display_name()),
                    holder_loc,
                ));
            }
            None => {}
        }
    }
}

/// §4.5 "values of correct type": walks a literal against its expected
/// type the same way `graphql-value::coerce_literal` walks it for real
/// coercion, except variable references are assumed valid here (their
/// compatibility is `rules::variables`'s job) and nothing is actually
/// produced — only shape mismatches are reported.
pub fn check_value(value: &ast::Value, ty: &Type, errors: &mut Vec<ValidationError>) {
    if matches!(value, ast::Value::Variable(_)) {
        return;
    }
    match ty {
        Type::NonNull(inner) => {
            if matches!(value, ast::Value::Null(_)) {
                errors.push(ValidationError::at(format!("Expected value of type \"{}\", found null.", ty.display_name()), node_loc(value)));
                return;
            }
            check_value(value, &Type::from((**inner).clone()), errors);
        }
        Type::List(item_ty) => match value {
            ast::Value::Null(_) => {}
            ast::Value::List(list) => {
                for item in &list.values {
                    check_value(item, item_ty, errors);
                }
            }
            other => check_value(other, item_ty, errors),
        },
        Type::Named(named) => {
            if matches!(value, ast::Value::Null(_)) {
                return;
            }
            check_named_value(value, named, ty, errors);
        }
    }
}

fn check_named_value(value: &ast::Value, named: &NamedType, ty: &Type, errors: &mut Vec<ValidationError>) {
    match named {
        NamedType::Scalar(scalar) => {
            if let Err(e) = (scalar.parse_literal)(value, None) {
                errors.push(ValidationError::at(format!("Expected type \"{}\". {e}", scalar.name), node_loc(value)));
            }
        }
        NamedType::Enum(enum_type) => match value {
            ast::Value::Enum(e) => {
                if enum_type.value_by_name(e.value.as_str()).is_none() {
                    errors.push(ValidationError::at(
                        format!("Value \"{}\" does not exist in \"{}\" enum.", e.value, enum_type.name),
                        e.loc,
                    ));
                }
            }
            other => errors.push(ValidationError::at(
                format!("Enum \"{}\" cannot represent non-enum value.", enum_type.name),
                node_loc(other),
            )),
        },
        NamedType::InputObject(input_object) => match value {
            ast::Value::Object(obj) => {
                let mut seen: HashSet<&str> = HashSet::new();
                for field in &obj.fields {
                    if !seen.insert(field.name.as_str()) {
                        errors.push(ValidationError::at(
                            format!("There can be only one input field named \"{}\".", field.name.as_str()),
                            field.loc,
                        ));
                    }
                    match input_object.fields().get(field.name.as_str()) {
                        Some(def) => check_value(&field.value, &def.value_type, errors),
                        None => errors.push(ValidationError::at(
                            format!("Field \"{}\" is not defined by type \"{}\".", field.name.as_str(), input_object.name),
                            field.loc,
                        )),
                    }
                }
                for (name, def) in input_object.fields() {
                    let provided = obj.fields.iter().any(|f| f.name.as_str() == name);
                    if !provided && def.default_value.is_none() && def.value_type.is_non_null() {
                        errors.push(ValidationError::at(
                            format!("Field \"{name}\" of required type \"{}\" was not provided.", def.value_type.display_name()),
                            obj.loc,
                        ));
                    }
                }
            }
            other => errors.push(ValidationError::at(
                format!("Expected type \"{}\" to be an object.", input_object.name),
                node_loc(other),
            )),
        },
        NamedType::Object(_) | NamedType::Interface(_) | NamedType::Union(_) => {
            errors.push(ValidationError::new(format!("Type \"{}\" is not an input type.", ty.display_name())));
        }
    }
}

fn node_loc(value: &ast::Value) -> Option<ast::Location> {
    value.loc()
}
