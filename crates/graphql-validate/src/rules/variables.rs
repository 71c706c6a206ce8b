//! Variable-shaped rules (§4.5): variables are input types, unique
//! variable names, variable usages allowed (type compatibility between a
//! variable's declared type and every position it's used in), and no
//! unused variables. Usage collection mirrors `graphql-value::coerce`'s
//! recursive threading of an expected type through list/input-object
//! literals, but only to find `$variable` leaves rather than to produce
//! coerced values.

use graphql_lang::ast;
use graphql_types::{NamedType, Type};
use indexmap::IndexMap;

/// One occurrence of a variable reference inside an argument (or a
/// directive argument, or a nested list/input-object literal) value,
/// together with the type expected at that exact position and whether
/// that position carries its own default (only true at the very top of an
/// argument/input-field, per the reference implementation's
/// `VariableUsage` shape).
pub struct VarUsage {
    pub name: String,
    pub loc: Option<ast::Location>,
    pub expected_type: Type,
    pub location_has_default: bool,
}

pub fn collect_usages(value: &ast::Value, expected: &Type, top_level_has_default: bool, out: &mut Vec<VarUsage>) {
    match value {
        ast::Value::Variable(v) => out.push(VarUsage {
            name: v.name.as_str().to_string(),
            loc: v.loc,
            expected_type: expected.clone(),
            location_has_default: top_level_has_default,
        }),
        ast::Value::List(list) => {
            if let Type::List(item_ty) = expected.nullable() {
                for item in &list.values {
                    collect_usages(item, &item_ty, false, out);
                }
            }
        }
        ast::Value::Object(obj) => {
            if let NamedType::InputObject(io) = expected.nullable().named_type() {
                for field in &obj.fields {
                    if let Some(def) = io.fields().get(field.name.as_str()) {
                        collect_usages(&field.value, &def.value_type, def.default_value.is_some(), out);
                    }
                }
            }
        }
        _ => {}
    }
}

/// §4.5 "variable usages allowed": a variable may be used at a position
/// expecting a stricter (non-null) type only when either the variable
/// itself has a non-null default, or the usage position supplies its own
/// default — both sides then guarantee a concrete value reaches a
/// non-null spot even though the variable's declared type is nullable.
pub fn is_variable_usage_allowed(var_type: &Type, var_has_non_null_default: bool, usage: &VarUsage) -> bool {
    if let Type::NonNull(location_inner) = &usage.expected_type {
        if !var_type.is_non_null() {
            if !(var_has_non_null_default || usage.location_has_default) {
                return false;
            }
            let location_as_type: Type = Type::from((**location_inner).clone());
            return type_compatible(var_type, &location_as_type);
        }
    }
    type_compatible(var_type, &usage.expected_type)
}

/// Structural compatibility ignoring the non-null-relaxation handled by
/// the caller: list depth and named type must line up, and a variable's
/// own non-null wrapper is always allowed where a nullable type is
/// expected.
fn type_compatible(var_type: &Type, location_type: &Type) -> bool {
    match (var_type, location_type) {
        (Type::NonNull(v), _) => type_compatible(&Type::from((**v).clone()), location_type),
        (v, Type::NonNull(l)) => v.is_non_null() && type_compatible(v, &Type::from((**l).clone())),
        (Type::List(v), Type::List(l)) => type_compatible(v, l),
        (Type::List(_), _) | (_, Type::List(_)) => false,
        (Type::Named(a), Type::Named(b)) => a == b,
    }
}

pub fn input_type_missing_message(schema_type: Option<&NamedType>, display: &str) -> Option<String> {
    match schema_type {
        Some(named) if named.is_input_type() => None,
        Some(named) => Some(format!("Variable \"${display}\" cannot be non-input type \"{}\".", named.name())),
        None => Some(format!("Variable \"${display}\" cannot be non-input type.")),
    }
}

pub type DeclaredVars = IndexMap<String, (Type, bool, Option<ast::Location>)>;

pub fn has_non_null_default(def: &ast::VariableDefinition) -> bool {
    matches!(def.default_value, Some(ref v) if !matches!(v, ast::Value::Null(_)))
}

