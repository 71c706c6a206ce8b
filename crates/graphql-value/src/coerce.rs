//! Value coercion (§4.6): AST literals and external JSON converted to
//! internal [`Value`]s for a given input type, and internal values
//! serialized back out to response leaves.

use crate::error::CoercionError;
use crate::json::json_to_value;
use graphql_lang::ast;
use graphql_types::{InputValue, NamedType, Path, Type, Value};
use indexmap::IndexMap;

/// AST literal (or `$variable` reference) → internal value (§4.6 "Input
/// coercion (AST or external JSON → internal)").
pub fn coerce_literal(
    node: &ast::Value,
    ty: &Type,
    variables: Option<&IndexMap<String, Value>>,
    path: &Path,
) -> Result<Value, CoercionError> {
    if let ast::Value::Variable(var) = node {
        return match variables.and_then(|v| v.get(var.name.as_str())) {
            Some(value) => coerce_external(value, ty, path),
            None => {
                if ty.is_non_null() {
                    Err(CoercionError::at(
                        format!("Variable \"${}\" of required type \"{}\" was not provided.", var.name, ty.display_name()),
                        path,
                    ))
                } else {
                    Ok(Value::Null)
                }
            }
        };
    }

    match ty {
        Type::NonNull(inner) => {
            if matches!(node, ast::Value::Null(_)) {
                return Err(CoercionError::at(format!("Expected value of type \"{}\", found null.", ty.display_name()), path));
            }
            coerce_literal(node, &Type::from((**inner).clone()), variables, path)
        }
        Type::List(item_ty) => match node {
            ast::Value::Null(_) => Ok(Value::Null),
            ast::Value::List(list) => {
                let mut items = Vec::with_capacity(list.values.len());
                for (i, item) in list.values.iter().enumerate() {
                    items.push(coerce_literal(item, item_ty, variables, &path.with_index(i))?);
                }
                Ok(Value::List(items))
            }
            _ => Ok(Value::List(vec![coerce_literal(node, item_ty, variables, path)?])),
        },
        Type::Named(named) => {
            if matches!(node, ast::Value::Null(_)) {
                return Ok(Value::Null);
            }
            coerce_named_literal(node, named, variables, path)
        }
    }
}

fn coerce_named_literal(
    node: &ast::Value,
    named: &NamedType,
    variables: Option<&IndexMap<String, Value>>,
    path: &Path,
) -> Result<Value, CoercionError> {
    match named {
        NamedType::Scalar(scalar) => {
            (scalar.parse_literal)(node, variables).map_err(|e| CoercionError::at(e, path))
        }
        NamedType::Enum(enum_type) => match node {
            ast::Value::Enum(e) => enum_type
                .value_by_name(e.value.as_str())
                .map(|v| v.internal_value.clone())
                .ok_or_else(|| {
                    CoercionError::at(format!("Value \"{}\" does not exist in \"{}\" enum.", e.value, enum_type.name), path)
                }),
            other => Err(CoercionError::at(
                format!("Enum \"{}\" cannot represent non-enum value: {}", enum_type.name, display_ast(other)),
                path,
            )),
        },
        NamedType::InputObject(input_object) => match node {
            ast::Value::Object(obj) => coerce_input_object_literal(obj, input_object.fields(), variables, path),
            other => Err(CoercionError::at(
                format!("Expected type \"{}\" to be an object.", input_object.name, ) + &format!(" Found {}.", display_ast(other)),
                path,
            )),
        },
        NamedType::Object(_) | NamedType::Interface(_) | NamedType::Union(_) => Err(CoercionError::at(
            format!("Type \"{}\" is not an input type.", named.name()),
            path,
        )),
    }
}

fn coerce_input_object_literal(
    obj: &ast::ObjectValue,
    field_defs: &IndexMap<String, InputValue>,
    variables: Option<&IndexMap<String, Value>>,
    path: &Path,
) -> Result<Value, CoercionError> {
    let mut provided: IndexMap<&str, &ast::Value> = IndexMap::new();
    for field in &obj.fields {
        provided.insert(field.name.as_str(), &field.value);
    }
    for key in provided.keys() {
        if !field_defs.contains_key(*key) {
            return Err(CoercionError::at(format!("Field \"{key}\" is not defined by type."), path));
        }
    }

    let mut result = IndexMap::new();
    for (name, def) in field_defs {
        let field_path = path.with_key(name.clone());
        match provided.get(name.as_str()) {
            Some(value_node) => {
                result.insert(name.clone(), coerce_literal(value_node, &def.value_type, variables, &field_path)?);
            }
            None => match &def.default_value {
                Some(default) => {
                    result.insert(name.clone(), coerce_literal(default, &def.value_type, None, &field_path)?);
                }
                None if def.value_type.is_non_null() => {
                    return Err(CoercionError::at(
                        format!("Field \"{name}\" of required type \"{}\" was not provided.", def.value_type.display_name()),
                        &field_path,
                    ));
                }
                None => {}
            },
        }
    }
    Ok(Value::Object(result))
}

fn display_ast(node: &ast::Value) -> String {
    match node {
        ast::Value::Variable(v) => format!("${}", v.name),
        ast::Value::Int(i) => i.value.clone(),
        ast::Value::Float(f) => f.value.clone(),
        ast::Value::String(s) => format!("{:?}", s.value),
        ast::Value::Boolean(b) => b.value.to_string(),
        ast::Value::Null(_) => "null".to_string(),
        ast::Value::Enum(e) => e.value.clone(),
        ast::Value::List(_) => "[...]".to_string(),
        ast::Value::Object(_) => "{...}".to_string(),
    }
}

/// External (already-JSON-shaped) value → internal value, used for
/// variable values and for recursing into list/input-object members of a
/// variable (§4.6 "Variables: iterate variable definitions, coerce with
/// type").
pub fn coerce_external(value: &Value, ty: &Type, path: &Path) -> Result<Value, CoercionError> {
    if value.is_null() {
        if ty.is_non_null() {
            return Err(CoercionError::at(format!("Expected non-nullable type \"{}\" not to be null.", ty.display_name()), path));
        }
        return Ok(Value::Null);
    }
    match ty {
        Type::NonNull(inner) => coerce_external(value, &Type::from((**inner).clone()), path),
        Type::List(item_ty) => match value {
            Value::List(items) => {
                let mut out = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    out.push(coerce_external(item, item_ty, &path.with_index(i))?);
                }
                Ok(Value::List(out))
            }
            other => Ok(Value::List(vec![coerce_external(other, item_ty, path)?])),
        },
        Type::Named(named) => coerce_named_external(value, named, path),
    }
}

fn coerce_named_external(value: &Value, named: &NamedType, path: &Path) -> Result<Value, CoercionError> {
    match named {
        NamedType::Scalar(scalar) => {
            (scalar.parse_value)(value).map_err(|e| CoercionError::at(e, path))
        }
        NamedType::Enum(enum_type) => match value.as_str() {
            Some(name) => enum_type
                .value_by_name(name)
                .map(|v| v.internal_value.clone())
                .ok_or_else(|| CoercionError::at(format!("Value \"{name}\" does not exist in \"{}\" enum.", enum_type.name), path)),
            None => Err(CoercionError::at(format!("Enum \"{}\" cannot represent non-string value: {value}", enum_type.name), path)),
        },
        NamedType::InputObject(input_object) => match value {
            Value::Object(provided) => {
                for key in provided.keys() {
                    if !input_object.fields().contains_key(key) {
                        return Err(CoercionError::at(format!("Field \"{key}\" is not defined by type."), path));
                    }
                }
                let mut result = IndexMap::new();
                for (name, def) in input_object.fields() {
                    let field_path = path.with_key(name.clone());
                    match provided.get(name) {
                        Some(v) => {
                            result.insert(name.clone(), coerce_external(v, &def.value_type, &field_path)?);
                        }
                        None => match &def.default_value {
                            Some(default) => {
                                result.insert(name.clone(), coerce_literal(default, &def.value_type, None, &field_path)?);
                            }
                            None if def.value_type.is_non_null() => {
                                return Err(CoercionError::at(
                                    format!("Field \"{name}\" of required type \"{}\" was not provided.", def.value_type.display_name()),
                                    &field_path,
                                ));
                            }
                            None => {}
                        },
                    }
                }
                Ok(Value::Object(result))
            }
            other => Err(CoercionError::at(format!("Expected type \"{}\" to be an object, found: {other}", input_object.name), path)),
        },
        NamedType::Object(_) | NamedType::Interface(_) | NamedType::Union(_) => {
            Err(CoercionError::at(format!("Type \"{}\" is not an input type.", named.name()), path))
        }
    }
}

/// Coerces every declared variable (§4.6 "Variables"): absent variables
/// with a default use the coerced default; absent required variables
/// error; extraneous variables in `raw` are ignored (mirroring the
/// reference implementation, which only reads declared names).
pub fn coerce_variable_values(
    schema: &graphql_types::Schema,
    variable_definitions: &[ast::VariableDefinition],
    raw_variables: Option<&serde_json::Map<String, serde_json::Value>>,
) -> Result<IndexMap<String, Value>, Vec<CoercionError>> {
    let mut coerced = IndexMap::new();
    let mut errors = Vec::new();
    for def in variable_definitions {
        let name = def.variable.name.as_str();
        let path = Path::new().with_key(format!("${name}"));
        let Some(var_type) = schema.resolve_ast_type(&def.var_type) else {
            errors.push(CoercionError::at(format!("Unknown type for variable \"${name}\"."), &path));
            continue;
        };
        let provided = raw_variables.and_then(|m| m.get(name));
        match provided {
            Some(json_value) if !json_value.is_null() || !var_type.is_non_null() => {
                let value = json_to_value(json_value);
                match coerce_external(&value, &var_type, &path) {
                    Ok(v) => {
                        coerced.insert(name.to_string(), v);
                    }
                    Err(e) => errors.push(CoercionError::at(
                        format!("Variable \"${name}\" got invalid value {json_value}; {}", e.message),
                        &path,
                    )),
                }
            }
            _ => match &def.default_value {
                Some(default) => match coerce_literal(default, &var_type, None, &path) {
                    Ok(v) => {
                        coerced.insert(name.to_string(), v);
                    }
                    Err(e) => errors.push(e),
                },
                None if var_type.is_non_null() => {
                    errors.push(CoercionError::at(format!("Variable \"${name}\" of required type \"{}\" was not provided.", var_type.display_name()), &path));
                }
                None => {}
            },
        }
    }
    if errors.is_empty() {
        Ok(coerced)
    } else {
        Err(errors)
    }
}

/// Coerces a field/directive's argument list (§4.7 "Resolve argument
/// values by coercion"): defaults apply for omitted arguments, `$variable`
/// references are substituted from already-coerced `variable_values`.
pub fn coerce_argument_values(
    arg_defs: &IndexMap<String, InputValue>,
    arg_nodes: &[ast::Argument],
    variable_values: &IndexMap<String, Value>,
) -> Result<IndexMap<String, Value>, Vec<CoercionError>> {
    let mut provided: IndexMap<&str, &ast::Value> = IndexMap::new();
    for arg in arg_nodes {
        provided.insert(arg.name.as_str(), &arg.value);
    }

    let mut coerced = IndexMap::new();
    let mut errors = Vec::new();
    for (name, def) in arg_defs {
        let path = Path::new().with_key(name.clone());
        match provided.get(name.as_str()) {
            Some(node) => match coerce_literal(node, &def.value_type, Some(variable_values), &path) {
                Ok(v) => {
                    coerced.insert(name.clone(), v);
                }
                Err(e) => errors.push(CoercionError::at(format!("Argument \"{name}\" got invalid value; {}", e.message), &path)),
            },
            None => match &def.default_value {
                Some(default) => match coerce_literal(default, &def.value_type, None, &path) {
                    Ok(v) => {
                        coerced.insert(name.clone(), v);
                    }
                    Err(e) => errors.push(e),
                },
                None if def.value_type.is_non_null() => {
                    errors.push(CoercionError::at(
                        format!("Argument \"{name}\" of required type \"{}\" was not provided.", def.value_type.display_name()),
                        &path,
                    ));
                }
                None => {}
            },
        }
    }
    if errors.is_empty() {
        Ok(coerced)
    } else {
        Err(errors)
    }
}

/// Output serialization (§4.6 "Output serialization"): leaf values are
/// serialized by the scalar's `serialize`; enums map internal value back
/// to name; lists/non-nulls recurse.
pub fn serialize_output(value: &Value, ty: &Type, path: &Path) -> Result<Value, CoercionError> {
    if value.is_null() {
        return Ok(Value::Null);
    }
    match ty {
        Type::NonNull(inner) => serialize_output(value, &Type::from((**inner).clone()), path),
        Type::List(item_ty) => match value {
            Value::List(items) => {
                let mut out = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    out.push(serialize_output(item, item_ty, &path.with_index(i))?);
                }
                Ok(Value::List(out))
            }
            other => Err(CoercionError::at(format!("Expected Iterable, but did not find one for field value: {other}"), path)),
        },
        Type::Named(NamedType::Scalar(scalar)) => {
            (scalar.serialize)(value).map_err(|e| CoercionError::at(format!("{} serialize error: {e}", scalar.name), path))
        }
        Type::Named(NamedType::Enum(enum_type)) => enum_type
            .name_for_value(value)
            .map(|n| Value::Enum(n.to_string()))
            .ok_or_else(|| CoercionError::at(format!("Enum \"{}\" cannot represent value: {value}", enum_type.name), path)),
        Type::Named(_) => Err(CoercionError::at("Cannot serialize non-leaf type as an output value.".to_string(), path)),
    }
}
