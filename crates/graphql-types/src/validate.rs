//! Schema validator (§4.4): a one-shot aggregate check of schema
//! invariants, run and cached by [`crate::Schema::validate`].

use crate::error::SchemaError;
use crate::name::{assert_valid_enum_value_name, assert_valid_name};
use crate::object::ObjectType;
use crate::schema::Schema;
use crate::type_ref::NamedType;
use std::collections::HashSet;
use std::sync::Arc;

pub fn validate_schema(schema: &Schema) -> Vec<SchemaError> {
    let mut errors = Vec::new();

    validate_root_types(schema, &mut errors);
    validate_directives(schema, &mut errors);
    for named in schema.type_map.values() {
        validate_name(named, &mut errors);
        validate_type_shape(named, &mut errors);
    }
    validate_interface_implementations(schema, &mut errors);
    validate_interface_acyclicity(schema, &mut errors);
    validate_input_object_acyclicity(schema, &mut errors);

    errors
}

fn validate_root_types(schema: &Schema, errors: &mut Vec<SchemaError>) {
    // `query`/`mutation`/`subscription` are already typed as `Arc<ObjectType>`
    // at the Rust level, so "must be Object type" is structurally guaranteed;
    // only presence of `query` needs checking here.
    if schema.query.is_none() {
        errors.push(SchemaError::MissingQueryType);
    }
}

fn validate_name(named: &NamedType, errors: &mut Vec<SchemaError>) {
    let allow_introspection = named.name().starts_with("__");
    if let Err(e) = assert_valid_name(named.name(), allow_introspection) {
        errors.push(e);
    }
    if let NamedType::Enum(e) = named {
        for value_name in e.values.keys() {
            if let Err(err) = assert_valid_enum_value_name(value_name) {
                errors.push(err);
            }
        }
    }
}

fn validate_type_shape(named: &NamedType, errors: &mut Vec<SchemaError>) {
    match named {
        NamedType::Object(o) => {
            if o.fields().is_empty() {
                errors.push(SchemaError::NoFields { name: o.name.clone() });
            }
        }
        NamedType::Interface(i) => {
            if i.fields().is_empty() {
                errors.push(SchemaError::NoFields { name: i.name.clone() });
            }
        }
        NamedType::InputObject(io) => {
            if io.fields().is_empty() {
                errors.push(SchemaError::NoFields { name: io.name.clone() });
            }
        }
        NamedType::Union(u) => {
            if u.types().is_empty() {
                errors.push(SchemaError::NoUnionMembers { name: u.name.clone() });
            }
        }
        NamedType::Enum(e) => {
            if e.values.is_empty() {
                errors.push(SchemaError::NoEnumValues { name: e.name.clone() });
            }
        }
        NamedType::Scalar(_) => {}
    }
}

fn validate_directives(schema: &Schema, errors: &mut Vec<SchemaError>) {
    let mut seen = HashSet::new();
    for directive in &schema.directives {
        if !seen.insert(directive.name.clone()) {
            errors.push(SchemaError::DuplicateDirective { name: directive.name.clone() });
        }
        let mut seen_args = HashSet::new();
        for (arg_name, arg) in &directive.args {
            if !seen_args.insert(arg_name.clone()) {
                errors.push(SchemaError::DuplicateDirectiveArgument {
                    directive: directive.name.clone(),
                    arg: arg_name.clone(),
                });
            }
            if !arg.value_type.is_input_type() {
                errors.push(SchemaError::DirectiveArgMustBeInputType {
                    directive: directive.name.clone(),
                    arg: arg_name.clone(),
                    type_name: arg.value_type.display_name(),
                });
            }
        }
    }
}

/// Invariant 4: an object implementing an interface covariantly satisfies
/// every field (sub-type return, invariant argument types, no new required
/// args).
fn validate_interface_implementations(schema: &Schema, errors: &mut Vec<SchemaError>) {
    for named in schema.type_map.values() {
        if let NamedType::Object(obj) = named {
            for iface in obj.interfaces() {
                check_implements(obj, iface, schema, errors);
            }
        }
    }
}

fn check_implements(
    obj: &Arc<ObjectType>,
    iface: &Arc<crate::interface::InterfaceType>,
    schema: &Schema,
    errors: &mut Vec<SchemaError>,
) {
    for (field_name, iface_field) in iface.fields() {
        let Some(obj_field) = obj.fields().get(field_name) else {
            errors.push(SchemaError::InterfaceFieldMissing {
                object: obj.name.clone(),
                interface: iface.name.clone(),
                field: field_name.clone(),
            });
            continue;
        };
        if !obj_field.field_type.is_sub_type_of(&iface_field.field_type, schema) {
            errors.push(SchemaError::InterfaceFieldTypeMismatch {
                object: obj.name.clone(),
                interface: iface.name.clone(),
                field: field_name.clone(),
                expected: iface_field.field_type.display_name(),
                actual: obj_field.field_type.display_name(),
            });
        }
        for (arg_name, iface_arg) in &iface_field.args {
            let Some(obj_arg) = obj_field.args.get(arg_name) else {
                errors.push(SchemaError::InterfaceArgMissing {
                    object: obj.name.clone(),
                    interface: iface.name.clone(),
                    field: field_name.clone(),
                    arg: arg_name.clone(),
                });
                continue;
            };
            if obj_arg.value_type != iface_arg.value_type {
                errors.push(SchemaError::InterfaceArgTypeMismatch {
                    object: obj.name.clone(),
                    interface: iface.name.clone(),
                    field: field_name.clone(),
                    arg: arg_name.clone(),
                    expected: iface_arg.value_type.display_name(),
                    actual: obj_arg.value_type.display_name(),
                });
            }
        }
        for (arg_name, obj_arg) in &obj_field.args {
            if obj_arg.value_type.is_non_null() && obj_arg.default_value.is_none() && !iface_field.args.contains_key(arg_name) {
                errors.push(SchemaError::InterfaceArgNewRequired {
                    object: obj.name.clone(),
                    interface: iface.name.clone(),
                    field: field_name.clone(),
                    arg: arg_name.clone(),
                });
            }
        }
    }
}

/// Invariant 5: interfaces implementing interfaces are acyclic; transitive
/// implementations must be reflected by implementors (an object implementing
/// `B` which implements `A` must also declare `A`).
fn validate_interface_acyclicity(schema: &Schema, errors: &mut Vec<SchemaError>) {
    for named in schema.type_map.values() {
        if let NamedType::Interface(iface) = named {
            let mut visiting = HashSet::new();
            check_interface_cycle(iface, &mut visiting, errors);
        }
        if let NamedType::Object(obj) = named {
            let declared: HashSet<&str> = obj.interfaces().iter().map(|i| i.name.as_str()).collect();
            for iface in obj.interfaces() {
                for transitive in iface.interfaces() {
                    if !declared.contains(transitive.name.as_str()) {
                        errors.push(SchemaError::TransitiveInterfaceNotImplemented {
                            object: obj.name.clone(),
                            interface: iface.name.clone(),
                            transitive: transitive.name.clone(),
                            field: String::new(),
                        });
                    }
                }
            }
        }
    }
}

fn check_interface_cycle<'a>(
    iface: &'a Arc<crate::interface::InterfaceType>,
    visiting: &mut HashSet<String>,
    errors: &mut Vec<SchemaError>,
) {
    if !visiting.insert(iface.name.clone()) {
        errors.push(SchemaError::SelfImplementingInterface { interface: iface.name.clone() });
        return;
    }
    for parent in iface.interfaces() {
        if parent.name == iface.name {
            errors.push(SchemaError::SelfImplementingInterface { interface: iface.name.clone() });
        } else if visiting.contains(&parent.name) {
            errors.push(SchemaError::CircularInterfaceImplementation {
                interface: iface.name.clone(),
                implemented: parent.name.clone(),
            });
        } else {
            check_interface_cycle(parent, visiting, errors);
        }
    }
    visiting.remove(&iface.name);
}

/// Invariant 6: input objects must not form a cycle solely of non-null
/// fields (a cycle through a nullable or list field is fine, since it can
/// always be broken by supplying `null`/`[]`).
fn validate_input_object_acyclicity(schema: &Schema, errors: &mut Vec<SchemaError>) {
    for named in schema.type_map.values() {
        if let NamedType::InputObject(io) = named {
            let mut path = Vec::new();
            let mut visiting = HashSet::new();
            check_input_object_cycle(io, &mut visiting, &mut path, errors);
        }
    }
}

fn check_input_object_cycle(
    io: &Arc<crate::input_object::InputObjectType>,
    visiting: &mut HashSet<String>,
    path: &mut Vec<String>,
    errors: &mut Vec<SchemaError>,
) {
    if !visiting.insert(io.name.clone()) {
        return;
    }
    path.push(io.name.clone());
    for (field_name, field) in io.fields() {
        if !field.value_type.is_non_null() {
            continue;
        }
        if let NamedType::InputObject(nested) = field.value_type.named_type() {
            if nested.name == io.name || visiting.contains(&nested.name) {
                let mut full_path = path.clone();
                full_path.push(field_name.clone());
                errors.push(SchemaError::CircularInputObject { name: io.name.clone(), path: full_path.join(".") });
            } else {
                check_input_object_cycle(nested, visiting, path, errors);
            }
        }
    }
    path.pop();
    visiting.remove(&io.name);
}
