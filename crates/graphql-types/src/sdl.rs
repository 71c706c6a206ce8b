//! `build_ast_schema`/`build_schema` (§6): builds a [`Schema`] from parsed
//! (or raw) SDL text. Declared in §1 as "deliberately out of scope" for the
//! validation/execution core proper, but the facade crate (`graphql`)
//! needs a concrete collaborator to expose `build_schema`, so a minimal,
//! mechanically-derived builder lives here next to the type system it
//! populates.

use crate::directive::{DirectiveAnnotation, DirectiveLocation, DirectiveType};
use crate::enum_type::{EnumType, EnumValue};
use crate::error::SchemaError;
use crate::input::InputValue;
use crate::input_object::InputObjectType;
use crate::interface::InterfaceType;
use crate::lazy::Thunk;
use crate::object::{Field, ObjectType};
use crate::scalar::ScalarType;
use crate::schema::Schema;
use crate::type_ref::{NamedType, Type};
use crate::union::UnionType;
use crate::value::Value as CoreValue;
use graphql_lang::ast::{self, Document};
use indexmap::IndexMap;
use std::sync::{Arc, OnceLock};

pub fn build_schema(sdl: &str) -> Result<Schema, SchemaError> {
    let source = graphql_lang::Source::new(sdl);
    let document = graphql_lang::parse_document(&source, Default::default())
        .map_err(|e| SchemaError::Located { message: e.message, locations: Vec::new() })?;
    build_ast_schema(&document)
}

pub fn build_ast_schema(document: &Document) -> Result<Schema, SchemaError> {
    let merged = merge_extensions(document);
    let registry: Arc<OnceLock<Registry>> = Arc::new(OnceLock::new());

    let mut objects = IndexMap::new();
    let mut interfaces = IndexMap::new();
    let mut unions = IndexMap::new();
    let mut enums = IndexMap::new();
    let mut input_objects = IndexMap::new();
    let mut scalars: IndexMap<String, Arc<ScalarType>> = IndexMap::new();
    for scalar in ScalarType::specified() {
        scalars.insert(scalar.name.clone(), scalar);
    }

    for def in &merged.type_defs {
        match def {
            ast::TypeDefinition::Scalar(s) => {
                scalars.entry(s.name.to_string()).or_insert_with(|| passthrough_scalar(s.name.as_str()));
            }
            ast::TypeDefinition::Object(o) => {
                let reg = registry.clone();
                let name = o.name.to_string();
                let fields_def = o.fields.clone();
                let reg2 = registry.clone();
                let interfaces_def = o.interfaces.clone();
                objects.insert(
                    name.clone(),
                    Arc::new(ObjectType::new(
                        name,
                        o.description.as_ref().map(|d| d.value.clone()),
                        convert_directives(&o.directives),
                        Thunk::lazy(move || resolve_interfaces(&interfaces_def, reg2.get().expect("schema registry not yet built"))),
                        Thunk::lazy(move || build_fields(&fields_def, reg.get().expect("schema registry not yet built"))),
                    )),
                );
            }
            ast::TypeDefinition::Interface(i) => {
                let reg = registry.clone();
                let name = i.name.to_string();
                let fields_def = i.fields.clone();
                let reg2 = registry.clone();
                let interfaces_def = i.interfaces.clone();
                interfaces.insert(
                    name.clone(),
                    Arc::new(InterfaceType::new(
                        name,
                        i.description.as_ref().map(|d| d.value.clone()),
                        convert_directives(&i.directives),
                        Thunk::lazy(move || resolve_interfaces(&interfaces_def, reg2.get().expect("schema registry not yet built"))),
                        Thunk::lazy(move || build_fields(&fields_def, reg.get().expect("schema registry not yet built"))),
                    )),
                );
            }
            ast::TypeDefinition::Union(u) => {
                let reg = registry.clone();
                let name = u.name.to_string();
                let members = u.types.clone();
                unions.insert(
                    name.clone(),
                    Arc::new(UnionType::new(
                        name,
                        u.description.as_ref().map(|d| d.value.clone()),
                        convert_directives(&u.directives),
                        Thunk::lazy(move || {
                            let reg = reg.get().expect("schema registry not yet built");
                            members
                                .iter()
                                .filter_map(|m| reg.objects.get(m.name.as_str()).cloned())
                                .collect()
                        }),
                    )),
                );
            }
            ast::TypeDefinition::Enum(e) => {
                let mut values = IndexMap::new();
                for v in &e.values {
                    let deprecation_reason = deprecation_reason(&convert_directives(&v.directives));
                    values.insert(
                        v.name.to_string(),
                        EnumValue {
                            name: v.name.to_string(),
                            description: v.description.as_ref().map(|d| d.value.clone()),
                            internal_value: CoreValue::Enum(v.name.to_string()),
                            deprecation_reason,
                            directives: convert_directives(&v.directives),
                        },
                    );
                }
                let mut enum_type = EnumType::new(e.name.to_string(), values);
                enum_type.description = e.description.as_ref().map(|d| d.value.clone());
                enum_type.directives = convert_directives(&e.directives);
                enums.insert(e.name.to_string(), Arc::new(enum_type));
            }
            ast::TypeDefinition::InputObject(io) => {
                let reg = registry.clone();
                let name = io.name.to_string();
                let fields_def = io.fields.clone();
                input_objects.insert(
                    name.clone(),
                    Arc::new(InputObjectType::new(
                        name,
                        io.description.as_ref().map(|d| d.value.clone()),
                        convert_directives(&io.directives),
                        Thunk::lazy(move || build_input_fields(&fields_def, reg.get().expect("schema registry not yet built"))),
                    )),
                );
            }
        }
    }

    registry
        .set(Registry { objects: objects.clone(), interfaces: interfaces.clone(), unions, enums, input_objects, scalars })
        .map_err(|_| SchemaError::Located { message: "internal: schema registry set twice".into(), locations: Vec::new() })?;

    let (query_name, mutation_name, subscription_name) = match &merged.schema_def {
        Some(def) => {
            let mut q = None;
            let mut m = None;
            let mut s = None;
            for (op, ty) in &def.operation_types {
                match op {
                    ast::OperationType::Query => q = Some(ty.name.to_string()),
                    ast::OperationType::Mutation => m = Some(ty.name.to_string()),
                    ast::OperationType::Subscription => s = Some(ty.name.to_string()),
                }
            }
            (q, m, s)
        }
        None => (
            objects.contains_key("Query").then(|| "Query".to_string()),
            objects.contains_key("Mutation").then(|| "Mutation".to_string()),
            objects.contains_key("Subscription").then(|| "Subscription".to_string()),
        ),
    };

    let mut builder = Schema::builder();
    if let Some(name) = query_name {
        let obj = objects.get(&name).cloned().ok_or_else(|| SchemaError::UnknownType { name: name.clone(), context: "schema query root".into() })?;
        builder = builder.query(obj);
    }
    if let Some(name) = mutation_name {
        let obj = objects.get(&name).cloned().ok_or_else(|| SchemaError::UnknownType { name: name.clone(), context: "schema mutation root".into() })?;
        builder = builder.mutation(obj);
    }
    if let Some(name) = subscription_name {
        let obj = objects.get(&name).cloned().ok_or_else(|| SchemaError::UnknownType { name: name.clone(), context: "schema subscription root".into() })?;
        builder = builder.subscription(obj);
    }
    for def in &merged.directive_defs {
        builder = builder.directive(convert_directive_def(def));
    }
    builder.build()
}

struct Registry {
    objects: IndexMap<String, Arc<ObjectType>>,
    interfaces: IndexMap<String, Arc<InterfaceType>>,
    unions: IndexMap<String, Arc<UnionType>>,
    enums: IndexMap<String, Arc<EnumType>>,
    input_objects: IndexMap<String, Arc<InputObjectType>>,
    scalars: IndexMap<String, Arc<ScalarType>>,
}

impl Registry {
    fn lookup(&self, name: &str) -> Option<NamedType> {
        self.scalars
            .get(name)
            .map(|t| NamedType::Scalar(t.clone()))
            .or_else(|| self.objects.get(name).map(|t| NamedType::Object(t.clone())))
            .or_else(|| self.interfaces.get(name).map(|t| NamedType::Interface(t.clone())))
            .or_else(|| self.unions.get(name).map(|t| NamedType::Union(t.clone())))
            .or_else(|| self.enums.get(name).map(|t| NamedType::Enum(t.clone())))
            .or_else(|| self.input_objects.get(name).map(|t| NamedType::InputObject(t.clone())))
    }
}

fn convert_ast_type(t: &ast::Type, registry: &Registry) -> Type {
    match t {
        ast::Type::Named(n) => {
            let named = registry.lookup(n.name.as_str()).unwrap_or_else(|| {
                // An SDL referencing an unknown type is a schema error caught by
                // the validator's reachability pass; here we fall back to a
                // placeholder String so construction doesn't panic.
                NamedType::Scalar(registry.scalars.get("String").cloned().unwrap())
            });
            Type::Named(named)
        }
        ast::Type::List(l) => Type::list(convert_ast_type(&l.inner, registry)),
        ast::Type::NonNull(n) => {
            let inner: ast::Type = match &n.inner {
                ast::NullableType::Named(named) => ast::Type::Named(named.clone()),
                ast::NullableType::List(l) => ast::Type::List(l.clone()),
            };
            Type::non_null(convert_ast_type(&inner, registry))
        }
    }
}

fn resolve_interfaces(names: &[ast::NamedType], registry: &Registry) -> Vec<Arc<InterfaceType>> {
    names.iter().filter_map(|n| registry.interfaces.get(n.name.as_str()).cloned()).collect()
}

fn build_fields(defs: &[ast::FieldDefinition], registry: &Registry) -> IndexMap<String, Field> {
    let mut fields = IndexMap::new();
    for def in defs {
        let mut args = IndexMap::new();
        for arg in &def.arguments {
            args.insert(
                arg.name.to_string(),
                InputValue {
                    value_type: convert_ast_type(&arg.value_type, registry),
                    default_value: arg.default_value.clone(),
                    description: arg.description.as_ref().map(|d| d.value.clone()),
                },
            );
        }
        let directives = convert_directives(&def.directives);
        let mut field = Field::new(def.name.to_string(), convert_ast_type(&def.field_type, registry));
        field.description = def.description.as_ref().map(|d| d.value.clone());
        field.args = args;
        field.deprecation_reason = deprecation_reason(&directives);
        field.directives = directives;
        fields.insert(def.name.to_string(), field);
    }
    fields
}

fn build_input_fields(defs: &[ast::InputValueDefinition], registry: &Registry) -> IndexMap<String, InputValue> {
    let mut fields = IndexMap::new();
    for def in defs {
        fields.insert(
            def.name.to_string(),
            InputValue {
                value_type: convert_ast_type(&def.value_type, registry),
                default_value: def.default_value.clone(),
                description: def.description.as_ref().map(|d| d.value.clone()),
            },
        );
    }
    fields
}

fn convert_directives(defs: &[ast::Directive]) -> Vec<DirectiveAnnotation> {
    defs.iter()
        .map(|d| DirectiveAnnotation {
            name: d.name.to_string(),
            arguments: d.arguments.iter().map(|a| (a.name.to_string(), a.value.clone())).collect(),
            loc: d.loc,
        })
        .collect()
}

fn deprecation_reason(directives: &[DirectiveAnnotation]) -> Option<String> {
    let directive = directives.iter().find(|d| d.name == "deprecated")?;
    match directive.arguments.get("reason") {
        Some(ast::Value::String(s)) => Some(s.value.clone()),
        Some(_) => None,
        None => Some("No longer supported".to_string()),
    }
}

fn convert_directive_def(def: &ast::DirectiveDefinition) -> DirectiveType {
    let mut args = IndexMap::new();
    for arg in &def.arguments {
        args.insert(
            arg.name.to_string(),
            InputValue {
                value_type: builtin_or_string(&arg.value_type),
                default_value: arg.default_value.clone(),
                description: arg.description.as_ref().map(|d| d.value.clone()),
            },
        );
    }
    DirectiveType {
        name: def.name.to_string(),
        description: def.description.as_ref().map(|d| d.value.clone()),
        locations: def.locations.iter().filter_map(convert_directive_location).collect(),
        args,
        repeatable: def.repeatable,
    }
}

/// Custom directive definitions are resolved against only the always-present
/// built-in scalars; object-typed directive arguments are rare enough in
/// practice that a full registry pass for them is not worth the extra
/// build-order complexity here (documented limitation, see DESIGN.md).
fn builtin_or_string(t: &ast::Type) -> Type {
    match t.inner_name().as_str() {
        "Int" => rewrap(t, Type::int()),
        "Float" => rewrap(t, Type::float()),
        "Boolean" => rewrap(t, Type::boolean()),
        "ID" => rewrap(t, Type::id()),
        _ => rewrap(t, Type::string()),
    }
}

fn rewrap(t: &ast::Type, leaf: Type) -> Type {
    match t {
        ast::Type::Named(_) => leaf,
        ast::Type::List(l) => Type::list(rewrap(&l.inner, leaf)),
        ast::Type::NonNull(n) => {
            let inner = match &n.inner {
                ast::NullableType::Named(named) => ast::Type::Named(named.clone()),
                ast::NullableType::List(l) => ast::Type::List(l.clone()),
            };
            Type::non_null(rewrap(&inner, leaf))
        }
    }
}

fn convert_directive_location(loc: &ast::DirectiveLocation) -> Option<DirectiveLocation> {
    use ast::DirectiveLocation as L;
    Some(match loc {
        L::Query => DirectiveLocation::Query,
        L::Mutation => DirectiveLocation::Mutation,
        L::Subscription => DirectiveLocation::Subscription,
        L::Field => DirectiveLocation::Field,
        L::FragmentDefinition => DirectiveLocation::FragmentDefinition,
        L::FragmentSpread => DirectiveLocation::FragmentSpread,
        L::InlineFragment => DirectiveLocation::InlineFragment,
        L::VariableDefinition => DirectiveLocation::VariableDefinition,
        L::Schema => DirectiveLocation::Schema,
        L::Scalar => DirectiveLocation::Scalar,
        L::Object => DirectiveLocation::Object,
        L::FieldDefinition => DirectiveLocation::FieldDefinition,
        L::ArgumentDefinition => DirectiveLocation::ArgumentDefinition,
        L::Interface => DirectiveLocation::Interface,
        L::Union => DirectiveLocation::Union,
        L::Enum => DirectiveLocation::Enum,
        L::EnumValue => DirectiveLocation::EnumValue,
        L::InputObject => DirectiveLocation::InputObject,
        L::InputFieldDefinition => DirectiveLocation::InputFieldDefinition,
    })
}

fn passthrough_scalar(name: &str) -> Arc<ScalarType> {
    Arc::new(ScalarType {
        name: name.to_string(),
        description: None,
        serialize: Arc::new(|v| Ok(v.clone())),
        parse_value: Arc::new(|v| Ok(v.clone())),
        parse_literal: Arc::new(|node, vars| crate::scalar::ast_literal_to_loose_value(node, vars)),
    })
}

struct MergedDocument {
    schema_def: Option<ast::SchemaDefinition>,
    type_defs: Vec<ast::TypeDefinition>,
    directive_defs: Vec<ast::DirectiveDefinition>,
}

/// Folds `extend type`/`extend interface`/... definitions into their base
/// definitions (§3 "Fields added from type extensions will appear in the
/// order they were specified on the type extension").
fn merge_extensions(document: &Document) -> MergedDocument {
    let mut schema_def = None;
    let mut type_defs: IndexMap<String, ast::TypeDefinition> = IndexMap::new();
    let mut directive_defs = Vec::new();

    for def in &document.definitions {
        match def {
            ast::Definition::Schema(s) => schema_def = Some(s.clone()),
            ast::Definition::Type(t) => {
                type_defs.insert(t.name().to_string(), t.clone());
            }
            ast::Definition::Directive(d) => directive_defs.push(d.clone()),
            ast::Definition::TypeExtension(_) | ast::Definition::Executable(_) => {}
        }
    }

    for def in &document.definitions {
        if let ast::Definition::TypeExtension(ext) = def {
            if let Some(base) = type_defs.get_mut(ext.name().as_str()) {
                apply_extension(base, ext);
            }
        }
    }

    MergedDocument { schema_def, type_defs: type_defs.into_values().collect(), directive_defs }
}

fn apply_extension(base: &mut ast::TypeDefinition, ext: &ast::TypeExtension) {
    match (base, ext) {
        (ast::TypeDefinition::Object(b), ast::TypeExtension::Object(e)) => {
            b.interfaces.extend(e.interfaces.iter().cloned());
            b.fields.extend(e.fields.iter().cloned());
            b.directives.extend(e.directives.iter().cloned());
        }
        (ast::TypeDefinition::Interface(b), ast::TypeExtension::Interface(e)) => {
            b.interfaces.extend(e.interfaces.iter().cloned());
            b.fields.extend(e.fields.iter().cloned());
            b.directives.extend(e.directives.iter().cloned());
        }
        (ast::TypeDefinition::Union(b), ast::TypeExtension::Union(e)) => {
            b.types.extend(e.types.iter().cloned());
            b.directives.extend(e.directives.iter().cloned());
        }
        (ast::TypeDefinition::Enum(b), ast::TypeExtension::Enum(e)) => {
            b.values.extend(e.values.iter().cloned());
            b.directives.extend(e.directives.iter().cloned());
        }
        (ast::TypeDefinition::InputObject(b), ast::TypeExtension::InputObject(e)) => {
            b.fields.extend(e.fields.iter().cloned());
            b.directives.extend(e.directives.iter().cloned());
        }
        (ast::TypeDefinition::Scalar(b), ast::TypeExtension::Scalar(e)) => {
            b.directives.extend(e.directives.iter().cloned());
        }
        _ => {}
    }
}
