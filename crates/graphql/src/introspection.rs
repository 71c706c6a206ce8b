//! The introspection collaborators (§6 "introspection_query text;
//! introspection_from_schema(schema)"). §1 lists "introspection-result-to-
//! schema builder" as out of scope — going *from* a `__schema` response
//! back to a [`Schema`] — but producing that response from a [`Schema`] is
//! still a named §6 interface, and the type-system model already has
//! everything it needs to walk.

use graphql_types::{DirectiveLocation, NamedType, Schema, Type, Value};
use indexmap::IndexMap;

fn directive_location_name(location: DirectiveLocation) -> &'static str {
    match location {
        DirectiveLocation::Query => "QUERY",
        DirectiveLocation::Mutation => "MUTATION",
        DirectiveLocation::Subscription => "SUBSCRIPTION",
        DirectiveLocation::Field => "FIELD",
        DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
        DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
        DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
        DirectiveLocation::VariableDefinition => "VARIABLE_DEFINITION",
        DirectiveLocation::Schema => "SCHEMA",
        DirectiveLocation::Scalar => "SCALAR",
        DirectiveLocation::Object => "OBJECT",
        DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
        DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
        DirectiveLocation::Interface => "INTERFACE",
        DirectiveLocation::Union => "UNION",
        DirectiveLocation::Enum => "ENUM",
        DirectiveLocation::EnumValue => "ENUM_VALUE",
        DirectiveLocation::InputObject => "INPUT_OBJECT",
        DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
    }
}

/// The standard introspection query text every GraphQL client sends to
/// discover a server's schema (the same query `graphql-js`'s
/// `getIntrospectionQuery()` produces, trimmed to the fields this crate's
/// introspection result actually populates).
pub fn introspection_query() -> &'static str {
    r#"
    query IntrospectionQuery {
      __schema {
        queryType { name }
        mutationType { name }
        subscriptionType { name }
        types { ...FullType }
        directives { name description locations args { name description type { ...TypeRef } defaultValue } }
      }
    }
    fragment FullType on __Type {
      kind
      name
      description
      fields(includeDeprecated: true) {
        name
        description
        args { name description type { ...TypeRef } defaultValue }
        type { ...TypeRef }
        isDeprecated
        deprecationReason
      }
      inputFields { name description type { ...TypeRef } defaultValue }
      interfaces { name }
      possibleTypes { name }
      enumValues(includeDeprecated: true) { name description isDeprecated deprecationReason }
    }
    fragment TypeRef on __Type {
      kind
      name
      ofType { kind name ofType { kind name ofType { kind name } } }
    }
    "#
}

fn obj(pairs: Vec<(&str, Value)>) -> Value {
    Value::Object(pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
}

fn opt_str(s: &Option<String>) -> Value {
    s.clone().map(Value::String).unwrap_or(Value::Null)
}

fn type_ref(t: &Type) -> Value {
    match t {
        Type::NonNull(inner) => {
            let inner_type = match inner.as_ref().clone() {
                graphql_types::NullableType::Named(n) => Type::Named(n),
                graphql_types::NullableType::List(l) => Type::List(l),
            };
            obj(vec![("kind", Value::String("NON_NULL".to_string())), ("name", Value::Null), ("ofType", type_ref(&inner_type))])
        }
        Type::List(inner) => obj(vec![("kind", Value::String("LIST".to_string())), ("name", Value::Null), ("ofType", type_ref(inner))]),
        Type::Named(named) => obj(vec![("kind", Value::String(named_kind(named).to_string())), ("name", Value::String(named.name().to_string())), ("ofType", Value::Null)]),
    }
}

fn named_kind(named: &NamedType) -> &'static str {
    match named {
        NamedType::Scalar(_) => "SCALAR",
        NamedType::Object(_) => "OBJECT",
        NamedType::Interface(_) => "INTERFACE",
        NamedType::Union(_) => "UNION",
        NamedType::Enum(_) => "ENUM",
        NamedType::InputObject(_) => "INPUT_OBJECT",
    }
}

fn field_value(name: &str, field: &graphql_types::Field) -> Value {
    obj(vec![
        ("name", Value::String(name.to_string())),
        ("description", opt_str(&field.description)),
        ("args", Value::List(field.args.iter().map(|(n, a)| input_value(n, a)).collect())),
        ("type", type_ref(&field.field_type)),
        ("isDeprecated", Value::Boolean(field.deprecation_reason.is_some())),
        ("deprecationReason", opt_str(&field.deprecation_reason)),
    ])
}

fn input_value(name: &str, value: &graphql_types::InputValue) -> Value {
    obj(vec![
        ("name", Value::String(name.to_string())),
        ("description", opt_str(&value.description)),
        ("type", type_ref(&value.value_type)),
        ("defaultValue", value.default_value.as_ref().map(|v| Value::String(graphql_lang::printer::print_value(v))).unwrap_or(Value::Null)),
    ])
}

fn full_type(named: &NamedType, schema: &Schema) -> Value {
    let (description, fields, interfaces, possible_types, enum_values, input_fields) = match named {
        NamedType::Scalar(s) => (&s.description, None, None, None, None, None),
        NamedType::Object(o) => (
            &o.description,
            Some(o.fields().iter().map(|(n, f)| field_value(n, f)).collect::<Vec<_>>()),
            Some(o.interfaces().iter().map(|i| obj(vec![("name", Value::String(i.name.clone()))])).collect::<Vec<_>>()),
            None,
            None,
            None,
        ),
        NamedType::Interface(i) => (
            &i.description,
            Some(i.fields().iter().map(|(n, f)| field_value(n, f)).collect::<Vec<_>>()),
            Some(i.interfaces().iter().map(|p| obj(vec![("name", Value::String(p.name.clone()))])).collect::<Vec<_>>()),
            Some(schema.possible_types(&i.name).iter().map(|t| obj(vec![("name", Value::String(t.name.clone()))])).collect::<Vec<_>>()),
            None,
            None,
        ),
        NamedType::Union(u) => (
            &u.description,
            None,
            None,
            Some(u.types().iter().map(|t| obj(vec![("name", Value::String(t.name.clone()))])).collect::<Vec<_>>()),
            None,
            None,
        ),
        NamedType::Enum(e) => (
            &e.description,
            None,
            None,
            None,
            Some(
                e.values
                    .values()
                    .map(|v| {
                        obj(vec![
                            ("name", Value::String(v.name.clone())),
                            ("description", opt_str(&v.description)),
                            ("isDeprecated", Value::Boolean(v.deprecation_reason.is_some())),
                            ("deprecationReason", opt_str(&v.deprecation_reason)),
                        ])
                    })
                    .collect::<Vec<_>>(),
            ),
            None,
        ),
        NamedType::InputObject(io) => (&io.description, None, None, None, None, Some(io.fields().iter().map(|(n, f)| input_value(n, f)).collect::<Vec<_>>())),
    };

    obj(vec![
        ("kind", Value::String(named_kind(named).to_string())),
        ("name", Value::String(named.name().to_string())),
        ("description", opt_str(description)),
        ("fields", fields.map(Value::List).unwrap_or(Value::Null)),
        ("inputFields", input_fields.map(Value::List).unwrap_or(Value::Null)),
        ("interfaces", interfaces.map(Value::List).unwrap_or(Value::Null)),
        ("possibleTypes", possible_types.map(Value::List).unwrap_or(Value::Null)),
        ("enumValues", enum_values.map(Value::List).unwrap_or(Value::Null)),
    ])
}

/// Walks `schema`'s reachable type map and built-in directive set,
/// producing the `{__schema: {...}}` introspection result a client would
/// get back from sending [`introspection_query`] (§6).
pub fn introspection_from_schema(schema: &Schema) -> Value {
    let name_ref = |o: &Option<std::sync::Arc<graphql_types::ObjectType>>| {
        o.as_ref().map(|t| obj(vec![("name", Value::String(t.name.clone()))])).unwrap_or(Value::Null)
    };

    let types: Vec<Value> = schema.type_map.values().map(|t| full_type(t, schema)).collect();
    let directives: Vec<Value> = schema
        .directives
        .iter()
        .map(|d| {
            obj(vec![
                ("name", Value::String(d.name.clone())),
                ("description", opt_str(&d.description)),
                ("locations", Value::List(d.locations.iter().map(|l| Value::String(directive_location_name(*l).to_string())).collect())),
                ("args", Value::List(d.args.iter().map(|(n, a)| input_value(n, a)).collect())),
            ])
        })
        .collect();

    let mut schema_fields: IndexMap<String, Value> = IndexMap::new();
    schema_fields.insert("queryType".to_string(), name_ref(&schema.query));
    schema_fields.insert("mutationType".to_string(), name_ref(&schema.mutation));
    schema_fields.insert("subscriptionType".to_string(), name_ref(&schema.subscription));
    schema_fields.insert("types".to_string(), Value::List(types));
    schema_fields.insert("directives".to_string(), Value::List(directives));

    obj(vec![("__schema", Value::Object(schema_fields))])
}
