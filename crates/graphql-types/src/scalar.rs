//! `GraphQLScalarType` (§3) and the five built-in scalars (`Int`, `Float`,
//! `String`, `Boolean`, `ID`). Custom scalars plug in their own
//! `serialize`/`parse_value`/`parse_literal` closures (§6 "Scalar contract").

use crate::value::Value;
use graphql_lang::ast::Value as AstValue;
use indexmap::IndexMap;
use std::sync::Arc;

pub type SerializeFn = Arc<dyn Fn(&Value) -> Result<Value, String> + Send + Sync>;
pub type ParseValueFn = Arc<dyn Fn(&Value) -> Result<Value, String> + Send + Sync>;
pub type ParseLiteralFn = Arc<dyn Fn(&AstValue, Option<&IndexMap<String, Value>>) -> Result<Value, String> + Send + Sync>;

#[derive(Clone)]
pub struct ScalarType {
    pub name: String,
    pub description: Option<String>,
    pub serialize: SerializeFn,
    pub parse_value: ParseValueFn,
    pub parse_literal: ParseLiteralFn,
}

impl std::fmt::Debug for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarType").field("name", &self.name).finish()
    }
}

impl PartialEq for ScalarType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
impl Eq for ScalarType {}

/// Default literal parser: delegates to `parse_value` after converting the
/// handful of literal kinds that have an obvious scalar reading, resolving
/// `$variable` references against `variables` (§4.6 "AST or external JSON
/// → internal").
fn literal_via_parse_value(
    node: &AstValue,
    variables: Option<&IndexMap<String, Value>>,
    parse_value: &ParseValueFn,
) -> Result<Value, String> {
    let as_value = ast_literal_to_loose_value(node, variables)?;
    parse_value(&as_value)
}

/// Converts a literal AST node to a [`Value`] with no target-type
/// knowledge yet (ints stay `Int`, floats stay `Float`, etc.); scalar
/// `parse_value` implementations then apply their own coercion rules.
pub fn ast_literal_to_loose_value(node: &AstValue, variables: Option<&IndexMap<String, Value>>) -> Result<Value, String> {
    match node {
        AstValue::Variable(v) => variables
            .and_then(|vars| vars.get(v.name.as_str()))
            .cloned()
            .ok_or_else(|| format!("Variable \"${}\" referenced in literal position is not defined.", v.name)),
        AstValue::Int(i) => i.as_i64().map(Value::Int).ok_or_else(|| format!("Int cannot represent non-integer value: {}", i.value)),
        AstValue::Float(fl) => fl.as_f64().map(Value::Float).ok_or_else(|| format!("Float cannot represent non numeric value: {}", fl.value)),
        AstValue::String(s) => Ok(Value::String(s.value.clone())),
        AstValue::Boolean(b) => Ok(Value::Boolean(b.value)),
        AstValue::Null(_) => Ok(Value::Null),
        AstValue::Enum(e) => Ok(Value::Enum(e.value.clone())),
        AstValue::List(l) => {
            let items = l.values.iter().map(|v| ast_literal_to_loose_value(v, variables)).collect::<Result<Vec<_>, _>>()?;
            Ok(Value::List(items))
        }
        AstValue::Object(o) => {
            let mut map = indexmap::IndexMap::new();
            for field in &o.fields {
                map.insert(field.name.as_str().to_string(), ast_literal_to_loose_value(&field.value, variables)?);
            }
            Ok(Value::Object(map))
        }
    }
}

impl ScalarType {
    pub fn int_type() -> Arc<ScalarType> {
        Arc::new(ScalarType {
            name: "Int".to_string(),
            description: Some("The `Int` scalar type represents non-fractional signed whole numeric values.".to_string()),
            serialize: Arc::new(|v| match v {
                Value::Int(i) if (i32::MIN as i64..=i32::MAX as i64).contains(i) => Ok(Value::Int(*i)),
                Value::Boolean(b) => Ok(Value::Int(if *b { 1 } else { 0 })),
                _ => Err(format!("Int cannot represent non-integer value: {v}")),
            }),
            parse_value: Arc::new(|v| match v {
                Value::Int(i) if (i32::MIN as i64..=i32::MAX as i64).contains(i) => Ok(Value::Int(*i)),
                Value::Boolean(b) => Ok(Value::Int(if *b { 1 } else { 0 })),
                _ => Err(format!("Int cannot represent non-integer value: {v}")),
            }),
            parse_literal: Arc::new(|node, vars| match node {
                AstValue::Int(i) => i.as_i32().map(|n| Value::Int(n as i64)).ok_or_else(|| format!("Int cannot represent non 32-bit signed integer value: {}", i.value)),
                AstValue::Variable(_) => literal_via_parse_value(node, vars, &(Arc::new(|v: &Value| match v {
                    Value::Int(i) if (i32::MIN as i64..=i32::MAX as i64).contains(i) => Ok(Value::Int(*i)),
                    _ => Err(format!("Int cannot represent non-integer value: {v}")),
                }) as ParseValueFn)),
                other => Err(format!("Int cannot represent non-integer value: {other:?}")),
            }),
        })
    }

    pub fn float_type() -> Arc<ScalarType> {
        Arc::new(ScalarType {
            name: "Float".to_string(),
            description: Some("The `Float` scalar type represents signed double-precision fractional values.".to_string()),
            serialize: Arc::new(|v| match v {
                Value::Float(f) => Ok(Value::Float(*f)),
                Value::Int(i) => Ok(Value::Float(*i as f64)),
                Value::Boolean(b) => Ok(Value::Float(if *b { 1.0 } else { 0.0 })),
                _ => Err(format!("Float cannot represent non numeric value: {v}")),
            }),
            parse_value: Arc::new(|v| match v {
                Value::Float(f) => Ok(Value::Float(*f)),
                Value::Int(i) => Ok(Value::Float(*i as f64)),
                _ => Err(format!("Float cannot represent non numeric value: {v}")),
            }),
            parse_literal: Arc::new(|node, vars| match node {
                AstValue::Float(fl) => fl.as_f64().map(Value::Float).ok_or_else(|| format!("Float cannot represent non numeric value: {}", fl.value)),
                AstValue::Int(i) => i.as_i64().map(|n| Value::Float(n as f64)).ok_or_else(|| format!("Float cannot represent non numeric value: {}", i.value)),
                AstValue::Variable(_) => literal_via_parse_value(node, vars, &(Arc::new(|v: &Value| match v {
                    Value::Float(f) => Ok(Value::Float(*f)),
                    Value::Int(i) => Ok(Value::Float(*i as f64)),
                    _ => Err(format!("Float cannot represent non numeric value: {v}")),
                }) as ParseValueFn)),
                other => Err(format!("Float cannot represent non numeric value: {other:?}")),
            }),
        })
    }

    pub fn string_type() -> Arc<ScalarType> {
        Arc::new(ScalarType {
            name: "String".to_string(),
            description: Some("The `String` scalar type represents textual data, represented as UTF-8 character sequences.".to_string()),
            serialize: Arc::new(|v| match v {
                Value::String(s) => Ok(Value::String(s.clone())),
                Value::Boolean(b) => Ok(Value::String(b.to_string())),
                Value::Int(i) => Ok(Value::String(i.to_string())),
                Value::Float(f) => Ok(Value::String(f.to_string())),
                _ => Err(format!("String cannot represent value: {v}")),
            }),
            parse_value: Arc::new(|v| match v {
                Value::String(s) => Ok(Value::String(s.clone())),
                _ => Err(format!("String cannot represent a non string value: {v}")),
            }),
            parse_literal: Arc::new(|node, vars| match node {
                AstValue::String(s) => Ok(Value::String(s.value.clone())),
                AstValue::Variable(_) => literal_via_parse_value(node, vars, &(Arc::new(|v: &Value| match v {
                    Value::String(s) => Ok(Value::String(s.clone())),
                    _ => Err(format!("String cannot represent a non string value: {v}")),
                }) as ParseValueFn)),
                other => Err(format!("String cannot represent a non string value: {other:?}")),
            }),
        })
    }

    pub fn boolean_type() -> Arc<ScalarType> {
        Arc::new(ScalarType {
            name: "Boolean".to_string(),
            description: Some("The `Boolean` scalar type represents `true` or `false`.".to_string()),
            serialize: Arc::new(|v| match v {
                Value::Boolean(b) => Ok(Value::Boolean(*b)),
                _ => Err(format!("Boolean cannot represent a non boolean value: {v}")),
            }),
            parse_value: Arc::new(|v| match v {
                Value::Boolean(b) => Ok(Value::Boolean(*b)),
                _ => Err(format!("Boolean cannot represent a non boolean value: {v}")),
            }),
            parse_literal: Arc::new(|node, vars| match node {
                AstValue::Boolean(b) => Ok(Value::Boolean(b.value)),
                AstValue::Variable(_) => literal_via_parse_value(node, vars, &(Arc::new(|v: &Value| match v {
                    Value::Boolean(b) => Ok(Value::Boolean(*b)),
                    _ => Err(format!("Boolean cannot represent a non boolean value: {v}")),
                }) as ParseValueFn)),
                other => Err(format!("Boolean cannot represent a non boolean value: {other:?}")),
            }),
        })
    }

    pub fn id_type() -> Arc<ScalarType> {
        Arc::new(ScalarType {
            name: "ID".to_string(),
            description: Some("The `ID` scalar type represents a unique identifier, serialized as a String.".to_string()),
            serialize: Arc::new(|v| match v {
                Value::String(s) => Ok(Value::String(s.clone())),
                Value::Int(i) => Ok(Value::String(i.to_string())),
                _ => Err(format!("ID cannot represent value: {v}")),
            }),
            parse_value: Arc::new(|v| match v {
                Value::String(s) => Ok(Value::String(s.clone())),
                Value::Int(i) => Ok(Value::String(i.to_string())),
                _ => Err(format!("ID cannot represent value: {v}")),
            }),
            parse_literal: Arc::new(|node, vars| match node {
                AstValue::String(s) => Ok(Value::String(s.value.clone())),
                AstValue::Int(i) => Ok(Value::String(i.value.clone())),
                AstValue::Variable(_) => literal_via_parse_value(node, vars, &(Arc::new(|v: &Value| match v {
                    Value::String(s) => Ok(Value::String(s.clone())),
                    Value::Int(i) => Ok(Value::String(i.to_string())),
                    _ => Err(format!("ID cannot represent value: {v}")),
                }) as ParseValueFn)),
                other => Err(format!("ID cannot represent value: {other:?}")),
            }),
        })
    }

    /// `Int`, `Float`, `String`, `Boolean`, `ID` — always present in
    /// `Schema::type_map` regardless of whether the SDL mentions them.
    pub fn specified() -> Vec<Arc<ScalarType>> {
        vec![Self::int_type(), Self::float_type(), Self::string_type(), Self::boolean_type(), Self::id_type()]
    }
}
