use super::node::{Location, Node, NodeKind};
use super::name::Name;
use super::operation::Variable;

/// A GraphQL input value literal as written in source text: the closed
/// family `IntValue | FloatValue | StringValue | BooleanValue | NullValue |
/// EnumValue | ListValue | ObjectValue`, plus variable references (which
/// appear anywhere a value is expected except inside `const` contexts, per
/// §4.2 `parse_value(is_const)`).
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Variable(Variable),
    Int(IntValue),
    Float(FloatValue),
    String(StringValue),
    Boolean(BooleanValue),
    Null(NullValue),
    Enum(EnumValue),
    List(ListValue),
    Object(ObjectValue),
}

impl Node for Value {
    fn kind(&self) -> NodeKind {
        match self {
            Value::Variable(_) => NodeKind::Variable,
            Value::Int(_) => NodeKind::IntValue,
            Value::Float(_) => NodeKind::FloatValue,
            Value::String(_) => NodeKind::StringValue,
            Value::Boolean(_) => NodeKind::BooleanValue,
            Value::Null(_) => NodeKind::NullValue,
            Value::Enum(_) => NodeKind::EnumValue,
            Value::List(_) => NodeKind::ListValue,
            Value::Object(_) => NodeKind::ObjectValue,
        }
    }

    fn loc(&self) -> Option<Location> {
        match self {
            Value::Variable(v) => v.loc,
            Value::Int(v) => v.loc,
            Value::Float(v) => v.loc,
            Value::String(v) => v.loc,
            Value::Boolean(v) => v.loc,
            Value::Null(v) => v.loc,
            Value::Enum(v) => v.loc,
            Value::List(v) => v.loc,
            Value::Object(v) => v.loc,
        }
    }
}

/// Stores the token's raw digits (rather than an already-parsed `i64`/`i32`)
/// so coercion can decide the target integer width and reject
/// out-of-range values itself (§4.6).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntValue {
    pub value: String,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloatValue {
    pub value: String,
    pub loc: Option<Location>,
}

impl FloatValue {
    pub fn as_f64(&self) -> Option<f64> {
        self.value.parse().ok()
    }
}

impl IntValue {
    pub fn as_i64(&self) -> Option<i64> {
        self.value.parse().ok()
    }

    pub fn as_i32(&self) -> Option<i32> {
        self.value.parse().ok()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringValue {
    pub value: String,
    /// Whether this was written as a `"""block string"""` (needed by the
    /// printer to re-emit block-string formatting for multi-line values,
    /// §4.9).
    pub block: bool,
    pub loc: Option<Location>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BooleanValue {
    pub value: bool,
    pub loc: Option<Location>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NullValue {
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumValue {
    pub value: String,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListValue {
    pub values: Vec<Value>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue {
    pub fields: Vec<ObjectField>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField {
    pub name: Name,
    pub value: Value,
    pub loc: Option<Location>,
}

impl Node for ObjectField {
    fn kind(&self) -> NodeKind {
        NodeKind::ObjectField
    }

    fn loc(&self) -> Option<Location> {
        self.loc
    }
}
