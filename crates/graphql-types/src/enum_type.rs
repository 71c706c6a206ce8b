use crate::directive::DirectiveAnnotation;
use indexmap::IndexMap;

/// One member of a `GraphQLEnumType` (§3 `values: ordered mapping
/// name→{internal_value, deprecation?}`).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub name: String,
    pub description: Option<String>,
    pub internal_value: crate::value::Value,
    pub deprecation_reason: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub name: String,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub values: IndexMap<String, EnumValue>,
}

impl EnumType {
    pub fn new(name: impl Into<String>, values: IndexMap<String, EnumValue>) -> Self {
        EnumType { name: name.into(), description: None, directives: Vec::new(), values }
    }

    /// Name → internal value (used by input coercion).
    pub fn value_by_name(&self, name: &str) -> Option<&EnumValue> {
        self.values.get(name)
    }

    /// Internal value → name (used by output serialization).
    pub fn name_for_value(&self, value: &crate::value::Value) -> Option<&str> {
        self.values.values().find(|v| &v.internal_value == value).map(|v| v.name.as_str())
    }
}
