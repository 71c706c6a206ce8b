//! `GraphQLArgument`/`InputField` (§3): both are "a type, an optional
//! default value, and a description" so they share one struct, the way the
//! teacher collapses field-like shapes into one data type per family.

use crate::type_ref::Type;
use graphql_lang::ast::Value as AstValue;

#[derive(Clone, Debug, PartialEq)]
pub struct InputValue {
    pub value_type: Type,
    pub default_value: Option<AstValue>,
    pub description: Option<String>,
}
