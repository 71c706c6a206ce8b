//! Directives: the schema-level `GraphQLDirective` definition (§3) and the
//! AST-level `DirectiveAnnotation` (a `@directive(args...)` application
//! attached to a schema element or to a query-document node).

use crate::input::InputValue;
use graphql_lang::ast::Location;
use indexmap::IndexMap;
use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    pub fn is_executable(self) -> bool {
        matches!(
            self,
            DirectiveLocation::Query
                | DirectiveLocation::Mutation
                | DirectiveLocation::Subscription
                | DirectiveLocation::Field
                | DirectiveLocation::FragmentDefinition
                | DirectiveLocation::FragmentSpread
                | DirectiveLocation::InlineFragment
                | DirectiveLocation::VariableDefinition
        )
    }
}

/// A directive definition, e.g. the built-in `@skip(if: Boolean!) on FIELD |
/// FRAGMENT_SPREAD | INLINE_FRAGMENT` (§6 "Directive defaults").
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveType {
    pub name: String,
    pub description: Option<String>,
    pub locations: HashSet<DirectiveLocation>,
    pub args: IndexMap<String, InputValue>,
    pub repeatable: bool,
}

impl DirectiveType {
    pub fn skip() -> Self {
        let mut args = IndexMap::new();
        args.insert(
            "if".to_string(),
            InputValue {
                value_type: crate::type_ref::Type::non_null(crate::type_ref::Type::boolean()),
                default_value: None,
                description: Some("Skipped when true.".to_string()),
            },
        );
        DirectiveType {
            name: "skip".to_string(),
            description: Some("Directs the executor to skip this field or fragment when the `if` argument is true.".to_string()),
            locations: [DirectiveLocation::Field, DirectiveLocation::FragmentSpread, DirectiveLocation::InlineFragment]
                .into_iter()
                .collect(),
            args,
            repeatable: false,
        }
    }

    pub fn include() -> Self {
        let mut args = IndexMap::new();
        args.insert(
            "if".to_string(),
            InputValue {
                value_type: crate::type_ref::Type::non_null(crate::type_ref::Type::boolean()),
                default_value: None,
                description: Some("Included when true.".to_string()),
            },
        );
        DirectiveType {
            name: "include".to_string(),
            description: Some("Directs the executor to include this field or fragment only when the `if` argument is true.".to_string()),
            locations: [DirectiveLocation::Field, DirectiveLocation::FragmentSpread, DirectiveLocation::InlineFragment]
                .into_iter()
                .collect(),
            args,
            repeatable: false,
        }
    }

    pub fn deprecated() -> Self {
        let mut args = IndexMap::new();
        args.insert(
            "reason".to_string(),
            InputValue {
                value_type: crate::type_ref::Type::string(),
                default_value: Some(graphql_lang::ast::Value::String(graphql_lang::ast::StringValue {
                    value: "No longer supported".to_string(),
                    block: false,
                    loc: None,
                })),
                description: Some("Explains why this element was deprecated.".to_string()),
            },
        );
        DirectiveType {
            name: "deprecated".to_string(),
            description: Some("Marks an element of a GraphQL schema as no longer supported.".to_string()),
            locations: [DirectiveLocation::FieldDefinition, DirectiveLocation::EnumValue].into_iter().collect(),
            args,
            repeatable: false,
        }
    }

    /// `@skip`, `@include`, `@deprecated` — the specified directives every
    /// schema carries whether or not the SDL mentions them (§6).
    pub fn specified() -> Vec<DirectiveType> {
        vec![DirectiveType::skip(), DirectiveType::include(), DirectiveType::deprecated()]
    }
}

/// A `@directive(arg: value, ...)` application as written on a schema
/// element or query-document node. Argument values are kept as AST literals
/// (coerced lazily by callers that need them, e.g. `graphql-exec`'s
/// `@skip`/`@include` handling) to avoid this crate depending on
/// `graphql-value`'s coercion pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub name: String,
    pub arguments: IndexMap<String, graphql_lang::ast::Value>,
    pub loc: Option<Location>,
}
