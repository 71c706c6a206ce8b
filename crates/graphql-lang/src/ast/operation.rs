use super::directive::Directive;
use super::name::Name;
use super::node::{Location, Node, NodeKind};
use super::selection::SelectionSet;
use super::type_ref::Type;
use super::value::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    pub fn as_str(self) -> &'static str {
        match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Subscription => "subscription",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub operation: OperationType,
    pub name: Option<Name>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub loc: Option<Location>,
}

impl Node for OperationDefinition {
    fn kind(&self) -> NodeKind {
        NodeKind::OperationDefinition
    }

    fn loc(&self) -> Option<Location> {
        self.loc
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub variable: Variable,
    pub var_type: Type,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
    pub loc: Option<Location>,
}

impl Node for VariableDefinition {
    fn kind(&self) -> NodeKind {
        NodeKind::VariableDefinition
    }

    fn loc(&self) -> Option<Location> {
        self.loc
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub name: Name,
    pub loc: Option<Location>,
}

impl Node for Variable {
    fn kind(&self) -> NodeKind {
        NodeKind::Variable
    }

    fn loc(&self) -> Option<Location> {
        self.loc
    }
}
