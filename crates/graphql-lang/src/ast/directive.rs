use super::name::Name;
use super::node::{Location, Node, NodeKind};
use super::selection::Argument;

/// A `@directive(arg: value, ...)` annotation applied at a use site (a
/// field, fragment spread, inline fragment, operation, variable
/// definition, or type-system definition). Distinct from
/// `DirectiveDefinition`, which declares what a directive *is*.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub loc: Option<Location>,
}

impl Directive {
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|a| a.name.as_str() == name)
    }
}

impl Node for Directive {
    fn kind(&self) -> NodeKind {
        NodeKind::Directive
    }

    fn loc(&self) -> Option<Location> {
        self.loc
    }
}
