use super::directive::Directive;
use super::name::Name;
use super::node::{Location, Node, NodeKind};
use super::type_ref::NamedType;
use super::value::Value;

#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
    pub loc: Option<Location>,
}

impl Node for SelectionSet {
    fn kind(&self) -> NodeKind {
        NodeKind::SelectionSet
    }

    fn loc(&self) -> Option<Location> {
        self.loc
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

impl Node for Selection {
    fn kind(&self) -> NodeKind {
        match self {
            Selection::Field(_) => NodeKind::Field,
            Selection::FragmentSpread(_) => NodeKind::FragmentSpread,
            Selection::InlineFragment(_) => NodeKind::InlineFragment,
        }
    }

    fn loc(&self) -> Option<Location> {
        match self {
            Selection::Field(f) => f.loc,
            Selection::FragmentSpread(f) => f.loc,
            Selection::InlineFragment(f) => f.loc,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub alias: Option<Name>,
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    pub selection_set: Option<SelectionSet>,
    pub loc: Option<Location>,
}

impl Field {
    /// The response key: the alias if present, else the field name (§2
    /// glossary "Response key").
    pub fn response_key(&self) -> &str {
        self.alias.as_ref().unwrap_or(&self.name).as_str()
    }
}

impl Node for Field {
    fn kind(&self) -> NodeKind {
        NodeKind::Field
    }

    fn loc(&self) -> Option<Location> {
        self.loc
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub name: Name,
    pub value: Value,
    pub loc: Option<Location>,
}

impl Node for Argument {
    fn kind(&self) -> NodeKind {
        NodeKind::Argument
    }

    fn loc(&self) -> Option<Location> {
        self.loc
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub loc: Option<Location>,
}

impl Node for FragmentSpread {
    fn kind(&self) -> NodeKind {
        NodeKind::FragmentSpread
    }

    fn loc(&self) -> Option<Location> {
        self.loc
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub type_condition: Option<NamedType>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub loc: Option<Location>,
}

impl Node for InlineFragment {
    fn kind(&self) -> NodeKind {
        NodeKind::InlineFragment
    }

    fn loc(&self) -> Option<Location> {
        self.loc
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub name: Name,
    pub type_condition: NamedType,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub loc: Option<Location>,
}

impl Node for FragmentDefinition {
    fn kind(&self) -> NodeKind {
        NodeKind::FragmentDefinition
    }

    fn loc(&self) -> Option<Location> {
        self.loc
    }
}
