use super::node::{Location, Node, NodeKind};
use super::operation::OperationDefinition;
use super::selection::FragmentDefinition;
use super::type_system::{DirectiveDefinition, SchemaDefinition, TypeDefinition, TypeExtension};

/// An executable definition: an operation or a fragment (§2 glossary).
#[derive(Clone, Debug, PartialEq)]
pub enum ExecutableDefinition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
}

impl Node for ExecutableDefinition {
    fn kind(&self) -> NodeKind {
        match self {
            ExecutableDefinition::Operation(d) => d.kind(),
            ExecutableDefinition::Fragment(d) => d.kind(),
        }
    }
    fn loc(&self) -> Option<Location> {
        match self {
            ExecutableDefinition::Operation(d) => d.loc(),
            ExecutableDefinition::Fragment(d) => d.loc(),
        }
    }
}

/// One top-level definition in a [`Document`]: either an executable
/// definition or a type-system definition/extension (§4.2
/// `parse_definition`).
#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Executable(ExecutableDefinition),
    Schema(SchemaDefinition),
    Type(TypeDefinition),
    TypeExtension(TypeExtension),
    Directive(DirectiveDefinition),
}

impl Node for Definition {
    fn kind(&self) -> NodeKind {
        match self {
            Definition::Executable(d) => d.kind(),
            Definition::Schema(d) => d.kind(),
            Definition::Type(d) => d.kind(),
            Definition::TypeExtension(d) => d.kind(),
            Definition::Directive(d) => d.kind(),
        }
    }
    fn loc(&self) -> Option<Location> {
        match self {
            Definition::Executable(d) => d.loc(),
            Definition::Schema(d) => d.loc(),
            Definition::Type(d) => d.loc(),
            Definition::TypeExtension(d) => d.loc(),
            Definition::Directive(d) => d.loc(),
        }
    }
}

/// The root AST node: a sequence of definitions (§2 glossary "Document").
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub definitions: Vec<Definition>,
    pub loc: Option<Location>,
}

impl Document {
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|d| match d {
            Definition::Executable(ExecutableDefinition::Operation(op)) => Some(op),
            _ => None,
        })
    }

    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|d| match d {
            Definition::Executable(ExecutableDefinition::Fragment(frag)) => Some(frag),
            _ => None,
        })
    }
}

impl Node for Document {
    fn kind(&self) -> NodeKind {
        NodeKind::Document
    }
    fn loc(&self) -> Option<Location> {
        self.loc
    }
}
