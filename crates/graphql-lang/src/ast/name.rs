use super::node::{Location, Node, NodeKind};

/// A GraphQL name: an identifier for a type, field, argument, directive,
/// enum value, variable, or fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Name {
    pub value: String,
    pub loc: Option<Location>,
}

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Name { value: value.into(), loc: None }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl Node for Name {
    fn kind(&self) -> NodeKind {
        NodeKind::Name
    }

    fn loc(&self) -> Option<Location> {
        self.loc
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}
