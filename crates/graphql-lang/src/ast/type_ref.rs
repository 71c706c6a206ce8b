use super::name::Name;
use super::node::{Location, Node, NodeKind};

/// A type reference as written in source: `Name`, `[Type]`, or `Type!`
/// (§4.2 `parse_type`). `NonNull`'s inner type must not itself be a
/// `NonNull` (invariant enforced structurally here: `NonNullType` wraps a
/// `NullableType`, a `Type` minus the `NonNull` variant).
#[derive(Clone, Debug, PartialEq)]
pub enum Type {
    Named(NamedType),
    List(Box<ListType>),
    NonNull(Box<NonNullType>),
}

impl Node for Type {
    fn kind(&self) -> NodeKind {
        match self {
            Type::Named(_) => NodeKind::NamedType,
            Type::List(_) => NodeKind::ListType,
            Type::NonNull(_) => NodeKind::NonNullType,
        }
    }

    fn loc(&self) -> Option<Location> {
        match self {
            Type::Named(t) => t.loc,
            Type::List(t) => t.loc,
            Type::NonNull(t) => t.loc,
        }
    }
}

impl Type {
    /// The `Name` at the bottom of any nesting of `[...]`/`!`.
    pub fn inner_name(&self) -> &Name {
        match self {
            Type::Named(t) => &t.name,
            Type::List(t) => t.inner.inner_name(),
            Type::NonNull(t) => t.inner.inner_name(),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Type::NonNull(_))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NamedType {
    pub name: Name,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListType {
    pub inner: Type,
    pub loc: Option<Location>,
}

/// The subset of [`Type`] legal as a `NonNullType`'s inner type: anything
/// but another `NonNull`.
#[derive(Clone, Debug, PartialEq)]
pub enum NullableType {
    Named(NamedType),
    List(Box<ListType>),
}

impl NullableType {
    pub fn inner_name(&self) -> &Name {
        match self {
            NullableType::Named(t) => &t.name,
            NullableType::List(t) => t.inner.inner_name(),
        }
    }
}

impl From<NullableType> for Type {
    fn from(value: NullableType) -> Self {
        match value {
            NullableType::Named(t) => Type::Named(t),
            NullableType::List(t) => Type::List(t),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NonNullType {
    pub inner: NullableType,
    pub loc: Option<Location>,
}
