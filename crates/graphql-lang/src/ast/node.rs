/// Byte-offset span of an AST node within its source body, `{start, end}`
/// back into the token stream (§3 "AST nodes").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location {
    pub start: usize,
    pub end: usize,
}

/// The kind discriminator every AST node carries (§3), mirroring the
/// `kind: "Field"`-style tag of the reference implementation. Useful for
/// keyed [`Visitor`](crate::visitor::Visitor) dispatch and for error
/// messages that want to name a node's kind generically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum NodeKind {
    Name,
    Document,
    OperationDefinition,
    VariableDefinition,
    Variable,
    SelectionSet,
    Field,
    Argument,
    FragmentSpread,
    InlineFragment,
    FragmentDefinition,
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,
    Directive,
    NamedType,
    ListType,
    NonNullType,
    SchemaDefinition,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    FieldDefinition,
    InputValueDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    EnumValueDefinition,
    InputObjectTypeDefinition,
    ScalarTypeExtension,
    ObjectTypeExtension,
    InterfaceTypeExtension,
    UnionTypeExtension,
    EnumTypeExtension,
    InputObjectTypeExtension,
    DirectiveDefinition,
}

/// Implemented by every closed-family AST node. Gives generic utilities
/// (printer, visitor, error formatters) a uniform way to ask "what are you"
/// and "where did you come from" without a match over every concrete type.
pub trait Node {
    fn kind(&self) -> NodeKind;
    fn loc(&self) -> Option<Location>;
}
