use super::directive::Directive;
use super::name::Name;
use super::node::{Location, Node, NodeKind};
use super::operation::OperationType;
use super::type_ref::{NamedType, Type};
use super::value::{StringValue, Value};

#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition {
    pub description: Option<StringValue>,
    pub directives: Vec<Directive>,
    pub operation_types: Vec<(OperationType, NamedType)>,
    pub loc: Option<Location>,
}

impl Node for SchemaDefinition {
    fn kind(&self) -> NodeKind {
        NodeKind::SchemaDefinition
    }
    fn loc(&self) -> Option<Location> {
        self.loc
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub value_type: Type,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
    pub loc: Option<Location>,
}

impl Node for InputValueDefinition {
    fn kind(&self) -> NodeKind {
        NodeKind::InputValueDefinition
    }
    fn loc(&self) -> Option<Location> {
        self.loc
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub arguments: Vec<InputValueDefinition>,
    pub field_type: Type,
    pub directives: Vec<Directive>,
    pub loc: Option<Location>,
}

impl Node for FieldDefinition {
    fn kind(&self) -> NodeKind {
        NodeKind::FieldDefinition
    }
    fn loc(&self) -> Option<Location> {
        self.loc
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub directives: Vec<Directive>,
    pub loc: Option<Location>,
}

impl Node for EnumValueDefinition {
    fn kind(&self) -> NodeKind {
        NodeKind::EnumValueDefinition
    }
    fn loc(&self) -> Option<Location> {
        self.loc
    }
}

macro_rules! named_type_def {
    ($name:ident, $kind:expr, { $($field:ident : $ty:ty),* $(,)? }) => {
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name {
            pub description: Option<StringValue>,
            pub name: Name,
            pub directives: Vec<Directive>,
            $(pub $field: $ty,)*
            pub loc: Option<Location>,
        }

        impl Node for $name {
            fn kind(&self) -> NodeKind { $kind }
            fn loc(&self) -> Option<Location> { self.loc }
        }
    };
}

named_type_def!(ScalarTypeDefinition, NodeKind::ScalarTypeDefinition, {});
named_type_def!(ObjectTypeDefinition, NodeKind::ObjectTypeDefinition, {
    interfaces: Vec<NamedType>,
    fields: Vec<FieldDefinition>,
});
named_type_def!(InterfaceTypeDefinition, NodeKind::InterfaceTypeDefinition, {
    interfaces: Vec<NamedType>,
    fields: Vec<FieldDefinition>,
});
named_type_def!(UnionTypeDefinition, NodeKind::UnionTypeDefinition, {
    types: Vec<NamedType>,
});
named_type_def!(EnumTypeDefinition, NodeKind::EnumTypeDefinition, {
    values: Vec<EnumValueDefinition>,
});
named_type_def!(InputObjectTypeDefinition, NodeKind::InputObjectTypeDefinition, {
    fields: Vec<InputValueDefinition>,
});

#[derive(Clone, Debug, PartialEq)]
pub enum TypeDefinition {
    Scalar(ScalarTypeDefinition),
    Object(ObjectTypeDefinition),
    Interface(InterfaceTypeDefinition),
    Union(UnionTypeDefinition),
    Enum(EnumTypeDefinition),
    InputObject(InputObjectTypeDefinition),
}

impl TypeDefinition {
    pub fn name(&self) -> &Name {
        match self {
            TypeDefinition::Scalar(d) => &d.name,
            TypeDefinition::Object(d) => &d.name,
            TypeDefinition::Interface(d) => &d.name,
            TypeDefinition::Union(d) => &d.name,
            TypeDefinition::Enum(d) => &d.name,
            TypeDefinition::InputObject(d) => &d.name,
        }
    }
}

impl Node for TypeDefinition {
    fn kind(&self) -> NodeKind {
        match self {
            TypeDefinition::Scalar(d) => d.kind(),
            TypeDefinition::Object(d) => d.kind(),
            TypeDefinition::Interface(d) => d.kind(),
            TypeDefinition::Union(d) => d.kind(),
            TypeDefinition::Enum(d) => d.kind(),
            TypeDefinition::InputObject(d) => d.kind(),
        }
    }
    fn loc(&self) -> Option<Location> {
        match self {
            TypeDefinition::Scalar(d) => d.loc(),
            TypeDefinition::Object(d) => d.loc(),
            TypeDefinition::Interface(d) => d.loc(),
            TypeDefinition::Union(d) => d.loc(),
            TypeDefinition::Enum(d) => d.loc(),
            TypeDefinition::InputObject(d) => d.loc(),
        }
    }
}

macro_rules! type_extension {
    ($name:ident, $kind:expr, { $($field:ident : $ty:ty),* $(,)? }) => {
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name {
            pub name: Name,
            pub directives: Vec<Directive>,
            $(pub $field: $ty,)*
            pub loc: Option<Location>,
        }

        impl Node for $name {
            fn kind(&self) -> NodeKind { $kind }
            fn loc(&self) -> Option<Location> { self.loc }
        }
    };
}

type_extension!(ScalarTypeExtension, NodeKind::ScalarTypeExtension, {});
type_extension!(ObjectTypeExtension, NodeKind::ObjectTypeExtension, {
    interfaces: Vec<NamedType>,
    fields: Vec<FieldDefinition>,
});
type_extension!(InterfaceTypeExtension, NodeKind::InterfaceTypeExtension, {
    interfaces: Vec<NamedType>,
    fields: Vec<FieldDefinition>,
});
type_extension!(UnionTypeExtension, NodeKind::UnionTypeExtension, {
    types: Vec<NamedType>,
});
type_extension!(EnumTypeExtension, NodeKind::EnumTypeExtension, {
    values: Vec<EnumValueDefinition>,
});
type_extension!(InputObjectTypeExtension, NodeKind::InputObjectTypeExtension, {
    fields: Vec<InputValueDefinition>,
});

#[derive(Clone, Debug, PartialEq)]
pub enum TypeExtension {
    Scalar(ScalarTypeExtension),
    Object(ObjectTypeExtension),
    Interface(InterfaceTypeExtension),
    Union(UnionTypeExtension),
    Enum(EnumTypeExtension),
    InputObject(InputObjectTypeExtension),
}

impl TypeExtension {
    pub fn name(&self) -> &Name {
        match self {
            TypeExtension::Scalar(d) => &d.name,
            TypeExtension::Object(d) => &d.name,
            TypeExtension::Interface(d) => &d.name,
            TypeExtension::Union(d) => &d.name,
            TypeExtension::Enum(d) => &d.name,
            TypeExtension::InputObject(d) => &d.name,
        }
    }
}

impl Node for TypeExtension {
    fn kind(&self) -> NodeKind {
        match self {
            TypeExtension::Scalar(d) => d.kind(),
            TypeExtension::Object(d) => d.kind(),
            TypeExtension::Interface(d) => d.kind(),
            TypeExtension::Union(d) => d.kind(),
            TypeExtension::Enum(d) => d.kind(),
            TypeExtension::InputObject(d) => d.kind(),
        }
    }
    fn loc(&self) -> Option<Location> {
        match self {
            TypeExtension::Scalar(d) => d.loc(),
            TypeExtension::Object(d) => d.loc(),
            TypeExtension::Interface(d) => d.loc(),
            TypeExtension::Union(d) => d.loc(),
            TypeExtension::Enum(d) => d.loc(),
            TypeExtension::InputObject(d) => d.loc(),
        }
    }
}

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
    pub fn from_name(name: &str) -> Option<Self> {
        use DirectiveLocation::*;
        Some(match name {
            "QUERY" => Query,
            "MUTATION" => Mutation,
            "SUBSCRIPTION" => Subscription,
            "FIELD" => Field,
            "FRAGMENT_DEFINITION" => FragmentDefinition,
            "FRAGMENT_SPREAD" => FragmentSpread,
            "INLINE_FRAGMENT" => InlineFragment,
            "VARIABLE_DEFINITION" => VariableDefinition,
            "SCHEMA" => Schema,
            "SCALAR" => Scalar,
            "OBJECT" => Object,
            "FIELD_DEFINITION" => FieldDefinition,
            "ARGUMENT_DEFINITION" => ArgumentDefinition,
            "INTERFACE" => Interface,
            "UNION" => Union,
            "ENUM" => Enum,
            "ENUM_VALUE" => EnumValue,
            "INPUT_OBJECT" => InputObject,
            "INPUT_FIELD_DEFINITION" => InputFieldDefinition,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        use DirectiveLocation::*;
        match self {
            Query => "QUERY",
            Mutation => "MUTATION",
            Subscription => "SUBSCRIPTION",
            Field => "FIELD",
            FragmentDefinition => "FRAGMENT_DEFINITION",
            FragmentSpread => "FRAGMENT_SPREAD",
            InlineFragment => "INLINE_FRAGMENT",
            VariableDefinition => "VARIABLE_DEFINITION",
            Schema => "SCHEMA",
            Scalar => "SCALAR",
            Object => "OBJECT",
            FieldDefinition => "FIELD_DEFINITION",
            ArgumentDefinition => "ARGUMENT_DEFINITION",
            Interface => "INTERFACE",
            Union => "UNION",
            Enum => "ENUM",
            EnumValue => "ENUM_VALUE",
            InputObject => "INPUT_OBJECT",
            InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub description: Option<StringValue>,
    pub name: Name,
    pub arguments: Vec<InputValueDefinition>,
    pub repeatable: bool,
    pub locations: Vec<DirectiveLocation>,
    pub loc: Option<Location>,
}

impl Node for DirectiveDefinition {
    fn kind(&self) -> NodeKind {
        NodeKind::DirectiveDefinition
    }
    fn loc(&self) -> Option<Location> {
        self.loc
    }
}
