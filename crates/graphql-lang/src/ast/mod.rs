//! The closed family of AST node kinds (§3). One module per family of
//! related nodes, following the teacher's "one file per node concept"
//! layout at workspace-budget granularity.

mod directive;
mod document;
mod name;
mod node;
mod operation;
mod selection;
mod type_ref;
mod type_system;
mod value;

pub use directive::Directive;
pub use document::{Definition, Document, ExecutableDefinition};
pub use name::Name;
pub use node::{Location, Node, NodeKind};
pub use operation::{OperationDefinition, OperationType, Variable, VariableDefinition};
pub use selection::{Argument, Field, FragmentDefinition, FragmentSpread, InlineFragment, Selection, SelectionSet};
pub use type_ref::{ListType, NamedType, NonNullType, NullableType, Type};
pub use type_system::{
    DirectiveDefinition, DirectiveLocation, EnumTypeDefinition, EnumTypeExtension, EnumValueDefinition,
    FieldDefinition, InputObjectTypeDefinition, InputObjectTypeExtension, InputValueDefinition,
    InterfaceTypeDefinition, InterfaceTypeExtension, ObjectTypeDefinition, ObjectTypeExtension,
    ScalarTypeDefinition, ScalarTypeExtension, SchemaDefinition, TypeDefinition, TypeExtension,
    UnionTypeDefinition, UnionTypeExtension,
};
pub use value::{BooleanValue, EnumValue, FloatValue, IntValue, ListValue, NullValue, ObjectField, ObjectValue, StringValue, Value};
