//! In-memory GraphQL type system (§3), schema validation (§4.4), and the
//! `build_schema`/`build_ast_schema` SDL collaborators (§6).
//!
//! This crate owns the closed set of named type kinds (`Scalar`, `Object`,
//! `Interface`, `Union`, `Enum`, `InputObject`), their `List`/`NonNull`
//! wrappers, directives, the `Schema` container, and the resolver/value
//! types those definitions are typed against. `graphql-value` builds on
//! top of this crate's `Type`/`Value` to implement input coercion and
//! output serialization (§4.6); `graphql-exec` builds on both to implement
//! execution (§4.7).

pub mod directive;
pub mod enum_type;
pub mod error;
pub mod input;
pub mod input_object;
pub mod interface;
pub mod lazy;
pub mod name;
pub mod object;
pub mod path;
pub mod readonly;
pub mod resolver;
pub mod scalar;
pub mod schema;
pub mod sdl;
pub mod type_ref;
pub mod union;
pub mod validate;
pub mod value;

#[cfg(test)]
mod tests;

pub use directive::{DirectiveAnnotation, DirectiveLocation, DirectiveType};
pub use enum_type::{EnumType, EnumValue};
pub use error::SchemaError;
pub use input::InputValue;
pub use input_object::InputObjectType;
pub use interface::InterfaceType;
pub use lazy::Thunk;
pub use object::{Field, ObjectType};
pub use path::{Path, PathSegment};
pub use resolver::{AnyValue, BoxFuture, BoxStream, FieldResolver, IsTypeOfResolver, ResolveInfo, ResolverError, SourceStream, SubscribeResolver, TypeResolver};
pub use scalar::ScalarType;
pub use schema::{Schema, SchemaBuilder};
pub use sdl::{build_ast_schema, build_schema};
pub use type_ref::{NamedType, NullableType, Type};
pub use union::UnionType;
pub use value::Value;
