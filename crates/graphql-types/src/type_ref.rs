//! Type references within the type system (§3 "Wrappers: `List(T)`,
//! `NonNull(T)` where `T` must not itself be `NonNull`"), mirroring
//! `graphql-lang::ast::type_ref`'s shape at the schema-type level instead of
//! the syntax level.

use crate::enum_type::EnumType;
use crate::input_object::InputObjectType;
use crate::interface::InterfaceType;
use crate::object::ObjectType;
use crate::scalar::ScalarType;
use crate::union::UnionType;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub enum NamedType {
    Scalar(Arc<ScalarType>),
    Object(Arc<ObjectType>),
    Interface(Arc<InterfaceType>),
    Union(Arc<UnionType>),
    Enum(Arc<EnumType>),
    InputObject(Arc<InputObjectType>),
}

impl NamedType {
    pub fn name(&self) -> &str {
        match self {
            NamedType::Scalar(t) => &t.name,
            NamedType::Object(t) => &t.name,
            NamedType::Interface(t) => &t.name,
            NamedType::Union(t) => &t.name,
            NamedType::Enum(t) => &t.name,
            NamedType::InputObject(t) => &t.name,
        }
    }

    pub fn is_input_type(&self) -> bool {
        matches!(self, NamedType::Scalar(_) | NamedType::Enum(_) | NamedType::InputObject(_))
    }

    pub fn is_output_type(&self) -> bool {
        matches!(
            self,
            NamedType::Scalar(_) | NamedType::Object(_) | NamedType::Interface(_) | NamedType::Union(_) | NamedType::Enum(_)
        )
    }

    pub fn is_leaf_type(&self) -> bool {
        matches!(self, NamedType::Scalar(_) | NamedType::Enum(_))
    }

    pub fn is_composite_type(&self) -> bool {
        matches!(self, NamedType::Object(_) | NamedType::Interface(_) | NamedType::Union(_))
    }

    pub fn is_abstract_type(&self) -> bool {
        matches!(self, NamedType::Interface(_) | NamedType::Union(_))
    }
}

impl PartialEq for NamedType {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}
impl Eq for NamedType {}

/// The subset of [`Type`] legal inside a `NonNull`: anything but another
/// `NonNull`.
#[derive(Clone, Debug, PartialEq)]
pub enum NullableType {
    Named(NamedType),
    List(Box<Type>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Type {
    Named(NamedType),
    List(Box<Type>),
    NonNull(Box<NullableType>),
}

impl Type {
    pub fn non_null(inner: Type) -> Type {
        let nullable = match inner {
            Type::Named(n) => NullableType::Named(n),
            Type::List(l) => NullableType::List(l),
            Type::NonNull(_) => panic!("cannot wrap NonNull in NonNull (§3 invariant)"),
        };
        Type::NonNull(Box::new(nullable))
    }

    pub fn list(inner: Type) -> Type {
        Type::List(Box::new(inner))
    }

    pub fn named(named: NamedType) -> Type {
        Type::Named(named)
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Type::NonNull(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Type::List(_)) || matches!(self, Type::NonNull(inner) if matches!(**inner, NullableType::List(_)))
    }

    /// The type with one layer of `NonNull` stripped, if present.
    pub fn nullable(&self) -> Type {
        match self {
            Type::NonNull(inner) => match inner.as_ref().clone() {
                NullableType::Named(n) => Type::Named(n),
                NullableType::List(l) => Type::List(l),
            },
            other => other.clone(),
        }
    }

    /// The type with one layer of `List`/`NonNull` stripped, for recursing
    /// into a list's element type or a non-null's inner type.
    pub fn inner(&self) -> Option<&Type> {
        match self {
            Type::List(inner) => Some(inner),
            Type::NonNull(_) => None,
            Type::Named(_) => None,
        }
    }

    pub fn named_type(&self) -> &NamedType {
        match self {
            Type::Named(n) => n,
            Type::List(l) => l.named_type(),
            Type::NonNull(n) => match n.as_ref() {
                NullableType::Named(n) => n,
                NullableType::List(l) => l.named_type(),
            },
        }
    }

    pub fn is_input_type(&self) -> bool {
        self.named_type().is_input_type()
    }

    pub fn is_output_type(&self) -> bool {
        self.named_type().is_output_type()
    }

    pub fn display_name(&self) -> String {
        match self {
            Type::Named(n) => n.name().to_string(),
            Type::List(inner) => format!("[{}]", inner.display_name()),
            Type::NonNull(inner) => match inner.as_ref() {
                NullableType::Named(n) => format!("{}!", n.name()),
                NullableType::List(l) => format!("{}!", Type::List(l.clone()).display_name()),
            },
        }
    }

    /// Covariance check used by interface-satisfaction (§3 invariant 4):
    /// `self` is an allowed return type wherever `required` is declared.
    pub fn is_sub_type_of(&self, required: &Type, schema: &crate::schema::Schema) -> bool {
        if self == required {
            return true;
        }
        if let Type::NonNull(self_inner) = self {
            let self_as_type: Type = (**self_inner).clone().into();
            if let Type::NonNull(req_inner) = required {
                let req_as_type: Type = (**req_inner).clone().into();
                return self_as_type.is_sub_type_of(&req_as_type, schema);
            }
            return self_as_type.is_sub_type_of(required, schema);
        }
        match (self, required) {
            (Type::List(self_item), Type::List(req_item)) => self_item.is_sub_type_of(req_item, schema),
            (Type::Named(NamedType::Object(obj)), Type::Named(NamedType::Interface(iface))) => {
                obj.interfaces().iter().any(|i| i.name == iface.name)
            }
            (Type::Named(NamedType::Object(obj)), Type::Named(NamedType::Union(u))) => {
                u.possible_type_names().iter().any(|n| n == &obj.name)
            }
            _ => false,
        }
    }
}

impl From<NullableType> for Type {
    fn from(value: NullableType) -> Self {
        match value {
            NullableType::Named(n) => Type::Named(n),
            NullableType::List(l) => Type::List(l),
        }
    }
}

macro_rules! builtin_scalar_ctor {
    ($fn_name:ident, $const_name:ident) => {
        pub fn $fn_name() -> Type {
            Type::Named(NamedType::Scalar(crate::scalar::ScalarType::$const_name()))
        }
    };
}

impl Type {
    builtin_scalar_ctor!(int, int_type);
    builtin_scalar_ctor!(float, float_type);
    builtin_scalar_ctor!(string, string_type);
    builtin_scalar_ctor!(boolean, boolean_type);
    builtin_scalar_ctor!(id, id_type);
}
