use crate::directive::DirectiveAnnotation;
use crate::input::InputValue;
use crate::interface::InterfaceType;
use crate::lazy::Thunk;
use crate::resolver::{FieldResolver, IsTypeOfResolver, SubscribeResolver};
use crate::type_ref::Type;
use indexmap::IndexMap;
use std::sync::Arc;

/// `GraphQLField` (§3): a return type, an ordered argument mapping, an
/// optional resolver, an optional subscribe-resolver (only meaningful on a
/// subscription root field, §4.8), and deprecation state.
#[derive(Clone)]
pub struct Field {
    pub name: String,
    pub description: Option<String>,
    pub field_type: Type,
    pub args: IndexMap<String, InputValue>,
    pub resolve: Option<FieldResolver>,
    pub subscribe: Option<SubscribeResolver>,
    pub deprecation_reason: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("field_type", &self.field_type.display_name())
            .field("args", &self.args)
            .finish()
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.field_type == other.field_type && self.args == other.args
    }
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: Type) -> Self {
        Field {
            name: name.into(),
            description: None,
            field_type,
            args: IndexMap::new(),
            resolve: None,
            subscribe: None,
            deprecation_reason: None,
            directives: Vec::new(),
        }
    }
}

/// `GraphQLObjectType` (§3): lazily evaluated `interfaces`/`fields` thunks
/// so mutually recursive object/interface graphs can be declared without a
/// forward-declaration pass (§9 "Lazy schema thunks").
pub struct ObjectType {
    pub name: String,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub(crate) interfaces: Thunk<Vec<Arc<InterfaceType>>>,
    pub(crate) fields: Thunk<IndexMap<String, Field>>,
    pub is_type_of: Option<IsTypeOfResolver>,
}

impl std::fmt::Debug for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectType").field("name", &self.name).finish()
    }
}

impl PartialEq for ObjectType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
impl Eq for ObjectType {}

impl ObjectType {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        directives: Vec<DirectiveAnnotation>,
        interfaces: Thunk<Vec<Arc<InterfaceType>>>,
        fields: Thunk<IndexMap<String, Field>>,
    ) -> Self {
        ObjectType { name: name.into(), description, directives, interfaces, fields, is_type_of: None }
    }

    pub fn with_is_type_of(mut self, is_type_of: IsTypeOfResolver) -> Self {
        self.is_type_of = Some(is_type_of);
        self
    }

    pub fn interfaces(&self) -> &Vec<Arc<InterfaceType>> {
        self.interfaces.get()
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.fields.get()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields().get(name)
    }
}
