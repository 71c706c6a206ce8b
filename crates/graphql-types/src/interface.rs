use crate::directive::DirectiveAnnotation;
use crate::lazy::Thunk;
use crate::object::Field;
use crate::resolver::TypeResolver;
use indexmap::IndexMap;
use std::sync::Arc;

/// `GraphQLInterfaceType` (§3): a lazily evaluated field map, an optional
/// `resolve_type` for abstract-type dispatch (§4.7), and the interfaces it
/// in turn implements (invariant 5: interface-implements-interface must be
/// acyclic).
pub struct InterfaceType {
    pub name: String,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub(crate) interfaces: Thunk<Vec<Arc<InterfaceType>>>,
    pub(crate) fields: Thunk<IndexMap<String, Field>>,
    pub resolve_type: Option<TypeResolver>,
}

impl std::fmt::Debug for InterfaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterfaceType").field("name", &self.name).finish()
    }
}

impl PartialEq for InterfaceType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
impl Eq for InterfaceType {}

impl InterfaceType {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        directives: Vec<DirectiveAnnotation>,
        interfaces: Thunk<Vec<Arc<InterfaceType>>>,
        fields: Thunk<IndexMap<String, Field>>,
    ) -> Self {
        InterfaceType { name: name.into(), description, directives, interfaces, fields, resolve_type: None }
    }

    pub fn with_resolve_type(mut self, resolve_type: TypeResolver) -> Self {
        self.resolve_type = Some(resolve_type);
        self
    }

    pub fn interfaces(&self) -> &Vec<Arc<InterfaceType>> {
        self.interfaces.get()
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.fields.get()
    }
}
