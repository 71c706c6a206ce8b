use crate::directive::DirectiveAnnotation;
use crate::lazy::Thunk;
use crate::object::ObjectType;
use crate::resolver::TypeResolver;
use std::sync::Arc;

/// `GraphQLUnionType` (§3): a lazily evaluated list of possible object
/// types and an optional `resolve_type`.
pub struct UnionType {
    pub name: String,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub(crate) types: Thunk<Vec<Arc<ObjectType>>>,
    pub resolve_type: Option<TypeResolver>,
}

impl std::fmt::Debug for UnionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnionType").field("name", &self.name).finish()
    }
}

impl PartialEq for UnionType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
impl Eq for UnionType {}

impl UnionType {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        directives: Vec<DirectiveAnnotation>,
        types: Thunk<Vec<Arc<ObjectType>>>,
    ) -> Self {
        UnionType { name: name.into(), description, directives, types, resolve_type: None }
    }

    pub fn with_resolve_type(mut self, resolve_type: TypeResolver) -> Self {
        self.resolve_type = Some(resolve_type);
        self
    }

    pub fn types(&self) -> &Vec<Arc<ObjectType>> {
        self.types.get()
    }

    pub fn possible_type_names(&self) -> Vec<&str> {
        self.types().iter().map(|t| t.name.as_str()).collect()
    }
}
