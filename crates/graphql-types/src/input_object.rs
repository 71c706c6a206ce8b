use crate::directive::DirectiveAnnotation;
use crate::input::InputValue;
use crate::lazy::Thunk;
use indexmap::IndexMap;

/// `GraphQLInputObjectType` (§3): a lazily evaluated field map. Acyclicity
/// through a chain of non-null fields (invariant 6) is checked by the
/// schema validator, not enforced at construction time, since recursive
/// input objects (`input Filter { and: [Filter!] }`) are legal.
pub struct InputObjectType {
    pub name: String,
    pub description: Option<String>,
    pub directives: Vec<DirectiveAnnotation>,
    pub(crate) fields: Thunk<IndexMap<String, InputValue>>,
}

impl std::fmt::Debug for InputObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputObjectType").field("name", &self.name).finish()
    }
}

impl PartialEq for InputObjectType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
impl Eq for InputObjectType {}

impl InputObjectType {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        directives: Vec<DirectiveAnnotation>,
        fields: Thunk<IndexMap<String, InputValue>>,
    ) -> Self {
        InputObjectType { name: name.into(), description, directives, fields }
    }

    pub fn fields(&self) -> &IndexMap<String, InputValue> {
        self.fields.get()
    }
}
