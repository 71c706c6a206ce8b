//! `ValidationContext` (§4.5): owns the schema, document, `TypeInfo`
//! traversal, and the running error list shared by every rule. All rules
//! run over the same single traversal rather than each re-walking the
//! document (§4.5 "a single traversal dispatches every rule's enter/leave").

use crate::error::ValidationError;
use crate::type_info::TypeInfo;
use graphql_lang::ast;
use graphql_types::Schema;
use indexmap::IndexMap;

pub struct ValidationContext<'a> {
    pub schema: &'a Schema,
    pub document: &'a ast::Document,
    pub type_info: TypeInfo<'a>,
    pub fragments: IndexMap<&'a str, &'a ast::FragmentDefinition>,
    pub errors: Vec<ValidationError>,
}

impl<'a> ValidationContext<'a> {
    pub fn new(schema: &'a Schema, document: &'a ast::Document) -> Self {
        let fragments = document.fragments().map(|f| (f.name.as_str(), f)).collect();
        ValidationContext { schema, document, type_info: TypeInfo::new(schema), fragments, errors: Vec::new() }
    }

    pub fn fragment(&self, name: &str) -> Option<&'a ast::FragmentDefinition> {
        self.fragments.get(name).copied()
    }

    pub fn report(&mut self, error: ValidationError) {
        self.errors.push(error);
    }
}
