//! Checks that need nothing but a flat scan of the document's top-level
//! definitions: executable-definitions-only, unique-operation-names, and
//! lone-anonymous-operation.

use crate::error::ValidationError;
use graphql_lang::ast::{self, Node};
use std::collections::HashMap;

pub fn check(document: &ast::Document, errors: &mut Vec<ValidationError>) {
    executable_definitions_only(document, errors);
    unique_operation_names(document, errors);
    lone_anonymous_operation(document, errors);
}

fn executable_definitions_only(document: &ast::Document, errors: &mut Vec<ValidationError>) {
    for def in &document.definitions {
        let name = match def {
            ast::Definition::Executable(_) => continue,
            ast::Definition::Schema(_) => "schema".to_string(),
            ast::Definition::Type(t) => t.name().to_string(),
            ast::Definition::TypeExtension(t) => t.name().to_string(),
            ast::Definition::Directive(d) => d.name.as_str().to_string(),
        };
        errors.push(ValidationError::at(format!("The \"{name}\" definition is not executable."), def.loc()));
    }
}

fn unique_operation_names(document: &ast::Document, errors: &mut Vec<ValidationError>) {
    let mut seen: HashMap<&str, ()> = HashMap::new();
    for op in document.operations() {
        let Some(name) = &op.name else { continue };
        if seen.insert(name.as_str(), ()).is_some() {
            errors.push(ValidationError::at(format!("There can be only one operation named \"{}\".", name.as_str()), op.loc));
        }
    }
}

fn lone_anonymous_operation(document: &ast::Document, errors: &mut Vec<ValidationError>) {
    let total = document.operations().count();
    if total <= 1 {
        return;
    }
    for op in document.operations() {
        if op.name.is_none() {
            errors.push(ValidationError::at("This anonymous operation must be the only defined operation.", op.loc));
        }
    }
}
