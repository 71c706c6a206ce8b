//! The rule set (§4.5). `structural`, `fragments`, `fields` run as flat,
//! document- or selection-set-scoped passes; everything else rides the
//! single traversal driven by [`Validator`], which drives [`ValidationContext`]'s
//! `TypeInfo` in lockstep the way the reference implementation's
//! `ValidationContext` does.

pub mod fields;
pub mod fragments;
pub mod known_names;
pub mod structural;
pub mod values;
pub mod variables;

use crate::context::ValidationContext;
use crate::error::ValidationError;
use crate::type_info::named_type_field;
use graphql_lang::ast;
use graphql_lang::visitor::{VisitAction, VisitContext, Visitor};
use graphql_types::{NamedType, Schema};
use indexmap::IndexMap;
use std::collections::HashSet;
use variables::{has_non_null_default, is_variable_usage_allowed, DeclaredVars, VarUsage};

/// Runs every rule in §4.5 against one document and returns the combined
/// list of violations (possibly empty).
pub fn validate(schema: &Schema, document: &ast::Document) -> Vec<ValidationError> {
    let mut ctx = ValidationContext::new(schema, document);
    structural::check(document, &mut ctx.errors);
    fragments::check_document_level(document, &ctx.fragments, &mut ctx.errors);

    let mut validator = Validator::new(ctx);
    graphql_lang::visitor::walk_document(document, &mut validator);
    let mut ctx = validator.ctx;

    for op in document.operations() {
        let Some(root) = root_type_for(schema, op.operation) else { continue };
        fields::check_selection_set(schema, &ctx.fragments, &op.selection_set, &root, &mut ctx.errors);
    }
    for frag in document.fragments() {
        if let Some(named) = schema.get_type(frag.type_condition.name.as_str()) {
            fields::check_selection_set(schema, &ctx.fragments, &frag.selection_set, named, &mut ctx.errors);
        }
    }

    ctx.errors
}

fn root_type_for(schema: &Schema, operation: ast::OperationType) -> Option<NamedType> {
    let obj = match operation {
        ast::OperationType::Query => schema.query.clone(),
        ast::OperationType::Mutation => schema.mutation.clone(),
        ast::OperationType::Subscription => schema.subscription.clone(),
    }?;
    Some(NamedType::Object(obj))
}

/// Drives `ctx.type_info` through one shared traversal, dispatching every
/// rule that's naturally expressed as a per-node check as it goes: known
/// type/directive/argument/field names, values of correct type, required
/// arguments provided, fragments restricted to composite types, fragment
/// spread possibility, and (at each operation's `leave`) variable usages
/// allowed plus no unused variables.
struct Validator<'a> {
    ctx: ValidationContext<'a>,
    declared_vars: DeclaredVars,
    var_usages: Vec<VarUsage>,
    used_var_names: HashSet<String>,
}

impl<'a> Validator<'a> {
    fn new(ctx: ValidationContext<'a>) -> Self {
        Validator { ctx, declared_vars: IndexMap::new(), var_usages: Vec::new(), used_var_names: HashSet::new() }
    }

    fn check_args(&mut self, arg_defs: &IndexMap<String, graphql_types::InputValue>, arg_nodes: &[ast::Argument], holder: &str, holder_loc: Option<ast::Location>) {
        values::check_arguments(arg_defs, arg_nodes, holder, holder_loc, &mut self.ctx.errors);
        for arg in arg_nodes {
            if let Some(def) = arg_defs.get(arg.name.as_str()) {
                variables::collect_usages(&arg.value, &def.value_type, def.default_value.is_some(), &mut self.var_usages);
            }
        }
    }

    /// §4.5 "scalar leafs": a field whose return type is a scalar or enum
    /// must not carry a subselection; a field whose return type is
    /// composite (object/interface/union) must.
    fn check_leaf(&mut self, field: &ast::Field, def: &graphql_types::Field) {
        let named = def.field_type.named_type();
        if named.is_leaf_type() {
            if field.selection_set.is_some() {
                self.ctx.errors.push(ValidationError::at(
                    format!("Field \"{}\" must not have a selection since type \"{}\" has no subfields.", field.name.as_str(), def.field_type.display_name()),
                    field.loc,
                ));
            }
        } else if field.selection_set.is_none() {
            self.ctx.errors.push(ValidationError::at(
                format!("Field \"{}\" of type \"{}\" must have a selection of subfields. Did you mean \"{} {{ ... }}\"?", field.name.as_str(), def.field_type.display_name(), field.name.as_str()),
                field.loc,
            ));
        }
    }

    fn check_fragment_target(&mut self, named: Option<&NamedType>, loc: Option<ast::Location>, kind: &str) {
        match named {
            None => {}
            Some(n) if !n.is_composite_type() => {
                self.ctx.report(ValidationError::at(format!("{kind} cannot condition on non composite type \"{}\".", n.name()), loc));
            }
            Some(n) => {
                if let Some(parent) = self.ctx.type_info.current_parent_type().cloned() {
                    if !fragments::types_overlap(self.ctx.schema, n, parent.named_type()) {
                        self.ctx.report(ValidationError::at(
                            format!(
                                "Fragment cannot be spread here as objects of type \"{}\" can never be of type \"{}\".",
                                parent.named_type().name(),
                                n.name()
                            ),
                            loc,
                        ));
                    }
                }
            }
        }
    }
}

impl<'a> Visitor for Validator<'a> {
    fn enter_operation_definition(&mut self, _ctx: &VisitContext<'_>, op: &ast::OperationDefinition) -> VisitAction {
        self.ctx.type_info.enter_operation_definition(op);
        self.declared_vars.clear();
        self.var_usages.clear();
        self.used_var_names.clear();
        VisitAction::Continue
    }

    fn leave_operation_definition(&mut self, _ctx: &VisitContext<'_>, op: &ast::OperationDefinition) {
        for usage in &self.var_usages {
            match self.declared_vars.get(&usage.name) {
                None => {
                    self.ctx.errors.push(ValidationError::at(format!("Variable \"${}\" is not defined.", usage.name), usage.loc));
                }
                Some((var_type, has_default, _)) => {
                    self.used_var_names.insert(usage.name.clone());
                    if !is_variable_usage_allowed(var_type, *has_default, usage) {
                        self.ctx.errors.push(ValidationError::at(
                            format!(
                                "Variable \"${}\" of type \"{}\" used in position expecting type \"{}\".",
                                usage.name,
                                var_type.display_name(),
                                usage.expected_type.display_name()
                            ),
                            usage.loc,
                        ));
                    }
                }
            }
        }
        for (name, (_, _, loc)) in &self.declared_vars {
            if !self.used_var_names.contains(name) {
                let op_desc = op.name.as_ref().map(|n| format!(" in operation \"{}\"", n.as_str())).unwrap_or_default();
                self.ctx.errors.push(ValidationError::at(format!("Variable \"${name}\" is never used{op_desc}."), *loc));
            }
        }
        self.ctx.type_info.leave_operation_definition();
    }

    fn enter_variable_definition(&mut self, _ctx: &VisitContext<'_>, var_def: &ast::VariableDefinition) -> VisitAction {
        self.ctx.type_info.enter_variable_definition(var_def);
        let name = var_def.variable.name.as_str().to_string();
        if self.declared_vars.contains_key(&name) {
            self.ctx.errors.push(ValidationError::at(format!("There can be only one variable named \"${name}\"."), var_def.loc));
        }
        let named = self.ctx.schema.get_type(var_def.var_type.inner_name().as_str());
        if let Some(message) = variables::input_type_missing_message(named, &name) {
            self.ctx.errors.push(ValidationError::at(message, var_def.loc));
        }
        if let Some(resolved) = self.ctx.schema.resolve_ast_type(&var_def.var_type) {
            self.declared_vars.insert(name, (resolved, has_non_null_default(var_def), var_def.loc));
        }
        VisitAction::Continue
    }

    fn leave_variable_definition(&mut self, _ctx: &VisitContext<'_>, _var_def: &ast::VariableDefinition) {
        self.ctx.type_info.leave_variable_definition();
    }

    fn enter_fragment_definition(&mut self, _ctx: &VisitContext<'_>, frag: &ast::FragmentDefinition) -> VisitAction {
        let named = self.ctx.schema.get_type(frag.type_condition.name.as_str());
        match named {
            None => self.ctx.errors.push(ValidationError::at(known_names::unknown_type_message(self.ctx.schema, frag.type_condition.name.as_str()), frag.loc)),
            Some(n) if !n.is_composite_type() => {
                self.ctx.errors.push(ValidationError::at(
                    format!("Fragment \"{}\" cannot condition on non composite type \"{}\".", frag.name.as_str(), n.name()),
                    frag.loc,
                ));
            }
            Some(_) => {}
        }
        self.ctx.type_info.enter_fragment_definition(frag);
        VisitAction::Continue
    }

    fn leave_fragment_definition(&mut self, _ctx: &VisitContext<'_>, _frag: &ast::FragmentDefinition) {
        self.ctx.type_info.leave_fragment_definition();
    }

    fn enter_inline_fragment(&mut self, _ctx: &VisitContext<'_>, inline: &ast::InlineFragment) -> VisitAction {
        if let Some(cond) = &inline.type_condition {
            let named = self.ctx.schema.get_type(cond.name.as_str()).cloned();
            match &named {
                None => self.ctx.errors.push(ValidationError::at(known_names::unknown_type_message(self.ctx.schema, cond.name.as_str()), inline.loc)),
                Some(n) => self.check_fragment_target(Some(n), inline.loc, "Inline fragment"),
            }
        }
        self.ctx.type_info.enter_inline_fragment(inline);
        VisitAction::Continue
    }

    fn leave_inline_fragment(&mut self, _ctx: &VisitContext<'_>, _inline: &ast::InlineFragment) {
        self.ctx.type_info.leave_inline_fragment();
    }

    fn enter_fragment_spread(&mut self, _ctx: &VisitContext<'_>, spread: &ast::FragmentSpread) -> VisitAction {
        match self.ctx.fragment(spread.name.as_str()) {
            None => {
                let suggestions: Vec<String> = self
                    .ctx
                    .fragments
                    .keys()
                    .filter(|k| k.eq_ignore_ascii_case(spread.name.as_str()))
                    .map(|k| k.to_string())
                    .collect();
                self.ctx.errors.push(ValidationError::at(
                    format!("Unknown fragment \"{}\".{}", spread.name.as_str(), graphql_lang::utilities::did_you_mean(&suggestions)),
                    spread.loc,
                ));
            }
            Some(frag) => {
                let named = self.ctx.schema.get_type(frag.type_condition.name.as_str()).cloned();
                self.check_fragment_target(named.as_ref(), spread.loc, "Fragment spread");
            }
        }
        VisitAction::Continue
    }

    fn enter_field(&mut self, _ctx: &VisitContext<'_>, field: &ast::Field) -> VisitAction {
        let parent = self.ctx.type_info.current_type().cloned();
        if let Some(parent) = &parent {
            if field.name.as_str() != "__typename" {
                match named_type_field(parent.named_type(), field.name.as_str()) {
                    None => {
                        let known = known_names::composite_type_names(parent.named_type());
                        self.ctx.errors.push(ValidationError::at(
                            known_names::unknown_field_message(field.name.as_str(), parent.named_type().name(), &known),
                            field.loc,
                        ));
                    }
                    Some(def) => {
                        self.check_args(&def.args, &field.arguments, &format!("field \"{}\"", field.name.as_str()), field.loc);
                        self.check_leaf(field, &def);
                    }
                }
            }
        }
        self.ctx.type_info.enter_field(field);
        VisitAction::Continue
    }

    fn leave_field(&mut self, _ctx: &VisitContext<'_>, _field: &ast::Field) {
        self.ctx.type_info.leave_field();
    }

    fn enter_directive(&mut self, _ctx: &VisitContext<'_>, directive: &ast::Directive) -> VisitAction {
        match known_names::find_directive(self.ctx.schema, directive.name.as_str()) {
            None => self.ctx.errors.push(ValidationError::at(known_names::unknown_directive_message(self.ctx.schema, directive.name.as_str()), directive.loc)),
            Some(def) => self.check_args(&def.args, &directive.arguments, &format!("directive \"@{}\"", directive.name.as_str()), directive.loc),
        }
        self.ctx.type_info.enter_directive(directive);
        VisitAction::Continue
    }

    fn leave_directive(&mut self, _ctx: &VisitContext<'_>, _directive: &ast::Directive) {
        self.ctx.type_info.leave_directive();
    }
}
