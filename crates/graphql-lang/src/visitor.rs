//! Generic depth-first AST visitor (§4.3).
//!
//! Mirrors the reference implementation's keyed visitor (`{ Field: { enter,
//! leave } }`): implement [`Visitor`], override only the hooks you care
//! about, and call [`walk_document`] (or one of the narrower `walk_*`
//! entry points). Every hook defaults to a no-op `Continue`, so a visitor
//! that only cares about `Field` nodes implements exactly one method.
//!
//! Hooks return a [`VisitAction`] to control traversal: `Continue` recurses
//! into children as usual, `SkipChildren` still runs the matching `leave_*`
//! hook but does not visit children, and `Break` aborts the entire walk
//! immediately (no further `enter_*`/`leave_*` calls at all, including the
//! current node's own `leave_*`).

use crate::ast::*;

/// What the walker should do after an `enter_*` hook returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisitAction {
    Continue,
    SkipChildren,
    Break,
}

/// Read-only context handed to every hook: the chain of node kinds from the
/// document root down to (but not including) the node being visited.
pub struct VisitContext<'a> {
    ancestors: &'a [NodeKind],
}

impl<'a> VisitContext<'a> {
    pub fn ancestors(&self) -> &[NodeKind] {
        self.ancestors
    }

    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    pub fn parent_kind(&self) -> Option<NodeKind> {
        self.ancestors.last().copied()
    }
}

macro_rules! hooks {
    ($($enter:ident, $leave:ident : $ty:ty;)*) => {
        $(
            fn $enter(&mut self, _ctx: &VisitContext<'_>, _node: &$ty) -> VisitAction {
                VisitAction::Continue
            }
            fn $leave(&mut self, _ctx: &VisitContext<'_>, _node: &$ty) {}
        )*
    };
}

#[allow(unused_variables)]
pub trait Visitor {
    hooks! {
        enter_document, leave_document: Document;
        enter_operation_definition, leave_operation_definition: OperationDefinition;
        enter_variable_definition, leave_variable_definition: VariableDefinition;
        enter_variable, leave_variable: Variable;
        enter_selection_set, leave_selection_set: SelectionSet;
        enter_field, leave_field: Field;
        enter_argument, leave_argument: Argument;
        enter_fragment_spread, leave_fragment_spread: FragmentSpread;
        enter_inline_fragment, leave_inline_fragment: InlineFragment;
        enter_fragment_definition, leave_fragment_definition: FragmentDefinition;
        enter_directive, leave_directive: Directive;
        enter_value, leave_value: Value;
        enter_object_field, leave_object_field: ObjectField;
        enter_name, leave_name: Name;
        enter_type, leave_type: Type;
        enter_schema_definition, leave_schema_definition: SchemaDefinition;
        enter_scalar_type_definition, leave_scalar_type_definition: ScalarTypeDefinition;
        enter_object_type_definition, leave_object_type_definition: ObjectTypeDefinition;
        enter_field_definition, leave_field_definition: FieldDefinition;
        enter_input_value_definition, leave_input_value_definition: InputValueDefinition;
        enter_interface_type_definition, leave_interface_type_definition: InterfaceTypeDefinition;
        enter_union_type_definition, leave_union_type_definition: UnionTypeDefinition;
        enter_enum_type_definition, leave_enum_type_definition: EnumTypeDefinition;
        enter_enum_value_definition, leave_enum_value_definition: EnumValueDefinition;
        enter_input_object_type_definition, leave_input_object_type_definition: InputObjectTypeDefinition;
        enter_directive_definition, leave_directive_definition: DirectiveDefinition;
        enter_type_extension, leave_type_extension: TypeExtension;
    }
}

/// Walks an entire document: every operation and fragment, then every
/// type-system definition and extension, in source order.
pub fn walk_document(doc: &Document, visitor: &mut impl Visitor) {
    let mut ancestors = Vec::new();
    walk_document_inner(doc, visitor, &mut ancestors);
}

fn ctx<'a>(ancestors: &'a [NodeKind]) -> VisitContext<'a> {
    VisitContext { ancestors }
}

fn walk_document_inner(doc: &Document, visitor: &mut impl Visitor, ancestors: &mut Vec<NodeKind>) -> bool {
    if visitor.enter_document(&ctx(ancestors), doc) == VisitAction::Break {
        return false;
    }
    ancestors.push(NodeKind::Document);
    for definition in &doc.definitions {
        if !walk_definition(definition, visitor, ancestors) {
            ancestors.pop();
            return false;
        }
    }
    ancestors.pop();
    visitor.leave_document(&ctx(ancestors), doc);
    true
}

fn walk_definition(definition: &Definition, visitor: &mut impl Visitor, ancestors: &mut Vec<NodeKind>) -> bool {
    match definition {
        Definition::Executable(ExecutableDefinition::Operation(op)) => walk_operation_definition(op, visitor, ancestors),
        Definition::Executable(ExecutableDefinition::Fragment(frag)) => walk_fragment_definition(frag, visitor, ancestors),
        Definition::Schema(schema) => walk_schema_definition(schema, visitor, ancestors),
        Definition::Type(type_def) => walk_type_definition(type_def, visitor, ancestors),
        Definition::TypeExtension(ext) => walk_type_extension(ext, visitor, ancestors),
        Definition::Directive(dir_def) => walk_directive_definition(dir_def, visitor, ancestors),
    }
}

fn walk_operation_definition(op: &OperationDefinition, visitor: &mut impl Visitor, ancestors: &mut Vec<NodeKind>) -> bool {
    let action = visitor.enter_operation_definition(&ctx(ancestors), op);
    if action == VisitAction::Break {
        return false;
    }
    if action != VisitAction::SkipChildren {
        ancestors.push(NodeKind::OperationDefinition);
        let ok = (|| {
            for var_def in &op.variable_definitions {
                if !walk_variable_definition(var_def, visitor, ancestors) {
                    return false;
                }
            }
            for directive in &op.directives {
                if !walk_directive(directive, visitor, ancestors) {
                    return false;
                }
            }
            walk_selection_set(&op.selection_set, visitor, ancestors)
        })();
        ancestors.pop();
        if !ok {
            return false;
        }
    }
    visitor.leave_operation_definition(&ctx(ancestors), op);
    true
}

fn walk_variable_definition(var_def: &VariableDefinition, visitor: &mut impl Visitor, ancestors: &mut Vec<NodeKind>) -> bool {
    let action = visitor.enter_variable_definition(&ctx(ancestors), var_def);
    if action == VisitAction::Break {
        return false;
    }
    if action != VisitAction::SkipChildren {
        ancestors.push(NodeKind::VariableDefinition);
        let ok = (|| {
            if !walk_variable(&var_def.variable, visitor, ancestors) {
                return false;
            }
            if !walk_type(&var_def.var_type, visitor, ancestors) {
                return false;
            }
            if let Some(default) = &var_def.default_value {
                if !walk_value(default, visitor, ancestors) {
                    return false;
                }
            }
            for directive in &var_def.directives {
                if !walk_directive(directive, visitor, ancestors) {
                    return false;
                }
            }
            true
        })();
        ancestors.pop();
        if !ok {
            return false;
        }
    }
    visitor.leave_variable_definition(&ctx(ancestors), var_def);
    true
}

fn walk_variable(variable: &Variable, visitor: &mut impl Visitor, ancestors: &mut Vec<NodeKind>) -> bool {
    if visitor.enter_variable(&ctx(ancestors), variable) == VisitAction::Break {
        return false;
    }
    visitor.leave_variable(&ctx(ancestors), variable);
    true
}

fn walk_selection_set(selection_set: &SelectionSet, visitor: &mut impl Visitor, ancestors: &mut Vec<NodeKind>) -> bool {
    let action = visitor.enter_selection_set(&ctx(ancestors), selection_set);
    if action == VisitAction::Break {
        return false;
    }
    if action != VisitAction::SkipChildren {
        ancestors.push(NodeKind::SelectionSet);
        let ok = selection_set.selections.iter().all(|s| walk_selection(s, visitor, ancestors));
        ancestors.pop();
        if !ok {
            return false;
        }
    }
    visitor.leave_selection_set(&ctx(ancestors), selection_set);
    true
}

fn walk_selection(selection: &Selection, visitor: &mut impl Visitor, ancestors: &mut Vec<NodeKind>) -> bool {
    match selection {
        Selection::Field(field) => walk_field(field, visitor, ancestors),
        Selection::FragmentSpread(spread) => walk_fragment_spread(spread, visitor, ancestors),
        Selection::InlineFragment(inline) => walk_inline_fragment(inline, visitor, ancestors),
    }
}

fn walk_field(field: &Field, visitor: &mut impl Visitor, ancestors: &mut Vec<NodeKind>) -> bool {
    let action = visitor.enter_field(&ctx(ancestors), field);
    if action == VisitAction::Break {
        return false;
    }
    if action != VisitAction::SkipChildren {
        ancestors.push(NodeKind::Field);
        let ok = (|| {
            for argument in &field.arguments {
                if !walk_argument(argument, visitor, ancestors) {
                    return false;
                }
            }
            for directive in &field.directives {
                if !walk_directive(directive, visitor, ancestors) {
                    return false;
                }
            }
            if let Some(ss) = &field.selection_set {
                if !walk_selection_set(ss, visitor, ancestors) {
                    return false;
                }
            }
            true
        })();
        ancestors.pop();
        if !ok {
            return false;
        }
    }
    visitor.leave_field(&ctx(ancestors), field);
    true
}

fn walk_argument(argument: &Argument, visitor: &mut impl Visitor, ancestors: &mut Vec<NodeKind>) -> bool {
    let action = visitor.enter_argument(&ctx(ancestors), argument);
    if action == VisitAction::Break {
        return false;
    }
    if action != VisitAction::SkipChildren {
        ancestors.push(NodeKind::Argument);
        let ok = walk_value(&argument.value, visitor, ancestors);
        ancestors.pop();
        if !ok {
            return false;
        }
    }
    visitor.leave_argument(&ctx(ancestors), argument);
    true
}

fn walk_fragment_spread(spread: &FragmentSpread, visitor: &mut impl Visitor, ancestors: &mut Vec<NodeKind>) -> bool {
    let action = visitor.enter_fragment_spread(&ctx(ancestors), spread);
    if action == VisitAction::Break {
        return false;
    }
    if action != VisitAction::SkipChildren {
        ancestors.push(NodeKind::FragmentSpread);
        let ok = spread.directives.iter().all(|d| walk_directive(d, visitor, ancestors));
        ancestors.pop();
        if !ok {
            return false;
        }
    }
    visitor.leave_fragment_spread(&ctx(ancestors), spread);
    true
}

fn walk_inline_fragment(inline: &InlineFragment, visitor: &mut impl Visitor, ancestors: &mut Vec<NodeKind>) -> bool {
    let action = visitor.enter_inline_fragment(&ctx(ancestors), inline);
    if action == VisitAction::Break {
        return false;
    }
    if action != VisitAction::SkipChildren {
        ancestors.push(NodeKind::InlineFragment);
        let ok = (|| {
            for directive in &inline.directives {
                if !walk_directive(directive, visitor, ancestors) {
                    return false;
                }
            }
            walk_selection_set(&inline.selection_set, visitor, ancestors)
        })();
        ancestors.pop();
        if !ok {
            return false;
        }
    }
    visitor.leave_inline_fragment(&ctx(ancestors), inline);
    true
}

fn walk_fragment_definition(frag: &FragmentDefinition, visitor: &mut impl Visitor, ancestors: &mut Vec<NodeKind>) -> bool {
    let action = visitor.enter_fragment_definition(&ctx(ancestors), frag);
    if action == VisitAction::Break {
        return false;
    }
    if action != VisitAction::SkipChildren {
        ancestors.push(NodeKind::FragmentDefinition);
        let ok = (|| {
            for directive in &frag.directives {
                if !walk_directive(directive, visitor, ancestors) {
                    return false;
                }
            }
            walk_selection_set(&frag.selection_set, visitor, ancestors)
        })();
        ancestors.pop();
        if !ok {
            return false;
        }
    }
    visitor.leave_fragment_definition(&ctx(ancestors), frag);
    true
}

fn walk_directive(directive: &Directive, visitor: &mut impl Visitor, ancestors: &mut Vec<NodeKind>) -> bool {
    let action = visitor.enter_directive(&ctx(ancestors), directive);
    if action == VisitAction::Break {
        return false;
    }
    if action != VisitAction::SkipChildren {
        ancestors.push(NodeKind::Directive);
        let ok = directive.arguments.iter().all(|a| walk_argument(a, visitor, ancestors));
        ancestors.pop();
        if !ok {
            return false;
        }
    }
    visitor.leave_directive(&ctx(ancestors), directive);
    true
}

fn walk_value(value: &Value, visitor: &mut impl Visitor, ancestors: &mut Vec<NodeKind>) -> bool {
    let action = visitor.enter_value(&ctx(ancestors), value);
    if action == VisitAction::Break {
        return false;
    }
    if action != VisitAction::SkipChildren {
        ancestors.push(value.kind());
        let ok = match value {
            Value::List(list) => list.values.iter().all(|v| walk_value(v, visitor, ancestors)),
            Value::Object(obj) => obj.fields.iter().all(|f| walk_object_field(f, visitor, ancestors)),
            _ => true,
        };
        ancestors.pop();
        if !ok {
            return false;
        }
    }
    visitor.leave_value(&ctx(ancestors), value);
    true
}

fn walk_object_field(field: &ObjectField, visitor: &mut impl Visitor, ancestors: &mut Vec<NodeKind>) -> bool {
    let action = visitor.enter_object_field(&ctx(ancestors), field);
    if action == VisitAction::Break {
        return false;
    }
    if action != VisitAction::SkipChildren {
        ancestors.push(NodeKind::ObjectField);
        let ok = walk_value(&field.value, visitor, ancestors);
        ancestors.pop();
        if !ok {
            return false;
        }
    }
    visitor.leave_object_field(&ctx(ancestors), field);
    true
}

fn walk_type(ty: &Type, visitor: &mut impl Visitor, ancestors: &mut Vec<NodeKind>) -> bool {
    if visitor.enter_type(&ctx(ancestors), ty) == VisitAction::Break {
        return false;
    }
    visitor.leave_type(&ctx(ancestors), ty);
    true
}

fn walk_schema_definition(schema: &SchemaDefinition, visitor: &mut impl Visitor, ancestors: &mut Vec<NodeKind>) -> bool {
    let action = visitor.enter_schema_definition(&ctx(ancestors), schema);
    if action == VisitAction::Break {
        return false;
    }
    if action != VisitAction::SkipChildren {
        ancestors.push(NodeKind::SchemaDefinition);
        let ok = schema.directives.iter().all(|d| walk_directive(d, visitor, ancestors));
        ancestors.pop();
        if !ok {
            return false;
        }
    }
    visitor.leave_schema_definition(&ctx(ancestors), schema);
    true
}

fn walk_type_definition(type_def: &TypeDefinition, visitor: &mut impl Visitor, ancestors: &mut Vec<NodeKind>) -> bool {
    match type_def {
        TypeDefinition::Scalar(d) => walk_scalar_type_definition(d, visitor, ancestors),
        TypeDefinition::Object(d) => walk_object_type_definition(d, visitor, ancestors),
        TypeDefinition::Interface(d) => walk_interface_type_definition(d, visitor, ancestors),
        TypeDefinition::Union(d) => walk_union_type_definition(d, visitor, ancestors),
        TypeDefinition::Enum(d) => walk_enum_type_definition(d, visitor, ancestors),
        TypeDefinition::InputObject(d) => walk_input_object_type_definition(d, visitor, ancestors),
    }
}

fn walk_scalar_type_definition(d: &ScalarTypeDefinition, visitor: &mut impl Visitor, ancestors: &mut Vec<NodeKind>) -> bool {
    let action = visitor.enter_scalar_type_definition(&ctx(ancestors), d);
    if action == VisitAction::Break {
        return false;
    }
    if action != VisitAction::SkipChildren {
        ancestors.push(NodeKind::ScalarTypeDefinition);
        let ok = d.directives.iter().all(|dir| walk_directive(dir, visitor, ancestors));
        ancestors.pop();
        if !ok {
            return false;
        }
    }
    visitor.leave_scalar_type_definition(&ctx(ancestors), d);
    true
}

fn walk_object_type_definition(d: &ObjectTypeDefinition, visitor: &mut impl Visitor, ancestors: &mut Vec<NodeKind>) -> bool {
    let action = visitor.enter_object_type_definition(&ctx(ancestors), d);
    if action == VisitAction::Break {
        return false;
    }
    if action != VisitAction::SkipChildren {
        ancestors.push(NodeKind::ObjectTypeDefinition);
        let ok = (|| {
            for directive in &d.directives {
                if !walk_directive(directive, visitor, ancestors) {
                    return false;
                }
            }
            d.fields.iter().all(|f| walk_field_definition(f, visitor, ancestors))
        })();
        ancestors.pop();
        if !ok {
            return false;
        }
    }
    visitor.leave_object_type_definition(&ctx(ancestors), d);
    true
}

fn walk_field_definition(d: &FieldDefinition, visitor: &mut impl Visitor, ancestors: &mut Vec<NodeKind>) -> bool {
    let action = visitor.enter_field_definition(&ctx(ancestors), d);
    if action == VisitAction::Break {
        return false;
    }
    if action != VisitAction::SkipChildren {
        ancestors.push(NodeKind::FieldDefinition);
        let ok = (|| {
            for arg in &d.arguments {
                if !walk_input_value_definition(arg, visitor, ancestors) {
                    return false;
                }
            }
            if !walk_type(&d.field_type, visitor, ancestors) {
                return false;
            }
            d.directives.iter().all(|dir| walk_directive(dir, visitor, ancestors))
        })();
        ancestors.pop();
        if !ok {
            return false;
        }
    }
    visitor.leave_field_definition(&ctx(ancestors), d);
    true
}

fn walk_input_value_definition(d: &InputValueDefinition, visitor: &mut impl Visitor, ancestors: &mut Vec<NodeKind>) -> bool {
    let action = visitor.enter_input_value_definition(&ctx(ancestors), d);
    if action == VisitAction::Break {
        return false;
    }
    if action != VisitAction::SkipChildren {
        ancestors.push(NodeKind::InputValueDefinition);
        let ok = (|| {
            if !walk_type(&d.value_type, visitor, ancestors) {
                return false;
            }
            if let Some(default) = &d.default_value {
                if !walk_value(default, visitor, ancestors) {
                    return false;
                }
            }
            d.directives.iter().all(|dir| walk_directive(dir, visitor, ancestors))
        })();
        ancestors.pop();
        if !ok {
            return false;
        }
    }
    visitor.leave_input_value_definition(&ctx(ancestors), d);
    true
}

fn walk_interface_type_definition(
    d: &InterfaceTypeDefinition,
    visitor: &mut impl Visitor,
    ancestors: &mut Vec<NodeKind>,
) -> bool {
    let action = visitor.enter_interface_type_definition(&ctx(ancestors), d);
    if action == VisitAction::Break {
        return false;
    }
    if action != VisitAction::SkipChildren {
        ancestors.push(NodeKind::InterfaceTypeDefinition);
        let ok = (|| {
            for directive in &d.directives {
                if !walk_directive(directive, visitor, ancestors) {
                    return false;
                }
            }
            d.fields.iter().all(|f| walk_field_definition(f, visitor, ancestors))
        })();
        ancestors.pop();
        if !ok {
            return false;
        }
    }
    visitor.leave_interface_type_definition(&ctx(ancestors), d);
    true
}

fn walk_union_type_definition(d: &UnionTypeDefinition, visitor: &mut impl Visitor, ancestors: &mut Vec<NodeKind>) -> bool {
    let action = visitor.enter_union_type_definition(&ctx(ancestors), d);
    if action == VisitAction::Break {
        return false;
    }
    if action != VisitAction::SkipChildren {
        ancestors.push(NodeKind::UnionTypeDefinition);
        let ok = d.directives.iter().all(|dir| walk_directive(dir, visitor, ancestors));
        ancestors.pop();
        if !ok {
            return false;
        }
    }
    visitor.leave_union_type_definition(&ctx(ancestors), d);
    true
}

fn walk_enum_type_definition(d: &EnumTypeDefinition, visitor: &mut impl Visitor, ancestors: &mut Vec<NodeKind>) -> bool {
    let action = visitor.enter_enum_type_definition(&ctx(ancestors), d);
    if action == VisitAction::Break {
        return false;
    }
    if action != VisitAction::SkipChildren {
        ancestors.push(NodeKind::EnumTypeDefinition);
        let ok = (|| {
            for directive in &d.directives {
                if !walk_directive(directive, visitor, ancestors) {
                    return false;
                }
            }
            d.values.iter().all(|v| walk_enum_value_definition(v, visitor, ancestors))
        })();
        ancestors.pop();
        if !ok {
            return false;
        }
    }
    visitor.leave_enum_type_definition(&ctx(ancestors), d);
    true
}

fn walk_enum_value_definition(d: &EnumValueDefinition, visitor: &mut impl Visitor, ancestors: &mut Vec<NodeKind>) -> bool {
    let action = visitor.enter_enum_value_definition(&ctx(ancestors), d);
    if action == VisitAction::Break {
        return false;
    }
    if action != VisitAction::SkipChildren {
        ancestors.push(NodeKind::EnumValueDefinition);
        let ok = d.directives.iter().all(|dir| walk_directive(dir, visitor, ancestors));
        ancestors.pop();
        if !ok {
            return false;
        }
    }
    visitor.leave_enum_value_definition(&ctx(ancestors), d);
    true
}

fn walk_input_object_type_definition(
    d: &InputObjectTypeDefinition,
    visitor: &mut impl Visitor,
    ancestors: &mut Vec<NodeKind>,
) -> bool {
    let action = visitor.enter_input_object_type_definition(&ctx(ancestors), d);
    if action == VisitAction::Break {
        return false;
    }
    if action != VisitAction::SkipChildren {
        ancestors.push(NodeKind::InputObjectTypeDefinition);
        let ok = (|| {
            for directive in &d.directives {
                if !walk_directive(directive, visitor, ancestors) {
                    return false;
                }
            }
            d.fields.iter().all(|f| walk_input_value_definition(f, visitor, ancestors))
        })();
        ancestors.pop();
        if !ok {
            return false;
        }
    }
    visitor.leave_input_object_type_definition(&ctx(ancestors), d);
    true
}

fn walk_directive_definition(d: &DirectiveDefinition, visitor: &mut impl Visitor, ancestors: &mut Vec<NodeKind>) -> bool {
    let action = visitor.enter_directive_definition(&ctx(ancestors), d);
    if action == VisitAction::Break {
        return false;
    }
    if action != VisitAction::SkipChildren {
        ancestors.push(NodeKind::DirectiveDefinition);
        let ok = d.arguments.iter().all(|a| walk_input_value_definition(a, visitor, ancestors));
        ancestors.pop();
        if !ok {
            return false;
        }
    }
    visitor.leave_directive_definition(&ctx(ancestors), d);
    true
}

fn walk_type_extension(ext: &TypeExtension, visitor: &mut impl Visitor, ancestors: &mut Vec<NodeKind>) -> bool {
    let action = visitor.enter_type_extension(&ctx(ancestors), ext);
    if action == VisitAction::Break {
        return false;
    }
    if action != VisitAction::SkipChildren {
        ancestors.push(ext.kind());
        let ok = match ext {
            TypeExtension::Scalar(d) => d.directives.iter().all(|dir| walk_directive(dir, visitor, ancestors)),
            TypeExtension::Object(d) => d.fields.iter().all(|f| walk_field_definition(f, visitor, ancestors))
                && d.directives.iter().all(|dir| walk_directive(dir, visitor, ancestors)),
            TypeExtension::Interface(d) => d.fields.iter().all(|f| walk_field_definition(f, visitor, ancestors))
                && d.directives.iter().all(|dir| walk_directive(dir, visitor, ancestors)),
            TypeExtension::Union(d) => d.directives.iter().all(|dir| walk_directive(dir, visitor, ancestors)),
            TypeExtension::Enum(d) => d.values.iter().all(|v| walk_enum_value_definition(v, visitor, ancestors))
                && d.directives.iter().all(|dir| walk_directive(dir, visitor, ancestors)),
            TypeExtension::InputObject(d) => d.fields.iter().all(|f| walk_input_value_definition(f, visitor, ancestors))
                && d.directives.iter().all(|dir| walk_directive(dir, visitor, ancestors)),
        };
        ancestors.pop();
        if !ok {
            return false;
        }
    }
    visitor.leave_type_extension(&ctx(ancestors), ext);
    true
}

/// Walks just a selection set, e.g. for a rule scoped to one operation's
/// already-collected fields. Ancestors start empty.
pub fn walk_selection_set_standalone(selection_set: &SelectionSet, visitor: &mut impl Visitor) {
    let mut ancestors = Vec::new();
    walk_selection_set(selection_set, visitor, &mut ancestors);
}

#[cfg(test)]
#[path = "tests/visitor_tests.rs"]
mod visitor_tests;
