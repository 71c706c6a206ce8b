//! `TypeInfo` (§4.5): tracks, during traversal, the current parent type,
//! field definition, argument definition, input type, directive, and enum
//! value so rules can ask "what is the expected type here?". Mirrors the
//! reference implementation's stack-of-stacks `TypeInfo`: every `enter_*`
//! hook pushes a frame, every matching `leave_*` pops it.

use graphql_lang::ast;
use graphql_types::{DirectiveType, Field, InputValue, NamedType, Schema, Type};
use std::sync::Arc;

pub(crate) fn named_type_field(named: &NamedType, name: &str) -> Option<Field> {
    if name == "__typename" {
        return Some(Field::new("__typename", Type::non_null(Type::string())));
    }
    match named {
        NamedType::Object(obj) => obj.field(name).cloned(),
        NamedType::Interface(iface) => iface.fields().get(name).cloned(),
        _ => None,
    }
}

/// The element type of a list type, looking through one layer of `NonNull`
/// first (so both `[T]` and `[T]!` report `T` as their item type).
fn list_item_type(ty: &Type) -> Option<Type> {
    match ty.nullable() {
        Type::List(inner) => Some(*inner),
        _ => None,
    }
}

pub struct TypeInfo<'a> {
    schema: &'a Schema,
    type_stack: Vec<Option<Type>>,
    field_def_stack: Vec<Option<Field>>,
    directive_stack: Vec<Option<Arc<DirectiveType>>>,
    argument_stack: Vec<Option<InputValue>>,
    input_type_stack: Vec<Option<Type>>,
}

impl<'a> TypeInfo<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        TypeInfo {
            schema,
            type_stack: Vec::new(),
            field_def_stack: Vec::new(),
            directive_stack: Vec::new(),
            argument_stack: Vec::new(),
            input_type_stack: Vec::new(),
        }
    }

    /// The composite type that the fields of the current selection set (or
    /// the field/fragment about to be entered) belong to.
    pub fn current_parent_type(&self) -> Option<&Type> {
        self.type_stack.iter().rev().find_map(|t| t.as_ref())
    }

    /// The type of the field/fragment/operation currently being visited.
    pub fn current_type(&self) -> Option<&Type> {
        self.type_stack.last().and_then(|t| t.as_ref())
    }

    pub fn current_field_def(&self) -> Option<&Field> {
        self.field_def_stack.last().and_then(|f| f.as_ref())
    }

    pub fn current_directive(&self) -> Option<&Arc<DirectiveType>> {
        self.directive_stack.last().and_then(|d| d.as_ref())
    }

    pub fn current_argument(&self) -> Option<&InputValue> {
        self.argument_stack.last().and_then(|a| a.as_ref())
    }

    pub fn current_input_type(&self) -> Option<&Type> {
        self.input_type_stack.last().and_then(|t| t.as_ref())
    }

    pub fn enter_operation_definition(&mut self, op: &ast::OperationDefinition) {
        let root = match op.operation {
            ast::OperationType::Query => self.schema.query.clone(),
            ast::OperationType::Mutation => self.schema.mutation.clone(),
            ast::OperationType::Subscription => self.schema.subscription.clone(),
        };
        self.type_stack.push(root.map(|obj| Type::Named(NamedType::Object(obj))));
    }

    pub fn leave_operation_definition(&mut self) {
        self.type_stack.pop();
    }

    pub fn enter_fragment_definition(&mut self, frag: &ast::FragmentDefinition) {
        let ty = self.schema.get_type(frag.type_condition.name.as_str()).map(|n| Type::Named(n.clone()));
        self.type_stack.push(ty);
    }

    pub fn leave_fragment_definition(&mut self) {
        self.type_stack.pop();
    }

    pub fn enter_inline_fragment(&mut self, inline: &ast::InlineFragment) {
        let ty = match &inline.type_condition {
            Some(named) => self.schema.get_type(named.name.as_str()).map(|n| Type::Named(n.clone())),
            None => self.current_type().cloned(),
        };
        self.type_stack.push(ty);
    }

    pub fn leave_inline_fragment(&mut self) {
        self.type_stack.pop();
    }

    /// A selection set's fields belong to whatever type was just pushed by
    /// the enclosing field/fragment/operation; it contributes no frame of
    /// its own.
    pub fn enter_selection_set(&mut self) {}
    pub fn leave_selection_set(&mut self) {}

    pub fn enter_field(&mut self, field: &ast::Field) {
        let parent = self.current_type().cloned();
        let field_def = parent.as_ref().and_then(|t| named_type_field(t.named_type(), field.name.as_str()));
        self.type_stack.push(field_def.as_ref().map(|f| f.field_type.clone()));
        self.field_def_stack.push(field_def);
    }

    pub fn leave_field(&mut self) {
        self.type_stack.pop();
        self.field_def_stack.pop();
    }

    pub fn enter_directive(&mut self, directive: &ast::Directive) {
        self.directive_stack.push(self.schema.get_directive(directive.name.as_str()).cloned());
    }

    pub fn leave_directive(&mut self) {
        self.directive_stack.pop();
    }

    pub fn enter_argument(&mut self, argument: &ast::Argument) {
        let arg_def = if let Some(directive) = self.current_directive() {
            directive.args.get(argument.name.as_str()).cloned()
        } else {
            self.current_field_def().and_then(|f| f.args.get(argument.name.as_str()).cloned())
        };
        self.input_type_stack.push(arg_def.as_ref().map(|a| a.value_type.clone()));
        self.argument_stack.push(arg_def);
    }

    pub fn leave_argument(&mut self) {
        self.input_type_stack.pop();
        self.argument_stack.pop();
    }

    pub fn enter_variable_definition(&mut self, var_def: &ast::VariableDefinition) {
        self.input_type_stack.push(self.schema.resolve_ast_type(&var_def.var_type));
    }

    pub fn leave_variable_definition(&mut self) {
        self.input_type_stack.pop();
    }

    pub fn enter_value(&mut self, value: &ast::Value) {
        match value {
            ast::Value::List(_) => {
                let item = self.current_input_type().and_then(list_item_type);
                self.input_type_stack.push(item);
            }
            ast::Value::Object(_) => {
                // Per-field input types are pushed individually on each
                // `ObjectField` by `enter_object_field`; the object literal
                // itself inherits the enclosing input type unchanged.
                self.input_type_stack.push(self.current_input_type().cloned());
            }
            _ => self.input_type_stack.push(self.current_input_type().cloned()),
        }
    }

    pub fn leave_value(&mut self) {
        self.input_type_stack.pop();
    }

    pub fn enter_object_field(&mut self, field: &ast::ObjectField) {
        let field_type = self.current_input_type().and_then(|ty| match ty.nullable().named_type() {
            NamedType::InputObject(io) => io.fields().get(field.name.as_str()).map(|f| f.value_type.clone()),
            _ => None,
        });
        self.input_type_stack.push(field_type);
    }

    pub fn leave_object_field(&mut self) {
        self.input_type_stack.pop();
    }
}
