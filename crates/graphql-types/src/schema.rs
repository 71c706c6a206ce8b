//! `GraphQLSchema` (§3): the root container referencing `query`/`mutation`/
//! `subscription` root types, the directive set, and a flattened
//! `type_map` of every named type reachable from those roots (invariant 2).

use crate::directive::DirectiveType;
use crate::error::SchemaError;
use crate::object::ObjectType;
use crate::type_ref::{NamedType, NullableType, Type};
use indexmap::{IndexMap, IndexSet};
use std::sync::{Arc, OnceLock};

pub struct Schema {
    pub query: Option<Arc<ObjectType>>,
    pub mutation: Option<Arc<ObjectType>>,
    pub subscription: Option<Arc<ObjectType>>,
    pub directives: Vec<Arc<DirectiveType>>,
    pub type_map: IndexMap<String, NamedType>,
    /// interface name → implementing object types, in declaration order
    /// (§3 `GraphQLSchema.implementations`).
    pub implementations: IndexMap<String, Vec<Arc<ObjectType>>>,
    validation_errors: OnceLock<Vec<SchemaError>>,
}

impl std::fmt::Debug for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Schema")
            .field("query", &self.query.as_ref().map(|t| &t.name))
            .field("mutation", &self.mutation.as_ref().map(|t| &t.name))
            .field("subscription", &self.subscription.as_ref().map(|t| &t.name))
            .field("type_count", &self.type_map.len())
            .finish()
    }
}

pub struct SchemaBuilder {
    pub query: Option<Arc<ObjectType>>,
    pub mutation: Option<Arc<ObjectType>>,
    pub subscription: Option<Arc<ObjectType>>,
    pub directives: Vec<Arc<DirectiveType>>,
    /// Extra types to force into `type_map` even if unreachable from roots
    /// (§3 invariant 2 "...or from explicit `types`"), e.g. union members
    /// only reachable dynamically.
    pub extra_types: Vec<NamedType>,
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        SchemaBuilder {
            query: None,
            mutation: None,
            subscription: None,
            directives: DirectiveType::specified().into_iter().map(Arc::new).collect(),
            extra_types: Vec::new(),
        }
    }
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: Arc<ObjectType>) -> Self {
        self.query = Some(query);
        self
    }

    pub fn mutation(mut self, mutation: Arc<ObjectType>) -> Self {
        self.mutation = Some(mutation);
        self
    }

    pub fn subscription(mut self, subscription: Arc<ObjectType>) -> Self {
        self.subscription = Some(subscription);
        self
    }

    pub fn directive(mut self, directive: DirectiveType) -> Self {
        self.directives.push(Arc::new(directive));
        self
    }

    pub fn extra_type(mut self, named: NamedType) -> Self {
        self.extra_types.push(named);
        self
    }

    pub fn build(self) -> Result<Schema, SchemaError> {
        let mut type_map: IndexMap<String, NamedType> = IndexMap::new();
        for scalar in crate::scalar::ScalarType::specified() {
            type_map.insert(scalar.name.clone(), NamedType::Scalar(scalar));
        }

        let mut roots: Vec<NamedType> = Vec::new();
        if let Some(q) = &self.query {
            roots.push(NamedType::Object(q.clone()));
        }
        if let Some(m) = &self.mutation {
            roots.push(NamedType::Object(m.clone()));
        }
        if let Some(s) = &self.subscription {
            roots.push(NamedType::Object(s.clone()));
        }
        roots.extend(self.extra_types.iter().cloned());

        for directive in &self.directives {
            for arg in directive.args.values() {
                collect_from_type(&arg.value_type, &mut type_map);
            }
        }

        for root in &roots {
            collect_named(root, &mut type_map);
        }

        let mut implementations: IndexMap<String, Vec<Arc<ObjectType>>> = IndexMap::new();
        for named in type_map.values() {
            if let NamedType::Object(obj) = named {
                for iface in obj.interfaces() {
                    implementations.entry(iface.name.clone()).or_default().push(obj.clone());
                }
            }
        }

        Ok(Schema {
            query: self.query,
            mutation: self.mutation,
            subscription: self.subscription,
            directives: self.directives,
            type_map,
            implementations,
            validation_errors: OnceLock::new(),
        })
    }
}

fn collect_from_type(t: &Type, type_map: &mut IndexMap<String, NamedType>) {
    match t {
        Type::Named(n) => collect_named(n, type_map),
        Type::List(inner) => collect_from_type(inner, type_map),
        Type::NonNull(inner) => match inner.as_ref() {
            NullableType::Named(n) => collect_named(n, type_map),
            NullableType::List(l) => collect_from_type(l, type_map),
        },
    }
}

fn collect_named(named: &NamedType, type_map: &mut IndexMap<String, NamedType>) {
    if type_map.contains_key(named.name()) {
        return;
    }
    type_map.insert(named.name().to_string(), named.clone());
    match named {
        NamedType::Scalar(_) | NamedType::Enum(_) => {}
        NamedType::Object(obj) => {
            for iface in obj.interfaces() {
                collect_named(&NamedType::Interface(iface.clone()), type_map);
            }
            for field in obj.fields().values() {
                collect_from_type(&field.field_type, type_map);
                for arg in field.args.values() {
                    collect_from_type(&arg.value_type, type_map);
                }
            }
        }
        NamedType::Interface(iface) => {
            for parent in iface.interfaces() {
                collect_named(&NamedType::Interface(parent.clone()), type_map);
            }
            for field in iface.fields().values() {
                collect_from_type(&field.field_type, type_map);
                for arg in field.args.values() {
                    collect_from_type(&arg.value_type, type_map);
                }
            }
        }
        NamedType::Union(u) => {
            for member in u.types() {
                collect_named(&NamedType::Object(member.clone()), type_map);
            }
        }
        NamedType::InputObject(io) => {
            for field in io.fields().values() {
                collect_from_type(&field.value_type, type_map);
            }
        }
    }
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn get_type(&self, name: &str) -> Option<&NamedType> {
        self.type_map.get(name)
    }

    pub fn get_directive(&self, name: &str) -> Option<&Arc<DirectiveType>> {
        self.directives.iter().find(|d| d.name == name)
    }

    /// Object types implementing `interface_name`, in declaration order
    /// (used by executor abstract-type completion and by the validator's
    /// "fragment spread is possible" rule).
    pub fn possible_types(&self, abstract_name: &str) -> Vec<Arc<ObjectType>> {
        if let Some(objs) = self.implementations.get(abstract_name) {
            return objs.clone();
        }
        if let Some(NamedType::Union(u)) = self.get_type(abstract_name) {
            return u.types().clone();
        }
        Vec::new()
    }

    pub fn is_possible_type(&self, abstract_name: &str, object_name: &str) -> bool {
        self.possible_types(abstract_name).iter().any(|t| t.name == object_name)
    }

    /// Runs the schema validator (§4.4) on first call and caches the
    /// result (§3 "Lifecycle... Schemas memoize validation errors on first
    /// call").
    pub fn validate(&self) -> &[SchemaError] {
        self.validation_errors.get_or_init(|| crate::validate::validate_schema(self))
    }

    pub fn all_type_names(&self) -> IndexSet<String> {
        self.type_map.keys().cloned().collect()
    }

    /// Resolves a syntactic type reference (as written in an operation's
    /// variable definitions or in SDL) against this schema's `type_map`.
    /// Returns `None` if the named type isn't in the schema (an "Unknown
    /// type" validation error, not a panic).
    pub fn resolve_ast_type(&self, t: &graphql_lang::ast::Type) -> Option<Type> {
        use graphql_lang::ast;
        Some(match t {
            ast::Type::Named(n) => Type::Named(self.get_type(n.name.as_str())?.clone()),
            ast::Type::List(l) => Type::list(self.resolve_ast_type(&l.inner)?),
            ast::Type::NonNull(n) => {
                let inner: ast::Type = match &n.inner {
                    ast::NullableType::Named(named) => ast::Type::Named(named.clone()),
                    ast::NullableType::List(list) => ast::Type::List(list.clone()),
                };
                Type::non_null(self.resolve_ast_type(&inner)?)
            }
        })
    }
}
