use graphql_lang::ast::Location;

/// Errors raised while building or validating a [`crate::Schema`] (§4.4,
/// §7 error kind 2). The schema validator aggregates these rather than
/// short-circuiting on the first failure.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SchemaError {
    #[error("Invalid name \"{name}\": {reason}")]
    InvalidName { name: String, reason: String },

    #[error("{message}")]
    Located { message: String, locations: Vec<Location> },

    #[error("Schema must have a \"Query\" type, found none.")]
    MissingQueryType,

    #[error("Query root type must be Object type, it cannot be {type_name}.")]
    RootMustBeObject { type_name: String },

    #[error("Mutation root type must be Object type, it cannot be {type_name}.")]
    MutationRootMustBeObject { type_name: String },

    #[error("Subscription root type must be Object type, it cannot be {type_name}.")]
    SubscriptionRootMustBeObject { type_name: String },

    #[error("Type \"{name}\" must define one or more fields.")]
    NoFields { name: String },

    #[error("Union type \"{name}\" must define one or more member types.")]
    NoUnionMembers { name: String },

    #[error("Union type \"{union_name}\" can only include Object types, it cannot include {member_name}.")]
    InvalidUnionMember { union_name: String, member_name: String },

    #[error("Enum type \"{name}\" must define one or more values.")]
    NoEnumValues { name: String },

    #[error(
        "Type \"{object}\" does not implement interface \"{interface}\": field \"{field}\" is missing."
    )]
    InterfaceFieldMissing { object: String, interface: String, field: String },

    #[error(
        "Type \"{object}\" does not implement interface \"{interface}\": field \"{field}\" expects type \"{expected}\" but \"{object}.{field}\" is type \"{actual}\"."
    )]
    InterfaceFieldTypeMismatch {
        object: String,
        interface: String,
        field: String,
        expected: String,
        actual: String,
    },

    #[error(
        "Type \"{object}\" does not implement interface \"{interface}\": argument \"{arg}\" on field \"{field}\" expects type \"{expected}\" but \"{object}.{field}({arg}:)\" is type \"{actual}\"."
    )]
    InterfaceArgTypeMismatch {
        object: String,
        interface: String,
        field: String,
        arg: String,
        expected: String,
        actual: String,
    },

    #[error(
        "Type \"{object}\" does not implement interface \"{interface}\": argument \"{arg}\" on field \"{field}\" is missing."
    )]
    InterfaceArgMissing { object: String, interface: String, field: String, arg: String },

    #[error(
        "Object field \"{object}.{field}\" includes required argument \"{arg}\" that is missing from the Interface field \"{interface}.{field}\"."
    )]
    InterfaceArgNewRequired { object: String, interface: String, field: String, arg: String },

    #[error("Type \"{interface}\" cannot implement itself because it would create a circular reference.")]
    SelfImplementingInterface { interface: String },

    #[error(
        "Type \"{interface}\" cannot implement \"{implemented}\" because it would create a circular reference."
    )]
    CircularInterfaceImplementation { interface: String, implemented: String },

    #[error(
        "Interface field \"{interface}.{field}\" expected but \"{object}\" does not implement \"{transitive}\", which it should transitively."
    )]
    TransitiveInterfaceNotImplemented { object: String, interface: String, transitive: String, field: String },

    #[error("Cannot reference Input Object \"{name}\" within itself through a series of non-null fields: \"{path}\".")]
    CircularInputObject { name: String, path: String },

    #[error("Unknown type \"{name}\" referenced by {context}.")]
    UnknownType { name: String, context: String },

    #[error("The type of {context} must be Output type but got: {type_name}.")]
    MustBeOutputType { context: String, type_name: String },

    #[error("The type of {context} must be Input type but got: {type_name}.")]
    MustBeInputType { context: String, type_name: String },

    #[error("Type names must be unique, found duplicate of \"{name}\".")]
    DuplicateTypeName { name: String },

    #[error("Directive \"@{name}\" already defined.")]
    DuplicateDirective { name: String },

    #[error("Argument \"@{directive}({arg}:)\" can only be defined once.")]
    DuplicateDirectiveArgument { directive: String, arg: String },

    #[error("The argument \"@{directive}({arg}:)\" must have an Input type but got: {type_name}.")]
    DirectiveArgMustBeInputType { directive: String, arg: String, type_name: String },
}
