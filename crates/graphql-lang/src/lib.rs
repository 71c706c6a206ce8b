//! Lexing, parsing, AST traversal, and printing for GraphQL documents and
//! schema definition language (§4.1, §4.2, §4.3, §4.9).
//!
//! This crate has no notion of a GraphQL *type system*; it operates purely
//! on source text and the syntax tree. Schema construction and validation
//! live in `graphql-types` and `graphql-validate`, which depend on this
//! crate for their AST.

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod position;
pub mod printer;
pub mod source;
pub mod token;
pub mod utilities;
pub mod visitor;

pub use error::GraphQLSyntaxError;
pub use parser::{parse_document, parse_type, parse_value, ParseOptions};
pub use printer::print;
pub use source::{LocationOffset, Source};
