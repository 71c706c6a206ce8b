//! An SDL-built schema, unlike `graphql-exec`'s programmatic fixture: the
//! facade's own tests exercise `build_schema` (§6 collaborator) and the
//! default resolver rather than custom resolver closures, since those are
//! already covered in depth by `graphql-exec`'s test suite.
use graphql_types::{Schema, Value};
use indexmap::IndexMap;

pub fn book_schema() -> Schema {
    graphql_types::build_schema(
        r#"
        type Book {
          title: String!
          author: String
        }

        type Query {
          hello: String!
          book: Book!
        }

        type Mutation {
          noop: Boolean!
        }

        type Subscription {
          ticks: Int!
        }
        "#,
    )
    .expect("fixture schema must build")
}

pub fn root_value() -> Value {
    let mut book = IndexMap::new();
    book.insert("title".to_string(), Value::String("Dune".to_string()));
    book.insert("author".to_string(), Value::String("Frank Herbert".to_string()));

    let mut root = IndexMap::new();
    root.insert("hello".to_string(), Value::String("world".to_string()));
    root.insert("book".to_string(), Value::Object(book));
    Value::Object(root)
}
