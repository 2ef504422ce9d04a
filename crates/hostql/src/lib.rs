//! Serve GraphQL-style queries straight from Rust host types.
//!
//! Describe the host types reachable from a query root and a mutation root
//! by implementing [`Reflect`], build a [`Schema`] once, then execute as many
//! requests against it as needed, from as many threads as needed.
//!
//! ```
//! use hostql::{HostType, Reflect, Request, SchemaBuilder};
//!
//! struct Foo {
//!     bar: String,
//! }
//!
//! impl Reflect for Foo {
//!     fn host_type() -> HostType {
//!         HostType::object::<Foo>("Foo")
//!             .field("bar", |f: &Foo| &f.bar)
//!             .finish()
//!     }
//! }
//!
//! struct Query {
//!     a: Foo,
//! }
//!
//! impl Reflect for Query {
//!     fn host_type() -> HostType {
//!         HostType::object::<Query>("Query")
//!             .field("a", |q: &Query| &q.a)
//!             .finish()
//!     }
//! }
//!
//! struct Mutation;
//!
//! impl Reflect for Mutation {
//!     fn host_type() -> HostType {
//!         HostType::object::<Mutation>("Mutation").finish()
//!     }
//! }
//!
//! let query = Query { a: Foo { bar: "baz".to_string() } };
//! let schema = SchemaBuilder::new().build(query, Mutation).unwrap();
//! assert_eq!(
//!     schema.execute_json(&Request::new("{a {bar}}")),
//!     r#"{"data":{"a":{"bar":"baz"}},"errors":[],"extensions":{}}"#,
//! );
//! ```

pub use hostql_core::*;

/// The query document lexer and parser.
pub mod parser {
    pub use hostql_parser::*;
}

#[cfg(test)]
mod tests;
