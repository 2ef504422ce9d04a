//! Core of `hostql`: describes host types to the engine, builds a
//! [`TypeRegistry`](types::TypeRegistry) from those descriptions and executes
//! parsed query documents against live host data.
//!
//! Host types opt in by implementing [`Reflect`](host::Reflect). A
//! [`SchemaBuilder`](schema::SchemaBuilder) walks the descriptions reachable
//! from the query and mutation roots and produces an immutable
//! [`Schema`](schema::Schema) that any number of threads can execute requests
//! against.

pub mod directives;
pub mod enums;
pub mod execution;
pub mod host;
pub mod json;
pub mod operation;
pub mod schema;
pub mod types;

pub use directives::Directive;
pub use directives::DirectiveLocation;
pub use enums::EnumRegistry;
pub use execution::ExecutionError;
pub use execution::ExecutionOptions;
pub use execution::Executor;
pub use execution::Request;
pub use execution::Response;
pub use host::HostType;
pub use host::IsId;
pub use host::Reflect;
pub use host::ResolverContext;
pub use host::ResolverError;
pub use host::ScalarKind;
pub use host::Signature;
pub use host::Value;
pub use schema::Schema;
pub use schema::SchemaBuildError;
pub use schema::SchemaBuilder;
pub use schema::SchemaOptions;
