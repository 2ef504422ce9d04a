mod field_tag;
mod host_name;
#[allow(clippy::module_inception)]
mod schema;
mod schema_build_error;
mod schema_builder;
mod schema_options;
mod type_graph_builder;

pub use field_tag::FieldTag;
pub use host_name::format_host_name;
pub use schema::Schema;
pub use schema_build_error::SchemaBuildError;
pub use schema_builder::SchemaBuilder;
pub use schema_options::SchemaOptions;

#[cfg(test)]
mod tests;
