mod field_tag_tests;
mod schema_builder_tests;
