mod object_builder_tests;
mod reflect_tests;
