mod parse_error_tests;
mod utils;
