//! A lexer and recursive-descent parser for hostql query documents.
//!
//! Query documents contain operations (`query`, `mutation`, `subscription`,
//! or the `{ ... }` shorthand) and fragment definitions. The parser reports
//! every error it can find in one pass by recovering at the next top-level
//! definition after a failure.
//!
//! ```
//! use hostql_parser::parse_query;
//!
//! let doc = parse_query("{ user(id: 4) { name } }").unwrap();
//! assert_eq!(doc.definitions.len(), 1);
//! ```

pub mod ast;
mod parse_error;
mod parse_error_kind;
mod query_parser;
mod source_position;
mod string_value;
pub mod token;
pub mod token_source;
mod token_stream;

pub use parse_error::ParseError;
pub use parse_error_kind::ParseErrorKind;
pub use query_parser::MAX_NESTING_DEPTH;
pub use query_parser::QueryParser;
pub use source_position::SourcePosition;
pub use string_value::StringValueError;
pub use token_source::is_valid_name;
pub use token_stream::TokenStream;

/// Parses `source` as a query document.
///
/// Shorthand for `QueryParser::new(source).parse_document()`.
pub fn parse_query(source: &str) -> Result<ast::Document, Vec<ParseError>> {
    QueryParser::new(source).parse_document()
}

#[cfg(test)]
mod tests;
