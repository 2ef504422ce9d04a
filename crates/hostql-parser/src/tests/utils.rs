//! Shared helpers for parser tests.

use crate::ast;
use crate::parse_query;
use crate::ParseError;

pub fn parse_ok(source: &str) -> ast::Document {
    match parse_query(source) {
        Ok(doc) => doc,
        Err(errors) => panic!("expected `{source}` to parse, got: {errors:#?}"),
    }
}

pub fn parse_err(source: &str) -> Vec<ParseError> {
    match parse_query(source) {
        Ok(doc) => panic!("expected `{source}` to fail, got: {doc:#?}"),
        Err(errors) => errors,
    }
}

pub fn only_operation(doc: &ast::Document) -> &ast::OperationDefinition {
    let ops: Vec<_> = doc.operations().collect();
    assert_eq!(ops.len(), 1, "expected exactly one operation");
    ops[0]
}

pub fn first_field(selection_set: &ast::SelectionSet) -> &ast::Field {
    match selection_set.items.first() {
        Some(ast::Selection::Field(field)) => field,
        other => panic!("expected a field, got: {other:?}"),
    }
}

/// Parses `{ f(arg: <literal>) }` and returns the argument value.
pub fn arg_value(literal: &str) -> ast::Value {
    let doc = parse_ok(&format!("{{ f(arg: {literal}) }}"));
    let op = only_operation(&doc);
    first_field(&op.selection_set).arguments[0].value.clone()
}
