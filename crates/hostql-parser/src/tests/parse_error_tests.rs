//! Tests for [`crate::ParseError`] formatting.

use crate::tests::utils::parse_err;

#[test]
fn display_uses_one_based_position() {
    let errors = parse_err("{\n  f(id 4)\n}");
    assert_eq!(
        errors[0].to_string(),
        "expected `:`, found `4` at 2:8",
    );
}

#[test]
fn detailed_format_points_at_column() {
    let source = "{ f(id 4) }";
    let errors = parse_err(source);
    let rendered = errors[0].format_detailed(source);
    assert_eq!(
        rendered,
        "error: expected `:`, found `4`\n  --> 1:8\n   |\n 1 | { f(id 4) }\n   |        ^\n",
    );
}
