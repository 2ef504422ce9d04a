use crate::directives::Directive;
use crate::directives::DirectiveArguments;
use crate::directives::DirectiveLocation;
use crate::directives::DirectiveModifier;
use hostql_parser::SourcePosition;
use hostql_parser::ast;

fn args(value: ast::Value) -> DirectiveArguments {
    [("if".to_string(), value)].into_iter().collect()
}

#[test]
fn skip_and_include() {
    let skip = Directive::skip();
    let include = Directive::include();
    assert_eq!(skip.apply(&args(ast::Value::Boolean(true))), Ok(DirectiveModifier::Skip));
    assert_eq!(skip.apply(&args(ast::Value::Boolean(false))), Ok(DirectiveModifier::Keep));
    assert_eq!(include.apply(&args(ast::Value::Boolean(true))), Ok(DirectiveModifier::Keep));
    assert_eq!(include.apply(&args(ast::Value::Boolean(false))), Ok(DirectiveModifier::Skip));
}

#[test]
fn builtin_locations() {
    let skip = Directive::skip();
    assert!(skip.allowed_at(DirectiveLocation::Field));
    assert!(skip.allowed_at(DirectiveLocation::InlineFragment));
    assert!(!skip.allowed_at(DirectiveLocation::Query));
}

#[test]
fn missing_or_mistyped_if() {
    let skip = Directive::skip();
    assert_eq!(
        skip.apply(&DirectiveArguments::default()),
        Err("argument `if` is required".to_string()),
    );
    assert_eq!(
        skip.apply(&args(ast::Value::Int(1))),
        Err("argument `if` must be a boolean, found int".to_string()),
    );
}

#[test]
fn variables_are_rejected() {
    let arguments = vec![ast::Argument {
        name: "if".to_string(),
        value: ast::Value::Variable("flag".to_string()),
        position: SourcePosition::default(),
    }];
    let err = DirectiveArguments::from_ast(&arguments).unwrap_err();
    assert!(err.contains("$flag"), "{err}");
}

#[test]
fn custom_handlers() {
    let hidden = Directive::new(
        "hidden",
        vec![DirectiveLocation::Field],
        |args| match args.get("reason") {
            Some(ast::Value::String(_)) => Ok(DirectiveModifier::Skip),
            _ => Err("a reason is required".to_string()),
        },
    );
    let with_reason: DirectiveArguments =
        [("reason".to_string(), ast::Value::String("x".to_string()))]
            .into_iter()
            .collect();
    assert_eq!(hidden.name(), "hidden");
    assert_eq!(hidden.apply(&with_reason), Ok(DirectiveModifier::Skip));
    assert!(hidden.apply(&DirectiveArguments::default()).is_err());
}
