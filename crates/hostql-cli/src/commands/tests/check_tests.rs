use crate::commands::check::check_source;
use crate::commands::check::normalize_exts;
use crate::commands::check::read_document;
use std::path::Path;

#[test]
fn extensions_are_normalized() {
    let exts = normalize_exts(&[
        ".graphql".to_string(),
        "GQL".to_string(),
        " ".to_string(),
    ]);
    assert_eq!(exts.len(), 2);
    assert!(exts.contains("graphql"));
    assert!(exts.contains("gql"));
}

#[test]
fn valid_documents_are_counted() {
    let report = check_source(
        Path::new("ok.graphql"),
        "query A { ...f } mutation B { x } fragment f on Q { y }",
    );
    assert!(report.errors.is_empty(), "{:?}", report.errors);
    assert_eq!(report.operations, 2);
    assert_eq!(report.fragments, 1);
    assert!(report.document.is_some());
}

#[test]
fn syntax_errors_name_the_file() {
    let report = check_source(Path::new("bad.graphql"), "{ f(id 4) }");
    assert!(report.document.is_none());
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].starts_with("bad.graphql: error: expected `:`, found `4`"));
}

#[test]
fn document_errors_are_reported() {
    let report = check_source(
        Path::new("cycle.graphql"),
        "{ ...a } fragment a on Q { ...b } fragment b on Q { ...a }",
    );
    assert!(report.document.is_none());
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].starts_with("cycle.graphql: Fragment cycle detected"));
}

#[tokio::test]
async fn unreadable_files_name_the_path() {
    let err = read_document(Path::new("no/such/dir/missing.graphql"))
        .await
        .expect_err("missing file");
    assert!(format!("{err:#}").starts_with("no/such/dir/missing.graphql: could not be read: "));
}
