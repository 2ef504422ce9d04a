use crate::schema::FieldTag;
use crate::schema::SchemaBuildError;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn parse(tag: Option<&str>) -> Result<FieldTag> {
    FieldTag::parse("User", "field", tag)
}

#[test]
fn untagged_fields() -> Result<()> {
    assert_eq!(parse(None)?, FieldTag::default());
    Ok(())
}

#[test]
fn excluded_fields() -> Result<()> {
    assert!(parse(Some("-"))?.excluded);
    Ok(())
}

#[test]
fn names_and_ids() -> Result<()> {
    assert_eq!(parse(Some("login"))?, FieldTag {
        name: Some("login".to_string()),
        is_id: false,
        excluded: false,
    });
    assert_eq!(parse(Some(",id"))?, FieldTag {
        name: None,
        is_id: true,
        excluded: false,
    });
    assert_eq!(parse(Some("key, id"))?.name.as_deref(), Some("key"));
    Ok(())
}

#[test]
fn invalid_tags() {
    assert_eq!(
        parse(Some("two words")),
        Err(SchemaBuildError::InvalidFieldTag {
            type_name: "User".to_string(),
            field_name: "field".to_string(),
            tag: "two words".to_string(),
            reason: "`two words` is not a valid name".to_string(),
        }),
    );
    assert!(matches!(
        parse(Some("name,loud")),
        Err(SchemaBuildError::InvalidFieldTag { reason, .. }) if reason == "unknown modifier `loud`",
    ));
}
