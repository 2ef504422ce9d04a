use crate::schema::SchemaBuildError;
use hostql_parser::is_valid_name;

/// A parsed field tag: `"-"` hides the field, otherwise `"[name][,id]"`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldTag {
    pub name: Option<String>,
    pub is_id: bool,
    pub excluded: bool,
}

impl FieldTag {
    pub fn parse(
        type_name: &str,
        field_name: &str,
        tag: Option<&str>,
    ) -> Result<Self, SchemaBuildError> {
        let Some(tag) = tag else {
            return Ok(Self::default());
        };
        if tag == "-" {
            return Ok(Self {
                excluded: true,
                ..Self::default()
            });
        }

        let invalid = |reason: String| SchemaBuildError::InvalidFieldTag {
            type_name: type_name.to_string(),
            field_name: field_name.to_string(),
            tag: tag.to_string(),
            reason,
        };

        let mut parts = tag.split(',');
        let name = parts.next().unwrap_or_default().trim();
        let name = if name.is_empty() {
            None
        } else if is_valid_name(name) {
            Some(name.to_string())
        } else {
            return Err(invalid(format!("`{name}` is not a valid name")));
        };

        let mut is_id = false;
        for modifier in parts {
            match modifier.trim() {
                "id" => is_id = true,
                other => return Err(invalid(format!("unknown modifier `{other}`"))),
            }
        }

        Ok(Self {
            name,
            is_id,
            excluded: false,
        })
    }
}
