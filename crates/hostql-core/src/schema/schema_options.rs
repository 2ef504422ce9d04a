use serde::Deserialize;

/// Options affecting how a [`Schema`](crate::Schema) is built.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemaOptions {
    /// Allow the query and mutation roots to be the same host type.
    pub allow_identical_roots: bool,
}
