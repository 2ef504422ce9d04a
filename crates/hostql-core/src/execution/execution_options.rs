use serde::Deserialize;

/// Knobs for request execution. Deserializable so hosts can keep them in a
/// config file next to their other settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ExecutionOptions {
    /// Selection sets nested deeper than this are replaced by `null` with an
    /// error. The executor's parser accepts nesting up to
    /// `max_depth + MAX_NESTING_DEPTH` so such queries reach the guard.
    pub max_depth: usize,

    /// When a resolver returns an error, also null the field's value rather
    /// than writing the data the resolver returned alongside it.
    pub resolver_error_nulls_field: bool,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self {
            max_depth: 255,
            resolver_error_nulls_field: false,
        }
    }
}
