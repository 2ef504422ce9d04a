use crate::host::ResolverContext;
use serde::Deserialize;

/// One query to execute.
///
/// Deserializes from the usual transport shape:
///
/// ```
/// # use hostql_core::Request;
/// let request: Request = serde_json::from_str(
///     r#"{"query": "query A { a }", "operationName": "A"}"#,
/// ).unwrap();
/// assert_eq!(request.operation_name.as_deref(), Some("A"));
/// ```
///
/// `variables` are accepted but not supported: a `$variable` used as an
/// argument is a field error.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub query: String,
    #[serde(default)]
    pub operation_name: Option<String>,
    #[serde(default)]
    pub variables: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(skip)]
    pub context: ResolverContext,
}

impl Request {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    /// Attaches a value resolvers can read from their
    /// [`ResolverContext`].
    pub fn context_value<T: std::any::Any + Send + Sync>(mut self, value: T) -> Self {
        self.context.insert(value);
        self
    }

    pub fn with_context(mut self, context: ResolverContext) -> Self {
        self.context = context;
        self
    }
}
