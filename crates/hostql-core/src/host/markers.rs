use crate::host::HostKind;
use crate::host::HostType;
use crate::host::Reflect;
use crate::host::Value;

/// Error returned by a resolver.
///
/// Any `std::error::Error` converts into it, so resolvers returning
/// `Result<T, E>` can use `?` freely.
pub struct ResolverError {
    message: String,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ResolverError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source(&self) -> Option<&(dyn std::error::Error + Send + Sync)> {
        self.source.as_deref()
    }
}

impl<E> From<E> for ResolverError
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self {
            message: error.to_string(),
            source: Some(Box::new(error)),
        }
    }
}

impl std::fmt::Display for ResolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::fmt::Debug for ResolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolverError")
            .field("message", &self.message)
            .field("has_source", &self.source.is_some())
            .finish()
    }
}

impl Reflect for ResolverError {
    fn host_type() -> HostType {
        HostType::of::<ResolverError>(None, HostKind::ErrorMarker)
    }

    fn to_value(&self) -> Value<'_> {
        Value::Null
    }

    fn into_value(self) -> Value<'static> {
        Value::Null
    }

    fn from_value(_value: Value<'static>) -> Option<Self> {
        None
    }
}

/// Output marker flagging a resolver's data output as an ID.
///
/// A resolver returning `(T, IsId)` behaves like a field tagged `,id`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct IsId;

impl Reflect for IsId {
    fn host_type() -> HostType {
        HostType::of::<IsId>(None, HostKind::IdMarker)
    }

    fn to_value(&self) -> Value<'_> {
        Value::Null
    }

    fn into_value(self) -> Value<'static> {
        Value::Null
    }

    fn from_value(_value: Value<'static>) -> Option<Self> {
        Some(IsId)
    }
}
