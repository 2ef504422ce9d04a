use crate::host::HostKind;
use crate::host::HostType;
use crate::host::Reflect;
use crate::host::Value;
use std::any::Any;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

/// Request-scoped data handed to resolvers that declare a
/// `&ResolverContext` input.
///
/// Holds the name of the executing operation plus any values the caller
/// attached to the [`Request`](crate::Request), keyed by type.
#[derive(Clone, Default)]
pub struct ResolverContext {
    operation_name: Option<String>,
    values: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl ResolverContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.insert(value);
        self
    }

    /// Stores `value`, replacing any earlier value of the same type.
    pub fn insert<T: Any + Send + Sync>(&mut self, value: T) {
        self.values.insert(TypeId::of::<T>(), Arc::new(value));
    }

    pub fn get<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|value| value.downcast_ref::<T>())
    }

    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }

    pub(crate) fn for_operation(&self, operation_name: Option<&str>) -> Self {
        Self {
            operation_name: operation_name.map(str::to_string),
            values: self.values.clone(),
        }
    }
}

impl std::fmt::Debug for ResolverContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolverContext")
            .field("operation_name", &self.operation_name)
            .field("values", &self.values.len())
            .finish()
    }
}

impl Reflect for ResolverContext {
    fn host_type() -> HostType {
        HostType::of::<ResolverContext>(None, HostKind::Context)
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
