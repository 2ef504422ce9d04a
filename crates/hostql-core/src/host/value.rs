use chrono::DateTime;
use chrono::Utc;
use std::any::Any;
use std::borrow::Cow;

/// A host value as seen by the engine.
///
/// Values read from fields borrow from the host data they were read from;
/// values produced by resolvers or by argument coercion are `'static`.
#[derive(Debug)]
pub enum Value<'a> {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(Cow<'a, str>),
    Time(DateTime<Utc>),
    List(Vec<Value<'a>>),
    Object(ObjectValue<'a>),
}

impl<'a> Value<'a> {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short description of the value's shape for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) | Value::UInt(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Time(_) => "time",
            Value::List(_) => "list",
            Value::Object(_) => "object",
        }
    }

    pub fn as_object(&self) -> Option<&dyn Any> {
        match self {
            Value::Object(obj) => Some(obj.as_any()),
            _ => None,
        }
    }
}

/// An object-kinded value: either a borrow of host data or an owned value
/// returned from a resolver.
pub enum ObjectValue<'a> {
    Borrowed(&'a dyn Any),
    Owned(Box<dyn Any>),
}

impl<'a> ObjectValue<'a> {
    pub fn as_any(&self) -> &dyn Any {
        match self {
            ObjectValue::Borrowed(any) => *any,
            ObjectValue::Owned(boxed) => boxed.as_ref(),
        }
    }

    /// The borrowed object with its full lifetime, or `None` for an owned
    /// value.
    pub fn into_borrowed(self) -> Option<&'a dyn Any> {
        match self {
            ObjectValue::Borrowed(any) => Some(any),
            ObjectValue::Owned(_) => None,
        }
    }
}

impl std::fmt::Debug for ObjectValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectValue::Borrowed(_) => f.write_str("Borrowed(..)"),
            ObjectValue::Owned(_) => f.write_str("Owned(..)"),
        }
    }
}
