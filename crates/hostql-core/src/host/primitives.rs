use crate::host::HostKind;
use crate::host::HostType;
use crate::host::Reflect;
use crate::host::ScalarKind;
use crate::host::Value;
use chrono::DateTime;
use chrono::Utc;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::collections::HashMap;

impl Reflect for String {
    fn host_type() -> HostType {
        HostType::scalar::<String>(ScalarKind::String)
    }

    fn to_value(&self) -> Value<'_> {
        Value::String(Cow::Borrowed(self))
    }

    fn into_value(self) -> Value<'static> {
        Value::String(Cow::Owned(self))
    }

    fn from_value(value: Value<'static>) -> Option<Self> {
        match value {
            Value::String(s) => Some(s.into_owned()),
            _ => None,
        }
    }
}

/// Static strings can be read and returned but not assigned from query
/// arguments.
impl Reflect for &'static str {
    fn host_type() -> HostType {
        HostType::scalar::<&'static str>(ScalarKind::String)
    }

    fn to_value(&self) -> Value<'_> {
        Value::String(Cow::Borrowed(self))
    }

    fn into_value(self) -> Value<'static> {
        Value::String(Cow::Borrowed(self))
    }

    fn from_value(value: Value<'static>) -> Option<Self> {
        match value {
            Value::String(Cow::Borrowed(s)) => Some(s),
            _ => None,
        }
    }
}

impl Reflect for bool {
    fn host_type() -> HostType {
        HostType::scalar::<bool>(ScalarKind::Bool)
    }

    fn to_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }

    fn into_value(self) -> Value<'static> {
        Value::Bool(self)
    }

    fn from_value(value: Value<'static>) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }
}

macro_rules! reflect_signed {
    ($($ty:ty => $kind:ident),* $(,)?) => {$(
        impl Reflect for $ty {
            fn host_type() -> HostType {
                HostType::scalar::<$ty>(ScalarKind::$kind)
            }

            fn to_value(&self) -> Value<'_> {
                Value::Int(*self as i64)
            }

            fn into_value(self) -> Value<'static> {
                Value::Int(self as i64)
            }

            fn from_value(value: Value<'static>) -> Option<Self> {
                match value {
                    Value::Int(i) => <$ty>::try_from(i).ok(),
                    Value::UInt(u) => <$ty>::try_from(u).ok(),
                    _ => None,
                }
            }
        }
    )*};
}

macro_rules! reflect_unsigned {
    ($($ty:ty => $kind:ident),* $(,)?) => {$(
        impl Reflect for $ty {
            fn host_type() -> HostType {
                HostType::scalar::<$ty>(ScalarKind::$kind)
            }

            fn to_value(&self) -> Value<'_> {
                Value::UInt(*self as u64)
            }

            fn into_value(self) -> Value<'static> {
                Value::UInt(self as u64)
            }

            fn from_value(value: Value<'static>) -> Option<Self> {
                match value {
                    Value::Int(i) => <$ty>::try_from(i).ok(),
                    Value::UInt(u) => <$ty>::try_from(u).ok(),
                    _ => None,
                }
            }
        }
    )*};
}

reflect_signed!(i8 => I8, i16 => I16, i32 => I32, i64 => I64, isize => Isize);
reflect_unsigned!(u8 => U8, u16 => U16, u32 => U32, u64 => U64, usize => Usize);

impl Reflect for f32 {
    fn host_type() -> HostType {
        HostType::scalar::<f32>(ScalarKind::F32)
    }

    fn to_value(&self) -> Value<'_> {
        Value::Float(*self as f64)
    }

    fn into_value(self) -> Value<'static> {
        Value::Float(self as f64)
    }

    fn from_value(value: Value<'static>) -> Option<Self> {
        match value {
            Value::Float(f) => Some(f as f32),
            _ => None,
        }
    }
}

impl Reflect for f64 {
    fn host_type() -> HostType {
        HostType::scalar::<f64>(ScalarKind::F64)
    }

    fn to_value(&self) -> Value<'_> {
        Value::Float(*self)
    }

    fn into_value(self) -> Value<'static> {
        Value::Float(self)
    }

    fn from_value(value: Value<'static>) -> Option<Self> {
        match value {
            Value::Float(f) => Some(f),
            _ => None,
        }
    }
}

impl Reflect for DateTime<Utc> {
    fn host_type() -> HostType {
        HostType::of::<DateTime<Utc>>(None, HostKind::Time)
    }

    fn to_value(&self) -> Value<'_> {
        Value::Time(*self)
    }

    fn into_value(self) -> Value<'static> {
        Value::Time(self)
    }

    fn from_value(value: Value<'static>) -> Option<Self> {
        match value {
            Value::Time(t) => Some(t),
            _ => None,
        }
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn host_type() -> HostType {
        HostType::of::<Vec<T>>(None, HostKind::List(T::host_type))
    }

    fn to_value(&self) -> Value<'_> {
        Value::List(self.iter().map(Reflect::to_value).collect())
    }

    fn into_value(self) -> Value<'static> {
        Value::List(self.into_iter().map(Reflect::into_value).collect())
    }

    fn from_value(value: Value<'static>) -> Option<Self> {
        match value {
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            _ => None,
        }
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn host_type() -> HostType {
        HostType::of::<Option<T>>(None, HostKind::Optional(T::host_type))
    }

    fn to_value(&self) -> Value<'_> {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }

    fn into_value(self) -> Value<'static> {
        match self {
            Some(value) => value.into_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: Value<'static>) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            value => T::from_value(value).map(Some),
        }
    }
}

/// Boxes are transparent: a `Box<T>` is described as `T`.
impl<T: Reflect> Reflect for Box<T> {
    fn host_type() -> HostType {
        T::host_type()
    }

    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }

    fn into_value(self) -> Value<'static> {
        (*self).into_value()
    }

    fn from_value(value: Value<'static>) -> Option<Self> {
        T::from_value(value).map(Box::new)
    }
}

impl<K: 'static, V: 'static> Reflect for HashMap<K, V> {
    fn host_type() -> HostType {
        HostType::unsupported::<HashMap<K, V>>("map")
    }
}

impl<K: 'static, V: 'static> Reflect for BTreeMap<K, V> {
    fn host_type() -> HostType {
        HostType::unsupported::<BTreeMap<K, V>>("map")
    }
}
