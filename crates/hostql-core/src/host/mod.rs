//! Describing host (Rust) types to the engine.
//!
//! A type takes part in a schema by implementing [`Reflect`]. Its
//! [`HostType`] says what kind of value it is and, for structs and
//! interfaces, which fields and methods the engine may read or call.
//! Nothing here touches the type graph yet; that happens when a
//! [`SchemaBuilder`](crate::schema::SchemaBuilder) walks the descriptions.

mod host_type;
mod markers;
mod object_builder;
mod primitives;
mod resolver_context;
mod signature;
mod value;

pub use host_type::HostField;
pub use host_type::HostFieldKind;
pub use host_type::HostKind;
pub use host_type::HostMethod;
pub use host_type::HostType;
pub use host_type::InterfaceDecl;
pub use host_type::ScalarKind;
pub use host_type::StructDecl;
pub use host_type::TypeFn;
pub use markers::IsId;
pub use markers::ResolverError;
pub use object_builder::InterfaceBuilder;
pub use object_builder::ObjectBuilder;
pub use resolver_context::ResolverContext;
pub use signature::Getter;
pub use signature::InputSlot;
pub use signature::Invoker;
pub use signature::ResolverArgs;
pub use signature::ResolverReturn;
pub use signature::ReturnSlot;
pub use signature::Setter;
pub use signature::Signature;
pub use value::ObjectValue;
pub use value::Value;

use std::any::Any;

/// A host type the engine can read, call into or construct.
///
/// Struct types usually only implement [`host_type()`](Reflect::host_type);
/// the defaults hand the value to the engine as an opaque object and get it
/// back by downcasting. Scalar-like types (including enums registered with
/// an [`EnumRegistry`](crate::EnumRegistry)) override the conversions.
///
/// ```
/// use hostql_core::{HostType, Reflect};
///
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// impl Reflect for User {
///     fn host_type() -> HostType {
///         HostType::object::<User>("User")
///             .field("name", |u: &User| &u.name)
///             .field("age", |u: &User| &u.age)
///             .finish()
///     }
/// }
///
/// assert_eq!(User::host_type().name(), Some("User"));
/// ```
pub trait Reflect: Any + Sized {
    fn host_type() -> HostType;

    fn to_value(&self) -> Value<'_> {
        Value::Object(ObjectValue::Borrowed(self))
    }

    fn into_value(self) -> Value<'static> {
        Value::Object(ObjectValue::Owned(Box::new(self)))
    }

    fn from_value(value: Value<'static>) -> Option<Self> {
        match value {
            Value::Object(ObjectValue::Owned(boxed)) => {
                boxed.downcast::<Self>().ok().map(|boxed| *boxed)
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
