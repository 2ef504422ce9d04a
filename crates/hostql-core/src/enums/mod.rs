//! Enum registration: mapping named scalar host types onto labelled query
//! enums.

mod enum_registration_error;
mod enum_registry;

pub use enum_registration_error::EnumRegistrationError;
pub use enum_registry::EnumKey;
pub use enum_registry::EnumRegistry;
pub use enum_registry::EnumType;
