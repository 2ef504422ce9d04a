//! The type graph a [`Schema`](crate::Schema) executes against.
//!
//! Built once by the [`SchemaBuilder`](crate::SchemaBuilder) and read-only
//! afterwards.

mod field_descriptor;
mod input_type;
mod interface_type;
mod method_descriptor;
mod object_type;
mod type_node;
mod type_registry;

pub use field_descriptor::FieldAccessor;
pub use field_descriptor::FieldDescriptor;
pub use input_type::InputField;
pub use input_type::InputKind;
pub use input_type::InputType;
pub use interface_type::InterfaceField;
pub use interface_type::InterfaceType;
pub use method_descriptor::ArgumentTarget;
pub use method_descriptor::MethodDescriptor;
pub use method_descriptor::MethodInput;
pub use object_type::ObjectType;
pub use type_node::TypeNode;
pub use type_registry::TypeRegistry;
