use crate::host::ScalarKind;
use crate::host::Setter;
use indexmap::IndexMap;
use std::any::Any;
use std::any::TypeId;

/// A struct used as an argument bundle or as a nested input object.
#[derive(Clone)]
pub struct InputType {
    pub(crate) name: String,
    pub(crate) type_id: TypeId,
    pub(crate) construct: fn() -> Box<dyn Any>,
    pub(crate) fields: IndexMap<String, InputField>,
}

impl InputType {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn fields(&self) -> &IndexMap<String, InputField> {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&InputField> {
        self.fields.get(name)
    }

    /// A default-initialized instance.
    pub fn construct(&self) -> Box<dyn Any> {
        (self.construct)()
    }
}

impl std::fmt::Debug for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputType")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish()
    }
}

#[derive(Clone)]
pub struct InputField {
    pub(crate) name: String,
    pub(crate) host_name: String,
    pub(crate) kind: InputKind,
    pub(crate) setter: Setter,
}

impl InputField {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    pub fn kind(&self) -> &InputKind {
        &self.kind
    }

    pub(crate) fn assign(&self, target: &mut dyn Any, value: crate::host::Value<'static>) -> bool {
        (self.setter)(target, value)
    }
}

impl std::fmt::Debug for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputField")
            .field("name", &self.name)
            .field("host_name", &self.host_name)
            .field("kind", &self.kind)
            .finish()
    }
}

/// The shape of value an input field accepts.
#[derive(Clone, Debug, PartialEq)]
pub enum InputKind {
    Scalar { kind: ScalarKind, is_id: bool },
    /// A registered enum, assigned through its backing scalar kind.
    Enum { name: String, kind: ScalarKind },
    Time,
    List(Box<InputKind>),
    Optional(Box<InputKind>),
    Object(String),
}
