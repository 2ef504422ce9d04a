use crate::host::Invoker;
use crate::types::InputField;
use crate::types::TypeNode;
use indexmap::IndexMap;

/// A resolver: how to call it and how to read its outputs.
#[derive(Clone)]
pub struct MethodDescriptor {
    pub(crate) host_name: String,
    pub(crate) inputs: Vec<MethodInput>,
    pub(crate) arguments: IndexMap<String, ArgumentTarget>,
    pub(crate) output: TypeNode,
    pub(crate) data_slot: usize,
    pub(crate) error_slot: Option<usize>,
    pub(crate) invoker: Invoker,
}

impl MethodDescriptor {
    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    pub fn inputs(&self) -> &[MethodInput] {
        &self.inputs
    }

    /// Query arguments the resolver accepts, by name.
    pub fn arguments(&self) -> &IndexMap<String, ArgumentTarget> {
        &self.arguments
    }

    pub fn output(&self) -> &TypeNode {
        &self.output
    }

    pub fn data_slot(&self) -> usize {
        self.data_slot
    }

    pub fn error_slot(&self) -> Option<usize> {
        self.error_slot
    }
}

impl std::fmt::Debug for MethodDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodDescriptor")
            .field("host_name", &self.host_name)
            .field("inputs", &self.inputs)
            .field("arguments", &self.arguments.keys().collect::<Vec<_>>())
            .field("output", &self.output)
            .field("data_slot", &self.data_slot)
            .field("error_slot", &self.error_slot)
            .finish()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MethodInput {
    Context,
    /// An argument bundle of the named input type.
    Bundle { input_type: String },
}

/// Where a query argument is assigned: a field of the bundle at
/// `input_index`.
#[derive(Clone, Debug)]
pub struct ArgumentTarget {
    pub(crate) input_index: usize,
    pub(crate) field: InputField,
}

impl ArgumentTarget {
    pub fn input_index(&self) -> usize {
        self.input_index
    }

    pub fn field(&self) -> &InputField {
        &self.field
    }
}
