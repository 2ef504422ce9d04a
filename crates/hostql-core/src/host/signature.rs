use crate::host::IsId;
use crate::host::Reflect;
use crate::host::ResolverContext;
use crate::host::ResolverError;
use crate::host::TypeFn;
use crate::host::Value;
use std::any::Any;
use std::any::TypeId;
use std::sync::Arc;

/// Reads one field of a host object.
pub type Getter = Arc<dyn for<'a> Fn(&'a dyn Any) -> Value<'a> + Send + Sync>;

/// Assigns a coerced value to one field of a host object. Returns `false`
/// when the object or the value has the wrong type.
pub type Setter = Arc<dyn Fn(&mut dyn Any, Value<'static>) -> bool + Send + Sync>;

/// Calls a resolver on a receiver. Returns one slot per declared output.
pub type Invoker =
    Arc<dyn Fn(&dyn Any, &mut ResolverArgs<'_>) -> Vec<ReturnSlot> + Send + Sync>;

pub(crate) fn getter<F>(f: F) -> Getter
where
    F: for<'a> Fn(&'a dyn Any) -> Value<'a> + Send + Sync + 'static,
{
    Arc::new(f)
}

pub(crate) fn setter<F>(f: F) -> Setter
where
    F: Fn(&mut dyn Any, Value<'static>) -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}

pub(crate) fn invoker<F>(f: F) -> Invoker
where
    F: Fn(&dyn Any, &mut ResolverArgs<'_>) -> Vec<ReturnSlot> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Input and output types of a method or function-valued field.
#[derive(Clone, Default)]
pub struct Signature {
    pub(crate) inputs: Vec<TypeFn>,
    pub(crate) outputs: Vec<TypeFn>,
    pub(crate) variadic: bool,
}

impl Signature {
    pub fn new() -> Self {
        Self::default()
    }

    /// The outputs a resolver returning `R` declares.
    pub fn returning<R: ResolverReturn>() -> Self {
        Self {
            outputs: R::output_types(),
            ..Self::default()
        }
    }

    pub fn input<T: Reflect>(mut self) -> Self {
        self.inputs.push(T::host_type);
        self
    }

    pub fn output<T: Reflect>(mut self) -> Self {
        self.outputs.push(T::host_type);
        self
    }

    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    pub fn inputs(&self) -> &[TypeFn] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[TypeFn] {
        &self.outputs
    }

    pub fn is_variadic(&self) -> bool {
        self.variadic
    }

    /// Whether both signatures take and return the same host types.
    pub fn matches(&self, other: &Signature) -> bool {
        fn ids(types: &[TypeFn]) -> Vec<TypeId> {
            types.iter().map(|ty| ty().type_id).collect()
        }
        self.variadic == other.variadic
            && ids(&self.inputs) == ids(&other.inputs)
            && ids(&self.outputs) == ids(&other.outputs)
    }
}

/// One input of a resolver call, in signature order.
pub enum InputSlot {
    Context,
    /// A freshly constructed argument bundle with the query's arguments
    /// assigned to it. Taken by the invoker.
    Bundle(Option<Box<dyn Any>>),
}

/// Inputs handed to an [`Invoker`].
pub struct ResolverArgs<'a> {
    context: &'a ResolverContext,
    slots: Vec<InputSlot>,
}

impl<'a> ResolverArgs<'a> {
    pub fn new(context: &'a ResolverContext, slots: Vec<InputSlot>) -> Self {
        Self { context, slots }
    }

    pub fn context(&self) -> &'a ResolverContext {
        self.context
    }

    /// Moves the argument bundle at `index` out, if it exists and has type
    /// `A`.
    pub fn take<A: Any>(&mut self, index: usize) -> Option<A> {
        match self.slots.get_mut(index) {
            Some(InputSlot::Bundle(slot)) => {
                slot.take()?.downcast::<A>().ok().map(|bundle| *bundle)
            },
            _ => None,
        }
    }
}

/// One output of a resolver call, in signature order.
#[derive(Debug)]
pub enum ReturnSlot {
    Data(Value<'static>),
    Error(Option<ResolverError>),
    Marker,
}

/// Return types a typed resolver may have.
pub trait ResolverReturn: 'static {
    fn output_types() -> Vec<TypeFn>;
    fn into_slots(self) -> Vec<ReturnSlot>;
}

impl<T: Reflect> ResolverReturn for T {
    fn output_types() -> Vec<TypeFn> {
        vec![T::host_type]
    }

    fn into_slots(self) -> Vec<ReturnSlot> {
        vec![ReturnSlot::Data(self.into_value())]
    }
}

impl<T, E> ResolverReturn for Result<T, E>
where
    T: Reflect,
    E: Into<ResolverError> + 'static,
{
    fn output_types() -> Vec<TypeFn> {
        vec![T::host_type, ResolverError::host_type]
    }

    fn into_slots(self) -> Vec<ReturnSlot> {
        match self {
            Ok(value) => vec![ReturnSlot::Data(value.into_value()), ReturnSlot::Error(None)],
            Err(err) => vec![ReturnSlot::Data(Value::Null), ReturnSlot::Error(Some(err.into()))],
        }
    }
}

impl<T: Reflect> ResolverReturn for (T, IsId) {
    fn output_types() -> Vec<TypeFn> {
        vec![T::host_type, IsId::host_type]
    }

    fn into_slots(self) -> Vec<ReturnSlot> {
        vec![ReturnSlot::Data(self.0.into_value()), ReturnSlot::Marker]
    }
}

impl ResolverReturn for () {
    fn output_types() -> Vec<TypeFn> {
        Vec::new()
    }

    fn into_slots(self) -> Vec<ReturnSlot> {
        Vec::new()
    }
}
