use crate::host::HostField;
use crate::host::HostFieldKind;
use crate::host::HostKind;
use crate::host::HostMethod;
use crate::host::HostType;
use crate::host::InterfaceDecl;
use crate::host::Invoker;
use crate::host::Reflect;
use crate::host::ResolverArgs;
use crate::host::ResolverContext;
use crate::host::ResolverReturn;
use crate::host::Signature;
use crate::host::StructDecl;
use crate::host::TypeFn;
use crate::host::Value;
use crate::host::signature::getter;
use crate::host::signature::invoker;
use crate::host::signature::setter;
use std::any::Any;
use std::marker::PhantomData;

impl HostType {
    /// Starts describing struct `T` under the query-facing `name`.
    pub fn object<T: Reflect>(name: impl Into<String>) -> ObjectBuilder<T> {
        ObjectBuilder::new(Some(name.into()))
    }

    /// Starts describing a struct that has no name of its own. The registry
    /// names it `__UnknownType<N>` unless it is renamed.
    pub fn anonymous_object<T: Reflect>() -> ObjectBuilder<T> {
        ObjectBuilder::new(None)
    }

    /// Starts describing interface `I`.
    ///
    /// `I` is usually an enum over its implementations. Its
    /// [`to_value()`](Reflect::to_value) and
    /// [`into_value()`](Reflect::into_value) must forward to the wrapped
    /// value so the engine can see the concrete type.
    pub fn interface<I: Reflect>(name: impl Into<String>) -> InterfaceBuilder<I> {
        InterfaceBuilder::new(Some(name.into()))
    }

    pub fn anonymous_interface<I: Reflect>() -> InterfaceBuilder<I> {
        InterfaceBuilder::new(None)
    }
}

/// Builds the [`HostType`] of struct `T` field by field.
///
/// Field and method names are host names: snake_case names are exposed in
/// camelCase, and methods named `resolve_<name>` become resolver fields
/// named `<name>`.
pub struct ObjectBuilder<T> {
    name: Option<String>,
    decl: StructDecl,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Reflect> ObjectBuilder<T> {
    fn new(name: Option<String>) -> Self {
        Self {
            name,
            decl: StructDecl::default(),
            _marker: PhantomData,
        }
    }

    /// A readable field.
    pub fn field<F: Reflect>(self, name: &str, get: fn(&T) -> &F) -> Self {
        self.push_data(name, F::host_type, Some(get), None, false)
    }

    /// A writable field, for types used as resolver arguments.
    pub fn input<F: Reflect>(self, name: &str, set: fn(&mut T) -> &mut F) -> Self {
        self.push_data(name, F::host_type, None, Some(set), false)
    }

    /// A field that is both readable and writable.
    pub fn field_rw<F: Reflect>(
        self,
        name: &str,
        get: fn(&T) -> &F,
        set: fn(&mut T) -> &mut F,
    ) -> Self {
        self.push_data(name, F::host_type, Some(get), Some(set), false)
    }

    /// An embedded struct whose fields and resolvers are promoted into `T`.
    pub fn embedded<E: Reflect>(self, name: &str, get: fn(&T) -> &E) -> Self {
        self.push_data(name, E::host_type, Some(get), None, true)
    }

    /// Sets the field tag of the most recently added field: `"-"` to hide
    /// it, or `"[name][,id]"` to rename it and/or mark it as an ID.
    pub fn tag(mut self, tag: &str) -> Self {
        if let Some(field) = self.decl.fields.last_mut() {
            field.tag = Some(tag.to_string());
        }
        self
    }

    /// A function-valued field. Always exposed as a resolver under the
    /// field's name.
    pub fn func_field<R: ResolverReturn>(self, name: &str, call: fn(&T) -> R) -> Self {
        let invoker = Self::plain_invoker(call);
        self.push_func(name, Signature::returning::<R>(), invoker)
    }

    pub fn func_field_with_args<A: Reflect, R: ResolverReturn>(
        self,
        name: &str,
        call: fn(&T, A) -> R,
    ) -> Self {
        let invoker = Self::args_invoker(call);
        self.push_func(name, Signature::returning::<R>().input::<A>(), invoker)
    }

    pub fn resolver<R: ResolverReturn>(self, name: &str, f: fn(&T) -> R) -> Self {
        let invoker = Self::plain_invoker(f);
        self.method(name, Signature::returning::<R>(), invoker)
    }

    /// A resolver taking an argument bundle. Query arguments are assigned to
    /// the bundle's fields by name.
    pub fn resolver_with_args<A: Reflect, R: ResolverReturn>(
        self,
        name: &str,
        f: fn(&T, A) -> R,
    ) -> Self {
        let invoker = Self::args_invoker(f);
        self.method(name, Signature::returning::<R>().input::<A>(), invoker)
    }

    pub fn resolver_with_context<R: ResolverReturn>(
        self,
        name: &str,
        f: fn(&T, &ResolverContext) -> R,
    ) -> Self {
        let invoker = invoker(move |receiver: &dyn Any, args: &mut ResolverArgs<'_>| {
            match receiver.downcast_ref::<T>() {
                Some(this) => f(this, args.context()).into_slots(),
                None => Vec::new(),
            }
        });
        self.method(
            name,
            Signature::returning::<R>().input::<ResolverContext>(),
            invoker,
        )
    }

    pub fn resolver_with_context_and_args<A: Reflect, R: ResolverReturn>(
        self,
        name: &str,
        f: fn(&T, &ResolverContext, A) -> R,
    ) -> Self {
        let invoker = invoker(move |receiver: &dyn Any, args: &mut ResolverArgs<'_>| {
            let context = args.context();
            match (receiver.downcast_ref::<T>(), args.take::<A>(1)) {
                (Some(this), Some(bundle)) => f(this, context, bundle).into_slots(),
                _ => Vec::new(),
            }
        });
        self.method(
            name,
            Signature::returning::<R>()
                .input::<ResolverContext>()
                .input::<A>(),
            invoker,
        )
    }

    /// A method with a hand-written signature and invoker.
    pub fn method(mut self, name: &str, signature: Signature, invoker: Invoker) -> Self {
        self.decl.methods.push(HostMethod {
            name: name.to_string(),
            signature,
            invoker: Some(invoker),
        });
        self
    }

    /// A method the engine cannot call but that counts toward interface
    /// satisfaction.
    pub fn method_signature(mut self, name: &str, signature: Signature) -> Self {
        self.decl.methods.push(HostMethod {
            name: name.to_string(),
            signature,
            invoker: None,
        });
        self
    }

    /// Allows `T` to be used as an argument bundle or input object.
    pub fn constructible(mut self) -> Self
    where
        T: Default,
    {
        fn construct<T: Default + Any>() -> Box<dyn Any> {
            Box::new(T::default())
        }
        self.decl.construct = Some(construct::<T>);
        self
    }

    pub fn finish(self) -> HostType {
        HostType::of::<T>(self.name, HostKind::Struct(self.decl))
    }

    fn push_data<F: Reflect>(
        mut self,
        name: &str,
        ty: TypeFn,
        get: Option<fn(&T) -> &F>,
        set: Option<fn(&mut T) -> &mut F>,
        embedded: bool,
    ) -> Self {
        let getter = get.map(|get| {
            getter(move |any: &dyn Any| match any.downcast_ref::<T>() {
                Some(this) => get(this).to_value(),
                None => Value::Null,
            })
        });
        let setter = set.map(|set| {
            setter(move |any: &mut dyn Any, value: Value<'static>| {
                match (any.downcast_mut::<T>(), F::from_value(value)) {
                    (Some(this), Some(value)) => {
                        *set(this) = value;
                        true
                    },
                    _ => false,
                }
            })
        });
        self.decl.fields.push(HostField {
            name: name.to_string(),
            tag: None,
            embedded,
            kind: HostFieldKind::Data { ty, getter, setter },
        });
        self
    }

    fn push_func(mut self, name: &str, signature: Signature, invoker: Invoker) -> Self {
        self.decl.fields.push(HostField {
            name: name.to_string(),
            tag: None,
            embedded: false,
            kind: HostFieldKind::Func { signature, invoker },
        });
        self
    }

    fn plain_invoker<R: ResolverReturn>(f: fn(&T) -> R) -> Invoker {
        invoker(move |receiver: &dyn Any, _args: &mut ResolverArgs<'_>| {
            match receiver.downcast_ref::<T>() {
                Some(this) => f(this).into_slots(),
                None => Vec::new(),
            }
        })
    }

    fn args_invoker<A: Reflect, R: ResolverReturn>(f: fn(&T, A) -> R) -> Invoker {
        invoker(move |receiver: &dyn Any, args: &mut ResolverArgs<'_>| {
            match (receiver.downcast_ref::<T>(), args.take::<A>(0)) {
                (Some(this), Some(bundle)) => f(this, bundle).into_slots(),
                _ => Vec::new(),
            }
        })
    }
}

/// Builds the [`HostType`] of interface `I`: its method set and the struct
/// types implementing it.
pub struct InterfaceBuilder<I> {
    name: Option<String>,
    decl: InterfaceDecl,
    _marker: PhantomData<fn() -> I>,
}

impl<I: Reflect> InterfaceBuilder<I> {
    fn new(name: Option<String>) -> Self {
        Self {
            name,
            decl: InterfaceDecl::default(),
            _marker: PhantomData,
        }
    }

    pub fn method_signature(mut self, name: &str, signature: Signature) -> Self {
        self.decl.methods.push(HostMethod {
            name: name.to_string(),
            signature,
            invoker: None,
        });
        self
    }

    /// Shorthand for a method with no inputs returning `R`.
    pub fn resolver<R: ResolverReturn>(self, name: &str) -> Self {
        self.method_signature(name, Signature::returning::<R>())
    }

    pub fn implemented_by<T: Reflect>(mut self) -> Self {
        self.decl.implementations.push(T::host_type);
        self
    }

    pub fn finish(self) -> HostType {
        HostType::of::<I>(self.name, HostKind::Interface(self.decl))
    }
}
