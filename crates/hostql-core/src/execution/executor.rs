use crate::directives::DirectiveArguments;
use crate::directives::DirectiveLocation;
use crate::directives::DirectiveModifier;
use crate::execution::ErrorLocation;
use crate::execution::ExecutionError;
use crate::execution::ExecutionOptions;
use crate::execution::PathSegment;
use crate::execution::Request;
use crate::execution::ResponseRef;
use crate::execution::coercion;
use crate::host::Getter;
use crate::host::InputSlot;
use crate::host::ResolverArgs;
use crate::host::ResolverContext;
use crate::host::ReturnSlot;
use crate::host::Value;
use crate::json;
use crate::operation::DocumentError;
use crate::operation::ExecutableDocument;
use crate::schema::Schema;
use crate::types::FieldAccessor;
use crate::types::InterfaceType;
use crate::types::MethodDescriptor;
use crate::types::MethodInput;
use crate::types::ObjectType;
use crate::types::TypeNode;
use crate::types::TypeRegistry;
use hostql_parser::MAX_NESTING_DEPTH;
use hostql_parser::QueryParser;
use hostql_parser::SourcePosition;
use hostql_parser::ast;
use hostql_parser::ast::OperationKind;
use smallvec::SmallVec;
use std::any::Any;

/// A field's outcome. `Err` carries the message recorded for the field,
/// whose value is then replaced by `null`.
type FieldResult<T = ()> = std::result::Result<T, String>;

/// Executes requests against one [`Schema`], reusing its buffers between
/// requests.
///
/// An executor is meant to be owned by one thread and fed one request at a
/// time. The [`ResponseRef`] returned by [`execute()`](Self::execute)
/// borrows the executor's buffers until the next call.
///
/// ```
/// # use hostql_core::{Executor, HostType, Reflect, Request, Schema};
/// struct Query { greeting: String }
/// impl Reflect for Query {
///     fn host_type() -> HostType {
///         HostType::object::<Query>("Query")
///             .field("greeting", |q: &Query| &q.greeting)
///             .finish()
///     }
/// }
/// struct Mutation;
/// impl Reflect for Mutation {
///     fn host_type() -> HostType {
///         HostType::object::<Mutation>("Mutation").finish()
///     }
/// }
///
/// let schema = Schema::builder()
///     .build(Query { greeting: "hi".to_string() }, Mutation)
///     .unwrap();
/// let mut executor = Executor::new(&schema);
/// let response = executor.execute(&Request::new("{ greeting }"));
/// assert_eq!(response.data(), r#"{"greeting":"hi"}"#);
/// ```
pub struct Executor<'schema> {
    schema: &'schema Schema,
    options: ExecutionOptions,
    buffer: String,
    errors: Vec<ExecutionError>,
    path: SmallVec<[PathSegment; 16]>,
}

/// State shared by every field of one operation.
struct Run<'doc> {
    document: &'doc ExecutableDocument,
    context: ResolverContext,
}

/// The type a selection set is evaluated against. Inside a fragment on an
/// interface only that interface's fields are selectable.
#[derive(Clone, Copy)]
struct Scope<'s> {
    object: &'s ObjectType,
    interface: Option<&'s InterfaceType>,
}

impl<'s> Scope<'s> {
    fn object(object: &'s ObjectType) -> Self {
        Self {
            object,
            interface: None,
        }
    }

    /// The scope inside a fragment on `condition`, or `None` when the
    /// fragment does not apply to this object.
    fn narrow(self, registry: &'s TypeRegistry, condition: &str) -> Option<Self> {
        if condition == self.object.name() {
            return Some(Self::object(self.object));
        }
        if !self.object.implements(condition) {
            return None;
        }
        registry.interface(condition).map(|interface| Self {
            object: self.object,
            interface: Some(interface),
        })
    }
}

impl<'schema> Executor<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self::with_options(schema, schema.execution_options().clone())
    }

    pub fn with_options(schema: &'schema Schema, options: ExecutionOptions) -> Self {
        Self {
            schema,
            options,
            buffer: String::new(),
            errors: Vec::new(),
            path: SmallVec::new(),
        }
    }

    pub fn options(&self) -> &ExecutionOptions {
        &self.options
    }

    /// Clears the previous response, keeping the allocated buffers.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.errors.clear();
        self.path.clear();
    }

    /// Parses, validates and executes `request`.
    pub fn execute(&mut self, request: &Request) -> ResponseRef<'_> {
        self.reset();
        let parser = QueryParser::new(&request.query).with_max_depth(self.parse_depth_limit());
        match parser.parse_document() {
            Ok(document) => match ExecutableDocument::from_ast(document) {
                Ok(document) => self.run_document(
                    &document,
                    request.operation_name.as_deref(),
                    &request.context,
                ),
                Err(errors) => self.fail(errors.iter().map(document_error)),
            },
            Err(errors) => self.fail(errors.iter().map(ExecutionError::from)),
        }
        self.response()
    }

    /// Executes an operation of an already validated document.
    pub fn execute_document(
        &mut self,
        document: &ExecutableDocument,
        operation_name: Option<&str>,
        context: &ResolverContext,
    ) -> ResponseRef<'_> {
        self.reset();
        self.run_document(document, operation_name, context);
        self.response()
    }

    /// Queries may nest up to `MAX_NESTING_DEPTH` levels past `max_depth`
    /// and still reach the depth guard instead of failing to parse.
    fn parse_depth_limit(&self) -> usize {
        self.options.max_depth.saturating_add(MAX_NESTING_DEPTH)
    }

    fn response(&self) -> ResponseRef<'_> {
        ResponseRef::new(&self.buffer, &self.errors)
    }

    /// Ends the request with `null` data.
    fn fail(&mut self, errors: impl IntoIterator<Item = ExecutionError>) {
        self.buffer.clear();
        self.buffer.push_str("null");
        self.errors.extend(errors);
    }

    fn run_document(
        &mut self,
        document: &ExecutableDocument,
        operation_name: Option<&str>,
        context: &ResolverContext,
    ) {
        let operation = match document.select_operation(operation_name) {
            Ok(Some(operation)) => operation,
            Ok(None) => {
                self.buffer.push_str("{}");
                return;
            },
            Err(err) => {
                self.fail([document_error(&err)]);
                return;
            },
        };

        let schema = self.schema;
        let (root, type_name, location) = match operation.kind {
            OperationKind::Query => {
                (&schema.query_root, &schema.query_type, DirectiveLocation::Query)
            },
            OperationKind::Mutation => (
                &schema.mutation_root,
                &schema.mutation_type,
                DirectiveLocation::Mutation,
            ),
            OperationKind::Subscription => {
                self.fail([
                    ExecutionError::new("subscriptions are not supported").at(operation.position)
                ]);
                return;
            },
        };
        let root: &dyn Any = &**root;

        for directive in &operation.directives {
            if let Err(message) = self.apply_directive(directive, location) {
                self.record_error(message, Some(directive.position));
            }
        }

        let Some(object_type) = schema.registry.object(type_name) else {
            self.fail([ExecutionError::new(format!(
                "root type `{type_name}` is not registered",
            ))]);
            return;
        };

        log::debug!(
            "executing {} `{}`",
            operation.kind,
            operation.name.as_deref().unwrap_or("<anonymous>"),
        );
        let run = Run {
            document,
            context: context.for_operation(operation.name.as_deref()),
        };
        if let Err(message) = self.write_selection_set(
            &run,
            &operation.selection_set,
            root,
            Scope::object(object_type),
            0,
        ) {
            let position = operation.selection_set.position;
            self.buffer.clear();
            self.buffer.push_str("null");
            self.record_error(message, Some(position));
        }
    }

    fn write_selection_set(
        &mut self,
        run: &Run<'_>,
        set: &ast::SelectionSet,
        object: &dyn Any,
        scope: Scope<'schema>,
        depth: usize,
    ) -> FieldResult {
        if depth >= self.options.max_depth {
            return Err(format!(
                "selection depth exceeds the maximum of {}",
                self.options.max_depth,
            ));
        }
        self.buffer.push('{');
        let mut first = true;
        self.write_selections(run, set, object, scope, depth, &mut first);
        self.buffer.push('}');
        Ok(())
    }

    /// Writes the members of `set`, splicing fragments into the current
    /// object.
    fn write_selections(
        &mut self,
        run: &Run<'_>,
        set: &ast::SelectionSet,
        object: &dyn Any,
        scope: Scope<'schema>,
        depth: usize,
        first: &mut bool,
    ) {
        let schema = self.schema;
        let registry = &schema.registry;
        for selection in &set.items {
            match selection {
                ast::Selection::Field(field) => {
                    if self.included(&field.directives, DirectiveLocation::Field) {
                        self.write_field(run, field, object, scope, depth, first);
                    }
                },
                ast::Selection::FragmentSpread(spread) => {
                    if !self.included(&spread.directives, DirectiveLocation::FragmentSpread) {
                        continue;
                    }
                    let Some(fragment) = run.document.fragment(&spread.fragment_name) else {
                        self.record_error(
                            format!("unknown fragment `{}`", spread.fragment_name),
                            Some(spread.position),
                        );
                        continue;
                    };
                    if !self.included(&fragment.directives, DirectiveLocation::FragmentDefinition)
                    {
                        continue;
                    }
                    if let Some(scope) = scope.narrow(registry, &fragment.type_condition) {
                        self.write_selections(
                            run,
                            &fragment.selection_set,
                            object,
                            scope,
                            depth,
                            first,
                        );
                    }
                },
                ast::Selection::InlineFragment(inline) => {
                    if !self.included(&inline.directives, DirectiveLocation::InlineFragment) {
                        continue;
                    }
                    let scope = match &inline.type_condition {
                        Some(condition) => match scope.narrow(registry, condition) {
                            Some(scope) => scope,
                            None => continue,
                        },
                        None => scope,
                    };
                    self.write_selections(run, &inline.selection_set, object, scope, depth, first);
                },
            }
        }
    }

    /// Applies `directives`; `false` when one of them skips the selection.
    /// Failing directives are recorded and otherwise ignored.
    fn included(&mut self, directives: &[ast::Directive], location: DirectiveLocation) -> bool {
        let mut include = true;
        for directive in directives {
            match self.apply_directive(directive, location) {
                Ok(DirectiveModifier::Skip) => include = false,
                Ok(DirectiveModifier::Keep) => {},
                Err(message) => self.record_error(message, Some(directive.position)),
            }
        }
        include
    }

    fn apply_directive(
        &self,
        directive: &ast::Directive,
        location: DirectiveLocation,
    ) -> FieldResult<DirectiveModifier> {
        let Some(definition) = self.schema.directive(&directive.name) else {
            return Err(format!("unknown directive `@{}`", directive.name));
        };
        if !definition.allowed_at(location) {
            return Err(format!(
                "directive `@{}` may not be used on {location}",
                directive.name,
            ));
        }
        let arguments = DirectiveArguments::from_ast(&directive.arguments)
            .map_err(|err| format!("directive `@{}`: {err}", directive.name))?;
        definition
            .apply(&arguments)
            .map_err(|err| format!("directive `@{}`: {err}", directive.name))
    }

    fn write_field(
        &mut self,
        run: &Run<'_>,
        field: &ast::Field,
        object: &dyn Any,
        scope: Scope<'schema>,
        depth: usize,
        first: &mut bool,
    ) {
        if !*first {
            self.buffer.push(',');
        }
        *first = false;
        let key = field.response_key();
        json::write_str(&mut self.buffer, key);
        self.buffer.push(':');

        self.path.push(PathSegment::Field(key.to_string()));
        let mark = self.buffer.len();
        if let Err(message) = self.write_field_value(run, field, object, scope, depth) {
            self.buffer.truncate(mark);
            self.buffer.push_str("null");
            self.record_error(message, Some(field.position));
        }
        self.path.pop();
    }

    fn write_field_value(
        &mut self,
        run: &Run<'_>,
        field: &ast::Field,
        object: &dyn Any,
        scope: Scope<'schema>,
        depth: usize,
    ) -> FieldResult {
        if field.name == "__typename" {
            expect_leaf(field)?;
            json::write_str(&mut self.buffer, scope.object.name());
            return Ok(());
        }
        if let Some(interface) = scope.interface {
            if interface.field(&field.name).is_none() {
                return Err(unknown_field(field, interface.name()));
            }
        }
        let Some(descriptor) = scope.object.field(&field.name) else {
            return Err(unknown_field(field, scope.object.name()));
        };

        match (descriptor.accessor(), descriptor.node()) {
            (FieldAccessor::Data(getters), node) => {
                for argument in &field.arguments {
                    self.record_error(
                        format!("unknown argument `{}` on field `{}`", argument.name, field.name),
                        Some(argument.position),
                    );
                }
                let value = read_field(object, getters);
                self.write_value(run, field, node, value, depth)
            },
            (FieldAccessor::Method { receiver }, TypeNode::Method(method)) => {
                let Some(receiver) = follow(object, receiver) else {
                    self.buffer.push_str("null");
                    return Ok(());
                };
                let value = self.invoke(run, field, method, receiver)?;
                self.write_value(run, field, &method.output, value, depth)
            },
            (FieldAccessor::Method { .. }, _) => Err(format!(
                "field `{}` has no resolver",
                field.name,
            )),
        }
    }

    fn write_value(
        &mut self,
        run: &Run<'_>,
        field: &ast::Field,
        node: &TypeNode,
        value: Value<'_>,
        depth: usize,
    ) -> FieldResult {
        let schema = self.schema;
        match node {
            TypeNode::Optional(_) | TypeNode::List(_) if value.is_null() => {
                self.buffer.push_str("null");
                Ok(())
            },
            TypeNode::Optional(inner) => self.write_value(run, field, inner, value, depth),
            TypeNode::List(inner) => {
                let Value::List(items) = value else {
                    return Err(format!("expected a list, found {}", value.kind_name()));
                };
                self.buffer.push('[');
                for (index, item) in items.into_iter().enumerate() {
                    if index > 0 {
                        self.buffer.push(',');
                    }
                    self.path.push(PathSegment::Index(index));
                    let mark = self.buffer.len();
                    if let Err(message) = self.write_value(run, field, inner, item, depth) {
                        self.buffer.truncate(mark);
                        self.buffer.push_str("null");
                        self.record_error(message, Some(field.position));
                    }
                    self.path.pop();
                }
                self.buffer.push(']');
                Ok(())
            },
            TypeNode::Scalar { kind, is_id } => {
                expect_leaf(field)?;
                json::write_scalar(&mut self.buffer, &value, *kind, *is_id)
                    .map_err(|err| err.to_string())
            },
            TypeNode::Time => {
                expect_leaf(field)?;
                match value {
                    Value::Time(time) => json::write_time(&mut self.buffer, &time),
                    Value::Null => self.buffer.push_str("null"),
                    other => return Err(format!("expected a time, found {}", other.kind_name())),
                }
                Ok(())
            },
            TypeNode::Enum(name) => {
                expect_leaf(field)?;
                if value.is_null() {
                    self.buffer.push_str("null");
                    return Ok(());
                }
                let Some(enum_type) = schema.registry.enums().get(name) else {
                    return Err(format!("enum `{name}` is not registered"));
                };
                let Some(label) = enum_type.label(&value) else {
                    return Err(format!("value is not a member of enum `{name}`"));
                };
                json::write_str(&mut self.buffer, label);
                Ok(())
            },
            TypeNode::ObjectRef(name) => {
                let selection = expect_selection(field, name)?;
                if value.is_null() {
                    self.buffer.push_str("null");
                    return Ok(());
                }
                let Some(object_type) = schema.registry.object(name) else {
                    return Err(format!("type `{name}` is not registered"));
                };
                let Some(object) = value.as_object() else {
                    return Err(format!("expected an object, found {}", value.kind_name()));
                };
                self.write_selection_set(run, selection, object, Scope::object(object_type), depth + 1)
            },
            TypeNode::InterfaceRef(name) => {
                let selection = expect_selection(field, name)?;
                if value.is_null() {
                    self.buffer.push_str("null");
                    return Ok(());
                }
                let Some(interface) = schema.registry.interface(name) else {
                    return Err(format!("interface `{name}` is not registered"));
                };
                let Some(object) = value.as_object() else {
                    return Err(format!("expected an object, found {}", value.kind_name()));
                };
                let Some(object_type) = schema
                    .registry
                    .object_for_type((*object).type_id())
                    .filter(|object_type| object_type.implements(name))
                else {
                    return Err(format!(
                        "value of interface `{name}` is not one of its implementations",
                    ));
                };
                let scope = Scope {
                    object: object_type,
                    interface: Some(interface),
                };
                self.write_selection_set(run, selection, object, scope, depth + 1)
            },
            TypeNode::Method(method) => self.write_value(run, field, &method.output, value, depth),
        }
    }

    /// Calls a resolver with the field's arguments and returns its data
    /// output.
    fn invoke(
        &mut self,
        run: &Run<'_>,
        field: &ast::Field,
        method: &MethodDescriptor,
        receiver: &dyn Any,
    ) -> FieldResult<Value<'static>> {
        let schema = self.schema;
        let registry = &schema.registry;
        let mut slots = Vec::with_capacity(method.inputs.len());
        for input in &method.inputs {
            slots.push(match input {
                MethodInput::Context => InputSlot::Context,
                MethodInput::Bundle { input_type } => {
                    let Some(input) = registry.input(input_type) else {
                        return Err(format!("input type `{input_type}` is not registered"));
                    };
                    InputSlot::Bundle(Some(input.construct()))
                },
            });
        }

        for argument in &field.arguments {
            let Some(target) = method.arguments.get(&argument.name) else {
                self.record_error(
                    format!("unknown argument `{}` on field `{}`", argument.name, field.name),
                    Some(argument.position),
                );
                continue;
            };
            let Some(InputSlot::Bundle(Some(bundle))) = slots.get_mut(target.input_index) else {
                continue;
            };
            coercion::assign(registry, &target.field, bundle.as_mut(), &argument.value)
                .map_err(|err| format!("argument `{}`: {err}", argument.name))?;
        }

        let mut args = ResolverArgs::new(&run.context, slots);
        let mut outputs = (method.invoker)(receiver, &mut args);

        let error = match method.error_slot.and_then(|index| outputs.get_mut(index)) {
            Some(ReturnSlot::Error(error)) => error.take(),
            _ => None,
        };
        if let Some(error) = error {
            if self.options.resolver_error_nulls_field {
                return Err(error.to_string());
            }
            self.record_error(error.to_string(), Some(field.position));
        }

        match outputs.get_mut(method.data_slot) {
            Some(ReturnSlot::Data(value)) => Ok(std::mem::replace(value, Value::Null)),
            _ => Err(format!("resolver `{}` returned no value", method.host_name)),
        }
    }

    fn record_error(&mut self, message: String, position: Option<SourcePosition>) {
        log::trace!("execution error: {message}");
        self.errors.push(ExecutionError {
            message,
            path: self.path.to_vec(),
            locations: position.into_iter().map(ErrorLocation::from).collect(),
        });
    }
}

fn document_error(err: &DocumentError) -> ExecutionError {
    let error = ExecutionError::new(err.to_string());
    match err.position() {
        Some(position) => error.at(position),
        None => error,
    }
}

fn unknown_field(field: &ast::Field, type_name: &str) -> String {
    format!("field `{}` does not exist on type `{type_name}`", field.name)
}

fn expect_leaf(field: &ast::Field) -> FieldResult {
    match field.selection_set {
        Some(_) => Err(format!(
            "field `{}` has no fields to select; remove its selection set",
            field.name,
        )),
        None => Ok(()),
    }
}

fn expect_selection<'f>(field: &'f ast::Field, type_name: &str) -> FieldResult<&'f ast::SelectionSet> {
    field.selection_set.as_ref().ok_or_else(|| {
        format!(
            "field `{}` of type `{type_name}` must have a selection set",
            field.name,
        )
    })
}

/// Follows a chain of getters to an embedded object. `None` when a link is
/// missing, such as an unset optional embedded struct.
fn follow<'a>(object: &'a dyn Any, getters: &[Getter]) -> Option<&'a dyn Any> {
    let mut current = object;
    for getter in getters {
        match getter(current) {
            Value::Object(embedded) => current = embedded.into_borrowed()?,
            _ => return None,
        }
    }
    Some(current)
}

fn read_field<'a>(object: &'a dyn Any, getters: &[Getter]) -> Value<'a> {
    let Some((last, chain)) = getters.split_last() else {
        return Value::Null;
    };
    match follow(object, chain) {
        Some(target) => last(target),
        None => Value::Null,
    }
}
