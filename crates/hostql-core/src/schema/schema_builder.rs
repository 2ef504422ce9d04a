use crate::directives::Directive;
use crate::enums::EnumRegistrationError;
use crate::enums::EnumRegistry;
use crate::execution::ExecutionOptions;
use crate::host::HostKind;
use crate::host::Reflect;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaOptions;
use crate::schema::type_graph_builder::TypeGraphBuilder;
use hostql_parser::is_valid_name;
use indexmap::IndexMap;
use std::any::TypeId;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Collects enums, type renames and directives, then builds a [`Schema`]
/// from a query root and a mutation root.
///
/// ```
/// use hostql_core::{HostType, Reflect, SchemaBuilder};
///
/// struct Query {
///     greeting: String,
/// }
///
/// impl Reflect for Query {
///     fn host_type() -> HostType {
///         HostType::object::<Query>("Query")
///             .field("greeting", |q: &Query| &q.greeting)
///             .finish()
///     }
/// }
///
/// struct Mutation;
///
/// impl Reflect for Mutation {
///     fn host_type() -> HostType {
///         HostType::object::<Mutation>("Mutation").finish()
///     }
/// }
///
/// let schema = SchemaBuilder::new()
///     .build(Query { greeting: "hi".to_string() }, Mutation)
///     .unwrap();
/// assert_eq!(schema.query_type_name(), "Query");
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    directives: IndexMap<String, Directive>,
    enums: EnumRegistry,
    execution_options: ExecutionOptions,
    options: SchemaOptions,
    renames: HashMap<TypeId, String>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        let directives = [Directive::skip(), Directive::include()]
            .into_iter()
            .map(|directive| (directive.name().to_string(), directive))
            .collect();
        Self {
            directives,
            enums: EnumRegistry::new(),
            execution_options: ExecutionOptions::default(),
            options: SchemaOptions::default(),
            renames: HashMap::new(),
        }
    }

    pub fn with_options(mut self, options: SchemaOptions) -> Self {
        self.options = options;
        self
    }

    /// Defaults for every [`Executor`](crate::Executor) created from the
    /// built schema.
    pub fn with_execution_options(mut self, options: ExecutionOptions) -> Self {
        self.execution_options = options;
        self
    }

    /// Registers `T` as an enum. See [`EnumRegistry::register()`].
    pub fn register_enum<T, L>(
        &mut self,
        entries: impl IntoIterator<Item = (L, T)>,
    ) -> std::result::Result<bool, EnumRegistrationError>
    where
        T: Reflect,
        L: Into<String>,
    {
        self.enums.register(entries)
    }

    /// Exposes struct or interface `T` under `name` instead of its declared
    /// name.
    pub fn rename_type<T: Reflect>(&mut self, name: impl Into<String>) -> Result<()> {
        let host_type = T::host_type();
        let new_name = name.into();
        let invalid = |reason: &str| SchemaBuildError::InvalidTypeRename {
            rust_name: host_type.rust_name().to_string(),
            new_name: new_name.clone(),
            reason: reason.to_string(),
        };
        if !matches!(host_type.kind(), HostKind::Struct(_) | HostKind::Interface(_)) {
            return Err(invalid("only struct and interface types can be renamed"));
        }
        if host_type.name().is_none() {
            return Err(invalid("only named types can be renamed"));
        }
        if !is_valid_name(&new_name) {
            return Err(invalid("the new name is not a valid name"));
        }
        self.renames.insert(host_type.type_id(), new_name);
        Ok(())
    }

    pub fn register_directive(&mut self, directive: Directive) -> Result<()> {
        let name = directive.name().to_string();
        if !is_valid_name(&name) {
            return Err(SchemaBuildError::InvalidDirectiveName { name });
        }
        if directive.locations().is_empty() {
            return Err(SchemaBuildError::DirectiveWithoutLocations { name });
        }
        if self.directives.contains_key(&name) {
            return Err(SchemaBuildError::DuplicateDirective { name });
        }
        self.directives.insert(name, directive);
        Ok(())
    }

    pub fn build<Q, M>(self, query: Q, mutation: M) -> Result<Schema>
    where
        Q: Reflect + Send + Sync,
        M: Reflect + Send + Sync,
    {
        let query_type = Q::host_type();
        let mutation_type = M::host_type();
        if query_type.type_id() == mutation_type.type_id() && !self.options.allow_identical_roots {
            return Err(SchemaBuildError::IdenticalRootTypes {
                type_name: query_type.display_name().to_string(),
            });
        }

        let mut graph = TypeGraphBuilder::new(&self.enums, &self.renames);
        let query_type_name = graph.register_root("query", &query_type)?;
        let mutation_type_name = graph.register_root("mutation", &mutation_type)?;
        let registry = graph.finish()?;

        log::debug!(
            "built schema: {} object types, {} interfaces, {} input types, {} enums",
            registry.objects.len(),
            registry.interfaces.len(),
            registry.inputs.len(),
            registry.enums.len(),
        );

        Ok(Schema {
            directives: self.directives,
            execution_options: self.execution_options,
            mutation_root: Box::new(mutation),
            mutation_type: mutation_type_name,
            query_root: Box::new(query),
            query_type: query_type_name,
            registry,
        })
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}
