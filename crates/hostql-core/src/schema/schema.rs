use crate::directives::Directive;
use crate::execution::ExecutionOptions;
use crate::execution::Executor;
use crate::execution::Request;
use crate::execution::Response;
use crate::schema::SchemaBuilder;
use crate::types::ObjectType;
use crate::types::TypeRegistry;
use indexmap::IndexMap;
use std::any::Any;

/// An immutable, executable schema: the type registry plus the root values
/// queries and mutations start from.
///
/// `Schema` is `Send + Sync`; any number of threads may execute requests
/// against one instance, each through its own [`Executor`].
pub struct Schema {
    pub(crate) directives: IndexMap<String, Directive>,
    pub(crate) execution_options: ExecutionOptions,
    pub(crate) mutation_root: Box<dyn Any + Send + Sync>,
    pub(crate) mutation_type: String,
    pub(crate) query_root: Box<dyn Any + Send + Sync>,
    pub(crate) query_type: String,
    pub(crate) registry: TypeRegistry,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn query_type_name(&self) -> &str {
        &self.query_type
    }

    pub fn mutation_type_name(&self) -> &str {
        &self.mutation_type
    }

    pub fn query_type(&self) -> Option<&ObjectType> {
        self.registry.object(&self.query_type)
    }

    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.registry.object(&self.mutation_type)
    }

    pub fn directive(&self, name: &str) -> Option<&Directive> {
        self.directives.get(name)
    }

    pub fn directives(&self) -> impl Iterator<Item = &Directive> {
        self.directives.values()
    }

    pub fn execution_options(&self) -> &ExecutionOptions {
        &self.execution_options
    }

    /// Executes one request with a fresh [`Executor`].
    pub fn execute(&self, request: &Request) -> Response {
        Executor::new(self).execute(request).into_response()
    }

    /// Executes one request and returns the JSON response envelope.
    pub fn execute_json(&self, request: &Request) -> String {
        Executor::new(self).execute(request).to_json()
    }

    /// Executes each request independently and returns a JSON array of
    /// response envelopes in request order.
    pub fn execute_batch(&self, requests: &[Request]) -> String {
        let mut out = String::from("[");
        for (index, request) in requests.iter().enumerate() {
            if index > 0 {
                out.push(',');
            }
            Executor::new(self).execute(request).write_json(&mut out);
        }
        out.push(']');
        out
    }
}

impl std::fmt::Debug for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Schema")
            .field("query_type", &self.query_type)
            .field("mutation_type", &self.mutation_type)
            .field("registry", &self.registry)
            .field("directives", &self.directives.keys().collect::<Vec<_>>())
            .finish()
    }
}
