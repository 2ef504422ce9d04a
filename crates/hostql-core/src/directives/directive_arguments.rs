use hostql_parser::ast;
use indexmap::IndexMap;

/// The literal arguments of one directive application.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectiveArguments {
    values: IndexMap<String, ast::Value>,
}

impl DirectiveArguments {
    /// Collects `arguments`, rejecting variable references.
    pub fn from_ast(arguments: &[ast::Argument]) -> Result<Self, String> {
        let mut values = IndexMap::with_capacity(arguments.len());
        for argument in arguments {
            if let ast::Value::Variable(name) = &argument.value {
                return Err(format!(
                    "variable `${name}` cannot be used as a directive argument; \
                    variables are not supported",
                ));
            }
            values.insert(argument.name.clone(), argument.value.clone());
        }
        Ok(Self { values })
    }

    pub fn get(&self, name: &str) -> Option<&ast::Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// A required boolean argument.
    pub fn bool(&self, name: &str) -> Result<bool, String> {
        match self.values.get(name) {
            Some(ast::Value::Boolean(value)) => Ok(*value),
            Some(other) => Err(format!(
                "argument `{name}` must be a boolean, found {}",
                other.kind_name(),
            )),
            None => Err(format!("argument `{name}` is required")),
        }
    }
}

impl FromIterator<(String, ast::Value)> for DirectiveArguments {
    fn from_iter<I: IntoIterator<Item = (String, ast::Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
