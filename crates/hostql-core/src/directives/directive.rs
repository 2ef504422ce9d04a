use crate::directives::DirectiveArguments;
use std::sync::Arc;

/// Decides what a directive does with the selection it is attached to.
/// An `Err` becomes a field error and the directive is ignored.
pub type DirectiveHandler =
    Arc<dyn Fn(&DirectiveArguments) -> Result<DirectiveModifier, String> + Send + Sync>;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
}

impl DirectiveLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveLocation::Query => "QUERY",
            DirectiveLocation::Mutation => "MUTATION",
            DirectiveLocation::Subscription => "SUBSCRIPTION",
            DirectiveLocation::Field => "FIELD",
            DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocation::VariableDefinition => "VARIABLE_DEFINITION",
        }
    }
}

impl std::fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DirectiveModifier {
    Keep,
    Skip,
}

#[derive(Clone)]
pub struct Directive {
    name: String,
    locations: Vec<DirectiveLocation>,
    handler: DirectiveHandler,
}

impl Directive {
    pub fn new<F>(name: impl Into<String>, locations: Vec<DirectiveLocation>, handler: F) -> Self
    where
        F: Fn(&DirectiveArguments) -> Result<DirectiveModifier, String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            locations,
            handler: Arc::new(handler),
        }
    }

    /// `@skip(if: Boolean!)`
    pub fn skip() -> Self {
        Self::new("skip", selection_locations(), |args| {
            Ok(if args.bool("if")? {
                DirectiveModifier::Skip
            } else {
                DirectiveModifier::Keep
            })
        })
    }

    /// `@include(if: Boolean!)`
    pub fn include() -> Self {
        Self::new("include", selection_locations(), |args| {
            Ok(if args.bool("if")? {
                DirectiveModifier::Keep
            } else {
                DirectiveModifier::Skip
            })
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn locations(&self) -> &[DirectiveLocation] {
        &self.locations
    }

    pub fn allowed_at(&self, location: DirectiveLocation) -> bool {
        self.locations.contains(&location)
    }

    pub fn apply(&self, args: &DirectiveArguments) -> Result<DirectiveModifier, String> {
        (self.handler)(args)
    }
}

impl std::fmt::Debug for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Directive")
            .field("name", &self.name)
            .field("locations", &self.locations)
            .finish()
    }
}

fn selection_locations() -> Vec<DirectiveLocation> {
    vec![
        DirectiveLocation::Field,
        DirectiveLocation::FragmentSpread,
        DirectiveLocation::InlineFragment,
    ]
}
