//! Query directives such as `@skip` and `@include`.

mod directive;
mod directive_arguments;

pub use directive::Directive;
pub use directive::DirectiveHandler;
pub use directive::DirectiveLocation;
pub use directive::DirectiveModifier;
pub use directive_arguments::DirectiveArguments;

#[cfg(test)]
mod tests;
