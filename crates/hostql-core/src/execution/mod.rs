//! Executing operations against a [`Schema`](crate::Schema).
//!
//! An [`Executor`] walks the selected operation's selection sets over live
//! host data and writes the `data` JSON directly into a reusable buffer.
//! Errors are scoped to the field that produced them: the field's value is
//! replaced by `null` and an [`ExecutionError`] is recorded.

mod coercion;
mod execution_error;
mod execution_options;
mod executor;
mod request;
mod response;

pub use execution_error::ErrorLocation;
pub use execution_error::ExecutionError;
pub use execution_error::PathSegment;
pub use execution_options::ExecutionOptions;
pub use executor::Executor;
pub use request::Request;
pub use response::Response;
pub use response::ResponseRef;

#[cfg(test)]
mod tests;
