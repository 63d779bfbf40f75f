//! Error types for call resolution.

use thiserror::Error;

/// Errors that can abort a `call` before or during the primary invocation.
///
/// `MissingContainer` and `ClassDoesNotExist` are raised while resolving a
/// conventional identifier, always before the service locator is asked to
/// instantiate anything. `Handler` wraps a failure of the resolved handler's
/// own `run` entry point.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CallError {
    /// The named container directory does not exist on disk.
    #[error("Container ({0}) is not installed")]
    MissingContainer(String),

    /// The composed fully-qualified name is not known to the class catalog
    /// or the service locator.
    #[error("Class ({0}) is not installed")]
    ClassDoesNotExist(String),

    /// The identifier uses the separator but is not `container@ClassName`.
    #[error("Malformed identifier ({0}): expected container@ClassName")]
    MalformedIdentifier(String),

    /// The resolved handler's primary entry point failed.
    #[error("Handler error: {0}")]
    Handler(String),
}
