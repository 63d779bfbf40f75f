//! Call identifier parsing.
//!
//! A call identifier is either `container@ClassName` (the conventional style)
//! or a bare lookup name used verbatim. Parsing is strict: anything with a
//! separator that is not exactly `container@ClassName` is rejected up front,
//! before any collaborator is consulted.

use crate::resolver::CallError;

/// Separator between the container and class segments of an identifier.
pub const SEPARATOR: char = '@';

/// A parsed call identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallTarget {
    /// `container@ClassName`, resolved through the naming convention.
    /// The container segment is stored with its first letter capitalized.
    Conventional { container: String, class: String },
    /// A bare lookup name, passed through to the service locator unchanged.
    Raw(String),
}

impl CallTarget {
    /// Parses an identifier.
    ///
    /// Identifiers without a separator are `Raw`. Identifiers with a
    /// separator must have exactly two non-empty segments; a second
    /// separator or an empty segment is a [`CallError::MalformedIdentifier`].
    pub fn parse(identifier: &str) -> Result<Self, CallError> {
        match identifier.split_once(SEPARATOR) {
            None => Ok(CallTarget::Raw(identifier.to_string())),
            Some((container, class)) => {
                if container.is_empty() || class.is_empty() || class.contains(SEPARATOR) {
                    return Err(CallError::MalformedIdentifier(identifier.to_string()));
                }
                Ok(CallTarget::Conventional {
                    container: capitalize_first_letter(container),
                    class: class.to_string(),
                })
            }
        }
    }
}

/// Upper-cases the first letter of a string, leaving the rest untouched.
pub fn capitalize_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
