//! The handler contract and the auxiliary-method call specs.
//!
//! A resolvable class is anything implementing [`Handler`]: one required
//! `run` entry point plus an optional `extra` dispatch hook with a default
//! implementation that declines every method. Handlers that want to expose
//! auxiliary lifecycle methods (an `init`, a `configure`, ...) override
//! `extra` and answer [`ExtraOutcome::Handled`] for the names they know.

use async_trait::async_trait;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Contract every resolvable handler implements.
///
/// `run` is the primary entry point; its arguments arrive positionally and
/// its result is returned to the caller unchanged. Errors are plain strings,
/// wrapped into [`CallError::Handler`](super::CallError::Handler) at the
/// resolver boundary.
#[async_trait]
pub trait Handler: Send + Sync + fmt::Debug {
    /// The primary entry point.
    async fn run(&self, args: &[Value]) -> Result<Value, String>;

    /// Dispatches a named auxiliary method.
    ///
    /// The default implementation recognizes nothing, which makes every
    /// auxiliary call a silent skip. Return values of handled methods are
    /// discarded by the resolver.
    async fn extra(&self, method: &str, args: &[Value]) -> ExtraOutcome {
        let _ = (method, args);
        ExtraOutcome::NotFound
    }
}

/// Outcome of an auxiliary-method dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraOutcome {
    /// The handler recognized and executed the method.
    Handled,
    /// The handler does not implement the method; the step is skipped.
    NotFound,
}

/// Specification of one auxiliary method call: a bare method name (invoked
/// with no arguments) or a method name with a positional argument list.
///
/// The serialized form is a plain string or a single-entry map:
///
/// ```json
/// ["init", {"configure": [1, 2]}, {"setLimit": 5}]
/// ```
///
/// A scalar in the argument position is coerced to a one-element list, so
/// `{"setLimit": 5}` means `setLimit(5)`. Maps with zero or several entries
/// are rejected at deserialization time.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtraMethod {
    /// Invoke the method with no arguments.
    Bare(String),
    /// Invoke the method with the given positional arguments.
    WithArgs { method: String, args: Vec<Value> },
}

impl ExtraMethod {
    pub fn bare(method: impl Into<String>) -> Self {
        ExtraMethod::Bare(method.into())
    }

    pub fn with_args(method: impl Into<String>, args: Vec<Value>) -> Self {
        ExtraMethod::WithArgs {
            method: method.into(),
            args,
        }
    }

    pub fn method(&self) -> &str {
        match self {
            ExtraMethod::Bare(method) => method,
            ExtraMethod::WithArgs { method, .. } => method,
        }
    }

    pub fn args(&self) -> &[Value] {
        match self {
            ExtraMethod::Bare(_) => &[],
            ExtraMethod::WithArgs { args, .. } => args,
        }
    }
}

impl Serialize for ExtraMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ExtraMethod::Bare(method) => serializer.serialize_str(method),
            ExtraMethod::WithArgs { method, args } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(method, args)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for ExtraMethod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ExtraMethodVisitor)
    }
}

struct ExtraMethodVisitor;

impl<'de> Visitor<'de> for ExtraMethodVisitor {
    type Value = ExtraMethod;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a method name or a single-entry map of method name to arguments")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(ExtraMethod::Bare(value.to_string()))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let (method, value): (String, Value) = access
            .next_entry()?
            .ok_or_else(|| de::Error::invalid_length(0, &"a single-entry map"))?;
        if access.next_entry::<String, Value>()?.is_some() {
            return Err(de::Error::custom(
                "expected a single-entry map of method name to arguments",
            ));
        }
        let args = match value {
            Value::Array(args) => args,
            other => vec![other],
        };
        Ok(ExtraMethod::WithArgs { method, args })
    }
}

/// Serialized form of one call: the identifier plus its run arguments and
/// auxiliary method specs. This is the shape request payloads and queued
/// invocations carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRequest {
    pub identifier: String,
    #[serde(default)]
    pub run_args: Vec<Value>,
    #[serde(default)]
    pub extra_methods: Vec<ExtraMethod>,
}

impl CallRequest {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            run_args: Vec::new(),
            extra_methods: Vec::new(),
        }
    }
}
