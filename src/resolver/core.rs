//! # Core Resolver
//!
//! This module defines the resolution engine and the collaborator contracts
//! it is wired with.
//!
//! ## Key Types
//!
//! - [`Instantiator`]: the service locator that turns a lookup key into a
//!   handler instance.
//! - [`ClassCatalog`]: answers whether a fully-qualified name is registered.
//! - [`ContainerProbe`]: answers whether a container directory exists.
//! - [`Resolver`]: the single linear pipeline from identifier to result.
//!
//! The resolver itself holds no per-call state; every `call` is independent
//! and reentrant.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, instrument};

use crate::convention::{CallTarget, Conventions};

use super::error::CallError;
use super::handler::{ExtraMethod, ExtraOutcome, Handler};

/// Service locator producing handler instances for lookup keys.
///
/// How instances are constructed and wired is the locator's own business;
/// the resolver treats it as a black box. The in-memory
/// [`HandlerRegistry`](crate::registry::HandlerRegistry) is the default
/// implementation.
pub trait Instantiator: Send + Sync {
    fn make(&self, key: &str) -> Result<Arc<dyn Handler>, CallError>;
}

/// Catalog of registered fully-qualified names, consulted before
/// instantiation of a conventionally-addressed class.
pub trait ClassCatalog: Send + Sync {
    fn class_exists(&self, full_name: &str) -> bool;
}

/// Filesystem collaborator used for container-presence validation.
pub trait ContainerProbe: Send + Sync {
    fn directory_exists(&self, path: &Path) -> bool;
}

/// Resolves call identifiers to handlers and drives the invocation pipeline.
///
/// A call runs as a single pass: parse the identifier, validate it against
/// the convention (conventional style only), obtain an instance from the
/// service locator, invoke the auxiliary methods in order, then invoke `run`
/// and return its result. Any resolution error aborts the call before the
/// primary invocation happens.
pub struct Resolver {
    conventions: Conventions,
    instantiator: Arc<dyn Instantiator>,
    catalog: Arc<dyn ClassCatalog>,
    probe: Arc<dyn ContainerProbe>,
}

impl Resolver {
    pub fn new(
        conventions: Conventions,
        instantiator: Arc<dyn Instantiator>,
        catalog: Arc<dyn ClassCatalog>,
        probe: Arc<dyn ContainerProbe>,
    ) -> Self {
        Self {
            conventions,
            instantiator,
            catalog,
            probe,
        }
    }

    pub fn conventions(&self) -> &Conventions {
        &self.conventions
    }

    /// Resolves `identifier`, invokes the auxiliary methods in order, then
    /// invokes the handler's primary entry point with `run_args`.
    #[instrument(skip(self, run_args, extra_methods))]
    pub async fn call(
        &self,
        identifier: &str,
        run_args: &[Value],
        extra_methods: &[ExtraMethod],
    ) -> Result<Value, CallError> {
        let handler = self.resolve(identifier)?;
        self.call_extra_methods(handler.as_ref(), extra_methods).await;
        handler.run(run_args).await.map_err(CallError::Handler)
    }

    /// Turns an identifier into a handler instance.
    ///
    /// Conventional identifiers are validated (container directory, then
    /// class catalog) before the locator is consulted. Raw identifiers skip
    /// validation entirely and only earn an advisory log line.
    fn resolve(&self, identifier: &str) -> Result<Arc<dyn Handler>, CallError> {
        let key = match CallTarget::parse(identifier)? {
            CallTarget::Conventional { container, class } => {
                self.verify_container_exists(&container)?;
                let full_name = self.conventions.class_full_name(&container, &class);
                self.verify_class_exists(&full_name)?;
                full_name
            }
            CallTarget::Raw(raw) => {
                debug!(
                    identifier = %raw,
                    "It is recommended to use the container@ClassName caller style"
                );
                raw
            }
        };
        debug!(key = %key, "Resolved lookup key");
        self.instantiator.make(&key)
    }

    fn verify_container_exists(&self, container_name: &str) -> Result<(), CallError> {
        let dir = self.conventions.container_dir(container_name);
        if !self.probe.directory_exists(&dir) {
            return Err(CallError::MissingContainer(container_name.to_string()));
        }
        Ok(())
    }

    fn verify_class_exists(&self, full_name: &str) -> Result<(), CallError> {
        if !self.catalog.class_exists(full_name) {
            return Err(CallError::ClassDoesNotExist(full_name.to_string()));
        }
        Ok(())
    }

    /// Dispatches each auxiliary method spec in order, before the primary
    /// call. Methods the handler does not implement are skipped; return
    /// values of handled methods are discarded.
    async fn call_extra_methods(&self, handler: &dyn Handler, extra_methods: &[ExtraMethod]) {
        for spec in extra_methods {
            match handler.extra(spec.method(), spec.args()).await {
                ExtraOutcome::Handled => {
                    debug!(method = spec.method(), "Extra method handled");
                }
                ExtraOutcome::NotFound => {
                    debug!(method = spec.method(), "Extra method not implemented, skipping");
                }
            }
        }
    }
}
