//! Wiring: assembling a ready-to-use resolver.
//!
//! [`Porto`] is the assembled system: an owned [`HandlerRegistry`] acting as
//! both service locator and class catalog, a real filesystem probe, and the
//! convention configuration, all wired into a [`Resolver`]. Applications
//! that bring their own service locator construct a [`Resolver`] directly
//! instead.

pub mod tracing;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;

use crate::convention::Conventions;
use crate::registry::HandlerRegistry;
use crate::resolver::{
    CallError, CallRequest, ClassCatalog, ContainerProbe, ExtraMethod, Instantiator, Resolver,
};

/// Container probe backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirProbe;

impl ContainerProbe for DirProbe {
    fn directory_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// The assembled caller facade.
///
/// # Example
///
/// ```ignore
/// let porto = Porto::builder().app_root("/srv/application").build();
/// porto.registry().register(
///     "app/containers/Siteapp/Actions/SwitchTemplateAction",
///     || Arc::new(SwitchTemplateAction),
/// );
/// let result = porto
///     .call("Siteapp@SwitchTemplateAction", &[json!(42), json!(7)], &[])
///     .await?;
/// ```
pub struct Porto {
    registry: Arc<HandlerRegistry>,
    resolver: Resolver,
}

impl Porto {
    pub fn builder() -> PortoBuilder {
        PortoBuilder::new()
    }

    /// The registry handlers are registered in.
    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Resolves and invokes a handler. See [`Resolver::call`].
    pub async fn call(
        &self,
        identifier: &str,
        run_args: &[Value],
        extra_methods: &[ExtraMethod],
    ) -> Result<Value, CallError> {
        self.resolver.call(identifier, run_args, extra_methods).await
    }

    /// Invokes a deserialized [`CallRequest`].
    pub async fn dispatch(&self, request: &CallRequest) -> Result<Value, CallError> {
        self.call(
            &request.identifier,
            &request.run_args,
            &request.extra_methods,
        )
        .await
    }
}

/// Builder for [`Porto`].
///
/// The application root defaults to `$APP_PATH` (falling back to the current
/// directory), the namespace root to `app`, and the probe to the real
/// filesystem.
#[derive(Default)]
pub struct PortoBuilder {
    app_root: Option<PathBuf>,
    namespace_root: Option<String>,
    probe: Option<Arc<dyn ContainerProbe>>,
}

impl PortoBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn app_root(mut self, app_root: impl Into<PathBuf>) -> Self {
        self.app_root = Some(app_root.into());
        self
    }

    pub fn namespace_root(mut self, namespace_root: impl Into<String>) -> Self {
        self.namespace_root = Some(namespace_root.into());
        self
    }

    /// Replaces the filesystem probe, e.g. with
    /// [`MockProbe`](crate::resolver::mock::MockProbe) in tests.
    pub fn probe(mut self, probe: Arc<dyn ContainerProbe>) -> Self {
        self.probe = Some(probe);
        self
    }

    pub fn build(self) -> Porto {
        let mut conventions = match self.app_root {
            Some(app_root) => Conventions::new(app_root),
            None => Conventions::from_env(),
        };
        if let Some(namespace_root) = self.namespace_root {
            conventions = conventions.with_namespace_root(namespace_root);
        }

        let registry = Arc::new(HandlerRegistry::new());
        let probe = self.probe.unwrap_or_else(|| Arc::new(DirProbe));
        let resolver = Resolver::new(
            conventions,
            Arc::clone(&registry) as Arc<dyn Instantiator>,
            Arc::clone(&registry) as Arc<dyn ClassCatalog>,
            probe,
        );

        Porto { registry, resolver }
    }
}
