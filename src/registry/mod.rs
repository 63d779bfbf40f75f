//! In-memory handler registry.
//!
//! The default service locator: a map from fully-qualified names to handler
//! factories. Each successful `make` runs the factory, so handlers are
//! constructed fresh per call unless a shared instance was registered via
//! [`HandlerRegistry::register_instance`].

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::resolver::{CallError, ClassCatalog, Handler, Instantiator};

type HandlerFactory = Box<dyn Fn() -> Arc<dyn Handler> + Send + Sync>;

/// Registry mapping fully-qualified names to handler factories.
///
/// Registration takes `&self`, so a registry can be shared behind an `Arc`
/// and populated at startup or lazily. Implements both the [`Instantiator`]
/// and [`ClassCatalog`] collaborator contracts.
#[derive(Default)]
pub struct HandlerRegistry {
    factories: RwLock<HashMap<String, HandlerFactory>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory under a fully-qualified name. A later
    /// registration under the same name replaces the earlier one.
    pub fn register<F>(&self, full_name: impl Into<String>, factory: F)
    where
        F: Fn() -> Arc<dyn Handler> + Send + Sync + 'static,
    {
        let full_name = full_name.into();
        debug!(class = %full_name, "Registering handler");
        self.write().insert(full_name, Box::new(factory));
    }

    /// Registers a shared instance; every `make` returns a clone of it.
    pub fn register_instance(&self, full_name: impl Into<String>, handler: Arc<dyn Handler>) {
        self.register(full_name, move || Arc::clone(&handler));
    }

    pub fn contains(&self, full_name: &str) -> bool {
        self.read().contains_key(full_name)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A factory that panicked cannot leave the map partially mutated, so a
    // poisoned lock is safe to recover.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, HandlerFactory>> {
        self.factories.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, HandlerFactory>> {
        self.factories.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Instantiator for HandlerRegistry {
    fn make(&self, key: &str) -> Result<Arc<dyn Handler>, CallError> {
        let factories = self.read();
        match factories.get(key) {
            Some(factory) => Ok(factory()),
            None => Err(CallError::ClassDoesNotExist(key.to_string())),
        }
    }
}

impl ClassCatalog for HandlerRegistry {
    fn class_exists(&self, full_name: &str) -> bool {
        self.contains(full_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::mock::RecordingHandler;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn make_runs_the_factory_per_call() {
        let registry = HandlerRegistry::new();
        let built = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&built);
        registry.register("app/containers/Siteapp/Actions/SwitchTemplateAction", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Arc::new(RecordingHandler::returning(json!(null)))
        });

        registry
            .make("app/containers/Siteapp/Actions/SwitchTemplateAction")
            .unwrap();
        registry
            .make("app/containers/Siteapp/Actions/SwitchTemplateAction")
            .unwrap();

        assert_eq!(built.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn unknown_key_is_a_class_error() {
        let registry = HandlerRegistry::new();
        let err = registry.make("app/containers/Ghost/Actions/DoStuffAction").unwrap_err();
        assert_eq!(
            err,
            CallError::ClassDoesNotExist("app/containers/Ghost/Actions/DoStuffAction".to_string())
        );
    }

    #[test]
    fn registered_instance_is_shared_across_makes() {
        let registry = HandlerRegistry::new();
        let handler: Arc<dyn Handler> = Arc::new(RecordingHandler::returning(json!(null)));
        registry.register_instance("app/X", Arc::clone(&handler));

        let first = registry.make("app/X").unwrap();
        let second = registry.make("app/X").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn contains_tracks_registrations() {
        let registry = HandlerRegistry::new();
        assert!(registry.is_empty());
        registry.register_instance("app/X", Arc::new(RecordingHandler::returning(json!(null))));
        assert!(registry.contains("app/X"));
        assert!(registry.class_exists("app/X"));
        assert_eq!(registry.len(), 1);
    }
}
