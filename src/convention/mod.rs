//! Pure data structures and string transformations for the naming convention.
//!
//! Everything in this module is deterministic and side-effect free: parsing a
//! call identifier, extracting the type token from a PascalCase class name,
//! and composing fully-qualified lookup names. The [`Conventions`] value holds
//! the two configurable roots (application directory and namespace prefix)
//! that anchor those transformations.

pub mod identifier;
pub mod naming;

pub use identifier::{capitalize_first_letter, CallTarget, SEPARATOR};
pub use naming::{build_class_full_name, class_type};

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming the application root that holds `containers/`.
pub const APP_PATH_ENV: &str = "APP_PATH";

/// Directory under the application root that groups feature containers.
pub const CONTAINERS_DIR: &str = "containers";

/// Default namespace prefix for composed lookup names.
pub const DEFAULT_NAMESPACE_ROOT: &str = "app";

/// Convention configuration: where containers live on disk and which
/// namespace prefix composed lookup names start with.
///
/// A container named `Siteapp` is expected at
/// `<app_root>/containers/Siteapp`, and a class `SwitchTemplateAction` inside
/// it resolves to the lookup name
/// `<namespace_root>/containers/Siteapp/Actions/SwitchTemplateAction`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conventions {
    app_root: PathBuf,
    namespace_root: String,
}

impl Conventions {
    /// Creates a convention rooted at the given application directory, with
    /// the default `app` namespace prefix.
    pub fn new(app_root: impl Into<PathBuf>) -> Self {
        Self {
            app_root: app_root.into(),
            namespace_root: DEFAULT_NAMESPACE_ROOT.to_string(),
        }
    }

    /// Reads the application root from `$APP_PATH`, falling back to the
    /// current directory when unset.
    pub fn from_env() -> Self {
        let app_root = env::var_os(APP_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(app_root)
    }

    /// Replaces the namespace prefix used when composing lookup names.
    pub fn with_namespace_root(mut self, namespace_root: impl Into<String>) -> Self {
        self.namespace_root = namespace_root.into();
        self
    }

    pub fn app_root(&self) -> &Path {
        &self.app_root
    }

    pub fn namespace_root(&self) -> &str {
        &self.namespace_root
    }

    /// Directory a container must occupy to be considered installed.
    pub fn container_dir(&self, container_name: &str) -> PathBuf {
        self.app_root.join(CONTAINERS_DIR).join(container_name)
    }

    /// Fully-qualified lookup name for a class inside a container.
    pub fn class_full_name(&self, container_name: &str, class_name: &str) -> String {
        build_class_full_name(&self.namespace_root, container_name, class_name)
    }
}

impl Default for Conventions {
    fn default() -> Self {
        Self::new(".")
    }
}
