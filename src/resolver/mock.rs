//! # Mock Collaborators
//!
//! Utilities for testing resolution in isolation, without a real filesystem
//! or a wired application.
//!
//! [`MockProbe`] answers directory checks from a fixed set, [`StaticRegistry`]
//! serves pre-built handler instances and counts instantiations, and
//! [`RecordingHandler`] keeps an ordered log of every method invoked on it.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use super::core::{ClassCatalog, ContainerProbe, Instantiator};
use super::error::CallError;
use super::handler::{ExtraOutcome, Handler};

/// Container probe backed by a fixed set of directories.
#[derive(Debug, Default)]
pub struct MockProbe {
    dirs: HashSet<PathBuf>,
}

impl MockProbe {
    /// A probe that knows no directories.
    pub fn new() -> Self {
        Self::default()
    }

    /// A probe that reports exactly the given directories as existing.
    pub fn with_dirs<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    pub fn add_dir(&mut self, dir: impl Into<PathBuf>) {
        self.dirs.insert(dir.into());
    }
}

impl ContainerProbe for MockProbe {
    fn directory_exists(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }
}

/// Service locator over a fixed set of pre-built handler instances.
///
/// Every successful `make` is counted, so tests can assert that validation
/// failures abort the pipeline *before* any instantiation attempt.
#[derive(Default)]
pub struct StaticRegistry {
    handlers: HashMap<String, Arc<dyn Handler>>,
    made: AtomicUsize,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_handler(key: impl Into<String>, handler: Arc<dyn Handler>) -> Self {
        let mut registry = Self::new();
        registry.insert(key, handler);
        registry
    }

    pub fn insert(&mut self, key: impl Into<String>, handler: Arc<dyn Handler>) {
        self.handlers.insert(key.into(), handler);
    }

    /// Number of `make` calls served so far (including failed lookups).
    pub fn make_count(&self) -> usize {
        self.made.load(Ordering::SeqCst)
    }
}

impl Instantiator for StaticRegistry {
    fn make(&self, key: &str) -> Result<Arc<dyn Handler>, CallError> {
        self.made.fetch_add(1, Ordering::SeqCst);
        self.handlers
            .get(key)
            .cloned()
            .ok_or_else(|| CallError::ClassDoesNotExist(key.to_string()))
    }
}

impl ClassCatalog for StaticRegistry {
    fn class_exists(&self, full_name: &str) -> bool {
        self.handlers.contains_key(full_name)
    }
}

/// One method invocation observed by a [`RecordingHandler`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: String,
    pub args: Vec<Value>,
}

/// Handler that records every invocation in order.
///
/// `run` returns a scripted result; auxiliary methods are handled only if
/// they were declared via [`RecordingHandler::with_extras`]. Clone the `Arc`
/// before registering so the test keeps a handle to the call log:
///
/// ```ignore
/// let handler = Arc::new(RecordingHandler::returning(json!("ok")).with_extras(["init"]));
/// registry.insert(key, Arc::clone(&handler) as Arc<dyn Handler>);
/// // ... drive the resolver ...
/// assert_eq!(handler.calls()[0].method, "init");
/// ```
#[derive(Debug)]
pub struct RecordingHandler {
    result: Result<Value, String>,
    extras: HashSet<String>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl RecordingHandler {
    /// A handler whose `run` succeeds with the given value.
    pub fn returning(result: Value) -> Self {
        Self {
            result: Ok(result),
            extras: HashSet::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A handler whose `run` fails with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            result: Err(message.into()),
            extras: HashSet::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Declares the auxiliary methods this handler implements.
    pub fn with_extras<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extras = methods.into_iter().map(Into::into).collect();
        self
    }

    /// Snapshot of the invocations observed so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, method: &str, args: &[Value]) {
        self.calls.lock().unwrap().push(RecordedCall {
            method: method.to_string(),
            args: args.to_vec(),
        });
    }
}

#[async_trait]
impl Handler for RecordingHandler {
    async fn run(&self, args: &[Value]) -> Result<Value, String> {
        self.record("run", args);
        self.result.clone()
    }

    async fn extra(&self, method: &str, args: &[Value]) -> ExtraOutcome {
        if self.extras.contains(method) {
            self.record(method, args);
            ExtraOutcome::Handled
        } else {
            ExtraOutcome::NotFound
        }
    }
}
