//! The resolution engine.
//!
//! This module provides the core building blocks for convention-driven
//! handler calls.
//!
//! # Main Components
//!
//! - [`Handler`] - Contract resolvable classes implement (`run` + optional
//!   auxiliary methods)
//! - [`Resolver`] - Drives parse, validation, instantiation, and invocation
//! - [`Instantiator`], [`ClassCatalog`], [`ContainerProbe`] - Collaborator
//!   contracts the resolver is wired with
//! - [`CallError`] - Resolution and invocation errors
//!
//! # Testing
//!
//! See the [`mock`] module for collaborators that let you exercise the
//! resolver without a real filesystem or registry.

pub mod core;
pub mod error;
pub mod handler;
pub mod mock;

pub use self::core::{ClassCatalog, ContainerProbe, Instantiator, Resolver};
pub use self::error::CallError;
pub use self::handler::{CallRequest, ExtraMethod, ExtraOutcome, Handler};
