#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Porto Call
//!
//! > **A convention-driven handler caller for Porto-style applications.**
//!
//! This crate resolves short string identifiers like `Siteapp@SwitchTemplateAction`
//! into registered handler objects and invokes them, so calling code never names
//! concrete types or their locations. Business logic lives in *containers* (one
//! directory per feature area), and every class is addressed by where the
//! convention says it must be, not by explicit wiring.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why a naming convention?
//!
//! In a Porto-style architecture all business logic sits under
//! `containers/<Container>/<Type>s/<Class>`: `SwitchTemplateAction` belongs to
//! the `Siteapp` container and, because its type token is `Action`, lives in
//! the `Actions` folder. The caller exploits that regularity:
//!
//! - **Decoupling**: call sites carry a short string, not a type path.
//! - **Structure enforcement**: a class that is not where the convention says
//!   it should be simply cannot be called.
//! - **Uniformity**: every handler exposes the same `run` entry point.
//!
//! ### Pluggable collaborators
//!
//! The resolver itself only parses, validates, and delegates. Object
//! construction belongs to an [`Instantiator`](resolver::Instantiator) (a
//! service locator), name validation to a
//! [`ClassCatalog`](resolver::ClassCatalog), and directory checks to a
//! [`ContainerProbe`](resolver::ContainerProbe). The bundled
//! [`HandlerRegistry`] covers the first two; swap in your own to integrate a
//! different container mechanism.
//!
//! ### Forgiving auxiliary dispatch
//!
//! A call may name auxiliary methods (`init`, `configure(1, 2)`) to invoke
//! before the primary entry point. Handlers opt into these through the
//! [`Handler::extra`](resolver::Handler::extra) hook; methods a handler does
//! not implement are skipped silently rather than failing the call.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Convention ([`convention`])
//! Pure string transformations: identifier parsing, type-token extraction,
//! lookup-name composition, and the [`Conventions`] configuration.
//! - **Key items**: [`CallTarget`](convention::CallTarget),
//!   [`class_type`](convention::class_type),
//!   [`build_class_full_name`](convention::build_class_full_name).
//!
//! ### 2. The Engine ([`resolver`])
//! The resolution pipeline and the contracts around it.
//! - **Key items**: [`Resolver`], [`Handler`](resolver::Handler),
//!   [`ExtraMethod`], [`CallError`].
//!
//! ### 3. The Locator ([`registry`])
//! The default in-memory service locator mapping fully-qualified names to
//! handler factories.
//! - **Key items**: [`HandlerRegistry`].
//!
//! ### 4. The Wiring ([`lifecycle`])
//! Assembles registry, filesystem probe, and conventions into a ready
//! [`Porto`] facade; also hosts the tracing setup.
//! - **Key items**: [`Porto`], [`PortoBuilder`](lifecycle::PortoBuilder),
//!   [`setup_tracing`](lifecycle::tracing::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use porto_call::{Handler, Porto};
//! use serde_json::{json, Value};
//!
//! struct SwitchTemplateAction;
//!
//! #[async_trait::async_trait]
//! impl Handler for SwitchTemplateAction {
//!     async fn run(&self, args: &[Value]) -> Result<Value, String> {
//!         // ... switch the template, return the outcome ...
//!         Ok(json!({ "switched": true }))
//!     }
//! }
//!
//! # async fn example() -> Result<(), porto_call::CallError> {
//! let porto = Porto::builder().app_root("/srv/application").build();
//! porto.registry().register(
//!     "app/containers/Siteapp/Actions/SwitchTemplateAction",
//!     || Arc::new(SwitchTemplateAction),
//! );
//!
//! let result = porto
//!     .call("Siteapp@SwitchTemplateAction", &[json!(42), json!(7)], &[])
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! Identifiers without the `@` separator are passed to the locator verbatim
//! (with an advisory log line) so legacy lookup keys keep working during a
//! migration.
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod convention;
pub mod lifecycle;
pub mod registry;
pub mod resolver;

pub use convention::{CallTarget, Conventions};
pub use lifecycle::Porto;
pub use registry::HandlerRegistry;
pub use resolver::{CallError, CallRequest, ExtraMethod, ExtraOutcome, Handler, Resolver};
