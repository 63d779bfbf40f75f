//! # Observability & Tracing
//!
//! Tracing setup for applications embedding the resolver.
//!
//! ## Configuration
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate
//! in a compact format that hides module paths (`with_target(false)`); the
//! structured fields on each line (identifier, lookup key, method) carry the
//! context instead.
//!
//! Log levels come from `RUST_LOG`:
//!
//! ```bash
//! # Advisory and resolution logs
//! RUST_LOG=debug cargo run
//!
//! # Only registration logs
//! RUST_LOG=info cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Registration**: every handler registered with its fully-qualified name
//! - **Resolution**: the lookup key each call resolves to
//! - **Legacy calls**: an advisory line when a raw (non-`@`) identifier is
//!   used
//! - **Auxiliary dispatch**: handled and skipped extra methods
//!
//! Resolution *errors* are returned to the caller, not logged.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Structured fields carry the context instead
        .compact()
        .init();
}
