//! # Observability & Tracing
//!
//! Structured logging setup for the whole application.
//!
//! ## Configuration
//!
//! [`setup_tracing`] initializes the `tracing` subscriber with a compact
//! format that hides the crate/module prefix (`with_target(false)`); the
//! actor loops log an `entity_type` field instead, which keeps lines short
//! while preserving structure.
//!
//! Log levels come from `RUST_LOG`:
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Full event and payload detail
//! RUST_LOG=debug cargo run
//!
//! # Filter to the actor engine only
//! RUST_LOG=catalog_desk::framework=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup (with seed size), shutdown, final state
//! - **Store Operations**: Create, Get, Update, List, and session Actions
//! - **Event Flow**: spans around each client call (`#[instrument]`)
//! - **Errors**: failure reasons with entity ids, including the silent
//!   "edit target missing" warn path
//!
//! With `RUST_LOG=debug`, client calls log their payload once on entry via
//! the `?field` structured-capture syntax:
//!
//! ```text
//! DEBUG apply: Sending request event=SearchChanged("mouse")
//! INFO Action ok session_id="session_1"
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - actors log entity_type instead
        .compact() // Compact format shows spans inline
        .init();
}
