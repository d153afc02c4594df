//! Orchestration layer: actor wiring, seeding, and observability setup.

pub mod catalog_system;
pub mod tracing;

pub use catalog_system::CatalogSystem;
pub use tracing::setup_tracing;
