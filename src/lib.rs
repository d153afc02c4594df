//! # Catalog Desk
//!
//! > **An in-memory product catalog manager built on resource-oriented actors.**
//!
//! Browse, search, paginate, add, and edit product records held in memory,
//! rendered as either a table or a card grid. There is no persistence and no
//! network layer; the catalog is seeded at startup and lives for the process.
//!
//! ## 🏗️ Design Philosophy
//!
//! All mutable state sits behind actors: the product store and each UI
//! session run as Tokio tasks that process their messages sequentially, so
//! no locks guard any state. Everything around them is pure — the
//! filter/paginate query pipeline, the form validator, and the renderers are
//! plain functions of their inputs.
//!
//! ### Generics: The Power of `T`
//! The actor engine is written once as `ResourceActor<T: ActorEntity>` and
//! reused for both resources here. Products and sessions declare their own
//! payload and action types; the compiler keeps them apart.
//!
//! ### Mocking: Testing without Pain
//! The session actor is tested against a scripted catalog via
//! [`framework::mock::MockClient`] — see that module for the expectation API.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each actor defines its own error type ([`CatalogError`](catalog_actor::CatalogError),
//! [`SessionError`](session_actor::SessionError)) built with `thiserror`.
//! Form-validation failure is deliberately *not* an error: it travels inside
//! the session snapshot as a per-field message map.
//!
//! ### 2. Async Context Injection
//! Dependencies are injected at `run()` time, not at construction time. The
//! session actor receives the catalog client this way, so wiring stays in
//! one place ([`lifecycle::CatalogSystem`]).
//!
//! ### 3. Concurrency Model
//! Each actor processes its mailbox sequentially; user events therefore
//! apply one at a time, exactly like a single-threaded UI event loop.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` with its ordered, newest-first store.
//!
//! ### 2. The Data ([`model`], [`form`], [`query`])
//! Product and session DTOs with the startup seed; string-typed form drafts
//! and the validator; the pure filter -> paginate pipeline.
//!
//! ### 3. The Actors ([`catalog_actor`], [`session_actor`])
//! Concrete [`ActorEntity`](framework::ActorEntity) implementations: the
//! product store, and the session state machine that handles every
//! [`UiEvent`](session_actor::UiEvent).
//!
//! ### 4. The Interface ([`clients`], [`render`])
//! Domain clients wrapping the raw message channels, and the stateless
//! table / card / pager / form renderers.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! Spins up the actors, wires the dependency, seeds the store, and shuts
//! everything down gracefully.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the scripted demo with info logs
//! RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod catalog_actor;
pub mod clients;
pub mod form;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod query;
pub mod render;
pub mod session_actor;
