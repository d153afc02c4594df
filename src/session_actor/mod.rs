//! Session-specific resource logic: the application controller actor.
//!
//! A session owns all mutable UI state (view mode, search text, current
//! page, the open form) and handles [`UiEvent`]s one at a time. The catalog
//! client is injected as the actor context at `run()` time, the same late
//! binding every dependent actor in this crate uses.

mod events;
pub mod entity;
pub mod error;

pub use error::*;
pub use events::*;

use crate::clients::SessionClient;
use crate::framework::ResourceActor;
use crate::model::Session;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new session actor and its client.
pub fn new() -> (ResourceActor<Session>, SessionClient) {
    let session_id_counter = Arc::new(AtomicU64::new(1));
    let next_session_id = move || {
        let id = session_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("session_{}", id)
    };

    let (actor, generic_client) = ResourceActor::new(32, next_session_id);
    let client = SessionClient::new(generic_client);

    (actor, client)
}
