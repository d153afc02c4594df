//! Error types for the session actor.

use thiserror::Error;

/// Errors that can occur while driving a session.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    /// The requested session was not found.
    #[error("Session not found: {0}")]
    NotFound(String),

    /// The catalog could not be reached while handling an event.
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for SessionError {
    fn from(msg: String) -> Self {
        SessionError::ActorCommunicationError(msg)
    }
}
