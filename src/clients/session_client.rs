use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Session, SessionCreate};
use crate::session_actor::{SessionError, SessionView, UiEvent};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the session actor.
#[derive(Clone)]
pub struct SessionClient {
    inner: ResourceClient<Session>,
}

impl SessionClient {
    pub fn new(inner: ResourceClient<Session>) -> Self {
        Self { inner }
    }

    /// Open a fresh session and return its id.
    #[instrument(skip(self))]
    pub async fn open_session(&self) -> Result<String, SessionError> {
        debug!("Sending request");
        self.inner
            .create(SessionCreate::default())
            .await
            .map_err(Self::map_error)
    }

    /// Apply one user event to the session and get back the snapshot to
    /// render.
    #[instrument(skip(self, event))]
    pub async fn apply(&self, id: String, event: UiEvent) -> Result<SessionView, SessionError> {
        debug!(?event, "Sending request");
        self.inner
            .perform_action(id, event)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Session> for SessionClient {
    type Error = SessionError;

    fn inner(&self) -> &ResourceClient<Session> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => SessionError::NotFound(id),
            FrameworkError::Custom(msg) => SessionError::CatalogUnavailable(msg),
            other => SessionError::ActorCommunicationError(other.to_string()),
        }
    }
}
