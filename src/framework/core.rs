//! # Core Actor Framework
//!
//! Generic building blocks for the resource actors in this crate.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait a resource type implements to be managed.
//! - [`ResourceActor`]: The generic actor owning an ordered entity store.
//! - [`ResourceClient`]: The generic client for talking to an actor.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed, NotFound).

use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use async_trait::async_trait;

// =============================================================================
// 1. THE ABSTRACTION (Trait with Hooks, DTOs, and Actions)
// =============================================================================

/// Trait that any resource entity must implement to be managed by [`ResourceActor`].
///
/// # Architecture Note
/// The contract lets the actor loop be written *once* and reused for every
/// resource type in the crate. Associated types enforce payload safety: a
/// catalog actor only accepts catalog payloads, and the compiler rejects
/// anything else.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks can call other actors. The
/// `Context` type carries those dependencies and is injected into every hook
/// at `run()` time ("Late Binding"), not at construction time.
///
/// # Ordering
/// Entities expose their own [`id`](ActorEntity::id) so the actor can keep an
/// *ordered* store: newly created entities go to the front, and
/// [`ResourceClient::list`] returns the collection in that order.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g., String, u64).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance (DTO).
    type CreateParams: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type UpdateParams: Send + Sync + Debug;

    /// Enum representing resource-specific operations beyond CRUD.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The entity's identifier, used for lookups in the ordered store.
    fn id(&self) -> &Self::Id;

    /// Construct the full entity from the ID and payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String>;

    // --- Lifecycle Hooks (Async) ---

    /// Called immediately after the entity is created and initialized.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::UpdateParams,
        _ctx: &Self::Context,
    ) -> Result<(), String>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, String>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Custom error: {0}")]
    Custom(String),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Each actor manages one resource type and answers a standard set of
/// lifecycle operations instead of ad-hoc messages: Create, Get, Update,
/// Delete, plus `List` for the whole ordered collection and `Action` for
/// resource-specific logic that doesn't fit the CRUD shape.
///
/// The enum is generic over `T: ActorEntity`, so every operation carries the
/// payload types the entity itself declared.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::UpdateParams,
        respond_to: Response<T>,
    },
    #[allow(dead_code)]
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that manages an ordered collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`)
/// and the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each actor processes its own messages *sequentially* in a loop, so the
/// store needs no `Mutex` or `RwLock`; safety comes from exclusive ownership
/// of state within the task.
///
/// **Ordering Model**:
/// The store is a `Vec` kept newest-first: `Create` prepends, `Update` edits
/// in place without moving the entry, and `List` returns the current order.
/// Lookups scan the vector; the collections managed here are small.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: ActorEntity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        Self::seeded(buffer_size, Vec::new(), next_id_fn)
    }

    /// Like [`ResourceActor::new`], but the store starts with `seed` already
    /// in it, in the given order. The caller is responsible for an id
    /// generator that never collides with the seeded ids.
    pub fn seeded(
        buffer_size: usize,
        seed: Vec<T>,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: seed,
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.store.iter().position(|item| item.id() == id)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows
    /// entities to access external dependencies (like other clients) that were
    /// created *after* the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Product" instead of "catalog_desk::model::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, seeded = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id_fn)();

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                                continue;
                            }
                            // Newest entry goes to the front of the store.
                            self.store.insert(0, item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.position(&id).map(|i| self.store[i].clone());
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(index) = self.position(&id) {
                        let item = &mut self.store[index];
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(index) = self.position(&id) {
                        if let Err(e) = self.store[index].on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                            continue;
                        }
                        self.store.remove(index);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(index) = self.position(&id) {
                        let result = self.store[index]
                            .handle_action(action, &context)
                            .await
                            .map_err(FrameworkError::Custom);
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `ResourceActor`.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Create { params, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn update(&self, id: T::Id, update: T::UpdateParams) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Update {
                id,
                update,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    #[allow(dead_code)]
    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Delete { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Fetch every entity in store order (newest first).
    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::List { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Action {
                id,
                action,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
