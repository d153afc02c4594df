use crate::clients::{CatalogClient, SessionClient};
use crate::model::{seed_products, Product};
use tracing::{error, info};

/// The runtime orchestrator for the catalog application.
///
/// `CatalogSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all actors
/// - **Dependency Wiring**: Injecting the catalog client into the session actor
/// - **Seeding**: Installing the fixed startup catalog
///
/// # Architecture
///
/// Two actors make up the system:
/// - **Catalog Actor**: Owns the product store (insert, update, reads)
/// - **Session Actor**: Owns per-session UI state and handles user events,
///   calling into the catalog through its client
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::new();
///
/// let session = system.session_client.open_session().await?;
/// let view = system.session_client.apply(session, UiEvent::Refresh).await?;
///
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    /// Client for interacting with the catalog actor
    pub catalog_client: CatalogClient,

    /// Client for interacting with the session actor
    pub session_client: SessionClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CatalogSystem {
    /// Creates and initializes a new `CatalogSystem` with all actors running
    /// and the store seeded.
    pub fn new() -> Self {
        Self::with_seed(seed_products())
    }

    /// Like [`CatalogSystem::new`] with a caller-chosen seed.
    pub fn with_seed(seed: Vec<Product>) -> Self {
        // 1. Create actors
        let (catalog_actor, catalog_client) = crate::catalog_actor::new(seed);
        let (session_actor, session_client) = crate::session_actor::new();

        // 2. Start actors with injected context.
        // The catalog has no dependencies (Context = ()).
        let catalog_handle = tokio::spawn(catalog_actor.run(()));

        // The session actor drives the catalog (Context = CatalogClient).
        let session_handle = tokio::spawn(session_actor.run(catalog_client.clone()));

        Self {
            catalog_client,
            session_client,
            handles: vec![catalog_handle, session_handle],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes their channels; each actor drains its
    /// mailbox and exits its loop. Any panicked actor task surfaces as an
    /// error here.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Close all channels by dropping clients. The session actor holds
        // its own clone of the catalog client as context; it drops when the
        // session loop exits, which in turn lets the catalog loop exit.
        drop(self.session_client);
        drop(self.catalog_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for CatalogSystem {
    fn default() -> Self {
        Self::new()
    }
}
