use crate::catalog_actor::CatalogError;
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the catalog actor.
///
/// Exposes exactly the store contract: insert (prepend, fresh id) and
/// update-by-id, plus the reads inherited from [`ActorClient`]. There is no
/// removal operation.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Product>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    /// Insert a new product and return its freshly assigned id.
    #[instrument(skip(self))]
    pub async fn add_product(&self, params: ProductCreate) -> Result<ProductId, CatalogError> {
        debug!("Sending request");
        self.inner
            .create(params)
            .await
            .map_err(Self::map_error)
    }

    /// Merge the present fields of `update` onto the product with `id`.
    #[instrument(skip(self, update))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, CatalogError> {
        debug!("Sending request");
        self.inner
            .update(id, update)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Product> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => CatalogError::NotFound(id),
            other => CatalogError::ActorCommunicationError(other.to_string()),
        }
    }
}
