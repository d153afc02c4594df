//! Entity trait implementation for the Product domain type.
//!
//! Enables [`Product`] to be managed by the generic
//! [`ResourceActor`](crate::framework::ResourceActor): creation from a
//! validated payload and field-wise merge on update. The catalog needs no
//! custom actions; everything beyond insert/update is plain reads.

use crate::framework::ActorEntity;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type CreateParams = ProductCreate;
    type UpdateParams = ProductUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, String> {
        Ok(Self::new(
            id,
            params.name,
            params.price,
            params.category,
            params.stock,
            params.description,
        ))
    }

    /// Merge present fields onto the record. The id never changes.
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), String> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), String> {
        Ok(())
    }
}
