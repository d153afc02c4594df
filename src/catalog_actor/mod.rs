//! Catalog-specific resource logic: the product store actor.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CatalogClient;
use crate::framework::ResourceActor;
use crate::model::Product;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new catalog actor seeded with `seed`, plus its client.
///
/// Identifiers come from a monotonic counter starting past the largest
/// seeded id, so assignment stays defined even when the seed is empty and a
/// new product's id is always greater than every existing one.
pub fn new(seed: Vec<Product>) -> (ResourceActor<Product>, CatalogClient) {
    let start = seed.iter().map(|p| p.id).max().map_or(1, |max| max + 1);
    let product_id_counter = Arc::new(AtomicU64::new(start));
    let next_product_id = move || product_id_counter.fetch_add(1, Ordering::SeqCst);

    let (actor, generic_client) = ResourceActor::seeded(32, seed, next_product_id);
    let client = CatalogClient::new(generic_client);

    (actor, client)
}
