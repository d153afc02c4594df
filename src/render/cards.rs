//! Card grid view: one block per visible product.

use owo_colors::OwoColorize;

use crate::model::Product;
use crate::render::{format_price, NO_PRODUCTS};

fn card(product: &Product) -> String {
    format!(
        "{}\n{}\n{}\n{}  Stock: {}  {}",
        product.name.bold(),
        product.category.dimmed(),
        product.description,
        format_price(product.price).bold(),
        product.stock,
        format!("[edit {}]", product.id).dimmed(),
    )
}

/// Render the visible slice as a card grid, or the placeholder when empty.
pub fn cards(products: &[Product]) -> String {
    if products.is_empty() {
        return NO_PRODUCTS.to_string();
    }

    products
        .iter()
        .map(card)
        .collect::<Vec<_>>()
        .join("\n\n")
}
