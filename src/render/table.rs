//! Table view: one row per visible product.

use tabled::{Table, Tabled};

use crate::model::Product;
use crate::render::{format_price, NO_PRODUCTS};

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Stock")]
    stock: u32,
    #[tabled(rename = "Edit")]
    edit: String,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            price: format_price(product.price),
            stock: product.stock,
            edit: format!("edit {}", product.id),
        }
    }
}

/// Render the visible slice as a table, or the placeholder when empty.
pub fn table(products: &[Product]) -> String {
    if products.is_empty() {
        return NO_PRODUCTS.to_string();
    }

    let rows: Vec<ProductRow> = products.iter().map(ProductRow::from).collect();
    Table::new(rows).to_string()
}
