use serde::{Deserialize, Serialize};

/// Identifier of a catalog product. Unique and immutable once assigned.
pub type ProductId = u64;

/// A product record in the catalog.
///
/// Prices are stored as minor currency units (an integer number of paise),
/// never as floating point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: u32,
    pub category: String,
    pub stock: u32,
    pub description: String,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: u32,
        category: impl Into<String>,
        stock: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category: category.into(),
            stock,
            description: description.into(),
        }
    }
}

/// Payload for creating a product. All fields already validated and numeric.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: u32,
    pub category: String,
    pub stock: u32,
    pub description: String,
}

/// Payload for updating a product. Present fields are merged onto the record;
/// absent fields are left untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<u32>,
    pub category: Option<String>,
    pub stock: Option<u32>,
    pub description: Option<String>,
}

/// The fixed catalog the store opens with. Ids 1-5; the id counter must start
/// above the largest id here.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new(
            1,
            "Wireless Mouse",
            799,
            "Electronics",
            25,
            "A smooth and responsive wireless mouse with ergonomic design.",
        ),
        Product::new(
            2,
            "Bluetooth Headphones",
            2499,
            "Electronics",
            10,
            "Noise-cancelling over-ear headphones with deep bass.",
        ),
        Product::new(
            3,
            "Office Chair",
            5499,
            "Furniture",
            5,
            "Ergonomic office chair with adjustable height and lumbar support.",
        ),
        Product::new(
            4,
            "Coffee Mug",
            299,
            "Kitchen",
            50,
            "Ceramic coffee mug with heat-resistant handle.",
        ),
        Product::new(
            5,
            "Yoga Mat",
            999,
            "Sports",
            18,
            "Eco-friendly yoga mat with non-slip surface.",
        ),
    ]
}
