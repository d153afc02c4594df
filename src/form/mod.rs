//! Product form drafts and validation.
//!
//! A [`ProductDraft`] is the string-typed mirror of a product while the user
//! is typing. [`validate`] either converts it into a [`ValidatedProduct`]
//! with numeric price and stock, or returns a [`FormErrors`] map naming each
//! invalid field. Validation runs on every submit attempt; a failed draft
//! never reaches the catalog.

use std::collections::BTreeMap;
use std::fmt;

use crate::model::{Product, ProductCreate, ProductUpdate};

/// The validatable fields of the product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    Name,
    Price,
    Category,
    Stock,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormField::Name => "name",
            FormField::Price => "price",
            FormField::Category => "category",
            FormField::Stock => "stock",
        };
        f.write_str(name)
    }
}

/// Per-field validation messages. Empty means the draft is accepted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors(BTreeMap<FormField, &'static str>);

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        self.0.iter().map(|(field, msg)| (*field, *msg))
    }

    fn insert(&mut self, field: FormField, message: &'static str) {
        self.0.insert(field, message);
    }
}

/// String-typed form values, exactly as entered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub category: String,
    pub stock: String,
    pub description: String,
}

impl ProductDraft {
    /// Prefill a draft from an existing product, for editing.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            category: product.category.clone(),
            stock: product.stock.to_string(),
            description: product.description.clone(),
        }
    }
}

/// A draft that passed validation: price and stock are numeric.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedProduct {
    pub name: String,
    pub price: u32,
    pub category: String,
    pub stock: u32,
    pub description: String,
}

impl ValidatedProduct {
    /// Payload for inserting a brand-new product.
    pub fn into_create(self) -> ProductCreate {
        ProductCreate {
            name: self.name,
            price: self.price,
            category: self.category,
            stock: self.stock,
            description: self.description,
        }
    }

    /// Payload for merging the form onto an existing product. The form
    /// carries every field, so every field is present.
    pub fn into_update(self) -> ProductUpdate {
        ProductUpdate {
            name: Some(self.name),
            price: Some(self.price),
            category: Some(self.category),
            stock: Some(self.stock),
            description: Some(self.description),
        }
    }
}

/// Check a draft and convert it on success.
///
/// Rules:
/// - name: required
/// - price: required, must parse as a non-negative integer (minor units)
/// - category: required
/// - stock: optional, must parse if present; blank means 0
pub fn validate(draft: &ProductDraft) -> Result<ValidatedProduct, FormErrors> {
    let mut errors = FormErrors::default();

    if draft.name.is_empty() {
        errors.insert(FormField::Name, "Required");
    }

    let price = match draft.price.parse::<u32>() {
        Ok(price) => price,
        Err(_) => {
            errors.insert(FormField::Price, "Enter valid price");
            0
        }
    };

    if draft.category.is_empty() {
        errors.insert(FormField::Category, "Required");
    }

    let stock = if draft.stock.is_empty() {
        0
    } else {
        match draft.stock.parse::<u32>() {
            Ok(stock) => stock,
            Err(_) => {
                errors.insert(FormField::Stock, "Enter valid stock");
                0
            }
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidatedProduct {
        name: draft.name.clone(),
        price,
        category: draft.category.clone(),
        stock,
        description: draft.description.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> ProductDraft {
        ProductDraft {
            name: "X".into(),
            price: "10".into(),
            category: "C".into(),
            stock: "".into(),
            description: "".into(),
        }
    }

    #[test]
    fn accepts_draft_with_blank_stock_as_zero() {
        let validated = validate(&full_draft()).unwrap();
        assert_eq!(validated.name, "X");
        assert_eq!(validated.price, 10);
        assert_eq!(validated.category, "C");
        assert_eq!(validated.stock, 0);
    }

    #[test]
    fn rejects_empty_name_and_category() {
        let draft = ProductDraft {
            name: "".into(),
            category: "".into(),
            ..full_draft()
        };
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.get(FormField::Name), Some("Required"));
        assert_eq!(errors.get(FormField::Category), Some("Required"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn rejects_missing_or_non_numeric_price() {
        for bad in ["", "abc", "-5", "10.5"] {
            let draft = ProductDraft {
                price: bad.into(),
                ..full_draft()
            };
            let errors = validate(&draft).unwrap_err();
            assert_eq!(errors.get(FormField::Price), Some("Enter valid price"), "price {bad:?}");
        }
    }

    #[test]
    fn rejects_non_numeric_stock_but_accepts_numeric() {
        let draft = ProductDraft {
            stock: "many".into(),
            ..full_draft()
        };
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.get(FormField::Stock), Some("Enter valid stock"));

        let draft = ProductDraft {
            stock: "7".into(),
            ..full_draft()
        };
        assert_eq!(validate(&draft).unwrap().stock, 7);
    }

    #[test]
    fn prefill_round_trips_through_validation() {
        let product = Product::new(3, "Office Chair", 5499, "Furniture", 5, "Ergonomic.");
        let draft = ProductDraft::from_product(&product);
        let validated = validate(&draft).unwrap();
        assert_eq!(validated.price, 5499);
        assert_eq!(validated.stock, 5);
        assert_eq!(validated.description, "Ergonomic.");
    }
}
