//! Product form: labeled draft fields with inline validation messages.

use owo_colors::OwoColorize;

use crate::form::FormField;
use crate::session_actor::FormView;

fn field_line(out: &mut String, view: &FormView, field: Option<FormField>, label: &str, value: &str) {
    out.push_str(&format!("  {:<12} {}\n", format!("{}:", label).dimmed(), value));
    if let Some(message) = field.and_then(|f| view.errors.get(f)) {
        out.push_str(&format!("  {} {}\n", "×".red(), message));
    }
}

/// Render the open form: an Add/Edit title, every field of the draft, and
/// the error message of each invalid field right under it.
pub fn form(view: &FormView) -> String {
    let title = match view.editing {
        Some(_) => "Edit Product",
        None => "Add Product",
    };

    let mut out = String::new();
    out.push_str(&format!("{}\n", title.bold()));
    field_line(&mut out, view, Some(FormField::Name), "Name", &view.draft.name);
    field_line(&mut out, view, Some(FormField::Price), "Price", &view.draft.price);
    field_line(&mut out, view, Some(FormField::Category), "Category", &view.draft.category);
    field_line(&mut out, view, Some(FormField::Stock), "Stock", &view.draft.stock);
    field_line(&mut out, view, None, "Description", &view.draft.description);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FormErrors, ProductDraft, validate};
    use crate::model::{Product, ProductId};

    fn form_view(editing: Option<ProductId>, draft: ProductDraft, errors: FormErrors) -> FormView {
        FormView {
            editing,
            draft,
            errors,
        }
    }

    #[test]
    fn add_form_shows_blank_fields() {
        let rendered = form(&form_view(None, ProductDraft::default(), FormErrors::default()));
        assert!(rendered.contains("Add Product"));
        assert!(rendered.contains("Name:"));
        assert!(rendered.contains("Description:"));
        assert!(!rendered.contains("Required"));
    }

    #[test]
    fn edit_form_is_prefilled() {
        let product = Product::new(2, "Bluetooth Headphones", 2499, "Electronics", 10, "Bass.");
        let rendered = form(&form_view(
            Some(2),
            ProductDraft::from_product(&product),
            FormErrors::default(),
        ));
        assert!(rendered.contains("Edit Product"));
        assert!(rendered.contains("Bluetooth Headphones"));
        assert!(rendered.contains("2499"));
    }

    #[test]
    fn errors_render_under_their_fields() {
        let draft = ProductDraft {
            price: "abc".into(),
            ..ProductDraft::default()
        };
        let errors = validate(&draft).unwrap_err();
        let rendered = form(&form_view(None, draft, errors));
        assert!(rendered.contains("Required"));
        assert!(rendered.contains("Enter valid price"));
    }
}
