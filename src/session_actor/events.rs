//! User input events for the session actor, and the snapshot they produce.
//!
//! Every transition of the UI state machine is one [`UiEvent`] variant; the
//! session answers each event with a fresh [`SessionView`] for the renderers.

use crate::form::{FormErrors, ProductDraft};
use crate::model::{ProductId, ViewMode};
use crate::query::PageView;

/// User input driving a session.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Recompute the snapshot without changing any state.
    Refresh,
    /// Switch table <-> card. Nothing else changes.
    ViewToggled,
    /// Replace the search text. The current page is deliberately left alone.
    SearchChanged(String),
    /// Jump to a page. The number is taken as-is, never clamped.
    PageRequested(usize),
    /// Open the form empty, for a new product.
    AddRequested,
    /// Open the form prefilled from the product with this id.
    EditRequested(ProductId),
    /// Validate the draft and commit it (insert or update).
    FormSubmitted(ProductDraft),
    /// Close the form without touching the catalog.
    FormCancelled,
}

/// The open form as the renderers see it: the edit target (if any), a draft
/// prefilled from it, and the errors of the last submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub editing: Option<ProductId>,
    pub draft: ProductDraft,
    pub errors: FormErrors,
}

/// Read-only snapshot of a session after an event: everything the renderers
/// need to paint the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    pub view: ViewMode,
    pub search: String,
    pub page_view: PageView,
    pub form: Option<FormView>,
}
