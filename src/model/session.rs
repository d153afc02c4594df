use crate::form::FormErrors;
use crate::model::ProductId;

/// Which renderer the visible slice is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Table,
    Card,
}

impl ViewMode {
    /// The other mode. Toggling is the only view transition.
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Table => ViewMode::Card,
            ViewMode::Card => ViewMode::Table,
        }
    }
}

/// The open product form: what is being edited (if anything) and the errors
/// from the last submit attempt.
///
/// The edit target is held as an id, never as a copy of the product; the
/// record is looked up again at submit and snapshot time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub editing: Option<ProductId>,
    pub errors: FormErrors,
}

impl FormState {
    /// A fresh form for adding a new product.
    pub fn add() -> Self {
        Self::default()
    }

    /// A fresh form editing the product with the given id.
    pub fn edit(id: ProductId) -> Self {
        Self {
            editing: Some(id),
            errors: FormErrors::default(),
        }
    }
}

/// One interactive session over the catalog: everything mutable the UI has.
///
/// All fields change only inside the session actor's event handling; the rest
/// of the crate sees read-only snapshots.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub view: ViewMode,
    pub search: String,
    pub page: usize,
    pub form: Option<FormState>,
}

impl Session {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            view: ViewMode::Table,
            search: String::new(),
            page: 1,
            form: None,
        }
    }
}

/// Payload for opening a session. Sessions always start on the table view,
/// page 1, with no filter and no open form.
#[derive(Debug, Clone, Default)]
pub struct SessionCreate {}
