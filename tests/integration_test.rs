use catalog_desk::clients::actor_client::ActorClient;
use catalog_desk::form::{FormField, ProductDraft};
use catalog_desk::lifecycle::CatalogSystem;
use catalog_desk::model::{Product, ViewMode};
use catalog_desk::session_actor::UiEvent;

/// Full end-to-end integration test with all real actors.
/// This drives the whole system the way a host surface would.
#[tokio::test]
async fn test_browse_search_and_views() {
    let system = CatalogSystem::new();
    let session = system
        .session_client
        .open_session()
        .await
        .expect("Failed to open session");

    // The seed catalog fits on one page, table view first.
    let view = system
        .session_client
        .apply(session.clone(), UiEvent::Refresh)
        .await
        .expect("Failed to refresh");
    assert_eq!(view.view, ViewMode::Table);
    assert_eq!(view.page_view.items.len(), 5);
    assert_eq!(view.page_view.total_pages, 1);
    assert_eq!(view.page_view.items[0].name, "Wireless Mouse");

    // Toggling the view changes nothing but the mode.
    let view = system
        .session_client
        .apply(session.clone(), UiEvent::ViewToggled)
        .await
        .expect("Failed to toggle view");
    assert_eq!(view.view, ViewMode::Card);
    assert_eq!(view.page_view.items.len(), 5);

    // Search is a case-insensitive substring match on the name.
    for needle in ["mouse", "MOUSE", "Mou"] {
        let view = system
            .session_client
            .apply(session.clone(), UiEvent::SearchChanged(needle.to_string()))
            .await
            .expect("Failed to search");
        assert_eq!(view.page_view.items.len(), 1, "search {needle:?}");
        assert_eq!(view.page_view.items[0].name, "Wireless Mouse");
    }

    // Clearing the search restores the full list.
    let view = system
        .session_client
        .apply(session.clone(), UiEvent::SearchChanged(String::new()))
        .await
        .expect("Failed to clear search");
    assert_eq!(view.page_view.items.len(), 5);

    system.shutdown().await.expect("Failed to shutdown system");
}

/// Adding through the form assigns a fresh id greater than every existing
/// one and prepends the record.
#[tokio::test]
async fn test_add_prepends_with_fresh_id() {
    let system = CatalogSystem::new();
    let session = system
        .session_client
        .open_session()
        .await
        .expect("Failed to open session");

    let view = system
        .session_client
        .apply(session.clone(), UiEvent::AddRequested)
        .await
        .expect("Failed to open form");
    let form = view.form.expect("Form should be open");
    assert!(form.editing.is_none());
    assert_eq!(form.draft, ProductDraft::default());

    let view = system
        .session_client
        .apply(
            session.clone(),
            UiEvent::FormSubmitted(ProductDraft {
                name: "X".to_string(),
                price: "10".to_string(),
                category: "C".to_string(),
                stock: "".to_string(),
                description: "".to_string(),
            }),
        )
        .await
        .expect("Failed to submit form");

    // The form closed and the new record leads the list.
    assert!(view.form.is_none());
    assert_eq!(view.page_view.items.len(), 6);
    let added = &view.page_view.items[0];
    assert_eq!(added.id, 6, "id must exceed every seeded id");
    assert_eq!(added.name, "X");
    assert_eq!(added.price, 10);
    assert_eq!(added.category, "C");
    assert_eq!(added.stock, 0, "blank stock becomes 0");

    // The rest of the catalog is untouched, in order.
    assert_eq!(view.page_view.items[1].name, "Wireless Mouse");

    // The record is retrievable from the store directly as well.
    let stored = system
        .catalog_client
        .get(6)
        .await
        .expect("Failed to get product")
        .expect("Product not found");
    assert_eq!(stored.name, "X");

    system.shutdown().await.expect("Failed to shutdown system");
}

/// Editing preserves the identifier, the position, and every unedited field.
#[tokio::test]
async fn test_edit_preserves_id_and_unedited_fields() {
    let system = CatalogSystem::new();
    let session = system
        .session_client
        .open_session()
        .await
        .expect("Failed to open session");

    let view = system
        .session_client
        .apply(session.clone(), UiEvent::EditRequested(3))
        .await
        .expect("Failed to open edit form");
    let form = view.form.expect("Form should be open");
    assert_eq!(form.editing, Some(3));
    assert_eq!(form.draft.name, "Office Chair");
    assert_eq!(form.draft.price, "5499");

    // Change only the price; every other field rides along from the prefill.
    let mut draft = form.draft.clone();
    draft.price = "5999".to_string();
    let view = system
        .session_client
        .apply(session.clone(), UiEvent::FormSubmitted(draft))
        .await
        .expect("Failed to submit edit");

    assert!(view.form.is_none());
    assert_eq!(view.page_view.items.len(), 5);
    let edited = &view.page_view.items[2];
    assert_eq!(edited.id, 3, "identifier is immutable");
    assert_eq!(edited.price, 5999);
    assert_eq!(edited.name, "Office Chair");
    assert_eq!(edited.stock, 5);
    assert_eq!(
        edited.description,
        "Ergonomic office chair with adjustable height and lumbar support."
    );

    system.shutdown().await.expect("Failed to shutdown system");
}

/// An invalid draft keeps the form open with per-field messages and never
/// reaches the store; cancelling closes the form without a change.
#[tokio::test]
async fn test_validation_failure_keeps_form_open() {
    let system = CatalogSystem::new();
    let session = system
        .session_client
        .open_session()
        .await
        .expect("Failed to open session");

    system
        .session_client
        .apply(session.clone(), UiEvent::AddRequested)
        .await
        .expect("Failed to open form");

    let view = system
        .session_client
        .apply(
            session.clone(),
            UiEvent::FormSubmitted(ProductDraft::default()),
        )
        .await
        .expect("Submit itself must not fail");

    let form = view.form.expect("Form should stay open on rejection");
    assert_eq!(form.errors.get(FormField::Name), Some("Required"));
    assert_eq!(form.errors.get(FormField::Price), Some("Enter valid price"));
    assert_eq!(form.errors.get(FormField::Category), Some("Required"));
    assert_eq!(view.page_view.items.len(), 5, "store must be untouched");

    let view = system
        .session_client
        .apply(session.clone(), UiEvent::FormCancelled)
        .await
        .expect("Failed to cancel form");
    assert!(view.form.is_none());
    assert_eq!(view.page_view.items.len(), 5);

    system.shutdown().await.expect("Failed to shutdown system");
}

/// Page slices partition the filtered list; a page beyond the end stays
/// requested as-is and renders empty.
#[tokio::test]
async fn test_pagination_is_exact_and_unclamped() {
    let seed: Vec<Product> = (1..=8)
        .map(|i| Product::new(i, format!("Item {i}"), 100, "Misc", 1, ""))
        .collect();
    let system = CatalogSystem::with_seed(seed.clone());
    let session = system
        .session_client
        .open_session()
        .await
        .expect("Failed to open session");

    let first = system
        .session_client
        .apply(session.clone(), UiEvent::Refresh)
        .await
        .expect("Failed to refresh");
    assert_eq!(first.page_view.total_pages, 2);
    assert_eq!(first.page_view.items.len(), 6);

    let second = system
        .session_client
        .apply(session.clone(), UiEvent::PageRequested(2))
        .await
        .expect("Failed to change page");
    assert_eq!(second.page_view.items.len(), 2);

    // Concatenated pages reproduce the list exactly once each.
    let mut seen = first.page_view.items.clone();
    seen.extend(second.page_view.items.clone());
    assert_eq!(seen, seed);

    // Jumping past the end is honored literally.
    let beyond = system
        .session_client
        .apply(session.clone(), UiEvent::PageRequested(5))
        .await
        .expect("Failed to change page");
    assert_eq!(beyond.page_view.page, 5);
    assert!(beyond.page_view.items.is_empty());
    assert_eq!(beyond.page_view.total_pages, 2);

    // Narrowing the filter does not reset the page either.
    let narrowed = system
        .session_client
        .apply(session.clone(), UiEvent::SearchChanged("Item 1".to_string()))
        .await
        .expect("Failed to search");
    assert_eq!(narrowed.page_view.page, 5);
    assert!(narrowed.page_view.items.is_empty());

    system.shutdown().await.expect("Failed to shutdown system");
}

/// Submitting an edit for an id that is gone changes no rows and still
/// closes the form.
#[tokio::test]
async fn test_edit_of_missing_id_is_silent() {
    let system = CatalogSystem::new();
    let session = system
        .session_client
        .open_session()
        .await
        .expect("Failed to open session");

    let view = system
        .session_client
        .apply(session.clone(), UiEvent::EditRequested(99))
        .await
        .expect("Failed to open edit form");
    let form = view.form.expect("Form should be open");
    assert_eq!(form.editing, Some(99));
    // Nothing to prefill from: the draft is empty.
    assert_eq!(form.draft, ProductDraft::default());

    let view = system
        .session_client
        .apply(
            session.clone(),
            UiEvent::FormSubmitted(ProductDraft {
                name: "Ghost".to_string(),
                price: "1".to_string(),
                category: "None".to_string(),
                stock: "".to_string(),
                description: "".to_string(),
            }),
        )
        .await
        .expect("Submit must not fail for a missing target");

    assert!(view.form.is_none());
    assert_eq!(view.page_view.items.len(), 5, "no rows changed");
    assert!(view.page_view.items.iter().all(|p| p.name != "Ghost"));

    system.shutdown().await.expect("Failed to shutdown system");
}
