//! # Catalog Desk Demo
//!
//! A scripted walkthrough of the catalog application:
//! 1. Start the [`CatalogSystem`] (actors + seeded store).
//! 2. Open a session and browse the catalog in both views.
//! 3. Search, add a product through the form, and edit an existing one.
//!
//! Rendered snapshots are printed between steps; set `RUST_LOG=info` (or
//! `debug`) to watch the actors underneath.

use catalog_desk::form::ProductDraft;
use catalog_desk::lifecycle::{setup_tracing, CatalogSystem};
use catalog_desk::model::ViewMode;
use catalog_desk::render;
use catalog_desk::session_actor::{SessionView, UiEvent};
use tracing::{error, info, Instrument};

/// Paint one snapshot the way a host surface would: the active view, the
/// pager when it has anything to say, and the form when it is open.
fn paint(view: &SessionView) {
    match view.view {
        ViewMode::Table => println!("{}", render::table(&view.page_view.items)),
        ViewMode::Card => println!("{}", render::cards(&view.page_view.items)),
    }
    let pager = render::pager(view.page_view.page, view.page_view.total_pages);
    if !pager.is_empty() {
        println!("{}", pager);
    }
    if let Some(form) = &view.form {
        println!("{}", render::form(form));
    }
    println!();
}

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting catalog application");

    // Create the entire system (starts all actors, seeds the store)
    let system = CatalogSystem::new();

    let span = tracing::info_span!("session_open");
    let session = async {
        info!("Opening a session");
        system
            .session_client
            .open_session()
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(session = %session, "Session opened");

    // Browse the seed catalog, both views.
    let view = system
        .session_client
        .apply(session.clone(), UiEvent::Refresh)
        .await
        .map_err(|e| e.to_string())?;
    paint(&view);

    let view = system
        .session_client
        .apply(session.clone(), UiEvent::ViewToggled)
        .await
        .map_err(|e| e.to_string())?;
    paint(&view);

    // Back to the table and search for a product.
    system
        .session_client
        .apply(session.clone(), UiEvent::ViewToggled)
        .await
        .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("catalog_search");
    let view = async {
        info!("Searching for \"mouse\"");
        system
            .session_client
            .apply(session.clone(), UiEvent::SearchChanged("mouse".to_string()))
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;
    paint(&view);

    system
        .session_client
        .apply(session.clone(), UiEvent::SearchChanged(String::new()))
        .await
        .map_err(|e| e.to_string())?;

    // Add two products through the form; the second overflows onto page 2.
    let span = tracing::info_span!("product_entry");
    let result = async {
        info!("Adding products through the form");
        system
            .session_client
            .apply(session.clone(), UiEvent::AddRequested)
            .await?;
        system
            .session_client
            .apply(
                session.clone(),
                UiEvent::FormSubmitted(ProductDraft {
                    name: "Desk Lamp".to_string(),
                    price: "1299".to_string(),
                    category: "Furniture".to_string(),
                    stock: "12".to_string(),
                    description: "Clip-on LED desk lamp with two brightness levels.".to_string(),
                }),
            )
            .await?;
        system
            .session_client
            .apply(session.clone(), UiEvent::AddRequested)
            .await?;
        system
            .session_client
            .apply(
                session.clone(),
                UiEvent::FormSubmitted(ProductDraft {
                    name: "Water Bottle".to_string(),
                    price: "499".to_string(),
                    category: "Sports".to_string(),
                    stock: "".to_string(),
                    description: "Insulated steel bottle, 750ml.".to_string(),
                }),
            )
            .await
    }
    .instrument(span)
    .await;

    let view = match result {
        Ok(view) => {
            info!("Products added");
            view
        }
        Err(e) => {
            error!(error = %e, "Product entry failed");
            return Err(e.to_string());
        }
    };
    paint(&view);

    let view = system
        .session_client
        .apply(session.clone(), UiEvent::PageRequested(2))
        .await
        .map_err(|e| e.to_string())?;
    paint(&view);

    // Edit the first seeded product: restock the mouse.
    let span = tracing::info_span!("product_edit");
    let view = async {
        info!("Editing product 1");
        system
            .session_client
            .apply(session.clone(), UiEvent::PageRequested(1))
            .await?;
        let view = system
            .session_client
            .apply(session.clone(), UiEvent::EditRequested(1))
            .await?;
        let mut draft = view
            .form
            .as_ref()
            .map(|form| form.draft.clone())
            .unwrap_or_default();
        draft.stock = "40".to_string();
        system
            .session_client
            .apply(session.clone(), UiEvent::FormSubmitted(draft))
            .await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;
    paint(&view);

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
