//! Entity trait implementation for the Session domain type.
//!
//! This is the application controller: every [`UiEvent`] is handled here,
//! sequentially, with the catalog client injected as the actor context. The
//! handler mutates the session's state, talks to the catalog where a submit
//! requires it, and returns a [`SessionView`] snapshot for the renderers.

use crate::catalog_actor::CatalogError;
use crate::clients::{ActorClient, CatalogClient};
use crate::form::{validate, ProductDraft};
use crate::framework::ActorEntity;
use crate::model::{FormState, Session, SessionCreate};
use crate::query;
use crate::session_actor::{FormView, SessionView, UiEvent};
use async_trait::async_trait;
use tracing::warn;

#[async_trait]
impl ActorEntity for Session {
    type Id = String;
    type CreateParams = SessionCreate;
    type UpdateParams = ();
    type Action = UiEvent;
    type ActionResult = SessionView;
    type Context = CatalogClient;

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create_params(id: String, _params: SessionCreate) -> Result<Self, String> {
        Ok(Self::new(id))
    }

    async fn on_update(&mut self, _update: (), _ctx: &CatalogClient) -> Result<(), String> {
        Ok(())
    }

    /// Apply one user event and return the resulting snapshot.
    async fn handle_action(
        &mut self,
        event: UiEvent,
        ctx: &CatalogClient,
    ) -> Result<SessionView, String> {
        match event {
            UiEvent::Refresh => {}
            UiEvent::ViewToggled => {
                self.view = self.view.toggled();
            }
            UiEvent::SearchChanged(text) => {
                // The page stays where it was, even if the filtered set
                // shrinks below it; a too-far page renders empty.
                self.search = text;
            }
            UiEvent::PageRequested(page) => {
                self.page = page;
            }
            UiEvent::AddRequested => {
                self.form = Some(FormState::add());
            }
            UiEvent::EditRequested(id) => {
                self.form = Some(FormState::edit(id));
            }
            UiEvent::FormCancelled => {
                self.form = None;
            }
            UiEvent::FormSubmitted(draft) => match validate(&draft) {
                Err(errors) => {
                    // Invalid drafts keep the form open and never reach the
                    // catalog; the messages ride along in the snapshot.
                    if let Some(form) = &mut self.form {
                        form.errors = errors;
                    }
                }
                Ok(validated) => {
                    let editing = self.form.as_ref().and_then(|form| form.editing);
                    match editing {
                        Some(id) => {
                            match ctx.update_product(id, validated.into_update()).await {
                                Ok(_) => {}
                                Err(CatalogError::NotFound(_)) => {
                                    // Edit target vanished: no rows changed.
                                    warn!(session = %self.id, product_id = id, "Edit target missing");
                                }
                                Err(e) => return Err(e.to_string()),
                            }
                        }
                        None => {
                            ctx.add_product(validated.into_create())
                                .await
                                .map_err(|e| e.to_string())?;
                        }
                    }
                    self.form = None;
                }
            },
        }

        self.snapshot(ctx).await
    }
}

impl Session {
    /// Recompute the full view: list the catalog, run the query pipeline,
    /// and resolve the edit target (by id, freshly) into a prefilled draft.
    async fn snapshot(&self, ctx: &CatalogClient) -> Result<SessionView, String> {
        let products = ctx.list().await.map_err(|e| e.to_string())?;
        let page_view = query::page_view(&products, &self.search, self.page);

        let form = self.form.as_ref().map(|state| {
            let draft = state
                .editing
                .and_then(|id| products.iter().find(|p| p.id == id))
                .map(ProductDraft::from_product)
                .unwrap_or_default();
            FormView {
                editing: state.editing,
                draft,
                errors: state.errors.clone(),
            }
        });

        Ok(SessionView {
            view: self.view,
            search: self.search.clone(),
            page_view,
            form,
        })
    }
}
