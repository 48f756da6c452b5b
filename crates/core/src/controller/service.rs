//! View controller - wires user actions to the directory and session state

use std::sync::Arc;

use petmatch_domain::{
    AnimalType, OrganizationSummary, PetId, PetMatchError, Result, SearchForm,
};
use tracing::{debug, info, warn};

use super::views::{
    DetailOutcome, FavoritesTabView, ResultPage, SearchOutcome, SearchTabView,
    DETAIL_UNAVAILABLE_MESSAGE,
};
use crate::directory_ports::PetDirectory;
use crate::presenter::{present_card, present_detail, RenderContext, Tab};
use crate::session::{Notice, SessionState};

/// Shown instead of the raw error when no API credentials are configured.
pub const MISSING_CREDENTIALS_MESSAGE: &str =
    "Petfinder API credentials are missing. Please set them in your environment variables or secrets.";

const NO_RESULTS_MESSAGE: &str = "No pets found with those criteria. Try expanding your search.";

/// User-facing text for a failed operation.
pub fn user_message(operation: &str, err: &PetMatchError) -> String {
    match err {
        PetMatchError::Config(_) => MISSING_CREDENTIALS_MESSAGE.to_string(),
        PetMatchError::Upstream(detail)
        | PetMatchError::NotFound(detail)
        | PetMatchError::InvalidInput(detail)
        | PetMatchError::Internal(detail) => format!("Error {operation}: {detail}"),
    }
}

/// Drives every tab of the UI
///
/// Actions take the session mutably and record their outcome as a notice;
/// views take it immutably and never fail. Errors stop here.
pub struct ViewController {
    directory: Arc<dyn PetDirectory>,
}

impl ViewController {
    pub fn new(directory: Arc<dyn PetDirectory>) -> Self {
        Self { directory }
    }

    /// Run a search from a submitted form.
    ///
    /// Only a non-empty success replaces the cached results; empty results
    /// and failures keep whatever the user was looking at.
    pub async fn submit_search(
        &self,
        session: &mut SessionState,
        form: SearchForm,
    ) -> SearchOutcome {
        let query = form.to_query();
        session.remember_form(form);

        let outcome = match self.directory.search(&query).await {
            Ok(records) if records.is_empty() => {
                session.set_notice(Notice::info(NO_RESULTS_MESSAGE));
                SearchOutcome::Empty
            }
            Ok(records) => {
                let count = records.len();
                session.set_results(records);
                session.set_notice(Notice::success(format!("Found {count} pets!")));
                SearchOutcome::Found(count)
            }
            Err(err) => {
                warn!(error = %err, animal_type = %query.animal_type, "Search failed");
                session.set_notice(Notice::error(user_message("searching pets", &err)));
                SearchOutcome::Failed(err)
            }
        };

        info!(animal_type = %query.animal_type, outcome = ?outcome, "Search submitted");
        outcome
    }

    /// Move to another result page (clamped).
    pub fn change_page(&self, session: &mut SessionState, page: usize) {
        session.set_page(page);
        debug!(page = session.page(), "Result page changed");
    }

    /// Show the detail view for `id`.
    pub fn select(&self, session: &mut SessionState, id: PetId) {
        session.select(id);
    }

    /// Leave the detail view.
    pub fn back(&self, session: &mut SessionState) {
        session.clear_selection();
    }

    /// Add a record to favorites.
    ///
    /// Uses the cached search snapshot when available and falls back to a
    /// live fetch otherwise. Adding a present id changes nothing.
    pub async fn add_favorite(&self, session: &mut SessionState, id: PetId) -> Result<bool> {
        if session.favorites().contains(id) {
            return Ok(false);
        }

        let record = match session.result_record(id) {
            Some(record) => record.clone(),
            None => match self.directory.get_record(id).await {
                Ok(record) => record,
                Err(err) => {
                    warn!(error = %err, pet_id = %id, "Could not load record for favorites");
                    session.set_notice(Notice::error(user_message("getting pet details", &err)));
                    return Err(err);
                }
            },
        };

        let name = record.name.clone();
        session.favorites_mut().add(record);
        session.set_notice(Notice::success(format!("Added {name} to favorites!")));
        Ok(true)
    }

    /// Remove a record from favorites; absent ids are ignored.
    pub fn remove_favorite(&self, session: &mut SessionState, id: PetId) -> bool {
        match session.favorites_mut().remove(id) {
            Some(record) => {
                let message = format!("Removed {} from favorites!", record.name);
                session.set_notice(Notice::success(message));
                true
            }
            None => false,
        }
    }

    /// Current state of the search tab.
    pub async fn search_view(&self, session: &SessionState) -> SearchTabView {
        let context = RenderContext::new(Tab::Search);

        if let Some(id) = session.selected() {
            return SearchTabView::Detail(self.load_detail(session, id, context).await);
        }

        let form = session.last_form().clone();
        match session.results() {
            Some(records) => {
                let cards = session
                    .current_page_records()
                    .iter()
                    .map(|record| {
                        present_card(record, session.favorites().contains(record.id), context)
                    })
                    .collect();
                let page = ResultPage {
                    cards,
                    page: session.page(),
                    total_pages: session.total_pages(),
                    total: records.len(),
                };
                SearchTabView::Results { form, page }
            }
            None => SearchTabView::Form { form },
        }
    }

    /// Current state of the favorites tab.
    pub async fn favorites_view(&self, session: &SessionState) -> FavoritesTabView {
        let context = RenderContext::new(Tab::Favorites);

        if session.favorites().is_empty() {
            return FavoritesTabView::Empty;
        }

        if let Some(id) = session.selected() {
            return FavoritesTabView::Detail(self.load_detail(session, id, context).await);
        }

        FavoritesTabView::List(
            session.favorites().iter().map(|record| present_card(record, true, context)).collect(),
        )
    }

    pub async fn breeds(&self, animal_type: AnimalType) -> Result<Vec<String>> {
        self.directory.list_breeds(animal_type).await
    }

    pub async fn organizations(&self, location: &str) -> Result<Vec<OrganizationSummary>> {
        self.directory.list_organizations(location).await
    }

    /// Detail records are always fetched live.
    async fn load_detail(
        &self,
        session: &SessionState,
        id: PetId,
        context: RenderContext,
    ) -> DetailOutcome {
        match self.directory.get_record(id).await {
            Ok(record) => {
                let is_favorite = session.favorites().contains(record.id);
                DetailOutcome::Found(present_detail(&record, is_favorite, context))
            }
            Err(err) => {
                warn!(error = %err, pet_id = %id, "Failed to load pet details");
                DetailOutcome::Unavailable {
                    id,
                    message: DETAIL_UNAVAILABLE_MESSAGE,
                    back_element_id: context.element_id("back", id),
                }
            }
        }
    }
}
