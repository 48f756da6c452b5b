//! Session state container

use petmatch_domain::{PetId, PetRecord, SearchForm};

use super::favorites::FavoritesList;
use super::notice::Notice;
use super::pagination::{page_range, total_pages};

/// Everything one browser session remembers between renders.
///
/// Invariants:
/// - a new result set always resets the current page to 1
/// - the current page is always within `[1, total_pages]` (1 when empty)
/// - selecting or clearing a selection never touches results or favorites
#[derive(Debug, Clone)]
pub struct SessionState {
    results: Option<Vec<PetRecord>>,
    selected: Option<PetId>,
    page: usize,
    favorites: FavoritesList,
    notice: Option<Notice>,
    last_form: SearchForm,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            results: None,
            selected: None,
            page: 1,
            favorites: FavoritesList::new(),
            notice: None,
            last_form: SearchForm::default(),
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the result set wholesale and go back to page 1.
    pub fn set_results(&mut self, records: Vec<PetRecord>) {
        self.results = Some(records);
        self.page = 1;
    }

    /// Cached result set of the last successful search, if any.
    pub fn results(&self) -> Option<&[PetRecord]> {
        self.results.as_deref()
    }

    /// A record from the cached result set.
    pub fn result_record(&self, id: PetId) -> Option<&PetRecord> {
        self.results.as_deref()?.iter().find(|record| record.id == id)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.results.as_ref().map_or(0, Vec::len))
    }

    /// Move to `page`, clamped into `[1, total_pages]`.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages().max(1));
    }

    /// Records shown on the current page.
    pub fn current_page_records(&self) -> &[PetRecord] {
        match self.results.as_deref() {
            Some(records) => &records[page_range(records.len(), self.page)],
            None => &[],
        }
    }

    pub fn selected(&self) -> Option<PetId> {
        self.selected
    }

    pub fn select(&mut self, id: PetId) {
        self.selected = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn favorites(&self) -> &FavoritesList {
        &self.favorites
    }

    pub fn favorites_mut(&mut self) -> &mut FavoritesList {
        &mut self.favorites
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    /// Consume the pending notice so it is shown exactly once.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn last_form(&self) -> &SearchForm {
        &self.last_form
    }

    pub fn remember_form(&mut self, form: SearchForm) {
        self.last_form = form;
    }
}
