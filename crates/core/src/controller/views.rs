//! View states chosen by the controller for each tab

use petmatch_domain::{PetId, PetMatchError, SearchForm};

use crate::presenter::{PetCardView, PetDetailView};

/// Message shown when a detail record cannot be loaded.
pub const DETAIL_UNAVAILABLE_MESSAGE: &str = "Unable to retrieve pet details. Please try again.";

/// One page of the cached result set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPage {
    pub cards: Vec<PetCardView>,
    /// 1-based current page
    pub page: usize,
    pub total_pages: usize,
    /// Records in the whole result set
    pub total: usize,
}

impl ResultPage {
    /// The page selector is only offered when there is more than one page.
    pub fn has_pager(&self) -> bool {
        self.total_pages > 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTabView {
    /// No cached results yet
    Form { form: SearchForm },
    /// Form plus the current page of cached results
    Results { form: SearchForm, page: ResultPage },
    Detail(DetailOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritesTabView {
    Empty,
    List(Vec<PetCardView>),
    Detail(DetailOutcome),
}

/// Result of loading the selected record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailOutcome {
    Found(PetDetailView),
    Unavailable { id: PetId, message: &'static str, back_element_id: String },
}

/// What a submitted search did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Results replaced with this many records
    Found(usize),
    /// Upstream returned nothing; prior results kept
    Empty,
    /// Request failed; prior results kept
    Failed(PetMatchError),
}

impl SearchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}
