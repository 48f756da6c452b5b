//! Render context and element id construction

use petmatch_domain::{impl_choice_conversions, PetId};
use serde::{Deserialize, Serialize};

/// Tab a record is being rendered in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Search,
    Favorites,
}

impl_choice_conversions!(Tab {
    Search => "search",
    Favorites => "favorites",
});

/// Parameters shared by every renderer for one view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderContext {
    pub tab: Tab,
}

impl RenderContext {
    pub fn new(tab: Tab) -> Self {
        Self { tab }
    }

    /// Stable element id of the form `{action}_{tab}_{id}`.
    pub fn element_id(&self, action: &str, id: PetId) -> String {
        format!("{action}_{}_{id}", self.tab)
    }
}

/// The favorite button offered for a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoriteToggle {
    Add { element_id: String },
    Remove { element_id: String },
}

impl FavoriteToggle {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Add { .. } => "Add to Favorites",
            Self::Remove { .. } => "Remove from Favorites",
        }
    }

    pub fn element_id(&self) -> &str {
        match self {
            Self::Add { element_id } | Self::Remove { element_id } => element_id,
        }
    }

    pub fn is_remove(&self) -> bool {
        matches!(self, Self::Remove { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_ids_embed_action_tab_and_id() {
        assert_eq!(
            RenderContext::new(Tab::Search).element_id("details", PetId(42)),
            "details_search_42"
        );
        assert_eq!(
            RenderContext::new(Tab::Favorites).element_id("unfav", PetId(7)),
            "unfav_favorites_7"
        );
    }

    #[test]
    fn tab_parses_from_query_value() {
        assert_eq!("favorites".parse::<Tab>(), Ok(Tab::Favorites));
        assert!("about".parse::<Tab>().is_err());
    }
}
