//! HTTP handlers (browser actions and JSON lookups)

pub mod favorites;
pub mod health;
pub mod lookups;
pub mod navigation;
pub mod pages;
pub mod search;

use axum::response::Redirect;
use petmatch_core::presenter::Tab;
use serde::Deserialize;

pub use lookups::ApiError;

/// Tab field posted by every per-record action
#[derive(Debug, Default, Deserialize)]
pub struct TabInput {
    #[serde(default)]
    pub tab: Option<String>,
}

impl TabInput {
    /// Posted tab; unknown or missing values mean the search tab.
    pub fn tab(&self) -> Tab {
        parse_tab(self.tab.as_deref())
    }
}

/// Record action: which record, from which tab
#[derive(Debug, Deserialize)]
pub struct RecordInput {
    pub pet_id: u64,
    #[serde(default)]
    pub tab: Option<String>,
}

impl RecordInput {
    pub fn tab(&self) -> Tab {
        parse_tab(self.tab.as_deref())
    }
}

fn parse_tab(raw: Option<&str>) -> Tab {
    raw.and_then(|value| value.parse().ok()).unwrap_or_default()
}

/// Post/redirect/get target for a tab.
pub(crate) fn back_to(tab: impl std::fmt::Display) -> Redirect {
    Redirect::to(&format!("/?tab={tab}"))
}
