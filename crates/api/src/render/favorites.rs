//! Favorites tab

use petmatch_core::controller::FavoritesTabView;
use petmatch_core::presenter::Tab;

use super::pet;

const EMPTY_MESSAGE: &str =
    "You haven't added any pets to your favorites yet. Start searching to find your perfect match!";

pub fn favorites_tab(view: &FavoritesTabView) -> String {
    let mut out = String::from("<h3>Your Favorite Pets</h3>");
    match view {
        FavoritesTabView::Empty => {
            out.push_str(&format!(
                r#"<div class="notice notice-info">{}</div>"#,
                super::escape(EMPTY_MESSAGE)
            ));
        }
        FavoritesTabView::List(cards) => {
            for card in cards {
                out.push_str("<hr>");
                out.push_str(&pet::card(card, Tab::Favorites));
            }
        }
        FavoritesTabView::Detail(outcome) => out.push_str(&pet::detail(outcome, Tab::Favorites)),
    }
    out
}
