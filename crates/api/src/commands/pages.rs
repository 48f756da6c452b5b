//! Tab pages

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::{Html, Response};
use serde::Deserialize;

use crate::context::AppContext;
use crate::render::{self, PageTab};

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub tab: Option<String>,
}

/// Render the requested tab and consume the pending notice.
///
/// The detail view of a selected record is fetched live, so this may call
/// the directory.
pub async fn index(
    State(ctx): State<Arc<AppContext>>,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Response {
    let session = ctx.sessions.resolve(&headers).await;
    let tab: PageTab = query.tab.as_deref().and_then(|t| t.parse().ok()).unwrap_or_default();

    let html = {
        let mut state = session.state.lock().await;
        let body = match tab {
            PageTab::Search => render::search_tab(&ctx.controller.search_view(&state).await),
            PageTab::Favorites => {
                render::favorites_tab(&ctx.controller.favorites_view(&state).await)
            }
            PageTab::About => render::about_tab(),
        };
        let notice = state.take_notice();
        render::page(tab, notice.as_ref(), state.favorites().len(), &body)
    };

    session.attach(Html(html))
}
