//! Detail selection

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Form, State};
use axum::http::HeaderMap;
use axum::response::Response;
use petmatch_domain::PetId;

use super::{back_to, RecordInput, TabInput};
use crate::context::AppContext;
use crate::utils::logging::log_action;

/// "View Details": the next render of the tab shows the record.
pub async fn select(
    State(ctx): State<Arc<AppContext>>,
    headers: HeaderMap,
    Form(input): Form<RecordInput>,
) -> Response {
    let started = Instant::now();
    let session = ctx.sessions.resolve(&headers).await;
    ctx.controller.select(&mut *session.state.lock().await, PetId(input.pet_id));

    log_action("select", session.log_id(), started.elapsed(), true);
    session.attach(back_to(input.tab()))
}

/// "Back": the next render shows the list again.
pub async fn back(
    State(ctx): State<Arc<AppContext>>,
    headers: HeaderMap,
    Form(input): Form<TabInput>,
) -> Response {
    let started = Instant::now();
    let session = ctx.sessions.resolve(&headers).await;
    ctx.controller.back(&mut *session.state.lock().await);

    log_action("back", session.log_id(), started.elapsed(), true);
    session.attach(back_to(input.tab()))
}
