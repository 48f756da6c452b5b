//! Favorites actions

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Form, State};
use axum::http::HeaderMap;
use axum::response::Response;
use petmatch_domain::PetId;

use super::{back_to, RecordInput};
use crate::context::AppContext;
use crate::utils::logging::log_action;

pub async fn add(
    State(ctx): State<Arc<AppContext>>,
    headers: HeaderMap,
    Form(input): Form<RecordInput>,
) -> Response {
    let started = Instant::now();
    let session = ctx.sessions.resolve(&headers).await;

    // Failures already left an error notice in the session.
    let success = {
        let mut state = session.state.lock().await;
        ctx.controller.add_favorite(&mut state, PetId(input.pet_id)).await.is_ok()
    };

    log_action("favorites::add", session.log_id(), started.elapsed(), success);
    session.attach(back_to(input.tab()))
}

pub async fn remove(
    State(ctx): State<Arc<AppContext>>,
    headers: HeaderMap,
    Form(input): Form<RecordInput>,
) -> Response {
    let started = Instant::now();
    let session = ctx.sessions.resolve(&headers).await;
    let removed =
        ctx.controller.remove_favorite(&mut *session.state.lock().await, PetId(input.pet_id));

    tracing::debug!(pet_id = input.pet_id, removed, "Favorite removal");
    log_action("favorites::remove", session.log_id(), started.elapsed(), true);
    session.attach(back_to(input.tab()))
}
