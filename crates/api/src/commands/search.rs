//! Search submission and paging

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Form, State};
use axum::http::HeaderMap;
use axum::response::Response;
use petmatch_core::presenter::Tab;
use petmatch_core::session::Notice;
use petmatch_domain::{PetMatchError, Result, SearchForm};
use serde::Deserialize;

use super::back_to;
use crate::context::AppContext;
use crate::utils::logging::log_action;

/// Search form as posted by the browser
///
/// Selects arrive as their labels; unchecked boxes are absent.
#[derive(Debug, Default, Deserialize)]
pub struct SearchFormInput {
    #[serde(default)]
    pub animal_type: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub distance_miles: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub gender: String,
    pub good_with_children: Option<String>,
    pub good_with_dogs: Option<String>,
    pub good_with_cats: Option<String>,
    pub house_trained: Option<String>,
    pub special_needs: Option<String>,
}

fn choice<T>(raw: &str) -> Result<T>
where
    T: std::str::FromStr<Err = String> + Default,
{
    if raw.trim().is_empty() {
        return Ok(T::default());
    }
    raw.parse().map_err(PetMatchError::InvalidInput)
}

impl SearchFormInput {
    /// Validate the posted fields into a [`SearchForm`].
    ///
    /// Blank fields take their defaults; the distance is kept as posted and
    /// normalized when the query is built.
    pub fn into_form(self) -> Result<SearchForm> {
        let defaults = SearchForm::default();
        let distance_miles = match self.distance_miles.trim() {
            "" => defaults.distance_miles,
            raw => raw
                .parse()
                .map_err(|_| PetMatchError::InvalidInput(format!("Invalid distance: {raw}")))?,
        };

        Ok(SearchForm {
            animal_type: choice(&self.animal_type)?,
            location: self.location,
            distance_miles,
            age: choice(&self.age)?,
            size: choice(&self.size)?,
            gender: choice(&self.gender)?,
            good_with_children: self.good_with_children.is_some(),
            good_with_dogs: self.good_with_dogs.is_some(),
            good_with_cats: self.good_with_cats.is_some(),
            house_trained: self.house_trained.is_some(),
            special_needs: self.special_needs.is_some(),
        })
    }
}

pub async fn submit_search(
    State(ctx): State<Arc<AppContext>>,
    headers: HeaderMap,
    Form(input): Form<SearchFormInput>,
) -> Response {
    let started = Instant::now();
    let session = ctx.sessions.resolve(&headers).await;

    let success = {
        let mut state = session.state.lock().await;
        match input.into_form() {
            Ok(form) => ctx.controller.submit_search(&mut state, form).await.is_success(),
            Err(err) => {
                state.set_notice(Notice::error(err.to_string()));
                false
            }
        }
    };

    log_action("search", session.log_id(), started.elapsed(), success);
    session.attach(back_to(Tab::Search))
}

#[derive(Debug, Deserialize)]
pub struct PageInput {
    pub page: usize,
}

pub async fn change_page(
    State(ctx): State<Arc<AppContext>>,
    headers: HeaderMap,
    Form(input): Form<PageInput>,
) -> Response {
    let started = Instant::now();
    let session = ctx.sessions.resolve(&headers).await;
    ctx.controller.change_page(&mut *session.state.lock().await, input.page);

    log_action("page", session.log_id(), started.elapsed(), true);
    session.attach(back_to(Tab::Search))
}
