//! JSON lookups for breeds and organizations

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use petmatch_domain::{AnimalType, OrganizationSummary, PetMatchError};
use serde::Deserialize;

use crate::context::AppContext;

/// Domain error rendered as a JSON body with a matching status
#[derive(Debug)]
pub struct ApiError(pub PetMatchError);

impl From<PetMatchError> for ApiError {
    fn from(value: PetMatchError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            PetMatchError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            PetMatchError::NotFound(_) => StatusCode::NOT_FOUND,
            PetMatchError::Config(_) => StatusCode::SERVICE_UNAVAILABLE,
            PetMatchError::Upstream(_) => StatusCode::BAD_GATEWAY,
            PetMatchError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::warn!(error = %self.0, kind = self.0.label(), %status, "Lookup failed");
        (status, Json(self.0)).into_response()
    }
}

/// `GET /api/breeds/{type}`; the type is the form label, e.g. `Small & Furry`.
pub async fn breeds(
    State(ctx): State<Arc<AppContext>>,
    Path(animal_type): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    let animal_type: AnimalType = animal_type.parse().map_err(PetMatchError::InvalidInput)?;
    Ok(Json(ctx.controller.breeds(animal_type).await?))
}

#[derive(Debug, Default, Deserialize)]
pub struct OrganizationsQuery {
    #[serde(default)]
    pub location: String,
}

/// `GET /api/organizations?location=`
pub async fn organizations(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<OrganizationsQuery>,
) -> Result<Json<Vec<OrganizationSummary>>, ApiError> {
    Ok(Json(ctx.controller.organizations(&query.location).await?))
}
