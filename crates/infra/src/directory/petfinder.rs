//! Petfinder v2 directory client

use std::sync::Arc;

use async_trait::async_trait;
use petmatch_core::{AccessTokenProvider, PetDirectory};
use petmatch_domain::constants::{ORGANIZATION_SEARCH_DISTANCE, ORGANIZATION_SEARCH_LIMIT};
use petmatch_domain::{
    AnimalType, OrganizationSummary, PetId, PetMatchError, PetRecord, Result, SearchQuery,
};
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use super::responses::{AnimalResponse, AnimalsResponse, BreedsResponse, OrganizationsResponse};
use crate::errors::status_error;
use crate::http::HttpClient;

/// `PetDirectory` backed by the Petfinder REST API
///
/// Every call obtains a bearer token from the provider first, so an expired
/// token is refreshed transparently. Nothing is retried.
pub struct PetfinderClient {
    http: HttpClient,
    base_url: Url,
    auth: Arc<dyn AccessTokenProvider>,
}

impl PetfinderClient {
    /// # Errors
    /// Returns `PetMatchError::Config` if `base_url` is not an absolute
    /// http(s) URL.
    pub fn new(
        http: HttpClient,
        base_url: &str,
        auth: Arc<dyn AccessTokenProvider>,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| PetMatchError::Config(format!("Invalid API base URL '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(PetMatchError::Config(format!("API base URL cannot be a base: {base_url}")));
        }
        Ok(Self { http, base_url, auth })
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| PetMatchError::Internal("API base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T, P>(&self, url: Url, params: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: serde::Serialize + ?Sized,
    {
        let token = self.auth.access_token().await?;
        let request = self.http.request(Method::GET, url.clone()).bearer_auth(token).query(params);

        let response = self.http.send(request).await.inspect_err(|err| {
            warn!(path = url.path(), error = %err, "Directory request failed");
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(path = url.path(), %status, "Directory request rejected");
            return Err(status_error(status));
        }

        response.json::<T>().await.map_err(|err| {
            warn!(path = url.path(), error = %err, "Directory response could not be parsed");
            PetMatchError::Upstream(format!("invalid response body: {err}"))
        })
    }
}

#[async_trait]
impl PetDirectory for PetfinderClient {
    #[instrument(skip(self, query), fields(animal_type = %query.animal_type))]
    async fn search(&self, query: &SearchQuery) -> Result<Vec<PetRecord>> {
        let url = self.endpoint(&["animals"])?;
        let body: AnimalsResponse = self.get_json(url, &query.to_params()).await?;
        debug!(count = body.animals.len(), "Search returned");
        Ok(body.animals)
    }

    #[instrument(skip(self))]
    async fn get_record(&self, id: PetId) -> Result<PetRecord> {
        let id = id.to_string();
        let url = self.endpoint(&["animals", id.as_str()])?;
        let no_params: [(&str, &str); 0] = [];
        let body: AnimalResponse = self.get_json(url, &no_params).await?;
        Ok(body.animal)
    }

    #[instrument(skip(self))]
    async fn list_breeds(&self, animal_type: AnimalType) -> Result<Vec<String>> {
        let url = self.endpoint(&["types", animal_type.label(), "breeds"])?;
        let no_params: [(&str, &str); 0] = [];
        let body: BreedsResponse = self.get_json(url, &no_params).await?;
        Ok(body.breeds.into_iter().map(|breed| breed.name).collect())
    }

    #[instrument(skip(self))]
    async fn list_organizations(&self, location: &str) -> Result<Vec<OrganizationSummary>> {
        let location = location.trim();
        if location.is_empty() {
            return Err(PetMatchError::InvalidInput("a location is required".to_string()));
        }

        let url = self.endpoint(&["organizations"])?;
        let params = [
            ("location", location.to_string()),
            ("distance", ORGANIZATION_SEARCH_DISTANCE.to_string()),
            ("limit", ORGANIZATION_SEARCH_LIMIT.to_string()),
        ];
        let body: OrganizationsResponse = self.get_json(url, &params).await?;
        Ok(body.organizations)
    }
}
