//! Bearer credential manager
//!
//! Obtains a bearer token through the OAuth 2.0 client-credentials grant and
//! reuses it until it nears expiry. One credential is shared by the whole
//! process since the client credentials are process-wide.

use std::sync::Arc;

use async_trait::async_trait;
use petmatch_core::{AccessTokenProvider, Clock, SystemClock};
use petmatch_domain::{ClientCredentials, Credential, PetMatchError, Result, UpstreamConfig};
use reqwest::Method;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::errors::status_error;
use crate::http::HttpClient;

/// Token endpoint response (RFC 6749 §5.1 subset)
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

/// Caches one [`Credential`] and refreshes it on demand
pub struct CredentialManager {
    http: HttpClient,
    token_url: String,
    credentials: Option<ClientCredentials>,
    clock: Arc<dyn Clock>,
    current: RwLock<Option<Credential>>,
}

impl CredentialManager {
    /// Create a manager for the configured upstream.
    ///
    /// Missing credentials are accepted here and reported on first use.
    pub fn new(http: HttpClient, config: &UpstreamConfig) -> Self {
        Self {
            http,
            token_url: format!("{}/oauth2/token", config.base_url.trim_end_matches('/')),
            credentials: config.credentials(),
            clock: Arc::new(SystemClock),
            current: RwLock::new(None),
        }
    }

    /// Replace the clock used for expiry checks.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Return a valid token, refreshing it when absent or expired.
    ///
    /// # Errors
    /// - `PetMatchError::Config` when the API key or secret is missing
    /// - `PetMatchError::Upstream` when the token exchange fails
    pub async fn get_token(&self) -> Result<String> {
        let now = self.clock.now();
        if let Some(credential) = self.current.read().await.as_ref() {
            if credential.is_valid_at(now) {
                debug!(
                    seconds_left = credential.seconds_until_expiry(now),
                    "Using cached access token"
                );
                return Ok(credential.token.clone());
            }
        }

        let mut current = self.current.write().await;
        // Another request may have refreshed while we waited for the lock.
        let now = self.clock.now();
        if let Some(credential) = current.as_ref().filter(|c| c.is_valid_at(now)) {
            return Ok(credential.token.clone());
        }

        let credential = self.request_credential().await?;
        let token = credential.token.clone();
        *current = Some(credential);
        Ok(token)
    }

    /// Drop the cached credential so the next call refreshes.
    pub async fn invalidate(&self) {
        *self.current.write().await = None;
        debug!("Access token invalidated");
    }

    /// Seconds until the cached credential stops being reused.
    pub async fn seconds_until_expiry(&self) -> Option<i64> {
        let now = self.clock.now();
        self.current.read().await.as_ref().map(|credential| credential.seconds_until_expiry(now))
    }

    async fn request_credential(&self) -> Result<Credential> {
        let credentials = self.credentials.as_ref().ok_or_else(|| {
            PetMatchError::Config("Petfinder API key and secret are not configured".to_string())
        })?;

        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", credentials.api_key.as_str()),
            ("client_secret", credentials.api_secret.as_str()),
        ];
        let request = self.http.request(Method::POST, &self.token_url).form(&form);

        let response = self.http.send(request).await.map_err(|err| {
            warn!(error = %err, "Access token request failed");
            PetMatchError::Upstream(format!("access token request failed: {err}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            let err = status_error(status);
            warn!(%status, "Access token request rejected");
            return Err(PetMatchError::Upstream(format!("access token request failed: {err}")));
        }

        let body: TokenResponse = response.json().await.map_err(|err| {
            PetMatchError::Upstream(format!("access token response could not be parsed: {err}"))
        })?;

        let issued_at = self.clock.now();
        let credential = Credential::from_grant(body.access_token, body.expires_in, issued_at)
            .inspect_err(|err| warn!(error = %err, "Access token lifetime rejected"))?;
        info!(expires_at = %credential.expires_at, "Access token refreshed");
        Ok(credential)
    }
}

#[async_trait]
impl AccessTokenProvider for CredentialManager {
    async fn access_token(&self) -> Result<String> {
        self.get_token().await
    }
}
