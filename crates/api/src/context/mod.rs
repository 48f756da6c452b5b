//! Application context - dependency injection container

use std::sync::Arc;
use std::time::Duration;

use petmatch_core::{PetDirectory, ViewController};
use petmatch_domain::{Config, Result};
use petmatch_infra::{CredentialManager, HttpClient, PetfinderClient};

use crate::sessions::SessionStore;

const USER_AGENT: &str = concat!("petmatch/", env!("CARGO_PKG_VERSION"));

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub controller: ViewController,
    pub sessions: SessionStore,
}

impl AppContext {
    /// Wire the Petfinder client, credential manager, and session store.
    ///
    /// Missing API credentials do not fail construction; they surface as a
    /// notice on the first search.
    ///
    /// # Errors
    /// Returns `PetMatchError::Config` for an invalid base URL or HTTP client
    /// settings.
    pub fn new(config: Config) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(config.upstream.timeout_seconds.map(Duration::from_secs))
            .user_agent(USER_AGENT)
            .build()?;

        let credentials = Arc::new(CredentialManager::new(http.clone(), &config.upstream));
        let directory = PetfinderClient::new(http, &config.upstream.base_url, credentials)?;

        tracing::info!(
            base_url = %config.upstream.base_url,
            credentials_configured = config.upstream.credentials().is_some(),
            "Directory client initialized"
        );

        Ok(Self::with_directory(config, Arc::new(directory)))
    }

    /// Build a context around an existing directory implementation.
    pub fn with_directory(config: Config, directory: Arc<dyn PetDirectory>) -> Self {
        let sessions = SessionStore::new(Duration::from_secs(config.server.session_idle_seconds));
        Self { controller: ViewController::new(directory), sessions, config }
    }
}
