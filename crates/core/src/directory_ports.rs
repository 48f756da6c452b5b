//! Adoption directory port interfaces
//!
//! These traits define the boundary between the view controller and the
//! upstream directory. Implementations live in `petmatch-infra`.

use async_trait::async_trait;
use petmatch_domain::{AnimalType, OrganizationSummary, PetId, PetRecord, Result, SearchQuery};

/// Read operations against the adoption directory
///
/// Every call is a single attempt. Failures surface as
/// `PetMatchError::Upstream`, or `PetMatchError::Config` when no credential
/// can be obtained.
#[async_trait]
pub trait PetDirectory: Send + Sync {
    /// Search for animals; records are returned in upstream order.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<PetRecord>>;

    /// Fetch one record. An unknown id yields `PetMatchError::NotFound`.
    async fn get_record(&self, id: PetId) -> Result<PetRecord>;

    /// Breed names for an animal type.
    async fn list_breeds(&self, animal_type: AnimalType) -> Result<Vec<String>>;

    /// Organizations near `location`.
    async fn list_organizations(&self, location: &str) -> Result<Vec<OrganizationSummary>>;
}

/// Provides bearer tokens for directory requests
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Return a valid access token, refreshing it when needed.
    async fn access_token(&self) -> Result<String>;
}
