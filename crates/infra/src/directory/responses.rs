//! Upstream response envelopes

use petmatch_domain::{OrganizationSummary, PetRecord};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct AnimalsResponse {
    #[serde(default)]
    pub animals: Vec<PetRecord>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AnimalResponse {
    pub animal: PetRecord,
}

#[derive(Debug, Deserialize)]
pub(super) struct BreedsResponse {
    #[serde(default)]
    pub breeds: Vec<BreedEntry>,
}

#[derive(Debug, Deserialize)]
pub(super) struct BreedEntry {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct OrganizationsResponse {
    #[serde(default)]
    pub organizations: Vec<OrganizationSummary>,
}
