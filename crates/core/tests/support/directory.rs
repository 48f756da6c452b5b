//! In-memory mock for the `PetDirectory` port
//!
//! Serves canned records and counts calls so tests can assert which actions
//! reached the directory.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use petmatch_core::PetDirectory;
use petmatch_domain::{
    AnimalType, OrganizationSummary, PetId, PetMatchError, PetRecord, Result as DomainResult,
    SearchQuery,
};

/// Record with a name and a status.
pub fn pet(id: u64, name: &str) -> PetRecord {
    let mut record = PetRecord::new(id, name);
    record.status = Some("adoptable".to_string());
    record
}

#[derive(Default, Clone)]
pub struct MockPetDirectory {
    search_results: Arc<Mutex<Option<DomainResult<Vec<PetRecord>>>>>,
    records: Arc<Mutex<Vec<PetRecord>>>,
    queries: Arc<Mutex<Vec<SearchQuery>>>,
    search_calls: Arc<AtomicUsize>,
    detail_calls: Arc<AtomicUsize>,
}

impl MockPetDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next searches return these records.
    pub fn with_search_results(self, records: Vec<PetRecord>) -> Self {
        self.set_search_results(Ok(records));
        self
    }

    pub fn set_search_results(&self, result: DomainResult<Vec<PetRecord>>) {
        *self.search_results.lock().unwrap_or_else(PoisonError::into_inner) = Some(result);
    }

    /// Records resolvable through `get_record`.
    pub fn with_record(self, record: PetRecord) -> Self {
        self.records.lock().unwrap_or_else(PoisonError::into_inner).push(record);
        self
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<SearchQuery> {
        self.queries.lock().unwrap_or_else(PoisonError::into_inner).last().cloned()
    }
}

#[async_trait]
impl PetDirectory for MockPetDirectory {
    async fn search(&self, query: &SearchQuery) -> DomainResult<Vec<PetRecord>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap_or_else(PoisonError::into_inner).push(query.clone());
        self.search_results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn get_record(&self, id: PetId) -> DomainResult<PetRecord> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or_else(|| PetMatchError::NotFound(format!("animal {id}")))
    }

    async fn list_breeds(&self, animal_type: AnimalType) -> DomainResult<Vec<String>> {
        Ok(match animal_type {
            AnimalType::Dog => vec!["Beagle".to_string(), "Boxer".to_string()],
            _ => Vec::new(),
        })
    }

    async fn list_organizations(&self, location: &str) -> DomainResult<Vec<OrganizationSummary>> {
        Ok(vec![OrganizationSummary {
            id: "NY835".to_string(),
            name: format!("Shelter near {location}"),
        }])
    }
}
