//! Insertion-ordered favorites keyed by record id

use petmatch_domain::{PetId, PetRecord};

/// Favorited records, de-duplicated by id.
#[derive(Debug, Clone, Default)]
pub struct FavoritesList {
    entries: Vec<PetRecord>,
}

impl FavoritesList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record; returns `false` (and changes nothing) if its id is
    /// already present.
    pub fn add(&mut self, record: PetRecord) -> bool {
        if self.contains(record.id) {
            return false;
        }
        self.entries.push(record);
        true
    }

    /// Remove by id. An absent id is a no-op returning `None`.
    pub fn remove(&mut self, id: PetId) -> Option<PetRecord> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn contains(&self, id: PetId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub fn get(&self, id: PetId) -> Option<&PetRecord> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PetRecord> {
        self.entries.iter()
    }
}
