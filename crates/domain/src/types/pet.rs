//! Pet records as returned by the adoption directory
//!
//! The upstream payload is loosely shaped: almost every field may be missing
//! or `null`. Every sub-field is therefore a typed `Option` (or a defaulted
//! collection/struct) so that an absent value is a value, not a lookup
//! failure at render time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Upstream identifier of a pet record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PetId(pub u64);

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PetId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self).map_err(|e| format!("Invalid pet id '{s}': {e}"))
    }
}

impl From<u64> for PetId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// One adoptable-animal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetRecord {
    pub id: PetId,
    #[serde(default)]
    pub organization_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Animal type as named by the directory ("Dog", "Cat", ...).
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub breeds: Breeds,
    #[serde(default, deserialize_with = "null_as_default")]
    pub colors: Colors,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub coat: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: Attributes,
    #[serde(default, deserialize_with = "null_as_default")]
    pub environment: Environment,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contact: Contact,
}

impl PetRecord {
    /// Minimal record with only identity and name set.
    pub fn new(id: impl Into<PetId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            organization_id: None,
            url: None,
            kind: None,
            species: None,
            breeds: Breeds::default(),
            colors: Colors::default(),
            age: None,
            gender: None,
            size: None,
            coat: None,
            attributes: Attributes::default(),
            environment: Environment::default(),
            tags: Vec::new(),
            name: name.into(),
            description: None,
            photos: Vec::new(),
            status: None,
            distance: None,
            contact: Contact::default(),
        }
    }

    /// Whether the record is currently listed as adoptable.
    pub fn is_adoptable(&self) -> bool {
        self.status.as_deref().is_some_and(|status| status.eq_ignore_ascii_case("adoptable"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breeds {
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub secondary: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mixed: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unknown: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colors {
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub secondary: Option<String>,
    #[serde(default)]
    pub tertiary: Option<String>,
}

/// Care attributes. `None` means the directory did not report the flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(default)]
    pub spayed_neutered: Option<bool>,
    #[serde(default)]
    pub house_trained: Option<bool>,
    #[serde(default)]
    pub declawed: Option<bool>,
    #[serde(default)]
    pub special_needs: Option<bool>,
    #[serde(default)]
    pub shots_current: Option<bool>,
}

/// Household compatibility. Ternary: unknown, good with, not good with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    #[serde(default)]
    pub children: Option<bool>,
    #[serde(default)]
    pub dogs: Option<bool>,
    #[serde(default)]
    pub cats: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
    #[serde(default)]
    pub full: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: Address,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub address2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Organization `(id, name)` pair from the organizations lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationSummary {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
