//! Household compatibility statements derived from raw flags

use petmatch_domain::PetRecord;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityKind {
    Positive,
    Negative,
    Warning,
}

impl CompatibilityKind {
    /// Icon shown before the statement.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Positive => "\u{2705}",
            Self::Negative => "\u{274C}",
            Self::Warning => "\u{26A0}\u{FE0F}",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityNote {
    pub kind: CompatibilityKind,
    pub text: &'static str,
}

impl CompatibilityNote {
    fn positive(text: &'static str) -> Self {
        Self { kind: CompatibilityKind::Positive, text }
    }

    fn negative(text: &'static str) -> Self {
        Self { kind: CompatibilityKind::Negative, text }
    }
}

/// Statements in display order: children, dogs, cats, special needs,
/// house-training, vaccination, spay/neuter. Unknown flags emit nothing.
pub fn compatibility_notes(record: &PetRecord) -> Vec<CompatibilityNote> {
    let environment = &record.environment;
    let attributes = &record.attributes;
    let mut notes = Vec::new();

    let households = [
        (environment.children, "Good with children", "Not recommended for homes with children"),
        (environment.dogs, "Good with dogs", "Not recommended for homes with dogs"),
        (environment.cats, "Good with cats", "Not recommended for homes with cats"),
    ];
    for (flag, good, bad) in households {
        match flag {
            Some(true) => notes.push(CompatibilityNote::positive(good)),
            Some(false) => notes.push(CompatibilityNote::negative(bad)),
            None => {}
        }
    }

    if attributes.special_needs == Some(true) {
        notes.push(CompatibilityNote {
            kind: CompatibilityKind::Warning,
            text: "Has special needs",
        });
    }

    match attributes.house_trained {
        Some(true) => notes.push(CompatibilityNote::positive("House-trained")),
        Some(false) => notes.push(CompatibilityNote::negative("Not house-trained")),
        None => {}
    }

    if attributes.shots_current == Some(true) {
        notes.push(CompatibilityNote::positive("Vaccinations up to date"));
    }
    if attributes.spayed_neutered == Some(true) {
        notes.push(CompatibilityNote::positive("Spayed/neutered"));
    }

    notes
}
