//! Shared test helpers for `petmatch-core` integration tests.

pub mod directory;

pub use directory::{pet, MockPetDirectory};
