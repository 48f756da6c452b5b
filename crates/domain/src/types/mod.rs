//! Domain types for PetMatch
//!
//! Organized by concern:
//! - `pet`: pet records, nested attribute groups, organizations
//! - `search`: form choices, search form, normalized query
//! - `credential`: bearer credential and client credentials

pub mod credential;
pub mod pet;
pub mod search;

pub use credential::*;
pub use pet::*;
pub use search::*;
