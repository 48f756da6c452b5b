//! Adoption directory adapters

pub mod petfinder;
mod responses;

pub use petfinder::PetfinderClient;
