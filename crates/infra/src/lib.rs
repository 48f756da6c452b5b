//! # PetMatch Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The Petfinder directory client (`PetDirectory`)
//! - The bearer credential manager (`AccessTokenProvider`)
//! - The shared HTTP client and error conversions
//! - Configuration loading and tracing setup
//!
//! ## Architecture
//! - Implements traits defined in `petmatch-core`
//! - Contains all "impure" code (network, filesystem, environment)

pub mod auth;
pub mod config;
pub mod directory;
pub mod errors;
pub mod http;
pub mod observability;

// Re-export commonly used items
pub use auth::CredentialManager;
pub use directory::PetfinderClient;
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
