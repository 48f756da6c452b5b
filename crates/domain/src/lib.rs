//! # PetMatch Domain
//!
//! Business domain types and models for PetMatch.
//!
//! This crate contains:
//! - Pet records as returned by the adoption directory
//! - Search form and upstream query construction
//! - Bearer credential model
//! - Configuration structures
//! - Domain error types and Result definitions
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other PetMatch crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
