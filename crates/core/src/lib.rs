//! # PetMatch Core
//!
//! Pure application logic - no HTTP, no HTML.
//!
//! This crate contains:
//! - Port interfaces (traits) for the adoption directory
//! - Per-session state (results, paging, selection, favorites, notices)
//! - The result presenter producing card and detail view models
//! - The view controller that turns user actions into state changes
//!
//! ## Architecture Principles
//! - Only depends on `petmatch-domain`
//! - All external access via traits
//! - Pure, testable business logic

pub mod controller;
pub mod presenter;
pub mod session;
pub mod utils;

// Infrastructure ports
pub mod directory_ports;

pub use controller::ViewController;
pub use directory_ports::{AccessTokenProvider, PetDirectory};
pub use session::SessionState;
pub use utils::{Clock, SystemClock};
