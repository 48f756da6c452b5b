//! Upstream authentication

pub mod credential_manager;

pub use credential_manager::CredentialManager;
