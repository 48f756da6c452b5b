//! Configuration loading
//!
//! Loads application configuration from files, environment variables and
//! the secrets directory.

pub mod loader;

pub use loader::{apply_overrides, apply_secret_files, find_config_path, load, load_from_file};
