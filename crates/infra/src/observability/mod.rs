//! Logging setup
//!
//! All crates log through `tracing`; only the binary installs a subscriber.

pub mod logging;

pub use logging::{init_tracing, LogFormat};
