//! Configuration file management.

mod manager;

pub use manager::{ConfigFile, ConfigManager, DEFAULT_ENDPOINT, resolve_endpoint};
