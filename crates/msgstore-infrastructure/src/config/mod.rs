//! Configuration management
//!
//! Serde-backed configuration types plus a figment loader merging defaults,
//! an optional TOML file, and environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, CacheConfig, LoggingConfig, StorageConfig};
