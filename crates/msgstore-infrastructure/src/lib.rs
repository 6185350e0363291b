//! # Message Store Infrastructure
//!
//! Cross-cutting technical concerns for the layered message store:
//!
//! - `config` - figment-based configuration loading (defaults, TOML file,
//!   environment variables)
//! - `logging` - tracing-subscriber initialization
//! - `store` - the [`MessageStore`] facade and its capability-validating
//!   builder
//! - `bootstrap` - the composition root wiring backend, cache, and logging
//!   decorators from configuration
//! - `error_ext` - context extension methods for domain errors

pub mod bootstrap;
pub mod config;
pub mod error_ext;
pub mod logging;
pub mod store;

pub use bootstrap::build_message_store;
pub use config::{AppConfig, CacheConfig, ConfigLoader, LoggingConfig, StorageConfig};
pub use store::{MessageStore, MessageStoreBuilder};
