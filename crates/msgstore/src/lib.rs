//! # Message Store
//!
//! A minimal layered key-value store for text messages keyed by integer
//! identifiers, built as a chain of decorators over a common read/write
//! contract.
//!
//! ## Features
//!
//! - **Capability ports**: independent writer, reader, and locator traits;
//!   any implementer satisfies one, two, or all three
//! - **Composable decorators**: caching and logging layers implement the
//!   same contract as the backend they wrap, so chains reorder freely
//! - **Read-through caching**: presence is cached, absence is not
//! - **Structured logging**: tracing records carry the message identifier
//!   as a queryable field
//!
//! ## Example
//!
//! ```ignore
//! use msgstore::{build_message_store, AppConfig, MessageId};
//!
//! let config = AppConfig::default();
//! let store = build_message_store(&config)?;
//!
//! store.save(MessageId::new(44), "hello").await?;
//! let message = store.read(MessageId::new(44)).await?;
//! assert!(message.is_present());
//! ```
//!
//! ## Architecture
//!
//! The workspace follows a layered split:
//!
//! - `domain` - capability ports, value objects, and the error taxonomy
//! - `providers` - filesystem and in-memory backends plus the caching and
//!   logging decorators
//! - `infrastructure` - configuration, logging setup, the [`MessageStore`]
//!   facade, and the composition root

/// Domain layer - capability ports, value objects, and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use msgstore_domain::*;
}

/// Provider layer - backends and decorators
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use msgstore_providers::*;
}

/// Infrastructure layer - config, logging, facade, and composition root
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use msgstore_infrastructure::*;
}

// Top-level convenience re-exports for the common path
pub use msgstore_domain::{
    Error, Location, Maybe, MessageId, Result, StoreLocator, StoreReader, StoreWriter,
};
pub use msgstore_infrastructure::{
    build_message_store, AppConfig, ConfigLoader, MessageStore, MessageStoreBuilder,
};
pub use msgstore_providers::{
    CachingMessageStore, FileMessageStore, InMemoryMessageStore, LoggingMessageStore,
};
