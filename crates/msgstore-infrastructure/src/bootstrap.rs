//! Composition root
//!
//! Builds the decorated store chain from configuration:
//!
//! ```text
//! AppConfig → FileMessageStore → CachingMessageStore → LoggingMessageStore
//!                    ↑                                         ↓
//!                 locate  ←———————————  MessageStore  ←  save/read
//! ```
//!
//! Location lookup is wired straight to the backend, bypassing cache and
//! log; every component shares the same capability contract, so the chain
//! order is a wiring decision, not a type constraint.

use crate::config::AppConfig;
use crate::store::MessageStore;
use msgstore_domain::error::Result;
use msgstore_providers::{CachingMessageStore, FileMessageStore, LoggingMessageStore};
use std::sync::Arc;
use tracing::info;

/// Build the message store described by `config`
///
/// Fails with a configuration error when the storage root does not exist;
/// backend misconfiguration surfaces here, at composition time, not on
/// first use.
pub fn build_message_store(config: &AppConfig) -> Result<MessageStore> {
    let backend = Arc::new(FileMessageStore::new(&config.storage.root_dir)?);

    let store = if config.cache.enabled {
        let cached = Arc::new(CachingMessageStore::new(
            Arc::clone(&backend),
            Arc::clone(&backend),
        ));
        let logged = Arc::new(LoggingMessageStore::new(Arc::clone(&cached), cached));
        MessageStore::builder()
            .writer(Arc::clone(&logged))
            .reader(logged)
            .locator(Arc::clone(&backend))
            .build()?
    } else {
        let logged = Arc::new(LoggingMessageStore::new(
            Arc::clone(&backend),
            Arc::clone(&backend),
        ));
        MessageStore::builder()
            .writer(Arc::clone(&logged))
            .reader(logged)
            .locator(Arc::clone(&backend))
            .build()?
    };

    info!(
        root = %config.storage.root_dir.display(),
        cache_enabled = config.cache.enabled,
        "message store assembled"
    );

    Ok(store)
}
