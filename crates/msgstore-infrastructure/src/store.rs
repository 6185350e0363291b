//! Message store facade
//!
//! Single entry point hiding the decorator composition from callers. The
//! facade adds no behavior of its own: save and read delegate to whatever
//! chain was injected, and location lookup can be routed to a different
//! point in the chain than reads and writes.

use msgstore_domain::error::{Error, Result};
use msgstore_domain::ports::{StoreLocator, StoreReader, StoreWriter};
use msgstore_domain::value_objects::{Location, Maybe, MessageId};
use std::sync::Arc;

/// Message store facade
///
/// Composed from three capabilities: a writer, a reader, and a location
/// lookup. They may all be satisfied by the same decorated chain, or by
/// different objects — the usual wiring sends writes and reads through
/// logging and caching while `locate` talks directly to the backend.
pub struct MessageStore {
    writer: Arc<dyn StoreWriter>,
    reader: Arc<dyn StoreReader>,
    locator: Arc<dyn StoreLocator>,
}

impl std::fmt::Debug for MessageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageStore").finish_non_exhaustive()
    }
}

impl MessageStore {
    /// Start building a message store
    pub fn builder() -> MessageStoreBuilder {
        MessageStoreBuilder::default()
    }

    /// Save `message` under `id` via the writer capability
    pub async fn save(&self, id: MessageId, message: &str) -> Result<()> {
        self.writer.save(id, message).await
    }

    /// Read the message under `id` via the reader capability
    pub async fn read(&self, id: MessageId) -> Result<Maybe<String>> {
        self.reader.read(id).await
    }

    /// The backend-specific location for `id`; pure, no I/O
    pub fn locate(&self, id: MessageId) -> Location {
        self.locator.locate(id)
    }
}

/// Builder for [`MessageStore`]
///
/// A missing collaborator is a programming error, not a runtime condition
/// to recover from, so `build` rejects incomplete wiring with
/// [`Error::InvalidConfiguration`].
#[derive(Default)]
pub struct MessageStoreBuilder {
    writer: Option<Arc<dyn StoreWriter>>,
    reader: Option<Arc<dyn StoreReader>>,
    locator: Option<Arc<dyn StoreLocator>>,
}

impl MessageStoreBuilder {
    /// Set the writer capability
    pub fn writer<W: StoreWriter + 'static>(mut self, writer: W) -> Self {
        self.writer = Some(Arc::new(writer));
        self
    }

    /// Set the reader capability
    pub fn reader<R: StoreReader + 'static>(mut self, reader: R) -> Self {
        self.reader = Some(Arc::new(reader));
        self
    }

    /// Set the location-lookup capability
    pub fn locator<L: StoreLocator + 'static>(mut self, locator: L) -> Self {
        self.locator = Some(Arc::new(locator));
        self
    }

    /// Build the facade, validating that every capability is wired
    pub fn build(self) -> Result<MessageStore> {
        let writer = self
            .writer
            .ok_or_else(|| Error::invalid_configuration("writer capability is required"))?;
        let reader = self
            .reader
            .ok_or_else(|| Error::invalid_configuration("reader capability is required"))?;
        let locator = self
            .locator
            .ok_or_else(|| Error::invalid_configuration("locator capability is required"))?;

        Ok(MessageStore {
            writer,
            reader,
            locator,
        })
    }
}
