//! In-memory persistence backend
//!
//! Keeps messages in a concurrent map. Data is not persisted and is lost
//! when the store is dropped; useful for development and testing where
//! durability is not required.

use async_trait::async_trait;
use dashmap::DashMap;
use msgstore_domain::error::Result;
use msgstore_domain::ports::{StoreReader, StoreWriter};
use msgstore_domain::value_objects::{Maybe, MessageId};

/// In-memory message store
///
/// Satisfies the writer and reader capabilities. There is no locator: an
/// in-memory slot has no backend-specific address.
#[derive(Debug, Default)]
pub struct InMemoryMessageStore {
    messages: DashMap<MessageId, String>,
}

impl InMemoryMessageStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of messages currently held
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the store holds no messages
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Remove the message under `id`, bypassing the save/read contract
    ///
    /// Test hook for simulating out-of-band backend mutation.
    pub fn remove(&self, id: MessageId) -> Option<String> {
        self.messages.remove(&id).map(|(_, message)| message)
    }
}

#[async_trait]
impl StoreWriter for InMemoryMessageStore {
    async fn save(&self, id: MessageId, message: &str) -> Result<()> {
        self.messages.insert(id, message.to_string());
        Ok(())
    }
}

#[async_trait]
impl StoreReader for InMemoryMessageStore {
    async fn read(&self, id: MessageId) -> Result<Maybe<String>> {
        Ok(Maybe::from(
            self.messages.get(&id).map(|entry| entry.value().clone()),
        ))
    }
}
