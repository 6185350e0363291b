//! Shared test doubles for decorator tests

use async_trait::async_trait;
use msgstore_domain::error::{Error, Result};
use msgstore_domain::ports::{StoreReader, StoreWriter};
use msgstore_domain::value_objects::{Maybe, MessageId};

/// Store whose every operation fails with a backend I/O error
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl StoreWriter for FailingStore {
    async fn save(&self, id: MessageId, _message: &str) -> Result<()> {
        Err(Error::io(format!("backend rejected write for {id}")))
    }
}

#[async_trait]
impl StoreReader for FailingStore {
    async fn read(&self, id: MessageId) -> Result<Maybe<String>> {
        Err(Error::io(format!("backend rejected read for {id}")))
    }
}
