//! Filesystem persistence backend
//!
//! Stores one message per file under a configured root directory. The file
//! name is derived deterministically from the message identifier, so
//! location lookup is pure and performs no I/O.

use crate::constants::MESSAGE_FILE_EXTENSION;
use async_trait::async_trait;
use msgstore_domain::error::{Error, Result};
use msgstore_domain::ports::{StoreLocator, StoreReader, StoreWriter};
use msgstore_domain::value_objects::{Location, Maybe, MessageId};
use std::io::ErrorKind;
use std::path::PathBuf;

/// Filesystem message store
///
/// Satisfies all three capability ports: writer, reader, and locator.
/// Saving overwrites the message file wholesale; reading a message that was
/// never saved yields [`Maybe::Empty`] rather than an error.
///
/// Construction validates that the root directory exists, so a
/// misconfigured root fails at composition time instead of on first use.
#[derive(Debug, Clone)]
pub struct FileMessageStore {
    root: PathBuf,
}

impl FileMessageStore {
    /// Create a backend rooted at `root`
    pub fn new<P: Into<PathBuf>>(root: P) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(Error::config(format!(
                "storage root {} does not exist",
                root.display()
            )));
        }
        Ok(Self { root })
    }

    /// The root directory messages are stored under
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

#[async_trait]
impl StoreWriter for FileMessageStore {
    async fn save(&self, id: MessageId, message: &str) -> Result<()> {
        let location = self.locate(id);
        tokio::fs::write(location.as_path(), message)
            .await
            .map_err(|e| Error::io_with_source(format!("failed to write message {id}"), e))
    }
}

#[async_trait]
impl StoreReader for FileMessageStore {
    async fn read(&self, id: MessageId) -> Result<Maybe<String>> {
        let location = self.locate(id);
        match tokio::fs::read_to_string(location.as_path()).await {
            Ok(text) => Ok(Maybe::of(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Maybe::empty()),
            Err(e) => Err(Error::io_with_source(
                format!("failed to read message {id}"),
                e,
            )),
        }
    }
}

impl StoreLocator for FileMessageStore {
    fn locate(&self, id: MessageId) -> Location {
        Location::new(self.root.join(format!("{id}.{MESSAGE_FILE_EXTENSION}")))
    }
}
