//! Logging decorator
//!
//! Behavior-preserving observability wrapper. Emits structured tracing
//! records around save/read, carrying the message identifier as a field so
//! log output can be queried by `id` rather than by string matching.

use async_trait::async_trait;
use msgstore_domain::error::Result;
use msgstore_domain::ports::{StoreReader, StoreWriter};
use msgstore_domain::value_objects::{Maybe, MessageId};
use tracing::{debug, info};

/// Logging message store decorator
///
/// Writes are logged at INFO, reads at DEBUG. The decorator never alters
/// the returned value and never catches, wraps, or suppresses an error from
/// the delegate; when a save fails, no "saved" record is emitted.
#[derive(Debug)]
pub struct LoggingMessageStore<W, R> {
    writer: W,
    reader: R,
}

impl<W, R> LoggingMessageStore<W, R>
where
    W: StoreWriter,
    R: StoreReader,
{
    /// Create a logging decorator over `writer` and `reader`
    pub fn new(writer: W, reader: R) -> Self {
        Self { writer, reader }
    }
}

#[async_trait]
impl<W, R> StoreWriter for LoggingMessageStore<W, R>
where
    W: StoreWriter,
    R: StoreReader,
{
    async fn save(&self, id: MessageId, message: &str) -> Result<()> {
        info!(id = id.value(), "saving message");
        self.writer.save(id, message).await?;
        info!(id = id.value(), "saved message");
        Ok(())
    }
}

#[async_trait]
impl<W, R> StoreReader for LoggingMessageStore<W, R>
where
    W: StoreWriter,
    R: StoreReader,
{
    async fn read(&self, id: MessageId) -> Result<Maybe<String>> {
        debug!(id = id.value(), "reading message");
        let result = self.reader.read(id).await?;
        if result.is_present() {
            debug!(id = id.value(), "returning message");
        } else {
            debug!(id = id.value(), "no message found");
        }
        Ok(result)
    }
}
