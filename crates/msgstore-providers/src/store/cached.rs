//! Caching decorator
//!
//! Read-through caching with write-through update over any writer/reader
//! pair. The cache map is the only shared mutable state in the subsystem;
//! entries are replaced atomically per key, never merged.

use async_trait::async_trait;
use dashmap::DashMap;
use msgstore_domain::error::Result;
use msgstore_domain::ports::{StoreReader, StoreWriter};
use msgstore_domain::value_objects::{Maybe, MessageId};

/// Caching message store decorator
///
/// Wraps a writer and a reader (usually the same backend) with an in-memory
/// map from identifier to the last known optional value.
///
/// - A save forwards first and, only on success, overwrites the cache entry.
/// - A read with a cached entry returns it without consulting the backend;
///   the cache is authoritative until the next save, even if the backend's
///   data changed out-of-band.
/// - A read-through result is cached only when present. Absence is never
///   cached, so an out-of-band write to a missing slot becomes visible on
///   the next read.
///
/// Errors from the wrapped writer or reader propagate unchanged; this layer
/// introduces no error kinds of its own.
#[derive(Debug)]
pub struct CachingMessageStore<W, R> {
    cache: DashMap<MessageId, Maybe<String>>,
    writer: W,
    reader: R,
}

impl<W, R> CachingMessageStore<W, R>
where
    W: StoreWriter,
    R: StoreReader,
{
    /// Create a caching decorator over `writer` and `reader`
    pub fn new(writer: W, reader: R) -> Self {
        Self {
            cache: DashMap::new(),
            writer,
            reader,
        }
    }

    /// Number of cached entries
    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<W, R> StoreWriter for CachingMessageStore<W, R>
where
    W: StoreWriter,
    R: StoreReader,
{
    async fn save(&self, id: MessageId, message: &str) -> Result<()> {
        // Forward first: a failed save must leave the cache untouched.
        self.writer.save(id, message).await?;
        self.cache.insert(id, Maybe::of(message.to_string()));
        Ok(())
    }
}

#[async_trait]
impl<W, R> StoreReader for CachingMessageStore<W, R>
where
    W: StoreWriter,
    R: StoreReader,
{
    async fn read(&self, id: MessageId) -> Result<Maybe<String>> {
        if let Some(entry) = self.cache.get(&id) {
            return Ok(entry.value().clone());
        }

        let result = self.reader.read(id).await?;
        if result.is_present() {
            self.cache.insert(id, result.clone());
        }
        Ok(result)
    }
}
