//! Store Capability Ports
//!
//! The two-operation save/read contract every layer of the store shares,
//! plus pure location lookup. Decorators implement the same traits as the
//! backend they wrap, so chains compose in arbitrary order.
//!
//! ## Capability Pattern
//!
//! These are deliberately separate traits rather than one fat store trait:
//! the filesystem backend satisfies all three, the in-memory backend and the
//! decorators satisfy writer + reader, and the facade can route each
//! capability to a different point in the chain (e.g. location lookup
//! bypassing cache and log).

use crate::error::Result;
use crate::value_objects::{Location, Maybe, MessageId};
use async_trait::async_trait;
use std::sync::Arc;

/// Writer capability: persist a message under an identifier
///
/// Saving overwrites the slot wholesale; there is no partial update.
#[async_trait]
pub trait StoreWriter: Send + Sync {
    /// Save `message` under `id`
    async fn save(&self, id: MessageId, message: &str) -> Result<()>;
}

/// Reader capability: fetch the message stored under an identifier
///
/// A read that legitimately finds nothing returns [`Maybe::Empty`]; errors
/// are reserved for backend failures.
#[async_trait]
pub trait StoreReader: Send + Sync {
    /// Read the message stored under `id`
    async fn read(&self, id: MessageId) -> Result<Maybe<String>>;
}

/// Location-lookup capability: backend-specific addressing
///
/// Pure derivation from the identifier; implementations perform no I/O.
pub trait StoreLocator: Send + Sync {
    /// The storage location the backend derives from `id`
    fn locate(&self, id: MessageId) -> Location;
}

// Blanket impls so a shared Arc can satisfy several capability slots at once.

#[async_trait]
impl<T: StoreWriter + ?Sized> StoreWriter for Arc<T> {
    async fn save(&self, id: MessageId, message: &str) -> Result<()> {
        (**self).save(id, message).await
    }
}

#[async_trait]
impl<T: StoreReader + ?Sized> StoreReader for Arc<T> {
    async fn read(&self, id: MessageId) -> Result<Maybe<String>> {
        (**self).read(id).await
    }
}

impl<T: StoreLocator + ?Sized> StoreLocator for Arc<T> {
    fn locate(&self, id: MessageId) -> Location {
        (**self).locate(id)
    }
}
