//! Message Identity and Addressing Value Objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Value Object: Message Identifier
///
/// A non-negative integer uniquely naming a message's slot. The store
/// enforces no constraint beyond "one slot per identifier"; saving to an
/// existing slot overwrites the message wholesale.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct MessageId(u64);

impl MessageId {
    /// Create a message identifier
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The raw identifier value
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for MessageId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Value Object: Storage Location
///
/// An opaque handle the persistence backend derives deterministically from a
/// [`MessageId`]. Used for diagnostics and backend-specific addressing; the
/// cache and logging layers never interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location(PathBuf);

impl Location {
    /// Create a location from a backend-specific path
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self(path.into())
    }

    /// The location as a filesystem path
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl From<PathBuf> for Location {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.display().fmt(f)
    }
}
