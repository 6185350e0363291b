//! Domain value objects
//!
//! Immutable types shared by every layer of the store: message identity,
//! backend addressing, and the optional-value container.

pub mod maybe;
pub mod message;

pub use maybe::Maybe;
pub use message::{Location, MessageId};
