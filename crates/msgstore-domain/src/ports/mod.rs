//! Capability ports
//!
//! Independent capability traits that backends and decorators implement.
//! An implementer can satisfy one, two, or all three capabilities; callers
//! compose whichever subset they need via dependency injection.

pub mod store;

pub use store::{StoreLocator, StoreReader, StoreWriter};
