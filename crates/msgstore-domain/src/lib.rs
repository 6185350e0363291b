//! # Message Store Domain
//!
//! Core domain layer for the layered message store.
//!
//! This crate defines the contract shared by every layer of the store:
//!
//! - `ports` - capability traits ([`StoreWriter`], [`StoreReader`],
//!   [`StoreLocator`]) that backends and decorators implement
//! - `value_objects` - [`MessageId`], [`Location`], and the [`Maybe`]
//!   optional-value container returned by every read
//! - `error` - the error taxonomy shared across the workspace
//!
//! The domain layer has no I/O dependencies. Concrete backends and
//! decorators live in `msgstore-providers`; wiring lives in
//! `msgstore-infrastructure`.

pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{StoreLocator, StoreReader, StoreWriter};
pub use value_objects::{Location, Maybe, MessageId};
