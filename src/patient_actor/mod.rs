//! Patient directory: creation, profile edits and lookups.

pub mod entity;
pub mod error;

pub use error::*;
