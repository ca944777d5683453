//! Medical-record timeline. Records are prepended so the newest comes first.

pub mod entity;
pub mod error;

pub use error::*;
