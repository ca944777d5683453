//! Staff accounts. Loaded once from seed data and read-only afterwards.

pub mod entity;
pub mod error;

pub use error::*;
