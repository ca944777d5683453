//! System orchestration, configuration, startup and shutdown logic.

pub mod clinic_system;
pub mod config;
pub mod error;
pub mod seed;
pub mod telemetry;

pub use clinic_system::*;
pub use config::*;
pub use error::*;
pub use telemetry::*;
