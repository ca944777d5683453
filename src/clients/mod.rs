//! Typed handles over the resource actors. Each client is cheap to clone and
//! speaks the domain's error type.

#[macro_use]
mod macros;

pub mod user_client;
pub mod auth_client;
pub mod patient_client;
pub mod appointment_client;
pub mod record_client;
pub mod dashboard_client;

pub use user_client::*;
pub use auth_client::*;
pub use patient_client::*;
pub use appointment_client::*;
pub use record_client::*;
pub use dashboard_client::*;
