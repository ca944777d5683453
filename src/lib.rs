//! # clinic-desk
//!
//! Service layer for a small clinic front desk: sign-in, a patient directory,
//! the appointment book, medical-record timelines and dashboard figures.
//!
//! Each collection is owned by a [`ResourceActor`](actor_framework::ResourceActor)
//! running on its own tokio task. Callers talk to it through cloneable clients
//! (e.g. [`PatientClient`](clients::PatientClient)) that send typed requests and
//! await the reply. The store lives in memory only and is rebuilt from fixed
//! sample rows at every start.
//!
//! ```no_run
//! use clinic_desk::app_system::{ClinicConfig, ClinicSystem};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let system = ClinicSystem::new(&ClinicConfig::default())?;
//! let user = system.auth_client.login("doctor@medicare.pro").await?;
//! let stats = system.dashboard_client.stats().await?;
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod domain;

pub mod appointment_actor;
pub mod patient_actor;
pub mod record_actor;
pub mod user_actor;

#[cfg(test)]
mod mock_framework;
