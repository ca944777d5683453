use std::fmt;
use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::AppointmentStatus;

/// Which foreign key failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Patient,
    Doctor,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceKind::Patient => f.write_str("patient"),
            ReferenceKind::Doctor => f.write_str("doctor"),
        }
    }
}

/// Errors that can occur during appointment operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AppointmentError {
    #[error("Invalid {kind} reference: {id}")]
    InvalidReference { kind: ReferenceKind, id: String },
    #[error("Appointment not found: {0}")]
    NotFound(String),
    #[error("Cannot move appointment from {from} to {to}")]
    InvalidTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },
    #[error("Appointment rejected: {0}")]
    Rejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for AppointmentError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => AppointmentError::NotFound(id),
            FrameworkError::Rejected(msg) => AppointmentError::Rejected(msg),
            other => AppointmentError::ActorCommunicationError(other.to_string()),
        }
    }
}
