use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur during patient operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PatientError {
    #[error("Patient not found: {0}")]
    NotFound(String),
    #[error("Patient rejected: {0}")]
    Rejected(String),
    #[error("No free patient id after {0} attempts")]
    IdExhausted(usize),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for PatientError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => PatientError::NotFound(id),
            FrameworkError::Rejected(msg) => PatientError::Rejected(msg),
            FrameworkError::IdExhausted(attempts) => PatientError::IdExhausted(attempts),
            other => PatientError::ActorCommunicationError(other.to_string()),
        }
    }
}
