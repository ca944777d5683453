use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::UserRole;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecordError {
    #[error("{role:?} users may not add medical records")]
    Forbidden { role: UserRole },
    #[error("Medical record rejected: {0}")]
    Rejected(String),
    #[error("No free record id after {0} attempts")]
    IdExhausted(usize),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for RecordError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::Rejected(msg) => RecordError::Rejected(msg),
            FrameworkError::IdExhausted(attempts) => RecordError::IdExhausted(attempts),
            other => RecordError::ActorCommunicationError(other.to_string()),
        }
    }
}
