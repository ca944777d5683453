use thiserror::Error;

use crate::appointment_actor::AppointmentError;
use crate::patient_actor::PatientError;
use crate::user_actor::UserError;

/// Errors from the dashboard aggregation, wrapping whichever actor failed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DashboardError {
    #[error(transparent)]
    Patient(#[from] PatientError),
    #[error(transparent)]
    Appointment(#[from] AppointmentError),
    #[error(transparent)]
    User(#[from] UserError),
}

/// Errors raised while starting or stopping the system.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    TaskFailed(String),
}
