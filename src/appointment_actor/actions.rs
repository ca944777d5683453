use crate::domain::{Appointment, AppointmentStatus};

/// Status transitions for an appointment.
///
/// Only a `Scheduled` appointment can move; `Completed` and `Cancelled` are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentAction {
    Complete,
    Cancel,
}

impl AppointmentAction {
    pub fn target_status(self) -> AppointmentStatus {
        match self {
            AppointmentAction::Complete => AppointmentStatus::Completed,
            AppointmentAction::Cancel => AppointmentStatus::Cancelled,
        }
    }
}

/// Outcome of an AppointmentAction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppointmentActionResult {
    /// The appointment after the move.
    StatusChanged(Appointment),
    /// The appointment was already in a final state; nothing changed.
    TransitionRefused {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },
}
