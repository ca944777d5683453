use chrono::Timelike;

use super::actions::{AppointmentAction, AppointmentActionResult};
use crate::actor_framework::Entity;
use crate::domain::{Appointment, AppointmentCreate, AppointmentStatus};

impl Entity for Appointment {
    type Id = String;
    type CreateParams = AppointmentCreate;
    type Patch = ();
    type Action = AppointmentAction;
    type ActionResult = AppointmentActionResult;

    const NAME: &'static str = "appointment";

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new Appointment in the `Scheduled` state.
    ///
    /// The time is kept at minute precision.
    fn from_create_params(id: String, params: AppointmentCreate) -> Result<Self, String> {
        let AppointmentCreate { request, patient_name, doctor_name } = params;
        let time = request
            .time
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .ok_or_else(|| format!("Invalid appointment time: {}", request.time))?;

        Ok(Self {
            id,
            patient_id: request.patient_id,
            patient_name,
            doctor_id: request.doctor_id,
            doctor_name,
            date: request.date,
            time,
            status: AppointmentStatus::Scheduled,
            kind: request.kind,
        })
    }

    /// Appointments have no editable fields.
    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }

    fn handle_action(&mut self, action: AppointmentAction) -> Result<AppointmentActionResult, String> {
        let to = action.target_status();
        if self.status.is_terminal() {
            return Ok(AppointmentActionResult::TransitionRefused { from: self.status, to });
        }
        self.status = to;
        Ok(AppointmentActionResult::StatusChanged(self.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AppointmentRequest;
    use chrono::{NaiveDate, NaiveTime};

    fn booked() -> Appointment {
        let request = AppointmentRequest::new(
            "p1",
            "u1",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 42).unwrap(),
            "Checkup",
        );
        let params = AppointmentCreate {
            request,
            patient_name: "John Doe".into(),
            doctor_name: "Dr. Sarah Bennett".into(),
        };
        Appointment::from_create_params("a9".into(), params).unwrap()
    }

    #[test]
    fn test_created_as_scheduled_at_minute_precision() {
        let appointment = booked();
        assert_eq!(appointment.status, AppointmentStatus::Scheduled);
        assert_eq!(appointment.time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(appointment.patient_name, "John Doe");
    }

    #[test]
    fn test_terminal_states_refuse_transitions() {
        let mut appointment = booked();
        let result = appointment.handle_action(AppointmentAction::Cancel).unwrap();
        assert!(matches!(result, AppointmentActionResult::StatusChanged(ref a) if a.status == AppointmentStatus::Cancelled));

        let result = appointment.handle_action(AppointmentAction::Complete).unwrap();
        assert_eq!(
            result,
            AppointmentActionResult::TransitionRefused {
                from: AppointmentStatus::Cancelled,
                to: AppointmentStatus::Completed,
            }
        );
        assert_eq!(appointment.status, AppointmentStatus::Cancelled);
    }
}
