use tracing::{debug, error, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::appointment_actor::{
    AppointmentAction, AppointmentActionResult, AppointmentError, ReferenceKind,
};
use crate::clients::{PatientClient, UserClient};
use crate::domain::{Appointment, AppointmentCreate, AppointmentRequest};

/// Client for the appointment book.
///
/// Booking validates the patient and doctor against their own actors before
/// writing, and copies their current names onto the appointment.
#[derive(Clone)]
pub struct AppointmentClient {
    inner: ResourceClient<Appointment>,
    patient_client: PatientClient,
    user_client: UserClient,
}

impl_client_methods!(AppointmentClient, Appointment, AppointmentError, appointment);

impl AppointmentClient {
    pub fn new(
        inner: ResourceClient<Appointment>,
        patient_client: PatientClient,
        user_client: UserClient,
    ) -> Self {
        Self {
            inner,
            patient_client,
            user_client,
        }
    }

    /// All appointments ordered by date then time. Equal slots keep booking order.
    #[instrument(skip(self))]
    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, AppointmentError> {
        debug!("Sending request");
        let mut appointments = self.inner.list().await?;
        appointments.sort_by_key(Appointment::starts_at);
        Ok(appointments)
    }

    /// Double-booking is allowed: no overlap check is made for either party.
    #[instrument(
        fields(
            patient_id = %request.patient_id,
            doctor_id = %request.doctor_id,
            date = %request.date,
            time = %request.time
        ),
        skip(self, request)
    )]
    pub async fn create_appointment(
        &self,
        request: AppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        info!("Processing create_appointment request");

        // Step 1: Resolve patient
        let patient = match self.patient_client.get_patient(request.patient_id.clone()).await {
            Ok(Some(patient)) => patient,
            Ok(None) => {
                error!("Patient not found");
                return Err(AppointmentError::InvalidReference {
                    kind: ReferenceKind::Patient,
                    id: request.patient_id,
                });
            }
            Err(e) => {
                error!(error = %e, "Patient lookup failed");
                return Err(AppointmentError::ActorCommunicationError(e.to_string()));
            }
        };

        // Step 2: Resolve doctor
        let doctor = match self.user_client.get_user(request.doctor_id.clone()).await {
            Ok(Some(doctor)) => doctor,
            Ok(None) => {
                error!("Doctor not found");
                return Err(AppointmentError::InvalidReference {
                    kind: ReferenceKind::Doctor,
                    id: request.doctor_id,
                });
            }
            Err(e) => {
                error!(error = %e, "Doctor lookup failed");
                return Err(AppointmentError::ActorCommunicationError(e.to_string()));
            }
        };

        // Step 3: Book with name snapshots
        let params = AppointmentCreate {
            request,
            patient_name: patient.name,
            doctor_name: doctor.name,
        };
        let appointment = self.inner.create(params).await?;
        info!(appointment_id = %appointment.id, "Appointment booked");
        Ok(appointment)
    }

    #[instrument(skip(self))]
    pub async fn complete_appointment(&self, id: String) -> Result<Appointment, AppointmentError> {
        self.transition(id, AppointmentAction::Complete).await
    }

    #[instrument(skip(self))]
    pub async fn cancel_appointment(&self, id: String) -> Result<Appointment, AppointmentError> {
        self.transition(id, AppointmentAction::Cancel).await
    }

    async fn transition(
        &self,
        id: String,
        action: AppointmentAction,
    ) -> Result<Appointment, AppointmentError> {
        debug!(?action, "Sending request");
        match self.inner.perform_action(id, action).await? {
            AppointmentActionResult::StatusChanged(appointment) => {
                info!(status = %appointment.status, "Appointment status changed");
                Ok(appointment)
            }
            AppointmentActionResult::TransitionRefused { from, to } => {
                error!(%from, %to, "Transition refused");
                Err(AppointmentError::InvalidTransition { from, to })
            }
        }
    }
}
