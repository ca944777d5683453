use chrono::{NaiveDate, Utc};
use tracing::{info, instrument};

use crate::app_system::DashboardError;
use crate::clients::{AppointmentClient, PatientClient, UserClient};
use crate::domain::DashboardStats;

/// Read-only aggregation over the patient, appointment and user actors.
#[derive(Clone)]
pub struct DashboardClient {
    patient_client: PatientClient,
    appointment_client: AppointmentClient,
    user_client: UserClient,
}

impl DashboardClient {
    pub fn new(
        patient_client: PatientClient,
        appointment_client: AppointmentClient,
        user_client: UserClient,
    ) -> Self {
        Self {
            patient_client,
            appointment_client,
            user_client,
        }
    }

    /// Stats for the current UTC date.
    pub async fn stats(&self) -> Result<DashboardStats, DashboardError> {
        self.stats_on(Utc::now().date_naive()).await
    }

    /// Stats with `today` supplied by the caller. Today's appointments come
    /// back in time order.
    #[instrument(skip(self))]
    pub async fn stats_on(&self, today: NaiveDate) -> Result<DashboardStats, DashboardError> {
        let total_patients = self.patient_client.count_patients().await?;
        let appointments = self.appointment_client.list_appointments().await?;
        let total_doctors = self.user_client.list_doctors().await?.len();

        let total_appointments = appointments.len();
        let todays_appointments: Vec<_> = appointments
            .into_iter()
            .filter(|appointment| appointment.date == today)
            .collect();

        info!(
            total_patients,
            total_appointments,
            total_doctors,
            todays = todays_appointments.len(),
            "Dashboard stats computed"
        );

        Ok(DashboardStats {
            total_patients,
            total_appointments,
            total_doctors,
            todays_appointments,
        })
    }
}
