use chrono::Utc;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::actor_framework::ResourceActor;
use crate::app_system::{seed, ClinicConfig, ConfigError, SystemError};
use crate::clients::{
    AppointmentClient, AuthClient, DashboardClient, PatientClient, RecordClient, UserClient,
};
use crate::domain::{Appointment, MedicalRecord, Patient, User};

/// Short random ids such as `p_3f9a1c0b42de`.
fn id_generator(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    move || {
        let raw = Uuid::new_v4().simple().to_string();
        format!("{}_{}", prefix, &raw[..12])
    }
}

/// Owns one actor per collection and hands out the clients wired to them.
///
/// Every `ClinicSystem` has its own store, so tests can build one each.
pub struct ClinicSystem {
    pub auth_client: AuthClient,
    pub user_client: UserClient,
    pub patient_client: PatientClient,
    pub appointment_client: AppointmentClient,
    pub record_client: RecordClient,
    pub dashboard_client: DashboardClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ClinicSystem {
    /// Create and start every actor. Must be called inside a tokio runtime.
    ///
    /// Leaf collections start first; the appointment and dashboard clients are
    /// then built on top of the patient and user clients.
    #[instrument(name = "clinic_system", skip(config))]
    pub fn new(config: &ClinicConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let buffer = config.channel_buffer;
        let mut handles = Vec::new();

        info!(seeded = config.seed_sample_data, "Starting clinic system");

        let (user_actor, users) = ResourceActor::<User>::new(buffer, id_generator("u"));
        let (patient_actor, patients) = ResourceActor::<Patient>::new(buffer, id_generator("p"));
        let (appointment_actor, appointments) =
            ResourceActor::<Appointment>::new(buffer, id_generator("a"));
        let (record_actor, records) = ResourceActor::<MedicalRecord>::new(buffer, id_generator("m"));

        let (user_actor, patient_actor, appointment_actor, record_actor) =
            if config.seed_sample_data {
                let today = Utc::now().date_naive();
                (
                    user_actor.with_seed(seed::sample_users()),
                    patient_actor.with_seed(seed::sample_patients()),
                    appointment_actor.with_seed(seed::sample_appointments(today)),
                    record_actor.with_seed(seed::sample_records()),
                )
            } else {
                (user_actor, patient_actor, appointment_actor, record_actor)
            };

        handles.push(tokio::spawn(user_actor.run()));
        handles.push(tokio::spawn(patient_actor.run()));
        handles.push(tokio::spawn(appointment_actor.run()));
        handles.push(tokio::spawn(record_actor.run()));

        let user_client = UserClient::new(users);
        let patient_client = PatientClient::new(patients);
        let appointment_client =
            AppointmentClient::new(appointments, patient_client.clone(), user_client.clone());
        let record_client = RecordClient::new(records);
        let auth_client = AuthClient::new(user_client.clone(), config.login_latency());
        let dashboard_client = DashboardClient::new(
            patient_client.clone(),
            appointment_client.clone(),
            user_client.clone(),
        );

        info!("Clinic system started successfully");

        Ok(Self {
            auth_client,
            user_client,
            patient_client,
            appointment_client,
            record_client,
            dashboard_client,
            handles,
        })
    }

    /// Stops every actor and waits for its task to finish.
    ///
    /// A failed join is logged and the remaining tasks are still awaited.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down clinic system");

        if let Err(e) = self.appointment_client.shutdown().await {
            warn!(error = %e, actor = "appointment", "Shutdown request not delivered");
        }
        if let Err(e) = self.record_client.shutdown().await {
            warn!(error = %e, actor = "medical_record", "Shutdown request not delivered");
        }
        if let Err(e) = self.patient_client.shutdown().await {
            warn!(error = %e, actor = "patient", "Shutdown request not delivered");
        }
        if let Err(e) = self.user_client.shutdown().await {
            warn!(error = %e, actor = "user", "Shutdown request not delivered");
        }

        let mut first_failure = None;
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor shutdown error");
                first_failure.get_or_insert_with(|| e.to_string());
            }
        }

        match first_failure {
            Some(reason) => Err(SystemError::TaskFailed(reason)),
            None => {
                info!("Clinic system shutdown complete");
                Ok(())
            }
        }
    }
}
