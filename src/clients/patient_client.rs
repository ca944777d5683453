use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Patient, PatientCreate, PatientPatch};
use crate::patient_actor::PatientError;

/// Client for the patient directory.
#[derive(Clone)]
pub struct PatientClient {
    inner: ResourceClient<Patient>,
}

impl_basic_client!(PatientClient, Patient, PatientError, patient);

impl PatientClient {
    /// Every patient, in registration order.
    #[instrument(skip(self))]
    pub async fn list_patients(&self) -> Result<Vec<Patient>, PatientError> {
        debug!("Sending request");
        Ok(self.inner.list().await?)
    }

    #[instrument(skip(self), fields(patient_name = %params.name))]
    pub async fn create_patient(&self, params: PatientCreate) -> Result<Patient, PatientError> {
        debug!("Sending request");
        let patient = self.inner.create(params).await?;
        info!(patient_id = %patient.id, "Patient registered");
        Ok(patient)
    }

    /// Merges `patch` into the stored profile. Fails with `NotFound` for an unknown id.
    #[instrument(skip(self, patch))]
    pub async fn update_patient(&self, id: String, patch: PatientPatch) -> Result<Patient, PatientError> {
        debug!("Sending request");
        Ok(self.inner.update(id, patch).await?)
    }

    #[instrument(skip(self))]
    pub async fn search_patients(&self, query: &str) -> Result<Vec<Patient>, PatientError> {
        debug!("Sending request");
        let mut patients = self.inner.list().await?;
        patients.retain(|patient| patient.matches(query));
        Ok(patients)
    }
}
