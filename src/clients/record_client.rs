use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::domain::{MedicalRecord, MedicalRecordCreate, User};
use crate::record_actor::RecordError;

/// Client for the medical-record timeline.
#[derive(Clone)]
pub struct RecordClient {
    inner: ResourceClient<MedicalRecord>,
}

impl_basic_client!(RecordClient, MedicalRecord, RecordError, record);

impl RecordClient {
    /// Records for one patient, latest date first. Records sharing a date stay
    /// newest-created first.
    #[instrument(skip(self))]
    pub async fn list_records_for_patient(
        &self,
        patient_id: String,
    ) -> Result<Vec<MedicalRecord>, RecordError> {
        debug!("Sending request");
        let mut records = self.inner.list().await?;
        records.retain(|record| record.patient_id == patient_id);
        records.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(records)
    }

    /// Neither `patient_id` nor `doctor_id` is checked here.
    #[instrument(
        fields(patient_id = %params.patient_id, doctor_id = %params.doctor_id),
        skip(self, params)
    )]
    pub async fn create_record(
        &self,
        params: MedicalRecordCreate,
    ) -> Result<MedicalRecord, RecordError> {
        debug!("Sending request");
        let record = self.inner.create(params).await?;
        info!(record_id = %record.id, "Medical record added");
        Ok(record)
    }

    /// Adds a record written by `author` today. The author's id and name are
    /// copied onto the record; receptionists are refused before anything is
    /// stored.
    #[instrument(
        fields(author_id = %author.id, patient_id = %patient_id),
        skip(self, author, patient_id, diagnosis, prescription, notes)
    )]
    pub async fn add_record_as(
        &self,
        author: &User,
        patient_id: String,
        diagnosis: String,
        prescription: String,
        notes: String,
    ) -> Result<MedicalRecord, RecordError> {
        if !author.can_add_records() {
            warn!(role = ?author.role, "Record creation refused");
            return Err(RecordError::Forbidden { role: author.role });
        }

        self.create_record(MedicalRecordCreate {
            patient_id,
            date: Utc::now().date_naive(),
            doctor_id: author.id.clone(),
            doctor_name: author.name.clone(),
            diagnosis,
            prescription,
            notes,
        })
        .await
    }
}
