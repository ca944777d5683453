use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One entry on a patient's medical timeline. Never edited after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    pub id: String,
    pub patient_id: String,
    pub date: NaiveDate,
    pub doctor_id: String,
    pub doctor_name: String,
    pub diagnosis: String,
    pub prescription: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecordCreate {
    pub patient_id: String,
    pub date: NaiveDate,
    pub doctor_id: String,
    pub doctor_name: String,
    pub diagnosis: String,
    pub prescription: String,
    pub notes: String,
}
