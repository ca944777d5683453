use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::formats::double_option;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Represents a patient in the clinic directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "dob")]
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub address: String,
    /// Not checked against the user set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_doctor_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for registering a new patient. The store assigns `id` and `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "dob")]
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub address: String,
    #[serde(default)]
    pub assigned_doctor_id: Option<String>,
}

/// Partial update for a patient profile. `None` leaves a field untouched.
///
/// `assigned_doctor_id` is doubly optional: `Some(None)` clears the assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "dob")]
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub address: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub assigned_doctor_id: Option<Option<String>>,
}

impl Patient {
    /// Case-insensitive substring match on name, email or phone.
    /// A blank query matches every patient.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&self.name, &self.email, &self.phone]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

impl PatientCreate {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        date_of_birth: NaiveDate,
        gender: Gender,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            date_of_birth,
            gender,
            address: address.into(),
            assigned_doctor_id: None,
        }
    }

    pub fn assigned_to(mut self, doctor_id: impl Into<String>) -> Self {
        self.assigned_doctor_id = Some(doctor_id.into());
        self
    }
}
