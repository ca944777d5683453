use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::formats::hh_mm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Completed and Cancelled admit no further transitions.
    pub fn is_terminal(self) -> bool {
        !matches!(self, AppointmentStatus::Scheduled)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
        };
        f.write_str(name)
    }
}

/// A booked visit.
///
/// `patient_name` and `doctor_name` are copied when the appointment is created
/// and keep the names as they were at booking time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub time: NaiveTime,
    pub status: AppointmentStatus,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Appointment {
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

/// What a caller supplies to book an appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub patient_id: String,
    pub doctor_id: String,
    pub date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub time: NaiveTime,
    #[serde(rename = "type")]
    pub kind: String,
}

impl AppointmentRequest {
    pub fn new(
        patient_id: impl Into<String>,
        doctor_id: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            patient_id: patient_id.into(),
            doctor_id: doctor_id.into(),
            date,
            time,
            kind: kind.into(),
        }
    }
}

/// Store payload: the request plus the resolved display names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentCreate {
    pub request: AppointmentRequest,
    pub patient_name: String,
    pub doctor_name: String,
}
