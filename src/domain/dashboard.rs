use serde::{Deserialize, Serialize};

use super::Appointment;

/// Aggregate figures computed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_patients: usize,
    pub total_appointments: usize,
    pub total_doctors: usize,
    pub todays_appointments: Vec<Appointment>,
}
