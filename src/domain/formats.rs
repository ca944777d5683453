//! Serde helpers for the external field formats.

/// `HH:MM` wall-clock time.
pub mod hh_mm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(de::Error::custom)
    }
}

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use crate::domain::{Appointment, AppointmentStatus, PatientPatch};
    use chrono::{NaiveDate, NaiveTime};
    use serde_json::json;

    #[test]
    fn test_appointment_wire_shape() {
        let appointment = Appointment {
            id: "a1".into(),
            patient_id: "p1".into(),
            patient_name: "John Doe".into(),
            doctor_id: "u1".into(),
            doctor_name: "Dr. Sarah Bennett".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            time: NaiveTime::from_hms_opt(9, 5, 0).unwrap(),
            status: AppointmentStatus::Scheduled,
            kind: "Checkup".into(),
        };

        let value = serde_json::to_value(&appointment).unwrap();
        assert_eq!(value["date"], json!("2024-01-01"));
        assert_eq!(value["time"], json!("09:05"));
        assert_eq!(value["type"], json!("Checkup"));
        assert_eq!(value["patientName"], json!("John Doe"));
        assert_eq!(value["status"], json!("Scheduled"));

        let back: Appointment = serde_json::from_value(value).unwrap();
        assert_eq!(back, appointment);
    }

    #[test]
    fn test_rejects_malformed_time() {
        let raw = json!({
            "id": "a1", "patientId": "p1", "patientName": "x", "doctorId": "u1",
            "doctorName": "y", "date": "2024-01-01", "time": "9am",
            "status": "Scheduled", "type": "Checkup"
        });
        assert!(serde_json::from_value::<Appointment>(raw).is_err());
    }

    #[test]
    fn test_patch_distinguishes_null_from_absent() {
        let absent: PatientPatch = serde_json::from_value(json!({ "phone": "555" })).unwrap();
        assert_eq!(absent.assigned_doctor_id, None);
        assert_eq!(absent.phone.as_deref(), Some("555"));

        let cleared: PatientPatch = serde_json::from_value(json!({ "assignedDoctorId": null })).unwrap();
        assert_eq!(cleared.assigned_doctor_id, Some(None));

        let set: PatientPatch = serde_json::from_value(json!({ "assignedDoctorId": "u1", "dob": "1990-08-22" })).unwrap();
        assert_eq!(set.assigned_doctor_id, Some(Some("u1".to_string())));
        assert_eq!(set.date_of_birth, NaiveDate::from_ymd_opt(1990, 8, 22));
    }
}
