//! Fixed sample rows loaded at startup when `seed_sample_data` is on.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::domain::{
    Appointment, AppointmentStatus, Gender, MedicalRecord, Patient, User, UserRole,
};

const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid seed date"),
    }
}

const fn time(hour: u32, minute: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, minute, 0) {
        Some(time) => time,
        None => panic!("invalid seed time"),
    }
}

const JOHN_DOB: NaiveDate = date(1985, 4, 12);
const JANE_DOB: NaiveDate = date(1990, 8, 22);
const ROBERT_DOB: NaiveDate = date(1978, 11, 5);
const JOHN_REGISTERED: NaiveDate = date(2023, 1, 15);
const JANE_REGISTERED: NaiveDate = date(2023, 2, 10);
const ROBERT_REGISTERED: NaiveDate = date(2023, 3, 1);
const FOLLOW_UP_DATE: NaiveDate = date(2023, 11, 20);
const ALLERGY_VISIT: NaiveDate = date(2023, 5, 10);

const NINE: NaiveTime = time(9, 0);
const HALF_TEN: NaiveTime = time(10, 30);
const TWO_PM: NaiveTime = time(14, 0);

const DOCTOR_ID: &str = "u1";
const DOCTOR_NAME: &str = "Dr. Sarah Bennett";

fn midnight_utc(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

pub fn sample_users() -> Vec<User> {
    vec![
        User::new(DOCTOR_ID, DOCTOR_NAME, "doctor@medicare.pro", UserRole::Doctor)
            .with_avatar("https://picsum.photos/id/64/150/150"),
        User::new("u2", "James Wilson", "admin@medicare.pro", UserRole::Admin)
            .with_avatar("https://picsum.photos/id/55/150/150"),
        User::new("u3", "Emily Clark", "reception@medicare.pro", UserRole::Receptionist)
            .with_avatar("https://picsum.photos/id/42/150/150"),
    ]
}

pub fn sample_patients() -> Vec<Patient> {
    let patient = |id: &str,
                   name: &str,
                   email: &str,
                   phone: &str,
                   dob: NaiveDate,
                   gender: Gender,
                   address: &str,
                   registered: NaiveDate| Patient {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        date_of_birth: dob,
        gender,
        address: address.to_string(),
        assigned_doctor_id: Some(DOCTOR_ID.to_string()),
        created_at: midnight_utc(registered),
    };

    vec![
        patient("p1", "John Doe", "john@example.com", "555-0123", JOHN_DOB, Gender::Male, "123 Maple St", JOHN_REGISTERED),
        patient("p2", "Jane Smith", "jane@example.com", "555-0198", JANE_DOB, Gender::Female, "456 Oak Ave", JANE_REGISTERED),
        patient("p3", "Robert Brown", "bob@example.com", "555-0456", ROBERT_DOB, Gender::Male, "789 Pine Ln", ROBERT_REGISTERED),
    ]
}

/// Two of the three sample appointments fall on `today`.
pub fn sample_appointments(today: NaiveDate) -> Vec<Appointment> {
    let appointment = |id: &str,
                       patient_id: &str,
                       patient_name: &str,
                       date: NaiveDate,
                       time: NaiveTime,
                       status: AppointmentStatus,
                       kind: &str| Appointment {
        id: id.to_string(),
        patient_id: patient_id.to_string(),
        patient_name: patient_name.to_string(),
        doctor_id: DOCTOR_ID.to_string(),
        doctor_name: DOCTOR_NAME.to_string(),
        date,
        time,
        status,
        kind: kind.to_string(),
    };

    vec![
        appointment("a1", "p1", "John Doe", today, NINE, AppointmentStatus::Scheduled, "Checkup"),
        appointment("a2", "p2", "Jane Smith", today, HALF_TEN, AppointmentStatus::Completed, "Consultation"),
        appointment("a3", "p3", "Robert Brown", FOLLOW_UP_DATE, TWO_PM, AppointmentStatus::Scheduled, "Follow-up"),
    ]
}

pub fn sample_records() -> Vec<MedicalRecord> {
    vec![MedicalRecord {
        id: "m1".to_string(),
        patient_id: "p1".to_string(),
        date: ALLERGY_VISIT,
        doctor_id: DOCTOR_ID.to_string(),
        doctor_name: DOCTOR_NAME.to_string(),
        diagnosis: "Seasonal Allergies".to_string(),
        prescription: "Cetirizine 10mg".to_string(),
        notes: "Patient reported sneezing and itchy eyes.".to_string(),
    }]
}
