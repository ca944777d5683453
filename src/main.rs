use chrono::{Duration, NaiveTime, Utc};
use tracing::{error, info, Instrument};

use clinic_desk::app_system::{setup_tracing, ClinicConfig, ClinicSystem};
use clinic_desk::domain::{AppointmentRequest, Gender, MedicalRecordCreate, PatientCreate, PatientPatch};

/// Walks one front-desk session through every service.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClinicConfig::from_env()?;
    setup_tracing(&config);

    info!("Starting clinic front desk");

    let system = ClinicSystem::new(&config)?;

    let span = tracing::info_span!("login");
    let user = async {
        info!("Signing in as the receptionist");
        system.auth_client.login("reception@medicare.pro").await
    }
    .instrument(span)
    .await?;

    match &user {
        Some(user) => info!(user_name = %user.name, "Signed in"),
        None => {
            error!("Invalid credentials");
            system.shutdown().await?;
            return Ok(());
        }
    }

    let stats = system.dashboard_client.stats().await?;
    info!(
        patients = stats.total_patients,
        appointments = stats.total_appointments,
        doctors = stats.total_doctors,
        today = stats.todays_appointments.len(),
        "Dashboard loaded"
    );

    // Register a walk-in patient with the first available doctor
    let doctors = system.user_client.list_doctors().await?;
    let Some(doctor) = doctors.first() else {
        error!("No doctors on staff");
        system.shutdown().await?;
        return Ok(());
    };

    let dob = Utc::now().date_naive() - Duration::days(365 * 30);
    let patient = system
        .patient_client
        .create_patient(
            PatientCreate::new("Ada Park", "ada@example.com", "555-0777", dob, Gender::Female, "12 Elm Rd")
                .assigned_to(doctor.id.clone()),
        )
        .await?;

    let patient = system
        .patient_client
        .update_patient(
            patient.id.clone(),
            PatientPatch { phone: Some("555-0778".to_string()), ..Default::default() },
        )
        .await?;
    info!(patient_id = %patient.id, phone = %patient.phone, "Profile updated");

    let span = tracing::info_span!("booking");
    let booking = async {
        let tomorrow = Utc::now().date_naive() + Duration::days(1);
        let slot = NaiveTime::from_hms_opt(11, 15, 0).unwrap_or(NaiveTime::MIN);
        let request = AppointmentRequest::new(patient.id.clone(), doctor.id.clone(), tomorrow, slot, "Consultation");
        system.appointment_client.create_appointment(request).await
    }
    .instrument(span)
    .await;

    match booking {
        Ok(appointment) => info!(appointment_id = %appointment.id, "Appointment booked"),
        Err(e) => error!(error = %e, "Booking failed"),
    }

    system
        .record_client
        .create_record(MedicalRecordCreate {
            patient_id: patient.id.clone(),
            date: Utc::now().date_naive(),
            doctor_id: doctor.id.clone(),
            doctor_name: doctor.name.clone(),
            diagnosis: "Initial assessment".to_string(),
            prescription: "None".to_string(),
            notes: "New patient intake.".to_string(),
        })
        .await?;

    let timeline = system.record_client.list_records_for_patient(patient.id.clone()).await?;
    info!(records = timeline.len(), "Timeline loaded");

    for appointment in system.appointment_client.list_appointments().await? {
        info!(
            date = %appointment.date,
            time = %appointment.time.format("%H:%M"),
            patient = %appointment.patient_name,
            status = %appointment.status,
            "Appointment"
        );
    }

    system.shutdown().await?;

    info!("Front desk session completed");
    Ok(())
}
