use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::{Patient, PatientCreate, PatientPatch};

impl Entity for Patient {
    type Id = String;
    type CreateParams = PatientCreate;
    type Patch = PatientPatch;
    type Action = ();
    type ActionResult = ();

    const NAME: &'static str = "patient";

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new Patient, stamping `created_at` with the current time.
    fn from_create_params(id: String, params: PatientCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
            phone: params.phone,
            date_of_birth: params.date_of_birth,
            gender: params.gender,
            address: params.address,
            assigned_doctor_id: params.assigned_doctor_id,
            created_at: Utc::now(),
        })
    }

    /// Merges the supplied fields. `id` and `created_at` have no patch field.
    fn on_update(&mut self, patch: PatientPatch) -> Result<(), String> {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(date_of_birth) = patch.date_of_birth {
            self.date_of_birth = date_of_birth;
        }
        if let Some(gender) = patch.gender {
            self.gender = gender;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(assigned_doctor_id) = patch.assigned_doctor_id {
            self.assigned_doctor_id = assigned_doctor_id;
        }
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Gender;
    use chrono::NaiveDate;

    fn sample() -> Patient {
        let dob = NaiveDate::from_ymd_opt(1985, 4, 12).unwrap();
        let params = PatientCreate::new(
            "John Doe",
            "john@example.com",
            "555-0123",
            dob,
            Gender::Male,
            "123 Maple St",
        )
        .assigned_to("u1");
        Patient::from_create_params("p9".to_string(), params).unwrap()
    }

    #[test]
    fn test_patch_touches_only_supplied_fields() {
        let original = sample();
        let mut patched = original.clone();
        patched
            .on_update(PatientPatch { phone: Some("555-9999".into()), ..Default::default() })
            .unwrap();

        assert_eq!(patched.phone, "555-9999");
        assert_eq!(Patient { phone: original.phone.clone(), ..patched }, original);
    }

    #[test]
    fn test_patch_can_clear_assigned_doctor() {
        let mut patient = sample();
        patient
            .on_update(PatientPatch { assigned_doctor_id: Some(None), ..Default::default() })
            .unwrap();
        assert_eq!(patient.assigned_doctor_id, None);
    }

    #[test]
    fn test_search_matching() {
        let patient = sample();
        assert!(patient.matches("JOHN"));
        assert!(patient.matches("example.com"));
        assert!(patient.matches("0123"));
        assert!(patient.matches("   "));
        assert!(!patient.matches("jane"));
    }
}
