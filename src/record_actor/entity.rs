use std::convert::Infallible;

use crate::actor_framework::{Entity, Placement};
use crate::domain::{MedicalRecord, MedicalRecordCreate};

impl Entity for MedicalRecord {
    type Id = String;
    type CreateParams = MedicalRecordCreate;
    type Patch = Infallible;
    type Action = ();
    type ActionResult = ();

    const NAME: &'static str = "medical_record";
    const PLACEMENT: Placement = Placement::Front;

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create_params(id: String, params: MedicalRecordCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            patient_id: params.patient_id,
            date: params.date,
            doctor_id: params.doctor_id,
            doctor_name: params.doctor_name,
            diagnosis: params.diagnosis,
            prescription: params.prescription,
            notes: params.notes,
        })
    }

    /// Records are immutable once written.
    fn on_update(&mut self, patch: Infallible) -> Result<(), String> {
        match patch {}
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
