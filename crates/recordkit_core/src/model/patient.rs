//! Patient and prescription records.

use super::{require_name, Entity, RecordId, ValidationError};

/// A registered patient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub id: RecordId,
    pub name: String,
    pub age: u32,
}

impl Patient {
    pub fn new(id: RecordId, name: impl Into<String>, age: u32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }
}

impl Entity for Patient {
    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_name(self.id, &self.name)
    }
}

/// A prescription issued to one patient.
///
/// `patient_id` is a back-reference only; the patient record is owned by a
/// separate repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prescription {
    pub id: RecordId,
    pub patient_id: RecordId,
    pub medication: String,
    pub dosage: String,
}

impl Prescription {
    pub fn new(
        id: RecordId,
        patient_id: RecordId,
        medication: impl Into<String>,
        dosage: impl Into<String>,
    ) -> Self {
        Self {
            id,
            patient_id,
            medication: medication.into(),
            dosage: dosage.into(),
        }
    }
}

impl Entity for Prescription {
    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_name(self.id, &self.medication)
    }
}
