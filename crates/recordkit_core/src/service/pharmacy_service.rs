//! Patient and prescription use-case service.
//!
//! # Responsibility
//! - Own the patient and prescription repositories.
//! - Answer "prescriptions for patient" through a freshly built `GroupIndex`.
//! - Turn raw console input into a patient lookup.
//!
//! # Invariants
//! - A prescription is only accepted for a registered patient.
//! - Group lookups are rebuilt from the current snapshot on every call.

use crate::model::patient::{Patient, Prescription};
use crate::model::RecordId;
use crate::repo::group_index::GroupIndex;
use crate::repo::indexed_repo::IndexedRepository;
use crate::repo::vec_repo::VecRepository;
use crate::repo::{RepoError, RepoResult, Repository};
use crate::report::prescription_lines;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure of a console-driven patient lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Input is not a numeric patient id.
    InvalidId(String),
    Repo(RepoError),
}

impl Display for LookupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidId(raw) => write!(f, "invalid id `{raw}`: expected a numeric patient id"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LookupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidId(_) => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for LookupError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

#[derive(Debug, Default)]
pub struct PharmacyService {
    patients: IndexedRepository<Patient>,
    prescriptions: VecRepository<Prescription>,
}

impl PharmacyService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_patient(&mut self, patient: Patient) -> RepoResult<()> {
        self.patients.add(patient)
    }

    /// Adds a prescription for an existing patient.
    ///
    /// Returns `NotFound(patient_id)` when the patient is not registered.
    pub fn add_prescription(&mut self, prescription: Prescription) -> RepoResult<()> {
        if !self.patients.contains(prescription.patient_id) {
            return Err(RepoError::NotFound(prescription.patient_id));
        }
        self.prescriptions.add(prescription)
    }

    pub fn patient(&self, id: RecordId) -> RepoResult<&Patient> {
        self.patients.get(id)
    }

    pub fn patients(&self) -> Vec<&Patient> {
        self.patients.list_all()
    }

    /// Builds a patient-id index over the current prescriptions.
    pub fn prescription_index(&self) -> GroupIndex<'_, RecordId, Prescription> {
        GroupIndex::build(self.prescriptions.iter(), |rx| rx.patient_id)
    }

    /// Prescriptions of one registered patient in insertion order.
    ///
    /// An existing patient without prescriptions yields an empty list.
    pub fn prescriptions_for(&self, patient_id: RecordId) -> RepoResult<Vec<&Prescription>> {
        self.patients.get(patient_id)?;
        let index = self.prescription_index();
        Ok(index
            .get(&patient_id)
            .map(|group| group.to_vec())
            .unwrap_or_default())
    }

    pub fn render_prescriptions(&self, patient_id: RecordId) -> RepoResult<Vec<String>> {
        let patient = self.patients.get(patient_id)?;
        let prescriptions = self.prescriptions_for(patient_id)?;
        Ok(prescription_lines(patient, &prescriptions))
    }

    /// Parses raw console input as a patient id and renders the result.
    pub fn lookup_input(&self, raw: &str) -> Result<Vec<String>, LookupError> {
        let trimmed = raw.trim();
        let id: RecordId = trimmed.parse().map_err(|_| {
            warn!("event=patient_lookup module=service status=invalid_input");
            LookupError::InvalidId(trimmed.to_string())
        })?;
        Ok(self.render_prescriptions(id)?)
    }
}
