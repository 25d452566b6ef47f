//! Name-based patient lookup and the roster shown in the patient list.
//!
//! Names are the only identity the source provides; two patients sharing a
//! name cannot be told apart.

use serde::{Deserialize, Serialize};

use crate::{fallback, PatientRecord};

/// Case-insensitive exact match on `name`; the first match wins.
///
/// Without a match the first patient is returned, and an empty list yields
/// the default record. This never fails.
pub fn find_patient_by_name(patients: &[PatientRecord], name: &str) -> PatientRecord {
    let needle = name.to_lowercase();
    patients
        .iter()
        .find(|patient| patient.name.to_lowercase() == needle)
        .or_else(|| patients.first())
        .cloned()
        .unwrap_or_else(fallback::default_patient)
}

/// Row of the patient list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatientSummary {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub profile_picture_url: Option<String>,
}

impl From<&PatientRecord> for PatientSummary {
    fn from(record: &PatientRecord) -> Self {
        Self {
            name: record.name.clone(),
            age: record.age,
            gender: record.gender.clone(),
            profile_picture_url: record.profile_picture_url.clone(),
        }
    }
}

/// Summaries for a patient list, or the built-in roster when it is empty.
pub fn roster(patients: &[PatientRecord]) -> Vec<PatientSummary> {
    if patients.is_empty() {
        return fallback::default_roster();
    }
    patients.iter().map(PatientSummary::from).collect()
}

/// Case-insensitive substring search over names, keeping list order.
pub fn filter_roster<'a>(summaries: &'a [PatientSummary], query: &str) -> Vec<&'a PatientSummary> {
    let query = query.trim().to_lowercase();
    summaries
        .iter()
        .filter(|summary| query.is_empty() || summary.name.to_lowercase().contains(&query))
        .collect()
}
