//! The built-in dataset substituted whenever real data is unavailable.

use crate::{DiagnosticEntry, LabTest, PatientRecord, VitalKind, VitalsSnapshot};

pub const DEFAULT_PATIENT_NAME: &str = "Jessica Taylor";

/// Name given to a record whose payload carried no usable name.
pub const UNKNOWN_PATIENT_NAME: &str = "Unknown Patient";

/// Placeholder for missing free-text profile fields.
pub const NOT_AVAILABLE: &str = "N/A";

pub const UNKNOWN_STATUS: &str = "Unknown";

/// Name used for lab entries the source supplied without a usable name.
pub const UNNAMED_LAB_TEST: &str = "Lab Test";

/// The canonical fallback record.
pub fn default_patient() -> PatientRecord {
    PatientRecord {
        name: DEFAULT_PATIENT_NAME.to_string(),
        gender: "Female".to_string(),
        age: 28,
        profile_picture_url: Some("https://fedskillstest.ct.digital/4.png".to_string()),
        date_of_birth: "1996-08-23".to_string(),
        phone_number: "(415) 555-1234".to_string(),
        emergency_contact: "(415) 555-5678".to_string(),
        insurance_type: "Sunrise Health Assurance".to_string(),
        diagnosis_history: vec![
            snapshot("March", 2024, 160.0, 78.0, 78.0, 20.0, 98.6),
            snapshot("April", 2024, 155.0, 76.0, 76.0, 18.0, 98.4),
            snapshot("May", 2024, 150.0, 74.0, 72.0, 16.0, 98.5),
        ],
        diagnostic_list: vec![
            diagnostic(
                "Hypertension",
                "Elevated blood pressure condition",
                "Active",
            ),
            diagnostic(
                "Type 2 Diabetes",
                "Metabolic disorder affecting blood sugar",
                "Active",
            ),
            diagnostic("Asthma", "Chronic respiratory condition", "Controlled"),
        ],
        lab_results: vec![
            LabTest::named("Blood Tests"),
            LabTest::named("CT Scans"),
            LabTest::named("MRI Results"),
        ],
    }
}

/// Patient list used when the list fetch fails.
pub fn fallback_patients() -> Vec<PatientRecord> {
    vec![default_patient()]
}

/// Lab tests shown when a payload has no readable lab results.
///
/// This list is separate from the three tests carried by
/// [`default_patient`], which is a complete record of its own.
pub fn default_lab_tests() -> Vec<LabTest> {
    [
        "Blood Tests",
        "CT Scans",
        "Radiology Reports",
        "X-Rays",
        "Urine Test",
    ]
    .into_iter()
    .map(LabTest::named)
    .collect()
}

/// Patient summaries used by the roster when the list is empty.
pub fn default_roster() -> Vec<crate::lookup::PatientSummary> {
    [
        ("Emily Williams", 18, "Female"),
        ("Ryan Johnson", 45, "Male"),
        ("Jessica Taylor", 28, "Female"),
        ("Brandon Mitchell", 54, "Male"),
        ("Samantha Johnson", 56, "Female"),
        ("Ashley Martinez", 54, "Female"),
        ("Olivia Brown", 32, "Female"),
        ("Tyler Davis", 19, "Male"),
        ("Kevin Anderson", 30, "Male"),
        ("Dylan Thompson", 56, "Male"),
        ("Nathan Evans", 58, "Male"),
        ("Mike Nolan", 31, "Male"),
    ]
    .into_iter()
    .map(|(name, age, gender)| crate::lookup::PatientSummary {
        name: name.to_string(),
        age,
        gender: gender.to_string(),
        profile_picture_url: None,
    })
    .collect()
}

/// Six-month blood-pressure series drawn when a patient has no history.
/// Each entry is `(label, systolic, diastolic)`.
pub const DEFAULT_CHART_SERIES: [(&str, f64, f64); 6] = [
    ("Oct", 120.0, 80.0),
    ("Nov", 115.0, 65.0),
    ("Dec", 155.0, 95.0),
    ("Jan", 110.0, 85.0),
    ("Feb", 145.0, 70.0),
    ("Mar", 160.0, 78.0),
];

/// Card reading used when a patient has no history.
pub fn default_metric_reading(kind: VitalKind) -> f64 {
    match kind {
        VitalKind::RespiratoryRate => 16.0,
        VitalKind::Temperature => 98.6,
        VitalKind::HeartRate => 78.0,
        VitalKind::Systolic => 160.0,
        VitalKind::Diastolic => 78.0,
    }
}

fn snapshot(
    month: &str,
    year: i32,
    systolic: f64,
    diastolic: f64,
    heart_rate: f64,
    respiratory_rate: f64,
    temperature: f64,
) -> VitalsSnapshot {
    VitalsSnapshot {
        month: month.to_string(),
        year,
        systolic,
        diastolic,
        heart_rate,
        respiratory_rate,
        temperature,
    }
}

fn diagnostic(problem: &str, description: &str, status: &str) -> DiagnosticEntry {
    DiagnosticEntry {
        problem: problem.to_string(),
        description: description.to_string(),
        status: status.to_string(),
    }
}
