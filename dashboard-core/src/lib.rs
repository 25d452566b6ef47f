//! Canonical patient model and the pure derivations the dashboard renders.

use serde::{Deserialize, Serialize};

pub mod classify;
pub mod fallback;
pub mod lookup;
pub mod session;
pub mod trend;
pub mod validation;
pub mod view;

pub use classify::{classify, classify_blood_pressure_chart};
pub use fallback::{default_lab_tests, default_patient, default_roster, fallback_patients};
pub use lookup::{filter_roster, find_patient_by_name, roster};
pub use session::{PatientSession, SelectionTicket};
pub use trend::{summarize_series, summarize_trend};
pub use validation::{validate_vitals, VitalRangeIssue};
pub use view::PatientView;

/// Settings shared by the data source adapter and the presentation bridge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub api_username: String,
    pub api_password: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Additional attempts after the first failed one.
    pub max_retries: u32,
    pub retry_delay_ms: u64,
    pub retryable_statuses: Vec<u16>,
    /// Patient shown when nothing has been selected yet.
    pub default_patient_name: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://fedskillstest.coalitiontechnologies.workers.dev".to_string(),
            api_username: "coalition".to_string(),
            api_password: "skills-test".to_string(),
            request_timeout_secs: 10,
            max_retries: 3,
            retry_delay_ms: 1000,
            retryable_statuses: vec![408, 429, 500, 502, 503, 504],
            default_patient_name: fallback::DEFAULT_PATIENT_NAME.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Reject settings the HTTP adapter cannot work with.
    pub fn validate(&self) -> Result<(), DashboardError> {
        let base = self.api_base_url.trim();
        if base.is_empty() {
            return Err(DashboardError::Config("api_base_url is empty".to_string()));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(DashboardError::Config(format!(
                "api_base_url must use http or https, received {base}"
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(DashboardError::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn patients_url(&self) -> String {
        format!("{}/patients", self.api_base_url.trim().trim_end_matches('/'))
    }

    pub fn patient_url(&self, id: &str) -> String {
        format!("{}/{id}", self.patients_url())
    }
}

/// One person's clinical snapshot after normalization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientRecord {
    pub name: String,
    pub gender: String,
    pub age: u32,
    pub profile_picture_url: Option<String>,
    pub date_of_birth: String,
    pub phone_number: String,
    pub emergency_contact: String,
    pub insurance_type: String,
    /// Oldest first, as received.
    pub diagnosis_history: Vec<VitalsSnapshot>,
    pub diagnostic_list: Vec<DiagnosticEntry>,
    pub lab_results: Vec<LabTest>,
}

impl PatientRecord {
    /// Most recent snapshot, i.e. the last element of the history.
    pub fn latest_vitals(&self) -> Option<&VitalsSnapshot> {
        self.diagnosis_history.last()
    }
}

/// One monthly observation. Every vital is a bare number; `0` means missing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct VitalsSnapshot {
    pub month: String,
    pub year: i32,
    pub systolic: f64,
    pub diastolic: f64,
    pub heart_rate: f64,
    pub respiratory_rate: f64,
    pub temperature: f64,
}

impl VitalsSnapshot {
    pub fn value(&self, kind: VitalKind) -> f64 {
        match kind {
            VitalKind::RespiratoryRate => self.respiratory_rate,
            VitalKind::Temperature => self.temperature,
            VitalKind::HeartRate => self.heart_rate,
            VitalKind::Systolic => self.systolic,
            VitalKind::Diastolic => self.diastolic,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticEntry {
    pub problem: String,
    pub description: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabTest {
    pub name: String,
    pub result_value: Option<LabValue>,
}

impl LabTest {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            result_value: None,
        }
    }
}

/// Result attached to a lab test when the source keys tests by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum LabValue {
    Number(f64),
    Text(String),
}

/// Vital sign series the classifier and aggregator understand.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VitalKind {
    RespiratoryRate,
    Temperature,
    HeartRate,
    Systolic,
    Diastolic,
}

impl VitalKind {
    pub const ALL: [VitalKind; 5] = [
        VitalKind::RespiratoryRate,
        VitalKind::Temperature,
        VitalKind::HeartRate,
        VitalKind::Systolic,
        VitalKind::Diastolic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            VitalKind::RespiratoryRate => "Respiratory Rate",
            VitalKind::Temperature => "Temperature",
            VitalKind::HeartRate => "Heart Rate",
            VitalKind::Systolic => "Systolic",
            VitalKind::Diastolic => "Diastolic",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            VitalKind::RespiratoryRate | VitalKind::HeartRate => "bpm",
            VitalKind::Temperature => "°F",
            VitalKind::Systolic | VitalKind::Diastolic => "mmHg",
        }
    }

    /// Typical value displayed next to a metric card.
    pub fn reference_value(self) -> f64 {
        match self {
            VitalKind::RespiratoryRate => 16.0,
            VitalKind::Temperature => 98.6,
            VitalKind::HeartRate => 80.0,
            VitalKind::Systolic => 120.0,
            VitalKind::Diastolic => 80.0,
        }
    }

    /// Parse the names used by JS callers and the CLI.
    pub fn parse(input: &str) -> Option<Self> {
        let normalized: String = input
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "respiratoryrate" | "respiratory" => Some(VitalKind::RespiratoryRate),
            "temperature" | "temp" => Some(VitalKind::Temperature),
            "heartrate" | "heart" => Some(VitalKind::HeartRate),
            "systolic" => Some(VitalKind::Systolic),
            "diastolic" => Some(VitalKind::Diastolic),
            _ => None,
        }
    }
}

/// Three-way status used for metric cards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MetricStatus {
    Higher,
    Lower,
    Normal,
}

impl MetricStatus {
    pub fn label(self) -> &'static str {
        match self {
            MetricStatus::Higher => "Higher than Average",
            MetricStatus::Lower => "Lower than Average",
            MetricStatus::Normal => "Normal",
        }
    }
}

/// Status used by the blood-pressure chart legend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChartStatus {
    Higher,
    Elevated,
    Normal,
}

impl ChartStatus {
    pub fn label(self) -> &'static str {
        match self {
            ChartStatus::Higher => "Higher than Average",
            ChartStatus::Elevated => "Elevated",
            ChartStatus::Normal => "Normal",
        }
    }
}

/// Blood-pressure pair taken from one snapshot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct BloodPressureReading {
    pub systolic: f64,
    pub diastolic: f64,
}

/// Average, latest and direction for a single vital series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SeriesTrend {
    pub average: f64,
    pub latest: f64,
    pub is_above_average: bool,
}

/// Blood-pressure trend over a whole history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TrendSummary {
    pub systolic_avg: f64,
    pub diastolic_avg: f64,
    pub latest: BloodPressureReading,
    pub is_systolic_above_avg: bool,
    pub is_diastolic_above_avg: bool,
}

/// Errors raised by strict parsing helpers and configuration checks.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("payload is missing required data")]
    MissingData,
    #[error("could not parse payload: {0}")]
    Parse(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}
