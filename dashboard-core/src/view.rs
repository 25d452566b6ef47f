//! Display-ready values derived from a canonical record.

use std::str::FromStr;

use chrono::{Month, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    classify, classify_blood_pressure_chart, fallback, summarize_trend, ChartStatus,
    DiagnosticEntry, LabTest, MetricStatus, PatientRecord, VitalKind, VitalsSnapshot,
};

const DATE_INPUT_FORMATS: [&str; 4] = ["%Y-%m-%d", "%m/%d/%Y", "%b %d, %Y", "%B %d, %Y"];

/// Everything the presentation layer needs to draw one selected patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientView {
    pub profile: ProfilePanel,
    pub metric_cards: Vec<MetricCard>,
    pub blood_pressure: BloodPressureChart,
    pub diagnostics: Vec<DiagnosticRow>,
    pub lab_results: Vec<LabTest>,
}

impl PatientView {
    pub fn from_record(record: &PatientRecord) -> Self {
        Self {
            profile: ProfilePanel::from_record(record),
            metric_cards: metric_cards(record.latest_vitals()),
            blood_pressure: blood_pressure_chart(&record.diagnosis_history),
            diagnostics: record.diagnostic_list.iter().map(DiagnosticRow::from).collect(),
            lab_results: record.lab_results.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfilePanel {
    pub name: String,
    pub gender: String,
    pub age: u32,
    pub profile_picture_url: Option<String>,
    pub date_of_birth: String,
    pub phone_number: String,
    pub emergency_contact: String,
    pub insurance_type: String,
}

impl ProfilePanel {
    fn from_record(record: &PatientRecord) -> Self {
        Self {
            name: record.name.clone(),
            gender: record.gender.clone(),
            age: record.age,
            profile_picture_url: record.profile_picture_url.clone(),
            date_of_birth: format_date_of_birth(&record.date_of_birth),
            phone_number: record.phone_number.clone(),
            emergency_contact: record.emergency_contact.clone(),
            insurance_type: record.insurance_type.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricCard {
    pub kind: VitalKind,
    pub label: String,
    pub value: f64,
    /// `value` rendered with one decimal.
    pub display_value: String,
    pub unit: String,
    pub status: MetricStatus,
    pub status_label: String,
}

/// Cards for respiratory rate, temperature and heart rate, in that order.
pub fn metric_cards(latest: Option<&VitalsSnapshot>) -> Vec<MetricCard> {
    [
        VitalKind::RespiratoryRate,
        VitalKind::Temperature,
        VitalKind::HeartRate,
    ]
    .into_iter()
    .map(|kind| {
        let value = latest
            .map(|snapshot| snapshot.value(kind))
            .unwrap_or_else(|| fallback::default_metric_reading(kind));
        let status = classify(value, kind);
        MetricCard {
            kind,
            label: kind.label().to_string(),
            value,
            display_value: format_metric_value(value),
            unit: kind.unit().to_string(),
            status,
            status_label: status.label().to_string(),
        }
    })
    .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub systolic: f64,
    pub diastolic: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LegendItem {
    pub label: String,
    pub value: f64,
    pub is_above_average: bool,
    /// "Higher than Average" or "Lower than Average" relative to the series.
    pub trend_label: String,
    pub status: ChartStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BloodPressureChart {
    pub points: Vec<ChartPoint>,
    pub systolic: LegendItem,
    pub diastolic: LegendItem,
}

/// Chart series plus legend. An empty history draws the default series.
pub fn blood_pressure_chart(history: &[VitalsSnapshot]) -> BloodPressureChart {
    let (points, series) = if history.is_empty() {
        let series: Vec<VitalsSnapshot> = fallback::DEFAULT_CHART_SERIES
            .iter()
            .map(|(month, systolic, diastolic)| VitalsSnapshot {
                month: (*month).to_string(),
                systolic: *systolic,
                diastolic: *diastolic,
                ..VitalsSnapshot::default()
            })
            .collect();
        let points = series
            .iter()
            .map(|snapshot| ChartPoint {
                label: snapshot.month.clone(),
                systolic: snapshot.systolic,
                diastolic: snapshot.diastolic,
            })
            .collect();
        (points, series)
    } else {
        let points = history
            .iter()
            .map(|snapshot| ChartPoint {
                label: chart_label(&snapshot.month, snapshot.year),
                systolic: snapshot.systolic,
                diastolic: snapshot.diastolic,
            })
            .collect();
        (points, history.to_vec())
    };

    let trend = summarize_trend(&series);

    BloodPressureChart {
        points,
        systolic: legend_item(
            VitalKind::Systolic,
            trend.latest.systolic,
            trend.is_systolic_above_avg,
        ),
        diastolic: legend_item(
            VitalKind::Diastolic,
            trend.latest.diastolic,
            trend.is_diastolic_above_avg,
        ),
    }
}

fn legend_item(kind: VitalKind, value: f64, is_above_average: bool) -> LegendItem {
    let trend = if is_above_average {
        MetricStatus::Higher
    } else {
        MetricStatus::Lower
    };
    LegendItem {
        label: kind.label().to_string(),
        value,
        is_above_average,
        trend_label: trend.label().to_string(),
        status: classify_blood_pressure_chart(value, kind),
    }
}

/// Colour family of a diagnostic status in the table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticTone {
    Observation,
    Resolved,
    Neutral,
}

impl DiagnosticTone {
    pub fn for_status(status: &str) -> Self {
        match status {
            "Under Observation" => DiagnosticTone::Observation,
            "Cured" => DiagnosticTone::Resolved,
            _ => DiagnosticTone::Neutral,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticRow {
    pub problem: String,
    pub description: String,
    pub status: String,
    pub tone: DiagnosticTone,
}

impl From<&DiagnosticEntry> for DiagnosticRow {
    fn from(entry: &DiagnosticEntry) -> Self {
        Self {
            problem: entry.problem.clone(),
            description: entry.description.clone(),
            status: entry.status.clone(),
            tone: DiagnosticTone::for_status(&entry.status),
        }
    }
}

/// Render a free-form date of birth as "August 23, 1996".
///
/// Empty input becomes "N/A"; anything unparseable is returned as given.
pub fn format_date_of_birth(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return fallback::NOT_AVAILABLE.to_string();
    }

    DATE_INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

/// Short axis label such as "Mar 24". Unknown months are kept verbatim.
pub fn chart_label(month: &str, year: i32) -> String {
    let Ok(parsed) = Month::from_str(month.trim()) else {
        return month.to_string();
    };
    let short: String = parsed.name().chars().take(3).collect();
    if year == 0 {
        short
    } else {
        format!("{short} {:02}", year.rem_euclid(100))
    }
}

pub fn format_metric_value(value: f64) -> String {
    format!("{value:.1}")
}
