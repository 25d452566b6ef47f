//! Patient API JSON to canonical `PatientRecord` normalizer.
//!
//! The API is loosely typed: vitals arrive as bare numbers or as
//! `{ value, levels }` objects, lab results as a list of names or as a map
//! keyed by test name. Every leaf is decoded by a small per-kind decoder
//! that falls back to a field default, so a single odd field never discards
//! the rest of the record. Only a top-level failure (unparseable body, not
//! an object) substitutes the built-in default record.

use dashboard_core::{
    fallback, validate_vitals, DashboardError, DiagnosticEntry, LabTest, LabValue, PatientRecord,
    VitalsSnapshot,
};
use serde_json::{Map, Value};
use tracing::warn;

/// Parse a response body, rejecting anything that is not JSON.
pub fn parse_payload(body: &str) -> Result<Value, DashboardError> {
    let value: Value =
        serde_json::from_str(body).map_err(|err| DashboardError::Parse(err.to_string()))?;
    if value.is_null() {
        return Err(DashboardError::MissingData);
    }
    Ok(value)
}

/// Normalize one patient from a JSON string. Never fails.
pub fn normalize_patient_str(body: &str) -> PatientRecord {
    match parse_payload(body) {
        Ok(value) => normalize_patient(&value),
        Err(err) => {
            warn!(error = %err, "patient payload unreadable, using default record");
            fallback::default_patient()
        }
    }
}

/// Normalize a patient list from a JSON string. Never fails.
pub fn normalize_patients_str(body: &str) -> Vec<PatientRecord> {
    match parse_payload(body) {
        Ok(value) => normalize_patients(&value),
        Err(err) => {
            warn!(error = %err, "patient list unreadable, using fallback list");
            fallback::fallback_patients()
        }
    }
}

/// Normalize a patient list.
///
/// An array maps element-wise (non-object elements are dropped), a single
/// object becomes a list of one, and any other shape yields the fallback
/// list.
pub fn normalize_patients(raw: &Value) -> Vec<PatientRecord> {
    match raw {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| match item.as_object() {
                Some(object) => Some(normalize_object(object)),
                None => {
                    warn!(index, "skipping patient list entry that is not an object");
                    None
                }
            })
            .collect(),
        Value::Object(object) => vec![normalize_object(object)],
        _ => {
            warn!(
                kind = json_kind(raw),
                "patient list has unexpected shape, using fallback list"
            );
            fallback::fallback_patients()
        }
    }
}

/// Normalize one raw patient record. Never fails.
pub fn normalize_patient(raw: &Value) -> PatientRecord {
    match raw.as_object() {
        Some(object) => normalize_object(object),
        None => {
            warn!(
                kind = json_kind(raw),
                "patient payload is not an object, using default record"
            );
            fallback::default_patient()
        }
    }
}

fn normalize_object(object: &Map<String, Value>) -> PatientRecord {
    let name = text_field(object, &["name"])
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| fallback::UNKNOWN_PATIENT_NAME.to_string());

    let diagnosis_history = field(object, &["diagnosis_history", "diagnosisHistory"])
        .and_then(Value::as_array)
        .map(|entries| entries.iter().map(decode_snapshot).collect::<Vec<_>>())
        .unwrap_or_default();

    for snapshot in &diagnosis_history {
        for issue in validate_vitals(snapshot) {
            warn!(
                patient = %name,
                month = %snapshot.month,
                year = snapshot.year,
                "{}",
                issue.message()
            );
        }
    }

    PatientRecord {
        gender: text_field(object, &["gender"]).unwrap_or_else(|| "Unknown".to_string()),
        age: field(object, &["age"]).and_then(decode_age).unwrap_or(0),
        profile_picture_url: text_field(
            object,
            &["profile_picture", "profilePicture", "profile_picture_url", "profilePictureUrl"],
        )
        .filter(|url| !url.trim().is_empty()),
        date_of_birth: text_field(object, &["date_of_birth", "dateOfBirth"]).unwrap_or_default(),
        phone_number: text_field(object, &["phone_number", "phoneNumber"])
            .unwrap_or_else(not_available),
        emergency_contact: text_field(object, &["emergency_contact", "emergencyContact"])
            .unwrap_or_else(not_available),
        insurance_type: text_field(object, &["insurance_type", "insuranceType"])
            .unwrap_or_else(not_available),
        diagnosis_history,
        diagnostic_list: field(object, &["diagnostic_list", "diagnosticList"])
            .and_then(Value::as_array)
            .map(|entries| entries.iter().map(decode_diagnostic).collect())
            .unwrap_or_default(),
        lab_results: decode_lab_results(field(object, &["lab_results", "labResults"])),
        name,
    }
}

/// Number, or object carrying a numeric `value`; anything else is `0`.
pub fn decode_vital(value: Option<&Value>) -> f64 {
    let Some(value) = value else {
        return 0.0;
    };
    value
        .as_f64()
        .or_else(|| value.get("value").and_then(Value::as_f64))
        .unwrap_or(0.0)
}

/// One `diagnosis_history` element. Non-object elements become a zeroed
/// snapshot so the history keeps its length.
pub fn decode_snapshot(raw: &Value) -> VitalsSnapshot {
    let Some(object) = raw.as_object() else {
        return VitalsSnapshot::default();
    };

    let pressure = field(object, &["blood_pressure", "bloodPressure"]).and_then(Value::as_object);
    let pressure_part = |key: &str| {
        pressure
            .and_then(|bp| bp.get(key))
            .or_else(|| object.get(key))
    };

    VitalsSnapshot {
        month: text_field(object, &["month"]).unwrap_or_default(),
        year: field(object, &["year"])
            .and_then(Value::as_i64)
            .and_then(|year| i32::try_from(year).ok())
            .unwrap_or(0),
        systolic: decode_vital(pressure_part("systolic")),
        diastolic: decode_vital(pressure_part("diastolic")),
        heart_rate: decode_vital(field(object, &["heart_rate", "heartRate"])),
        respiratory_rate: decode_vital(field(object, &["respiratory_rate", "respiratoryRate"])),
        temperature: decode_vital(field(object, &["temperature"])),
    }
}

/// Prefers `problem`, then `name`; missing status becomes "Unknown".
pub fn decode_diagnostic(raw: &Value) -> DiagnosticEntry {
    let object = raw.as_object();
    let text = |keys: &[&str]| object.and_then(|object| text_field(object, keys));

    DiagnosticEntry {
        problem: text(&["problem"]).or_else(|| text(&["name"])).unwrap_or_default(),
        description: text(&["description"]).unwrap_or_default(),
        status: text(&["status"]).unwrap_or_else(|| fallback::UNKNOWN_STATUS.to_string()),
    }
}

/// Lab results as a list of names or a name-keyed map. Missing or
/// unrecognized shapes yield the default lab-test list.
pub fn decode_lab_results(raw: Option<&Value>) -> Vec<LabTest> {
    match raw {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item.as_str() {
                Some(name) => LabTest::named(title_case(name)),
                None => LabTest::named(fallback::UNNAMED_LAB_TEST),
            })
            .collect(),
        Some(Value::Object(entries)) => entries
            .iter()
            .map(|(key, value)| LabTest {
                name: title_case(key),
                result_value: decode_lab_value(value),
            })
            .collect(),
        Some(other) if !other.is_null() => {
            warn!(
                kind = json_kind(other),
                "lab results have unexpected shape, using default list"
            );
            fallback::default_lab_tests()
        }
        _ => fallback::default_lab_tests(),
    }
}

fn decode_lab_value(value: &Value) -> Option<LabValue> {
    let scalar = |value: &Value| match value {
        Value::String(text) => Some(LabValue::Text(text.clone())),
        Value::Number(number) => number.as_f64().map(LabValue::Number),
        _ => None,
    };
    value.get("value").and_then(scalar).or_else(|| scalar(value))
}

/// `blood_tests` → `Blood Tests`: underscores become spaces and the first
/// letter of every word is upper-cased. Other letters are left alone.
pub fn title_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut at_word_start = true;
    for ch in input.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        let is_word = ch.is_alphanumeric();
        if is_word && at_word_start {
            output.extend(ch.to_uppercase());
        } else {
            output.push(ch);
        }
        at_word_start = !is_word;
    }
    output
}

fn decode_age(value: &Value) -> Option<u32> {
    if let Some(age) = value.as_u64() {
        return u32::try_from(age).ok();
    }
    let age = value.as_f64()?;
    if age >= 0.0 && age.fract() == 0.0 && age <= f64::from(u32::MAX) {
        Some(age as u32)
    } else {
        None
    }
}

fn field<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find(|value| !value.is_null())
}

fn text_field(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find_map(Value::as_str)
        .map(str::to_string)
}

fn not_available() -> String {
    fallback::NOT_AVAILABLE.to_string()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
