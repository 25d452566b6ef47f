//! Framework-neutral WASM <-> JavaScript bridge for the dashboard.

use dashboard_core::{
    classify, classify_blood_pressure_chart, find_patient_by_name, summarize_trend,
    DashboardConfig, PatientRecord, PatientView, VitalKind, VitalsSnapshot,
};
use dashboard_payload::normalize_patients;
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

#[derive(Deserialize)]
struct JsDashboardConfig {
    #[serde(default)]
    default_patient_name: Option<String>,
}

impl From<JsDashboardConfig> for DashboardConfig {
    fn from(cfg: JsDashboardConfig) -> Self {
        let mut base = DashboardConfig::default();
        if let Some(name) = cfg.default_patient_name {
            base.default_patient_name = name;
        }
        base
    }
}

fn install_panic_hook() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

fn read_json(value: JsValue) -> Result<serde_json::Value, JsValue> {
    from_value::<serde_json::Value>(value)
        .map_err(|err| JsValue::from_str(&format!("could not read JSON input: {err}")))
}

fn write<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|err| JsValue::from_str(&format!("could not serialize result: {err}")))
}

fn vital_kind(kind: &str) -> Result<VitalKind, JsValue> {
    VitalKind::parse(kind).ok_or_else(|| JsValue::from_str(&format!("unknown vital kind: {kind}")))
}

/// Raw API record to canonical record.
#[wasm_bindgen(js_name = normalizePatient)]
pub fn normalize_patient(raw: JsValue) -> Result<JsValue, JsValue> {
    install_panic_hook();
    let record = dashboard_payload::normalize_patient(&read_json(raw)?);
    write(&record)
}

/// Raw API list to canonical records.
#[wasm_bindgen(js_name = normalizePatients)]
pub fn normalize_patient_list(raw: JsValue) -> Result<JsValue, JsValue> {
    install_panic_hook();
    write(&normalize_patients(&read_json(raw)?))
}

/// Looks up `name` in an already-normalized list.
#[wasm_bindgen(js_name = findPatientByName)]
pub fn find_patient(patients: JsValue, name: &str) -> Result<JsValue, JsValue> {
    install_panic_hook();
    let patients: Vec<PatientRecord> = from_value(patients)
        .map_err(|err| JsValue::from_str(&format!("could not read patient list: {err}")))?;
    write(&find_patient_by_name(&patients, name))
}

#[wasm_bindgen(js_name = classifyVital)]
pub fn classify_vital(value: f64, kind: &str) -> Result<JsValue, JsValue> {
    install_panic_hook();
    write(&classify(value, vital_kind(kind)?))
}

#[wasm_bindgen(js_name = classifyBloodPressure)]
pub fn classify_blood_pressure(value: f64, kind: &str) -> Result<JsValue, JsValue> {
    install_panic_hook();
    write(&classify_blood_pressure_chart(value, vital_kind(kind)?))
}

#[wasm_bindgen(js_name = summarizeTrend)]
pub fn summarize_history(history: JsValue) -> Result<JsValue, JsValue> {
    install_panic_hook();
    let history: Vec<VitalsSnapshot> = from_value(history)
        .map_err(|err| JsValue::from_str(&format!("could not read history: {err}")))?;
    write(&summarize_trend(&history))
}

/// Raw patient list plus a selection to the full view model.
#[wasm_bindgen(js_name = buildDashboard)]
pub fn build_dashboard(
    raw_patients: JsValue,
    selected_name: Option<String>,
    config: Option<JsValue>,
) -> Result<JsValue, JsValue> {
    install_panic_hook();

    let cfg = match config {
        Some(js_cfg) => {
            let cfg: JsDashboardConfig = from_value(js_cfg)
                .map_err(|err| JsValue::from_str(&format!("could not read config: {err}")))?;
            DashboardConfig::from(cfg)
        }
        None => DashboardConfig::default(),
    };

    let view = dashboard_view(&read_json(raw_patients)?, selected_name.as_deref(), &cfg);
    write(&view)
}

/// Pure part of [`build_dashboard`].
pub fn dashboard_view(
    raw_patients: &serde_json::Value,
    selected_name: Option<&str>,
    config: &DashboardConfig,
) -> PatientView {
    let patients = normalize_patients(raw_patients);
    let name = selected_name.unwrap_or(&config.default_patient_name);
    PatientView::from_record(&find_patient_by_name(&patients, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn js_config_overrides_only_given_fields() {
        let cfg = DashboardConfig::from(JsDashboardConfig {
            default_patient_name: Some("Ryan Johnson".to_string()),
        });
        assert_eq!(cfg.default_patient_name, "Ryan Johnson");
        assert_eq!(cfg.max_retries, DashboardConfig::default().max_retries);

        let untouched = DashboardConfig::from(JsDashboardConfig {
            default_patient_name: None,
        });
        assert_eq!(untouched, DashboardConfig::default());
    }

    #[test]
    fn view_uses_configured_default_name() {
        let raw = json!([{ "name": "A" }, { "name": "B" }]);
        let cfg = DashboardConfig {
            default_patient_name: "b".to_string(),
            ..DashboardConfig::default()
        };
        assert_eq!(dashboard_view(&raw, None, &cfg).profile.name, "B");
        assert_eq!(dashboard_view(&raw, Some("A"), &cfg).profile.name, "A");
    }

    #[test]
    fn view_of_garbage_is_default_patient() {
        let view = dashboard_view(&json!("garbage"), None, &DashboardConfig::default());
        assert_eq!(view.profile.name, "Jessica Taylor");
    }
}
