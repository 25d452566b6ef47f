use std::fs;

use dashboard_core::PatientRecord;
use dashboard_payload::normalize_patients_str;

fn fixture_path(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn api_payload_matches_golden() {
    let payload = fs::read_to_string(fixture_path("patients_payload.json"))
        .expect("cannot read sample payload");

    let actual = normalize_patients_str(&payload);

    let expected = fs::read_to_string(fixture_path("patients_canonical.json"))
        .expect("cannot read golden records");
    let expected: Vec<PatientRecord> =
        serde_json::from_str(&expected).expect("golden records are not valid");

    assert_eq!(actual, expected);
}

#[test]
fn golden_records_survive_serialization() {
    let payload = fs::read_to_string(fixture_path("patients_payload.json"))
        .expect("cannot read sample payload");
    let records = normalize_patients_str(&payload);

    let serialized = serde_json::to_string(&records).expect("cannot serialize records");
    let reparsed: Vec<PatientRecord> =
        serde_json::from_str(&serialized).expect("cannot deserialize records");

    assert_eq!(records, reparsed);
}
