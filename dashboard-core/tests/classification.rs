use dashboard_core::{
    classify, classify_blood_pressure_chart, ChartStatus, MetricStatus, VitalKind,
};

#[test]
fn temperature_boundaries_are_normal() {
    assert_eq!(classify(99.0, VitalKind::Temperature), MetricStatus::Normal);
    assert_eq!(classify(99.1, VitalKind::Temperature), MetricStatus::Higher);
    assert_eq!(classify(97.0, VitalKind::Temperature), MetricStatus::Normal);
    assert_eq!(classify(96.9, VitalKind::Temperature), MetricStatus::Lower);
}

#[test]
fn respiratory_and_heart_rate_bands() {
    assert_eq!(classify(12.0, VitalKind::RespiratoryRate), MetricStatus::Normal);
    assert_eq!(classify(11.0, VitalKind::RespiratoryRate), MetricStatus::Lower);
    assert_eq!(classify(20.0, VitalKind::RespiratoryRate), MetricStatus::Normal);
    assert_eq!(classify(21.0, VitalKind::RespiratoryRate), MetricStatus::Higher);

    assert_eq!(classify(60.0, VitalKind::HeartRate), MetricStatus::Normal);
    assert_eq!(classify(59.0, VitalKind::HeartRate), MetricStatus::Lower);
    assert_eq!(classify(100.0, VitalKind::HeartRate), MetricStatus::Normal);
    assert_eq!(classify(101.0, VitalKind::HeartRate), MetricStatus::Higher);
}

#[test]
fn blood_pressure_has_no_lower_threshold() {
    assert_eq!(classify(150.0, VitalKind::Systolic), MetricStatus::Higher);
    assert_eq!(classify(140.0, VitalKind::Systolic), MetricStatus::Higher);
    assert_eq!(classify(130.0, VitalKind::Systolic), MetricStatus::Normal);
    assert_eq!(classify(40.0, VitalKind::Systolic), MetricStatus::Normal);

    assert_eq!(classify(90.0, VitalKind::Diastolic), MetricStatus::Higher);
    assert_eq!(classify(85.0, VitalKind::Diastolic), MetricStatus::Normal);
    assert_eq!(classify(20.0, VitalKind::Diastolic), MetricStatus::Normal);
}

#[test]
fn chart_scheme_reports_elevated_band() {
    assert_eq!(classify_blood_pressure_chart(140.0, VitalKind::Systolic), ChartStatus::Higher);
    assert_eq!(classify_blood_pressure_chart(139.0, VitalKind::Systolic), ChartStatus::Elevated);
    assert_eq!(classify_blood_pressure_chart(120.0, VitalKind::Systolic), ChartStatus::Elevated);
    assert_eq!(classify_blood_pressure_chart(119.0, VitalKind::Systolic), ChartStatus::Normal);

    assert_eq!(classify_blood_pressure_chart(90.0, VitalKind::Diastolic), ChartStatus::Higher);
    assert_eq!(classify_blood_pressure_chart(80.0, VitalKind::Diastolic), ChartStatus::Elevated);
    assert_eq!(classify_blood_pressure_chart(79.0, VitalKind::Diastolic), ChartStatus::Normal);

    assert_eq!(classify_blood_pressure_chart(180.0, VitalKind::HeartRate), ChartStatus::Normal);
}

#[test]
fn schemes_disagree_inside_elevated_band() {
    assert_eq!(classify(125.0, VitalKind::Systolic), MetricStatus::Normal);
    assert_eq!(classify_blood_pressure_chart(125.0, VitalKind::Systolic), ChartStatus::Elevated);
}

#[test]
fn status_labels() {
    assert_eq!(MetricStatus::Higher.label(), "Higher than Average");
    assert_eq!(MetricStatus::Lower.label(), "Lower than Average");
    assert_eq!(MetricStatus::Normal.label(), "Normal");
    assert_eq!(ChartStatus::Elevated.label(), "Elevated");
}

#[test]
fn vital_kind_parses_caller_names() {
    assert_eq!(VitalKind::parse("respiratory_rate"), Some(VitalKind::RespiratoryRate));
    assert_eq!(VitalKind::parse("heartRate"), Some(VitalKind::HeartRate));
    assert_eq!(VitalKind::parse("Temperature"), Some(VitalKind::Temperature));
    assert_eq!(VitalKind::parse("systolic"), Some(VitalKind::Systolic));
    assert_eq!(VitalKind::parse("oxygen"), None);
}
