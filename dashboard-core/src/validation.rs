//! Physiological plausibility checks for normalized vitals.

use serde::{Deserialize, Serialize};

use crate::{VitalKind, VitalsSnapshot};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VitalRangeIssue {
    pub kind: VitalKind,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl VitalRangeIssue {
    pub fn message(&self) -> String {
        format!(
            "{} must be between {} and {} {}, received {}",
            self.kind.label(),
            self.min,
            self.max,
            self.kind.unit(),
            self.value
        )
    }
}

fn plausible_range(kind: VitalKind) -> (f64, f64) {
    match kind {
        VitalKind::Systolic => (30.0, 300.0),
        VitalKind::Diastolic => (20.0, 200.0),
        VitalKind::Temperature => (80.0, 110.0),
        VitalKind::HeartRate => (30.0, 200.0),
        VitalKind::RespiratoryRate => (8.0, 60.0),
    }
}

/// Values outside physiological ranges. A `0` value is treated as missing.
pub fn validate_vitals(snapshot: &VitalsSnapshot) -> Vec<VitalRangeIssue> {
    VitalKind::ALL
        .into_iter()
        .filter_map(|kind| {
            let value = snapshot.value(kind);
            let (min, max) = plausible_range(kind);
            if value == 0.0 || (min..=max).contains(&value) {
                None
            } else {
                Some(VitalRangeIssue {
                    kind,
                    value,
                    min,
                    max,
                })
            }
        })
        .collect()
}
