//! Threshold classification of vital signs.
//!
//! Two schemes are kept apart on purpose: [`classify`] drives the metric
//! cards, [`classify_blood_pressure_chart`] drives the blood-pressure legend.
//! They disagree for systolic 120–139 and diastolic 80–89.

use crate::{ChartStatus, MetricStatus, VitalKind};

/// Normal band for a vital kind. `None` means no bound on that side.
struct Band {
    lower: Option<f64>,
    upper: f64,
    /// Blood-pressure bounds count the boundary value as high.
    upper_inclusive: bool,
}

fn band(kind: VitalKind) -> Band {
    match kind {
        VitalKind::RespiratoryRate => Band {
            lower: Some(12.0),
            upper: 20.0,
            upper_inclusive: false,
        },
        VitalKind::Temperature => Band {
            lower: Some(97.0),
            upper: 99.0,
            upper_inclusive: false,
        },
        VitalKind::HeartRate => Band {
            lower: Some(60.0),
            upper: 100.0,
            upper_inclusive: false,
        },
        VitalKind::Systolic => Band {
            lower: None,
            upper: 140.0,
            upper_inclusive: true,
        },
        VitalKind::Diastolic => Band {
            lower: None,
            upper: 90.0,
            upper_inclusive: true,
        },
    }
}

/// Classify a canonical value against the fixed clinical thresholds.
///
/// Boundary values are `Normal` for respiratory rate, temperature and heart
/// rate. Systolic `>= 140` and diastolic `>= 90` are `Higher`; neither has a
/// lower threshold.
pub fn classify(value: f64, kind: VitalKind) -> MetricStatus {
    let band = band(kind);
    let above = if band.upper_inclusive {
        value >= band.upper
    } else {
        value > band.upper
    };

    if above {
        return MetricStatus::Higher;
    }

    match band.lower {
        Some(lower) if value < lower => MetricStatus::Lower,
        _ => MetricStatus::Normal,
    }
}

/// Legend classification for the blood-pressure chart.
///
/// Systolic: `>= 140` Higher, `>= 120` Elevated. Diastolic: `>= 90` Higher,
/// `>= 80` Elevated. Other kinds have no chart scheme and are `Normal`.
pub fn classify_blood_pressure_chart(value: f64, kind: VitalKind) -> ChartStatus {
    let (high, elevated) = match kind {
        VitalKind::Systolic => (140.0, 120.0),
        VitalKind::Diastolic => (90.0, 80.0),
        _ => return ChartStatus::Normal,
    };

    match value {
        v if v >= high => ChartStatus::Higher,
        v if v >= elevated => ChartStatus::Elevated,
        _ => ChartStatus::Normal,
    }
}
