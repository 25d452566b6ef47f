//! Averages and latest-vs-average comparison over a vitals history.

use crate::{BloodPressureReading, SeriesTrend, TrendSummary, VitalKind, VitalsSnapshot};

/// Summarize one vital series. The last element is the latest reading;
/// no re-sorting by date happens here.
pub fn summarize_series(history: &[VitalsSnapshot], kind: VitalKind) -> SeriesTrend {
    let Some(last) = history.last() else {
        return SeriesTrend {
            average: 0.0,
            latest: 0.0,
            is_above_average: false,
        };
    };

    let average = mean(history.iter().map(|snapshot| snapshot.value(kind)));
    let latest = last.value(kind);

    SeriesTrend {
        average,
        latest,
        is_above_average: latest > average,
    }
}

/// Blood-pressure trend used by the chart legend.
pub fn summarize_trend(history: &[VitalsSnapshot]) -> TrendSummary {
    let systolic = summarize_series(history, VitalKind::Systolic);
    let diastolic = summarize_series(history, VitalKind::Diastolic);

    TrendSummary {
        systolic_avg: systolic.average,
        diastolic_avg: diastolic.average,
        latest: BloodPressureReading {
            systolic: systolic.latest,
            diastolic: diastolic.latest,
        },
        is_systolic_above_avg: systolic.is_above_average,
        is_diastolic_above_avg: diastolic.is_above_average,
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
