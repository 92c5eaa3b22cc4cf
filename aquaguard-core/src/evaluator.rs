use crate::alert::Alert;
use aquaguard_schemas::{
    parameter::Parameter,
    reading::{Reading, SensorSample},
    species::ThresholdProfile,
    threshold::{Bound, ThresholdTable},
};
use serde::Serialize;
use tracing::debug;

/// Compares a reading against a threshold table and returns one alert per
/// violated bound, in evaluation order (temperature, pH, dissolved oxygen).
///
/// Bounds are inclusive, so a value equal to its minimum or maximum does not
/// alert. The result is empty when every parameter is within range.
pub fn evaluate(reading: &Reading, thresholds: &ThresholdTable) -> Vec<Alert> {
    let alerts: Vec<Alert> = thresholds
        .iter()
        .filter_map(|(parameter, bound)| check_bound(parameter, reading.value(parameter), bound))
        .collect();

    debug!(
        temperature = reading.temperature(),
        ph = reading.ph(),
        dissolved_oxygen = reading.dissolved_oxygen(),
        alerts = alerts.len(),
        "evaluated reading"
    );
    alerts
}

/// Evaluates a reading against the table of a species profile.
pub fn evaluate_profile<P: ThresholdProfile + ?Sized>(
    reading: &Reading,
    profile: &P,
) -> Vec<Alert> {
    evaluate(reading, &profile.thresholds())
}

/// Same as `evaluate`, rendered to messages.
pub fn alert_messages(reading: &Reading, thresholds: &ThresholdTable) -> Vec<String> {
    evaluate(reading, thresholds)
        .iter()
        .map(Alert::message)
        .collect()
}

/// A value can sit below its minimum or above its maximum, never both.
fn check_bound(parameter: Parameter, value: f64, bound: &Bound) -> Option<Alert> {
    if let Some(minimum) = bound.minimum {
        if value < minimum {
            return Some(Alert::too_low(parameter, value, minimum));
        }
    }
    if let Some(maximum) = bound.maximum {
        if value > maximum {
            return Some(Alert::too_high(parameter, value, maximum));
        }
    }
    None
}

/// Evaluation result for one sample of a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleReport {
    pub sample_id: String,
    pub reading: Reading,
    pub alerts: Vec<Alert>,
    pub messages: Vec<String>,
}

impl SampleReport {
    pub fn is_clear(&self) -> bool {
        self.alerts.is_empty()
    }
}

/// Evaluates every sample, keeping input order. Unlabeled samples are named
/// by their 1-based position.
pub fn evaluate_samples(
    samples: &[SensorSample],
    thresholds: &ThresholdTable,
) -> Vec<SampleReport> {
    samples
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let alerts = evaluate(&sample.reading, thresholds);
            let messages = alerts.iter().map(Alert::message).collect();
            SampleReport {
                sample_id: sample.label(i + 1),
                reading: sample.reading,
                alerts,
                messages,
            }
        })
        .collect()
}
