//! Deterministic test data for a species profile: a nominal reading, readings
//! sitting exactly on the bounds, and readings one unit past each bound.

use aquaguard_schemas::{
    parameter::Parameter,
    reading::{Reading, SensorSample},
    species::ThresholdProfile,
    threshold::{Bound, ThresholdTable},
};
use std::collections::HashMap;
use tracing::warn;

/// Distance past a bound used for violating samples.
const STEP: f64 = 1.0;

fn nominal_value(bound: &Bound) -> f64 {
    match (bound.minimum, bound.maximum) {
        (Some(min), Some(max)) => (min + max) / 2.0,
        (Some(min), None) => min + STEP,
        (None, Some(max)) => max - STEP,
        (None, None) => 0.0,
    }
}

fn clamp_to_sanity(parameter: Parameter, value: f64) -> f64 {
    let (min, max) = parameter.sanity_range();
    let value = min.map_or(value, |min| value.max(min));
    max.map_or(value, |max| value.min(max))
}

/// Returns `None`, with a warning, when the profile's bounds push a value
/// outside the sanity domain of its parameter.
fn build(label: String, values: &HashMap<Parameter, f64>) -> Option<SensorSample> {
    match Reading::new(
        values[&Parameter::Temperature],
        values[&Parameter::Ph],
        values[&Parameter::DissolvedOxygen],
    ) {
        Ok(reading) => Some(SensorSample::new(Some(label), reading)),
        Err(e) => {
            warn!(sample = %label, error = %e, "skipping generated sample");
            None
        }
    }
}

fn nominal(table: &ThresholdTable) -> HashMap<Parameter, f64> {
    table.iter().map(|(p, b)| (p, nominal_value(b))).collect()
}

pub fn generate_samples<P: ThresholdProfile + ?Sized>(profile: &P) -> Vec<SensorSample> {
    let table = profile.thresholds();
    let base = nominal(&table);
    let mut samples = Vec::new();

    samples.extend(build("nominal".to_string(), &base));

    let mut at_minimum = base.clone();
    let mut at_maximum = base.clone();
    for (parameter, bound) in table.iter() {
        if let Some(min) = bound.minimum {
            at_minimum.insert(parameter, min);
        }
        if let Some(max) = bound.maximum {
            at_maximum.insert(parameter, max);
        }
    }
    samples.extend(build("at-minimum".to_string(), &at_minimum));
    samples.extend(build("at-maximum".to_string(), &at_maximum));

    let mut all_low = base.clone();
    for (parameter, bound) in table.iter() {
        let edges = [("low", bound.minimum, -STEP), ("high", bound.maximum, STEP)];
        for (side, edge, offset) in edges {
            let Some(edge) = edge else { continue };
            let value = clamp_to_sanity(parameter, edge + offset);
            if bound.contains(value) {
                continue;
            }
            if side == "low" {
                all_low.insert(parameter, value);
            }
            let mut values = base.clone();
            values.insert(parameter, value);
            samples.extend(build(format!("{}-{}", parameter.key(), side), &values));
        }
    }
    samples.extend(build("all-low".to_string(), &all_low));

    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate;
    use aquaguard_schemas::species::{Salmon, Species, Tilapia};

    fn find<'a>(samples: &'a [SensorSample], label: &str) -> &'a SensorSample {
        samples
            .iter()
            .find(|s| s.sample_id.as_deref() == Some(label))
            .unwrap_or_else(|| panic!("missing sample {label}"))
    }

    #[test]
    fn salmon_nominal_is_midpoint() {
        let samples = generate_samples(&Salmon);
        let nominal = find(&samples, "nominal").reading;
        assert_eq!(nominal, Reading::new(15.0, 7.5, 8.0).unwrap());
    }

    #[test]
    fn labels_are_stable() {
        let labels: Vec<String> = generate_samples(&Salmon)
            .into_iter()
            .filter_map(|s| s.sample_id)
            .collect();
        assert_eq!(
            labels,
            vec![
                "nominal",
                "at-minimum",
                "at-maximum",
                "temperature-low",
                "temperature-high",
                "ph-low",
                "ph-high",
                "dissolved_oxygen-low",
                "all-low",
            ]
        );
    }

    #[test]
    fn generated_samples_alert_as_labelled() {
        for species in Species::ALL {
            let table = species.thresholds();
            let samples = generate_samples(&species);
            for sample in &samples {
                let label = sample.sample_id.as_deref().unwrap();
                let alerts = evaluate(&sample.reading, &table);
                match label {
                    "nominal" | "at-minimum" | "at-maximum" => {
                        assert!(alerts.is_empty(), "{label}")
                    }
                    "all-low" => assert_eq!(alerts.len(), 3, "{label}"),
                    _ => {
                        assert_eq!(alerts.len(), 1, "{label}");
                        assert!(label.starts_with(alerts[0].parameter.key()));
                    }
                }
            }
        }
    }

    #[test]
    fn bounds_outside_sanity_domain_skip_only_that_sample() {
        struct HotSpring;
        impl ThresholdProfile for HotSpring {
            fn name(&self) -> &'static str {
                "Hot spring"
            }
            fn thresholds(&self) -> ThresholdTable {
                ThresholdTable {
                    temperature: Bound::range(40.0, 70.0),
                    ph: Bound::range(6.5, 8.5),
                    dissolved_oxygen: Bound::at_least(4.0),
                }
            }
        }

        let samples = generate_samples(&HotSpring);
        let labels: Vec<&str> = samples.iter().filter_map(|s| s.sample_id.as_deref()).collect();
        assert!(!labels.contains(&"at-maximum"));
        assert!(!labels.contains(&"temperature-high"));
        assert!(labels.contains(&"nominal"));
        assert!(labels.contains(&"at-minimum"));
        assert!(labels.contains(&"temperature-low"));
    }

    #[test]
    fn tilapia_oxygen_low_sample_is_one_below_minimum() {
        let samples = generate_samples(&Tilapia);
        let sample = find(&samples, "dissolved_oxygen-low");
        assert_eq!(sample.reading.dissolved_oxygen(), 4.0);
    }
}
