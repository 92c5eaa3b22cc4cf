//! End-to-end evaluation scenarios for the built-in species profiles.

use aquaguard_core::{
    alert::{Alert, Direction},
    evaluator::{alert_messages, evaluate, evaluate_profile},
};
use aquaguard_schemas::{
    parameter::Parameter,
    reading::Reading,
    species::{Salmon, Species, ThresholdProfile, Tilapia},
};

fn reading(temperature: f64, ph: f64, dissolved_oxygen: f64) -> Reading {
    Reading::new(temperature, ph, dissolved_oxygen).expect("test reading should be valid")
}

fn assert_alert(alert: &Alert, parameter: Parameter, direction: Direction) {
    assert_eq!(alert.parameter, parameter);
    assert_eq!(alert.direction, direction);
    let message = alert.to_string();
    assert!(message.contains(parameter.display_name()), "{message}");
    assert!(message.contains(direction.phrase()), "{message}");
}

// ---------------------------------------------------------------------------
// Concrete scenarios
// ---------------------------------------------------------------------------

#[test]
fn salmon_reading_in_range_has_no_alerts() {
    let alerts = evaluate(&reading(15.0, 7.5, 8.0), &Salmon::THRESHOLDS);
    assert!(alerts.is_empty());
}

#[test]
fn salmon_warm_water_reports_temperature_high() {
    let messages = alert_messages(&reading(22.0, 7.5, 8.0), &Salmon::THRESHOLDS);
    assert_eq!(messages, vec!["Temperature too high: 22.0°C (max: 18.0°C)"]);
}

#[test]
fn salmon_every_parameter_violated() {
    let alerts = evaluate(&reading(22.0, 9.5, 4.0), &Salmon::THRESHOLDS);
    assert_eq!(alerts.len(), 3);
    assert_alert(&alerts[0], Parameter::Temperature, Direction::TooHigh);
    assert_alert(&alerts[1], Parameter::Ph, Direction::TooHigh);
    assert_alert(&alerts[2], Parameter::DissolvedOxygen, Direction::TooLow);

    let messages: Vec<String> = alerts.iter().map(Alert::message).collect();
    assert!(messages[1].contains("9.5") && messages[1].contains("8.5"));
    assert!(messages[2].contains("4.0mg/L") && messages[2].contains("7.0mg/L"));
}

#[test]
fn same_reading_differs_between_species() {
    let r = reading(28.0, 8.0, 6.0);

    let salmon = evaluate_profile(&r, &Salmon);
    assert_eq!(salmon.len(), 2);
    assert_alert(&salmon[0], Parameter::Temperature, Direction::TooHigh);
    assert_alert(&salmon[1], Parameter::DissolvedOxygen, Direction::TooLow);

    assert!(evaluate_profile(&r, &Tilapia).is_empty());
}

#[test]
fn salmon_values_at_minimum_are_safe() {
    assert!(evaluate(&reading(12.0, 6.5, 7.0), &Salmon::THRESHOLDS).is_empty());
}

#[test]
fn salmon_values_just_below_minimum_all_alert() {
    let alerts = evaluate(&reading(11.9, 6.4, 6.9), &Salmon::THRESHOLDS);
    assert_eq!(alerts.len(), 3);
    for alert in &alerts {
        assert_eq!(alert.direction, Direction::TooLow);
    }
    assert_eq!(alerts[0].actual, 11.9);
    assert_eq!(alerts[0].bound, 12.0);
    assert!(alerts[0].to_string().contains("11.9°C"));
}

// ---------------------------------------------------------------------------
// Properties over both profiles
// ---------------------------------------------------------------------------

#[test]
fn bounds_are_inclusive_and_one_unit_past_alerts() {
    for species in Species::ALL {
        let table = species.thresholds();
        let nominal = |p: Parameter| {
            let b = table.bound(p);
            match (b.minimum, b.maximum) {
                (Some(min), Some(max)) => (min + max) / 2.0,
                (Some(min), None) => min + 1.0,
                (None, Some(max)) => max - 1.0,
                (None, None) => 0.0,
            }
        };

        for (parameter, bound) in table.iter() {
            let with = |value: f64| {
                let mut values = Parameter::ALL.map(nominal);
                values[Parameter::ALL.iter().position(|p| *p == parameter).unwrap()] = value;
                reading(values[0], values[1], values[2])
            };

            if let Some(min) = bound.minimum {
                assert!(evaluate(&with(min), &table).is_empty());
                let alerts = evaluate(&with(min - 1.0), &table);
                assert_eq!(alerts.len(), 1, "{species} {parameter} below min");
                assert_alert(&alerts[0], parameter, Direction::TooLow);
                assert_eq!(alerts[0].bound, min);
            }
            if let Some(max) = bound.maximum {
                assert!(evaluate(&with(max), &table).is_empty());
                let alerts = evaluate(&with(max + 1.0), &table);
                assert_eq!(alerts.len(), 1, "{species} {parameter} above max");
                assert_alert(&alerts[0], parameter, Direction::TooHigh);
                assert_eq!(alerts[0].bound, max);
            }
        }
    }
}

#[test]
fn alert_count_tracks_violated_bounds() {
    let table = Salmon::THRESHOLDS;
    let cases = [
        (reading(15.0, 7.5, 8.0), 0),
        (reading(19.0, 7.5, 8.0), 1),
        (reading(19.0, 6.0, 8.0), 2),
        (reading(19.0, 6.0, 2.0), 3),
    ];
    for (r, expected) in cases {
        assert_eq!(evaluate(&r, &table).len(), expected);
    }
}

#[test]
fn oxygen_has_no_upper_limit() {
    for species in Species::ALL {
        let table = species.thresholds();
        let r = reading(
            table.temperature.minimum.unwrap(),
            table.ph.minimum.unwrap(),
            50.0,
        );
        assert!(evaluate(&r, &table).is_empty(), "{species}");
    }
}

#[test]
fn evaluation_is_repeatable() {
    let r = reading(22.0, 9.5, 4.0);
    let first = evaluate(&r, &Salmon::THRESHOLDS);
    for _ in 0..10 {
        assert_eq!(evaluate(&r, &Salmon::THRESHOLDS), first);
    }
}
