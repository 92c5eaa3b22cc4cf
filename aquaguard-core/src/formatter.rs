//! Renders alerts as descriptive one-line messages:
//!
//! `Temperature too high: 22.0°C (max: 18.0°C)`

use crate::alert::Alert;

/// Formats a value in its natural representation: whole numbers keep one
/// decimal (`22.0`), everything else prints with the shortest exact digits.
pub fn format_value(value: f64) -> String {
    format!("{:?}", value)
}

pub fn format_alert(alert: &Alert) -> String {
    let unit = alert.parameter.unit();
    format!(
        "{} {}: {}{} ({}: {}{})",
        alert.parameter.display_name(),
        alert.direction.phrase(),
        format_value(alert.actual),
        unit,
        alert.direction.bound_label(),
        format_value(alert.bound),
        unit,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquaguard_schemas::parameter::Parameter;

    #[test]
    fn formats_high_temperature() {
        let alert = Alert::too_high(Parameter::Temperature, 22.0, 18.0);
        assert_eq!(
            format_alert(&alert),
            "Temperature too high: 22.0°C (max: 18.0°C)"
        );
    }

    #[test]
    fn formats_low_oxygen_with_unit() {
        let message = format_alert(&Alert::too_low(Parameter::DissolvedOxygen, 4.0, 7.0));
        assert!(message.starts_with("Dissolved oxygen too low"));
        assert!(message.contains("4.0mg/L"));
        assert!(message.contains("(min: 7.0mg/L)"));
    }

    #[test]
    fn ph_has_no_unit() {
        let message = format_alert(&Alert::too_high(Parameter::Ph, 9.5, 8.5));
        assert_eq!(message, "pH too high: 9.5 (max: 8.5)");
    }

    #[test]
    fn keeps_natural_precision() {
        assert_eq!(format_value(11.9), "11.9");
        assert_eq!(format_value(6.25), "6.25");
        assert_eq!(format_value(7.0), "7.0");
        assert_eq!(format_value(-3.0), "-3.0");
    }

    #[test]
    fn never_emits_the_misencoded_degree_sign() {
        let message = Alert::too_low(Parameter::Temperature, 11.9, 12.0).to_string();
        assert!(message.contains("°C"));
        assert!(!message.contains("Â"));
        assert!(message.len() > 20);
    }
}
