//! Shared formatting utilities for UI components.

/// Format axis label with smart precision.
pub fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.2}", val)
    }
}

/// Evenly spaced labels from `min` to `max`.
pub fn axis_labels(min: f64, max: f64, count: usize) -> Vec<String> {
    match count {
        0 => Vec::new(),
        1 => vec![format_axis_label((min + max) / 2.0)],
        n => (0..n)
            .map(|i| format_axis_label(min + (max - min) * i as f64 / (n - 1) as f64))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_follows_magnitude() {
        assert_eq!(format_axis_label(0.0), "0");
        assert_eq!(format_axis_label(0.123), "0.12");
        assert_eq!(format_axis_label(3.14159), "3.1");
        assert_eq!(format_axis_label(250.4), "250");
        assert_eq!(format_axis_label(123456.0), "1.2e5");
        assert_eq!(format_axis_label(f64::NAN), "?");
    }

    #[test]
    fn labels_span_the_range() {
        assert_eq!(axis_labels(0.0, 10.0, 3), vec!["0", "5.0", "10.0"]);
        assert_eq!(axis_labels(0.0, 10.0, 1), vec!["5.0"]);
        assert!(axis_labels(0.0, 1.0, 0).is_empty());
    }
}
