//! Percentage formatting for hikes and confidence
//!
//! The service is not consistent about hike units, so display goes through
//! a three-way heuristic:
//!
//! | Raw value   | Treatment                                   |
//! |-------------|---------------------------------------------|
//! | `[1, 200]`  | already a percentage                        |
//! | `> 200`     | divided by 10 until it is `<= 200`          |
//! | `< 1`       | a fractional rate, multiplied by 100        |
//!
//! This is a compatibility shim for the upstream service, not a unit system.
//! TODO: drop the `> 200` branch once the service reports hikes in percent.

/// Upper bound of values taken as a percentage as-is.
pub const MAX_PLAIN_HIKE: f64 = 200.0;

/// Format a raw hike value as a one-decimal percentage.
pub fn format_hike(hike: f64) -> String {
    if !hike.is_finite() {
        return "n/a".to_string();
    }

    let percent = if (1.0..=MAX_PLAIN_HIKE).contains(&hike) {
        hike
    } else if hike > MAX_PLAIN_HIKE {
        let mut scaled = hike;
        while scaled > MAX_PLAIN_HIKE {
            scaled /= 10.0;
        }
        scaled
    } else {
        hike * 100.0
    };

    format!("{:.1}%", percent)
}

/// Format a confidence fraction as a one-decimal percentage.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_percentages() {
        assert_eq!(format_hike(45.0), "45.0%");
        assert_eq!(format_hike(1.0), "1.0%");
        assert_eq!(format_hike(200.0), "200.0%");
        assert_eq!(format_hike(10.0), "10.0%");
    }

    #[test]
    fn test_large_values_scale_down_until_in_range() {
        assert_eq!(format_hike(350.0), "35.0%");
        assert_eq!(format_hike(2500.0), "25.0%");
        assert_eq!(format_hike(201.0), "20.1%");
    }

    #[test]
    fn test_fractions_become_percentages() {
        assert_eq!(format_hike(0.07), "7.0%");
        assert_eq!(format_hike(0.125), "12.5%");
        assert_eq!(format_hike(0.0), "0.0%");
    }

    #[test]
    fn test_non_finite_does_not_loop() {
        assert_eq!(format_hike(f64::INFINITY), "n/a");
        assert_eq!(format_hike(f64::NAN), "n/a");
    }

    #[test]
    fn test_confidence() {
        assert_eq!(format_confidence(0.8), "80.0%");
        assert_eq!(format_confidence(0.0), "0.0%");
        assert_eq!(format_confidence(1.0), "100.0%");
    }
}
