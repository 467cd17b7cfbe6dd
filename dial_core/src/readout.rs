//! Readout helpers - the digital time shown alongside the dial

use chrono::Duration;

/// Convert fractional minutes to a duration with millisecond precision
///
/// Non-finite and negative values become zero.
pub fn minutes_to_duration(minutes: f64) -> Duration {
    if !minutes.is_finite() || minutes <= 0.0 {
        return Duration::zero();
    }
    Duration::milliseconds((minutes * 60_000.0).round() as i64)
}

/// Format fractional minutes as `MM:SS`, rounded to the nearest second
pub fn format_readout(minutes: f64) -> String {
    let duration = minutes_to_duration(minutes);
    let total_seconds = duration.num_milliseconds().saturating_add(500) / 1000;
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_to_duration() {
        assert_eq!(minutes_to_duration(1.5), Duration::seconds(90));
        assert_eq!(minutes_to_duration(-3.0), Duration::zero());
        assert_eq!(minutes_to_duration(f64::NAN), Duration::zero());
    }

    #[test]
    fn test_format_readout() {
        assert_eq!(format_readout(60.0), "60:00");
        assert_eq!(format_readout(7.5), "07:30");
        assert_eq!(format_readout(0.0), "00:00");
        assert_eq!(format_readout(7.42), "07:25");
        assert_eq!(format_readout(0.9999), "01:00");
    }
}
