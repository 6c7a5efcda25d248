/// Format a duration in minutes as "2h 22m" / "45m".
/// Rounds to the nearest minute so 142.4 becomes "2h 22m".
pub fn format_duration(minutes: f64) -> String {
    if !minutes.is_finite() {
        return "-".to_string();
    }

    let total_minutes = minutes.round() as i64;
    let hours = total_minutes / 60;
    let mins = total_minutes % 60;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if mins > 0 || hours == 0 {
        parts.push(format!("{}m", mins));
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_fractional_minutes() {
        assert_eq!(format_duration(142.4), "2h 22m");
    }

    #[test]
    fn exact_hours_omit_minutes() {
        assert_eq!(format_duration(120.0), "2h");
    }

    #[test]
    fn under_an_hour() {
        assert_eq!(format_duration(45.0), "45m");
    }

    #[test]
    fn zero_is_zero_minutes() {
        assert_eq!(format_duration(0.0), "0m");
    }

    #[test]
    fn non_finite_is_dash() {
        assert_eq!(format_duration(f64::NAN), "-");
        assert_eq!(format_duration(f64::INFINITY), "-");
    }
}
