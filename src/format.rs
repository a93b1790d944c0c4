/// Render a 24-hour clock reading as `H:MM AM/PM`.
pub fn format_clock12(hours: u32, minutes: u32) -> String {
    let period = if hours % 24 >= 12 { "PM" } else { "AM" };
    let display_hours = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", display_hours, minutes, period)
}

/// Render a minute count as `H hr M min`, dropping whichever part is zero.
pub fn format_duration(total_minutes: u32) -> String {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    if hours == 0 {
        format!("{} min", minutes)
    } else if minutes == 0 {
        format!("{} hr", hours)
    } else {
        format!("{} hr {} min", hours, minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock12_midnight_and_noon() {
        assert_eq!(format_clock12(0, 0), "12:00 AM");
        assert_eq!(format_clock12(12, 0), "12:00 PM");
    }

    #[test]
    fn test_format_clock12_pads_minutes() {
        assert_eq!(format_clock12(23, 5), "11:05 PM");
        assert_eq!(format_clock12(6, 22), "6:22 AM");
        assert_eq!(format_clock12(11, 20), "11:20 AM");
    }

    #[test]
    fn test_format_duration_only_mins() {
        assert_eq!(format_duration(0), "0 min");
        assert_eq!(format_duration(45), "45 min");
    }

    #[test]
    fn test_format_duration_whole_hours() {
        assert_eq!(format_duration(60), "1 hr");
        assert_eq!(format_duration(1440), "24 hr");
    }

    #[test]
    fn test_format_duration_hours_and_mins() {
        assert_eq!(format_duration(90), "1 hr 30 min");
        assert_eq!(format_duration(230), "3 hr 50 min");
    }
}
