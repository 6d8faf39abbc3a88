/// Utilities for date and time formatting
///
/// Message timestamps use the browser's local wall clock
use chrono::{DateTime, Local, TimeZone};

/// Format a timestamp as HH:MM:SS
/// Example: 2024-03-15T14:02:26Z -> "14:02:26"
pub fn format_time<Tz: TimeZone>(datetime: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    datetime.format("%H:%M:%S").to_string()
}

/// Current local time as HH:MM:SS
pub fn now_time() -> String {
    format_time(&Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_format_time() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_time(&dt), "14:02:26");
    }

    #[test]
    fn test_format_time_keeps_offset() {
        let offset = FixedOffset::east_opt(3 * 3600).unwrap();
        let dt = offset.with_ymd_and_hms(2024, 12, 31, 23, 59, 5).unwrap();
        assert_eq!(format_time(&dt), "23:59:05");
    }

    #[test]
    fn test_now_time_shape() {
        let now = now_time();
        assert_eq!(now.len(), 8);
        assert_eq!(now.matches(':').count(), 2);
    }
}
