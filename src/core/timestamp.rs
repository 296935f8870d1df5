//! Timestamp formatting utilities
//!
//! Renders the local wall-clock time that prefixes a log line when
//! timestamps are enabled. Patterns use strftime syntax.

use chrono::{DateTime, Local, SecondsFormat};
use std::fmt::Write;

/// Day/month/year with a 12-hour clock, e.g. `08/01/2025 03:04:05 PM`.
///
/// Used by subsystems running in debug mode.
pub const DEBUG_TIME_FORMAT: &str = "%d/%m/%Y %I:%M:%S %p";

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use kage::core::TimestampFormat;
///
/// let format = TimestampFormat::from("%H:%M:%S");
/// assert_eq!(format, TimestampFormat::Custom("%H:%M:%S".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TimestampFormat {
    /// RFC 3339 with second precision: `2025-01-08T10:30:45+01:00`
    #[default]
    Rfc3339,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    /// Format a local time according to this format
    ///
    /// A custom pattern that chrono cannot render falls back to RFC 3339
    /// rather than failing the log call.
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::Rfc3339 => rfc3339(datetime),
            TimestampFormat::Custom(pattern) => {
                let mut rendered = String::new();
                match write!(rendered, "{}", datetime.format(pattern)) {
                    Ok(()) => rendered,
                    Err(_) => rfc3339(datetime),
                }
            }
        }
    }
}

impl From<&str> for TimestampFormat {
    fn from(pattern: &str) -> Self {
        TimestampFormat::Custom(pattern.to_string())
    }
}

impl From<String> for TimestampFormat {
    fn from(pattern: String) -> Self {
        TimestampFormat::Custom(pattern)
    }
}

fn rfc3339(datetime: &DateTime<Local>) -> String {
    datetime.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone};

    fn fixed_datetime() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 1, 8, 15, 4, 5)
            .single()
            .expect("valid local datetime")
    }

    #[test]
    fn test_debug_format() {
        let format = TimestampFormat::from(DEBUG_TIME_FORMAT);
        assert_eq!(format.format(&fixed_datetime()), "08/01/2025 03:04:05 PM");
    }

    #[test]
    fn test_rfc3339_format() {
        let result = TimestampFormat::Rfc3339.format(&fixed_datetime());
        assert!(result.starts_with("2025-01-08T15:04:05"));

        let parsed = DateTime::parse_from_rfc3339(&result).expect("valid RFC 3339");
        assert_eq!(parsed.timestamp(), fixed_datetime().timestamp());
    }

    #[test]
    fn test_custom_format_parses_back() {
        let format = TimestampFormat::from(DEBUG_TIME_FORMAT);
        let rendered = format.format(&fixed_datetime());
        let parsed = NaiveDateTime::parse_from_str(&rendered, DEBUG_TIME_FORMAT)
            .expect("pattern parses back");
        assert_eq!(parsed, fixed_datetime().naive_local());
    }

    #[test]
    fn test_invalid_pattern_falls_back() {
        let format = TimestampFormat::from("%Q broken");
        let result = format.format(&fixed_datetime());
        assert_eq!(result, TimestampFormat::Rfc3339.format(&fixed_datetime()));
    }

    #[test]
    fn test_default_is_rfc3339() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::Rfc3339);
    }
}
