use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};

/// Date-time format shown as `Date:` in notifications, e.g. `3/9/2026, 2:05:07 PM`.
const DATE_TIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// 24-hour time format shown as `Time:` in notifications, e.g. `14:05:07`.
const TIME_ONLY_FORMAT: &str = "%H:%M:%S";

/// The two renderings of the moment a message was received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalTimestamp {
    /// Locale-style date and time.
    pub date_time: String,
    /// 24-hour time of day.
    pub time_only: String,
}

impl LocalTimestamp {
    /// Captures the current local time.
    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }

    /// Renders an arbitrary instant in its own time zone.
    pub fn from_datetime<Tz>(at: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            date_time: at.format(DATE_TIME_FORMAT).to_string(),
            time_only: at.format(TIME_ONLY_FORMAT).to_string(),
        }
    }
}
