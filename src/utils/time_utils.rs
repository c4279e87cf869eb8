use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{ProcessorError, Result};

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Parses a 24-hour `HH:MM` string into minutes past midnight.
/// `24:00` is accepted as the end of the day.
pub fn parse_hhmm(value: &str) -> Result<u16> {
    let malformed = || ProcessorError::MalformedTime(value.to_string());

    let (hours, minutes) = value.split_once(':').ok_or_else(malformed)?;
    let digits = hours.chars().chain(minutes.chars()).all(|c| c.is_ascii_digit());
    if !digits || hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
        return Err(malformed());
    }

    let hours: u16 = hours.parse().map_err(|_| malformed())?;
    let minutes: u16 = minutes.parse().map_err(|_| malformed())?;
    let minute_of_day = hours * 60 + minutes;
    if minutes > 59 || minute_of_day > MINUTES_PER_DAY {
        return Err(malformed());
    }

    Ok(minute_of_day)
}

pub fn format_hhmm(minute_of_day: u16) -> String {
    format!("{:02}:{:02}", minute_of_day / 60, minute_of_day % 60)
}

/// Day of week with Sunday as 0, matching the availability slot convention.
pub fn day_of_week(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Combines a calendar date with a minute-of-day offset.
pub fn at_minute(date: NaiveDate, minute_of_day: u16) -> NaiveDateTime {
    let time = NaiveTime::from_hms_opt((minute_of_day / 60) as u32 % 24, (minute_of_day % 60) as u32, 0)
        .unwrap_or(NaiveTime::MIN);

    date.and_time(time)
}

/// Serde adapter storing minute-of-day values as `HH:MM` strings.
pub mod hhmm {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(minute_of_day: &u16, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_hhmm(*minute_of_day))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u16, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_hhmm(&raw).map_err(D::Error::custom)
    }
}
