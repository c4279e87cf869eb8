//! Human-readable text for proposals and near misses. Fixed English, no locale lookups.

use chrono::NaiveDate;

use crate::model::structures::{availability::TimeWindow, near_miss::NearMiss};

/// `"6:30 PM"`
pub fn format_minute(minute_of_day: u16) -> String {
    let hour = (minute_of_day / 60) % 24;
    let minute = minute_of_day % 60;
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let hour_12 = match hour % 12 {
        0 => 12,
        h => h
    };

    format!("{hour_12}:{minute:02} {suffix}")
}

pub fn format_window(window: &TimeWindow) -> String {
    format!("{}-{}", format_minute(window.start), format_minute(window.end))
}

/// `"Sat, Jun 8 at 10:00 AM"`
pub fn format_proposal_label(date: NaiveDate, minute_of_day: u16) -> String {
    format!("{} at {}", date.format("%a, %b %-d"), format_minute(minute_of_day))
}

pub fn describe_near_miss(near_miss: &NearMiss) -> String {
    format!(
        "{} {} (needs {} more minutes of flexibility)",
        near_miss.date.format("%a, %b %-d"),
        format_window(&near_miss.suggested_window),
        near_miss.flex_needed
    )
}
