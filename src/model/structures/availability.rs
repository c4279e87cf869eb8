use serde::{Deserialize, Serialize};

use crate::{
    error::{ProcessorError, Result},
    utils::time_utils::{self, MINUTES_PER_DAY}
};

/// A half-open `[start, end)` span of minutes within one day.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeWindow {
    #[serde(with = "time_utils::hhmm")]
    pub start: u16,
    #[serde(with = "time_utils::hhmm")]
    pub end: u16
}

impl TimeWindow {
    pub fn new(start: u16, end: u16) -> TimeWindow {
        TimeWindow { start, end }
    }

    pub fn duration(&self) -> u16 {
        self.end.saturating_sub(self.start)
    }

    /// Signed overlap in minutes. Negative values are the gap between the windows.
    pub fn overlap_with(&self, other: &TimeWindow) -> i32 {
        self.end.min(other.end) as i32 - self.start.max(other.start) as i32
    }
}

/// A recurring weekly window during which a competitor can play.
/// `day_of_week` counts from Sunday = 0. Deserializing goes through
/// [`AvailabilitySlot::new`], so malformed windows are rejected at load time.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase", try_from = "UncheckedSlot")]
pub struct AvailabilitySlot {
    pub day_of_week: u8,
    #[serde(with = "time_utils::hhmm")]
    pub start_time: u16,
    #[serde(with = "time_utils::hhmm")]
    pub end_time: u16
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UncheckedSlot {
    day_of_week: u8,
    #[serde(with = "time_utils::hhmm")]
    start_time: u16,
    #[serde(with = "time_utils::hhmm")]
    end_time: u16
}

impl TryFrom<UncheckedSlot> for AvailabilitySlot {
    type Error = ProcessorError;

    fn try_from(raw: UncheckedSlot) -> Result<Self> {
        AvailabilitySlot::new(raw.day_of_week, raw.start_time, raw.end_time)
    }
}

impl AvailabilitySlot {
    pub fn new(day_of_week: u8, start_time: u16, end_time: u16) -> Result<AvailabilitySlot> {
        if day_of_week > 6 || start_time >= end_time || end_time > MINUTES_PER_DAY {
            return Err(ProcessorError::InvalidWindow {
                day: day_of_week,
                start: start_time,
                end: end_time
            });
        }

        Ok(AvailabilitySlot {
            day_of_week,
            start_time,
            end_time
        })
    }

    /// Builds a slot from `HH:MM` strings.
    pub fn parse(day_of_week: u8, start: &str, end: &str) -> Result<AvailabilitySlot> {
        AvailabilitySlot::new(day_of_week, time_utils::parse_hhmm(start)?, time_utils::parse_hhmm(end)?)
    }

    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start_time, self.end_time)
    }
}
