use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::structures::availability::TimeWindow;

/// The closest-but-failed overlap between two competitors on one calendar date.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NearMiss {
    pub day_of_week: u8,
    pub date: NaiveDate,
    pub window_a: TimeWindow,
    pub window_b: TimeWindow,
    pub overlap_minutes: u16,
    pub gap_minutes: u16,
    /// Minutes one side has to shift or extend to reach the usable threshold
    pub flex_needed: u16,
    pub suggested_window: TimeWindow
}
