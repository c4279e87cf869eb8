use chrono::{NaiveDate, NaiveDateTime};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    config::ProcessorConfig,
    model::structures::{
        availability::{AvailabilitySlot, TimeWindow},
        near_miss::NearMiss
    },
    schedule::labels::describe_near_miss,
    utils::time_utils::{self, MINUTES_PER_DAY}
};

/// A dated window in which both competitors are free for at least the minimum duration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Overlap {
    pub date: NaiveDate,
    #[serde(with = "time_utils::hhmm")]
    pub start_time: u16,
    #[serde(with = "time_utils::hhmm")]
    pub end_time: u16,
    pub day_of_week: u8
}

impl Overlap {
    pub fn duration(&self) -> u16 {
        self.end_time - self.start_time
    }

    pub fn starts_at(&self) -> NaiveDateTime {
        time_utils::at_minute(self.date, self.start_time)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvailabilitySearch {
    Exact(Vec<Overlap>),
    /// Candidates least flex first, with a readable suggestion for the first one
    NearMiss {
        candidates: Vec<NearMiss>,
        suggestion: String
    },
    NoFit
}

/// Same-day slot pairs over the lookahead horizon, with their signed overlap in minutes.
fn same_day_pairs<'s>(
    a: &'s [AvailabilitySlot],
    b: &'s [AvailabilitySlot],
    from: NaiveDate,
    lookahead_days: u32
) -> impl Iterator<Item = (NaiveDate, u8, &'s AvailabilitySlot, &'s AvailabilitySlot, i32)> + 's {
    from.iter_days()
        .take(lookahead_days as usize)
        .flat_map(move |date| {
            let day = time_utils::day_of_week(date);
            a.iter()
                .filter(move |slot| slot.day_of_week == day)
                .cartesian_product(b.iter().filter(move |slot| slot.day_of_week == day).collect_vec())
                .map(move |(slot_a, slot_b)| {
                    let overlap = slot_a.window().overlap_with(&slot_b.window());
                    (date, day, slot_a, slot_b, overlap)
                })
        })
}

/// Every dated overlap of at least `min_overlap_minutes`, earliest first.
pub fn find_overlaps(
    a: &[AvailabilitySlot],
    b: &[AvailabilitySlot],
    from: NaiveDate,
    config: &ProcessorConfig
) -> Vec<Overlap> {
    let min = config.min_overlap_minutes as i32;

    same_day_pairs(a, b, from, config.lookahead_days)
        .filter(|(_, _, _, _, overlap)| *overlap >= min)
        .map(|(date, day, slot_a, slot_b, _)| Overlap {
            date,
            start_time: slot_a.start_time.max(slot_b.start_time),
            end_time: slot_a.end_time.min(slot_b.end_time),
            day_of_week: day
        })
        .sorted()
        .dedup()
        .collect()
}

/// Same-day pairs that fall short of the threshold, least flex first.
///
/// `flex_needed` is the threshold minus the signed overlap, so a gap between the
/// windows counts towards it. The suggested window starts when the later window
/// opens and runs for the threshold, pulled back if it would pass midnight.
pub fn find_near_misses(
    a: &[AvailabilitySlot],
    b: &[AvailabilitySlot],
    from: NaiveDate,
    config: &ProcessorConfig
) -> Vec<NearMiss> {
    let min = config.min_overlap_minutes;

    same_day_pairs(a, b, from, config.lookahead_days)
        .filter(|(_, _, _, _, overlap)| *overlap < min as i32)
        .map(|(date, day, slot_a, slot_b, overlap)| {
            let suggested_start = slot_a
                .start_time
                .max(slot_b.start_time)
                .min(MINUTES_PER_DAY.saturating_sub(min));

            NearMiss {
                day_of_week: day,
                date,
                window_a: slot_a.window(),
                window_b: slot_b.window(),
                overlap_minutes: overlap.max(0) as u16,
                gap_minutes: (-overlap).max(0) as u16,
                flex_needed: (min as i32 - overlap) as u16,
                suggested_window: TimeWindow::new(suggested_start, suggested_start + min)
            }
        })
        .sorted_by_key(|miss| {
            (
                miss.flex_needed,
                miss.date,
                miss.suggested_window.start,
                miss.window_a.start,
                miss.window_b.start
            )
        })
        .dedup()
        .collect()
}

/// Exact overlaps when there are any, otherwise near misses.
pub fn search_availability(
    a: &[AvailabilitySlot],
    b: &[AvailabilitySlot],
    from: NaiveDate,
    config: &ProcessorConfig
) -> AvailabilitySearch {
    let overlaps = find_overlaps(a, b, from, config);
    if !overlaps.is_empty() {
        return AvailabilitySearch::Exact(overlaps);
    }

    let candidates = find_near_misses(a, b, from, config);
    match candidates.first().map(describe_near_miss) {
        Some(suggestion) => AvailabilitySearch::NearMiss { candidates, suggestion },
        None => AvailabilitySearch::NoFit
    }
}
