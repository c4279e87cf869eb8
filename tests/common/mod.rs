use std::{collections::HashMap, sync::Once};

use chrono::{NaiveDate, Utc};
use tourney_processor::model::structures::{
    availability::AvailabilitySlot,
    match_result::{MatchResult, SetScore}
};

static INIT: Once = Once::new();

/// Initialize test environment with RUST_LOG=WARN
pub fn init_test_env() {
    INIT.call_once(|| {
        std::env::set_var("RUST_LOG", "warn");
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

pub fn ids(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|id| id.to_string()).collect()
}

pub fn slot(day_of_week: u8, start: &str, end: &str) -> AvailabilitySlot {
    AvailabilitySlot::parse(day_of_week, start, end).unwrap()
}

/// Gives every competitor the same weekly slots.
pub fn shared_availability(competitor_ids: &[String], slots: &[AvailabilitySlot]) -> HashMap<String, Vec<AvailabilitySlot>> {
    competitor_ids.iter().map(|id| (id.clone(), slots.to_vec())).collect()
}

/// 6-3 6-4 for the winner. Set scores are always written challenger first.
pub fn straight_sets_win(winner_id: &str, winner_is_challenger: bool) -> MatchResult {
    let sets = if winner_is_challenger {
        vec![SetScore::new(6, 3), SetScore::new(6, 4)]
    } else {
        vec![SetScore::new(3, 6), SetScore::new(4, 6)]
    };

    MatchResult {
        winner_id: winner_id.to_string(),
        sets: Some(sets),
        score: None,
        reported_by: winner_id.to_string(),
        reported_at: Utc::now(),
        confirmed_by: None,
        confirmed_at: None
    }
}

/// Monday 2024-06-03
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
}
