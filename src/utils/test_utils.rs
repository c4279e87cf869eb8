use std::{collections::HashMap, sync::Once};

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::structures::{
    availability::AvailabilitySlot,
    match_result::{MatchResult, SetScore},
    match_status::MatchStatus,
    tournament_match::Match
};

static INIT: Once = Once::new();

/// Initialize test logging at WARN
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("warn"))
            .with_test_writer()
            .try_init();
    });
}

pub fn generate_ids(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

pub fn report_time() -> DateTime<Utc> {
    "2024-06-01T12:00:00Z".parse().unwrap()
}

pub fn generate_result(winner_id: &str, sets: Option<Vec<SetScore>>) -> MatchResult {
    MatchResult {
        winner_id: winner_id.to_string(),
        sets,
        score: None,
        reported_by: winner_id.to_string(),
        reported_at: report_time(),
        confirmed_by: None,
        confirmed_at: None
    }
}

pub fn generate_completed_match(
    id: &str,
    challenger_id: &str,
    opponent_id: &str,
    winner_id: &str,
    sets: Option<Vec<SetScore>>
) -> Match {
    let mut m = Match::new(id, Some("t1"), challenger_id, opponent_id);
    m.status = MatchStatus::Completed;
    m.result = Some(generate_result(winner_id, sets));
    m
}

/// A completed match reported with only a free-form score line.
pub fn generate_legacy_match(id: &str, challenger_id: &str, opponent_id: &str, winner_id: &str, score: &str) -> Match {
    let mut m = generate_completed_match(id, challenger_id, opponent_id, winner_id, None);
    if let Some(result) = m.result.as_mut() {
        result.score = Some(score.to_string());
    }
    m
}

pub fn generate_pending_match(id: &str, challenger_id: &str, opponent_id: &str) -> Match {
    Match::new(id, Some("t1"), challenger_id, opponent_id)
}

pub fn generate_slot(day_of_week: u8, start: &str, end: &str) -> AvailabilitySlot {
    AvailabilitySlot::parse(day_of_week, start, end).unwrap()
}

pub fn generate_availability(entries: &[(&str, Vec<AvailabilitySlot>)]) -> HashMap<String, Vec<AvailabilitySlot>> {
    entries
        .iter()
        .map(|(id, slots)| (id.to_string(), slots.clone()))
        .collect()
}

/// Monday 2024-06-03. Day offsets from here: Sat = +5, Sun = +6.
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
}
