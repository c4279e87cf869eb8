//! Elo-style rating model.
//!
//! Everything here is a pure function of its inputs. Inputs are trusted: a
//! negative game count or a confidence outside `[0, 1]` is a caller bug, although
//! confidence is clamped before use.

use crate::model::{
    constants::*,
    ntrp::ntrp_to_rating,
    structures::{
        match_result::{SetScore, SetTally},
        rating_update::RatingUpdate
    }
};

/// Rating assigned to a new competitor, seeded from a self-reported NTRP level when known.
pub fn starting_rating(ntrp: Option<f64>) -> i32 {
    match ntrp {
        Some(level) => ntrp_to_rating(level).max(RATING_FLOOR),
        None => STARTING_RATING
    }
}

/// Probability that A beats B: `1 / (1 + 10^((B - A) / 400))`
pub fn expected_score(rating_a: f64, rating_b: f64) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf((rating_b - rating_a) / ELO_SCALE))
}

/// Early results are noisier, so new competitors move faster.
pub fn k_factor(games_played: u32) -> i32 {
    if games_played < NEW_PLAYER_GAMES {
        K_FACTOR_NEW
    } else {
        K_FACTOR_ESTABLISHED
    }
}

pub fn compute_rating_update(rating_a: i32, rating_b: i32, games_played: u32, won: bool) -> RatingUpdate {
    let expected = expected_score(rating_a as f64, rating_b as f64);
    let delta = (k_factor(games_played) as f64 * (actual_score(won) - expected)).round() as i32;

    clamped(rating_a, delta)
}

/// Rewards decisive wins. Ranges over `[1.0, 1.5]`.
pub fn margin_multiplier(sets: &[SetScore]) -> f64 {
    let tally = SetTally::from_sets(sets);
    let multiplier =
        1.0 + MARGIN_SET_WEIGHT * tally.set_margin() as f64 + MARGIN_GAME_WEIGHT * tally.game_margin() as f64;

    multiplier.min(MARGIN_CAP)
}

/// `round(base * (1.1 - confidence * 0.5))`, with a higher base while still provisional.
pub fn k_factor_with_confidence(confidence: f64, provisional_remaining: u32) -> i32 {
    let base = if provisional_remaining > 0 {
        K_BASE_PROVISIONAL
    } else {
        K_BASE_ESTABLISHED
    };
    let confidence = confidence.clamp(0.0, 1.0);

    (base * (CONFIDENCE_K_OFFSET - confidence * CONFIDENCE_K_WEIGHT)).round() as i32
}

pub fn compute_enhanced_rating_update(
    rating_a: i32,
    rating_b: i32,
    confidence: f64,
    provisional_remaining: u32,
    won: bool,
    sets: Option<&[SetScore]>
) -> RatingUpdate {
    let expected = expected_score(rating_a as f64, rating_b as f64);
    let k = k_factor_with_confidence(confidence, provisional_remaining) as f64;
    let multiplier = sets.map_or(1.0, margin_multiplier);

    let delta = (k * (actual_score(won) - expected) * multiplier).round() as i32;

    clamped(rating_a, delta)
}

fn actual_score(won: bool) -> f64 {
    if won {
        1.0
    } else {
        0.0
    }
}

fn clamped(rating: i32, delta: i32) -> RatingUpdate {
    RatingUpdate {
        new_rating: (rating + delta).max(RATING_FLOOR),
        delta
    }
}
