use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which side of a match a score belongs to. `A` is the challenger, `B` the opponent.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B
}

/// Games won by each side in one set, plus tiebreak points when the set went to one.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SetScore {
    pub a_games: u32,
    pub b_games: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a_tiebreak: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b_tiebreak: Option<u32>
}

impl SetScore {
    pub fn new(a_games: u32, b_games: u32) -> SetScore {
        SetScore {
            a_games,
            b_games,
            a_tiebreak: None,
            b_tiebreak: None
        }
    }

    pub fn with_tiebreak(a_games: u32, b_games: u32, a_points: u32, b_points: u32) -> SetScore {
        SetScore {
            a_games,
            b_games,
            a_tiebreak: Some(a_points),
            b_tiebreak: Some(b_points)
        }
    }

    /// Games decide the set; tiebreak points only matter when games are level.
    /// A level set without tiebreak points has no winner.
    pub fn winner(&self) -> Option<Side> {
        if self.a_games > self.b_games {
            return Some(Side::A);
        }
        if self.b_games > self.a_games {
            return Some(Side::B);
        }

        match (self.a_tiebreak, self.b_tiebreak) {
            (Some(a), Some(b)) if a > b => Some(Side::A),
            (Some(a), Some(b)) if b > a => Some(Side::B),
            _ => None
        }
    }
}

/// Sets and games won per side across a whole match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SetTally {
    pub sets_a: u32,
    pub sets_b: u32,
    pub games_a: u32,
    pub games_b: u32
}

impl SetTally {
    pub fn from_sets(sets: &[SetScore]) -> SetTally {
        sets.iter().fold(SetTally::default(), |mut tally, set| {
            tally.games_a += set.a_games;
            tally.games_b += set.b_games;
            match set.winner() {
                Some(Side::A) => tally.sets_a += 1,
                Some(Side::B) => tally.sets_b += 1,
                None => {}
            }
            tally
        })
    }

    pub fn set_margin(&self) -> u32 {
        self.sets_a.abs_diff(self.sets_b)
    }

    pub fn game_margin(&self) -> u32 {
        self.games_a.abs_diff(self.games_b)
    }
}

/// A reported match result. Once attached to a match it is never modified.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub winner_id: String,
    /// Structured per-set scores, challenger games first
    #[serde(default)]
    pub sets: Option<Vec<SetScore>>,
    /// Free-form score line from older reports; carries no statistics
    #[serde(default)]
    pub score: Option<String>,
    pub reported_by: String,
    pub reported_at: DateTime<Utc>,
    #[serde(default)]
    pub confirmed_by: Option<String>,
    #[serde(default)]
    pub confirmed_at: Option<DateTime<Utc>>
}

impl MatchResult {
    pub fn structured_sets(&self) -> Option<&[SetScore]> {
        self.sets.as_deref().filter(|sets| !sets.is_empty())
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed_by.is_some()
    }
}
