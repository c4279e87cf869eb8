use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeadToHead {
    Win,
    Loss,
    #[default]
    Pending
}

/// Aggregated record of one competitor within a standings table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StandingEntry {
    pub competitor_id: String,
    pub played: u32,
    pub wins: u32,
    pub losses: u32,
    pub sets_won: u32,
    pub sets_lost: u32,
    pub set_diff: i32,
    pub games_won: u32,
    pub games_lost: u32,
    pub game_diff: i32,
    pub head_to_head: BTreeMap<String, HeadToHead>
}

impl StandingEntry {
    /// A blank entry with every other competitor seeded as `Pending`.
    pub fn new(competitor_id: &str, field: &[String]) -> StandingEntry {
        let head_to_head = field
            .iter()
            .filter(|id| id.as_str() != competitor_id)
            .map(|id| (id.clone(), HeadToHead::Pending))
            .collect();

        StandingEntry {
            competitor_id: competitor_id.to_string(),
            played: 0,
            wins: 0,
            losses: 0,
            sets_won: 0,
            sets_lost: 0,
            set_diff: 0,
            games_won: 0,
            games_lost: 0,
            game_diff: 0,
            head_to_head
        }
    }

    pub fn head_to_head_against(&self, competitor_id: &str) -> HeadToHead {
        self.head_to_head.get(competitor_id).copied().unwrap_or_default()
    }
}
