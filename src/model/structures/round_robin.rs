use serde::{Deserialize, Serialize};

/// Slot index standing in for "no opponent this round".
pub const BYE_SLOT: i32 = -1;

/// Two zero-based competitor slots meeting in a round. A bye always sits in `slot_b`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoundRobinPairing {
    pub slot_a: i32,
    pub slot_b: i32,
    /// Filled in once the match for this pairing exists
    #[serde(default)]
    pub match_id: Option<String>
}

impl RoundRobinPairing {
    pub fn is_bye(&self) -> bool {
        self.slot_a == BYE_SLOT || self.slot_b == BYE_SLOT
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TournamentRound {
    /// One-based
    pub round_number: u32,
    /// Suggested week (1..=4) to play this round in
    pub target_week: u8,
    pub pairings: Vec<RoundRobinPairing>
}
