use serde::{Deserialize, Serialize};

use crate::model::{
    constants::{CONFIDENCE_STEP, PROVISIONAL_MATCHES},
    rating::{compute_enhanced_rating_update, starting_rating},
    structures::{match_result::SetScore, rating_update::RatingUpdate}
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    pub id: String,
    #[serde(default)]
    pub ntrp: Option<f64>,
    pub rating: i32,
    /// How settled the rating is, in `[0, 1]`
    pub rating_confidence: f64,
    /// Matches still treated as high-volatility
    pub provisional_remaining: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32
}

impl Competitor {
    pub fn new(id: &str, ntrp: Option<f64>) -> Competitor {
        Competitor {
            id: id.to_string(),
            ntrp,
            rating: starting_rating(ntrp),
            rating_confidence: 0.0,
            provisional_remaining: PROVISIONAL_MATCHES,
            wins: 0,
            losses: 0
        }
    }

    pub fn games_played(&self) -> u32 {
        self.wins + self.losses
    }

    /// Applies one completed match against an opponent rated `opponent_rating`.
    ///
    /// The opponent is updated separately with their own call, using this
    /// competitor's rating from *before* the update.
    pub fn apply_result(&mut self, opponent_rating: i32, won: bool, sets: Option<&[SetScore]>) -> RatingUpdate {
        let update = compute_enhanced_rating_update(
            self.rating,
            opponent_rating,
            self.rating_confidence,
            self.provisional_remaining,
            won,
            sets
        );

        self.rating = update.new_rating;
        if won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        self.provisional_remaining = self.provisional_remaining.saturating_sub(1);
        self.rating_confidence = (self.rating_confidence + CONFIDENCE_STEP).min(1.0);

        update
    }
}
