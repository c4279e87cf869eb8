use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{
    error::{ProcessorError, Result},
    model::structures::{
        match_result::MatchResult, match_status::MatchStatus, near_miss::NearMiss, scheduling_tier::SchedulingTier
    }
};

/// A proposed start time for a match. `proposed_by` is `None` for system generated proposals.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeProposal {
    pub id: String,
    pub starts_at: NaiveDateTime,
    pub label: String,
    #[serde(default)]
    pub proposed_by: Option<String>,
    #[serde(default)]
    pub accepted_by: Vec<String>
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    #[serde(default)]
    pub tournament_id: Option<String>,
    pub challenger_id: String,
    pub opponent_id: String,
    #[serde(default)]
    pub status: MatchStatus,
    #[serde(default)]
    pub proposals: Vec<TimeProposal>,
    #[serde(default)]
    pub scheduled_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub result: Option<MatchResult>,
    #[serde(default)]
    pub scheduling_tier: Option<SchedulingTier>,
    #[serde(default)]
    pub near_miss: Option<NearMiss>,
    /// Readable form of `near_miss`, e.g. for a reminder to both players
    #[serde(default)]
    pub flex_suggestion: Option<String>
}

impl Match {
    pub fn new(id: &str, tournament_id: Option<&str>, challenger_id: &str, opponent_id: &str) -> Match {
        Match {
            id: id.to_string(),
            tournament_id: tournament_id.map(str::to_string),
            challenger_id: challenger_id.to_string(),
            opponent_id: opponent_id.to_string(),
            status: MatchStatus::Pending,
            proposals: Vec::new(),
            scheduled_at: None,
            result: None,
            scheduling_tier: None,
            near_miss: None,
            flex_suggestion: None
        }
    }

    pub fn involves(&self, competitor_id: &str) -> bool {
        self.challenger_id == competitor_id || self.opponent_id == competitor_id
    }

    pub fn opponent_of(&self, competitor_id: &str) -> Option<&str> {
        if self.challenger_id == competitor_id {
            Some(&self.opponent_id)
        } else if self.opponent_id == competitor_id {
            Some(&self.challenger_id)
        } else {
            None
        }
    }

    /// The losing competitor, if a result with a valid winner is attached.
    pub fn loser_id(&self) -> Option<&str> {
        self.result
            .as_ref()
            .and_then(|result| self.opponent_of(&result.winner_id))
    }

    pub fn transition_to(&mut self, to: MatchStatus) -> Result<()> {
        if !self.status.can_transition_to(to) {
            return Err(ProcessorError::InvalidTransition { from: self.status, to });
        }

        self.status = to;
        Ok(())
    }

    /// Attaches a result and completes the match.
    pub fn attach_result(&mut self, result: MatchResult) -> Result<()> {
        if self.result.is_some() {
            return Err(ProcessorError::ResultAlreadyAttached(self.id.clone()));
        }
        if self.status.is_terminal() {
            return Err(ProcessorError::InvalidTransition {
                from: self.status,
                to: MatchStatus::Completed
            });
        }
        if !self.involves(&result.winner_id) {
            return Err(ProcessorError::UnknownWinner {
                match_id: self.id.clone(),
                winner: result.winner_id
            });
        }

        self.result = Some(result);
        self.status = MatchStatus::Completed;
        Ok(())
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed && self.result.is_some()
    }
}
