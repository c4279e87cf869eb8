use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Lifecycle of a match. Statuses only move forward, except `Cancelled`
/// which can be entered from any non-terminal state.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Pending,
    Scheduling,
    Scheduled,
    Completed,
    Cancelled
}

impl MatchStatus {
    fn stage(&self) -> Option<u8> {
        match self {
            MatchStatus::Pending => Some(0),
            MatchStatus::Scheduling => Some(1),
            MatchStatus::Scheduled => Some(2),
            MatchStatus::Completed => Some(3),
            MatchStatus::Cancelled => None
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, MatchStatus::Completed | MatchStatus::Cancelled)
    }

    /// Whether the auto-scheduler may still place this match.
    pub fn is_schedulable(&self) -> bool {
        matches!(self, MatchStatus::Pending | MatchStatus::Scheduling)
    }

    /// `Completed` is never reachable here: attaching a result is the only way in.
    pub fn can_transition_to(&self, to: MatchStatus) -> bool {
        if self.is_terminal() {
            return false;
        }

        match to {
            MatchStatus::Cancelled => true,
            MatchStatus::Completed => false,
            _ => match (self.stage(), to.stage()) {
                (Some(from), Some(to)) => to > from,
                _ => false
            }
        }
    }
}
