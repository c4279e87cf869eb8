use thiserror::Error;

use crate::model::structures::match_status::MatchStatus;

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("Round-robin requires between 4 and 8 competitors, found {0}")]
    InvalidCompetitorCount(usize),

    #[error("Malformed time '{0}', expected HH:MM in 24-hour format")]
    MalformedTime(String),

    #[error("Invalid availability window: day {day}, {start}..{end}")]
    InvalidWindow { day: u8, start: u16, end: u16 },

    #[error("Match status cannot move from {from:?} to {to:?}")]
    InvalidTransition { from: MatchStatus, to: MatchStatus },

    #[error("Match {0} already has a result attached")]
    ResultAlreadyAttached(String),

    #[error("Winner {winner} is not a participant of match {match_id}")]
    UnknownWinner { match_id: String, winner: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to (de)serialize: {0}")]
    Json(#[from] serde_json::Error)
}

pub type Result<T> = std::result::Result<T, ProcessorError>;
