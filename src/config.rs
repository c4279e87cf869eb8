use serde::{Deserialize, Serialize};
use std::env;

use crate::{
    constants::{
        DEFAULT_LOOKAHEAD_DAYS, DEFAULT_MIN_OVERLAP_MINUTES, ENV_LOOKAHEAD_DAYS, ENV_MIN_OVERLAP_MINUTES,
        ENV_TIEBREAK_SALT
    },
    error::{ProcessorError, Result}
};

/// Tunables for availability search and standings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessorConfig {
    /// Number of calendar days searched for overlaps, starting at the from-date
    pub lookahead_days: u32,
    /// Shortest overlap that counts as a playable slot
    pub min_overlap_minutes: u16,
    /// Salt mixed into the standings hash tiebreak
    pub tiebreak_salt: Option<String>
}

impl ProcessorConfig {
    /// Creates a configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            lookahead_days: parse_var(ENV_LOOKAHEAD_DAYS, DEFAULT_LOOKAHEAD_DAYS)?,
            min_overlap_minutes: parse_var(ENV_MIN_OVERLAP_MINUTES, DEFAULT_MIN_OVERLAP_MINUTES)?,
            tiebreak_salt: env::var(ENV_TIEBREAK_SALT).ok().filter(|salt| !salt.is_empty())
        })
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            lookahead_days: DEFAULT_LOOKAHEAD_DAYS,
            min_overlap_minutes: DEFAULT_MIN_OVERLAP_MINUTES,
            tiebreak_salt: None
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ProcessorError::Config(format!("{name} must be a non-negative integer, found '{raw}'"))),
        Err(_) => Ok(default)
    }
}
