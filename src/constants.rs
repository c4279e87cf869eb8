// Round-robin bounds
pub const MIN_COMPETITORS: usize = 4;
pub const MAX_COMPETITORS: usize = 8;
pub const TARGET_WEEKS: usize = 4;
// Availability search defaults
pub const DEFAULT_LOOKAHEAD_DAYS: u32 = 14;
pub const DEFAULT_MIN_OVERLAP_MINUTES: u16 = 120;
// Environment variables read by `ProcessorConfig::from_env`
pub const ENV_LOOKAHEAD_DAYS: &str = "TOURNEY_LOOKAHEAD_DAYS";
pub const ENV_MIN_OVERLAP_MINUTES: &str = "TOURNEY_MIN_OVERLAP_MINUTES";
pub const ENV_TIEBREAK_SALT: &str = "TOURNEY_TIEBREAK_SALT";
