// Rating model constants
pub const STARTING_RATING: i32 = 1000;
pub const RATING_FLOOR: i32 = 100;
pub const ELO_SCALE: f64 = 400.0;
pub const NEW_PLAYER_GAMES: u32 = 20;
pub const K_FACTOR_NEW: i32 = 32;
pub const K_FACTOR_ESTABLISHED: i32 = 16;
pub const K_BASE_PROVISIONAL: f64 = 40.0;
pub const K_BASE_ESTABLISHED: f64 = 32.0;
pub const CONFIDENCE_K_OFFSET: f64 = 1.1;
pub const CONFIDENCE_K_WEIGHT: f64 = 0.5;
pub const MARGIN_SET_WEIGHT: f64 = 0.05;
pub const MARGIN_GAME_WEIGHT: f64 = 0.01;
pub const MARGIN_CAP: f64 = 1.5;
// Competitor lifecycle
pub const PROVISIONAL_MATCHES: u32 = 5;
pub const CONFIDENCE_STEP: f64 = 0.1;
// NTRP mapping: rating = NTRP_INTERCEPT + ntrp * NTRP_SLOPE
pub const NTRP_INTERCEPT: f64 = 400.0;
pub const NTRP_SLOPE: f64 = 220.0;
pub const NTRP_MIN: f64 = 1.0;
pub const NTRP_MAX: f64 = 7.0;
pub const BEGINNER_NTRP_CEILING: f64 = 3.0;
pub const INTERMEDIATE_NTRP_CEILING: f64 = 4.0;
// Tie-break hashing (32-bit FNV-1a)
pub const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
pub const FNV_PRIME: u32 = 0x0100_0193;
