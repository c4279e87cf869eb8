pub mod constants;
pub mod ntrp;
pub mod rating;
pub mod standings;
pub mod structures;

pub use ntrp::{ntrp_to_rating, rating_to_ntrp, skill_band_from_ntrp, skill_band_from_rating};
pub use rating::{
    compute_enhanced_rating_update, compute_rating_update, expected_score, k_factor, k_factor_with_confidence,
    margin_multiplier, starting_rating
};
pub use standings::compute_standings;
