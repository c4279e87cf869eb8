use crate::model::{
    constants::{
        BEGINNER_NTRP_CEILING, INTERMEDIATE_NTRP_CEILING, NTRP_INTERCEPT, NTRP_MAX, NTRP_MIN, NTRP_SLOPE
    },
    structures::skill_band::SkillBand
};

/// `rating = 400 + ntrp * 220`
pub fn ntrp_to_rating(ntrp: f64) -> i32 {
    (NTRP_INTERCEPT + ntrp * NTRP_SLOPE).round() as i32
}

/// Inverse of [`ntrp_to_rating`], rounded to the nearest half level and kept on the 1.0..=7.0 scale.
pub fn rating_to_ntrp(rating: i32) -> f64 {
    let raw = (rating as f64 - NTRP_INTERCEPT) / NTRP_SLOPE;

    ((raw * 2.0).round() / 2.0).clamp(NTRP_MIN, NTRP_MAX)
}

pub fn skill_band_from_ntrp(ntrp: f64) -> SkillBand {
    if ntrp <= BEGINNER_NTRP_CEILING {
        SkillBand::Beginner
    } else if ntrp < INTERMEDIATE_NTRP_CEILING {
        SkillBand::Intermediate
    } else {
        SkillBand::Advanced
    }
}

pub fn skill_band_from_rating(rating: i32) -> SkillBand {
    skill_band_from_ntrp(rating_to_ntrp(rating))
}
