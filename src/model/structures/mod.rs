pub mod availability;
pub mod competitor;
pub mod match_result;
pub mod match_status;
pub mod near_miss;
pub mod rating_update;
pub mod round_robin;
pub mod scheduling_tier;
pub mod skill_band;
pub mod standing_entry;
pub mod tournament_match;
