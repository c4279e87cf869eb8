pub mod auto_scheduler;
pub mod labels;
pub mod overlap;
pub mod round_robin;

pub use auto_scheduler::{auto_schedule_tournament, AutoScheduleOutcome, ScheduleSummary};
pub use overlap::{find_near_misses, find_overlaps, search_availability, AvailabilitySearch, Overlap};
pub use round_robin::{build_round_matches, generate_round_robin};
