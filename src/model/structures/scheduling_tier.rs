use serde_repr::{Deserialize_repr, Serialize_repr};
use std::convert::TryFrom;

/// How a match was (or could be) placed on the calendar by the auto-scheduler.
#[derive(Deserialize_repr, Serialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum SchedulingTier {
    /// Booked automatically from an exact availability overlap
    AutoFit = 1,
    /// Not booked, but fits if one side flexes a little
    FlexFit = 2,
    /// No fit found, players have to propose times themselves
    Manual = 3
}

impl TryFrom<i32> for SchedulingTier {
    type Error = ();

    fn try_from(v: i32) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(SchedulingTier::AutoFit),
            2 => Ok(SchedulingTier::FlexFit),
            3 => Ok(SchedulingTier::Manual),
            _ => Err(())
        }
    }
}
