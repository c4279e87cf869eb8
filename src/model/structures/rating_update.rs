use serde::{Deserialize, Serialize};

/// Outcome of a single rating calculation.
///
/// `delta` is the unclamped change; `new_rating` has the rating floor applied.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingUpdate {
    pub new_rating: i32,
    pub delta: i32
}
