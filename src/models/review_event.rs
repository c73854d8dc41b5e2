//! One row of the review log. Read-only input to the retention pipeline.
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewEvent {
    pub card_id: i64,
    /// Answer button: 0 = none recorded, 1 = Again, 2 = Hard, 3 = Good, 4 = Easy
    pub ease: i64,
    pub event_type: i64,
    /// Interval before this review. Negative values are sub-day intervals.
    pub last_interval: i64,
    /// Scheduling factor in permille, 0 for legacy/suspended entries
    pub ease_factor: i64,
}
