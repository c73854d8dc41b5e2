//! Decides whether a single review counts toward retention, and how.
//!
//! Two filters apply:
//! - inclusion: an answer was recorded (`ease >= 1`), and the entry is not a
//!   relearning entry with a zero ease factor
//! - completed interval: the review was manual, or the previous interval was at
//!   least a full day in either direction
//!
//! Of the reviews passing both, `ease == 1` (Again) is the only failure.

use crate::models::ReviewEvent;

pub const MANUAL_CODE: i64 = 1;
pub const RELEARNING_CODE: i64 = 3;
pub const ONE_DAY: i64 = 86_400;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    Excluded,
    Success,
    Failure,
}

/// First filter. Events failing it are ignored entirely, before grouping.
pub fn passes_inclusion(event: &ReviewEvent) -> bool {
    event.ease >= 1 && (event.event_type != RELEARNING_CODE || event.ease_factor != 0)
}

/// Second filter: drops same-day re-reviews that did not complete an interval.
pub fn completes_interval(event: &ReviewEvent) -> bool {
    event.event_type == MANUAL_CODE
        || event.last_interval <= -ONE_DAY
        || event.last_interval >= ONE_DAY
}

pub fn classify(event: &ReviewEvent) -> Classification {
    if !passes_inclusion(event) || !completes_interval(event) {
        return Classification::Excluded;
    }

    if event.ease == 1 {
        Classification::Failure
    } else {
        Classification::Success
    }
}
