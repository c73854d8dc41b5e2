//! Cards, notes and the aggregation key derived from them.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    pub id: i64,
    pub deck_id: i64,
    pub note_id: i64,
    pub template_ordinal: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Note {
    pub id: i64,
    pub note_type_id: i64,
}

/// Unit of aggregation: one row of the report before metadata is joined in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub deck_id: i64,
    pub note_type_id: i64,
    pub card_type_ordinal: i64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GroupCounters {
    pub success_count: u64,
    pub failure_count: u64,
}

impl GroupCounters {
    pub fn record_success(&mut self) {
        self.success_count += 1;
    }

    pub fn record_failure(&mut self) {
        self.failure_count += 1;
    }

    pub fn total(&self) -> u64 {
        self.success_count + self.failure_count
    }

    /// Fraction of successful recalls, 0 when nothing was counted.
    pub fn retention(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.success_count as f64 / total as f64,
        }
    }
}
