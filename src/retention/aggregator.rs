//! Accumulates success/failure counts per (deck, note type, card type).

use super::classifier::{Classification, classify, passes_inclusion};
use crate::database::CollectionSource;
use crate::error::Result;
use crate::models::{GroupCounters, GroupKey, ReviewEvent};
use std::collections::HashMap;
use tracing::debug;

/// Per-group counters, kept in the order groups were first seen.
#[derive(Debug, Default)]
pub struct Aggregation {
    groups: Vec<(GroupKey, GroupCounters)>,
    index: HashMap<GroupKey, usize>,
    /// Events whose card could not be resolved
    pub unknown_cards: usize,
}

impl Aggregation {
    /// Bucket for `key`, created zeroed on first use
    fn bucket(&mut self, key: GroupKey) -> &mut GroupCounters {
        let idx = match self.index.get(&key) {
            Some(&idx) => idx,
            None => {
                self.groups.push((key, GroupCounters::default()));
                self.index.insert(key, self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        &mut self.groups[idx].1
    }

    pub fn get(&self, key: &GroupKey) -> Option<&GroupCounters> {
        self.index.get(key).map(|&idx| &self.groups[idx].1)
    }

    pub fn groups(&self) -> &[(GroupKey, GroupCounters)] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Counts every event against the group of its card.
///
/// Events for cards the store does not know are skipped, as are events failing
/// the inclusion filter. An event that passes inclusion but not the interval
/// filter still opens its group's bucket, so such a group shows up with a
/// total of 0.
pub fn aggregate(events: &[ReviewEvent], source: &dyn CollectionSource) -> Result<Aggregation> {
    let mut aggregation = Aggregation::default();

    for event in events {
        if !passes_inclusion(event) {
            continue;
        }

        let Some(key) = source.card_group(event.card_id)? else {
            debug!("Skipping review of unknown card {}", event.card_id);
            aggregation.unknown_cards += 1;
            continue;
        };

        let counters = aggregation.bucket(key);
        match classify(event) {
            Classification::Success => counters.record_success(),
            Classification::Failure => counters.record_failure(),
            Classification::Excluded => {}
        }
    }

    debug!(
        "Aggregated {} events into {} groups ({} unknown cards)",
        events.len(),
        aggregation.len(),
        aggregation.unknown_cards
    );
    Ok(aggregation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::MemoryCollection;
    use crate::retention::classifier::RELEARNING_CODE;

    fn review(card_id: i64, ease: i64, last_interval: i64) -> ReviewEvent {
        ReviewEvent {
            card_id,
            ease,
            event_type: 0,
            last_interval,
            ease_factor: 2500,
        }
    }

    fn create_test_collection() -> MemoryCollection {
        MemoryCollection::new()
            .with_note(100, 7)
            .with_note(200, 8)
            .with_card(1, 5, 100, 0)
            .with_card(2, 5, 100, 1)
            .with_card(3, 6, 200, 0)
    }

    fn key(deck_id: i64, note_type_id: i64, card_type_ordinal: i64) -> GroupKey {
        GroupKey {
            deck_id,
            note_type_id,
            card_type_ordinal,
        }
    }

    #[test]
    fn test_counts_success_and_failure() {
        let collection = create_test_collection();
        let events = vec![review(1, 1, 86401), review(1, 3, 86401)];

        let aggregation = aggregate(&events, &collection).unwrap();
        let counters = aggregation.get(&key(5, 7, 0)).unwrap();

        assert_eq!(counters.failure_count, 1);
        assert_eq!(counters.success_count, 1);
        assert_eq!(aggregation.len(), 1);
    }

    #[test]
    fn test_groups_by_card_type() {
        let collection = create_test_collection();
        let events = vec![
            review(1, 3, 86401),
            review(2, 1, 86401),
            review(3, 4, 86401),
            review(2, 2, 86401),
        ];

        let aggregation = aggregate(&events, &collection).unwrap();

        assert_eq!(aggregation.len(), 3);
        assert_eq!(aggregation.get(&key(5, 7, 0)).unwrap().total(), 1);
        assert_eq!(aggregation.get(&key(5, 7, 1)).unwrap().total(), 2);
        assert_eq!(aggregation.get(&key(6, 8, 0)).unwrap().success_count, 1);
    }

    #[test]
    fn test_discovery_order_is_kept() {
        let collection = create_test_collection();
        let events = vec![review(3, 3, 86401), review(1, 3, 86401), review(3, 1, 86401)];

        let aggregation = aggregate(&events, &collection).unwrap();
        let keys: Vec<GroupKey> = aggregation.groups().iter().map(|(k, _)| *k).collect();

        assert_eq!(keys, vec![key(6, 8, 0), key(5, 7, 0)]);
    }

    #[test]
    fn test_unknown_card_is_skipped() {
        let collection = create_test_collection();
        let events = vec![review(42, 1, 86401), review(1, 3, 86401)];

        let aggregation = aggregate(&events, &collection).unwrap();

        assert_eq!(aggregation.unknown_cards, 1);
        assert_eq!(aggregation.len(), 1);
        assert_eq!(aggregation.get(&key(5, 7, 0)).unwrap().total(), 1);
    }

    #[test]
    fn test_sub_day_review_leaves_counters_untouched() {
        let collection = create_test_collection();
        let events = vec![review(1, 3, 86401), review(1, 1, 3600)];

        let aggregation = aggregate(&events, &collection).unwrap();
        let counters = aggregation.get(&key(5, 7, 0)).unwrap();

        assert_eq!(counters.success_count, 1);
        assert_eq!(counters.failure_count, 0);
    }

    #[test]
    fn test_group_with_only_sub_day_reviews_has_zero_total() {
        let collection = create_test_collection();
        let events = vec![review(2, 3, 3600), review(2, 1, -60)];

        let aggregation = aggregate(&events, &collection).unwrap();

        assert_eq!(aggregation.len(), 1);
        assert_eq!(aggregation.get(&key(5, 7, 1)).unwrap().total(), 0);
    }

    #[test]
    fn test_filtered_entries_open_no_group() {
        let collection = create_test_collection();
        let mut relearn = review(1, 3, 86401);
        relearn.event_type = RELEARNING_CODE;
        relearn.ease_factor = 0;
        let events = vec![review(1, 0, 86401), relearn];

        let aggregation = aggregate(&events, &collection).unwrap();

        assert!(aggregation.is_empty());
        assert_eq!(aggregation.unknown_cards, 0);
    }

    #[test]
    fn test_order_of_events_does_not_change_counts() {
        let collection = create_test_collection();
        let mut events = vec![
            review(1, 1, 86401),
            review(2, 3, 86401),
            review(1, 4, 86401),
            review(3, 1, -86400),
            review(1, 2, 86401),
        ];

        let forward = aggregate(&events, &collection).unwrap();
        events.reverse();
        let backward = aggregate(&events, &collection).unwrap();

        for (key, counters) in forward.groups() {
            assert_eq!(backward.get(key), Some(counters));
        }
        assert_eq!(forward.len(), backward.len());
    }
}
