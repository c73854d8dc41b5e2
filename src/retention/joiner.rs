//! Joins aggregated counters with deck, deck config and card type metadata.

use crate::database::CollectionSource;
use crate::error::{Result, RetentionError};
use crate::models::{GroupCounters, GroupKey, ReportRow};

/// Rounds to 3 decimal places for display; exact ties go to the even neighbour
pub fn round_retention(retention: f64) -> f64 {
    (retention * 1000.0).round_ties_even() / 1000.0
}

/// Builds the report row for one group.
///
/// Every lookup must succeed: a group pointing at a missing deck, deck config
/// or card template means the collection is inconsistent, and the error names
/// the offending key.
pub fn enrich(
    key: &GroupKey,
    counters: &GroupCounters,
    source: &dyn CollectionSource,
) -> Result<ReportRow> {
    let deck = source
        .deck(key.deck_id)?
        .ok_or(RetentionError::DeckNotFound(key.deck_id))?;

    let config = source
        .deck_config(deck.config_id)?
        .ok_or(RetentionError::DeckConfigNotFound {
            deck_id: deck.id,
            config_id: deck.config_id,
        })?;

    let names = source
        .card_type(key.note_type_id, key.card_type_ordinal)?
        .ok_or(RetentionError::CardTypeNotFound {
            note_type_id: key.note_type_id,
            ordinal: key.card_type_ordinal,
        })?;

    let retention = counters.retention();
    let under_target = retention < config.target_retention();

    Ok(ReportRow {
        config_name: config.name,
        deck_name: deck.name,
        note_type_name: names.note_type_name,
        card_type_name: names.card_type_name,
        total: counters.total(),
        retention: round_retention(retention),
        desired_retention: config.desired_retention,
        under_target,
    })
}
