//! Read-only access to the collection store.
//!
//! The retention pipeline only needs the five lookups on [`CollectionSource`];
//! [`db::SqliteCollection`] serves them from a collection file and
//! [`memory::MemoryCollection`] from in-memory fixtures.

pub mod db;
pub mod memory;

use crate::error::Result;
use crate::models::{CardTypeName, Deck, DeckConfig, GroupKey, ReviewEvent};

pub trait CollectionSource {
    /// All review log entries, in the order they were recorded
    fn review_events(&self) -> Result<Vec<ReviewEvent>>;

    /// Resolves a card to the (deck, note type, template ordinal) it is aggregated under
    fn card_group(&self, card_id: i64) -> Result<Option<GroupKey>>;

    fn deck(&self, deck_id: i64) -> Result<Option<Deck>>;

    fn deck_config(&self, config_id: i64) -> Result<Option<DeckConfig>>;

    fn card_type(&self, note_type_id: i64, ordinal: i64) -> Result<Option<CardTypeName>>;
}
