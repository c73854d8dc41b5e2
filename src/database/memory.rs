//! In-memory collection store.
//!
//! Holds a snapshot of reviews and metadata in plain collections. Useful for
//! fixtures and for callers that already have the data loaded.

use super::CollectionSource;
use crate::error::Result;
use crate::models::{
    Card, CardTemplate, CardTypeName, Deck, DeckConfig, GroupKey, Note, NoteType, ReviewEvent,
};
use std::collections::HashMap;

#[derive(Default)]
pub struct MemoryCollection {
    reviews: Vec<ReviewEvent>,
    cards: HashMap<i64, Card>,
    notes: HashMap<i64, Note>,
    note_types: HashMap<i64, NoteType>,
    decks: HashMap<i64, Deck>,
    configs: HashMap<i64, DeckConfig>,
}

impl MemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, id: i64, name: &str, desired_retention: Option<f64>) -> Self {
        self.configs.insert(
            id,
            DeckConfig {
                id,
                name: name.to_string(),
                desired_retention,
            },
        );
        self
    }

    pub fn with_deck(mut self, id: i64, name: &str, config_id: i64) -> Self {
        self.decks.insert(
            id,
            Deck {
                id,
                name: name.to_string(),
                config_id,
            },
        );
        self
    }

    /// Adds a note type; templates get ordinals in the order given
    pub fn with_note_type(mut self, id: i64, name: &str, templates: &[&str]) -> Self {
        let templates = templates
            .iter()
            .enumerate()
            .map(|(ordinal, name)| CardTemplate {
                ordinal: ordinal as i64,
                name: name.to_string(),
            })
            .collect();

        self.note_types.insert(
            id,
            NoteType {
                id,
                name: name.to_string(),
                templates,
            },
        );
        self
    }

    pub fn with_note(mut self, id: i64, note_type_id: i64) -> Self {
        self.notes.insert(id, Note { id, note_type_id });
        self
    }

    pub fn with_card(mut self, id: i64, deck_id: i64, note_id: i64, template_ordinal: i64) -> Self {
        self.cards.insert(
            id,
            Card {
                id,
                deck_id,
                note_id,
                template_ordinal,
            },
        );
        self
    }

    pub fn with_review(mut self, event: ReviewEvent) -> Self {
        self.reviews.push(event);
        self
    }
}

impl CollectionSource for MemoryCollection {
    fn review_events(&self) -> Result<Vec<ReviewEvent>> {
        Ok(self.reviews.clone())
    }

    fn card_group(&self, card_id: i64) -> Result<Option<GroupKey>> {
        // A card whose note is missing cannot be placed in a group either
        let key = self.cards.get(&card_id).and_then(|card| {
            self.notes.get(&card.note_id).map(|note| GroupKey {
                deck_id: card.deck_id,
                note_type_id: note.note_type_id,
                card_type_ordinal: card.template_ordinal,
            })
        });
        Ok(key)
    }

    fn deck(&self, deck_id: i64) -> Result<Option<Deck>> {
        Ok(self.decks.get(&deck_id).cloned())
    }

    fn deck_config(&self, config_id: i64) -> Result<Option<DeckConfig>> {
        Ok(self.configs.get(&config_id).cloned())
    }

    fn card_type(&self, note_type_id: i64, ordinal: i64) -> Result<Option<CardTypeName>> {
        let name = self.note_types.get(&note_type_id).and_then(|note_type| {
            note_type.template(ordinal).map(|template| CardTypeName {
                note_type_name: note_type.name.clone(),
                card_type_name: template.name.clone(),
            })
        });
        Ok(name)
    }
}
