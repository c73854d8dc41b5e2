//! Error type shared by the collection store, the retention pipeline and the exporters.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RetentionError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Deck not found: {0}")]
    DeckNotFound(i64),

    #[error("Deck config {config_id} not found (referenced by deck {deck_id})")]
    DeckConfigNotFound { deck_id: i64, config_id: i64 },

    #[error("Card type not found: note type {note_type_id}, ordinal {ordinal}")]
    CardTypeNotFound { note_type_id: i64, ordinal: i64 },
}

pub type Result<T> = std::result::Result<T, RetentionError>;
