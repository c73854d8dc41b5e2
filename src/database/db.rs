//! SQLite-backed collection store
//!
//! Reads the review log, cards, notes, note types, templates, decks and deck
//! configs from a collection file. The file is opened read-only; nothing here
//! ever writes to a user's collection.
//!
//! The layout read is the one [`init_schema`] creates: deck configs live in
//! their own `deck_config` table and every interval is in seconds. A host
//! application's own collection file (serialized deck configs, positive
//! intervals in days) is not readable as-is and has to be converted first.

use super::CollectionSource;
use crate::error::Result;
use crate::models::{CardTypeName, Deck, DeckConfig, GroupKey, ReviewEvent};
use rusqlite::{Connection, OpenFlags, OptionalExtension, params};
use std::path::Path;
use tracing::{debug, info};

/// Creates the collection tables the store reads from.
///
/// Only needed when building a collection from scratch (fixtures, demos).
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS revlog (
            id INTEGER PRIMARY KEY,
            cid INTEGER NOT NULL,
            ease INTEGER NOT NULL,
            ivl INTEGER NOT NULL DEFAULT 0,
            lastIvl INTEGER NOT NULL,
            factor INTEGER NOT NULL,
            type INTEGER NOT NULL
        );
        CREATE TABLE IF NOT EXISTS cards (
            id INTEGER PRIMARY KEY,
            nid INTEGER NOT NULL,
            did INTEGER NOT NULL,
            ord INTEGER NOT NULL
        );
        CREATE TABLE IF NOT EXISTS notes (
            id INTEGER PRIMARY KEY,
            mid INTEGER NOT NULL
        );
        CREATE TABLE IF NOT EXISTS notetypes (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS templates (
            ntid INTEGER NOT NULL,
            ord INTEGER NOT NULL,
            name TEXT NOT NULL,
            PRIMARY KEY (ntid, ord)
        );
        CREATE TABLE IF NOT EXISTS decks (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            conf INTEGER NOT NULL
        );
        CREATE TABLE IF NOT EXISTS deck_config (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            desired_retention REAL
        );",
    )?;
    Ok(())
}

pub struct SqliteCollection {
    conn: Connection,
}

impl SqliteCollection {
    /// Opens a collection file without write access
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        info!("Opened collection {}", path.display());
        Ok(Self { conn })
    }

    /// Wraps an already open connection (e.g. an in-memory fixture)
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }
}

impl CollectionSource for SqliteCollection {
    fn review_events(&self) -> Result<Vec<ReviewEvent>> {
        let mut stmt = self
            .conn
            .prepare("SELECT cid, ease, type, lastIvl, factor FROM revlog ORDER BY id")?;

        let events = stmt
            .query_map([], |row| {
                Ok(ReviewEvent {
                    card_id: row.get(0)?,
                    ease: row.get(1)?,
                    event_type: row.get(2)?,
                    last_interval: row.get(3)?,
                    ease_factor: row.get(4)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        debug!("Read {} review log entries", events.len());
        Ok(events)
    }

    fn card_group(&self, card_id: i64) -> Result<Option<GroupKey>> {
        // Called once per review event, so keep the statement cached
        let mut stmt = self.conn.prepare_cached(
            "SELECT c.did, n.mid, c.ord
             FROM cards c
             JOIN notes n ON n.id = c.nid
             WHERE c.id = ?1",
        )?;

        let key = stmt
            .query_row(params![card_id], |row| {
                Ok(GroupKey {
                    deck_id: row.get(0)?,
                    note_type_id: row.get(1)?,
                    card_type_ordinal: row.get(2)?,
                })
            })
            .optional()?;

        Ok(key)
    }

    fn deck(&self, deck_id: i64) -> Result<Option<Deck>> {
        let deck = self
            .conn
            .query_row(
                "SELECT id, name, conf FROM decks WHERE id = ?1",
                params![deck_id],
                |row| {
                    Ok(Deck {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        config_id: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(deck)
    }

    fn deck_config(&self, config_id: i64) -> Result<Option<DeckConfig>> {
        let config = self
            .conn
            .query_row(
                "SELECT id, name, desired_retention FROM deck_config WHERE id = ?1",
                params![config_id],
                |row| {
                    Ok(DeckConfig {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        desired_retention: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(config)
    }

    fn card_type(&self, note_type_id: i64, ordinal: i64) -> Result<Option<CardTypeName>> {
        let name = self
            .conn
            .query_row(
                "SELECT nt.name, t.name
                 FROM templates t
                 JOIN notetypes nt ON nt.id = t.ntid
                 WHERE t.ntid = ?1 AND t.ord = ?2",
                params![note_type_id, ordinal],
                |row| {
                    Ok(CardTypeName {
                        note_type_name: row.get(0)?,
                        card_type_name: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_collection() -> SqliteCollection {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        conn.execute_batch(
            "INSERT INTO deck_config (id, name, desired_retention) VALUES (1, 'Default', 0.9);
             INSERT INTO deck_config (id, name, desired_retention) VALUES (2, 'Legacy', NULL);
             INSERT INTO decks (id, name, conf) VALUES (5, 'Polish', 1);
             INSERT INTO notetypes (id, name) VALUES (7, 'Basic (and reversed card)');
             INSERT INTO templates (ntid, ord, name) VALUES (7, 0, 'Card 1');
             INSERT INTO templates (ntid, ord, name) VALUES (7, 1, 'Card 2');
             INSERT INTO notes (id, mid) VALUES (100, 7);
             INSERT INTO cards (id, nid, did, ord) VALUES (1, 100, 5, 1);
             INSERT INTO revlog (id, cid, ease, lastIvl, factor, type) VALUES (20, 1, 3, 86401, 2500, 0);
             INSERT INTO revlog (id, cid, ease, lastIvl, factor, type) VALUES (10, 1, 1, -600, 2500, 1);",
        )
        .unwrap();

        SqliteCollection::from_connection(conn)
    }

    #[test]
    fn test_review_events_ordered_by_log_id() {
        let collection = create_test_collection();
        let events = collection.review_events().unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].ease, 1);
        assert_eq!(events[0].event_type, 1);
        assert_eq!(events[0].last_interval, -600);
        assert_eq!(events[1].ease, 3);
        assert_eq!(events[1].ease_factor, 2500);
    }

    #[test]
    fn test_card_group_joins_note_type() {
        let collection = create_test_collection();

        let key = collection.card_group(1).unwrap();
        assert_eq!(
            key,
            Some(GroupKey {
                deck_id: 5,
                note_type_id: 7,
                card_type_ordinal: 1,
            })
        );
        assert_eq!(collection.card_group(999).unwrap(), None);
    }

    #[test]
    fn test_deck_and_config_lookup() {
        let collection = create_test_collection();

        let deck = collection.deck(5).unwrap().unwrap();
        assert_eq!(deck.name, "Polish");
        assert_eq!(deck.config_id, 1);
        assert!(collection.deck(6).unwrap().is_none());

        let config = collection.deck_config(1).unwrap().unwrap();
        assert_eq!(config.name, "Default");
        assert_eq!(config.desired_retention, Some(0.9));

        let legacy = collection.deck_config(2).unwrap().unwrap();
        assert_eq!(legacy.desired_retention, None);
    }

    #[test]
    fn test_card_type_lookup() {
        let collection = create_test_collection();

        let name = collection.card_type(7, 1).unwrap().unwrap();
        assert_eq!(name.note_type_name, "Basic (and reversed card)");
        assert_eq!(name.card_type_name, "Card 2");
        assert!(collection.card_type(7, 2).unwrap().is_none());
    }

    #[test]
    fn test_open_is_read_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("collection.anki2");
        {
            let conn = Connection::open(&path).unwrap();
            init_schema(&conn).unwrap();
        }

        let collection = SqliteCollection::open(&path).unwrap();
        let write = collection
            .conn
            .execute("INSERT INTO notetypes (id, name) VALUES (1, 'Basic')", []);
        assert!(write.is_err());
        assert!(collection.review_events().unwrap().is_empty());
    }

    #[test]
    fn test_open_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = SqliteCollection::open(dir.path().join("missing.anki2"));
        assert!(result.is_err());
    }
}
