//! Note types and their card templates
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq)]
pub struct CardTemplate {
    pub ordinal: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NoteType {
    pub id: i64,
    pub name: String,
    pub templates: Vec<CardTemplate>,
}

impl NoteType {
    pub fn template(&self, ordinal: i64) -> Option<&CardTemplate> {
        self.templates.iter().find(|t| t.ordinal == ordinal)
    }
}

/// Display names resolved for a (note type, template ordinal) pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTypeName {
    pub note_type_name: String,
    pub card_type_name: String,
}
