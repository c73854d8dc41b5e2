pub mod card;
pub mod deck;
pub mod note_type;
pub mod report_row;
pub mod review_event;

pub use card::{Card, GroupCounters, GroupKey, Note};
pub use deck::{Deck, DeckConfig};
pub use note_type::{CardTemplate, CardTypeName, NoteType};
pub use report_row::ReportRow;
pub use review_event::ReviewEvent;
