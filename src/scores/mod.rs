pub mod edit;
pub mod entry;

pub use edit::{is_interrupt, is_name_char, EditAction, EditState};
pub use entry::{default_entries, ScoreEntry, Scoreboard};
