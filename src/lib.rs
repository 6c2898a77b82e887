pub mod app;
mod config;
pub mod game;
pub mod io;
pub mod scores;
pub mod ui;

pub use config::{
    FRUIT_MARGIN, INITIAL_LEN, MAX_ENTRIES, NAME_MAX, NAME_SYMBOLS, SCORE_COL_OFFSET, SCORE_FILE,
    TICK_MS,
};
pub use game::{Game, TickOutcome};
pub use io::{ScoreError, ScoreStore};
pub use scores::{ScoreEntry, Scoreboard};
