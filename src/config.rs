// Shared game constants.
pub const TICK_MS: u64 = 100;
pub const INITIAL_LEN: usize = 4;
pub const FRUIT_MARGIN: i32 = 5; // keep fruit this many cells off every edge
pub const MAX_ENTRIES: usize = 5;
pub const NAME_MAX: usize = 10;
pub const SCORE_FILE: &str = "snake_scores.json";
// Non-alphanumeric characters accepted in a scoreboard name.
pub const NAME_SYMBOLS: &str = "!@#$%^&*()_+;:'\\|{}[],.<>/?-= ";
// Scoreboard columns: names at a quarter of the width, scores this far past the middle.
pub const SCORE_COL_OFFSET: i32 = 30;
