pub mod board;
pub mod direction;
pub mod fruit;
pub mod state;

pub use board::{Bounds, Point};
pub use direction::Direction;
pub use fruit::spawn_fruit;
pub use state::{Game, TickOutcome};
