use log::{debug, info};
use rand::Rng;

use crate::game::{spawn_fruit, Bounds, Direction, Point};
use crate::INITIAL_LEN;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub grew: bool,
    pub game_over: bool,
}

pub struct Game {
    pub snake: Vec<Point>,
    pub fruit: Point,
    pub direction: Direction,
    pub game_over: bool,
}

impl Game {
    pub fn new<R: Rng>(bounds: Bounds, rng: &mut R) -> Self {
        let mid_row = bounds.height / 2;
        let mid_col = bounds.width / 2;
        let snake: Vec<Point> = (0..INITIAL_LEN as i32)
            .map(|i| Point::new(mid_row, mid_col - i))
            .collect();
        let fruit = spawn_fruit(bounds, &snake, rng);
        Self::with_state(snake, fruit, Direction::Right)
    }

    pub fn with_state(snake: Vec<Point>, fruit: Point, direction: Direction) -> Self {
        Self {
            snake,
            fruit,
            direction,
            game_over: false,
        }
    }

    pub fn head(&self) -> Point {
        self.snake[0]
    }

    /// Final score: number of cells including the head.
    pub fn score(&self) -> usize {
        self.snake.len()
    }

    /// Reversing straight into the body is allowed.
    pub fn steer(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Advances one step. Fruit is eaten when the head was already on it at
    /// the start of the tick, so growth shows up one tick after arrival.
    pub fn tick<R: Rng>(&mut self, bounds: Bounds, rng: &mut R) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if self.game_over {
            outcome.game_over = true;
            return outcome;
        }

        if self.head() == self.fruit {
            self.snake.insert(0, self.fruit);
            self.fruit = spawn_fruit(bounds, &self.snake, rng);
            outcome.grew = true;
            debug!("snake grew to {}", self.snake.len());
        }

        let (d_row, d_col) = self.direction.vector();
        let new_head = self.head().shifted(d_row, d_col);
        self.snake.insert(0, new_head);
        self.snake.pop();

        // The new head itself is bounds-checked once it becomes body next tick.
        let crashed = self.snake[1..]
            .iter()
            .any(|&section| section == new_head || !bounds.contains(section));
        if crashed {
            self.game_over = true;
            outcome.game_over = true;
            info!("game over with score {}", self.score());
        }
        outcome
    }
}
