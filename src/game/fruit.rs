use log::debug;
use rand::Rng;

use crate::game::{Bounds, Point};
use crate::FRUIT_MARGIN;

/// Picks a free cell inside the board, keeping `FRUIT_MARGIN` cells away from
/// each edge when the screen is large enough for it.
pub fn spawn_fruit<R: Rng>(bounds: Bounds, snake: &[Point], rng: &mut R) -> Point {
    let (row_lo, row_hi) = axis_range(bounds.height);
    let (col_lo, col_hi) = axis_range(bounds.width);
    loop {
        let fruit = Point::new(
            rng.gen_range(row_lo..=row_hi),
            rng.gen_range(col_lo..=col_hi),
        );
        if snake.contains(&fruit) {
            continue;
        }
        debug!("fruit spawned at ({}, {})", fruit.row, fruit.col);
        return fruit;
    }
}

fn axis_range(len: i32) -> (i32, i32) {
    let last = (len - 1).max(0);
    if last - FRUIT_MARGIN >= FRUIT_MARGIN {
        (FRUIT_MARGIN, last - FRUIT_MARGIN)
    } else {
        (0, last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn stays_inside_margin() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = Bounds::new(24, 80);
        for _ in 0..500 {
            let f = spawn_fruit(bounds, &[], &mut rng);
            assert!((5..=18).contains(&f.row), "row {}", f.row);
            assert!((5..=74).contains(&f.col), "col {}", f.col);
        }
    }

    #[test]
    fn never_lands_on_snake() {
        let mut rng = StdRng::seed_from_u64(11);
        let bounds = Bounds::new(12, 12);
        // Interior is rows/cols 5..=6; occupy three of its four cells.
        let snake = [Point::new(5, 5), Point::new(5, 6), Point::new(6, 5)];
        for _ in 0..100 {
            assert_eq!(spawn_fruit(bounds, &snake, &mut rng), Point::new(6, 6));
        }
    }

    #[test]
    fn small_screen_drops_margin() {
        assert_eq!(axis_range(8), (0, 7));
        assert_eq!(axis_range(11), (5, 5));
        assert_eq!(axis_range(0), (0, 0));
    }
}
