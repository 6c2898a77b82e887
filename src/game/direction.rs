use crossterm::event::KeyCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step as `(d_row, d_col)`.
    pub fn vector(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Char('k') => Some(Direction::Up),
            KeyCode::Char('j') => Some(Direction::Down),
            KeyCode::Char('h') => Some(Direction::Left),
            KeyCode::Char('l') => Some(Direction::Right),
            _ => None,
        }
    }
}
