#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn shifted(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    pub fn manhattan(self, other: Point) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }
}

/// Screen dimensions in cells, re-read every tick so resizes take effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub height: i32,
    pub width: i32,
}

impl Bounds {
    pub fn new(height: u16, width: u16) -> Self {
        Self {
            height: height as i32,
            width: width as i32,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.row >= 0 && p.row < self.height && p.col >= 0 && p.col < self.width
    }
}
