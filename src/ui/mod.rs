use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::game::{Game, Point};

pub mod render;

pub use render::draw_scoreboard;

/// Character grid the size of the frame. Writes outside it are dropped, so
/// callers can plot cells that have left the screen after a resize.
pub(crate) struct Canvas {
    width: i32,
    height: i32,
    cells: Vec<Vec<(char, Style)>>,
}

impl Canvas {
    pub(crate) fn new(area: Rect) -> Self {
        Self {
            width: area.width as i32,
            height: area.height as i32,
            cells: vec![vec![(' ', Style::default()); area.width as usize]; area.height as usize],
        }
    }

    pub(crate) fn put(&mut self, row: i32, col: i32, ch: char, style: Style) {
        if row >= 0 && row < self.height && col >= 0 && col < self.width {
            self.cells[row as usize][col as usize] = (ch, style);
        }
    }

    pub(crate) fn put_str(&mut self, row: i32, col: i32, text: &str, style: Style) {
        for (i, ch) in text.chars().enumerate() {
            self.put(row, col + i as i32, ch, style);
        }
    }

    pub(crate) fn render(self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self.cells.into_iter().map(row_to_line).collect();
        frame.render_widget(Paragraph::new(lines), area);
    }
}

// Merge runs of equally styled cells into one span.
fn row_to_line(row: Vec<(char, Style)>) -> Line<'static> {
    let mut spans: Vec<Span> = Vec::new();
    let mut run = String::new();
    let mut run_style = Style::default();
    for (ch, style) in row {
        if style != run_style && !run.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut run), run_style));
        }
        run_style = style;
        run.push(ch);
    }
    if !run.is_empty() {
        spans.push(Span::styled(run, run_style));
    }
    Line::from(spans)
}

pub fn fruit_style() -> Style {
    Style::default().fg(Color::Red).bg(Color::Red)
}

pub fn snake_style() -> Style {
    Style::default().fg(Color::Green).bg(Color::Green)
}

pub fn highlight_style() -> Style {
    Style::default().fg(Color::Yellow).bg(Color::Black)
}

pub fn draw_game(frame: &mut Frame, game: &Game) {
    let area = frame.size();
    let mut canvas = Canvas::new(area);
    let (h, w) = (area.height as i32, area.width as i32);

    // Head included, so the front of the snake is where the next fruit check happens.
    for &Point { row, col } in &game.snake {
        canvas.put(row, col, ' ', snake_style());
    }
    canvas.put(game.fruit.row, game.fruit.col, ' ', fruit_style());

    // Length in the top right corner.
    canvas.put_str(2, w - 4, &game.score().to_string(), Style::default());

    if game.game_over {
        canvas.put_str(h / 2, w / 2, "Game Over.", Style::default());
    }

    canvas.render(frame, area);
}
