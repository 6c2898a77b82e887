use ratatui::prelude::*;

use crate::scores::{EditState, Scoreboard};
use crate::ui::{highlight_style, Canvas};
use crate::{MAX_ENTRIES, SCORE_COL_OFFSET};

const HIGH_SCORE: &str = "You got a high score.";
const NO_HIGH_SCORE: &str = "You didn't get a high score. Press Enter to continue.";

pub fn draw_scoreboard(frame: &mut Frame, board: &Scoreboard) {
    let area = frame.size();
    let mut canvas = Canvas::new(area);
    let mid_row = area.height as i32 / 2;
    let mid_col = area.width as i32 / 2;
    let name_col = mid_col / 2;
    let editing = board.state() == EditState::Editing;

    for (idx, entry) in board.entries.iter().enumerate() {
        let row = mid_row - (MAX_ENTRIES as i32 - idx as i32);
        let style = if board.active == Some(idx) {
            highlight_style()
        } else {
            Style::default()
        };
        canvas.put_str(row, name_col, &entry.name, style);
        canvas.put_str(row, mid_col + SCORE_COL_OFFSET, &entry.score.to_string(), style);
    }

    let (status, status_style) = if editing {
        (HIGH_SCORE, highlight_style())
    } else {
        (NO_HIGH_SCORE, Style::default())
    };
    canvas.put_str(mid_row - 9, name_col, status, status_style);
    canvas.render(frame, area);

    // Text cursor after the name being typed.
    if let (Some(idx), Some(entry)) = (board.active, board.active_entry()) {
        let row = mid_row - (MAX_ENTRIES as i32 - idx as i32);
        let col = name_col + entry.name.chars().count() as i32;
        if row >= 0 && col >= 0 && (row as u16) < area.height && (col as u16) < area.width {
            frame.set_cursor(col as u16, row as u16);
        }
    }
}
