use std::error::Error;
use std::io::{stdout, Stdout};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use log::{info, warn};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::game::{Bounds, Direction, Game};
use crate::io::ScoreStore;
use crate::scores::{is_interrupt, EditAction};
use crate::ui::{draw_game, draw_scoreboard};
use crate::TICK_MS;

type Term = Terminal<CrosstermBackend<Stdout>>;

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut tui = TuiGuard::new()?;
    let terminal = tui.terminal_mut();

    let Some(score) = play(terminal)? else {
        info!("interrupted during play");
        return Ok(());
    };
    if is_interrupt(&read_key()?) {
        info!("interrupted at game over");
        return Ok(());
    }
    edit_scores(terminal, score, &ScoreStore::default())
}

fn play(terminal: &mut Term) -> Result<Option<usize>, Box<dyn Error>> {
    let mut rng = rand::thread_rng();
    let bounds = screen_bounds(terminal)?;
    info!("new game on {}x{} screen", bounds.width, bounds.height);
    let mut game = Game::new(bounds, &mut rng);

    loop {
        // At most one key per tick, without blocking.
        if event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if is_interrupt(&key) {
                    return Ok(None);
                }
                if let Some(direction) = Direction::from_key(key.code) {
                    game.steer(direction);
                }
            }
        }

        thread::sleep(Duration::from_millis(TICK_MS));

        let bounds = screen_bounds(terminal)?;
        let outcome = game.tick(bounds, &mut rng);
        terminal.draw(|frame| draw_game(frame, &game))?;
        if outcome.game_over {
            return Ok(Some(game.score()));
        }
    }
}

fn edit_scores(terminal: &mut Term, score: usize, store: &ScoreStore) -> Result<(), Box<dyn Error>> {
    let mut board = store.load()?;
    board.insert_score(score as i64);

    loop {
        terminal.draw(|frame| draw_scoreboard(frame, &board))?;
        let key = match read_input()? {
            Input::Key(key) => key,
            Input::Resize => continue,
        };
        match board.handle_key(key) {
            EditAction::Continue => {}
            EditAction::Finish => break,
            EditAction::Abort => {
                warn!("name entry aborted, {} left untouched", store.path().display());
                return Ok(());
            }
        }
    }
    store.save(&board)?;
    Ok(())
}

fn screen_bounds(terminal: &Term) -> Result<Bounds, Box<dyn Error>> {
    let area = terminal.size()?;
    Ok(Bounds::new(area.height, area.width))
}

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Key(KeyEvent),
    Resize,
}

fn classify(ev: Event) -> Option<Input> {
    match ev {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(Input::Key(key)),
        Event::Resize(_, _) => Some(Input::Resize),
        _ => None,
    }
}

/// Blocks until a key press or a resize arrives.
fn read_input() -> Result<Input, Box<dyn Error>> {
    loop {
        if let Some(input) = classify(event::read()?) {
            return Ok(input);
        }
    }
}

/// Blocks until a key press arrives.
fn read_key() -> Result<KeyEvent, Box<dyn Error>> {
    loop {
        if let Input::Key(key) = read_input()? {
            return Ok(key);
        }
    }
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        match Self::enter() {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                // No guard exists yet to undo raw mode.
                let _ = execute!(stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                Err(err)
            }
        }
    }

    fn enter() -> Result<Term, Box<dyn Error>> {
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(terminal)
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
